use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use answer_core::document::Corpus;
use answer_core::pipeline::{AnswerConfig, QuestionAnswerer};
use answer_core::text::Tokenizer;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "answer", about = "Answer questions from a directory of .txt documents")]
struct Args {
    /// Directory holding the corpus (.txt files)
    corpus: PathBuf,

    /// JSON config file (file_matches, sentence_matches)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of documents to search for answer sentences
    #[arg(long)]
    file_matches: Option<usize>,

    /// Number of sentences to print
    #[arg(long)]
    sentence_matches: Option<usize>,

    /// Query text; prompts on stdin when omitted
    #[arg(short, long)]
    query: Option<String>,

    /// Print the full answer as JSON
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("answer_core=info")),
        )
        .init();

    let args = Args::parse();
    let (answerer, corpus) = setup(&args)?;

    let raw_query = match args.query {
        Some(q) => q,
        // stdout carries the JSON document, so the prompt goes elsewhere.
        None if args.json => prompt("Query: ", &mut io::stderr(), &mut io::stdin().lock())?,
        None => prompt("Query: ", &mut io::stdout(), &mut io::stdin().lock())?,
    };

    let answer = answerer.answer(&corpus, &raw_query);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.json {
        serde_json::to_writer_pretty(&mut out, &answer)?;
        writeln!(out)?;
    } else {
        for sentence in answer.sentence_texts() {
            writeln!(out, "{sentence}")?;
        }
    }

    Ok(())
}

/// Validate the config, then load the corpus.
fn setup(args: &Args) -> Result<(QuestionAnswerer, Corpus), Box<dyn std::error::Error>> {
    let mut config = match &args.config {
        Some(path) => AnswerConfig::from_json_file(path)?,
        None => AnswerConfig::v0(),
    };
    if let Some(n) = args.file_matches {
        config.file_matches = n;
    }
    if let Some(n) = args.sentence_matches {
        config.sentence_matches = n;
    }

    let answerer = QuestionAnswerer::new(Tokenizer::english(), config)?;

    let corpus = Corpus::load_dir(&args.corpus, answerer.tokenizer())?;
    tracing::info!(documents = corpus.len(), path = %args.corpus.display(), "corpus loaded");

    Ok((answerer, corpus))
}

fn prompt(label: &str, out: &mut impl Write, input: &mut impl BufRead) -> io::Result<String> {
    write!(out, "{label}")?;
    out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
