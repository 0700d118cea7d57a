use std::env;
use std::io::{self, BufRead, Write};

use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use lexrag_core::chunker::ChunkUnit;
use lexrag_core::config::{resolve_with_base, Config};
use lexrag_core::loader::load_path;
use lexrag_core::types::SearchHit;
use lexrag_prompt::{compose_prompt, Retriever};
use lexrag_text::IndexStats;

// Answer questions about a folder of .txt files with TF-IDF retrieval.
// Prints the ranked excerpts and the prompt that would be sent to a model.
// Usage:
//   lexrag-ask [--k N] [--chunk-size N] [--overlap N] [--unit chars|words]
//              [--stop-words] [--json] <path> [question...]
// Without a question it reads questions from stdin until `exit`.

const USAGE: &str = "Usage: lexrag-ask [--k N] [--chunk-size N] [--overlap N] [--unit chars|words] [--stop-words] [--json] <path> [question...]";

#[derive(Serialize)]
struct Answer<'a> {
    question: &'a str,
    hits: &'a [SearchHit<'a>],
    prompt: String,
}

#[derive(Serialize)]
struct Ready<'a> {
    corpus: &'a str,
    documents: usize,
    index: IndexStats,
}

fn usage_error(msg: &str) -> ! {
    eprintln!("Error: {}\n{}", msg, USAGE);
    std::process::exit(2);
}

fn number_arg(args: &[String], i: usize, flag: &str) -> usize {
    match args.get(i + 1).and_then(|v| v.parse::<usize>().ok()) {
        Some(n) => n,
        None => usage_error(&format!("{} requires a number", flag)),
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let config = Config::load().map_err(|e| { eprintln!("Error loading config: {}", e); e })?;
    let mut settings = config.settings()?;

    let args: Vec<String> = env::args().skip(1).collect();
    let mut json = false;
    let mut positional = Vec::new();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--k" | "-k" => { settings.search.top_k = number_arg(&args, i, "--k"); i += 1; }
            "--chunk-size" => { settings.chunking.size = number_arg(&args, i, "--chunk-size"); i += 1; }
            "--overlap" => { settings.chunking.overlap = number_arg(&args, i, "--overlap"); i += 1; }
            "--unit" => {
                settings.chunking.unit = match args.get(i + 1).map(String::as_str) {
                    Some("chars") => ChunkUnit::Chars,
                    Some("words") => ChunkUnit::Words,
                    _ => usage_error("--unit expects chars or words"),
                };
                i += 1;
            }
            "--stop-words" => settings.tokenizer.stop_words = true,
            "--json" => json = true,
            "--help" | "-h" => { println!("{}", USAGE); return Ok(()); }
            s if s.starts_with('-') => usage_error(&format!("unknown flag {}", s)),
            s => positional.push(s.to_string()),
        }
        i += 1;
    }

    let mut positional = positional.into_iter();
    let corpus = match positional.next() {
        Some(p) => p,
        None => config.get::<String>("corpus.path").unwrap_or_else(|_| usage_error("missing <path>")),
    };
    let question = positional.collect::<Vec<_>>().join(" ");

    let corpus_path = resolve_with_base(&env::current_dir()?, &corpus);
    let documents = load_path(&corpus_path)?;
    let retriever = Retriever::from_documents(&documents, &settings)?;
    let stats = retriever.index().stats();
    info!(corpus = %corpus_path.display(), documents = documents.len(), chunks = stats.chunks, terms = stats.terms, "ready");

    if !question.is_empty() {
        return answer(&retriever, &settings.prompt.preamble, &question, json);
    }

    if json {
        println!("{}", serde_json::to_string(&Ready { corpus: &corpus, documents: documents.len(), index: stats })?);
    } else {
        println!("Ready! Ask questions about {} ({} documents). Type 'exit' to quit.\n", corpus, documents.len());
    }
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        if !json {
            print!("Your question: ");
            io::stdout().flush()?;
        }
        let Some(line) = lines.next() else { break };
        let line = line?;
        let question = line.trim();
        if question.eq_ignore_ascii_case("exit") { break; }
        if question.is_empty() { continue; }
        answer(&retriever, &settings.prompt.preamble, question, json)?;
    }
    Ok(())
}

fn answer(retriever: &Retriever, preamble: &str, question: &str, json: bool) -> anyhow::Result<()> {
    let hits = retriever.retrieve(question);
    let prompt = compose_prompt(preamble, question, &hits);
    if json {
        println!("{}", serde_json::to_string(&Answer { question, hits: &hits, prompt })?);
        return Ok(());
    }
    println!("\n🔍 {} excerpts for: \"{}\"", hits.len(), question);
    for (i, h) in hits.iter().enumerate() {
        println!("  {}. score={:.4}  id={}", i + 1, h.score, h.chunk.id);
    }
    println!("\n📝 Prompt:\n{}\n", prompt);
    Ok(())
}
