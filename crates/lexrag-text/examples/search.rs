use std::env;
use std::path::{Path, PathBuf};

use lexrag_core::chunker::{Chunker, ChunkingConfig};
use lexrag_core::config::TokenizerConfig;
use lexrag_core::loader::load_path;
use lexrag_text::TfIdfIndex;

// Build an in-memory TF-IDF index over plain text files and print the best chunks.
// Usage:
//   cargo run -p lexrag-text --example search -- "your query" \
//     [--dir ../test_data/txt] [--limit 3] [--size 1000]

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        eprintln!("Usage: cargo run -p lexrag-text --example search -- <query> [--dir DIR] [--limit N] [--size N]");
        std::process::exit(1);
    }
    let mut query = String::new();
    let mut data_dir: Option<PathBuf> = None;
    let mut limit: usize = 3;
    let mut size: usize = 1000;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--dir" => {
                if i + 1 >= args.len() { eprintln!("--dir requires a path"); std::process::exit(2); }
                data_dir = Some(PathBuf::from(&args[i + 1]));
                i += 2; continue;
            }
            "--limit" => {
                if i + 1 >= args.len() { eprintln!("--limit requires a number"); std::process::exit(2); }
                limit = args[i + 1].parse().unwrap_or(limit);
                i += 2; continue;
            }
            "--size" => {
                if i + 1 >= args.len() { eprintln!("--size requires a number"); std::process::exit(2); }
                size = args[i + 1].parse().unwrap_or(size);
                i += 2; continue;
            }
            s if s.starts_with("-") => {
                eprintln!("Unknown flag: {}", s); std::process::exit(2);
            }
            s => {
                if query.is_empty() { query = s.to_string(); }
                i += 1; continue;
            }
        }
    }

    if query.is_empty() {
        eprintln!("Missing <query> argument");
        std::process::exit(1);
    }

    // Resolve data path precedence: flag > TEXT_DATA_DIR > workspace test data
    let data_dir = if let Some(d) = data_dir {
        d
    } else if let Ok(env_path) = env::var("TEXT_DATA_DIR") {
        PathBuf::from(env_path)
    } else {
        // Compute workspace root from this crate's manifest dir: ../../
        let base = Path::new(env!("CARGO_MANIFEST_DIR"))
            .ancestors().nth(2)
            .unwrap_or(Path::new("."));
        base.join("test_data/txt")
    };

    println!("TF-IDF search\n=============");
    println!("Data : {}", data_dir.display());
    println!("Query: {} (limit {})\n", query, limit);

    let documents = load_path(&data_dir)?;
    let chunker = Chunker::new(ChunkingConfig::chars(size, 0))?;
    let index = TfIdfIndex::from_documents(&documents, &chunker, &TokenizerConfig::default());
    for (i, h) in index.search(&query, limit).iter().enumerate() {
        println!("{:>2}. score={:.3} id={}\n    {}", i + 1, h.score, h.chunk.id, h.chunk.content.trim());
    }
    Ok(())
}
