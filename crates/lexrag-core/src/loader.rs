//! Plain-text document loading.
//!
//! A file path yields one document; a directory yields every `.txt` file
//! beneath it in sorted path order.
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::types::Document;

pub fn load_path(path: &Path) -> Result<Vec<Document>> {
    if path.is_file() {
        return Ok(vec![load_file(path)?]);
    }
    if !path.is_dir() {
        return Err(Error::NotFound(path.display().to_string()));
    }
    let files = list_txt_files(path);
    if files.is_empty() {
        info!(dir = %path.display(), "no .txt files found");
        return Ok(vec![]);
    }
    let mut documents = Vec::with_capacity(files.len());
    for file_path in &files {
        match load_file(file_path) {
            Ok(document) => documents.push(document),
            Err(e) => warn!(path = %file_path.display(), error = %e, "skipping unreadable file"),
        }
    }
    info!(dir = %path.display(), documents = documents.len(), "loaded documents");
    Ok(documents)
}

pub fn load_file(path: &Path) -> Result<Document> {
    let text = read_file_content(path)?;
    Ok(Document::new(path.to_string_lossy(), text))
}

fn read_file_content(file_path: &Path) -> Result<String> {
    match fs::read_to_string(file_path) {
        Ok(content) => Ok(content),
        Err(_) => Ok(String::from_utf8_lossy(&fs::read(file_path)?).to_string()),
    }
}

fn list_txt_files(root: &Path) -> Vec<PathBuf> {
    let mut txt_files = Vec::new();
    for entry in walkdir::WalkDir::new(root).into_iter().filter_map(|e| e.ok()).filter(|e| e.file_type().is_file()) {
        let path = entry.path();
        if path.extension().and_then(|s| s.to_str()) == Some("txt") {
            txt_files.push(path.to_path_buf());
        }
    }
    txt_files.sort();
    txt_files
}
