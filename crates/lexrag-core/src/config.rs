//! Lightweight configuration loader and path helpers.
//!
//! Uses Figment to merge built-in defaults + `lexrag.toml` +
//! `lexrag.<env>.toml` + `LEXRAG_*` env vars (`__` separates nested keys,
//! e.g. `LEXRAG_SEARCH__TOP_K=5`). Provides helpers to expand `~` and
//! `${VAR}` and to resolve relative paths against a known base directory.
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

use crate::chunker::ChunkingConfig;
use crate::error::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenizerConfig {
    /// Tokens with fewer characters are dropped.
    pub min_token_len: usize,
    /// Drop common English function words.
    pub stop_words: bool,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self { min_token_len: 1, stop_words: false }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub top_k: usize,
    /// Hits scoring below this are dropped. The default keeps every chunk.
    pub min_score: f32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { top_k: 3, min_score: 0.0 }
    }
}

impl SearchConfig {
    pub fn top_k(top_k: usize) -> Self {
        Self { top_k, ..Self::default() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptConfig {
    /// First line of every composed prompt.
    pub preamble: String,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self { preamble: "You are an AI assistant helping with questions about the provided documents.".to_string() }
    }
}

/// Typed view over every section the workspace reads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub chunking: ChunkingConfig,
    pub tokenizer: TokenizerConfig,
    pub search: SearchConfig,
    pub prompt: PromptConfig,
}

pub struct Config {
    figment: Figment,
}

impl Config {
    /// Loads for the environment named by `RUST_ENV` (default `dev`).
    pub fn load() -> anyhow::Result<Self> {
        let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "dev".to_string());
        Self::load_for_env(&env_name)
    }

    pub fn load_for_env(env_name: &str) -> anyhow::Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Settings::default())).merge(Toml::file("lexrag.toml"));
        match env_name {
            "dev" | "development" => figment = figment.merge(Toml::file("lexrag.dev.toml")),
            "prod" | "production" => figment = figment.merge(Toml::file("lexrag.prod.toml")),
            "test" | "testing" => figment = figment.merge(Toml::file("lexrag.test.toml")),
            _ => {}
        }
        figment = figment.merge(Env::prefixed("LEXRAG_").split("__"));

        let config = Self { figment };
        config.validate()?;
        Ok(config)
    }

    pub fn get<T>(&self, key: &str) -> anyhow::Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        self.figment
            .extract_inner(key)
            .map_err(|e| anyhow::anyhow!("Failed to get '{}': {}", key, e))
    }

    pub fn settings(&self) -> anyhow::Result<Settings> {
        self.figment
            .extract()
            .map_err(|e| anyhow::anyhow!("Failed to read settings: {}", e))
    }

    fn validate(&self) -> anyhow::Result<()> {
        let settings = self.settings()?;
        settings
            .chunking
            .validate()
            .map_err(|e| Error::InvalidConfig(e.to_string()))?;
        if !settings.search.min_score.is_finite() {
            return Err(Error::InvalidConfig("search.min_score must be finite".to_string()).into());
        }
        Ok(())
    }
}

/// Expand a user-provided path string:
/// - Expands leading '~' to the user's home directory
/// - Expands ${VAR} and $VAR environment variables
/// - Returns a PathBuf without attempting to canonicalize
pub fn expand_path<S: AsRef<str>>(input: S) -> PathBuf {
    let s = input.as_ref();
    // Expand env vars first
    let expanded_env = shellexpand::env(s).unwrap_or(std::borrow::Cow::Borrowed(s));
    // Expand ~ at start
    let expanded = shellexpand::tilde(&expanded_env);
    PathBuf::from(expanded.as_ref())
}

/// Resolve a possibly relative path against a given base directory after expansion.
/// If `p` is absolute, it's returned as-is; otherwise `base.join(p)` is returned.
pub fn resolve_with_base<S: AsRef<str>>(base: &Path, p: S) -> PathBuf {
    let p = expand_path(p);
    if p.is_absolute() { p } else { base.join(p) }
}
