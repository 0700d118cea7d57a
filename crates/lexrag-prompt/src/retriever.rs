use std::sync::Arc;
use tracing::info;

use lexrag_core::chunker::Chunker;
use lexrag_core::config::{PromptConfig, SearchConfig, Settings};
use lexrag_core::error::Result;
use lexrag_core::types::{Document, SearchHit};
use lexrag_text::{search, TfIdfIndex};

use crate::prompt::compose_prompt;

/// A frozen index plus the search and prompt settings used to query it.
///
/// The index sits behind an `Arc` so clones share it across threads.
/// `rebuild` swaps in a whole new index; existing clones keep the old one.
#[derive(Debug, Clone)]
pub struct Retriever {
    index: Arc<TfIdfIndex>,
    search: SearchConfig,
    prompt: PromptConfig,
}

impl Retriever {
    pub fn new(index: Arc<TfIdfIndex>, search: SearchConfig, prompt: PromptConfig) -> Self {
        Self { index, search, prompt }
    }

    /// Chunks and indexes `documents` using `settings`.
    pub fn from_documents(documents: &[Document], settings: &Settings) -> Result<Self> {
        let index = Self::build_index(documents, settings)?;
        Ok(Self::new(Arc::new(index), settings.search.clone(), settings.prompt.clone()))
    }

    /// Replaces the index with one built from `documents`.
    pub fn rebuild(&mut self, documents: &[Document], settings: &Settings) -> Result<()> {
        self.index = Arc::new(Self::build_index(documents, settings)?);
        self.search = settings.search.clone();
        self.prompt = settings.prompt.clone();
        Ok(())
    }

    fn build_index(documents: &[Document], settings: &Settings) -> Result<TfIdfIndex> {
        let chunker = Chunker::new(settings.chunking.clone())?;
        let index = TfIdfIndex::from_documents(documents, &chunker, &settings.tokenizer);
        info!(documents = documents.len(), chunks = index.len(), terms = index.vocabulary().len(), "index ready");
        Ok(index)
    }

    pub fn index(&self) -> &Arc<TfIdfIndex> { &self.index }

    pub fn search_config(&self) -> &SearchConfig { &self.search }

    pub fn retrieve(&self, query: &str) -> Vec<SearchHit<'_>> {
        search(&self.index, query, &self.search)
    }

    pub fn retrieve_k(&self, query: &str, k: usize) -> Vec<SearchHit<'_>> {
        search(&self.index, query, &SearchConfig { top_k: k, ..self.search.clone() })
    }

    /// Retrieves context for `query` and composes the prompt in one step.
    pub fn prompt_for(&self, query: &str) -> String {
        compose_prompt(&self.prompt.preamble, query, &self.retrieve(query))
    }
}
