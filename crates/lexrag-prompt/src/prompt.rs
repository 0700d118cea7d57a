use lexrag_core::types::SearchHit;

/// Builds the context prompt for `query` from ranked hits, best first.
///
/// Excerpts are separated by one blank line. With no hits the excerpt
/// block is left empty rather than omitted, so the layout stays fixed.
pub fn compose_prompt(preamble: &str, query: &str, hits: &[SearchHit<'_>]) -> String {
    let context = hits.iter().map(|h| h.chunk.content.trim()).collect::<Vec<_>>().join("\n\n");
    format!(
        "{preamble}\nBased on the following document excerpts, please answer the question.\n\nDocument excerpts:\n{context}\n\nQuestion: {query}\n\nAnswer:"
    )
}
