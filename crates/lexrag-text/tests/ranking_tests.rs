use lexrag_core::chunker::{Chunker, ChunkingConfig};
use lexrag_core::config::{SearchConfig, TokenizerConfig};
use lexrag_core::types::{Chunk, Document};
use lexrag_text::{search, score_all, smoothed_idf, TfIdfIndex};

fn sentence_chunks(sentences: &[&str]) -> Vec<Chunk> {
    sentences
        .iter()
        .enumerate()
        .map(|(i, s)| Chunk {
            id: format!("corpus#{}", i),
            ordinal: i,
            source: "corpus".to_string(),
            chunk_index: i,
            offset: 0,
            content: s.to_string(),
        })
        .collect()
}

fn fox_index() -> TfIdfIndex {
    let chunks = sentence_chunks(&["The quick brown fox", "The lazy dog sleeps", "Quick foxes run fast"]);
    TfIdfIndex::build(chunks, &TokenizerConfig::default())
}

#[test]
fn quick_fox_ranks_fox_chunks_above_lazy_dog() {
    let index = fox_index();
    let hits = index.search("quick fox", 3);
    let order: Vec<usize> = hits.iter().map(|h| h.chunk.ordinal).collect();
    eprintln!("scores: {:?}", hits.iter().map(|h| h.score).collect::<Vec<_>>());
    assert_eq!(order, vec![0, 2, 1]);
    assert!(hits[0].score > hits[1].score);
    assert!(hits[1].score > 0.0);
    assert_eq!(hits[2].score, 0.0);
}

#[test]
fn empty_corpus_answers_with_no_hits() {
    let index = TfIdfIndex::build(Vec::new(), &TokenizerConfig::default());
    assert!(index.is_empty());
    assert!(index.vocabulary().is_empty());
    assert!(index.search("anything at all", 5).is_empty());
    assert!(score_all(&index, "anything").is_empty());
    assert_eq!(index.stats().avg_terms_per_chunk, 0.0);
}

#[test]
fn unknown_query_terms_score_zero_in_ordinal_order() {
    let index = fox_index();
    let hits = index.search("zebra xylophone !!", 10);
    assert_eq!(hits.len(), 3);
    assert!(hits.iter().all(|h| h.score == 0.0));
    let order: Vec<usize> = hits.iter().map(|h| h.chunk.ordinal).collect();
    assert_eq!(order, vec![0, 1, 2]);
    assert!(index.embed_query("zebra").is_zero());
}

#[test]
fn empty_query_is_degenerate_not_an_error() {
    let index = fox_index();
    let scores = score_all(&index, "   ");
    assert_eq!(scores, vec![0.0, 0.0, 0.0]);
}

#[test]
fn score_ties_follow_chunk_ordinal_not_build_order() {
    let mut chunks = sentence_chunks(&["alpha", "beta", "gamma"]);
    for (chunk, ordinal) in chunks.iter_mut().zip([5, 2, 9]) {
        chunk.ordinal = ordinal;
    }
    let index = TfIdfIndex::build(chunks, &TokenizerConfig::default());
    let order: Vec<usize> = index.search("zzz", 10).iter().map(|h| h.chunk.ordinal).collect();
    assert_eq!(order, vec![2, 5, 9]);

    let hits = index.search("beta", 10);
    assert_eq!(hits[0].chunk.ordinal, 2);
    let rest: Vec<usize> = hits[1..].iter().map(|h| h.chunk.ordinal).collect();
    assert_eq!(rest, vec![5, 9]);
}

#[test]
fn nan_min_score_keeps_every_hit() {
    let index = fox_index();
    let options = SearchConfig { top_k: 10, min_score: f32::NAN };
    let hits = search(&index, "quick fox", &options);
    let order: Vec<usize> = hits.iter().map(|h| h.chunk.ordinal).collect();
    assert_eq!(order, vec![0, 2, 1]);
}

#[test]
fn top_k_larger_than_corpus_returns_everything() {
    let index = fox_index();
    assert_eq!(index.search("fox", 100).len(), 3);
    assert_eq!(index.search("fox", 1).len(), 1);
    assert!(index.search("fox", 0).is_empty());
}

#[test]
fn idf_is_positive_and_non_increasing_in_document_frequency() {
    let index = fox_index();
    let vocab = index.vocabulary();
    let weights = index.weights();
    let mut by_df: Vec<(u32, f32)> = vocab
        .iter()
        .map(|(id, _)| (weights.doc_freq(id).unwrap(), weights.idf(id).unwrap()))
        .collect();
    by_df.sort_by(|a, b| a.0.cmp(&b.0));
    assert!(by_df.iter().all(|(_, idf)| *idf > 0.0));
    for pair in by_df.windows(2) {
        assert!(pair[0].1 >= pair[1].1, "df {} -> {} but idf {} -> {}", pair[0].0, pair[1].0, pair[0].1, pair[1].1);
    }

    let the = vocab.id("the").unwrap();
    let lazy = vocab.id("lazy").unwrap();
    assert_eq!(weights.doc_freq(the), Some(2));
    assert!(weights.idf(lazy).unwrap() > weights.idf(the).unwrap());

    // a term present in every chunk still keeps a positive weight
    assert!(smoothed_idf(3, 3) > 0.0);
    assert!((smoothed_idf(3, 3) - 1.0).abs() < 1e-6);
    assert!(smoothed_idf(3, 1) > smoothed_idf(3, 2));
}

#[test]
fn tokenization_is_case_insensitive_and_strips_punctuation() {
    let index = fox_index();
    let vocab = index.vocabulary();
    assert!(vocab.contains("quick"));
    assert!(!vocab.contains("Quick"));
    let a = index.embed_query("QUICK, fox!");
    let b = index.embed_query("quick fox");
    assert_eq!(a, b);
}

#[test]
fn rebuilding_from_same_chunks_is_identical() {
    let a = fox_index();
    let b = fox_index();
    assert_eq!(a.vocabulary(), b.vocabulary());
    assert_eq!(a.weights(), b.weights());
    assert_eq!(a.vectors(), b.vectors());
    let terms: Vec<&str> = a.vocabulary().iter().map(|(_, t)| t).collect();
    let mut sorted = terms.clone();
    sorted.sort();
    assert_eq!(terms, sorted);
}

#[test]
fn stop_words_are_dropped_when_enabled() {
    let chunks = sentence_chunks(&["The quick brown fox", "The lazy dog sleeps"]);
    let index = TfIdfIndex::build(chunks, &TokenizerConfig { min_token_len: 1, stop_words: true });
    assert!(!index.vocabulary().contains("the"));
    assert!(index.vocabulary().contains("fox"));
}

#[test]
fn min_token_len_filters_short_tokens() {
    let chunks = sentence_chunks(&["a b cc ddd"]);
    let index = TfIdfIndex::build(chunks, &TokenizerConfig { min_token_len: 2, stop_words: false });
    let terms: Vec<&str> = index.vocabulary().iter().map(|(_, t)| t).collect();
    assert_eq!(terms, vec!["cc", "ddd"]);
}

#[test]
fn min_score_threshold_drops_weak_hits() {
    let index = fox_index();
    let options = SearchConfig { top_k: 10, min_score: 0.01 };
    let hits = search(&index, "quick fox", &options);
    assert_eq!(hits.len(), 2);
    assert!(hits.iter().all(|h| h.chunk.ordinal != 1));
}

#[test]
fn exact_chunk_text_scores_highest() {
    let index = fox_index();
    let hits = index.search("The lazy dog sleeps", 1);
    assert_eq!(hits[0].chunk.ordinal, 1);
    assert!((hits[0].score - 1.0).abs() < 1e-5);
}

#[test]
fn index_from_documents_uses_chunker() {
    let docs = vec![
        Document::new("a.txt", "alpha beta gamma delta"),
        Document::new("b.txt", "epsilon zeta"),
    ];
    let chunker = Chunker::new(ChunkingConfig::words(2, 0)).expect("chunker");
    let index = TfIdfIndex::from_documents(&docs, &chunker, &TokenizerConfig::default());
    assert_eq!(index.len(), 3);
    let hit = &index.search("zeta", 1)[0];
    assert_eq!(hit.chunk.source, "b.txt");
    assert_eq!(hit.chunk.ordinal, 2);
}
