use serde::{Serialize, Deserialize};

/// Size of one frequency table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FrequencyStats {
    pub total_words: u64,     // Token occurrences (N)
    pub unique_words: usize,  // Distinct tokens (B)
}

/// Frequency statistics for each corpus slice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CorpusStats {
    pub total: FrequencyStats,
    pub positive: FrequencyStats,
    pub negative: FrequencyStats,
}

/// Summary of one lexicon build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FitStats {
    pub terms: usize,
    pub positive_seeds: usize,
    pub negative_seeds: usize,
    pub corpus_size: usize,
}
