use std::cmp::Ordering;
use std::fmt;
use serde::{Serialize, Deserialize};
use crate::core::error::Result;
use crate::core::types::{DocId, Label};

/// Document with its PMI polarity score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredDocument {
    pub id: DocId,
    pub title: String,
    pub tokens: Vec<String>,
    pub label: Label,
    pub pmi_score: f64,
}

/// Scored documents in corpus order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoredCorpus {
    pub documents: Vec<ScoredDocument>,
}

impl ScoredCorpus {
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn get(&self, id: DocId) -> Option<&ScoredDocument> {
        self.documents.iter().find(|doc| doc.id == id)
    }

    /// `(id, score)` pairs in corpus order
    pub fn scores(&self) -> Vec<(DocId, f64)> {
        self.documents.iter().map(|doc| (doc.id, doc.pmi_score)).collect()
    }

    /// The `k` highest-scoring documents, ties kept in corpus order
    pub fn top(&self, k: usize) -> Vec<&ScoredDocument> {
        let mut ranked: Vec<&ScoredDocument> = self.documents.iter().collect();
        ranked.sort_by(|a, b| b.pmi_score.partial_cmp(&a.pmi_score).unwrap_or(Ordering::Equal));
        ranked.truncate(k);
        ranked
    }

    /// The `k` lowest-scoring documents, ties kept in corpus order
    pub fn bottom(&self, k: usize) -> Vec<&ScoredDocument> {
        let mut ranked: Vec<&ScoredDocument> = self.documents.iter().collect();
        ranked.sort_by(|a, b| a.pmi_score.partial_cmp(&b.pmi_score).unwrap_or(Ordering::Equal));
        ranked.truncate(k);
        ranked
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Single-document diagnostic output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentReport {
    pub id: DocId,
    pub title: String,
    pub label: Label,
    pub score: f64,
    pub display_tokens: Vec<String>,  // POS suffixes possibly stripped
}

impl DocumentReport {
    pub fn content(&self) -> String {
        self.display_tokens.join(" ")
    }
}

impl fmt::Display for DocumentReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Title {}", self.title)?;
        writeln!(f, "PMI: {}", self.score)?;
        writeln!(f)?;
        write!(f, "{}", self.content())
    }
}

/// Score breakdown for debugging
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreExplanation {
    pub value: f64,
    pub description: String,
    pub details: Vec<ScoreExplanation>,
}
