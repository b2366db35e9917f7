use std::collections::HashMap;
use serde::{Serialize, Deserialize};
use crate::core::error::{Error, ErrorKind, Result};

/// Learned polarity of one term. `negative_score` grows more negative the
/// more the term co-occurs with negative seeds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LexiconEntry {
    pub term: String,
    pub positive_score: f64,
    pub negative_score: f64,
}

impl LexiconEntry {
    pub fn zero(term: impl Into<String>) -> Self {
        LexiconEntry {
            term: term.into(),
            positive_score: 0.0,
            negative_score: 0.0,
        }
    }

    /// Contribution of one occurrence of the term to a document score
    pub fn score(&self) -> f64 {
        self.positive_score + self.negative_score
    }
}

/// Term -> PMI scores, in the order terms were first inserted
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Lexicon {
    entries: Vec<LexiconEntry>,
    positions: HashMap<String, usize>,
}

impl Lexicon {
    pub fn new() -> Self {
        Lexicon::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Lexicon {
            entries: Vec::with_capacity(capacity),
            positions: HashMap::with_capacity(capacity),
        }
    }

    /// Entry for `term`, inserted with zero scores if missing
    pub fn entry_or_zero(&mut self, term: &str) -> &mut LexiconEntry {
        let pos = match self.positions.get(term) {
            Some(&pos) => pos,
            None => {
                let pos = self.entries.len();
                self.entries.push(LexiconEntry::zero(term));
                self.positions.insert(term.to_string(), pos);
                pos
            }
        };
        &mut self.entries[pos]
    }

    pub fn get(&self, term: &str) -> Option<&LexiconEntry> {
        self.positions.get(term).map(|&pos| &self.entries[pos])
    }

    /// Summed score of `term`; 0 for unknown terms
    pub fn score(&self, term: &str) -> f64 {
        self.get(term).map_or(0.0, LexiconEntry::score)
    }

    pub fn contains(&self, term: &str) -> bool {
        self.positions.contains_key(term)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LexiconEntry> {
        self.entries.iter()
    }

    pub fn from_entries(entries: Vec<LexiconEntry>) -> Result<Self> {
        let mut positions = HashMap::with_capacity(entries.len());
        for (pos, entry) in entries.iter().enumerate() {
            if positions.insert(entry.term.clone(), pos).is_some() {
                return Err(Error::new(
                    ErrorKind::InvalidInput,
                    format!("Duplicate lexicon term '{}'", entry.term),
                ));
            }
        }
        Ok(Lexicon { entries, positions })
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.entries)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let entries: Vec<LexiconEntry> = serde_json::from_str(json)?;
        Lexicon::from_entries(entries)
    }
}
