use std::collections::HashMap;
use crate::core::stats::FrequencyStats;

/// Token occurrence counts in discovery order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: Vec<(String, u64)>,
    positions: HashMap<String, usize>,
    total: u64,
}

impl FrequencyTable {
    pub fn new() -> Self {
        FrequencyTable::default()
    }

    pub fn add(&mut self, token: &str) {
        self.total += 1;
        match self.positions.get(token) {
            Some(&pos) => self.counts[pos].1 += 1,
            None => {
                self.positions.insert(token.to_string(), self.counts.len());
                self.counts.push((token.to_string(), 1));
            }
        }
    }

    pub fn extend<'a, I: IntoIterator<Item = &'a String>>(&mut self, tokens: I) {
        for token in tokens {
            self.add(token);
        }
    }

    /// Drops a token, returning its count
    pub fn remove(&mut self, token: &str) -> Option<u64> {
        let pos = self.positions.remove(token)?;
        let (_, count) = self.counts.remove(pos);
        for (shifted, _) in &self.counts[pos..] {
            if let Some(p) = self.positions.get_mut(shifted) {
                *p -= 1;
            }
        }
        self.total -= count;
        Some(count)
    }

    pub fn count(&self, token: &str) -> u64 {
        self.positions.get(token).map_or(0, |&pos| self.counts[pos].1)
    }

    /// Top `n` tokens by count; equal counts keep discovery order
    pub fn most_common(&self, n: usize) -> Vec<(String, u64)> {
        let mut ranked: Vec<&(String, u64)> = self.counts.iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.into_iter().take(n).cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(token, count)| (token.as_str(), *count))
    }

    pub fn stats(&self) -> FrequencyStats {
        FrequencyStats {
            total_words: self.total,
            unique_words: self.counts.len(),
        }
    }
}
