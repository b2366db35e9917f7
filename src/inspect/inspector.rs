use serde::{Serialize, Deserialize};
use tracing::{debug, info};
use crate::core::error::{Error, ErrorKind, Result};
use crate::core::stats::CorpusStats;
use crate::core::types::{Corpus, Label};
use crate::index::exclusion::ExclusionSet;
use crate::inspect::frequency::FrequencyTable;
use crate::lexicon::lexicon::{Lexicon, LexiconEntry};

/// Corpus slice a frequency table covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Slice {
    Total,
    Positive,
    Negative,
}

/// `most_common` output for the three slices side by side
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopTerms {
    pub total: Vec<(String, u64)>,
    pub positive: Vec<(String, u64)>,
    pub negative: Vec<(String, u64)>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopRow {
    pub rank: usize,
    pub total: Option<(String, u64)>,
    pub positive: Option<(String, u64)>,
    pub negative: Option<(String, u64)>,
}

impl TopTerms {
    /// Rank-aligned rows; a slice with fewer terms leaves `None`
    pub fn rows(&self) -> Vec<TopRow> {
        let depth = self.total.len().max(self.positive.len()).max(self.negative.len());
        (0..depth)
            .map(|rank| TopRow {
                rank,
                total: self.total.get(rank).cloned(),
                positive: self.positive.get(rank).cloned(),
                negative: self.negative.get(rank).cloned(),
            })
            .collect()
    }
}

/// Frequency tables per slice plus the exclusion set shared with index
/// builds
#[derive(Debug, Clone, Default)]
pub struct LexiconInspector {
    total: FrequencyTable,
    positive: FrequencyTable,
    negative: FrequencyTable,
    excluded: ExclusionSet,
}

impl LexiconInspector {
    /// Counts every token occurrence per slice. Neutral documents only
    /// feed the total table.
    pub fn analyze(corpus: &Corpus) -> Self {
        let mut inspector = LexiconInspector::default();
        for doc in corpus.iter() {
            inspector.total.extend(&doc.tokens);
            match doc.label {
                Label::Positive => inspector.positive.extend(&doc.tokens),
                Label::Negative => inspector.negative.extend(&doc.tokens),
                Label::Neutral => {}
            }
        }
        inspector
    }

    pub fn table(&self, slice: Slice) -> &FrequencyTable {
        match slice {
            Slice::Total => &self.total,
            Slice::Positive => &self.positive,
            Slice::Negative => &self.negative,
        }
    }

    pub fn excluded(&self) -> &ExclusionSet {
        &self.excluded
    }

    /// Excludes terms from future index builds and drops them from the
    /// frequency tables. Lexicons already built are untouched.
    pub fn exclude<I, S>(&mut self, terms: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let terms: Vec<String> = terms.into_iter().map(Into::into).collect();
        for term in &terms {
            self.total.remove(term);
            self.positive.remove(term);
            self.negative.remove(term);
        }
        let added = self.excluded.extend(terms);
        debug!(added, excluded = self.excluded.len(), "exclusion set updated");
    }

    pub fn info(&self) -> CorpusStats {
        CorpusStats {
            total: self.total.stats(),
            positive: self.positive.stats(),
            negative: self.negative.stats(),
        }
    }

    pub fn top_n(&self, n: usize) -> Result<TopTerms> {
        if n == 0 {
            return Err(Error::new(ErrorKind::InvalidArgument, "top_n requires n >= 1"));
        }
        Ok(TopTerms {
            total: self.total.most_common(n),
            positive: self.positive.most_common(n),
            negative: self.negative.most_common(n),
        })
    }

    /// Expands each prefix to every term of the total table starting with
    /// it, in prefix order then table order
    pub fn make_seeds<S: AsRef<str>>(&self, prefixes: &[S]) -> Vec<String> {
        let mut seeds = Vec::new();
        for prefix in prefixes {
            for (token, freq) in self.total.iter() {
                if token.starts_with(prefix.as_ref()) {
                    debug!(token, freq, "seed candidate");
                    seeds.push(token.to_string());
                }
            }
        }
        seeds
    }

    /// Looks up a term. A miss is reported, not raised.
    pub fn lookup<'a>(&self, lexicon: &'a Lexicon, term: &str) -> Option<&'a LexiconEntry> {
        let entry = lexicon.get(term);
        if entry.is_none() {
            info!("{} is not in lexicon", term);
        }
        entry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{DocId, Document};

    fn corpus() -> Corpus {
        let doc = |id: u32, tokens: &[&str], label| {
            Document::new(DocId(id), tokens.iter().map(|t| t.to_string()).collect(), label)
        };
        Corpus::new(vec![
            doc(1, &["gain/NN", "gain/VB", "up"], Label::Positive),
            doc(2, &["loss/NN", "down", "up"], Label::Negative),
            doc(3, &["flat"], Label::Neutral),
        ]).unwrap()
    }

    #[test]
    fn slices_and_stats() {
        let inspector = LexiconInspector::analyze(&corpus());
        let stats = inspector.info();
        assert_eq!(stats.total.total_words, 7);
        assert_eq!(stats.total.unique_words, 6);
        assert_eq!(stats.positive.total_words, 3);
        assert_eq!(stats.negative.unique_words, 3);
        assert_eq!(inspector.table(Slice::Positive).count("loss/NN"), 0);
    }

    #[test]
    fn top_rows_pad_shorter_slices() {
        let inspector = LexiconInspector::analyze(&corpus());
        let top = inspector.top_n(5).unwrap();
        let rows = top.rows();
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0].total, Some(("up".to_string(), 2)));
        assert_eq!(rows[3].positive, None);
        assert_eq!(inspector.top_n(0).unwrap_err().kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn seeds_expand_prefixes() {
        let inspector = LexiconInspector::analyze(&corpus());
        assert_eq!(inspector.make_seeds(&["gain", "los"]), vec!["gain/NN", "gain/VB", "loss/NN"]);
    }

    #[test]
    fn exclude_purges_tables() {
        let mut inspector = LexiconInspector::analyze(&corpus());
        inspector.exclude(["up"]);
        assert!(inspector.excluded().contains("up"));
        assert_eq!(inspector.table(Slice::Total).count("up"), 0);
        assert_eq!(inspector.table(Slice::Negative).stats().total_words, 2);
    }
}
