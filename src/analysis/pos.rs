use std::collections::HashMap;
use regex::Regex;
use crate::analysis::token::Token;
use crate::core::error::Result;

/// Assigns a part-of-speech tag to every token of one document
pub trait PosTagger: Send + Sync {
    fn tag(&self, tokens: &[Token]) -> Vec<String>;

    fn name(&self) -> &str;
}

/// Lookup-table tagger: known words get their tag, everything else the
/// default tag
#[derive(Debug, Clone)]
pub struct DictionaryTagger {
    pub tags: HashMap<String, String>,
    pub default_tag: String,
}

impl DictionaryTagger {
    pub fn new(default_tag: impl Into<String>) -> Self {
        DictionaryTagger {
            tags: HashMap::new(),
            default_tag: default_tag.into(),
        }
    }

    pub fn with_tag(mut self, word: impl Into<String>, tag: impl Into<String>) -> Self {
        self.tags.insert(word.into(), tag.into());
        self
    }
}

impl PosTagger for DictionaryTagger {
    fn tag(&self, tokens: &[Token]) -> Vec<String> {
        tokens.iter()
            .map(|token| {
                self.tags.get(&token.text)
                    .cloned()
                    .unwrap_or_else(|| self.default_tag.clone())
            })
            .collect()
    }

    fn name(&self) -> &str {
        "dictionary"
    }
}

/// Strips part-of-speech suffixes for display.
///
/// A token with several markers (`new/JJ york/NNP`) loses every `/TAG`;
/// a token with exactly one loses everything from the marker on; a token
/// without a marker is returned unchanged. Distinct tagged tokens can
/// collapse to the same surface form.
#[derive(Debug, Clone)]
pub struct PosCollapser {
    separator: char,
    tag_pattern: Regex,
}

impl PosCollapser {
    pub fn new(separator: char) -> Result<Self> {
        let pattern = format!("{}[A-Z]+", regex::escape(&separator.to_string()));
        Ok(PosCollapser {
            separator,
            tag_pattern: Regex::new(&pattern)?,
        })
    }

    pub fn collapse(&self, token: &str) -> String {
        match token.matches(self.separator).count() {
            0 => token.to_string(),
            1 => token.split(self.separator).next().unwrap_or(token).to_string(),
            _ => self.tag_pattern.replace_all(token, "").into_owned(),
        }
    }

    /// Collapses a frequency list. When two entries collapse to the same
    /// form the later count overwrites the earlier one, which keeps its
    /// position.
    pub fn collapse_frequencies(&self, freqs: &[(String, u64)]) -> Vec<(String, u64)> {
        let mut out: Vec<(String, u64)> = Vec::with_capacity(freqs.len());
        let mut slots: HashMap<String, usize> = HashMap::with_capacity(freqs.len());

        for (token, freq) in freqs {
            let surface = self.collapse(token);
            match slots.get(&surface) {
                Some(&slot) => out[slot].1 = *freq,
                None => {
                    slots.insert(surface.clone(), out.len());
                    out.push((surface, *freq));
                }
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapse_single_and_multi_markers() {
        let c = PosCollapser::new('/').unwrap();
        assert_eq!(c.collapse("run/VB"), "run");
        assert_eq!(c.collapse("plain"), "plain");
        assert_eq!(c.collapse("new/JJ york/NNP"), "new york");
        assert_eq!(c.collapse("a/b/NN"), "a/b");
    }

    #[test]
    fn collapsed_frequencies_overwrite() {
        let c = PosCollapser::new('/').unwrap();
        let freqs = vec![
            ("run/VB".to_string(), 5),
            ("fund/NN".to_string(), 4),
            ("run/NN".to_string(), 2),
        ];
        assert_eq!(
            c.collapse_frequencies(&freqs),
            vec![("run".to_string(), 2), ("fund".to_string(), 4)]
        );
    }

    #[test]
    fn dictionary_tagger_defaults() {
        let tagger = DictionaryTagger::new("NN").with_tag("rose", "VBD");
        let tokens = vec![
            Token::new("stocks".to_string(), 0, 0),
            Token::new("rose".to_string(), 1, 7),
        ];
        assert_eq!(tagger.tag(&tokens), vec!["NN", "VBD"]);
    }
}
