use regex::Regex;
use crate::core::error::Result;

/// Text-level transform applied before tokenization
pub trait TextNormalizer: Send + Sync {
    fn normalize(&self, title: &str, text: String) -> String;

    fn name(&self) -> &str;
}

/// Drops the header lines of a raw article and joins the body lines
/// without a separator
#[derive(Debug, Clone, Copy)]
pub struct ExtractBody {
    pub skip_lines: usize,
}

impl Default for ExtractBody {
    fn default() -> Self {
        ExtractBody { skip_lines: 6 }
    }
}

impl TextNormalizer for ExtractBody {
    fn normalize(&self, _title: &str, text: String) -> String {
        text.lines().skip(self.skip_lines).collect()
    }

    fn name(&self) -> &str {
        "extract_body"
    }
}

/// Prepends the document title
#[derive(Debug, Clone, Copy, Default)]
pub struct ConcatenateTitle;

impl TextNormalizer for ConcatenateTitle {
    fn normalize(&self, title: &str, text: String) -> String {
        format!("{} {}", title, text)
    }

    fn name(&self) -> &str {
        "concatenate_title"
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Lowercase;

impl TextNormalizer for Lowercase {
    fn normalize(&self, _title: &str, text: String) -> String {
        text.to_lowercase()
    }

    fn name(&self) -> &str {
        "lowercase"
    }
}

/// Rewrites every synonym pattern to its canonical word. Entries apply in
/// the order given, so an earlier rewrite can feed a later pattern.
pub struct SynonymNormalizer {
    rules: Vec<(String, Regex)>,
}

impl SynonymNormalizer {
    pub fn new<I, W, S>(thesaurus: I) -> Result<Self>
    where
        I: IntoIterator<Item = (W, Vec<S>)>,
        W: Into<String>,
        S: AsRef<str>,
    {
        let mut rules = Vec::new();
        for (word, synonyms) in thesaurus {
            if synonyms.is_empty() {
                continue;
            }
            let alternation = synonyms.iter()
                .map(|s| s.as_ref())
                .collect::<Vec<_>>()
                .join("|");
            rules.push((word.into(), Regex::new(&alternation)?));
        }
        Ok(SynonymNormalizer { rules })
    }
}

impl TextNormalizer for SynonymNormalizer {
    fn normalize(&self, _title: &str, mut text: String) -> String {
        for (word, pattern) in &self.rules {
            text = pattern.replace_all(&text, regex::NoExpand(word)).into_owned();
        }
        text
    }

    fn name(&self) -> &str {
        "synonym"
    }
}

/// Replaces every character outside `A-Za-z_ .` (plus the optional classes)
/// with a space. Hangul, Han, Arabic and the like are removed.
pub struct SpecialCharacterFilter {
    pattern: Regex,
}

const ASCII_PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

impl SpecialCharacterFilter {
    /// `additional` is a raw character-class fragment such as `가-힣`
    pub fn new(keep_punct: bool, keep_digits: bool, additional: Option<&str>) -> Result<Self> {
        let mut class = String::from("A-Za-z_ \\.");
        if keep_punct {
            for ch in ASCII_PUNCTUATION.chars() {
                class.push_str(&regex::escape(&ch.to_string()));
            }
        }
        if keep_digits {
            class.push_str("0-9");
        }
        if let Some(extra) = additional {
            class.push_str(extra);
        }
        let pattern = Regex::new(&format!("[^{}]", class))?;
        Ok(SpecialCharacterFilter { pattern })
    }
}

impl TextNormalizer for SpecialCharacterFilter {
    fn normalize(&self, _title: &str, text: String) -> String {
        self.pattern.replace_all(&text, " ").into_owned()
    }

    fn name(&self) -> &str {
        "special_character"
    }
}

/// Puts a space after every period so sentence ends split cleanly
#[derive(Debug, Clone, Copy, Default)]
pub struct PunctSpace;

impl TextNormalizer for PunctSpace {
    fn normalize(&self, _title: &str, text: String) -> String {
        text.replace('.', ". ")
    }

    fn name(&self) -> &str {
        "punct_space"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_body_skips_header() {
        let raw = "h1\nh2\nbody one\nbody two".to_string();
        let out = ExtractBody { skip_lines: 2 }.normalize("", raw);
        assert_eq!(out, "body onebody two");
    }

    #[test]
    fn synonyms_rewrite_in_order() {
        let normalizer = SynonymNormalizer::new(vec![
            ("stock", vec!["shares", "equities"]),
            ("up", vec!["higher"]),
        ]).unwrap();
        let out = normalizer.normalize("", "shares and equities moved higher".to_string());
        assert_eq!(out, "stock and stock moved up");
    }

    #[test]
    fn bad_synonym_pattern_is_input_error() {
        let err = SynonymNormalizer::new(vec![("x", vec!["("])]).err().unwrap();
        assert_eq!(err.kind(), crate::core::error::ErrorKind::InvalidInput);
    }

    #[test]
    fn special_characters_replaced() {
        let strict = SpecialCharacterFilter::new(false, false, None).unwrap();
        let out = strict.normalize("", "kospi 3% 상승.".to_string());
        assert_eq!(out, format!("kospi{}.", " ".repeat(6)));

        let lenient = SpecialCharacterFilter::new(true, true, None).unwrap();
        assert_eq!(lenient.normalize("", "up 3%!".to_string()), "up 3%!");
    }

    #[test]
    fn title_and_punct_space() {
        let text = ConcatenateTitle.normalize("Rally", "ends.Now".to_string());
        assert_eq!(PunctSpace.normalize("", text), "Rally ends. Now");
    }
}
