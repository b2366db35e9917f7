use crate::analysis::token::Token;
use unicode_segmentation::UnicodeSegmentation;

pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<Token>;

    fn name(&self) -> &str;

    fn clone_box(&self) -> Box<dyn Tokenizer>;
}

/// Unicode word tokenizer (UAX #29 word boundaries)
#[derive(Clone)]
pub struct StandardTokenizer {
    pub max_token_length: usize,
}

impl Default for StandardTokenizer {
    fn default() -> Self {
        StandardTokenizer {
            max_token_length: 255,
        }
    }
}

impl Tokenizer for StandardTokenizer {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut position = 0u32;

        for (offset, word) in text.unicode_word_indices() {
            if word.len() <= self.max_token_length {
                tokens.push(Token::new(word.to_string(), position, offset));
                position += 1;
            }
        }

        tokens
    }

    fn name(&self) -> &str {
        "standard"
    }

    fn clone_box(&self) -> Box<dyn Tokenizer> {
        Box::new(self.clone())
    }
}

/// Splits on whitespace only, so punctuation stays attached to words
#[derive(Clone, Default)]
pub struct WhitespaceTokenizer;

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut position = 0u32;
        let mut start: Option<usize> = None;

        for (idx, ch) in text.char_indices() {
            match (ch.is_whitespace(), start) {
                (true, Some(begin)) => {
                    tokens.push(Token::new(text[begin..idx].to_string(), position, begin));
                    position += 1;
                    start = None;
                }
                (false, None) => start = Some(idx),
                _ => {}
            }
        }
        if let Some(begin) = start {
            tokens.push(Token::new(text[begin..].to_string(), position, begin));
        }

        tokens
    }

    fn name(&self) -> &str {
        "whitespace"
    }

    fn clone_box(&self) -> Box<dyn Tokenizer> {
        Box::new(WhitespaceTokenizer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn standard_drops_punctuation_and_tracks_offsets() {
        let tokens = StandardTokenizer::default().tokenize("Stocks rose, sharply.");
        assert_eq!(texts(&tokens), vec!["Stocks", "rose", "sharply"]);
        assert_eq!(tokens[2].offset, 13);
        assert_eq!(tokens[2].position, 2);
    }

    #[test]
    fn whitespace_keeps_punctuation() {
        let tokens = WhitespaceTokenizer.tokenize("  up 5%  today. ");
        assert_eq!(texts(&tokens), vec!["up", "5%", "today."]);
        assert_eq!(tokens[1].offset, 5);
    }
}
