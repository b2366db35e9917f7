use crate::analysis::filter::TokenFilter;
use crate::analysis::token::Token;

/// Keeps tokens whose character count lies within `[min, max]`.
/// A bound of 0 is disabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct LengthFilter {
    pub min: usize,
    pub max: usize,
}

impl LengthFilter {
    pub fn new(min: usize, max: usize) -> Self {
        LengthFilter { min, max }
    }

    fn accepts(&self, len: usize) -> bool {
        (self.min == 0 || self.min <= len) && (self.max == 0 || len <= self.max)
    }
}

impl TokenFilter for LengthFilter {
    fn filter(&self, tokens: Vec<Token>) -> Vec<Token> {
        if self.min == 0 && self.max == 0 {
            return tokens;
        }
        tokens.into_iter()
            .filter(|token| self.accepts(token.text.chars().count()))
            .collect()
    }

    fn name(&self) -> &str {
        "length"
    }

    fn clone_box(&self) -> Box<dyn TokenFilter> {
        Box::new(*self)
    }
}
