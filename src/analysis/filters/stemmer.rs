use rust_stemmers::{Algorithm, Stemmer};
use crate::analysis::filter::TokenFilter;
use crate::analysis::token::Token;

/// Snowball stemmer. On tagged tokens (`word/TAG`) only the word part is
/// stemmed and the tag is kept.
pub struct StemmerFilter {
    pub algorithm: Algorithm,
    pub separator: char,
}

impl StemmerFilter {
    pub fn new(algorithm: Algorithm) -> Self {
        StemmerFilter { algorithm, separator: '/' }
    }

    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }
}

impl TokenFilter for StemmerFilter {
    fn filter(&self, tokens: Vec<Token>) -> Vec<Token> {
        let stemmer = Stemmer::create(self.algorithm);

        tokens.into_iter()
            .map(|mut token| {
                token.text = match token.text.split_once(self.separator) {
                    Some((word, tag)) => {
                        format!("{}{}{}", stemmer.stem(word), self.separator, tag)
                    }
                    None => stemmer.stem(&token.text).into_owned(),
                };
                token.length = token.text.len();
                token
            })
            .collect()
    }

    fn name(&self) -> &str {
        "stemmer"
    }

    fn clone_box(&self) -> Box<dyn TokenFilter> {
        Box::new(StemmerFilter {
            algorithm: self.algorithm,
            separator: self.separator,
        })
    }
}
