pub mod stopword;
pub mod lowercase;
pub mod length;
pub mod stemmer;

#[cfg(test)]
mod tests {
    use rust_stemmers::Algorithm;
    use crate::analysis::filter::TokenFilter;
    use crate::analysis::token::Token;
    use super::length::LengthFilter;
    use super::lowercase::LowercaseFilter;
    use super::stemmer::StemmerFilter;
    use super::stopword::StopWordFilter;

    fn tokens(words: &[&str]) -> Vec<Token> {
        words.iter().enumerate()
            .map(|(i, w)| Token::new(w.to_string(), i as u32, 0))
            .collect()
    }

    fn texts(tokens: Vec<Token>) -> Vec<String> {
        tokens.into_iter().map(|t| t.text).collect()
    }

    #[test]
    fn stopwords_with_additions() {
        let filter = StopWordFilter::english().with_additional(["reuters"]);
        let out = filter.filter(tokens(&["the", "market", "reuters", "fell"]));
        assert_eq!(texts(out), vec!["market", "fell"]);
    }

    #[test]
    fn lowercase_updates_length() {
        let out = LowercaseFilter.filter(tokens(&["KOSPI", "Ünd"]));
        assert_eq!(out[1].length, "ünd".len());
        assert_eq!(texts(out), vec!["kospi", "ünd"]);
    }

    #[test]
    fn length_bounds() {
        let words = ["a", "ab", "abc", "abcd"];
        assert_eq!(texts(LengthFilter::new(0, 0).filter(tokens(&words))).len(), 4);
        assert_eq!(texts(LengthFilter::new(2, 0).filter(tokens(&words))), vec!["ab", "abc", "abcd"]);
        assert_eq!(texts(LengthFilter::new(0, 2).filter(tokens(&words))), vec!["a", "ab"]);
        assert_eq!(texts(LengthFilter::new(2, 3).filter(tokens(&words))), vec!["ab", "abc"]);
    }

    #[test]
    fn stemmer_keeps_tag() {
        let filter = StemmerFilter::new(Algorithm::English);
        let out = filter.filter(tokens(&["running/VBG", "stocks"]));
        assert_eq!(texts(out), vec!["run/VBG", "stock"]);
    }
}
