use crate::core::types::Document;
use crate::lexicon::lexicon::Lexicon;
use crate::scoring::results::{ScoreExplanation, ScoredCorpus, ScoredDocument};

/// Scorer trait
pub trait Scorer: Send + Sync {
    fn score(&self, tokens: &[String]) -> f64;

    fn name(&self) -> &str;
}

/// Sums `positive_score + negative_score` over every token occurrence.
/// Tokens missing from the lexicon add 0.
pub struct PmiScorer<'a> {
    pub lexicon: &'a Lexicon,
}

impl<'a> PmiScorer<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        PmiScorer { lexicon }
    }

    /// Scores every document, preserving corpus order
    pub fn score_corpus<'d, I>(&self, documents: I) -> ScoredCorpus
    where
        I: IntoIterator<Item = &'d Document>,
    {
        let documents = documents.into_iter()
            .map(|doc| ScoredDocument {
                id: doc.id,
                title: doc.title.clone(),
                tokens: doc.tokens.clone(),
                label: doc.label,
                pmi_score: self.score(&doc.tokens),
            })
            .collect();
        ScoredCorpus { documents }
    }

    /// Per-token contributions, unknown tokens listed with 0
    pub fn explain(&self, tokens: &[String]) -> ScoreExplanation {
        let details: Vec<ScoreExplanation> = tokens.iter()
            .map(|token| match self.lexicon.get(token) {
                Some(entry) => ScoreExplanation {
                    value: entry.score(),
                    description: format!(
                        "{}: positive {} + negative {}",
                        token, entry.positive_score, entry.negative_score
                    ),
                    details: Vec::new(),
                },
                None => ScoreExplanation {
                    value: 0.0,
                    description: format!("{}: not in lexicon", token),
                    details: Vec::new(),
                },
            })
            .collect();

        ScoreExplanation {
            value: details.iter().map(|d| d.value).sum(),
            description: format!("sum of {} token scores", details.len()),
            details,
        }
    }
}

impl Scorer for PmiScorer<'_> {
    fn score(&self, tokens: &[String]) -> f64 {
        tokens.iter().map(|token| self.lexicon.score(token)).sum()
    }

    fn name(&self) -> &str {
        "pmi"
    }
}

pub fn score_document(tokens: &[String], lexicon: &Lexicon) -> f64 {
    PmiScorer::new(lexicon).score(tokens)
}

pub fn score_corpus(documents: &[Document], lexicon: &Lexicon) -> ScoredCorpus {
    PmiScorer::new(lexicon).score_corpus(documents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{DocId, Label};

    fn lexicon() -> Lexicon {
        let mut lexicon = Lexicon::new();
        let up = lexicon.entry_or_zero("up");
        up.positive_score = 2.0;
        up.negative_score = -0.5;
        lexicon.entry_or_zero("down").negative_score = -3.0;
        lexicon
    }

    fn strings(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn unknown_tokens_add_nothing() {
        let lexicon = lexicon();
        let tokens = strings(&["up", "mystery", "down", "up"]);
        assert_eq!(score_document(&tokens, &lexicon), 1.5 + -3.0 + 1.5);
        assert_eq!(score_document(&[], &lexicon), 0.0);
    }

    #[test]
    fn explanation_matches_score() {
        let lexicon = lexicon();
        let tokens = strings(&["up", "mystery"]);
        let explanation = PmiScorer::new(&lexicon).explain(&tokens);
        assert_eq!(explanation.value, score_document(&tokens, &lexicon));
        assert_eq!(explanation.details[1].value, 0.0);
    }

    #[test]
    fn corpus_order_preserved() {
        let lexicon = lexicon();
        let docs = vec![
            Document::new(DocId(9), strings(&["down"]), Label::Negative),
            Document::new(DocId(2), strings(&["up"]), Label::Positive),
        ];
        let scored = score_corpus(&docs, &lexicon);
        assert_eq!(scored.scores(), vec![(DocId(9), -3.0), (DocId(2), 1.5)]);
        assert_eq!(scored.top(1)[0].id, DocId(2));
        assert_eq!(scored.bottom(1)[0].id, DocId(9));
    }
}
