use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use rayon::prelude::*;
use roaring::RoaringBitmap;
use tracing::{debug, info, warn};
use crate::core::config::Config;
use crate::core::error::{Error, ErrorKind, Result};
use crate::index::tdm::TermDocumentIndex;
use crate::lexicon::lexicon::{Lexicon, LexiconEntry};

/// Co-occurrence ratio `p(x,y) / (p(x) p(y))` over a corpus of
/// `corpus_size` documents. Absent sets count as empty. Returns 0 when
/// either marginal or the joint probability is 0.
pub fn pmi_ratio(
    seed_docs: Option<&RoaringBitmap>,
    term_docs: Option<&RoaringBitmap>,
    corpus_size: usize,
) -> f64 {
    let (Some(x), Some(y)) = (seed_docs, term_docs) else {
        return 0.0;
    };
    let n = corpus_size as f64;
    let p_x = x.len() as f64 / n;
    let p_y = y.len() as f64 / n;
    if p_x == 0.0 || p_y == 0.0 {
        return 0.0;
    }
    let p_xy = x.intersection_len(y) as f64 / n;

    p_xy / (p_x * p_y)
}

/// `ln(ratio)`, with a zero ratio contributing 0 rather than -inf.
///
/// This departs from textbook PMI, which is undefined at zero
/// co-occurrence; every stored score depends on it.
pub fn log_or_zero(ratio: f64) -> f64 {
    if ratio != 0.0 { ratio.ln() } else { 0.0 }
}

/// Semi-supervised PMI lexicon induction against two seed lists
pub struct PmiLexiconBuilder {
    pub parallel: bool,
    pub workers: usize,
    pub progress_interval: usize,
    pub progress: Arc<AtomicUsize>,
}

impl Default for PmiLexiconBuilder {
    fn default() -> Self {
        PmiLexiconBuilder::from_config(&Config::default())
    }
}

impl PmiLexiconBuilder {
    pub fn from_config(config: &Config) -> Self {
        PmiLexiconBuilder {
            parallel: config.parallel_fit,
            workers: config.workers,
            progress_interval: config.progress_interval.max(1),
            progress: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn sequential() -> Self {
        PmiLexiconBuilder {
            parallel: false,
            ..PmiLexiconBuilder::default()
        }
    }

    /// Terms scored by the running or last fit
    pub fn get_progress(&self) -> usize {
        self.progress.load(Ordering::Relaxed)
    }

    /// Scores every indexed term against both seed lists.
    ///
    /// Positive seeds add `ln(pmi)` to `positive_score`, negative seeds
    /// subtract it from `negative_score`. Output order follows the index's
    /// term order and does not affect any score.
    pub fn fit<S: AsRef<str>>(
        &self,
        tdm: &TermDocumentIndex,
        positive_seeds: &[S],
        negative_seeds: &[S],
        corpus_size: usize,
    ) -> Result<Lexicon> {
        if positive_seeds.is_empty() || negative_seeds.is_empty() {
            return Err(Error::new(
                ErrorKind::InvalidArgument,
                format!(
                    "Seed lists must be non-empty (positive: {}, negative: {})",
                    positive_seeds.len(),
                    negative_seeds.len()
                ),
            ));
        }
        if corpus_size == 0 {
            return Err(Error::new(ErrorKind::InvalidArgument, "Corpus size must be positive"));
        }

        let positive = seed_docs(tdm, positive_seeds);
        let negative = seed_docs(tdm, negative_seeds);
        let terms: Vec<&str> = tdm.terms().collect();

        info!(
            terms = terms.len(),
            positive_seeds = positive.len(),
            negative_seeds = negative.len(),
            corpus_size,
            "Start PMI fit"
        );
        self.progress.store(0, Ordering::Relaxed);

        let score = |term: &&str| self.score_term(tdm, term, &positive, &negative, corpus_size);
        let scored: Vec<LexiconEntry> = if self.parallel && terms.len() > 1 {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(self.workers.max(1))
                .build()?;
            pool.install(|| terms.par_iter().map(score).collect())
        } else {
            terms.iter().map(score).collect()
        };

        let mut lexicon = Lexicon::with_capacity(scored.len());
        for entry in scored {
            let slot = lexicon.entry_or_zero(&entry.term);
            slot.positive_score += entry.positive_score;
            slot.negative_score += entry.negative_score;
        }

        info!(entries = lexicon.len(), "End PMI fit");
        Ok(lexicon)
    }

    fn score_term(
        &self,
        tdm: &TermDocumentIndex,
        term: &str,
        positive: &[Option<&RoaringBitmap>],
        negative: &[Option<&RoaringBitmap>],
        corpus_size: usize,
    ) -> LexiconEntry {
        let term_docs = tdm.docs(term);
        let mut entry = LexiconEntry::zero(term);

        for seed in positive {
            entry.positive_score += log_or_zero(pmi_ratio(*seed, term_docs, corpus_size));
        }
        for seed in negative {
            entry.negative_score -= log_or_zero(pmi_ratio(*seed, term_docs, corpus_size));
        }

        let done = self.progress.fetch_add(1, Ordering::Relaxed) + 1;
        if done % self.progress_interval == 0 {
            debug!("PMI fit progress: {} terms", done);
        }
        entry
    }
}

fn seed_docs<'a, S: AsRef<str>>(
    tdm: &'a TermDocumentIndex,
    seeds: &[S],
) -> Vec<Option<&'a RoaringBitmap>> {
    seeds.iter()
        .map(|seed| {
            let docs = tdm.docs(seed.as_ref());
            if docs.is_none() {
                warn!("seed {} is not in the index", seed.as_ref());
            }
            docs
        })
        .collect()
}
