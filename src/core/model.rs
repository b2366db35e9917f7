use tracing::info;
use crate::analysis::pipeline::Pipeline;
use crate::analysis::pos::PosCollapser;
use crate::analysis::table::Table;
use crate::core::config::Config;
use crate::core::error::{Error, ErrorKind, Result};
use crate::core::stats::{CorpusStats, FitStats};
use crate::core::types::{Corpus, DocId, Document};
use crate::index::tdm::TermDocumentIndex;
use crate::inspect::inspector::{LexiconInspector, TopTerms};
use crate::lexicon::builder::PmiLexiconBuilder;
use crate::lexicon::lexicon::{Lexicon, LexiconEntry};
use crate::scoring::results::{DocumentReport, ScoreExplanation, ScoredCorpus};
use crate::scoring::scorer::{PmiScorer, Scorer};

/// End-to-end PMI sentiment model: preprocess, inspect, fit, score
pub struct PmiModel {
    config: Config,
    pipeline: Pipeline,
    collapser: PosCollapser,
    corpus: Option<Corpus>,
    inspector: LexiconInspector,
    index: Option<TermDocumentIndex>,
    lexicon: Option<Lexicon>,
    fit_stats: Option<FitStats>,
}

impl PmiModel {
    pub fn new(config: Config, pipeline: Pipeline) -> Result<Self> {
        config.validate()?;
        let collapser = PosCollapser::new(config.pos_separator)?;
        Ok(PmiModel {
            config,
            pipeline,
            collapser,
            corpus: None,
            inspector: LexiconInspector::default(),
            index: None,
            lexicon: None,
            fit_stats: None,
        })
    }

    /// Model whose input is already tokenized
    pub fn without_pipeline(config: Config) -> Result<Self> {
        PmiModel::new(config, Pipeline::new("identity"))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Runs the preprocessing pipeline and analyses the result
    pub fn process(&mut self, table: Table) -> Result<&mut Self> {
        let rows = table.len();
        let table = self.pipeline.run(table)?;
        self.load_corpus(table.into_corpus()?)?;
        info!(documents = rows, "All processes are done.");
        Ok(self)
    }

    /// Installs a tokenized corpus. Any previous index and lexicon are
    /// dropped; the exclusion set carries over.
    pub fn load_corpus(&mut self, corpus: Corpus) -> Result<&mut Self> {
        let mut inspector = LexiconInspector::analyze(&corpus);
        let carried: Vec<String> = self.inspector.excluded().iter().map(String::from).collect();
        inspector.exclude(carried);

        self.inspector = inspector;
        self.corpus = Some(corpus);
        self.index = None;
        self.lexicon = None;
        self.fit_stats = None;
        Ok(self)
    }

    pub fn corpus(&self) -> Option<&Corpus> {
        self.corpus.as_ref()
    }

    pub fn inspector(&self) -> &LexiconInspector {
        &self.inspector
    }

    pub fn index(&self) -> Option<&TermDocumentIndex> {
        self.index.as_ref()
    }

    pub fn lexicon(&self) -> Option<&Lexicon> {
        self.lexicon.as_ref()
    }

    pub fn fit_stats(&self) -> Option<FitStats> {
        self.fit_stats
    }

    /// Excludes terms from the frequency tables and from the next fit
    pub fn post_process<I, S>(&mut self, exclude: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.processed()?;
        self.inspector.exclude(exclude);
        Ok(())
    }

    pub fn info(&self) -> Result<CorpusStats> {
        self.processed()?;
        Ok(self.inspector.info())
    }

    /// Top terms per slice; `None` uses the configured default
    pub fn most_common(&self, n: Option<usize>) -> Result<TopTerms> {
        self.processed()?;
        self.inspector.top_n(n.unwrap_or(self.config.default_top_n))
    }

    pub fn make_seeds<S: AsRef<str>>(&self, prefixes: &[S]) -> Result<Vec<String>> {
        self.processed()?;
        Ok(self.inspector.make_seeds(prefixes))
    }

    /// Rebuilds the index with the current exclusions and fits a new
    /// lexicon, replacing the previous one
    pub fn fit<S: AsRef<str>>(&mut self, positive: &[S], negative: &[S]) -> Result<&Lexicon> {
        let corpus = self.processed()?;
        let index = TermDocumentIndex::build(corpus.documents(), self.inspector.excluded());
        let corpus_size = corpus.len();

        let builder = PmiLexiconBuilder::from_config(&self.config);
        let lexicon = builder.fit(&index, positive, negative, corpus_size)?;

        self.fit_stats = Some(FitStats {
            terms: index.term_count(),
            positive_seeds: positive.len(),
            negative_seeds: negative.len(),
            corpus_size,
        });
        self.index = Some(index);
        let lexicon: &Lexicon = self.lexicon.insert(lexicon);
        Ok(lexicon)
    }

    /// Lexicon entry for `term`; a miss is `Ok(None)`
    pub fn lookup(&self, term: &str) -> Result<Option<&LexiconEntry>> {
        let lexicon = self.fitted()?;
        Ok(self.inspector.lookup(lexicon, term))
    }

    pub fn score_doc(&self, tokens: &[String]) -> Result<f64> {
        Ok(PmiScorer::new(self.fitted()?).score(tokens))
    }

    /// Scores one stored document and prepares it for display.
    /// `collapse_pos` only affects `display_tokens`.
    pub fn score_doc_id(&self, id: DocId, collapse_pos: bool) -> Result<DocumentReport> {
        let lexicon = self.fitted()?;
        let doc = self.document(id)?;
        let score = PmiScorer::new(lexicon).score(&doc.tokens);

        let display_tokens = if collapse_pos {
            doc.tokens.iter().map(|t| self.collapser.collapse(t)).collect()
        } else {
            doc.tokens.clone()
        };

        let report = DocumentReport {
            id,
            title: doc.title.clone(),
            label: doc.label,
            score,
            display_tokens,
        };
        info!(id = %id, title = %report.title, pmi = report.score, "scored document");
        Ok(report)
    }

    pub fn explain_doc_id(&self, id: DocId) -> Result<ScoreExplanation> {
        let lexicon = self.fitted()?;
        let doc = self.document(id)?;
        Ok(PmiScorer::new(lexicon).explain(&doc.tokens))
    }

    /// Every document with its score, in corpus order
    pub fn predict(&self) -> Result<ScoredCorpus> {
        let lexicon = self.fitted()?;
        let corpus = self.processed()?;
        Ok(PmiScorer::new(lexicon).score_corpus(corpus.iter()))
    }

    pub fn score_corpus(&self) -> Result<Vec<(DocId, f64)>> {
        Ok(self.predict()?.scores())
    }

    fn processed(&self) -> Result<&Corpus> {
        self.corpus.as_ref().ok_or_else(|| {
            Error::new(ErrorKind::InvalidState, "No corpus loaded; call process() first")
        })
    }

    fn fitted(&self) -> Result<&Lexicon> {
        self.lexicon.as_ref().ok_or_else(|| {
            Error::new(ErrorKind::InvalidState, "No lexicon built; call fit() first")
        })
    }

    fn document(&self, id: DocId) -> Result<&Document> {
        self.processed()?.get(id).ok_or_else(|| {
            Error::new(ErrorKind::NotFound, format!("Document {} not found", id))
        })
    }
}
