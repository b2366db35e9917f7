use pmilex::{
    score_corpus, score_document, Config, Corpus, DocId, Document, ExclusionSet, Label,
    PmiLexiconBuilder, PmiModel, TermDocumentIndex,
};

fn strings(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

fn movie_corpus() -> Vec<Document> {
    vec![
        Document::new(DocId(1), strings(&["good", "movie"]), Label::Positive),
        Document::new(DocId(2), strings(&["bad", "movie"]), Label::Negative),
        Document::new(DocId(3), strings(&["good", "film"]), Label::Positive),
        Document::new(DocId(4), strings(&["terrible", "film"]), Label::Negative),
    ]
}

fn ids(index: &TermDocumentIndex, term: &str) -> Vec<u32> {
    index.docs(term).map(|docs| docs.iter().collect()).unwrap_or_default()
}

#[test]
fn index_membership_matches_token_presence() {
    let docs = vec![
        Document::new(DocId(10), strings(&["a", "b", "a"]), Label::Neutral),
        Document::new(DocId(11), strings(&["b", "c"]), Label::Neutral),
        Document::new(DocId(12), strings(&[]), Label::Neutral),
    ];
    let index = TermDocumentIndex::build(&docs, &ExclusionSet::new());

    for doc in &docs {
        for term in index.terms() {
            assert_eq!(
                index.contains_doc(term, doc.id),
                doc.tokens.iter().any(|t| t == term),
                "term {term} doc {}",
                doc.id
            );
        }
    }
    assert_eq!(index.doc_count(), 3);
}

#[test]
fn movie_scenario() {
    let docs = movie_corpus();
    let index = TermDocumentIndex::build(&docs, &ExclusionSet::new());
    assert_eq!(ids(&index, "good"), vec![1, 3]);
    assert_eq!(ids(&index, "movie"), vec![1, 2]);

    let lexicon = PmiLexiconBuilder::sequential()
        .fit(&index, &["good"], &["bad"], docs.len())
        .unwrap();

    // p_x = 0.5, p_y = 0.5, p_xy = 0.25 -> pmi 1.0 -> ln 0
    assert_eq!(lexicon.get("movie").unwrap().positive_score, 0.0);

    // "bad" and "movie": p_x 0.25, p_y 0.5, p_xy 0.25 -> pmi 2 -> -ln 2
    let movie = lexicon.get("movie").unwrap();
    assert!((movie.negative_score + 2f64.ln()).abs() < 1e-12);

    // "terrible" never meets either seed
    let terrible = lexicon.get("terrible").unwrap();
    assert_eq!(terrible.positive_score, 0.0);
    assert_eq!(terrible.negative_score, 0.0);
    assert!(terrible.positive_score.is_finite());
}

#[test]
fn disjoint_sets_contribute_exactly_zero() {
    let docs = movie_corpus();
    let index = TermDocumentIndex::build(&docs, &ExclusionSet::new());
    let lexicon = PmiLexiconBuilder::sequential()
        .fit(&index, &["terrible"], &["good"], docs.len())
        .unwrap();

    // "good" vs "terrible" share no documents
    let good = lexicon.get("good").unwrap();
    assert_eq!(good.positive_score, 0.0);
    assert!(!good.positive_score.is_nan());
    let bad = lexicon.get("bad").unwrap();
    assert_eq!(bad.negative_score, 0.0);
}

#[test]
fn self_seed_scores_log_inverse_probability() {
    let docs = movie_corpus();
    let index = TermDocumentIndex::build(&docs, &ExclusionSet::new());
    let lexicon = PmiLexiconBuilder::sequential()
        .fit(&index, &["good"], &["bad"], docs.len())
        .unwrap();

    let good = lexicon.get("good").unwrap();
    assert!((good.positive_score - (1.0f64 / 0.5).ln()).abs() < 1e-12);
    assert!(good.positive_score >= 0.0);

    let bad = lexicon.get("bad").unwrap();
    assert!((bad.negative_score + (1.0f64 / 0.25).ln()).abs() < 1e-12);
}

#[test]
fn document_score_is_sum_of_entries() {
    let docs = movie_corpus();
    let index = TermDocumentIndex::build(&docs, &ExclusionSet::new());
    let lexicon = PmiLexiconBuilder::sequential()
        .fit(&index, &["good"], &["bad"], docs.len())
        .unwrap();

    let tokens = strings(&["good", "unknown", "movie", "good", "nowhere"]);
    let expected: f64 = ["good", "movie", "good"]
        .iter()
        .map(|t| {
            let e = lexicon.get(t).unwrap();
            e.positive_score + e.negative_score
        })
        .sum();
    assert!((score_document(&tokens, &lexicon) - expected).abs() < 1e-12);

    let scored = score_corpus(&docs, &lexicon);
    let order: Vec<DocId> = scored.scores().into_iter().map(|(id, _)| id).collect();
    assert_eq!(order, vec![DocId(1), DocId(2), DocId(3), DocId(4)]);
}

#[test]
fn fit_is_deterministic() {
    let docs = movie_corpus();
    let index = TermDocumentIndex::build(&docs, &ExclusionSet::new());
    let builder = PmiLexiconBuilder::from_config(&Config::default().with_workers(4));
    let first = builder.fit(&index, &["good", "film"], &["bad", "terrible"], 4).unwrap();
    let second = builder.fit(&index, &["good", "film"], &["bad", "terrible"], 4).unwrap();

    for (a, b) in first.iter().zip(second.iter()) {
        assert_eq!(a.term, b.term);
        assert_eq!(a.positive_score.to_bits(), b.positive_score.to_bits());
        assert_eq!(a.negative_score.to_bits(), b.negative_score.to_bits());
    }
}

#[test]
fn exclusion_applies_on_rebuild_only() {
    let mut model = PmiModel::without_pipeline(Config::default().with_parallel_fit(false)).unwrap();
    model.load_corpus(Corpus::new(movie_corpus()).unwrap()).unwrap();
    model.fit(&["good"], &["bad"]).unwrap();

    model.post_process(["movie"]).unwrap();
    let top = model.most_common(Some(10)).unwrap();
    assert!(top.total.iter().all(|(t, _)| t != "movie"));
    assert!(top.negative.iter().all(|(t, _)| t != "movie"));

    // Old lexicon and index survive until the next fit
    assert!(model.lookup("movie").unwrap().is_some());
    assert!(model.index().unwrap().docs("movie").is_some());

    model.fit(&["good"], &["bad"]).unwrap();
    assert!(model.index().unwrap().docs("movie").is_none());
    assert!(model.lookup("movie").unwrap().is_none());
}
