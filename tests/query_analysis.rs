use context_ranker::query::{extract_anchors, mentions_anchor};
use context_ranker::{analyze, QueryAnalysis, ScoringConfig};

fn terms(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn keywords_are_lowercased_trimmed_and_longer_than_three_chars() {
    let analysis = QueryAnalysis::analyze("¿Qué dice el ARTÍCULO 205 sobre Jubilación?", &[]);

    assert_eq!(analysis.normalized, "¿qué dice el artículo 205 sobre jubilación?");
    assert_eq!(analysis.keywords, terms(&["dice", "artículo", "sobre", "jubilación"]));
}

#[test]
fn keywords_are_deduplicated() {
    let analysis = QueryAnalysis::analyze("pensión pensión PENSIÓN viudedad", &[]);
    assert_eq!(analysis.keywords, terms(&["pensión", "viudedad"]));
}

#[test]
fn anchors_cover_all_reference_forms() {
    let analysis = QueryAnalysis::analyze(
        "Compara el artículo 42, el Art. 205.1, el articulo 7 y el art 99",
        &[],
    );
    assert_eq!(analysis.anchors, terms(&["42", "205.1", "7", "99"]));
    assert!(analysis.has_anchors());
}

#[test]
fn anchors_are_deduplicated_in_first_occurrence_order() {
    let anchors = extract_anchors("art. 10, artículo 3, Artículo 10 y ARTÍCULO 3");
    assert_eq!(anchors, terms(&["10", "3"]));
}

#[test]
fn words_that_merely_start_with_art_are_not_anchors() {
    assert!(extract_anchors("el arte 5 y la parte 12 del artículos").is_empty());
    assert!(QueryAnalysis::analyze("requisitos de la jubilación", &[]).anchors.is_empty());
}

#[test]
fn anchor_references_respect_number_boundaries() {
    assert!(mentions_anchor("Según el Artículo 42 de la ley", "42"));
    assert!(mentions_anchor("Artículo 205.1.a Tener cumplidos", "205"));
    assert!(mentions_anchor("Artículo 205.1.a Tener cumplidos", "205.1"));
    assert!(!mentions_anchor("Artículo 420 de la ley", "42"));
    assert!(!mentions_anchor("Artículo 205.12", "205.1"));
    assert!(!mentions_anchor("Sin referencias", "42"));
}

#[test]
fn domain_terms_come_from_configuration() {
    let none = QueryAnalysis::analyze("plazo de la ley de procedimiento", &[]);
    assert!(!none.has_domain_terms);

    let custom = QueryAnalysis::analyze("plazo de la ley de procedimiento", &terms(&["ley"]));
    assert!(custom.has_domain_terms);

    let defaults = analyze("qué regula el real decreto 8/2015", &ScoringConfig::default());
    assert!(defaults.has_domain_terms);

    let accent_free = analyze("que dice el articulo 3", &ScoringConfig::default());
    assert!(accent_free.has_domain_terms, "domain terms match without accents");
}

#[test]
fn empty_query_yields_empty_analysis() {
    let analysis = QueryAnalysis::analyze("   ", &terms(&["ley"]));
    assert!(analysis.keywords.is_empty());
    assert!(analysis.anchors.is_empty());
    assert!(!analysis.has_domain_terms);
    assert_eq!(analysis.normalized, "");
}

#[test]
fn analysis_is_deterministic() {
    let config = ScoringConfig::default();
    let a = analyze("Requisitos del artículo 205 de la LGSS", &config);
    let b = analyze("Requisitos del artículo 205 de la LGSS", &config);
    assert_eq!(a, b);
}
