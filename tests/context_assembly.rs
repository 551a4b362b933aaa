use context_ranker::types::{DocumentId, ScoreDetails};
use context_ranker::{
    assemble, ContextBudget, DocumentType, QueryAnalysis, RankedResult, ScoredDocument,
};

fn scored(id: &str, title: &str, content: &str, document_type: DocumentType) -> ScoredDocument {
    ScoredDocument {
        document_id: id.into(),
        title: title.to_string(),
        content: content.to_string(),
        topic: None,
        relevance_score: 1.0,
        category: document_type.as_str().to_string(),
        document_type,
        why: ScoreDetails::default(),
    }
}

fn ranked(documents: Vec<ScoredDocument>) -> RankedResult {
    RankedResult {
        documents_considered: documents.len(),
        documents_scored: documents.len(),
        query: "test".to_string(),
        documents,
        promoted: None,
    }
}

fn no_anchors() -> QueryAnalysis {
    QueryAnalysis::analyze("plazos", &[])
}

#[test]
fn budget_is_never_exceeded() {
    let docs = ranked(vec![
        scored("a", "Ley A", &"á".repeat(3000), DocumentType::Law),
        scored("b", "Guía B", &"texto ".repeat(400), DocumentType::Regulation),
        scored("c", "Tema general C", "breve", DocumentType::GeneralTopic),
    ]);
    let analysis = no_anchors();

    for max_total_chars in (0..6000).step_by(37) {
        let budget = ContextBudget::with_max_total_chars(max_total_chars);
        let context = assemble(&docs, &analysis, &budget);

        assert!(
            context.total_chars <= max_total_chars,
            "{} > {}",
            context.total_chars,
            max_total_chars
        );
        assert_eq!(context.total_chars, context.text.chars().count());
        assert_eq!(context.assembly.documents_included, context.included_document_ids.len());
    }
}

#[test]
fn zero_and_tiny_budgets_produce_valid_contexts() {
    let docs = ranked(vec![scored("a", "Ley A", "contenido", DocumentType::Law)]);

    let empty = assemble(&docs, &no_anchors(), &ContextBudget::with_max_total_chars(0));
    assert_eq!(empty.text, "");
    assert!(empty.included_document_ids.is_empty());
    assert_eq!(empty.assembly.documents_omitted_by_budget, 1);

    let tiny = assemble(&docs, &no_anchors(), &ContextBudget::with_max_total_chars(5));
    assert!(tiny.total_chars <= 5);
}

#[test]
fn empty_ranking_yields_empty_context() {
    let context = assemble(&ranked(Vec::new()), &no_anchors(), &ContextBudget::default());
    assert_eq!(context.text, "");
    assert_eq!(context.total_chars, 0);
}

#[test]
fn whole_document_fits_without_marker() {
    let docs = ranked(vec![scored("a", "Guía", "Plazo de diez días.", DocumentType::Regulation)]);
    let context = assemble(&docs, &no_anchors(), &ContextBudget::default());

    assert_eq!(context.text, "=== Guía (regulation) ===\nPlazo de diez días.\n\n");
    assert_eq!(context.included_document_ids, vec![DocumentId::from("a")]);
    assert_eq!(context.assembly.documents_windowed, 0);
}

#[test]
fn plain_prefix_is_capped_per_type_and_marked() {
    let mut budget = ContextBudget::default();
    budget.per_type_char_limit.regulation = 10;
    budget.per_type_char_limit.law = 20;

    let docs = ranked(vec![
        scored("r", "R", &"ñ".repeat(50), DocumentType::Regulation),
        scored("l", "L", &"x".repeat(50), DocumentType::Law),
    ]);
    let context = assemble(&docs, &no_anchors(), &budget);

    let expected = format!(
        "=== R (regulation) ===\n{}\n[...]\n\n=== L (law) ===\n{}\n[...]\n\n",
        "ñ".repeat(10),
        "x".repeat(20)
    );
    assert_eq!(context.text, expected);
}

#[test]
fn default_limits_favor_laws() {
    let budget = ContextBudget::default();
    assert_eq!(budget.limit_for(DocumentType::Law), 2500);
    assert_eq!(budget.limit_for(DocumentType::Regulation), 1500);
    assert_eq!(budget.limit_for(DocumentType::GeneralTopic), 1500);
    assert_eq!(budget.limit_for(DocumentType::SpecificTopic), 1500);
}

#[test]
fn anchor_window_runs_to_the_next_article() {
    let content = "Preámbulo extenso. Artículo 204. Texto A. Artículo 205. Texto B. Artículo 206. Texto C.";
    let docs = ranked(vec![scored("lgss", "LGSS", content, DocumentType::Law)]);
    let analysis = QueryAnalysis::analyze("¿qué dice el artículo 205?", &[]);

    let context = assemble(&docs, &analysis, &ContextBudget::default());

    assert_eq!(
        context.text,
        "=== LGSS (law) ===\nArtículo 205. Texto B. \n[...]\n\n"
    );
    assert_eq!(context.assembly.documents_windowed, 1);
}

#[test]
fn anchor_window_runs_to_end_of_content_and_is_capped() {
    let content = format!("Intro. Artículo 7. {}", "z".repeat(100));
    let mut budget = ContextBudget::default();
    budget.per_type_char_limit.law = 15;

    let docs = ranked(vec![scored("l", "L", &content, DocumentType::Law)]);
    let analysis = QueryAnalysis::analyze("art. 7", &[]);
    let context = assemble(&docs, &analysis, &budget);

    assert_eq!(context.text, "=== L (law) ===\nArtículo 7. zzz\n[...]\n\n");
}

#[test]
fn documents_without_the_anchor_fall_back_to_a_prefix() {
    let docs = ranked(vec![scored("t", "Tema", "Sin referencias a normas.", DocumentType::Regulation)]);
    let analysis = QueryAnalysis::analyze("artículo 205", &[]);
    let context = assemble(&docs, &analysis, &ContextBudget::default());

    assert!(context.text.contains("Sin referencias a normas."));
    assert_eq!(context.assembly.documents_windowed, 0);
}

#[test]
fn overflowing_document_gets_excerpt_block_and_stops_assembly() {
    let docs = ranked(vec![
        scored("a", "Primero", "texto breve", DocumentType::Regulation),
        scored("b", "Segundo", &"x".repeat(2000), DocumentType::Regulation),
        scored("c", "Tercero", "también breve", DocumentType::Regulation),
    ]);
    let budget = ContextBudget::with_max_total_chars(400);

    let context = assemble(&docs, &no_anchors(), &budget);

    let excerpt = format!("=== Segundo (excerpt) ===\n{}\n[...]\n\n", "x".repeat(300));
    assert!(context.text.ends_with(&excerpt));
    assert!(!context.text.contains("Tercero"));
    assert_eq!(context.included_document_ids, vec![DocumentId::from("a"), DocumentId::from("b")]);
    assert!(context.assembly.fallback_excerpt_used);
    assert_eq!(context.assembly.documents_omitted_by_budget, 1);
    assert!(context.total_chars <= 400);
}

#[test]
fn excerpt_block_is_clipped_to_remaining_budget() {
    let docs = ranked(vec![scored("b", "Segundo", &"x".repeat(2000), DocumentType::Regulation)]);
    let context = assemble(&docs, &no_anchors(), &ContextBudget::with_max_total_chars(40));

    assert_eq!(context.total_chars, 40);
    assert!(context.text.starts_with("=== Segundo (excerpt) ==="));
}

#[test]
fn included_ids_follow_rank_order() {
    let docs = ranked(vec![
        scored("3", "C", "c", DocumentType::Regulation),
        scored("1", "A", "a", DocumentType::Regulation),
        scored("2", "B", "b", DocumentType::Regulation),
    ]);
    let context = assemble(&docs, &no_anchors(), &ContextBudget::default());
    let ids: Vec<&str> = context.included_document_ids.iter().map(|id| id.as_str()).collect();
    assert_eq!(ids, vec!["3", "1", "2"]);
}
