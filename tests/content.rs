//! Checks over the quiz content shipped with the crate.

use std::path::Path;

use case_class_quiz::{check_answers, load_document_from_path, Document, Session};

fn content_path() -> &'static Path {
    Path::new(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/content/case_classes.json"
    ))
}

#[test]
fn shipped_content_loads_from_disk() {
    let document = load_document_from_path(content_path()).unwrap();
    assert_eq!(document.title, "Case Classes");
    assert!(!document.modules.is_empty());
    assert_eq!(document, Document::builtin());
}

#[test]
fn every_module_satisfies_the_placeholder_contract() {
    let document = Document::builtin();
    for (index, module) in document.modules.iter().enumerate() {
        assert_eq!(
            module.placeholder_count(),
            module.solutions.len(),
            "module {} violates the placeholder/solution contract",
            index
        );
        assert!(
            module.placeholder_count() > 0,
            "module {} has no placeholders",
            index
        );
    }
}

#[test]
fn shipped_content_round_trips_losslessly() {
    let document = Document::builtin();
    let json = serde_json::to_string(&document).unwrap();
    let reparsed: Document = serde_json::from_str(&json).unwrap();
    assert_eq!(document, reparsed);

    // The serialized form also matches the file on disk value-for-value.
    let on_disk: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(content_path()).unwrap()).unwrap();
    let reserialized: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(on_disk, reserialized);
}

#[test]
fn perfect_run_scores_every_placeholder() {
    let mut session = Session::builtin();

    while let Some(module) = session.current_module() {
        let answers: Vec<String> = module
            .solutions
            .iter()
            .map(|solution| solution.to_string())
            .collect();
        let results = session.submit(&answers).unwrap();
        assert!(results.iter().all(|correct| *correct));
    }

    assert!(session.is_complete());
    assert_eq!(session.score(), session.total_placeholders());
}

#[test]
fn wrong_answers_are_marked_per_position() {
    let document = Document::builtin();
    let first = &document.modules[0];

    // First module expects [true, false].
    assert_eq!(
        check_answers(first, &["true", "false"]).unwrap(),
        vec![true, true]
    );
    assert_eq!(
        check_answers(first, &["false", "false"]).unwrap(),
        vec![false, true]
    );
}
