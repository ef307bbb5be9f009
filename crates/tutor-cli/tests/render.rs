//! Rendered output tests.

use tutor_cli::render::{concepts_table, explanation_line, house_report, tutor_log};
use tutor_cli::replay::replay;
use tutor_store::{DiffLab, Explanation, UiSnapshot};

#[test]
fn test_diff_cycle_narration() {
    let mut lab = DiffLab::default();
    lab.update(UiSnapshot::new("Hi", "bg-blue-500"));
    lab.advance();
    lab.advance();

    insta::assert_snapshot!(tutor_log(lab.log()), @r#"
    [State Change] State is changing!
        You clicked a button! This called 'setUiState' to request a UI update.
    [Diffing] Diffing VDOM trees...
        React is comparing the "New VDOM" to the "Previous VDOM" to see what changed.
    [Patch] Change found! Patching...
        A difference was found in `text`! React is now updating *only that part* of the Real DOM.
    [Patch] Patch complete!
        The Real DOM is updated. The "New VDOM" now becomes the "Previous VDOM" for the next update.
    "#);
}

#[test]
fn test_explanation_lines() {
    let mut explanation = Explanation::default();
    assert_eq!(explanation_line(&explanation), "idle");

    let ticket = explanation.begin();
    assert_eq!(explanation_line(&explanation), "pending");

    explanation.settle(ticket, Err("Failed to generate explanation".to_string()));
    assert_eq!(
        explanation_line(&explanation),
        "rejected: Failed to generate explanation"
    );
}

#[test]
fn test_replayed_house_report() {
    let store = replay(["ADD_BLOCK WINDOW", "UPDATE_BLOCK_PROPS @1 label=Bay"]).unwrap();
    let report = house_report(store.state());
    let first = report.lines().next().unwrap();
    assert!(first.starts_with("@1 WINDOW color=bg-blue-300 label=Bay  ["), "{first}");
}

#[test]
fn test_concepts_table_mentions_every_concept() {
    let rendered = concepts_table().to_string();
    for concept in tutor_model::CONCEPTS {
        assert!(rendered.contains(concept.id), "{}", concept.id);
    }
}
