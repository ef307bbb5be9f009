//! Integration tests for the tutor stores.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use proptest::prelude::*;
use tutor_model::{Attributes, Block, BlockKind};
use tutor_store::{
    ExplanationHost, ExplanationPhase, HouseAction, HouseState, PageId, Reducer, Store,
    StoreHandle, WorkshopAction, WorkshopState,
};

fn patch(pairs: &[(&str, &str)]) -> Attributes {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

fn kind_strategy() -> impl Strategy<Value = BlockKind> {
    prop::sample::select(BlockKind::ALL.to_vec())
}

fn material_strategy() -> impl Strategy<Value = BlockKind> {
    prop::sample::select(BlockKind::MATERIALS.to_vec())
}

#[test]
fn test_house_walkthrough() {
    let mut store = Store::<HouseState>::default();
    store.dispatch(HouseAction::AddBlock {
        kind: BlockKind::Wall,
    });
    store.dispatch(HouseAction::AddBlock {
        kind: BlockKind::Door,
    });

    let door = store.state().blocks()[1].id();
    store.dispatch(HouseAction::UpdateBlockAttributes {
        id: door,
        patch: patch(&[("label", "Front")]),
    });
    store.dispatch(HouseAction::UpdateBlockAttributes {
        id: door,
        patch: patch(&[("color", "bg-red-500")]),
    });

    let block = store.state().block(door).unwrap();
    assert_eq!(block.label(), Some("Front"));
    assert_eq!(block.color(), Some("bg-red-500"));

    store.dispatch(HouseAction::RemoveBlock { id: door });
    store.dispatch(HouseAction::RemoveBlock { id: door });
    assert_eq!(store.state().blocks().len(), 1);
    assert_eq!(store.state().blocks()[0].kind(), BlockKind::Wall);
    assert_eq!(store.dispatched(), 6);
}

#[test]
fn test_store_explanation_tickets() {
    let mut store = Store::<HouseState>::default();
    let first = store.begin_explanation(HouseAction::BeginExplanation).unwrap();
    let second = store.begin_explanation(HouseAction::BeginExplanation).unwrap();
    assert_eq!(second.generation(), first.generation() + 1);

    assert!(!store.settle_explanation(first, Ok("old".to_string())));
    assert!(store.state().explanation().is_pending());

    assert!(store.settle_explanation(second, Ok("new".to_string())));
    assert_eq!(store.state().explanation().text(), "new");
}

#[test]
fn test_begin_on_wrong_action_yields_no_ticket() {
    let mut store = Store::<HouseState>::default();
    assert!(store.begin_explanation(HouseAction::ClearExplanation).is_none());
    assert_eq!(store.state().explanation().phase(), ExplanationPhase::Idle);
}

#[test]
fn test_non_begin_action_while_pending_yields_no_ticket() {
    let mut store = Store::<HouseState>::default();
    let ticket = store.begin_explanation(HouseAction::BeginExplanation).unwrap();

    let other = store.begin_explanation(HouseAction::AddBlock {
        kind: BlockKind::Wall,
    });
    assert!(other.is_none());
    assert!(store.state().explanation().is_pending());
    assert_eq!(store.state().explanation().current_ticket(), Some(ticket));
}

#[test]
fn test_settled_ticket_cannot_settle_again() {
    let mut store = Store::<HouseState>::default();
    let ticket = store.begin_explanation(HouseAction::BeginExplanation).unwrap();

    assert!(store.settle_explanation(ticket, Ok("answer".to_string())));
    assert!(!store.settle_explanation(ticket, Ok("again".to_string())));
    assert!(!store.settle_explanation(ticket, Err("Failed to fetch".to_string())));
    assert_eq!(store.state().explanation().phase(), ExplanationPhase::Fulfilled);
    assert_eq!(store.state().explanation().text(), "answer");
}

#[test]
fn test_subscriber_observes_explanation_phases() {
    let phases = Arc::new(Mutex::new(Vec::new()));
    let mut store = Store::<HouseState>::default();
    let sink = Arc::clone(&phases);
    store.subscribe(move |state: &HouseState| {
        sink.lock().unwrap().push(state.explanation().phase());
    });

    let ticket = store.begin_explanation(HouseAction::BeginExplanation).unwrap();
    store.settle_explanation(ticket, Err("Failed to fetch".to_string()));
    store.dispatch(HouseAction::ClearExplanation);

    assert_eq!(
        *phases.lock().unwrap(),
        vec![
            ExplanationPhase::Pending,
            ExplanationPhase::Rejected,
            ExplanationPhase::Idle
        ]
    );
}

#[test]
fn test_handle_across_threads() {
    let handle = StoreHandle::<WorkshopState>::default();
    let workers: Vec<_> = PageId::ALL
        .into_iter()
        .map(|page| {
            let handle = handle.clone();
            std::thread::spawn(move || {
                for _ in 0..5 {
                    handle.dispatch(WorkshopAction::AddComponent {
                        page,
                        kind: BlockKind::Brick,
                    });
                }
            })
        })
        .collect();
    for worker in workers {
        worker.join().unwrap();
    }

    let state = handle.snapshot();
    assert_eq!(state.stats().total_blocks, 15);
    assert_eq!(state.stats().total_cost, 300);
    assert_eq!(handle.with(|store| store.dispatched()), 15);
}

#[test]
fn test_workshop_stats_snapshot() {
    let state = [BlockKind::Wood, BlockKind::Gold, BlockKind::Water]
        .into_iter()
        .zip(PageId::ALL)
        .fold(WorkshopState::default(), |state, (kind, page)| {
            state.reduce(WorkshopAction::AddComponent { page, kind })
        });

    insta::assert_json_snapshot!(state.stats(), @r#"
    {
      "totalBlocks": 3,
      "totalCost": 110
    }
    "#);
}

#[test]
fn test_explanation_snapshot() {
    let state = HouseState::default().reduce(HouseAction::BeginExplanation);
    let ticket = state.explanation().current_ticket().unwrap();
    let state = state.reduce(HouseAction::ExplanationSucceeded {
        ticket,
        text: "A reducer is a rulebook.".to_string(),
    });

    insta::assert_json_snapshot!(state.explanation(), @r#"
    {
      "state": {
        "phase": "fulfilled",
        "value": "A reducer is a rulebook."
      },
      "generation": 1
    }
    "#);
}

proptest! {
    #[test]
    fn prop_adds_append_with_unique_ids(kinds in prop::collection::vec(kind_strategy(), 0..32)) {
        let state = kinds
            .iter()
            .fold(HouseState::default(), |state, &kind| state.add_block(kind));

        prop_assert_eq!(state.blocks().len(), kinds.len());
        let placed: Vec<BlockKind> = state.blocks().iter().map(Block::kind).collect();
        prop_assert_eq!(placed, kinds);

        let ids: HashSet<_> = state.blocks().iter().map(Block::id).collect();
        prop_assert_eq!(ids.len(), state.blocks().len());
    }

    #[test]
    fn prop_remove_is_idempotent(
        kinds in prop::collection::vec(kind_strategy(), 1..16),
        index in any::<prop::sample::Index>(),
    ) {
        let state = kinds
            .iter()
            .fold(HouseState::default(), |state, &kind| state.add_block(kind));
        let id = state.blocks()[index.index(kinds.len())].id();

        let once = state.reduce(HouseAction::RemoveBlock { id });
        let twice = once.clone().reduce(HouseAction::RemoveBlock { id });
        prop_assert_eq!(once.blocks().len(), kinds.len() - 1);
        prop_assert!(once.block(id).is_none());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_updates_never_touch_other_blocks(
        kinds in prop::collection::vec(kind_strategy(), 2..8),
        label in "[A-Za-z ]{1,12}",
    ) {
        let state = kinds
            .iter()
            .fold(HouseState::default(), |state, &kind| state.add_block(kind));
        let target = state.blocks()[0].id();
        let before = state.blocks()[1..].to_vec();

        let state = state.reduce(HouseAction::UpdateBlockAttributes {
            id: target,
            patch: patch(&[("label", label.as_str())]),
        });
        prop_assert_eq!(state.blocks()[0].label(), Some(label.as_str()));
        prop_assert_eq!(&state.blocks()[1..], before.as_slice());
    }

    #[test]
    fn prop_workshop_stats_match_contents(
        placements in prop::collection::vec((material_strategy(), 0usize..3), 0..24),
    ) {
        let state = placements.iter().fold(WorkshopState::default(), |state, &(kind, page)| {
            state.reduce(WorkshopAction::AddComponent { page: PageId::ALL[page], kind })
        });

        let expected_cost: u64 = placements
            .iter()
            .map(|(kind, _)| u64::from(tutor_model::lookup_cost(*kind)))
            .sum();
        prop_assert_eq!(state.stats().total_blocks, placements.len());
        prop_assert_eq!(state.stats().total_cost, expected_cost);
    }
}
