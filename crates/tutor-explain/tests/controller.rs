//! Request lifecycle tests against scripted sources.

use std::collections::HashMap;
use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tutor_explain::{
    ExplainError, ExplainRequest, ExplanationSource, Result, Settlement, request_explanation,
};
use tutor_model::{BlockKind, DEFAULT_SYSTEM_PROMPT};
use tutor_store::{
    AiTarget, ExplanationHost, ExplanationPhase, HouseAction, HouseState, Store, StoreHandle,
    WorkshopAction, WorkshopState,
};

/// Replies keyed by user prompt, each after a fixed delay.
#[derive(Default)]
struct ScriptedSource {
    replies: HashMap<String, (Duration, Result<String>)>,
    calls: AtomicUsize,
}

impl ScriptedSource {
    fn reply(mut self, prompt: &str, delay_ms: u64, reply: Result<String>) -> Self {
        self.replies
            .insert(prompt.to_string(), (Duration::from_millis(delay_ms), reply));
        self
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ExplanationSource for ScriptedSource {
    fn explain(&self, request: &ExplainRequest) -> impl Future<Output = Result<String>> + Send {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let (delay, reply) = self
            .replies
            .get(&request.user_prompt)
            .cloned()
            .unwrap_or((
                Duration::ZERO,
                Err(ExplainError::Network("no scripted reply".to_string())),
            ));
        async move {
            tokio::time::sleep(delay).await;
            reply
        }
    }
}

fn request(prompt: &str) -> ExplainRequest {
    ExplainRequest::new(prompt, DEFAULT_SYSTEM_PROMPT)
}

#[tokio::test(start_paused = true)]
async fn test_success_passes_through_pending() {
    let phases = Arc::new(Mutex::new(Vec::new()));
    let mut store = Store::<HouseState>::default();
    let sink = Arc::clone(&phases);
    store.subscribe(move |state: &HouseState| {
        sink.lock().unwrap().push(state.explanation().phase());
    });
    let handle = StoreHandle::new(store);
    let source = ScriptedSource::default().reply("What is JSX?", 300, Ok("Markup in JS.".into()));

    let settlement = request_explanation(
        &handle,
        &source,
        HouseAction::BeginExplanation,
        &request("What is JSX?"),
    )
    .await;

    assert!(settlement.is_applied());
    assert_eq!(
        *phases.lock().unwrap(),
        vec![ExplanationPhase::Pending, ExplanationPhase::Fulfilled]
    );
    assert_eq!(handle.snapshot().explanation().text(), "Markup in JS.");
    assert_eq!(source.calls(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_endpoint_failure_is_rejected_with_message() {
    let handle = StoreHandle::<HouseState>::default();
    let source = ScriptedSource::default().reply(
        "Explain props",
        10,
        Err(ExplainError::Api {
            status: 500,
            message: "Model overloaded".to_string(),
        }),
    );

    let settlement = request_explanation(
        &handle,
        &source,
        HouseAction::BeginExplanation,
        &request("Explain props"),
    )
    .await;

    assert_eq!(
        settlement,
        Settlement::Applied {
            ticket: handle.snapshot().explanation().current_ticket().unwrap(),
            phase: ExplanationPhase::Rejected,
        }
    );
    let state = handle.snapshot();
    assert_eq!(state.explanation().error(), Some("Model overloaded"));
    assert_eq!(state.explanation().text(), "");
}

#[tokio::test(start_paused = true)]
async fn test_transport_failure_is_rejected_the_same_way() {
    let handle = StoreHandle::<HouseState>::default();
    let source = ScriptedSource::default();

    request_explanation(
        &handle,
        &source,
        HouseAction::BeginExplanation,
        &request("anything"),
    )
    .await;

    let state = handle.snapshot();
    assert_eq!(state.explanation().phase(), ExplanationPhase::Rejected);
    assert_eq!(
        state.explanation().error(),
        Some(ExplainError::Network(String::new()).user_message())
    );
}

#[tokio::test(start_paused = true)]
async fn test_newest_request_wins_when_older_settles_last() {
    let handle = StoreHandle::<HouseState>::default();
    let source = ScriptedSource::default()
        .reply("slow", 200, Ok("slow answer".into()))
        .reply("fast", 50, Ok("fast answer".into()));

    let slow_request = request("slow");
    let fast_request = request("fast");
    let (slow, fast) = tokio::join!(
        request_explanation(&handle, &source, HouseAction::BeginExplanation, &slow_request),
        request_explanation(&handle, &source, HouseAction::BeginExplanation, &fast_request),
    );

    assert!(matches!(slow, Settlement::Superseded { .. }));
    assert!(fast.is_applied());
    assert_eq!(handle.snapshot().explanation().text(), "fast answer");
}

#[tokio::test(start_paused = true)]
async fn test_older_request_settling_first_is_dropped() {
    let handle = StoreHandle::<HouseState>::default();
    let source = ScriptedSource::default()
        .reply("fast", 50, Ok("fast answer".into()))
        .reply("slow", 200, Ok("slow answer".into()));

    let fast_request = request("fast");
    let slow_request = request("slow");
    let (fast, slow) = tokio::join!(
        request_explanation(&handle, &source, HouseAction::BeginExplanation, &fast_request),
        request_explanation(&handle, &source, HouseAction::BeginExplanation, &slow_request),
    );

    assert!(matches!(fast, Settlement::Superseded { .. }));
    assert!(slow.is_applied());
    assert_eq!(handle.snapshot().explanation().text(), "slow answer");
}

#[tokio::test(start_paused = true)]
async fn test_workshop_text_lands_in_target_panel() {
    let handle = StoreHandle::<WorkshopState>::default();
    let source =
        ScriptedSource::default().reply("What is a reducer?", 20, Ok("A rulebook.".into()));

    request_explanation(
        &handle,
        &source,
        WorkshopAction::BeginExplanation {
            target: AiTarget::LearningConcept,
        },
        &request("What is a reducer?"),
    )
    .await;

    let state = handle.snapshot();
    assert_eq!(state.ai_text(AiTarget::LearningConcept), "A rulebook.");
    assert_eq!(state.explanation().phase(), ExplanationPhase::Fulfilled);
}

#[tokio::test(start_paused = true)]
async fn test_non_begin_action_sends_nothing() {
    let handle = StoreHandle::<HouseState>::default();
    let source = ScriptedSource::default();

    let settlement = request_explanation(
        &handle,
        &source,
        HouseAction::ClearExplanation,
        &request("ignored"),
    )
    .await;

    assert_eq!(settlement, Settlement::NotStarted);
    assert_eq!(source.calls(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_non_begin_action_during_request_does_not_share_its_ticket() {
    let handle = StoreHandle::<HouseState>::default();
    let source = ScriptedSource::default()
        .reply("slow", 200, Ok("slow answer".into()))
        .reply("other", 10, Ok("other answer".into()));
    let slow_request = request("slow");
    let other_request = request("other");

    let (slow, other) = tokio::join!(
        request_explanation(&handle, &source, HouseAction::BeginExplanation, &slow_request),
        request_explanation(
            &handle,
            &source,
            HouseAction::AddBlock {
                kind: BlockKind::Wall
            },
            &other_request
        ),
    );

    assert!(slow.is_applied());
    assert_eq!(other, Settlement::NotStarted);
    assert_eq!(source.calls(), 1);
    let state = handle.snapshot();
    assert_eq!(state.explanation().text(), "slow answer");
    assert_eq!(state.blocks().len(), 1);
}
