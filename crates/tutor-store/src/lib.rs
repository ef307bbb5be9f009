//! State stores for the blueprint tutor.
//!
//! Every store is a plain state value with a closed set of pure transitions
//! (see [`Reducer`]). The [`Store`] wrapper owns one such value, applies
//! actions in the order they are submitted, and notifies subscribers.
//!
//! - [`house`]: the canonical house blueprint (block CRUD + explanation)
//! - [`workshop`]: the multi-page variant with derived [`Stats`]
//! - [`garden`]: a page-local reducer for flower plots
//! - [`diff_lab`]: the scripted virtual-DOM diff animation
//! - [`tutor`]: per-page Tutor Bot narration log

pub mod diff_lab;
pub mod explanation;
pub mod garden;
pub mod house;
pub mod stats;
pub mod store;
pub mod tutor;
pub mod workshop;

pub use diff_lab::{DiffDelays, DiffLab, DiffPhase, UiSnapshot, run_cycle};
pub use explanation::{Explanation, ExplanationPhase, ExplanationState, RequestTicket};
pub use garden::{GardenAction, GardenState, Plot};
pub use house::{HouseAction, HouseState};
pub use stats::Stats;
pub use store::{ExplanationHost, Reducer, Store, StoreHandle};
pub use tutor::{TUTOR_LOG_CAPACITY, TutorLog, TutorMessage};
pub use workshop::{AiTarget, Page, PageId, WorkshopAction, WorkshopState};
