//! Explanation requests for the blueprint tutor.
//!
//! This crate talks to the single text-generation endpoint behind the tutor
//! panel and maps each request onto the explanation sub-state of a store.
//!
//! - [`ExplainClient`]: POSTs `{ userPrompt, systemPrompt }` and reads `{ text }`
//! - [`request_explanation`]: begin, await, settle against a [`tutor_store::StoreHandle`]
//! - [`ExplanationSource`]: the transport seam, implemented by the client
//!
//! # Example
//!
//! ```no_run
//! use tutor_explain::{ExplainClient, ExplainRequest, ExplainSettings, request_explanation};
//! use tutor_store::{ExplanationHost, HouseAction, HouseState, StoreHandle};
//!
//! async fn explain_props() -> tutor_explain::Result<()> {
//!     let client = ExplainClient::new(&ExplainSettings::default())?;
//!     let handle = StoreHandle::<HouseState>::default();
//!     let request = ExplainRequest::new("What are props?", tutor_model::DEFAULT_SYSTEM_PROMPT);
//!
//!     request_explanation(&handle, &client, HouseAction::BeginExplanation, &request).await;
//!     println!("{}", handle.snapshot().explanation().text());
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod redact;
pub mod wire;

pub use client::ExplainClient;
pub use config::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS, ExplainSettings};
pub use controller::{ExplanationSource, Settlement, request_explanation};
pub use error::{ExplainError, FALLBACK_ERROR_MESSAGE, Result};
pub use wire::{ExplainErrorBody, ExplainRequest, ExplainResponse};
