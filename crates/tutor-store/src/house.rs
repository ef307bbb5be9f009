//! House blueprint state.
//!
//! The canonical store: one ordered list of placed blocks plus the
//! explanation sub-state for the tutor panel.

use serde::Serialize;
use tutor_model::{Attributes, Block, BlockId, BlockKind, ModelError};

use crate::explanation::{Explanation, RequestTicket};
use crate::store::{ExplanationHost, Reducer};

/// Transitions of the house blueprint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HouseAction {
    /// Append a new block with registry defaults.
    AddBlock { kind: BlockKind },
    /// Shallow-merge `patch` into the attributes of block `id`.
    UpdateBlockAttributes { id: BlockId, patch: Attributes },
    /// Remove block `id`.
    RemoveBlock { id: BlockId },
    /// Dismiss the explanation result.
    ClearExplanation,
    /// Start an explanation request.
    BeginExplanation,
    /// The request identified by `ticket` returned text.
    ExplanationSucceeded { ticket: RequestTicket, text: String },
    /// The request identified by `ticket` failed.
    ExplanationFailed {
        ticket: RequestTicket,
        message: String,
    },
}

impl HouseAction {
    /// Transition names accepted by [`HouseAction::parse`].
    pub const NAMES: [&'static str; 5] = [
        "ADD_BLOCK",
        "UPDATE_BLOCK_PROPS",
        "REMOVE_BLOCK",
        "CLEAR_EXPLANATION",
        "BEGIN_EXPLANATION",
    ];

    /// Parse a named transition with string arguments.
    ///
    /// - `ADD_BLOCK <KIND>`
    /// - `UPDATE_BLOCK_PROPS <ID> key=value...`
    /// - `REMOVE_BLOCK <ID>`
    /// - `CLEAR_EXPLANATION`
    /// - `BEGIN_EXPLANATION`
    ///
    /// Settlements are not parseable; they only come from the request
    /// controller. Any other name is a contract violation.
    pub fn parse(name: &str, args: &[&str]) -> tutor_model::Result<Self> {
        let malformed = |reason: &str| ModelError::MalformedTransition {
            transition: name.to_string(),
            reason: reason.to_string(),
        };

        match name.to_ascii_uppercase().as_str() {
            "ADD_BLOCK" => {
                let [kind] = args else {
                    return Err(malformed("expected exactly one block kind"));
                };
                Ok(Self::AddBlock {
                    kind: kind.parse()?,
                })
            }
            "UPDATE_BLOCK_PROPS" => {
                let Some((id, pairs)) = args.split_first() else {
                    return Err(malformed("expected a block id"));
                };
                let mut patch = Attributes::new();
                for pair in pairs {
                    let (key, value) = pair
                        .split_once('=')
                        .ok_or_else(|| malformed("attributes must be key=value"))?;
                    if key.is_empty() {
                        return Err(malformed("attribute key must not be empty"));
                    }
                    patch.insert(key.to_string(), value.to_string());
                }
                Ok(Self::UpdateBlockAttributes {
                    id: id.parse()?,
                    patch,
                })
            }
            "REMOVE_BLOCK" => {
                let [id] = args else {
                    return Err(malformed("expected exactly one block id"));
                };
                Ok(Self::RemoveBlock { id: id.parse()? })
            }
            "CLEAR_EXPLANATION" if args.is_empty() => Ok(Self::ClearExplanation),
            "BEGIN_EXPLANATION" if args.is_empty() => Ok(Self::BeginExplanation),
            "CLEAR_EXPLANATION" | "BEGIN_EXPLANATION" => Err(malformed("takes no arguments")),
            _ => Err(ModelError::UnknownTransition(name.to_string())),
        }
    }
}

/// The house blueprint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HouseState {
    blocks: Vec<Block>,
    explanation: Explanation,
}

impl HouseState {
    /// Placed blocks in display order.
    #[must_use]
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Block by id.
    #[must_use]
    pub fn block(&self, id: BlockId) -> Option<&Block> {
        self.blocks.iter().find(|b| b.id() == id)
    }

    /// Append a block of `kind`.
    #[must_use]
    pub fn add_block(mut self, kind: BlockKind) -> Self {
        self.blocks.push(Block::new(kind));
        self
    }

    /// Merge `patch` into block `id`; no-op when the block is absent.
    #[must_use]
    pub fn update_block_attributes(mut self, id: BlockId, patch: &Attributes) -> Self {
        if let Some(block) = self.blocks.iter_mut().find(|b| b.id() == id) {
            *block = block.merged(patch);
        } else {
            tracing::debug!(%id, "update for missing block ignored");
        }
        self
    }

    /// Remove block `id`; no-op when the block is absent.
    #[must_use]
    pub fn remove_block(mut self, id: BlockId) -> Self {
        self.blocks.retain(|b| b.id() != id);
        self
    }

    /// Dismiss the explanation result.
    #[must_use]
    pub fn clear_explanation(mut self) -> Self {
        self.explanation.clear();
        self
    }

    /// Enter the pending sub-state.
    #[must_use]
    pub fn begin_explanation_request(mut self) -> Self {
        self.explanation.begin();
        self
    }

    /// Settle request `ticket` with text.
    #[must_use]
    pub fn resolve_explanation_success(mut self, ticket: RequestTicket, text: String) -> Self {
        self.explanation.settle(ticket, Ok(text));
        self
    }

    /// Settle request `ticket` with a failure message.
    #[must_use]
    pub fn resolve_explanation_failure(mut self, ticket: RequestTicket, message: String) -> Self {
        self.explanation.settle(ticket, Err(message));
        self
    }
}

impl Reducer for HouseState {
    type Action = HouseAction;

    fn reduce(self, action: HouseAction) -> Self {
        match action {
            HouseAction::AddBlock { kind } => self.add_block(kind),
            HouseAction::UpdateBlockAttributes { id, patch } => {
                self.update_block_attributes(id, &patch)
            }
            HouseAction::RemoveBlock { id } => self.remove_block(id),
            HouseAction::ClearExplanation => self.clear_explanation(),
            HouseAction::BeginExplanation => self.begin_explanation_request(),
            HouseAction::ExplanationSucceeded { ticket, text } => {
                self.resolve_explanation_success(ticket, text)
            }
            HouseAction::ExplanationFailed { ticket, message } => {
                self.resolve_explanation_failure(ticket, message)
            }
        }
    }
}

impl ExplanationHost for HouseState {
    fn explanation(&self) -> &Explanation {
        &self.explanation
    }

    fn settle_action(ticket: RequestTicket, outcome: Result<String, String>) -> HouseAction {
        match outcome {
            Ok(text) => HouseAction::ExplanationSucceeded { ticket, text },
            Err(message) => HouseAction::ExplanationFailed { ticket, message },
        }
    }
}
