//! Multi-page workshop state.
//!
//! Each page (garden, house, garage) holds its own list of building
//! materials. Project statistics are derived from all pages together and
//! rebuilt by the reducer after every change to any page.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tutor_model::{Block, BlockId, BlockKind, ModelError};

use crate::explanation::{Explanation, RequestTicket};
use crate::stats::Stats;
use crate::store::{ExplanationHost, Reducer};

/// Default text of the blueprint panel.
pub const DEFAULT_AI_BLUEPRINT: &str = "Click \"Generate Idea\" to get a blueprint from AI.";

/// Default text of the learning-concept panel.
pub const DEFAULT_AI_LEARNING_CONCEPT: &str = "Click a concept to learn more.";

/// Default text of the diff panel.
pub const DEFAULT_AI_DIFF: &str = "No changes detected yet.";

/// Workshop pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PageId {
    #[default]
    Garden,
    House,
    Garage,
}

impl PageId {
    /// All pages in navigation order.
    pub const ALL: [Self; 3] = [Self::Garden, Self::House, Self::Garage];

    /// Raw upper-case identifier.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Garden => "GARDEN",
            Self::House => "HOUSE",
            Self::Garage => "GARAGE",
        }
    }

    /// Display name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Garden => "Garden",
            Self::House => "House",
            Self::Garage => "Legacy Garage",
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for PageId {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|page| page.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ModelError::UnknownPage(s.to_string()))
    }
}

/// One workshop page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page {
    /// Page identifier.
    pub id: PageId,
    /// Placed materials in display order.
    pub components: Vec<Block>,
}

impl Page {
    fn new(id: PageId) -> Self {
        Self {
            id,
            components: Vec::new(),
        }
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.id.name()
    }
}

/// Which panel a fulfilled explanation is written into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AiTarget {
    #[default]
    Blueprint,
    LearningConcept,
    Diff,
}

/// Transitions of the workshop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkshopAction {
    /// Navigate to a page.
    SetCurrentPage(PageId),
    /// Place a material on a page; non-materials are ignored.
    AddComponent { page: PageId, kind: BlockKind },
    /// Remove a component from a page.
    RemoveComponent { page: PageId, id: BlockId },
    /// Remove every component from a page.
    ClearPage(PageId),
    /// Rebuild the statistics.
    RecomputeStats,
    /// Dismiss the explanation result.
    ClearExplanation,
    /// Start an explanation request whose text goes to `target`.
    BeginExplanation { target: AiTarget },
    /// The request identified by `ticket` returned text.
    ExplanationSucceeded { ticket: RequestTicket, text: String },
    /// The request identified by `ticket` failed.
    ExplanationFailed {
        ticket: RequestTicket,
        message: String,
    },
}

/// The multi-page workshop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkshopState {
    current_page: PageId,
    pages: [Page; 3],
    stats: Stats,
    ai_blueprint: String,
    ai_learning_concept: String,
    ai_diff: String,
    ai_target: AiTarget,
    explanation: Explanation,
}

impl Default for WorkshopState {
    fn default() -> Self {
        Self {
            current_page: PageId::default(),
            pages: PageId::ALL.map(Page::new),
            stats: Stats::default(),
            ai_blueprint: DEFAULT_AI_BLUEPRINT.to_string(),
            ai_learning_concept: DEFAULT_AI_LEARNING_CONCEPT.to_string(),
            ai_diff: DEFAULT_AI_DIFF.to_string(),
            ai_target: AiTarget::default(),
            explanation: Explanation::default(),
        }
    }
}

impl WorkshopState {
    /// Page currently shown.
    #[must_use]
    pub fn current_page(&self) -> PageId {
        self.current_page
    }

    /// A page by id.
    #[must_use]
    pub fn page(&self, id: PageId) -> &Page {
        &self.pages[id.index()]
    }

    fn page_mut(&mut self, id: PageId) -> &mut Page {
        &mut self.pages[id.index()]
    }

    /// All pages in navigation order.
    #[must_use]
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Statistics across all pages.
    #[must_use]
    pub fn stats(&self) -> Stats {
        self.stats
    }

    /// Text of an AI panel.
    #[must_use]
    pub fn ai_text(&self, target: AiTarget) -> &str {
        match target {
            AiTarget::Blueprint => &self.ai_blueprint,
            AiTarget::LearningConcept => &self.ai_learning_concept,
            AiTarget::Diff => &self.ai_diff,
        }
    }

    fn recompute_stats(&mut self) {
        self.stats = Stats::recompute(self.pages.iter().map(|p| p.components.as_slice()));
    }

    fn add_component(&mut self, page: PageId, kind: BlockKind) {
        if !kind.is_material() {
            tracing::debug!(%page, %kind, "only materials can be placed on workshop pages");
            return;
        }
        self.page_mut(page).components.push(Block::new(kind));
    }

    fn settle(&mut self, ticket: RequestTicket, outcome: Result<String, String>) {
        let text = outcome.as_ref().ok().cloned();
        if self.explanation.settle(ticket, outcome)
            && let Some(text) = text
        {
            match self.ai_target {
                AiTarget::Blueprint => self.ai_blueprint = text,
                AiTarget::LearningConcept => self.ai_learning_concept = text,
                AiTarget::Diff => self.ai_diff = text,
            }
        }
    }
}

impl Reducer for WorkshopState {
    type Action = WorkshopAction;

    fn reduce(mut self, action: WorkshopAction) -> Self {
        match action {
            WorkshopAction::SetCurrentPage(page) => self.current_page = page,
            WorkshopAction::AddComponent { page, kind } => {
                self.add_component(page, kind);
                self.recompute_stats();
            }
            WorkshopAction::RemoveComponent { page, id } => {
                self.page_mut(page).components.retain(|c| c.id() != id);
                self.recompute_stats();
            }
            WorkshopAction::ClearPage(page) => {
                self.page_mut(page).components.clear();
                self.recompute_stats();
            }
            WorkshopAction::RecomputeStats => self.recompute_stats(),
            WorkshopAction::ClearExplanation => self.explanation.clear(),
            WorkshopAction::BeginExplanation { target } => {
                self.ai_target = target;
                self.explanation.begin();
            }
            WorkshopAction::ExplanationSucceeded { ticket, text } => {
                self.settle(ticket, Ok(text));
            }
            WorkshopAction::ExplanationFailed { ticket, message } => {
                self.settle(ticket, Err(message));
            }
        }
        self
    }
}

impl ExplanationHost for WorkshopState {
    fn explanation(&self) -> &Explanation {
        &self.explanation
    }

    fn settle_action(ticket: RequestTicket, outcome: Result<String, String>) -> WorkshopAction {
        match outcome {
            Ok(text) => WorkshopAction::ExplanationSucceeded { ticket, text },
            Err(message) => WorkshopAction::ExplanationFailed { ticket, message },
        }
    }
}
