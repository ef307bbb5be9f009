//! Text and table rendering for command output.

use std::fmt::Write as _;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};
use tutor_model::{Block, CONCEPTS, REGISTRY};
use tutor_store::{
    Explanation, ExplanationHost, ExplanationState, GardenState, HouseState, Stats, TutorLog,
    WorkshopState,
};

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

/// The block palette: every kind with its defaults and cost.
pub fn registry_table() -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Kind", "Label", "Color", "Cost"]);
    apply_table_style(&mut table);
    for spec in REGISTRY {
        let cost = spec.cost.map_or_else(|| "-".to_string(), |cost| cost.to_string());
        table.add_row(vec![
            Cell::new(spec.kind.name()),
            Cell::new(spec.label),
            Cell::new(spec.color),
            Cell::new(cost).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

/// The learning-concept catalog.
pub fn concepts_table() -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Id", "Concept", "Prompt"]);
    apply_table_style(&mut table);
    for concept in CONCEPTS {
        table.add_row(vec![concept.id, concept.name, concept.prompt]);
    }
    table
}

fn block_summary(block: &Block) -> String {
    let mut line = block.kind().name().to_string();
    for (key, value) in &block.attributes {
        let _ = write!(line, " {key}={value}");
    }
    line
}

/// House blocks with their ids, then the explanation state.
pub fn house_report(state: &HouseState) -> String {
    let mut out = String::new();
    if state.blocks().is_empty() {
        out.push_str("(no blocks)\n");
    }
    for (index, block) in state.blocks().iter().enumerate() {
        let _ = writeln!(out, "@{} {}  [{}]", index + 1, block_summary(block), block.id());
    }
    let _ = writeln!(out, "explanation: {}", explanation_line(state.explanation()));
    out
}

/// Pages with their components, then the totals.
pub fn workshop_report(state: &WorkshopState) -> String {
    let mut out = String::new();
    for page in state.pages() {
        let marker = if page.id == state.current_page() {
            " <- current"
        } else {
            ""
        };
        let _ = writeln!(
            out,
            "{} ({}): {} component(s){marker}",
            page.name(),
            page.id,
            page.components.len()
        );
        for block in &page.components {
            let _ = writeln!(out, "    - {}", block_summary(block));
        }
    }
    out.push_str(&stats_line(state.stats()));
    out.push('\n');
    out
}

/// One line per plot.
pub fn garden_report(state: &GardenState) -> String {
    let mut out = String::new();
    for plot in state.plots() {
        let contents = match (plot.has_flower, plot.is_watered) {
            (false, _) => "empty",
            (true, false) => "flower (thirsty)",
            (true, true) => "flower (watered)",
        };
        let _ = writeln!(out, "plot {}: {contents}", plot.id);
    }
    let _ = writeln!(out, "Flowers: {}", state.flower_count());
    out
}

pub fn stats_line(stats: Stats) -> String {
    format!(
        "Total blocks: {}  Total cost: {}",
        stats.total_blocks, stats.total_cost
    )
}

/// One-line description of an explanation state.
pub fn explanation_line(explanation: &Explanation) -> String {
    match explanation.state() {
        ExplanationState::Idle => "idle".to_string(),
        ExplanationState::Pending => "pending".to_string(),
        ExplanationState::Fulfilled(text) => format!("fulfilled: {text}"),
        ExplanationState::Rejected(message) => format!("rejected: {message}"),
    }
}

/// Tutor Bot messages, oldest first.
pub fn tutor_log(log: &TutorLog) -> String {
    let messages: Vec<_> = log.iter().collect();
    let mut out = String::new();
    for message in messages.into_iter().rev() {
        let _ = writeln!(out, "[{}] {}", message.concept, message.event);
        let _ = writeln!(out, "    {}", message.explanation);
    }
    out
}
