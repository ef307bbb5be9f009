//! Garden plots, managed by a local reducer rather than a shared store.

use std::str::FromStr;

use serde::Serialize;
use tutor_model::ModelError;

use crate::store::Reducer;

/// One flower plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Plot {
    /// Plot number, starting at 1.
    pub id: u32,
    pub has_flower: bool,
    /// Reset whenever the plot is replanted or cleared.
    pub is_watered: bool,
}

impl Plot {
    const fn new(id: u32, has_flower: bool) -> Self {
        Self {
            id,
            has_flower,
            is_watered: false,
        }
    }
}

/// Transitions on the garden plots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GardenAction {
    /// Put a flower in the numbered plot.
    PlantFlower(u32),
    /// Empty the numbered plot.
    RemoveFlower(u32),
    /// Water every plot holding a flower.
    WaterAll,
}

impl FromStr for GardenAction {
    type Err = ModelError;

    /// Parse `PLANT <id>`, `REMOVE <id>`, or `WATER`, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();
        let name = tokens.next().unwrap_or_default().to_ascii_uppercase();
        let plot = tokens.next().map(str::parse::<u32>);
        let malformed = |reason: &str| ModelError::MalformedTransition {
            transition: name.clone(),
            reason: reason.to_string(),
        };
        if tokens.next().is_some() {
            return Err(malformed("too many arguments"));
        }

        match (name.as_str(), plot) {
            ("PLANT", Some(Ok(id))) => Ok(Self::PlantFlower(id)),
            ("REMOVE", Some(Ok(id))) => Ok(Self::RemoveFlower(id)),
            ("PLANT" | "REMOVE", _) => Err(malformed("expected a plot number")),
            ("WATER", None) => Ok(Self::WaterAll),
            ("WATER", Some(_)) => Err(malformed("takes no arguments")),
            _ => Err(ModelError::UnknownTransition(s.trim().to_string())),
        }
    }
}

/// Three plots; plot 2 starts with a flower.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GardenState {
    plots: Vec<Plot>,
}

impl Default for GardenState {
    fn default() -> Self {
        Self {
            plots: vec![Plot::new(1, false), Plot::new(2, true), Plot::new(3, false)],
        }
    }
}

impl GardenState {
    /// All plots, in plot order.
    #[must_use]
    pub fn plots(&self) -> &[Plot] {
        &self.plots
    }

    /// Plot by number.
    #[must_use]
    pub fn plot(&self, id: u32) -> Option<&Plot> {
        self.plots.iter().find(|p| p.id == id)
    }

    /// Number of plots holding a flower.
    #[must_use]
    pub fn flower_count(&self) -> usize {
        self.plots.iter().filter(|p| p.has_flower).count()
    }

    fn set_plot(&mut self, id: u32, has_flower: bool) {
        if let Some(plot) = self.plots.iter_mut().find(|p| p.id == id) {
            plot.has_flower = has_flower;
            plot.is_watered = false;
        }
    }
}

impl Reducer for GardenState {
    type Action = GardenAction;

    fn reduce(mut self, action: GardenAction) -> Self {
        match action {
            GardenAction::PlantFlower(id) => self.set_plot(id, true),
            GardenAction::RemoveFlower(id) => self.set_plot(id, false),
            GardenAction::WaterAll => {
                for plot in self.plots.iter_mut().filter(|p| p.has_flower) {
                    plot.is_watered = true;
                }
            }
        }
        self
    }
}
