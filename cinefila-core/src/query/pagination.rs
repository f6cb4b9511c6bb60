//! "Show more" windowing over an already filtered list.

use serde::{Deserialize, Serialize};

/// Films revealed per "show more" on the catalogue page.
pub const CATALOGUE_STEP: usize = 15;
/// Films revealed per step in the home page preview.
pub const PREVIEW_STEP: usize = 30;

/// A growing prefix of a result list.
///
/// The window is not persisted; callers reset it whenever the selection
/// changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowMoreWindow {
    visible: usize,
    step: usize,
}

impl ShowMoreWindow {
    /// Window showing the first `step` items. A zero step is treated as one.
    pub fn initial(step: usize) -> Self {
        let step = step.max(1);
        Self { visible: step, step }
    }

    /// Catalogue page window.
    pub fn catalogue() -> Self {
        Self::initial(CATALOGUE_STEP)
    }

    /// Home page preview window.
    pub fn preview() -> Self {
        Self::initial(PREVIEW_STEP)
    }

    /// Items currently revealed.
    pub fn visible(&self) -> usize {
        self.visible
    }

    /// Items added per [`show_more`](Self::show_more).
    pub fn step(&self) -> usize {
        self.step
    }

    /// Reveal one more step.
    pub fn show_more(&mut self) {
        self.visible = self.visible.saturating_add(self.step);
    }

    /// Back to the first step.
    pub fn reset(&mut self) {
        self.visible = self.step;
    }

    /// Leading part of `items` inside the window.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[..self.visible.min(items.len())]
    }

    /// Whether a list of `total` items has hidden entries.
    pub fn has_more(&self, total: usize) -> bool {
        self.visible < total
    }

    /// Hidden entries of a list of `total` items.
    pub fn remaining(&self, total: usize) -> usize {
        total.saturating_sub(self.visible)
    }
}

impl Default for ShowMoreWindow {
    fn default() -> Self {
        Self::catalogue()
    }
}
