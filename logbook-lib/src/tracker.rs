//! Collapse state for expandable cells.

use std::collections::HashMap;

use log::trace;

/// Per-cell expand/collapse state, keyed by row id and column name.
///
/// The renderer only reads through `&self`; the effect phase and click
/// handling mutate through `&mut self`, so a measurement decision can never
/// interleave with a render.
pub trait CollapseTracker {
    /// Whether the cell overflowed and offers a toggle.
    fn can_column_expand(&self, row_id: &str, column: &str) -> bool;

    /// Whether the cell currently shows all of its content.
    fn is_column_expanded(&self, row_id: &str, column: &str) -> bool;

    /// Collapsed height recorded when the cell was registered, if any.
    fn minimal_column_height(&self, row_id: &str, column: &str) -> Option<u16>;

    /// Mark the cell as collapsible with `baseline` as its collapsed height.
    fn add_collapsable_column(&mut self, row_id: &str, column: &str, baseline: u16);

    /// Forget the cell; it no longer overflows.
    fn disable_collapsable_column(&mut self, row_id: &str, column: &str);

    /// Flip a collapsible cell between expanded and collapsed.
    fn toggle_column_collapse(&mut self, row_id: &str, column: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnState {
    pub expanded: bool,
    pub can_expand: bool,
    pub minimal_height: u16,
}

/// In-memory [`CollapseTracker`].
#[derive(Debug, Clone, Default)]
pub struct CollapseState {
    columns: HashMap<(String, String), ColumnState>,
}

impl CollapseState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, row_id: &str, column: &str) -> Option<&ColumnState> {
        self.columns.get(&key(row_id, column))
    }

    /// Number of cells currently registered as collapsible.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Drop all state, e.g. when the table shows new data.
    pub fn clear(&mut self) {
        self.columns.clear();
    }

    /// Expand every collapsible cell.
    pub fn expand_all(&mut self) {
        for state in self.columns.values_mut() {
            state.expanded = true;
        }
    }

    /// Collapse every collapsible cell.
    pub fn collapse_all(&mut self) {
        for state in self.columns.values_mut() {
            state.expanded = false;
        }
    }
}

fn key(row_id: &str, column: &str) -> (String, String) {
    (row_id.to_string(), column.to_string())
}

impl CollapseTracker for CollapseState {
    fn can_column_expand(&self, row_id: &str, column: &str) -> bool {
        self.get(row_id, column).is_some_and(|s| s.can_expand)
    }

    fn is_column_expanded(&self, row_id: &str, column: &str) -> bool {
        self.get(row_id, column).is_some_and(|s| s.expanded)
    }

    fn minimal_column_height(&self, row_id: &str, column: &str) -> Option<u16> {
        self.get(row_id, column).map(|s| s.minimal_height)
    }

    fn add_collapsable_column(&mut self, row_id: &str, column: &str, baseline: u16) {
        trace!("collapsible: {row_id}/{column} (baseline {baseline})");
        self.columns
            .entry(key(row_id, column))
            .and_modify(|s| {
                s.can_expand = true;
                s.minimal_height = baseline;
            })
            .or_insert(ColumnState {
                expanded: false,
                can_expand: true,
                minimal_height: baseline,
            });
    }

    fn disable_collapsable_column(&mut self, row_id: &str, column: &str) {
        trace!("no longer collapsible: {row_id}/{column}");
        self.columns.remove(&key(row_id, column));
    }

    fn toggle_column_collapse(&mut self, row_id: &str, column: &str) {
        match self.columns.get_mut(&key(row_id, column)) {
            Some(state) if state.can_expand => {
                state.expanded = !state.expanded;
                trace!("toggled {row_id}/{column}: expanded={}", state.expanded);
            }
            _ => trace!("toggle ignored, {row_id}/{column} is not collapsible"),
        }
    }
}
