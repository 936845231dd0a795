//! Post-render effect phase.
//!
//! Runs once a body has been laid out. Each expandable cell is measured and
//! the tracker learns whether the cell overflows its collapsed height.

use log::debug;

use crate::cell::MeasureEffect;
use crate::measure::Measure;
use crate::tracker::CollapseTracker;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EffectReport {
    /// Cells that became collapsible, as (row id, column name).
    pub registered: Vec<(String, String)>,
    /// Cells that stopped being collapsible.
    pub disabled: Vec<(String, String)>,
    /// Effects whose element could not be measured.
    pub unmeasured: usize,
}

impl EffectReport {
    /// Whether the tracker changed and the body must be rendered again.
    pub fn changed(&self) -> bool {
        !self.registered.is_empty() || !self.disabled.is_empty()
    }
}

pub fn apply_effects(
    effects: &[MeasureEffect],
    measure: &dyn Measure,
    tracker: &mut dyn CollapseTracker,
) -> EffectReport {
    let mut report = EffectReport::default();

    for effect in effects {
        let Some(extent) = measure.measure(&effect.text_id) else {
            debug!("cannot measure {:?}", effect.text_id);
            report.unmeasured += 1;
            continue;
        };

        let row_id = effect.row_id.as_str();
        let column = effect.column.as_str();
        let minimal = tracker.minimal_column_height(row_id, column);

        if !effect.can_expand && extent.overflows(minimal) {
            tracker.add_collapsable_column(row_id, column, extent.offset_height);
            report.registered.push((effect.row_id.clone(), effect.column.clone()));
        } else if effect.can_expand && minimal.is_some_and(|m| extent.scroll_height <= m) {
            tracker.disable_collapsable_column(row_id, column);
            report.disabled.push((effect.row_id.clone(), effect.column.clone()));
        }
    }

    if report.changed() {
        debug!(
            "effects: {} registered, {} disabled",
            report.registered.len(),
            report.disabled.len()
        );
    }
    report
}
