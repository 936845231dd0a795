use std::collections::HashMap;

use celldom::layout::layout;
use celldom::{Element, Rect, Size};
use logbook_lib::{
    apply_effects, CollapseState, CollapseTracker, Extent, LayoutMeasure, Measure, MeasureEffect,
};

fn effect(can_expand: bool) -> MeasureEffect {
    MeasureEffect {
        row_id: "row1".into(),
        column: "Text".into(),
        text_id: "row1-text-text".into(),
        can_expand,
    }
}

fn measured(scroll_height: u16, offset_height: u16) -> HashMap<String, Extent> {
    HashMap::from([(
        "row1-text-text".to_string(),
        Extent::new(scroll_height, offset_height),
    )])
}

#[test]
fn test_overflowing_cell_is_registered_with_offset_baseline() {
    let mut tracker = CollapseState::new();
    let report = apply_effects(&[effect(false)], &measured(3, 1), &mut tracker);

    assert!(report.changed());
    assert_eq!(report.registered, vec![("row1".to_string(), "Text".to_string())]);
    assert!(tracker.can_column_expand("row1", "Text"));
    assert_eq!(tracker.minimal_column_height("row1", "Text"), Some(1));
}

#[test]
fn test_fitting_cell_is_left_alone() {
    let mut tracker = CollapseState::new();
    let report = apply_effects(&[effect(false)], &measured(1, 1), &mut tracker);

    assert!(!report.changed());
    assert!(tracker.is_empty());
}

#[test]
fn test_cell_that_shrank_below_baseline_is_disabled() {
    let mut tracker = CollapseState::new();
    tracker.add_collapsable_column("row1", "Text", 2);

    let report = apply_effects(&[effect(true)], &measured(2, 2), &mut tracker);

    assert_eq!(report.disabled, vec![("row1".to_string(), "Text".to_string())]);
    assert!(!tracker.can_column_expand("row1", "Text"));
}

#[test]
fn test_expanded_cell_stays_collapsible() {
    let mut tracker = CollapseState::new();
    tracker.add_collapsable_column("row1", "Text", 1);
    tracker.toggle_column_collapse("row1", "Text");

    // Expanded: the element is as tall as its content.
    let report = apply_effects(&[effect(true)], &measured(4, 4), &mut tracker);

    assert!(!report.changed());
    assert!(tracker.is_column_expanded("row1", "Text"));
}

#[test]
fn test_unmeasured_elements_are_skipped() {
    let mut tracker = CollapseState::new();
    let report = apply_effects(&[effect(false)], &HashMap::new(), &mut tracker);

    assert_eq!(report.unmeasured, 1);
    assert!(!report.changed());
    assert!(tracker.is_empty());
}

#[test]
fn test_overflow_rules() {
    assert!(Extent::new(3, 1).overflows(None));
    assert!(Extent::new(3, 3).overflows(Some(1)));
    assert!(!Extent::new(3, 3).overflows(None));
    assert!(!Extent::new(1, 1).overflows(Some(1)));
}

#[test]
fn test_text_squeezed_to_no_width_still_overflows() {
    let root = Element::row()
        .id("cell")
        .child(Element::text("abc def").id("squeezed").width(Size::Fill).max_height(1))
        .child(Element::text("xxxxx").width(Size::Auto));
    let layout = layout(&root, Rect::new(0, 0, 5, 10));
    assert_eq!(layout.get("squeezed").map(|r| r.width), Some(0));

    let extent = LayoutMeasure::new(&root, &layout).measure("squeezed").unwrap();
    assert!(extent.scroll_height > 1);
    assert!(extent.overflows(Some(1)));

    // Once collapsible, the squeezed cell is not disabled again.
    let mut tracker = CollapseState::new();
    tracker.add_collapsable_column("row1", "Text", 1);
    let effect = MeasureEffect {
        text_id: "squeezed".into(),
        ..effect(true)
    };
    let report = apply_effects(&[effect], &LayoutMeasure::new(&root, &layout), &mut tracker);
    assert!(!report.changed());
    assert!(tracker.can_column_expand("row1", "Text"));
}
