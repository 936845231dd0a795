use celldom::layout::layout;
use celldom::{bubble_path, dispatch_click, hit_test, hit_test_any, Element, Rect, Size};

fn nested(stop_mid: bool) -> Element {
    Element::col().id("root").on_click("root").child(
        Element::col()
            .id("mid")
            .on_click("mid")
            .stop_propagation(stop_mid)
            .child(Element::text("leaf").id("leaf").on_click("leaf")),
    )
}

// ============================================================================
// Bubbling
// ============================================================================

#[test]
fn test_bubble_path_runs_root_to_target() {
    let root = nested(false);
    let path = bubble_path(&root, "leaf").unwrap();
    let ids: Vec<_> = path.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["root", "mid", "leaf"]);

    assert!(bubble_path(&root, "missing").is_none());
    assert!(bubble_path(&root, "").is_none());
}

#[test]
fn test_click_bubbles_innermost_first() {
    let root = nested(false);
    assert_eq!(dispatch_click(&root, "leaf"), vec!["leaf", "mid", "root"]);
}

#[test]
fn test_stop_propagation_ends_bubbling_after_own_handler() {
    let root = nested(true);
    assert_eq!(dispatch_click(&root, "leaf"), vec!["leaf", "mid"]);
    assert_eq!(dispatch_click(&root, "mid"), vec!["mid"]);
    assert_eq!(dispatch_click(&root, "root"), vec!["root"]);
}

#[test]
fn test_click_on_unknown_target_reaches_nothing() {
    let root = nested(false);
    assert!(dispatch_click(&root, "nope").is_empty());
}

// ============================================================================
// Hit Testing
// ============================================================================

fn two_cells() -> Element {
    Element::row()
        .id("root")
        .width(Size::Fixed(10))
        .on_click("open")
        .child(Element::text("a").id("a").width(Size::Fixed(5)).on_click("a"))
        .child(Element::text("b").id("b").width(Size::Fixed(5)))
}

#[test]
fn test_hit_test_finds_deepest_interactive() {
    let root = two_cells();
    let layout = layout(&root, Rect::new(0, 0, 10, 5));

    assert_eq!(hit_test(&layout, &root, 2, 0), Some("a".to_string()));
    // "b" has no handler, so the row underneath is hit
    assert_eq!(hit_test(&layout, &root, 7, 0), Some("root".to_string()));
    assert_eq!(hit_test(&layout, &root, 20, 0), None);
}

#[test]
fn test_hit_test_any_ignores_handlers() {
    let root = two_cells();
    let layout = layout(&root, Rect::new(0, 0, 10, 5));

    assert_eq!(hit_test_any(&layout, &root, 7, 0), Some("b".to_string()));
    assert_eq!(hit_test_any(&layout, &root, 7, 3), None);
}

#[test]
fn test_hit_test_sees_through_anonymous_elements() {
    let root = Element::col()
        .id("root")
        .child(Element::row().child(Element::text("x").id("leaf")));
    let layout = layout(&root, Rect::new(0, 0, 4, 4));

    assert_eq!(hit_test_any(&layout, &root, 0, 0), Some("leaf".to_string()));
}

#[test]
fn test_stop_propagation_counts_as_interactive() {
    let root = Element::col()
        .id("root")
        .child(Element::text("x").id("guard").stop_propagation(true));
    let layout = layout(&root, Rect::new(0, 0, 4, 4));

    assert_eq!(hit_test(&layout, &root, 0, 0), Some("guard".to_string()));
}
