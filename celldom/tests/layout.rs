use celldom::layout::{content_height, intrinsic_width, layout};
use celldom::{Align, Edges, Element, LayoutResult, Rect, Size};

fn layout_root(root: &Element, width: u16, height: u16) -> LayoutResult {
    layout(root, Rect::new(0, 0, width, height))
}

// ============================================================================
// Rows
// ============================================================================

#[test]
fn test_row_distributes_width() {
    let root = Element::row()
        .id("root")
        .width(Size::Fixed(20))
        .child(Element::text("a").id("a").width(Size::Fixed(5)))
        .child(Element::text("b").id("b").width(Size::Fill))
        .child(Element::text("c").id("c").width(Size::Percent(0.25)));

    let layout = layout_root(&root, 100, 100);

    assert_eq!(layout["root"], Rect::new(0, 0, 20, 1));
    assert_eq!(layout["a"], Rect::new(0, 0, 5, 1));
    assert_eq!(layout["b"], Rect::new(5, 0, 10, 1));
    assert_eq!(layout["c"], Rect::new(15, 0, 5, 1));
}

#[test]
fn test_flex_weights_share_remaining_width() {
    let root = Element::row()
        .id("root")
        .width(Size::Fixed(9))
        .child(Element::text("a").id("a").width(Size::Flex(1)))
        .child(Element::text("b").id("b").width(Size::Flex(2)));

    let layout = layout_root(&root, 100, 100);

    assert_eq!(layout["a"].width, 3);
    assert_eq!(layout["b"].width, 6);
    assert_eq!(layout["b"].x, 3);
}

#[test]
fn test_auto_width_uses_text_width() {
    let root = Element::row()
        .id("root")
        .width(Size::Fixed(10))
        .child(Element::text("abc").id("auto").width(Size::Auto))
        .child(Element::text("rest").id("rest"));

    let layout = layout_root(&root, 10, 10);

    assert_eq!(layout["auto"].width, 3);
    assert_eq!(layout["rest"], Rect::new(3, 0, 7, 1));
    assert_eq!(intrinsic_width(&Element::text("one\nthree")), 5);
}

#[test]
fn test_row_height_is_tallest_child() {
    let root = Element::row()
        .id("root")
        .width(Size::Fixed(8))
        .child(Element::text("aaaa bbbb").id("tall").width(Size::Fixed(4)))
        .child(Element::text("x").id("short").width(Size::Fixed(4)));

    let layout = layout_root(&root, 8, 10);

    assert_eq!(layout["root"].height, 2);
    assert_eq!(layout["tall"].height, 2);
    assert_eq!(layout["short"].height, 1, "start alignment keeps natural height");
}

#[test]
fn test_stretch_fills_row_height() {
    let root = Element::row()
        .id("root")
        .width(Size::Fixed(8))
        .align(Align::Stretch)
        .child(Element::text("aaaa bbbb").id("tall").width(Size::Fixed(4)))
        .child(Element::text("x").id("short").width(Size::Fixed(4)));

    let layout = layout_root(&root, 8, 10);

    assert_eq!(layout["short"].height, 2);
}

#[test]
fn test_center_alignment_offsets_short_child() {
    let root = Element::row()
        .id("root")
        .width(Size::Fixed(8))
        .align(Align::Center)
        .child(Element::text("aa bb cc").id("tall").width(Size::Fixed(2)))
        .child(Element::text("x").id("short").width(Size::Fixed(2)));

    let layout = layout_root(&root, 8, 10);

    assert_eq!(layout["tall"].height, 3);
    assert_eq!(layout["short"], Rect::new(2, 1, 2, 1));
}

// ============================================================================
// Columns
// ============================================================================

#[test]
fn test_column_stacks_wrapped_text() {
    let root = Element::col()
        .id("root")
        .gap(1)
        .child(Element::text("aaaa bbbb cccc").id("first"))
        .child(Element::text("x").id("second"));

    let layout = layout_root(&root, 4, 20);

    assert_eq!(layout["first"], Rect::new(0, 0, 4, 3));
    assert_eq!(layout["second"], Rect::new(0, 4, 4, 1));
    assert_eq!(layout["root"].height, 5);
}

#[test]
fn test_padding_shrinks_children() {
    let root = Element::col()
        .id("root")
        .width(Size::Fixed(10))
        .padding(Edges::horizontal(1))
        .child(Element::text("hi").id("text"));

    let layout = layout_root(&root, 20, 20);

    assert_eq!(layout["text"], Rect::new(1, 0, 8, 1));
}

#[test]
fn test_fixed_height_wins_over_content() {
    let root = Element::col()
        .id("root")
        .child(Element::text("aaaa bbbb cccc").id("text").height(Size::Fixed(1)));

    let layout = layout_root(&root, 4, 20);

    assert_eq!(layout["text"].height, 1);
}

// ============================================================================
// Clamping and content height
// ============================================================================

#[test]
fn test_max_height_clamps_rect_but_not_content_height() {
    let text = Element::text("aaaa bbbb cccc").id("text").max_height(1);
    let root = Element::col().id("root").child(text.clone());

    let layout = layout_root(&root, 4, 20);

    assert_eq!(layout["text"].height, 1);
    assert_eq!(content_height(&text, 4), 3);
    assert_eq!(layout["root"].height, 1);
}

#[test]
fn test_min_height_pads_short_content() {
    let root = Element::col()
        .id("root")
        .child(Element::text("x").id("text").min_height(3));

    let layout = layout_root(&root, 4, 20);

    assert_eq!(layout["text"].height, 3);
}

#[test]
fn test_anonymous_elements_are_not_recorded() {
    let root = Element::col()
        .id("root")
        .child(Element::row().child(Element::text("x").id("leaf")));

    let layout = layout_root(&root, 4, 4);

    assert_eq!(layout.len(), 2);
    assert!(layout.contains_key("leaf"));
}

#[test]
fn test_edge_totals_saturate() {
    let edges = Edges::new(u16::MAX, u16::MAX, 3, 10);
    assert_eq!(edges.horizontal_total(), u16::MAX);
    assert_eq!(edges.vertical_total(), u16::MAX);
    assert_eq!(Edges::all(2).horizontal_total(), 4);
}
