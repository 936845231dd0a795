use celldom::layout::layout;
use celldom::render::render;
use celldom::{Element, Rect, Size, TextWrap};

fn render_lines(root: &Element, width: u16) -> Vec<String> {
    let layout = layout(root, Rect::new(0, 0, width, 50));
    render(root, &layout).to_lines()
}

#[test]
fn test_wrapped_text_renders_on_several_rows() {
    let root = Element::col()
        .id("root")
        .child(Element::text("hello world").id("t"));

    assert_eq!(render_lines(&root, 8), vec!["hello", "world"]);
}

#[test]
fn test_clamped_text_shows_first_rows_only() {
    let root = Element::col()
        .id("root")
        .child(Element::text("hello world").id("t").max_height(1));

    assert_eq!(render_lines(&root, 8), vec!["hello"]);
}

#[test]
fn test_row_cells_render_side_by_side() {
    let root = Element::row()
        .id("root")
        .width(Size::Fixed(10))
        .child(Element::text("ab").id("l").width(Size::Fixed(5)))
        .child(Element::text("cd").id("r").width(Size::Fixed(5)));

    assert_eq!(render_lines(&root, 10), vec!["ab   cd"]);
}

#[test]
fn test_truncated_text() {
    let root = Element::col().id("root").child(
        Element::text("abcdefgh")
            .id("t")
            .text_wrap(TextWrap::Truncate),
    );

    assert_eq!(render_lines(&root, 5), vec!["abcd…"]);
}

#[test]
fn test_wide_characters() {
    let root = Element::col().id("root").child(Element::text("日本").id("t"));

    let layout = layout(&root, Rect::new(0, 0, 4, 1));
    let buf = render(&root, &layout);

    assert!(buf.get(1, 0).unwrap().wide_continuation);
    assert_eq!(buf.to_lines(), vec!["日本"]);
}

#[test]
fn test_anonymous_text_uses_parent_rect() {
    let root = Element::row()
        .id("root")
        .width(Size::Fixed(6))
        .child(Element::text("ok"));

    assert_eq!(render_lines(&root, 6), vec!["ok"]);
}
