//! Draws laid-out text elements into a [`Buffer`].

use crate::buffer::{Buffer, Cell};
use crate::element::{Content, Element};
use crate::layout::{LayoutResult, Rect};
use crate::text::{char_width, layout_lines};

pub fn render_to_buffer(element: &Element, layout: &LayoutResult, buf: &mut Buffer) {
    render_element(element, layout, None, buf);
}

/// Render `element` into a buffer sized to its laid-out rectangle.
pub fn render(element: &Element, layout: &LayoutResult) -> Buffer {
    let (width, height) = layout
        .get(&element.id)
        .map(|r| (r.right(), r.bottom()))
        .unwrap_or((0, 0));
    let mut buf = Buffer::new(width, height);
    render_to_buffer(element, layout, &mut buf);
    buf
}

// Anonymous elements have no rectangle of their own; their text is drawn in
// the nearest ancestor's rectangle.
fn render_element(element: &Element, layout: &LayoutResult, parent: Option<Rect>, buf: &mut Buffer) {
    let rect = layout.get(&element.id).copied().or(parent);
    let Some(rect) = rect else {
        return;
    };

    match &element.content {
        Content::None => {}
        Content::Text(text) => render_text(text, element, rect, buf),
        Content::Children(children) => {
            for child in children {
                render_element(child, layout, Some(rect), buf);
            }
        }
    }
}

fn render_text(text: &str, element: &Element, rect: Rect, buf: &mut Buffer) {
    let padding = element.padding;
    let inner = rect.shrink(padding.top, padding.right, padding.bottom, padding.left);
    if inner.is_empty() {
        return;
    }

    let lines = layout_lines(text, inner.width as usize, element.text_wrap);
    for (y, line) in (inner.y..inner.bottom()).zip(lines.iter()) {
        let mut x = inner.x;
        for ch in line.chars() {
            let width = char_width(ch) as u16;
            if x.saturating_add(width) > inner.right() {
                break;
            }
            buf.set(x, y, Cell::new(ch));
            if width == 2 {
                buf.set(x + 1, y, Cell::continuation());
            }
            x += width;
        }
    }
}
