//! Two-phase layout: widths flow down from the parent, heights come up from
//! wrapped content.
//!
//! Rows distribute their inner width between children (`Fixed`, `Percent`,
//! `Auto`, then `Fill`/`Flex` share what is left). Columns stack children at
//! their natural height. An element's natural height is its content height
//! clamped by `min_height`/`max_height`; [`content_height`] is the unclamped
//! value, i.e. how tall the element would need to be to show everything.

mod rect;

use std::collections::HashMap;

pub use rect::Rect;

use crate::element::{Content, Element};
use crate::text::{display_width, line_count};
use crate::types::{Align, Direction, Size};

/// Laid-out rectangles of all elements with a non-empty id.
pub type LayoutResult = HashMap<String, Rect>;

pub fn layout(element: &Element, available: Rect) -> LayoutResult {
    let mut result = LayoutResult::new();
    let width = resolve_width(element, available.width);
    let height = match element.height {
        Size::Fixed(n) => clamp_height(element, n),
        Size::Fill | Size::Flex(_) => available.height,
        Size::Percent(p) => scale(available.height, p),
        Size::Auto => natural_height(element, width),
    };
    place(
        element,
        Rect::new(available.x, available.y, width, height),
        &mut result,
    );
    result
}

/// Height needed to show all content of `element` at `width` columns,
/// ignoring the element's own height limits.
pub fn content_height(element: &Element, width: u16) -> u16 {
    let inner_width = width.saturating_sub(element.padding.horizontal_total());
    let padding = element.padding.vertical_total();

    let inner = match &element.content {
        Content::None => 0,
        Content::Text(text) => {
            to_u16(line_count(text, inner_width as usize, element.text_wrap))
        }
        Content::Children(children) if children.is_empty() => 0,
        Content::Children(children) => match element.direction {
            Direction::Column => {
                let stacked: u16 = children
                    .iter()
                    .map(|c| natural_height(c, resolve_width(c, inner_width)))
                    .fold(0, u16::saturating_add);
                stacked.saturating_add(gaps(element, children.len()))
            }
            Direction::Row => {
                let widths = row_widths(element, children, inner_width);
                children
                    .iter()
                    .zip(widths)
                    .map(|(c, w)| natural_height(c, w))
                    .max()
                    .unwrap_or(0)
            }
        },
    };

    inner.saturating_add(padding)
}

/// Width `element` asks for when sized `Auto`.
pub fn intrinsic_width(element: &Element) -> u16 {
    if let Size::Fixed(n) = element.width {
        return n;
    }

    let padding = element.padding.horizontal_total();
    let inner = match &element.content {
        Content::None => 0,
        Content::Text(text) => to_u16(text.split('\n').map(display_width).max().unwrap_or(0)),
        Content::Children(children) => match element.direction {
            Direction::Row => children
                .iter()
                .map(intrinsic_width)
                .fold(0, u16::saturating_add)
                .saturating_add(gaps(element, children.len())),
            Direction::Column => children.iter().map(intrinsic_width).max().unwrap_or(0),
        },
    };

    inner.saturating_add(padding)
}

fn place(element: &Element, rect: Rect, result: &mut LayoutResult) {
    if !element.id.is_empty() {
        result.insert(element.id.clone(), rect);
    }

    let children = element.child_elements();
    if children.is_empty() {
        return;
    }

    let padding = element.padding;
    let inner = rect.shrink(padding.top, padding.right, padding.bottom, padding.left);

    match element.direction {
        Direction::Row => {
            let widths = row_widths(element, children, inner.width);
            let mut x = inner.x;
            for (child, width) in children.iter().zip(widths) {
                let height = cross_height(child, width, inner.height, element.align);
                let y = inner.y + cross_offset(element.align, inner.height, height);
                place(child, Rect::new(x, y, width, height), result);
                x = x.saturating_add(width).saturating_add(element.gap);
            }
        }
        Direction::Column => {
            let mut y = inner.y;
            for child in children {
                let width = resolve_width(child, inner.width);
                let height = match child.height {
                    Size::Percent(p) => clamp_height(child, scale(inner.height, p)),
                    _ => natural_height(child, width),
                };
                place(child, Rect::new(inner.x, y, width, height), result);
                y = y.saturating_add(height).saturating_add(element.gap);
            }
        }
    }
}

fn natural_height(element: &Element, width: u16) -> u16 {
    let height = match element.height {
        Size::Fixed(n) => n,
        _ => content_height(element, width),
    };
    clamp_height(element, height)
}

fn cross_height(child: &Element, width: u16, available: u16, align: Align) -> u16 {
    let height = match child.height {
        Size::Fixed(n) => clamp_height(child, n),
        Size::Percent(p) => clamp_height(child, scale(available, p)),
        Size::Fill | Size::Flex(_) => available,
        Size::Auto if align == Align::Stretch => available,
        Size::Auto => natural_height(child, width),
    };
    height.min(available)
}

fn cross_offset(align: Align, available: u16, height: u16) -> u16 {
    let free = available.saturating_sub(height);
    match align {
        Align::Start | Align::Stretch => 0,
        Align::Center => free / 2,
        Align::End => free,
    }
}

fn resolve_width(element: &Element, available: u16) -> u16 {
    match element.width {
        Size::Fixed(n) => n.min(available),
        Size::Fill | Size::Flex(_) => available,
        Size::Auto => intrinsic_width(element).min(available),
        Size::Percent(p) => scale(available, p),
    }
}

/// Split the inner width of a row between its children.
fn row_widths(parent: &Element, children: &[Element], available: u16) -> Vec<u16> {
    let mut widths = Vec::with_capacity(children.len());
    let mut used = gaps(parent, children.len());
    let mut total_weight = 0u32;

    for child in children {
        let width = match child.width {
            Size::Fixed(n) => n,
            Size::Percent(p) => scale(available, p),
            Size::Auto => intrinsic_width(child),
            Size::Fill => {
                total_weight += 1;
                0
            }
            Size::Flex(w) => {
                total_weight += u32::from(w.max(1));
                0
            }
        };
        used = used.saturating_add(width);
        widths.push(width);
    }

    if total_weight == 0 {
        return widths;
    }

    let remaining = u32::from(available.saturating_sub(used));
    let mut handed_out = 0u32;
    let mut weight_seen = 0u32;
    for (child, width) in children.iter().zip(widths.iter_mut()) {
        let weight = match child.width {
            Size::Fill => 1,
            Size::Flex(w) => u32::from(w.max(1)),
            _ => continue,
        };
        weight_seen += weight;
        // Cumulative rounding so the shares add up to exactly `remaining`.
        let upto = remaining * weight_seen / total_weight;
        *width = to_u16((upto - handed_out) as usize);
        handed_out = upto;
    }

    widths
}

fn clamp_height(element: &Element, height: u16) -> u16 {
    let height = element.min_height.map_or(height, |m| height.max(m));
    element.max_height.map_or(height, |m| height.min(m))
}

fn gaps(element: &Element, count: usize) -> u16 {
    element.gap.saturating_mul(to_u16(count.saturating_sub(1)))
}

fn scale(size: u16, fraction: f32) -> u16 {
    ((size as f32 * fraction.clamp(0.0, 1.0)) as u16).min(size)
}

fn to_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}
