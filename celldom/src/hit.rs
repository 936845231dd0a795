use crate::element::Element;
use crate::layout::LayoutResult;

/// Find the deepest interactive element at the given coordinates.
///
/// An element is interactive when it has a click handler or stops click
/// propagation. Returns None if no interactive element contains the point.
pub fn hit_test(layout: &LayoutResult, root: &Element, x: u16, y: u16) -> Option<String> {
    hit_element(layout, root, x, y, &|el| {
        el.on_click.is_some() || el.stop_propagation
    })
}

/// Find the deepest element with an id at the given coordinates.
pub fn hit_test_any(layout: &LayoutResult, root: &Element, x: u16, y: u16) -> Option<String> {
    hit_element(layout, root, x, y, &|_| true)
}

fn hit_element(
    layout: &LayoutResult,
    element: &Element,
    x: u16,
    y: u16,
    accept: &dyn Fn(&Element) -> bool,
) -> Option<String> {
    // Anonymous elements have no rectangle; only their children can be hit.
    let rect = layout.get(&element.id);
    if rect.is_some_and(|r| !r.contains(x, y)) {
        return None;
    }

    // Check children in reverse order (last rendered = on top)
    for child in element.child_elements().iter().rev() {
        if let Some(id) = hit_element(layout, child, x, y, accept) {
            return Some(id);
        }
    }

    if rect.is_some() && accept(element) {
        Some(element.id.clone())
    } else {
        None
    }
}
