//! Click bubbling through the element tree.

use log::trace;

use crate::element::Element;

/// Elements from `root` down to the element with id `target`, inclusive.
pub fn bubble_path<'a>(root: &'a Element, target: &str) -> Option<Vec<&'a Element>> {
    if target.is_empty() {
        return None;
    }
    let mut path = Vec::new();
    collect_path(root, target, &mut path).then_some(path)
}

fn collect_path<'a>(element: &'a Element, target: &str, path: &mut Vec<&'a Element>) -> bool {
    path.push(element);
    if element.id == target {
        return true;
    }
    for child in element.child_elements() {
        if collect_path(child, target, path) {
            return true;
        }
    }
    path.pop();
    false
}

/// Dispatch a click on `target` and return the handlers it reaches.
///
/// Handlers are listed innermost first. Bubbling ends at the first element
/// that stops propagation; that element's own handler still runs.
pub fn dispatch_click(root: &Element, target: &str) -> Vec<String> {
    let Some(path) = bubble_path(root, target) else {
        trace!("click on unknown element {target:?}");
        return Vec::new();
    };

    let mut handlers = Vec::new();
    for element in path.iter().rev() {
        if let Some(handler) = &element.on_click {
            handlers.push(handler.clone());
        }
        if element.stop_propagation {
            trace!("click on {target:?} stopped at {:?}", element.id);
            break;
        }
    }
    handlers
}
