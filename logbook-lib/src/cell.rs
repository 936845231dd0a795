//! Rendering of a single table cell.

use celldom::{Align, Edges, Element, Size};
use serde_json::Value;

use crate::column::Column;
use crate::rows::Action;
use crate::tracker::CollapseTracker;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellOptions {
    /// Rows a collapsed cell shows before it is cut off.
    pub collapsed_lines: u16,
}

impl Default for CellOptions {
    fn default() -> Self {
        Self { collapsed_lines: 1 }
    }
}

/// A measurement to take once the cell has been laid out.
///
/// `can_expand` is the tracker state the cell was rendered with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeasureEffect {
    pub row_id: String,
    pub column: String,
    pub text_id: String,
    pub can_expand: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderedCell {
    pub element: Element,
    /// Present for expandable columns.
    pub effect: Option<MeasureEffect>,
    /// Handler name and action of the toggle control, when one is shown.
    pub toggle: Option<(String, Action)>,
}

/// Render the cell of column `key` for the row `row_id`.
pub fn content(
    key: &str,
    column: &Column,
    value: Option<&Value>,
    row_id: &str,
    tracker: &dyn CollapseTracker,
    options: CellOptions,
) -> RenderedCell {
    let text = column.display(value);
    let column_id = format!("{row_id}-{key}");
    let text_id = format!("{column_id}-text");
    let can_expand = tracker.can_column_expand(row_id, &column.name);
    let is_expanded = tracker.is_column_expanded(row_id, &column.name);

    let mut text_element = Element::text(text)
        .id(&text_id)
        .class("overflow")
        .width(Size::Fill);
    if is_expanded {
        text_element = text_element.class("show-overflow");
    } else {
        text_element = text_element.max_height(options.collapsed_lines);
    }

    let mut inner = Element::row()
        .id(format!("{column_id}-content"))
        .classes(["flex-row", "items-center"])
        .align(Align::Center)
        .child(text_element);

    let mut toggle = None;
    if column.expand && can_expand {
        let handler = format!("{column_id}:toggle");
        inner = inner.child(toggle_control(&column_id, is_expanded, &handler));
        toggle = Some((
            handler,
            Action::Toggle {
                row_id: row_id.to_string(),
                column: column.name.clone(),
            },
        ));
    }

    let element = Element::new("td")
        .id(&column_id)
        .width(column.size.unwrap_or(Size::Fill))
        .padding(Edges::right(1))
        .stop_propagation(can_expand)
        .child(inner);

    let effect = column.expand.then(|| MeasureEffect {
        row_id: row_id.to_string(),
        column: column.name.clone(),
        text_id,
        can_expand,
    });

    RenderedCell {
        element,
        effect,
        toggle,
    }
}

fn toggle_control(column_id: &str, is_expanded: bool, handler: &str) -> Element {
    let control = Element::row()
        .width(Size::Auto)
        .padding(Edges::new(0, 0, 0, 1))
        .on_click(handler)
        .stop_propagation(true);

    if is_expanded {
        control
            .id(format!("{column_id}-minus"))
            .class("danger")
            .child(button(column_id, "-"))
    } else {
        control
            .id(format!("{column_id}-plus"))
            .class("primary")
            .child(
                Element::text("...")
                    .id(format!("{column_id}-ellipsis"))
                    .class("black")
                    .width(Size::Auto),
            )
            .child(button(column_id, "+"))
    }
}

fn button(column_id: &str, icon: &str) -> Element {
    Element::text(icon)
        .id(format!("{column_id}-button"))
        .class("collapse-button")
        .width(Size::Auto)
}
