//! Rendering of the table body.

use std::collections::HashMap;

use celldom::{
    dispatch_click, find_element, hit_test_any, Align, Direction, Element, LayoutResult,
};
use log::{trace, warn};

use crate::cell::{self, CellOptions, MeasureEffect};
use crate::column::Columns;
use crate::error::TableError;
use crate::record::{raw_text, Record};
use crate::tracker::CollapseTracker;

/// Caller-supplied attributes of a row element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowParams {
    pub classes: Vec<String>,
    /// Handler name reported back when a click reaches the row.
    pub on_click: Option<String>,
    pub data: Vec<(String, String)>,
}

impl RowParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn on_click(mut self, handler: impl Into<String>) -> Self {
        self.on_click = Some(handler.into());
        self
    }

    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.push((key.into(), value.into()));
        self
    }
}

/// What a click handler of the table body does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Flip a cell between expanded and collapsed.
    Toggle { row_id: String, column: String },
    /// A row-level handler supplied through [`RowParams`].
    Row { handler: String, row_id: String },
}

/// A click that bubbled up to a row handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowClick {
    pub handler: String,
    pub row_id: String,
    pub data: HashMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClickOutcome {
    /// Cells toggled by the click, as (row id, column name).
    pub toggled: Vec<(String, String)>,
    pub row: Option<RowClick>,
}

/// A rendered table body.
#[derive(Debug, Clone, PartialEq)]
pub struct TableBody {
    pub element: Element,
    /// Measurements to run after layout, in render order.
    pub effects: Vec<MeasureEffect>,
    actions: HashMap<String, Action>,
}

impl TableBody {
    /// Ids of the row elements, in render order.
    pub fn row_ids(&self) -> impl Iterator<Item = &str> {
        self.element.child_elements().iter().map(|row| row.id.as_str())
    }

    pub fn action(&self, handler: &str) -> Option<&Action> {
        self.actions.get(handler)
    }

    /// Dispatch a click on the element with id `target`.
    ///
    /// Toggle controls update `tracker`; the new state shows on the next render.
    pub fn click(&self, target: &str, tracker: &mut dyn CollapseTracker) -> ClickOutcome {
        let mut outcome = ClickOutcome::default();

        for handler in dispatch_click(&self.element, target) {
            match self.actions.get(&handler) {
                Some(Action::Toggle { row_id, column }) => {
                    tracker.toggle_column_collapse(row_id, column);
                    outcome.toggled.push((row_id.clone(), column.clone()));
                }
                Some(Action::Row { handler, row_id }) => {
                    let data = find_element(&self.element, row_id)
                        .map(|row| row.data.clone())
                        .unwrap_or_default();
                    outcome.row = Some(RowClick {
                        handler: handler.clone(),
                        row_id: row_id.clone(),
                        data,
                    });
                }
                None => trace!("no action for handler {handler:?}"),
            }
        }

        outcome
    }

    /// Dispatch a click at a position of the laid-out body.
    pub fn click_at(
        &self,
        layout: &LayoutResult,
        x: u16,
        y: u16,
        tracker: &mut dyn CollapseTracker,
    ) -> ClickOutcome {
        match hit_test_any(layout, &self.element, x, y) {
            Some(target) => self.click(&target, tracker),
            None => ClickOutcome::default(),
        }
    }
}

/// Builds table bodies.
#[derive(Debug, Clone)]
pub struct RowsRenderer {
    pub body_id: String,
    pub cell: CellOptions,
}

impl Default for RowsRenderer {
    fn default() -> Self {
        Self {
            body_id: "tbody".to_string(),
            cell: CellOptions::default(),
        }
    }
}

impl RowsRenderer {
    pub fn new(cell: CellOptions) -> Self {
        Self {
            cell,
            ..Default::default()
        }
    }

    /// Render one row per record and one cell per visible column.
    ///
    /// Fails when the columns do not name exactly one primary column.
    pub fn render<F>(
        &self,
        data: &[Record],
        columns: &Columns,
        tracker: &dyn CollapseTracker,
        params: F,
    ) -> Result<TableBody, TableError>
    where
        F: Fn(&Record) -> RowParams,
    {
        let primary = columns.primary()?;
        let mut effects = Vec::new();
        let mut actions = HashMap::new();
        let mut rows = Vec::with_capacity(data.len());

        for entry in data {
            let row_id = match entry.get(&primary.key) {
                Some(value) if !value.is_null() => format!("row{}", raw_text(Some(value))),
                _ => {
                    warn!("record without primary value {:?}", primary.key);
                    "rowundefined".to_string()
                }
            };

            let params = params(entry);
            let mut row = Element::new("tr")
                .id(&row_id)
                .classes(params.classes)
                .direction(Direction::Row)
                .align(Align::Stretch);
            for (key, value) in params.data {
                row = row.data(key, value);
            }
            if let Some(handler) = params.on_click {
                let name = format!("{row_id}:{handler}");
                row = row.on_click(&name);
                actions.insert(
                    name,
                    Action::Row {
                        handler,
                        row_id: row_id.clone(),
                    },
                );
            }

            for column in columns.visible() {
                let rendered = cell::content(
                    &column.key,
                    column,
                    entry.get(&column.key),
                    &row_id,
                    tracker,
                    self.cell,
                );
                effects.extend(rendered.effect);
                if let Some((handler, action)) = rendered.toggle {
                    actions.insert(handler, action);
                }
                row = row.child(rendered.element);
            }

            rows.push(row);
        }

        let element = Element::new("tbody").id(&self.body_id).children(rows);

        Ok(TableBody {
            element,
            effects,
            actions,
        })
    }
}

/// Render a table body with default options.
pub fn rows<F>(
    data: &[Record],
    columns: &Columns,
    tracker: &dyn CollapseTracker,
    params: F,
) -> Result<TableBody, TableError>
where
    F: Fn(&Record) -> RowParams,
{
    RowsRenderer::default().render(data, columns, tracker, params)
}
