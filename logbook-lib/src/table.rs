//! The render cycle: render, lay out, measure, settle.

use celldom::layout::layout;
use celldom::render::render;
use celldom::{Buffer, LayoutResult, Rect};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::cell::CellOptions;
use crate::column::Columns;
use crate::effects::apply_effects;
use crate::error::TableError;
use crate::measure::LayoutMeasure;
use crate::record::Record;
use crate::rows::{ClickOutcome, RowParams, RowsRenderer, TableBody};
use crate::tracker::CollapseState;

type RowParamsFn = Box<dyn Fn(&Record) -> RowParams + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableOptions {
    /// Width of the table in terminal columns.
    pub width: u16,
    /// Rows a collapsed cell shows; 0 is treated as 1.
    pub collapsed_lines: u16,
    /// Upper bound on render passes per frame.
    pub max_passes: usize,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            width: 100,
            collapsed_lines: 1,
            max_passes: 4,
        }
    }
}

/// A settled render of the table.
#[derive(Debug, Clone)]
pub struct Frame {
    pub body: TableBody,
    pub layout: LayoutResult,
    /// Render passes it took to settle.
    pub passes: usize,
}

impl Frame {
    pub fn buffer(&self) -> Buffer {
        render(&self.body.element, &self.layout)
    }

    pub fn lines(&self) -> Vec<String> {
        self.buffer().to_lines()
    }
}

/// Owns table data and collapse state, and renders frames from them.
pub struct LogTable {
    records: Vec<Record>,
    columns: Columns,
    tracker: CollapseState,
    options: TableOptions,
    params: RowParamsFn,
    frame: Option<Frame>,
}

impl LogTable {
    pub fn new(columns: Columns, options: TableOptions) -> Self {
        Self {
            records: Vec::new(),
            columns,
            tracker: CollapseState::new(),
            options,
            params: Box::new(|_| RowParams::default()),
            frame: None,
        }
    }

    pub fn with_row_params(
        mut self,
        params: impl Fn(&Record) -> RowParams + Send + Sync + 'static,
    ) -> Self {
        self.params = Box::new(params);
        self
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Replace the data. Collapse state belongs to the old rows and is reset.
    pub fn set_records(&mut self, records: Vec<Record>) {
        self.records = records;
        self.tracker.clear();
        self.frame = None;
    }

    pub fn columns(&self) -> &Columns {
        &self.columns
    }

    pub fn options(&self) -> TableOptions {
        self.options
    }

    pub fn set_width(&mut self, width: u16) {
        self.options.width = width;
        self.frame = None;
    }

    pub fn tracker(&self) -> &CollapseState {
        &self.tracker
    }

    pub fn tracker_mut(&mut self) -> &mut CollapseState {
        self.frame = None;
        &mut self.tracker
    }

    /// The current frame, rendering it if the table changed.
    pub fn frame(&mut self) -> Result<&Frame, TableError> {
        let frame = match self.frame.take() {
            Some(frame) => frame,
            None => self.settle()?,
        };
        Ok(self.frame.insert(frame))
    }

    /// Click the element with id `target` in the current frame.
    pub fn click(&mut self, target: &str) -> Result<ClickOutcome, TableError> {
        self.frame()?;
        let Some(frame) = self.frame.take() else {
            return Ok(ClickOutcome::default());
        };
        let outcome = frame.body.click(target, &mut self.tracker);
        self.keep_unless_toggled(frame, &outcome);
        Ok(outcome)
    }

    /// Click at a position of the current frame.
    pub fn click_at(&mut self, x: u16, y: u16) -> Result<ClickOutcome, TableError> {
        self.frame()?;
        let Some(frame) = self.frame.take() else {
            return Ok(ClickOutcome::default());
        };
        let outcome = frame.body.click_at(&frame.layout, x, y, &mut self.tracker);
        self.keep_unless_toggled(frame, &outcome);
        Ok(outcome)
    }

    fn keep_unless_toggled(&mut self, frame: Frame, outcome: &ClickOutcome) {
        if outcome.toggled.is_empty() {
            self.frame = Some(frame);
        }
    }

    fn settle(&mut self) -> Result<Frame, TableError> {
        let renderer = RowsRenderer::new(CellOptions {
            collapsed_lines: self.options.collapsed_lines.max(1),
        });
        let available = Rect::new(0, 0, self.options.width, u16::MAX);
        let max_passes = self.options.max_passes.max(1);

        let mut passes = 0;
        loop {
            passes += 1;
            let body = renderer.render(&self.records, &self.columns, &self.tracker, &self.params)?;
            let layout = layout(&body.element, available);

            if passes > max_passes {
                warn!("table did not settle after {max_passes} passes");
                return Ok(Frame {
                    body,
                    layout,
                    passes,
                });
            }

            let measure = LayoutMeasure::new(&body.element, &layout);
            let report = apply_effects(&body.effects, &measure, &mut self.tracker);
            if !report.changed() {
                debug!("table settled after {passes} pass(es)");
                return Ok(Frame {
                    body,
                    layout,
                    passes,
                });
            }
        }
    }
}
