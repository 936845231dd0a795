//! Log table rendering with per-cell expand/collapse.
//!
//! The crate turns log records into a `celldom` element tree, one row per
//! record and one cell per visible column. Cells whose content does not fit
//! in their collapsed height get a toggle control; the decision is made after
//! layout, from measured heights, and stored in a [`CollapseTracker`].
//!
//! A render cycle is:
//!
//! 1. [`rows`] builds a [`TableBody`] from the current tracker state;
//! 2. the body is laid out and measured through a [`Measure`] provider;
//! 3. [`apply_effects`] updates the tracker from the measurements;
//! 4. if anything changed, the body is rendered again.
//!
//! [`LogTable`] drives this cycle until it settles.

pub mod cell;
pub mod column;
pub mod effects;
pub mod error;
pub mod measure;
pub mod presets;
pub mod record;
pub mod rows;
pub mod table;
pub mod tracker;

pub use celldom::Size;
pub use cell::{CellOptions, MeasureEffect, RenderedCell};
pub use column::{Column, Columns, Formatter};
pub use effects::{apply_effects, EffectReport};
pub use error::TableError;
pub use measure::{Extent, LayoutMeasure, Measure};
pub use record::{raw_text, Record};
pub use rows::{rows, Action, ClickOutcome, RowClick, RowParams, RowsRenderer, TableBody};
pub use table::{Frame, LogTable, TableOptions};
pub use tracker::{CollapseState, CollapseTracker, ColumnState};
