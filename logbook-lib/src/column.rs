//! Column descriptors.

use std::fmt;
use std::sync::Arc;

use celldom::Size;
use serde_json::Value;

use crate::error::TableError;

/// Turns a raw cell value into display text.
pub type Formatter = Arc<dyn Fn(&Value) -> String + Send + Sync>;

/// Describes how one key of a [`crate::Record`] is shown.
#[derive(Clone)]
pub struct Column {
    /// Record key, also part of every cell's element id.
    pub key: String,
    /// Display name; the collapse tracker keys its state by this name.
    pub name: String,
    pub visible: bool,
    pub format: Option<Formatter>,
    /// Cell width inside the row. `None` shares the remaining width.
    pub size: Option<Size>,
    /// Whether overflowing cells of this column may be expanded.
    pub expand: bool,
    /// Whether this column's value identifies the row.
    pub primary: bool,
}

impl fmt::Debug for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("name", &self.name)
            .field("visible", &self.visible)
            .field("format", &self.format.as_ref().map(|_| ".."))
            .field("size", &self.size)
            .field("expand", &self.expand)
            .field("primary", &self.primary)
            .finish()
    }
}

impl Column {
    pub fn new(key: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            visible: true,
            format: None,
            size: None,
            expand: false,
            primary: false,
        }
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn hidden(self) -> Self {
        self.visible(false)
    }

    pub fn format(mut self, format: impl Fn(&Value) -> String + Send + Sync + 'static) -> Self {
        self.format = Some(Arc::new(format));
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }

    pub fn expand(mut self, expand: bool) -> Self {
        self.expand = expand;
        self
    }

    pub fn expandable(self) -> Self {
        self.expand(true)
    }

    pub fn primary(mut self) -> Self {
        self.primary = true;
        self
    }

    /// Display text for `value`, formatted when the column has a formatter.
    pub fn display(&self, value: Option<&Value>) -> String {
        match &self.format {
            Some(format) => format(value.unwrap_or(&Value::Null)),
            None => crate::record::raw_text(value),
        }
    }
}

/// An ordered set of columns. Iteration order is render order.
#[derive(Debug, Clone, Default)]
pub struct Columns(Vec<Column>);

impl Columns {
    pub fn new(columns: Vec<Column>) -> Self {
        Self(columns)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Column> {
        self.0.iter()
    }

    pub fn visible(&self) -> impl Iterator<Item = &Column> {
        self.0.iter().filter(|c| c.visible)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Column> {
        self.0.iter().find(|c| c.key == key)
    }

    pub fn get_mut(&mut self, key: &str) -> Result<&mut Column, TableError> {
        self.0
            .iter_mut()
            .find(|c| c.key == key)
            .ok_or_else(|| TableError::UnknownColumn(key.to_string()))
    }

    /// The single column identifying rows.
    pub fn primary(&self) -> Result<&Column, TableError> {
        let mut primaries = self.0.iter().filter(|c| c.primary);
        match (primaries.next(), primaries.next()) {
            (None, _) => Err(TableError::NoPrimaryColumn),
            (Some(column), None) => Ok(column),
            (Some(_), Some(_)) => Err(TableError::MultiplePrimaryColumns {
                keys: self
                    .0
                    .iter()
                    .filter(|c| c.primary)
                    .map(|c| c.key.clone())
                    .collect(),
            }),
        }
    }
}

impl FromIterator<Column> for Columns {
    fn from_iter<I: IntoIterator<Item = Column>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
