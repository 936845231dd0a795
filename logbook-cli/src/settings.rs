//! User settings, read from a JSON file.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::LevelFilter;
use logbook_lib::{Columns, Size, TableError, TableOptions};
use serde::{Deserialize, Serialize};

use crate::error::CliError;
use crate::paths;

/// Per-column adjustments of the built-in log columns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnOverride {
    pub visible: Option<bool>,
    pub expand: Option<bool>,
    /// Fixed width in terminal columns.
    pub width: Option<u16>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    #[serde(flatten)]
    pub table: TableOptions,
    pub log_level: String,
    pub columns: BTreeMap<String, ColumnOverride>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            table: TableOptions::default(),
            log_level: "info".to_string(),
            columns: BTreeMap::new(),
        }
    }
}

impl Settings {
    /// The settings file to read: `explicit`, or the default one if it exists.
    pub fn locate(explicit: Option<&Path>) -> Option<PathBuf> {
        match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => paths::settings_file().filter(|default| default.exists()),
        }
    }

    /// Load settings from `path`, or the defaults without one.
    pub fn load(path: Option<&Path>) -> Result<Self, CliError> {
        match path {
            Some(path) => Self::from_json(&fs::read_to_string(path)?),
            None => Ok(Self::default()),
        }
    }

    pub fn from_json(text: &str) -> Result<Self, CliError> {
        let settings: Self = serde_json::from_str(text)?;
        if settings.table.collapsed_lines == 0 {
            return Err(CliError::ZeroCollapsedLines);
        }
        Ok(settings)
    }

    pub fn log_level(&self) -> Result<LevelFilter, CliError> {
        LevelFilter::from_str(&self.log_level)
            .map_err(|_| CliError::InvalidLogLevel(self.log_level.clone()))
    }

    /// Apply the column overrides to `columns`.
    pub fn apply(&self, columns: &mut Columns) -> Result<(), TableError> {
        for (key, change) in &self.columns {
            let column = columns.get_mut(key)?;
            if let Some(visible) = change.visible {
                column.visible = visible;
            }
            if let Some(expand) = change.expand {
                column.expand = expand;
            }
            if let Some(width) = change.width {
                column.size = Some(Size::Fixed(width));
            }
        }
        Ok(())
    }
}
