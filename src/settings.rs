//! # Settings Module
//!
//! ## Purpose
//! Holds everything the CHEMKIN writers need besides the data itself: where the files go,
//! how verbose the logging is, which reference scheme is reported in the model headers and
//! which Hartree -> kcal/mol factor converts the heats of formation.
//!
//! ## Configuration Format
//! ```json
//! {
//!   "ckin_path": "output/ckin",
//!   "log_level": "info",
//!   "refscheme": "cbh0",
//!   "eh2kcal": 627.509474
//! }
//! ```
//! Every key is optional, missing keys take the default values.
//!
//! ## Usage Pattern
//! ```rust,no_run
//! use CkinWriter::settings::CkinSettings;
//!
//! let settings = CkinSettings::from_file("ckin_config.json").unwrap();
//! settings.init_logger().unwrap();
//! ```

use crate::Ckin::ckin_errors::CkinError;
use crate::Utils::logger::init_logger;
use crate::phycon::EH2KCAL;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Output settings of the CHEMKIN writers.
///
/// # Fields
/// * `ckin_path` - directory the files are written to
/// * `log_level` - one of `off`, `error`, `warn`, `info`, `debug`, `trace`
/// * `refscheme` - reference scheme reported in the model headers
/// * `eh2kcal` - conversion factor for the heats of formation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CkinSettings {
    pub ckin_path: PathBuf,
    pub log_level: String,
    pub refscheme: Option<String>,
    pub eh2kcal: f64,
}

impl Default for CkinSettings {
    fn default() -> Self {
        Self {
            ckin_path: PathBuf::from("ckin"),
            log_level: "warn".to_string(),
            refscheme: None,
            eh2kcal: EH2KCAL,
        }
    }
}

impl CkinSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads settings from a JSON file.
    ///
    /// # Returns
    /// * `Err(CkinError::Io)` - if the file can't be read
    /// * `Err(CkinError::InvalidJson)` - if the content is not valid settings JSON
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CkinError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| CkinError::io(path, e))?;
        Self::from_json_str(&content)
    }

    pub fn from_json_str(json: &str) -> Result<Self, CkinError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Saves settings as pretty printed JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), CkinError> {
        let path = path.as_ref();
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content).map_err(|e| CkinError::io(path, e))
    }

    pub fn with_ckin_path(mut self, ckin_path: impl Into<PathBuf>) -> Self {
        self.ckin_path = ckin_path.into();
        self
    }

    pub fn with_refscheme(mut self, refscheme: &str) -> Self {
        self.refscheme = Some(refscheme.to_string());
        self
    }

    pub fn with_log_level(mut self, log_level: &str) -> Self {
        self.log_level = log_level.to_string();
        self
    }

    pub fn with_eh2kcal(mut self, eh2kcal: f64) -> Self {
        self.eh2kcal = eh2kcal;
        self
    }

    /// verbosity parsed from `log_level`, unknown names fall back to `Warn`
    pub fn level_filter(&self) -> LevelFilter {
        LevelFilter::from_str(&self.log_level).unwrap_or(LevelFilter::Warn)
    }

    /// installs the terminal logger with the configured verbosity
    pub fn init_logger(&self) -> Result<(), CkinError> {
        init_logger(self.level_filter())
    }
}
