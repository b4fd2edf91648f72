//! Action configuration
//!
//! The run workflow is configured through named string inputs, the way a
//! GitHub Action receives them. Every input is listed in [`Input`]; sources
//! look values up by that table, never by deriving names at runtime.
//!
//! Sources can be stacked with [`LayeredInputs`]: the environment first,
//! then an optional `coverage-monitor.toml` file.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::models::{CommentMode, Thresholds};
use crate::error::{CoverageError, Result};

/// Default status and comment context
pub const DEFAULT_CONTEXT: &str = "Coverage Report";

/// Every input the action understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Input {
    /// Post a pull request comment
    Comment,
    /// Post a commit status
    Check,
    /// Token for the review host
    GithubToken,
    /// Current coverage report
    CloverFile,
    /// Baseline coverage report
    BaseCloverFile,
    /// Continue when the baseline cannot be fetched
    IgnoreMissingBase,
    /// Percentage points of regression to forgive
    DiffTolerance,
    /// Line rate below which coverage is red
    ThresholdAlert,
    /// Line rate below which coverage is yellow
    ThresholdWarning,
    /// Commit status name
    StatusContext,
    /// Comment heading and lookup marker
    CommentContext,
    /// `replace`, `update` or `insert`
    CommentMode,
    /// Directory used as baseline blob storage
    BaselineStore,
    /// Key prefix inside the baseline store
    BaselineKeyPrefix,
}

impl Input {
    /// All inputs, in declaration order
    pub const ALL: [Self; 14] = [
        Self::Comment,
        Self::Check,
        Self::GithubToken,
        Self::CloverFile,
        Self::BaseCloverFile,
        Self::IgnoreMissingBase,
        Self::DiffTolerance,
        Self::ThresholdAlert,
        Self::ThresholdWarning,
        Self::StatusContext,
        Self::CommentContext,
        Self::CommentMode,
        Self::BaselineStore,
        Self::BaselineKeyPrefix,
    ];

    /// External input name
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Comment => "comment",
            Self::Check => "check",
            Self::GithubToken => "github_token",
            Self::CloverFile => "clover_file",
            Self::BaseCloverFile => "base_clover_file",
            Self::IgnoreMissingBase => "ignore_missing_base",
            Self::DiffTolerance => "diff_tolerance",
            Self::ThresholdAlert => "threshold_alert",
            Self::ThresholdWarning => "threshold_warning",
            Self::StatusContext => "status_context",
            Self::CommentContext => "comment_context",
            Self::CommentMode => "comment_mode",
            Self::BaselineStore => "baseline_store",
            Self::BaselineKeyPrefix => "baseline_key_prefix",
        }
    }

    /// Environment variable carrying this input (`INPUT_CLOVER_FILE`, ...)
    #[must_use]
    pub fn env_var(self) -> String {
        format!("INPUT_{}", self.key().to_uppercase())
    }

    /// Look an input up by its external name
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|input| input.key() == key)
    }
}

/// A source of raw input values
pub trait InputSource {
    /// Raw value of `input`, if set
    fn get(&self, input: Input) -> Option<String>;
}

/// Inputs from `INPUT_*` environment variables
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvInputs;

impl InputSource for EnvInputs {
    fn get(&self, input: Input) -> Option<String> {
        std::env::var(input.env_var()).ok()
    }
}

/// Inputs held in memory
#[derive(Debug, Clone, Default)]
pub struct MapInputs(HashMap<Input, String>);

impl MapInputs {
    /// Empty input set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a value
    #[must_use]
    pub fn with(mut self, input: Input, value: impl Into<String>) -> Self {
        self.0.insert(input, value.into());
        self
    }
}

impl InputSource for MapInputs {
    fn get(&self, input: Input) -> Option<String> {
        self.0.get(&input).cloned()
    }
}

/// Inputs from a TOML table
///
/// ```toml
/// check = true
/// threshold_alert = 80
/// comment_context = "Coverage"
/// ```
///
/// Unknown keys are rejected so that typos do not go unnoticed.
#[derive(Debug, Clone, Default)]
pub struct FileInputs(MapInputs);

impl FileInputs {
    /// Load a TOML config file
    pub fn load(path: &Path) -> Result<Self> {
        Self::parse(&fs::read_to_string(path)?)
    }

    /// Parse TOML config text
    pub fn parse(content: &str) -> Result<Self> {
        let table: toml::Table =
            toml::from_str(content).map_err(|err| CoverageError::Config(err.to_string()))?;
        let mut inputs = MapInputs::new();
        for (key, value) in table {
            let input = Input::from_key(&key)
                .ok_or_else(|| CoverageError::Config(format!("unknown input `{key}`")))?;
            let raw = match value {
                toml::Value::String(s) => s,
                toml::Value::Integer(i) => i.to_string(),
                toml::Value::Float(f) => f.to_string(),
                toml::Value::Boolean(b) => b.to_string(),
                other => {
                    return Err(CoverageError::Config(format!(
                        "input `{key}` must be a scalar, got {}",
                        other.type_str()
                    )));
                },
            };
            inputs = inputs.with(input, raw);
        }
        Ok(Self(inputs))
    }
}

impl InputSource for FileInputs {
    fn get(&self, input: Input) -> Option<String> {
        self.0.get(input)
    }
}

/// The first source holding a non-empty value wins
#[derive(Default)]
pub struct LayeredInputs {
    layers: Vec<Box<dyn InputSource>>,
}

impl std::fmt::Debug for LayeredInputs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayeredInputs").field("layers", &self.layers.len()).finish()
    }
}

impl LayeredInputs {
    /// No layers
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a lower-priority layer
    #[must_use]
    pub fn layer(mut self, source: impl InputSource + 'static) -> Self {
        self.layers.push(Box::new(source));
        self
    }
}

impl InputSource for LayeredInputs {
    fn get(&self, input: Input) -> Option<String> {
        self.layers
            .iter()
            .find_map(|layer| layer.get(input).filter(|value| !value.is_empty()))
    }
}

/// Fully resolved configuration of the run workflow
#[derive(Debug, Clone, PartialEq)]
pub struct ActionConfig {
    /// Post a pull request comment
    pub comment: bool,
    /// Post a commit status
    pub check: bool,
    /// Token for the review host
    pub github_token: String,
    /// Current coverage report
    pub clover_file: PathBuf,
    /// Baseline coverage report
    pub base_clover_file: Option<PathBuf>,
    /// Continue when the baseline cannot be fetched
    pub ignore_missing_base: bool,
    /// Percentage points of regression to forgive
    pub diff_tolerance: f64,
    /// Line rate below which coverage is red
    pub threshold_alert: f64,
    /// Line rate below which coverage is yellow
    pub threshold_warning: f64,
    /// Commit status name
    pub status_context: String,
    /// Comment heading and lookup marker
    pub comment_context: String,
    /// Comment delivery mode
    pub comment_mode: CommentMode,
    /// Directory used as baseline blob storage
    pub baseline_store: Option<PathBuf>,
    /// Key prefix inside the baseline store
    pub baseline_key_prefix: Option<String>,
}

impl ActionConfig {
    /// Resolve every input from `source`
    ///
    /// `github_token` and `clover_file` are required. Booleans are true only
    /// for the literal `true`; an unknown comment mode falls back to
    /// `replace`.
    pub fn load(source: &dyn InputSource) -> Result<Self> {
        let get = |input: Input| source.get(input).filter(|value| !value.is_empty());
        let required = |input: Input| {
            get(input).ok_or_else(|| {
                CoverageError::Config(format!("input required and not supplied: {}", input.key()))
            })
        };
        let flag = |input: Input| get(input).is_some_and(|value| value == "true");
        let number = |input: Input, default: f64| -> Result<f64> {
            get(input).map_or(Ok(default), |raw| {
                raw.trim().parse::<f64>().ok().filter(|value| value.is_finite()).ok_or_else(|| {
                    CoverageError::Config(format!("input {} is not a number: {raw:?}", input.key()))
                })
            })
        };

        Ok(Self {
            comment: flag(Input::Comment),
            check: flag(Input::Check),
            github_token: required(Input::GithubToken)?,
            clover_file: PathBuf::from(required(Input::CloverFile)?),
            base_clover_file: get(Input::BaseCloverFile).map(PathBuf::from),
            ignore_missing_base: flag(Input::IgnoreMissingBase),
            diff_tolerance: number(Input::DiffTolerance, 0.0)?,
            threshold_alert: number(Input::ThresholdAlert, 90.0)?,
            threshold_warning: number(Input::ThresholdWarning, 50.0)?,
            status_context: get(Input::StatusContext).unwrap_or_else(|| DEFAULT_CONTEXT.to_string()),
            comment_context: get(Input::CommentContext)
                .unwrap_or_else(|| DEFAULT_CONTEXT.to_string()),
            comment_mode: get(Input::CommentMode)
                .map(|mode| CommentMode::parse_or_default(&mode))
                .unwrap_or_default(),
            baseline_store: get(Input::BaselineStore).map(PathBuf::from),
            baseline_key_prefix: get(Input::BaselineKeyPrefix),
        })
    }

    /// Thresholds handed to the classifier
    #[must_use]
    pub const fn thresholds(&self) -> Thresholds {
        Thresholds::new(self.threshold_alert, self.threshold_warning)
    }
}
