//! Knobs for [`diff_with`](crate::diff_with).

use crate::error::{Error, Result};
use crate::hunk::DEFAULT_CONTEXT;
use crate::myers::DEFAULT_MAX_EDIT_DISTANCE;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// How an unterminated last line is shown.
///
/// Either way it never matches the same text followed by a newline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingNewline {
    /// Follow the line with `\ No newline at end of file`
    #[default]
    Marker,
    /// Print the line as if it were terminated
    Silent,
}

/// File header lines written ahead of the first hunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeaderStyle {
    /// `diff old new`, then `--- old` and `+++ new`
    #[default]
    Command,
    /// `--- old` and `+++ new`
    Files,
    /// Hunks only
    None,
}

/// Options for a diff.
///
/// Every field is optional when read from TOML:
///
/// ```
/// use linediff::options::{DiffOptions, HeaderStyle};
///
/// let options = DiffOptions::from_toml_str("context = 1\nheader = \"files\"\n").unwrap();
/// assert_eq!(options.context, 1);
/// assert_eq!(options.header, HeaderStyle::Files);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DiffOptions {
    /// Unchanged lines shown around each change
    pub context: usize,
    /// Myers search rounds before switching to the anchored diff, `None` for no limit.
    /// Written as an integer in TOML, or `false` for no limit.
    #[serde(with = "edit_limit_serde")]
    pub max_edit_distance: Option<usize>,
    pub missing_newline: MissingNewline,
    pub header: HeaderStyle,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            context: DEFAULT_CONTEXT,
            max_edit_distance: Some(DEFAULT_MAX_EDIT_DISTANCE),
            missing_newline: MissingNewline::default(),
            header: HeaderStyle::default(),
        }
    }
}

impl DiffOptions {
    pub fn with_context(mut self, context: usize) -> Self {
        self.context = context;
        self
    }

    pub fn with_max_edit_distance(mut self, max_edit_distance: usize) -> Self {
        self.max_edit_distance = Some(max_edit_distance);
        self
    }

    /// Always search for the shortest edit script.
    ///
    /// Neither time nor memory is bounded then: the search keeps every round,
    /// so memory grows with the square of the edit distance.
    pub fn without_edit_limit(mut self) -> Self {
        self.max_edit_distance = None;
        self
    }

    pub fn with_missing_newline(mut self, missing_newline: MissingNewline) -> Self {
        self.missing_newline = missing_newline;
        self
    }

    pub fn with_header(mut self, header: HeaderStyle) -> Self {
        self.header = header;
        self
    }

    /// Parse options from TOML, filling in defaults for absent keys.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Load options from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }
}

mod edit_limit_serde {
    use crate::myers::DEFAULT_MAX_EDIT_DISTANCE;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(limit: &Option<usize>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match limit {
            Some(rounds) => serializer.serialize_u64(*rounds as u64),
            None => serializer.serialize_bool(false),
        }
    }

    /// Accepts a round count, `false` for no limit or `true` for the default.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<usize>, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RoundsOrBool {
            Rounds(usize),
            Bool(bool),
        }

        match RoundsOrBool::deserialize(deserializer)? {
            RoundsOrBool::Rounds(rounds) => Ok(Some(rounds)),
            RoundsOrBool::Bool(true) => Ok(Some(DEFAULT_MAX_EDIT_DISTANCE)),
            RoundsOrBool::Bool(false) => Ok(None),
        }
    }
}
