//! Saver configuration.

use std::path::PathBuf;

use crate::naming::{DEFAULT_EXTENSION, DEFAULT_PREFIX, OutputPattern};
use crate::SinkResult;

/// Where and under which name pattern a saver writes.
///
/// Typically loaded from a TOML/JSON file by the application crate (enable
/// the `serde` feature) and passed to `TextFileSaver::from_config`.
///
/// The directory is not checked here.  It must already exist; a missing or
/// unwritable directory surfaces as an I/O error when the saver touches it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaverConfig {
    /// Directory holding the single current output file.
    pub target_dir: PathBuf,

    /// File name prefix.  Default: `reddit`.
    #[cfg_attr(feature = "serde", serde(default = "default_prefix"))]
    pub prefix: String,

    /// File name extension without the dot.  Default: `txt`.
    #[cfg_attr(feature = "serde", serde(default = "default_extension"))]
    pub extension: String,
}

impl SaverConfig {
    /// Config for `target_dir` with the default `reddit-<stamp>.txt` names.
    pub fn new(target_dir: impl Into<PathBuf>) -> Self {
        Self {
            target_dir: target_dir.into(),
            prefix:     default_prefix(),
            extension:  default_extension(),
        }
    }

    /// Build the name pattern described by this config.
    pub fn pattern(&self) -> SinkResult<OutputPattern> {
        OutputPattern::new(&self.prefix, &self.extension)
    }
}

fn default_prefix() -> String {
    DEFAULT_PREFIX.to_owned()
}

fn default_extension() -> String {
    DEFAULT_EXTENSION.to_owned()
}
