//! Output file naming.
//!
//! Every saver file is named `<prefix>-<YYYYMMDDHHMM>.<extension>`; the
//! default is `reddit-<stamp>.txt`.  Consumers of the output directory rely
//! on this exact shape, so it is the only thing that identifies "our" files
//! among arbitrary directory contents.
//!
//! Matching is done per directory entry and anchored at both ends.  A name
//! only matches if the whole name has the shape, so `old-reddit-….txt.bak`
//! and names that would only match when glued to a neighbour are ignored.

use regex::Regex;

use crate::time::{STAMP_DIGITS, Timestamp};
use crate::SinkResult;

pub const DEFAULT_PREFIX: &str = "reddit";
pub const DEFAULT_EXTENSION: &str = "txt";

/// Recognises and renders output file names.
#[derive(Clone, Debug)]
pub struct OutputPattern {
    prefix:    String,
    extension: String,
    regex:     Regex,
}

impl OutputPattern {
    /// Build a pattern for `<prefix>-<12 digits>.<extension>`.
    pub fn new(prefix: &str, extension: &str) -> SinkResult<Self> {
        let regex = Regex::new(&format!(
            r"^{}-([0-9]{{{}}})\.{}$",
            regex::escape(prefix),
            STAMP_DIGITS,
            regex::escape(extension),
        ))?;
        Ok(Self {
            prefix:    prefix.to_owned(),
            extension: extension.to_owned(),
            regex,
        })
    }

    /// The `reddit-<stamp>.txt` pattern.
    pub fn reddit() -> SinkResult<Self> {
        Self::new(DEFAULT_PREFIX, DEFAULT_EXTENSION)
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Does the whole of `name` have the output shape?
    pub fn matches(&self, name: &str) -> bool {
        self.regex.is_match(name)
    }

    /// Render the file name for `stamp`.
    pub fn file_name(&self, stamp: Timestamp) -> String {
        format!("{}-{}.{}", self.prefix, stamp, self.extension)
    }

    /// Extract the stamp from a matching name.
    ///
    /// Returns `None` for non-matching names and for 12-digit runs that are
    /// not a calendar minute (e.g. month `13`).
    pub fn stamp_of(&self, name: &str) -> Option<Timestamp> {
        let caps = self.regex.captures(name)?;
        Timestamp::parse(caps.get(1)?.as_str()).ok()
    }
}
