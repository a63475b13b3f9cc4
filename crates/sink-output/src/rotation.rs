//! Caller-driven rotation: delete the previous output, then save.
//!
//! [`TextFileSaver::remove_old_file`] and [`Saver::save`] stay independent so
//! a caller can also accumulate files.  [`rotate`] is the replace-in-place
//! policy built from the two.

use std::path::PathBuf;

use sink_core::{Clock, SinkResult};

use crate::saver::Saver;
use crate::text::TextFileSaver;

/// Result of one rotation.
#[derive(Debug)]
pub struct RotationReport {
    /// Output files deleted before the write (usually zero or one).
    pub removed: Vec<PathBuf>,

    /// The file written.
    pub written: PathBuf,
}

impl RotationReport {
    /// Did this rotation replace an earlier output file?
    pub fn replaced_previous(&self) -> bool {
        !self.removed.is_empty()
    }
}

/// Remove every existing output file in the saver's directory, then save.
///
/// Stops at the first error.  If deletion succeeds but the write fails, the
/// directory is left with no output file.
pub fn rotate<C: Clock>(saver: &mut TextFileSaver<C>) -> SinkResult<RotationReport> {
    let removed = saver.remove_old_file()?;
    let written = saver.save()?;
    Ok(RotationReport { removed, written })
}
