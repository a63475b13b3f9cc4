//! The `Saver` trait implemented by all backends.

use std::path::PathBuf;

use sink_core::SinkResult;

/// Persists the batch currently held by the backend.
///
/// Failures are logged by the backend *and* returned, so callers that only
/// watch the logs see the same events as callers that inspect the result.
pub trait Saver {
    /// Write the held batch and return the location written.
    fn save(&mut self) -> SinkResult<PathBuf>;
}
