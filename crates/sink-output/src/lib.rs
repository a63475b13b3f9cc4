//! `sink-output` — savers that persist a scraped batch of text lines.
//!
//! Two backends are provided:
//!
//! | Feature   | Backend     | Files created                                  |
//! |-----------|-------------|------------------------------------------------|
//! | *(none)*  | Text file   | `reddit-<YYYYMMDDHHMM>.txt`, one line per record |
//! | `sqlite`  | SQLite      | `output.db`                                    |
//!
//! Both implement [`Saver`].  The text backend keeps at most one output file
//! per directory when the caller pairs
//! [`remove_old_file`][TextFileSaver::remove_old_file] with
//! [`save`][Saver::save]; [`rotate`] does exactly that.
//!
//! # Usage
//!
//! ```rust,ignore
//! use sink_output::{Saver, TextFileSaver};
//!
//! let mut saver = TextFileSaver::new("./output")?;
//! saver.set_data(scraped_titles);
//! saver.remove_old_file()?;
//! let written = saver.save()?;
//! ```

pub mod rotation;
pub mod saver;
pub mod text;

#[cfg(feature = "sqlite")]
pub mod sqlite;


pub use rotation::{RotationReport, rotate};
pub use saver::Saver;
pub use sink_core::{SinkError, SinkResult};
pub use text::TextFileSaver;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteSaver;
