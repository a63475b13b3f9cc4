//! `sink-core` — foundational types for the `scrape_sink` savers.
//!
//! This crate is a dependency of every other `sink-*` crate.  It has no
//! `sink-*` dependencies and only a few external ones (`chrono`, `regex`,
//! `thiserror`, plus optional `serde` and `rusqlite`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`naming`]      | `OutputPattern` (`reddit-<YYYYMMDDHHMM>.txt`)         |
//! | [`time`]        | `Timestamp`, `Clock`, `SystemClock`, `FixedClock`     |
//! | [`config`]      | `SaverConfig`                                         |
//! | [`error`]       | `SinkError`, `SinkResult`                             |
//!
//! # Feature flags
//!
//! | Flag     | Effect                                                    |
//! |----------|-----------------------------------------------------------|
//! | `serde`  | Adds `Serialize`/`Deserialize` to `SaverConfig`.          |
//! | `sqlite` | Adds the `SinkError::Sqlite` variant.                     |

pub mod config;
pub mod error;
pub mod naming;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::SaverConfig;
pub use error::{SinkError, SinkResult};
pub use naming::OutputPattern;
pub use time::{Clock, FixedClock, SystemClock, Timestamp};
