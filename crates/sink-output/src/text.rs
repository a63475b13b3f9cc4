//! Text file backend.
//!
//! Writes the batch to `<target_dir>/reddit-<YYYYMMDDHHMM>.txt`, one record
//! per line, each terminated by `\n`.  No header, no footer.
//!
//! Deleting the previous file is a separate step
//! ([`TextFileSaver::remove_old_file`]); `save` never deletes anything.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use sink_core::{Clock, OutputPattern, SaverConfig, SinkError, SinkResult, SystemClock};
use tracing::{error, info};

use crate::saver::Saver;

/// Rotating flat-file saver for one output directory.
pub struct TextFileSaver<C: Clock = SystemClock> {
    target_dir: PathBuf,
    pattern:    OutputPattern,
    data:       Option<Vec<String>>,
    clock:      C,
}

impl TextFileSaver<SystemClock> {
    /// Saver for `target_dir` using `reddit-<stamp>.txt` names.
    ///
    /// The directory is not touched until the first list, delete, or write.
    pub fn new(target_dir: impl Into<PathBuf>) -> SinkResult<Self> {
        Self::from_config(&SaverConfig::new(target_dir))
    }

    pub fn from_config(config: &SaverConfig) -> SinkResult<Self> {
        Ok(Self {
            target_dir: config.target_dir.clone(),
            pattern:    config.pattern()?,
            data:       None,
            clock:      SystemClock,
        })
    }
}

impl<C: Clock> TextFileSaver<C> {
    /// Swap the time source, keeping directory, pattern, and batch.
    pub fn with_clock<D: Clock>(self, clock: D) -> TextFileSaver<D> {
        TextFileSaver {
            target_dir: self.target_dir,
            pattern:    self.pattern,
            data:       self.data,
            clock,
        }
    }

    /// Point every later operation at `target_dir`.
    pub fn configure(&mut self, target_dir: impl Into<PathBuf>) {
        self.target_dir = target_dir.into();
    }

    pub fn target_dir(&self) -> &Path {
        &self.target_dir
    }

    pub fn pattern(&self) -> &OutputPattern {
        &self.pattern
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    /// Hold `lines` for the next save, replacing any previous batch.
    pub fn set_data<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.data = Some(lines.into_iter().map(Into::into).collect());
    }

    /// The batch held for the next save, if any.
    pub fn data(&self) -> Option<&[String]> {
        self.data.as_deref()
    }

    /// Delete every output file in the target directory.
    ///
    /// Normally there is at most one; any extras left behind by an earlier
    /// crash or a concurrent writer are removed too, so the directory holds
    /// none afterwards.  Returns the deleted paths; an empty list means there
    /// was nothing to do.
    ///
    /// Listing or deletion failures are returned unchanged.  Deletion stops
    /// at the first failure, and files already deleted before it are not
    /// reported; call [`path_to_new_file`][Self::path_to_new_file] to see
    /// what is left.
    pub fn remove_old_file(&self) -> SinkResult<Vec<PathBuf>> {
        let mut removed = Vec::new();
        for (name, path) in self.output_entries()? {
            info!(file = %name, dir = %self.target_dir.display(), "Deleting previous output file");
            fs::remove_file(&path)?;
            removed.push(path);
        }
        Ok(removed)
    }

    /// Full path of the file a save would write right now.
    ///
    /// Reads the clock once.  Callers must hold on to the returned path
    /// rather than calling this again for the write step.
    pub fn calculate_filename(&self) -> PathBuf {
        self.target_dir.join(self.pattern.file_name(self.clock.stamp()))
    }

    /// The newest output file currently in the target directory.
    ///
    /// Every matching name counts, including ones whose digits are not a
    /// real calendar minute.  Names differ only in their fixed-width digits,
    /// so the greatest name is the newest.  Returns `Ok(None)` when no entry
    /// matches.
    pub fn path_to_new_file(&self) -> SinkResult<Option<PathBuf>> {
        let newest = self
            .output_entries()?
            .into_iter()
            .max_by(|(a, _), (b, _)| a.cmp(b))
            .map(|(_, path)| path);
        Ok(newest)
    }

    /// Like [`path_to_new_file`][Self::path_to_new_file], but an empty
    /// directory is [`SinkError::NoOutputFile`].
    pub fn require_new_file(&self) -> SinkResult<PathBuf> {
        self.path_to_new_file()?.ok_or_else(|| SinkError::NoOutputFile {
            dir: self.target_dir.clone(),
        })
    }

    /// Non-directory entries in the target directory whose whole name matches
    /// the output pattern, as `(name, path)`.  Symlinks are included so
    /// deletion unlinks them.
    fn output_entries(&self) -> SinkResult<Vec<(String, PathBuf)>> {
        let mut found = Vec::new();
        for entry in fs::read_dir(&self.target_dir)? {
            let entry = entry?;
            // Non-UTF-8 names can never match the ASCII pattern.
            let Ok(name) = entry.file_name().into_string() else {
                continue;
            };
            if self.pattern.matches(&name) && !entry.file_type()?.is_dir() {
                found.push((name, entry.path()));
            }
        }
        Ok(found)
    }
}

impl<C: Clock> Saver for TextFileSaver<C> {
    /// Write the held batch to a freshly named file.
    ///
    /// An existing file with the same name (a second save in the same minute)
    /// is truncated.  A failed open or write is logged at error level and
    /// returned as [`SinkError::Write`]; the completion message is logged
    /// either way.  A failure mid-batch can leave a partial file behind.
    fn save(&mut self) -> SinkResult<PathBuf> {
        let path = self.calculate_filename();
        info!(path = %path.display(), "Starting to write into file");

        let result = match self.data.as_deref() {
            None => Err(SinkError::NoBatch),
            Some(lines) => write_lines(&path, lines).map_err(|source| SinkError::Write {
                path: path.clone(),
                source,
            }),
        };

        if let Err(e) = &result {
            error!(path = %path.display(), error = %e, "Unable to write scraped data into the file");
        }
        info!(path = %path.display(), ok = result.is_ok(), "Writing to file completed");

        result.map(|()| path)
    }
}

fn write_lines(path: &Path, lines: &[String]) -> io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    for line in lines {
        writeln!(out, "{line}")?;
    }
    out.flush()
}
