//! Merge engine for combining mapping databases with overwrite diagnostics

use crate::error::Result;
use crate::parser::ParsedLine;
use crate::platform::Platform;
use crate::table::{Insert, PlatformTable};
use log::warn;
use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};

/// A record replaced by a later line for the same platform and key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overwrite {
    /// Database that provided the replacing line
    pub source: PathBuf,
    /// Platform the key was filed under
    pub platform: Platform,
    /// The replaced record's line
    pub previous: String,
}

impl fmt::Display for Overwrite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "// WARNING: DATABASE {} OVERWROTE PRIOR MAPPING: {} {}",
            self.source.display(),
            self.platform,
            self.previous
        )
    }
}

/// Folds parsed databases into one [`PlatformTable`]
///
/// Overwrites are written to `diagnostics` as they are detected, so they land
/// in the generated file ahead of the table itself.
pub struct Merger<W> {
    table: PlatformTable,
    diagnostics: W,
    overwrites: usize,
}

impl<W: Write> Merger<W> {
    /// Create a merger writing overwrite comments to `diagnostics`
    pub fn new(diagnostics: W) -> Self {
        Self {
            table: PlatformTable::new(),
            diagnostics,
            overwrites: 0,
        }
    }

    /// Merge the parsed lines of one database, in file order
    ///
    /// Returns the number of records this source contributed.
    pub fn merge_source<I>(&mut self, source: &Path, lines: I) -> Result<usize>
    where
        I: IntoIterator<Item = ParsedLine>,
    {
        let mut contributed = 0;
        for line in lines {
            match line {
                ParsedLine::Header(platform) => {
                    self.table.ensure_platform(platform);
                }
                ParsedLine::Mapping { platform, record } => {
                    contributed += 1;
                    if let Insert::Replaced(previous) = self.table.insert(platform, record) {
                        self.report(Overwrite {
                            source: source.to_path_buf(),
                            platform,
                            previous: previous.line,
                        })?;
                    }
                }
            }
        }
        Ok(contributed)
    }

    fn report(&mut self, overwrite: Overwrite) -> Result<()> {
        warn!(
            "{} overwrote {} mapping {}",
            overwrite.source.display(),
            overwrite.platform,
            overwrite.previous
        );
        writeln!(self.diagnostics, "{}", overwrite)?;
        self.overwrites += 1;
        Ok(())
    }

    /// The table merged so far
    pub fn table(&self) -> &PlatformTable {
        &self.table
    }

    /// Number of overwrites reported so far
    pub fn overwrites(&self) -> usize {
        self.overwrites
    }

    /// Finish merging, returning the table and the diagnostic sink
    pub fn finish(self) -> (PlatformTable, W) {
        (self.table, self.diagnostics)
    }
}
