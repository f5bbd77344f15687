//! End-to-end generation of the controller mappings source

use crate::emitter::{emit_preamble, emit_table, EmitOptions};
use crate::error::{Error, Result};
use crate::merger::Merger;
use crate::output::GeneratedFile;
use crate::parser::parse_str;
use crate::platform::Platform;
use crate::source::read_source;
use crate::table::PlatformTable;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Summary of one generation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationReport {
    /// Databases read, in merge order
    pub sources: Vec<PathBuf>,
    /// Platforms in emission order with their record counts
    pub platforms: Vec<PlatformSummary>,
    /// Total records emitted
    pub records: usize,
    /// Number of records replaced by a later line
    pub overwrites: usize,
}

/// Records emitted for one platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformSummary {
    pub platform: Platform,
    pub records: usize,
}

impl GenerationReport {
    fn new(sources: Vec<PathBuf>, table: &PlatformTable, overwrites: usize) -> Self {
        let platforms = table
            .iter()
            .map(|(platform, records)| PlatformSummary {
                platform,
                records: records.len(),
            })
            .collect();

        Self {
            sources,
            platforms,
            records: table.record_count(),
            overwrites,
        }
    }

    /// Save the report as JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content).map_err(|e| Error::ReportWrite {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

/// Generate the mappings source into any writer
///
/// Writes the include preamble, then overwrite diagnostics as they are found,
/// then the table. Sources are read and merged strictly in the given order.
pub fn generate_to_writer<W, P>(writer: &mut W, inputs: &[P], options: &EmitOptions) -> Result<GenerationReport>
where
    W: Write,
    P: AsRef<Path>,
{
    emit_preamble(writer, options)?;

    let mut merger = Merger::new(&mut *writer);
    let mut sources = Vec::with_capacity(inputs.len());
    for input in inputs {
        let path = input.as_ref();
        let content = read_source(path)?;
        let contributed = merger.merge_source(path, parse_str(&content))?;
        debug!("{}: {} mapping(s)", path.display(), contributed);
        sources.push(path.to_path_buf());
    }

    let overwrites = merger.overwrites();
    let (table, _) = merger.finish();
    emit_table(writer, &table, options)?;

    let report = GenerationReport::new(sources, &table, overwrites);
    info!(
        "merged {} mapping(s) for {} platform(s) from {} database(s), {} overwritten",
        report.records,
        report.platforms.len(),
        report.sources.len(),
        report.overwrites
    );
    Ok(report)
}

/// Generate the mappings source at `output`
///
/// The file is only created once every input was read and the table was
/// fully written.
pub fn generate<O, P>(output: O, inputs: &[P], options: &EmitOptions) -> Result<GenerationReport>
where
    O: AsRef<Path>,
    P: AsRef<Path>,
{
    let mut file = GeneratedFile::create(output)?;
    let report = generate_to_writer(&mut file, inputs, options)?;
    let path = file.commit()?;
    debug!("wrote {}", path.display());
    Ok(report)
}
