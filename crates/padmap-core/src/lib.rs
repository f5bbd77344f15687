//! padmap-core: Core library for generating the default controller mappings table
//!
//! This library provides functionality to:
//! - Parse controller mapping databases into platform-scoped records
//! - Merge several databases with last-writer-wins semantics, reporting overwrites
//! - Emit the merged records as a platform-guarded, null-terminated C++ array
//! - Commit the generated file atomically

pub mod emitter;
pub mod error;
pub mod generate;
pub mod merger;
pub mod output;
pub mod parser;
pub mod platform;
pub mod source;
pub mod table;

pub use emitter::{emit_preamble, emit_table, EmitOptions};
pub use error::{Error, Result};
pub use generate::{generate, generate_to_writer, GenerationReport, PlatformSummary};
pub use merger::{Merger, Overwrite};
pub use output::GeneratedFile;
pub use parser::{parse_lines, parse_str, DatabaseLines, MappingLines, ParseState, ParsedLine};
pub use platform::Platform;
pub use source::read_source;
pub use table::{Insert, MappingRecord, PlatformTable};
