//! Generated file that only appears at its destination once committed
//!
//! Text is written to a temporary file in the destination directory. On
//! [`GeneratedFile::commit`] the temporary file is renamed over the
//! destination; dropping an uncommitted file deletes it, so a failed run
//! leaves whatever was at the destination before untouched.

use crate::error::{Error, Result};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Banner written at the top of every generated file
pub const GENERATED_BANNER: &str = "/* THIS FILE IS GENERATED. EDITS WILL BE LOST. */";

/// An artifact being written to a temporary location
#[derive(Debug)]
pub struct GeneratedFile {
    destination: PathBuf,
    writer: BufWriter<NamedTempFile>,
}

impl GeneratedFile {
    /// Start a generated file for `destination` and write the banner
    pub fn create<P: AsRef<Path>>(destination: P) -> Result<Self> {
        let destination = destination.as_ref().to_path_buf();
        let dir = match destination.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let temp = NamedTempFile::new_in(dir).map_err(|e| Error::OutputCreate {
            path: destination.clone(),
            source: e,
        })?;

        let mut file = Self {
            destination,
            writer: BufWriter::new(temp),
        };
        writeln!(file.writer, "{}", GENERATED_BANNER)?;
        writeln!(file.writer)?;
        Ok(file)
    }

    /// Flush and move the artifact into place
    pub fn commit(self) -> Result<PathBuf> {
        let Self { destination, writer } = self;
        let temp = writer.into_inner().map_err(|e| Error::Io(e.into_error()))?;
        temp.as_file().sync_all()?;
        temp.persist(&destination).map_err(|e| Error::OutputPersist {
            path: destination.clone(),
            source: e.error,
        })?;
        Ok(destination)
    }
}

impl Write for GeneratedFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writer.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_commit_writes_destination() {
        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("out.gen.cpp");

        let mut file = GeneratedFile::create(&dest).unwrap();
        writeln!(file, "body").unwrap();
        assert!(!dest.exists());

        let committed = file.commit().unwrap();
        assert_eq!(committed, dest);
        assert_eq!(
            fs::read_to_string(&dest).unwrap(),
            format!("{}\n\nbody\n", GENERATED_BANNER)
        );
    }

    #[test]
    fn test_drop_without_commit_leaves_nothing() {
        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("out.gen.cpp");

        {
            let mut file = GeneratedFile::create(&dest).unwrap();
            write!(file, "partial").unwrap();
        }

        assert!(!dest.exists());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_drop_keeps_previous_artifact() {
        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("out.gen.cpp");
        fs::write(&dest, "previous").unwrap();

        drop(GeneratedFile::create(&dest).unwrap());

        assert_eq!(fs::read_to_string(&dest).unwrap(), "previous");
    }

    #[test]
    fn test_create_in_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("no/such/dir/out.gen.cpp");

        assert!(matches!(
            GeneratedFile::create(&dest),
            Err(Error::OutputCreate { .. })
        ));
    }
}
