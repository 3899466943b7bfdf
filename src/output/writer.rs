// src/output/writer.rs

//! Manages the output destination (stdout, a new file, or nowhere).

use crate::config::OutputDestination;
use crate::errors::{io_error_with_path, Error, Result};
use log::debug;
use std::fs::{self, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Fails early if the destination file already exists.
///
/// Called before any repository work so an existing file is reported without
/// walking the tree. [`open_output`] repeats the check atomically.
pub fn check_output_available(destination: &OutputDestination) -> Result<()> {
    if let OutputDestination::File(path) = destination {
        if fs::symlink_metadata(path).is_ok() {
            return Err(Error::OutputExists(path.clone()));
        }
    }
    Ok(())
}

/// Creates the writer for the configured destination.
///
/// A file destination is created with `create_new`, so an existing file is
/// never truncated, even if it appeared after [`check_output_available`].
///
/// # Errors
/// Returns [`Error::OutputExists`] if the file already exists, or
/// [`Error::Io`] if it cannot be created.
pub fn open_output(destination: &OutputDestination) -> Result<Box<dyn Write + Send>> {
    let writer: Box<dyn Write + Send> = match destination {
        OutputDestination::Stdout => Box::new(io::stdout()),
        OutputDestination::File(path) => Box::new(BufWriter::new(create_new_file(path)?)),
        OutputDestination::Discard => Box::new(io::sink()),
    };
    Ok(writer)
}

/// Writes the whole document and flushes the writer.
pub fn write_output(mut writer: Box<dyn Write + Send>, document: &str) -> Result<()> {
    writer.write_all(document.as_bytes())?;
    if !document.ends_with('\n') {
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    debug!("Wrote {} bytes of output", document.len());
    Ok(())
}

fn create_new_file(path: &Path) -> Result<fs::File> {
    OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| {
            if e.kind() == io::ErrorKind::AlreadyExists {
                Error::OutputExists(path.to_path_buf())
            } else {
                io_error_with_path(e, path)
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{tempdir, NamedTempFile};

    #[test]
    fn test_existing_file_is_rejected_and_untouched() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let existing = NamedTempFile::new()?;
        fs::write(existing.path(), "keep me")?;
        let destination = OutputDestination::File(existing.path().to_path_buf());

        assert!(matches!(
            check_output_available(&destination),
            Err(Error::OutputExists(_))
        ));
        assert!(matches!(open_output(&destination), Err(Error::OutputExists(_))));
        assert_eq!(fs::read_to_string(existing.path())?, "keep me");
        Ok(())
    }

    #[test]
    fn test_writes_new_file() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let temp = tempdir()?;
        let path = temp.path().join("out.txt");
        let destination = OutputDestination::File(path.clone());

        check_output_available(&destination)?;
        write_output(open_output(&destination)?, "hello")?;
        assert_eq!(fs::read_to_string(&path)?, "hello\n");
        temp.close()?;
        Ok(())
    }

    #[test]
    fn test_missing_parent_directory_is_io_error() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let temp = tempdir()?;
        let destination = OutputDestination::File(temp.path().join("no/such/dir/out.txt"));
        assert!(matches!(open_output(&destination), Err(Error::Io { .. })));
        temp.close()?;
        Ok(())
    }

    #[test]
    fn test_discard_accepts_output() -> Result<()> {
        write_output(open_output(&OutputDestination::Discard)?, "ignored")
    }
}
