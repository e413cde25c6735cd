/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 6/8/26
******************************************************************************/

//! Delimited file export.

use std::fs;
use std::path::Path;
use tracing::debug;
use wireform_core::{FormatError, ItemRecord, Result};
use wireform_render::MessageBuilder;

/// Header row written before the data lines.
pub const FILE_HEADER: &str = "Id,Name,Value";

#[cfg(windows)]
const LINE_TERMINATOR: &str = "\r\n";
#[cfg(not(windows))]
const LINE_TERMINATOR: &str = "\n";

/// Writes item records to a delimited text file.
///
/// The file gets the fixed [`FILE_HEADER`] row followed by one rendered
/// line per record, using the platform line terminator, UTF-8 encoded.
/// Intermediate directories are created as needed.
#[derive(Debug, Clone)]
pub struct DelimitedFileWriter<B> {
    builder: B,
}

impl<B: MessageBuilder<ItemRecord>> DelimitedFileWriter<B> {
    /// Creates a writer around a message builder.
    #[must_use]
    pub fn new(builder: B) -> Self {
        Self { builder }
    }

    /// Writes the records to `path`.
    ///
    /// # Errors
    /// Returns `FormatError::BlankPath` for an empty or whitespace path and
    /// `FormatError::Io` for filesystem failures.
    pub fn write(&self, records: &[ItemRecord], path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if path.as_os_str().to_string_lossy().trim().is_empty() {
            return Err(FormatError::BlankPath);
        }

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let mut contents =
            String::with_capacity((records.len() + 1) * (FILE_HEADER.len() + LINE_TERMINATOR.len()));
        contents.push_str(FILE_HEADER);
        contents.push_str(LINE_TERMINATOR);
        for record in records {
            contents.push_str(&self.builder.build_message(record));
            contents.push_str(LINE_TERMINATOR);
        }

        fs::write(path, contents.as_bytes())?;
        debug!(path = %path.display(), records = records.len(), "wrote delimited export");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wireform_render::DelimitedRenderer;

    fn writer() -> DelimitedFileWriter<DelimitedRenderer> {
        DelimitedFileWriter::new(DelimitedRenderer::new(","))
    }

    fn records() -> Vec<ItemRecord> {
        vec![
            ItemRecord::new(1, "TestItem", "123.45".parse().unwrap()),
            ItemRecord::new(2, "Widget", "9.5".parse().unwrap()),
        ]
    }

    #[test]
    fn test_write_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");

        writer().write(&records(), &path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines, vec!["Id,Name,Value", "1,TestItem,123.45", "2,Widget,9.5"]);
    }

    #[test]
    fn test_write_creates_intermediate_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("out.csv");

        writer().write(&records(), &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_write_empty_records_still_writes_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.csv");

        writer().write(&[], &path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().collect::<Vec<_>>(), vec!["Id,Name,Value"]);
    }

    #[test]
    fn test_blank_path_rejected() {
        assert!(matches!(
            writer().write(&records(), ""),
            Err(FormatError::BlankPath)
        ));
        assert!(matches!(
            writer().write(&records(), "   "),
            Err(FormatError::BlankPath)
        ));
    }

    #[test]
    fn test_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");

        writer().write(&records(), &path).unwrap();
        writer().write(&[], &path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 1);
    }
}
