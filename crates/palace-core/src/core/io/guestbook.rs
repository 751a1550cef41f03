use crate::core::models::signature::Signature;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::{debug, info};

pub const DEFAULT_GUESTBOOK_FILE: &str = "guestbook.json";

#[derive(Debug, Error)]
pub enum GuestbookError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Malformed guestbook JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Ordered list of signatures, stored on disk as a pretty-printed JSON array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Guestbook {
    signatures: Vec<Signature>,
}

impl Guestbook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a signature and returns its 1-based number.
    pub fn push(&mut self, signature: Signature) -> usize {
        self.signatures.push(signature);
        self.signatures.len()
    }

    pub fn signatures(&self) -> &[Signature] {
        &self.signatures
    }

    pub fn last(&self) -> Option<&Signature> {
        self.signatures.last()
    }

    pub fn len(&self) -> usize {
        self.signatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signatures.is_empty()
    }

    pub fn read_from(reader: impl Read) -> Result<Self, GuestbookError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Writes two-space indented JSON; non-ASCII text is kept as-is.
    pub fn write_to(&self, writer: &mut impl Write) -> Result<(), GuestbookError> {
        serde_json::to_writer_pretty(&mut *writer, self)?;
        writer.write_all(b"\n")?;
        Ok(())
    }

    /// Loads a guestbook, treating a missing file as an empty book.
    pub fn read_from_path(path: impl AsRef<Path>) -> Result<Self, GuestbookError> {
        let path = path.as_ref();
        match File::open(path) {
            Ok(file) => {
                let book = Self::read_from(BufReader::new(file))?;
                debug!(path = %path.display(), entries = book.len(), "Loaded guestbook.");
                Ok(book)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "No guestbook yet, starting a new one.");
                Ok(Self::new())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Stages the book in a temporary file next to `path` and renames it into place; the
    /// previous file is untouched until the new one is fully written.
    pub fn write_to_path(&self, path: impl AsRef<Path>) -> Result<(), GuestbookError> {
        let path = path.as_ref();
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut staged = NamedTempFile::new_in(dir)?;
        {
            let mut writer = BufWriter::new(staged.as_file_mut());
            self.write_to(&mut writer)?;
            writer.flush()?;
        }
        staged.persist(path).map_err(|e| e.error)?;
        info!(path = %path.display(), entries = self.len(), "Guestbook saved.");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use tempfile::tempdir;

    fn signature(id: &str, message: &str) -> Signature {
        Signature {
            visitor_id: id.to_string(),
            timestamp: Utc.with_ymd_and_hms(2025, 3, 14, 15, 9, 26).unwrap(),
            message: message.to_string(),
            favorite_room: "Jardín Fractal".to_string(),
            will_return: true,
            rooms_visited: 7,
        }
    }

    #[test]
    fn push_returns_signature_number() {
        let mut book = Guestbook::new();
        assert_eq!(book.push(signature("a", "")), 1);
        assert_eq!(book.push(signature("b", "")), 2);
        assert_eq!(book.last().unwrap().visitor_id, "b");
    }

    #[test]
    fn write_to_produces_indented_array_with_raw_unicode() {
        let mut book = Guestbook::new();
        book.push(signature("ExampleBot-001", "Este palacio es hermoso. Volveré."));

        let mut buffer = Vec::new();
        book.write_to(&mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.starts_with("[\n  {\n    \"visitor_id\": \"ExampleBot-001\""));
        assert!(text.contains("Volveré."));
        assert!(text.contains("Jardín Fractal"));
        assert!(text.ends_with("]\n"));
    }

    #[test]
    fn empty_book_serializes_as_empty_array() {
        let mut buffer = Vec::new();
        Guestbook::new().write_to(&mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "[]\n");
    }

    #[test]
    fn missing_file_loads_as_empty_book() {
        let dir = tempdir().unwrap();
        let book = Guestbook::read_from_path(dir.path().join("nope.json")).unwrap();
        assert!(book.is_empty());
    }

    #[test]
    fn saved_book_can_be_loaded_and_extended() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(DEFAULT_GUESTBOOK_FILE);

        let mut book = Guestbook::new();
        book.push(signature("first", "hola"));
        book.write_to_path(&path).unwrap();

        let mut reloaded = Guestbook::read_from_path(&path).unwrap();
        assert_eq!(reloaded, book);
        assert_eq!(reloaded.push(signature("second", "adiós")), 2);
    }

    #[test]
    fn malformed_json_is_reported() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            Guestbook::read_from_path(&path),
            Err(GuestbookError::Json(_))
        ));
    }

    fn dir_entries(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(dir)
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn saving_replaces_the_book_without_leaving_staging_files() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(DEFAULT_GUESTBOOK_FILE);

        let mut book = Guestbook::new();
        book.push(signature("first", "hola"));
        book.write_to_path(&path).unwrap();
        book.push(signature("second", "adiós"));
        book.write_to_path(&path).unwrap();

        assert_eq!(Guestbook::read_from_path(&path).unwrap().len(), 2);
        assert_eq!(dir_entries(dir.path()), vec![DEFAULT_GUESTBOOK_FILE.to_string()]);
    }

    #[test]
    fn failed_save_keeps_existing_files_untouched() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(DEFAULT_GUESTBOOK_FILE);
        let mut book = Guestbook::new();
        book.push(signature("first", "hola"));
        book.write_to_path(&path).unwrap();
        let saved = std::fs::read_to_string(&path).unwrap();

        // A non-empty directory cannot be replaced by a file.
        let blocked = dir.path().join("blocked");
        std::fs::create_dir(&blocked).unwrap();
        std::fs::write(blocked.join("keep"), "x").unwrap();
        let result = book.write_to_path(&blocked);

        assert!(matches!(result, Err(GuestbookError::Io(_))));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), saved);
        assert_eq!(
            dir_entries(dir.path()),
            vec!["blocked".to_string(), DEFAULT_GUESTBOOK_FILE.to_string()]
        );
    }
}
