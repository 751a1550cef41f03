use crate::error::{CliError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FilePrimesConfig {
    pub count: Option<usize>,
    pub displayed: Option<usize>,
    pub spiral_size: Option<usize>,
    pub max_count: Option<usize>,
    pub max_spiral_size: Option<usize>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileExhibitsConfig {
    pub radial_size: Option<usize>,
    pub identity_size: Option<usize>,
    pub tree_depth: Option<usize>,
    pub fibonacci_terms: Option<usize>,
    pub sonata_movements: Option<usize>,
    pub quicksort_input: Option<Vec<i64>>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileTourConfig {
    pub guestbook: Option<PathBuf>,
    pub pause_ms: Option<u64>,
}

/// The TOML configuration file. Every section and key is optional.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileConfig {
    pub primes: Option<FilePrimesConfig>,
    pub exhibits: Option<FileExhibitsConfig>,
    pub tour: Option<FileTourConfig>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    pub fn from_toml(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn full_file_is_parsed() {
        let config = FileConfig::from_toml(
            r#"
            [primes]
            count = 200
            displayed = 20
            spiral-size = 9

            [exhibits]
            tree-depth = 3
            quicksort-input = [5, 1, 4]

            [tour]
            guestbook = "book.json"
            pause-ms = 0
            "#,
        )
        .unwrap();

        let primes = config.primes.unwrap();
        assert_eq!(primes.count, Some(200));
        assert_eq!(primes.displayed, Some(20));
        assert_eq!(primes.spiral_size, Some(9));
        assert_eq!(primes.max_count, None);
        let exhibits = config.exhibits.unwrap();
        assert_eq!(exhibits.tree_depth, Some(3));
        assert_eq!(exhibits.quicksort_input, Some(vec![5, 1, 4]));
        let tour = config.tour.unwrap();
        assert_eq!(tour.guestbook, Some(PathBuf::from("book.json")));
        assert_eq!(tour.pause_ms, Some(0));
    }

    #[test]
    fn empty_file_is_valid() {
        let config = FileConfig::from_toml("").unwrap();
        assert!(config.primes.is_none());
        assert!(config.exhibits.is_none());
        assert!(config.tour.is_none());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(FileConfig::from_toml("[primes]\ncolour = 3\n").is_err());
        assert!(FileConfig::from_toml("[ballroom]\n").is_err());
    }

    #[test]
    fn from_file_reports_the_path_on_parse_errors() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[primes]\ncount = \"many\"").unwrap();

        let err = FileConfig::from_file(file.path()).unwrap_err();
        match err {
            CliError::FileParsing { path, .. } => assert_eq!(path, file.path()),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = FileConfig::from_file(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(CliError::Io(_))));
    }
}
