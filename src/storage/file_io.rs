//! JSON file helpers
//!
//! Seed files are read with [`read_json`] and written with
//! [`write_json_atomic`], which goes through a temp file so an interrupted
//! write never leaves a truncated seed file behind.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::FinanceError;

/// Read a JSON seed file; a missing file yields `T::default()`
pub fn read_json<T, P>(path: P) -> Result<T, FinanceError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if !path.exists() {
        tracing::debug!(path = %path.display(), "seed file missing, using empty collection");
        return Ok(T::default());
    }

    let file = File::open(path)
        .map_err(|e| FinanceError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    serde_json::from_reader(BufReader::new(file))
        .map_err(|e| FinanceError::Json(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Write pretty-printed JSON, creating parent directories as needed
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), FinanceError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let storage_err =
        |what: &str, e: &dyn std::fmt::Display| FinanceError::Storage(format!("{}: {}", what, e));

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| storage_err(&format!("Failed to create {}", parent.display()), &e))?;
    }

    // Same directory as the target, otherwise rename is not atomic
    let temp_path = path.with_extension("json.tmp");

    let file = File::create(&temp_path).map_err(|e| storage_err("Failed to create temp file", &e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| storage_err("Failed to serialize data", &e))?;
    writer.flush().map_err(|e| storage_err("Failed to flush data", &e))?;
    writer
        .get_ref()
        .sync_all()
        .map_err(|e| storage_err("Failed to sync data", &e))?;

    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(storage_err("Failed to rename temp file", &e));
    }

    tracing::debug!(path = %path.display(), "wrote json file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
    struct Seed {
        name: String,
        value: i32,
    }

    fn sample() -> Seed {
        Seed {
            name: "Food".to_string(),
            value: 42,
        }
    }

    #[test]
    fn test_read_nonexistent_returns_default() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nonexistent.json");

        let data: Seed = read_json(&path).unwrap();
        assert_eq!(data, Seed::default());
    }

    #[test]
    fn test_write_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.json");

        let data = sample();

        write_json_atomic(&path, &data).unwrap();
        assert!(path.exists());

        let loaded: Seed = read_json(&path).unwrap();
        assert_eq!(data, loaded);
    }

    #[test]
    fn test_atomic_write_no_temp_file_left() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.json");
        let temp_path = temp_dir.path().join("test.json.tmp");

        let data = sample();

        write_json_atomic(&path, &data).unwrap();

        assert!(path.exists());
        assert!(!temp_path.exists());
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("test.json");

        let data = sample();

        write_json_atomic(&path, &data).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_malformed_json_is_a_json_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.json");
        fs::write(&path, "not json at all").unwrap();

        let err = read_json::<Seed, _>(&path).unwrap_err();
        assert!(matches!(err, FinanceError::Json(_)));
    }
}
