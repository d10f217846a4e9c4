use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use liftplan_domain as domain;
use log::debug;

use crate::snapshot::{Snapshot, validate};

/// Snapshot stored as JSON document on disk. The file is read on every request.
pub struct JsonFile {
    path: PathBuf,
}

impl JsonFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl domain::SnapshotRepository for JsonFile {
    fn read_snapshot(&self) -> Result<domain::Snapshot, domain::ReadError> {
        debug!("reading snapshot from {}", self.path.display());
        let content = fs::read_to_string(&self.path).map_err(|err| match err.kind() {
            ErrorKind::NotFound => domain::StorageError::NotFound(self.path.display().to_string()),
            _ => domain::StorageError::Other(Box::new(err)),
        })?;
        Ok(parse(&content)?)
    }
}

/// Snapshot given as JSON string.
pub struct JsonStr(String);

impl JsonStr {
    pub fn new(json: impl Into<String>) -> Self {
        Self(json.into())
    }
}

impl domain::SnapshotRepository for JsonStr {
    fn read_snapshot(&self) -> Result<domain::Snapshot, domain::ReadError> {
        Ok(parse(&self.0)?)
    }
}

/// Deserializes, converts and validates a snapshot document.
pub fn parse(json: &str) -> Result<domain::Snapshot, domain::StorageError> {
    let snapshot = serde_json::from_str::<Snapshot>(json)
        .map_err(|err| domain::StorageError::Invalid(err.to_string()))?;
    let snapshot = domain::Snapshot::try_from(snapshot)
        .map_err(|err| domain::StorageError::Invalid(err.to_string()))?;
    validate(&snapshot).map_err(|err| domain::StorageError::Invalid(err.to_string()))?;
    Ok(snapshot)
}

pub fn to_string(snapshot: &domain::Snapshot) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&Snapshot::from(snapshot))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use liftplan_domain::SnapshotRepository;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use crate::tests::data::SNAPSHOT;

    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(parse(&to_string(&SNAPSHOT).unwrap()).unwrap(), *SNAPSHOT);
    }

    #[rstest]
    #[case("", "EOF while parsing")]
    #[case("42", "invalid type")]
    #[case(r#"{"rules": [], "template_blueprints": []}"#, "no template blueprints")]
    #[case(
        r#"{"template_blueprints": [{"id": "a", "name": "A", "days_per_week": 2, "confidence": "maybe", "days": []}]}"#,
        "invalid confidence \"maybe\""
    )]
    fn test_parse_invalid(#[case] json: &str, #[case] message: &str) {
        let result = parse(json);
        assert!(
            matches!(&result, Err(domain::StorageError::Invalid(m)) if m.contains(message)),
            "{result:?}"
        );
    }

    #[test]
    fn test_json_str() {
        let repository = JsonStr::new(to_string(&SNAPSHOT).unwrap());
        assert_eq!(repository.read_snapshot().unwrap(), *SNAPSHOT);
    }

    #[test]
    fn test_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(to_string(&SNAPSHOT).unwrap().as_bytes())
            .unwrap();
        let repository = JsonFile::new(file.path());
        assert_eq!(repository.path(), file.path());
        assert_eq!(repository.read_snapshot().unwrap(), *SNAPSHOT);
    }

    #[test]
    fn test_json_file_not_found() {
        let directory = tempfile::tempdir().unwrap();
        let repository = JsonFile::new(directory.path().join("snapshot.json"));
        assert!(matches!(
            repository.read_snapshot(),
            Err(domain::ReadError::Storage(domain::StorageError::NotFound(_)))
        ));
    }

    #[test]
    fn test_json_file_invalid() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{}").unwrap();
        assert!(matches!(
            JsonFile::new(file.path()).read_snapshot(),
            Err(domain::ReadError::Storage(domain::StorageError::Invalid(_)))
        ));
    }
}
