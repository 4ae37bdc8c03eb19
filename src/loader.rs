//! Schema Loading
//!
//! Reads JSON documents from a file or a directory tree. No `$ref`
//! resolution happens here.

use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use crate::error::Result;

/// A parsed schema document
#[derive(Debug, Clone)]
pub struct SchemaDocument {
    /// Path the document was read from
    pub locator: String,
    /// File name without `.schema.json` / `.json`
    pub name: String,
    pub content: serde_json::Value,
}

/// Load a single JSON document
pub fn load_file(path: &Path) -> Result<SchemaDocument> {
    let content = fs::read_to_string(path)?;
    let json = serde_json::from_str(&content)?;

    let file_name = path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("schema");
    let name = file_name
        .trim_end_matches(".json")
        .trim_end_matches(".schema")
        .to_string();

    Ok(SchemaDocument {
        locator: path.display().to_string(),
        name,
        content: json,
    })
}

/// Load a file, or every `.json` file under a directory in path order
pub fn load_path(path: &Path) -> Result<Vec<SchemaDocument>> {
    if path.is_file() {
        return Ok(vec![load_file(path)?]);
    }

    let mut documents = Vec::new();
    for entry in WalkDir::new(path).sort_by_file_name() {
        let entry = entry.map_err(std::io::Error::from)?;
        let entry_path = entry.path();
        if !entry_path.is_file() {
            continue;
        }
        if entry_path.extension().map(|e| e != "json").unwrap_or(true) {
            continue;
        }
        documents.push(load_file(entry_path)?);
    }
    Ok(documents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_directory_sorted() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("b.schema.json"), r#"{"type": "object"}"#).unwrap();
        fs::write(dir.path().join("a.json"), r#"{"type": "object"}"#).unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let docs = load_path(dir.path()).unwrap();
        let names: Vec<&str> = docs.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_load_invalid_json_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(load_file(&path).is_err());
    }
}
