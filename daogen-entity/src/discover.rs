use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// List the entity sources in `dir`, sorted by file name.
///
/// Only regular files with the given extension are returned; files whose
/// stem ends with one of `skip_suffixes` (composite key classes, generated
/// metamodel classes) are left out.
pub fn discover_entities(
    dir: &Path,
    extension: &str,
    skip_suffixes: &[String],
) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir).map_err(|e| Error::io(dir, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| Error::io(dir, e))?.path();
        if !path.is_file() {
            continue;
        }
        if path.extension().and_then(|ext| ext.to_str()) != Some(extension) {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) else {
            continue;
        };
        if skip_suffixes.iter().any(|suffix| stem.ends_with(suffix.as_str())) {
            continue;
        }
        files.push(path);
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn suffixes() -> Vec<String> {
        vec!["PK".to_string(), "_".to_string()]
    }

    #[test]
    fn test_sorted_and_filtered() {
        let temp = TempDir::new().unwrap();
        for name in [
            "User.java",
            "Account.java",
            "UserPK.java",
            "User_.java",
            "notes.txt",
            "Order.java",
        ] {
            fs::write(temp.path().join(name), "").unwrap();
        }
        fs::create_dir(temp.path().join("Nested.java")).unwrap();

        let files = discover_entities(temp.path(), "java", &suffixes()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();

        assert_eq!(names, ["Account.java", "Order.java", "User.java"]);
    }

    #[test]
    fn test_no_skip_suffixes() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("UserPK.java"), "").unwrap();

        let files = discover_entities(temp.path(), "java", &[]).unwrap();
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn test_missing_directory() {
        let temp = TempDir::new().unwrap();
        let err = discover_entities(&temp.path().join("entities"), "java", &suffixes())
            .unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }
}
