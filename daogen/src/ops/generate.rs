//! Generate operation - repositories and services from entity classes.

use std::path::Path;

use daogen_codegen::Generator;
use daogen_config::DaogenToml;
use daogen_core::GenerateResult;
use daogen_entity::{discover_entities, parse_file};
use eyre::{Context, Result};

use super::{diagnostic, file_name};
use crate::reports::{GenerateReport, GenerationResult, Output, PreviewResult, WrittenResult};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Project root the configured directories are relative to.
    pub root: &'a Path,
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the generate operation.
///
/// Entities are processed in file-name order with one progress line each.
/// The first failure aborts the run; files already written for earlier
/// entities stay on disk.
pub fn generate(
    daogen_toml: &DaogenToml,
    opts: GenerateOptions,
    out: &mut dyn Output,
) -> Result<GenerateReport> {
    let config = daogen_toml.config();
    let entities_dir = config.entities_dir(opts.root);
    let sources = discover_entities(
        &entities_dir,
        &config.project.extension,
        &config.generate.skip_suffixes,
    )
    .map_err(diagnostic)?;

    let generator = Generator::new(config);
    let mut entities = Vec::new();
    let mut previews = Vec::new();
    let mut written = GenerateResult::default();

    for source in &sources {
        let stem = source
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        out.preformatted(&format!("Generating {} ({})", stem, file_name(source)));

        let entity = parse_file(source).map_err(diagnostic)?;
        let plan = generator.plan(&entity).map_err(diagnostic)?;

        if opts.dry_run {
            previews.extend(generator.preview(&plan));
        } else {
            let result = generator
                .generate(&plan, opts.root)
                .wrap_err_with(|| format!("Failed to generate files for {}", entity.name))?;
            written.extend(result);
        }
        entities.push(entity.name.clone());
    }

    let result = if opts.dry_run {
        GenerationResult::Preview(PreviewResult { files: previews })
    } else {
        GenerationResult::Written(WrittenResult {
            root: opts.root.to_path_buf(),
            files: written.written,
        })
    };

    Ok(GenerateReport {
        config_source: daogen_toml.source().clone(),
        entities_dir,
        entities,
        result,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::reports::BufferOutput;

    const ACCOUNT: &str = r#"
package com.example.entities;

public class Account {
    @Id
    private long id;

    private String owner;
}
"#;

    const LEDGER: &str = r#"
package com.example.entities;

public class Ledger {
    private String title;
}
"#;

    const ACCOUNT_PK: &str = "public class AccountPK {\n    private long id;\n}\n";

    fn project(files: &[(&str, &str)]) -> TempDir {
        let temp = TempDir::new().unwrap();
        let entities = temp.path().join("entities");
        fs::create_dir_all(&entities).unwrap();
        for (name, content) in files {
            fs::write(entities.join(name), content).unwrap();
        }
        temp
    }

    fn run(temp: &TempDir, dry_run: bool, out: &mut BufferOutput) -> Result<GenerateReport> {
        let daogen_toml = DaogenToml::resolve(temp.path(), None).unwrap();
        generate(
            &daogen_toml,
            GenerateOptions {
                root: temp.path(),
                dry_run,
            },
            out,
        )
    }

    #[test]
    fn test_generates_three_files_per_entity() {
        let temp = project(&[("Account.java", ACCOUNT), ("AccountPK.java", ACCOUNT_PK)]);
        let mut out = BufferOutput::default();

        let report = run(&temp, false, &mut out).unwrap();

        assert_eq!(report.entities, ["Account"]);
        assert_eq!(out.lines, ["Generating Account (Account.java)"]);
        for path in [
            "repositories/AccountDao.java",
            "services/AccountService.java",
            "services/AccountServiceImpl.java",
        ] {
            assert!(temp.path().join(path).is_file(), "{path} missing");
        }
        assert!(!temp.path().join("repositories/AccountPKDao.java").exists());
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let temp = project(&[("Account.java", ACCOUNT)]);
        let mut out = BufferOutput::default();

        let report = run(&temp, true, &mut out).unwrap();

        match report.result {
            GenerationResult::Preview(preview) => assert_eq!(preview.files.len(), 3),
            GenerationResult::Written(_) => panic!("Expected a preview"),
        }
        assert!(!temp.path().join("repositories").exists());
        assert!(!temp.path().join("services").exists());
    }

    #[test]
    fn test_missing_primary_key_aborts_after_earlier_entities() {
        let temp = project(&[("Ledger.java", LEDGER), ("Account.java", ACCOUNT)]);
        let mut out = BufferOutput::default();

        let err = run(&temp, false, &mut out).unwrap_err();

        assert!(format!("{err}").contains("Ledger"));
        assert_eq!(
            out.lines,
            [
                "Generating Account (Account.java)",
                "Generating Ledger (Ledger.java)"
            ]
        );
        assert!(temp.path().join("repositories/AccountDao.java").is_file());
        assert!(!temp.path().join("repositories/LedgerDao.java").exists());
        assert!(!temp.path().join("services/LedgerService.java").exists());
        assert!(!temp.path().join("services/LedgerServiceImpl.java").exists());
    }

    #[test]
    fn test_generating_twice_is_byte_identical() {
        let temp = project(&[("Account.java", ACCOUNT)]);
        let path = temp.path().join("services/AccountServiceImpl.java");

        run(&temp, false, &mut BufferOutput::default()).unwrap();
        let first = fs::read(&path).unwrap();
        run(&temp, false, &mut BufferOutput::default()).unwrap();

        assert_eq!(first, fs::read(&path).unwrap());
    }

    #[test]
    fn test_missing_entities_dir() {
        let temp = TempDir::new().unwrap();
        let err = run(&temp, false, &mut BufferOutput::default()).unwrap_err();
        assert!(format!("{err}").contains("entities"));
    }
}
