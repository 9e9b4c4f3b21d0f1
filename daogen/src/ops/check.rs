//! Check operation - entity parsing and classification without writing.

use std::path::Path;

use daogen_codegen::Generator;
use daogen_config::DaogenToml;
use daogen_entity::{discover_entities, parse_file};
use eyre::Result;

use super::{diagnostic, file_name};
use crate::reports::{CheckReport, EntityCheck, ExcludedField};

/// Execute the check operation.
///
/// Every entity is parsed and planned exactly as `generate` would; the
/// first failure is returned as an error.
pub fn check(daogen_toml: &DaogenToml, root: &Path) -> Result<CheckReport> {
    let config = daogen_toml.config();
    let entities_dir = config.entities_dir(root);
    let sources = discover_entities(
        &entities_dir,
        &config.project.extension,
        &config.generate.skip_suffixes,
    )
    .map_err(diagnostic)?;

    let generator = Generator::new(config);
    let mut entities = Vec::new();

    for source in &sources {
        let entity = parse_file(source).map_err(diagnostic)?;
        let plan = generator.plan(&entity).map_err(diagnostic)?;

        entities.push(EntityCheck {
            name: entity.name.clone(),
            file: file_name(source),
            finders: plan.finders().iter().map(|m| m.signature()).collect(),
            excluded: plan
                .excluded()
                .iter()
                .map(|(field, reason)| ExcludedField {
                    name: field.name.clone(),
                    reason: reason.to_string(),
                })
                .collect(),
        });
    }

    Ok(CheckReport {
        config_source: daogen_toml.source().clone(),
        entities_dir,
        entities,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_check_lists_finders_and_exclusions() {
        let temp = TempDir::new().unwrap();
        let entities = temp.path().join("entities");
        fs::create_dir_all(&entities).unwrap();
        fs::write(
            entities.join("User.java"),
            r#"
public class User {
    @Id
    private int id;
    private String email;
    private Date[] createdAt;
    @Transient
    private String displayName;
}
"#,
        )
        .unwrap();
        fs::write(temp.path().join("daogen.toml"), "[generate]\nexclude_fields = [\"email\"]\n")
            .unwrap();

        let daogen_toml = DaogenToml::resolve(temp.path(), None).unwrap();
        let report = check(&daogen_toml, temp.path()).unwrap();

        assert_eq!(report.entities.len(), 1);
        let user = &report.entities[0];
        assert_eq!(user.file, "User.java");
        assert_eq!(user.finders, ["Optional<User> findOne(Integer id)"]);
        let excluded: Vec<_> = user
            .excluded
            .iter()
            .map(|f| (f.name.as_str(), f.reason.as_str()))
            .collect();
        assert_eq!(
            excluded,
            [
                ("email", "listed in exclude_fields"),
                ("createdAt", "array-typed"),
                ("displayName", "marked @Transient"),
            ]
        );
        // Nothing is written
        assert!(!temp.path().join("repositories").exists());
    }

    #[test]
    fn test_check_fails_on_parse_error() {
        let temp = TempDir::new().unwrap();
        let entities = temp.path().join("entities");
        fs::create_dir_all(&entities).unwrap();
        fs::write(entities.join("Broken.java"), "public class Broken {\n    int x\n}\n").unwrap();

        let daogen_toml = DaogenToml::resolve(temp.path(), None).unwrap();
        let err = check(&daogen_toml, temp.path()).unwrap_err();
        assert!(format!("{err}").contains("Broken.java"));
    }
}
