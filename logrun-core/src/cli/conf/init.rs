use anyhow::{Context, Result, bail};
use rust_embed::RustEmbed;
use std::fs;
use std::io::Write;
use std::path::Path;

#[derive(RustEmbed)]
#[folder = "config-templates/"]
pub struct ConfigTemplates;

pub fn init(path: &Path) -> Result<()> {
    // Refuse to overwrite an existing file
    if path.exists() {
        bail!("{} already exists", path.display());
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    write_file(path, &template("logrun.toml")?)?;

    // User feedback
    println!("✔ Initialized logrun config in {}", path.display());
    println!();
    println!("Next steps:");
    println!("  logrun config check {}", path.display());
    println!("  logrun analyze --config {} --file access.log", path.display());

    Ok(())
}

/// Fetch an embedded config template as UTF-8 text
pub fn template(path: &str) -> Result<String> {
    let file = ConfigTemplates::get(path)
        .with_context(|| format!("missing embedded config template: {path}"))?;

    let s =
        std::str::from_utf8(file.data.as_ref()).context("config template is not valid UTF-8")?;

    Ok(s.to_owned())
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    let mut f =
        fs::File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    f.write_all(contents.trim_start().as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conf::{LogrunConfig, read_config};
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn template_matches_built_in_defaults() {
        // Arrange
        let text = template("logrun.toml").unwrap();

        // Act
        let parsed: LogrunConfig = toml::from_str(&text).unwrap();

        // Assert
        assert_eq!(parsed, LogrunConfig::default());
    }

    #[test]
    fn init_writes_a_loadable_file() {
        // Arrange
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("logrun.toml");

        // Act
        init(&path).unwrap();

        // Assert
        assert_eq!(read_config(&path).unwrap(), LogrunConfig::default());
    }

    #[test]
    fn init_refuses_to_overwrite() {
        // Arrange
        let dir = tempdir().unwrap();
        let path = dir.path().join("logrun.toml");
        fs::write(&path, "# mine\n").unwrap();

        // Act
        let err = init(&path).unwrap_err();

        // Assert
        assert!(err.to_string().contains("already exists"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "# mine\n");
    }
}
