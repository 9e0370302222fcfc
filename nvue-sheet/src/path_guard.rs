use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

/// Refuse to write the workbook over the configuration it was built from.
pub fn ensure_output_not_same(output: &Path, input: &Path) -> Result<()> {
    let out_norm = normalize_for_compare(output)
        .with_context(|| format!("failed to normalize output path {}", output.display()))?;
    let in_norm = normalize_for_compare(input)
        .with_context(|| format!("failed to normalize input path {}", input.display()))?;

    if out_norm == in_norm {
        bail!(
            "refusing to overwrite source file: output {} matches input {}",
            output.display(),
            input.display()
        );
    }
    Ok(())
}

fn normalize_for_compare(path: &Path) -> Result<PathBuf> {
    if path.exists() {
        return path
            .canonicalize()
            .with_context(|| format!("canonicalize {}", path.display()));
    }

    // Not on disk yet, so only anchor relative paths at the cwd.
    let base = if path.is_absolute() {
        PathBuf::new()
    } else {
        std::env::current_dir().context("current_dir")?
    };

    Ok(base.join(path))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::ensure_output_not_same;

    #[test]
    fn rejects_output_equal_to_input() {
        let dir = tempfile::tempdir().expect("tempdir");
        let input = dir.path().join("leaf01.yaml");
        fs::write(&input, "- set: {}\n").expect("write input");

        assert!(ensure_output_not_same(&input, &input).is_err());
    }

    #[test]
    fn accepts_fresh_output_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let input = dir.path().join("leaf01.yaml");
        fs::write(&input, "- set: {}\n").expect("write input");

        assert!(ensure_output_not_same(&dir.path().join("leaf01.xlsx"), &input).is_ok());
    }
}
