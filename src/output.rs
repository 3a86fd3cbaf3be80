use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::extract::{FileRecord, Language};
use crate::theme::Theme;

/// Print the extracted batch to the terminal, one file after another.
/// Diagnostic records (the error surrogate) render with the warning style
/// so a failed run is still obvious at a glance.
pub fn render_batch(files: &[FileRecord], theme: &Theme) {
    for file in files {
        let header = if file.language == Language::Text {
            theme.warning.apply(&file.filename)
        } else {
            theme.filename.apply(&file.filename)
        };
        println!(
            "{} {}",
            header,
            theme.language.apply(&format!("[{}]", file.language.as_str()))
        );
        println!("{}", "-".repeat(60));
        println!("{}\n", file.content);
    }

    let label = if files.len() == 1 { "file" } else { "files" };
    println!(
        "{}",
        theme.summary.apply(&format!("{} {} extracted", files.len(), label))
    );
}

/// Serialize the batch for machine consumption.
pub fn render_json(files: &[FileRecord]) -> Result<String> {
    serde_json::to_string_pretty(files).context("Failed to serialize generated files")
}

/// Write each record into `dir`. Filenames never carry path separators,
/// so every file lands directly in the target directory; duplicates
/// overwrite in batch order.
pub fn write_batch(files: &[FileRecord], dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {:?}", dir))?;

    for file in files {
        let path = dir.join(&file.filename);
        fs::write(&path, &file.content)
            .with_context(|| format!("Failed to write {:?}", path))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::Language;
    use tempfile::tempdir;

    fn sample_batch() -> Vec<FileRecord> {
        vec![
            FileRecord {
                filename: "Post.php".to_string(),
                content: "<?php\n\nclass Post extends Model {}".to_string(),
                language: Language::Php,
            },
            FileRecord {
                filename: "index.blade.php".to_string(),
                content: "@extends('layouts.app')".to_string(),
                language: Language::Html,
            },
        ]
    }

    #[test]
    fn test_write_batch_creates_files() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("generated");

        write_batch(&sample_batch(), &target).unwrap();

        let model = fs::read_to_string(target.join("Post.php")).unwrap();
        assert!(model.starts_with("<?php"));
        assert!(target.join("index.blade.php").exists());
    }

    #[test]
    fn test_render_json_shape() {
        let json = render_json(&sample_batch()).unwrap();
        let parsed: Vec<FileRecord> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].filename, "Post.php");
        assert_eq!(parsed[1].language, Language::Html);
    }
}
