//! Batch conversion of every Markdown file in a directory.

use crate::converter::MarkdownToDocx;
use crate::error::Error;
use crate::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Outcome of a directory conversion.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Sources converted successfully, with their output paths.
    pub converted: Vec<(PathBuf, PathBuf)>,
    /// Sources that failed, with the reason.
    pub failed: Vec<(PathBuf, Error)>,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.converted.len() + self.failed.len()
    }

    pub fn success_count(&self) -> usize {
        self.converted.len()
    }

    pub fn failure_count(&self) -> usize {
        self.failed.len()
    }

    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Lists the `.md` files of `dir` (extension compared case-insensitively), sorted.
pub fn list_markdown_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file()
                && path
                    .extension()
                    .and_then(|e| e.to_str())
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("md"))
        })
        .collect::<Vec<_>>();
    files.sort();
    Ok(files)
}

/// Output path for `source` inside `output_dir`.
pub fn output_path_for(source: &Path, output_dir: &Path) -> PathBuf {
    let mut name = source
        .file_stem()
        .unwrap_or(source.as_os_str())
        .to_os_string();
    name.push(".docx");
    output_dir.join(name)
}

/// Converts every Markdown file in `input_dir` into `output_dir`.
///
/// `output_dir` is created if needed. A failing document is recorded in the
/// report and the batch moves on; only enumerating the input or creating the
/// output directory can fail the whole call.
pub fn convert_directory(
    converter: &MarkdownToDocx,
    input_dir: &Path,
    output_dir: &Path,
) -> Result<BatchReport> {
    if !input_dir.is_dir() {
        return Err(Error::InvalidInput(format!(
            "{} is not a directory",
            input_dir.display()
        )));
    }

    let files = list_markdown_files(input_dir)?;
    fs::create_dir_all(output_dir)?;
    log::info!(
        "found {} markdown files in {}",
        files.len(),
        input_dir.display()
    );

    let mut report = BatchReport::default();
    for source in files {
        let output = output_path_for(&source, output_dir);
        match converter.convert(&source, &output) {
            Ok(()) => {
                log::info!("converted {} -> {}", source.display(), output.display());
                report.converted.push((source, output));
            }
            Err(e) => {
                log::warn!("failed to convert {}: {}", source.display(), e);
                report.failed.push((source, e));
            }
        }
    }

    Ok(report)
}
