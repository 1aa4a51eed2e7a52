use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::resolver::FileKind;

#[derive(Debug, Serialize)]
pub struct LookupOutput {
    pub path: String,
    pub kind: FileKind,
    pub alternate: PathBuf,
}

impl LookupOutput {
    pub fn new(path: &str, kind: FileKind, alternate: &Path) -> Self {
        Self {
            path: path.to_string(),
            kind,
            alternate: alternate.to_path_buf(),
        }
    }
}

pub struct OutputFormatter;

impl OutputFormatter {
    pub fn format(output: &LookupOutput, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(output.alternate.display().to_string()),
            OutputFormat::Json => Ok(serde_json::to_string(output)?),
        }
    }
}
