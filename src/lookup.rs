use std::path::PathBuf;

use crate::cli::LookupConfig;
use crate::editor::Opener;
use crate::error::Result;
use crate::output::{LookupOutput, OutputFormatter};
use crate::project::{FileSystem, OsFileSystem, ProjectConvention};
use crate::resolver::AlternateResolver;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// No candidate exists; nothing was opened or printed.
    NotFound,
    Opened(PathBuf),
    Printed(String),
}

/// Resolves `config.path` on disk and opens it with the configured editor.
pub fn run(config: &LookupConfig) -> Result<Outcome> {
    run_with(config, &OsFileSystem, &config.editor)
}

pub fn run_with<F: FileSystem>(
    config: &LookupConfig,
    fs: F,
    opener: &dyn Opener,
) -> Result<Outcome> {
    let project = ProjectConvention::with_fs(&config.root, fs);
    let resolver = AlternateResolver::new(&project);
    let kind = resolver.classify(&config.path);

    tracing::info!(
        "looking up {} ({}) in {}",
        config.path,
        kind.as_str(),
        project.root().display()
    );

    let Some(alternate) = resolver.resolve(&config.path) else {
        tracing::info!("no alternate file for {}", config.path);
        return Ok(Outcome::NotFound);
    };

    match config.print {
        Some(format) => {
            let output = LookupOutput::new(&config.path, kind, &alternate);
            Ok(Outcome::Printed(OutputFormatter::format(&output, format)?))
        }
        None => {
            opener.open(&alternate)?;
            Ok(Outcome::Opened(alternate))
        }
    }
}
