use std::process::ExitStatus;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("failed to launch editor '{program}': {source}")]
    Launch {
        program: String,
        source: std::io::Error,
    },

    #[error("editor '{program}' exited with {status}")]
    Exited { program: String, status: ExitStatus },
}

impl EditorError {
    pub fn launch(program: impl Into<String>, source: std::io::Error) -> Self {
        Self::Launch {
            program: program.into(),
            source,
        }
    }

    pub fn exited(program: impl Into<String>, status: ExitStatus) -> Self {
        Self::Exited {
            program: program.into(),
            status,
        }
    }
}
