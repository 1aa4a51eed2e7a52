use std::path::Path;
use std::process::Command;

use crate::error::EditorError;

pub const DEFAULT_EDITOR: &str = "zed";

/// Hands a resolved path to whatever displays it.
pub trait Opener {
    fn open(&self, path: &Path) -> Result<(), EditorError>;
}

/// Runs `program <path>` and waits for it to exit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorCommand {
    program: String,
}

impl EditorCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for EditorCommand {
    fn default() -> Self {
        Self::new(DEFAULT_EDITOR)
    }
}

impl Opener for EditorCommand {
    fn open(&self, path: &Path) -> Result<(), EditorError> {
        tracing::info!("opening {} with {}", path.display(), self.program);
        let status = Command::new(&self.program)
            .arg(path)
            .status()
            .map_err(|e| EditorError::launch(&self.program, e))?;

        if status.success() {
            Ok(())
        } else {
            Err(EditorError::exited(&self.program, status))
        }
    }
}
