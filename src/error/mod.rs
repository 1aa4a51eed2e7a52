mod editor;
mod input;

pub use editor::EditorError;
pub use input::InputError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Editor(#[from] EditorError),

    #[error("failed to write output: {0}")]
    Output(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
