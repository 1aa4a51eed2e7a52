use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("path is required")]
    MissingPath,

    #[error("cannot determine project root: {source}")]
    RootUnavailable { source: std::io::Error },
}

impl InputError {
    pub fn root_unavailable(source: std::io::Error) -> Self {
        Self::RootUnavailable { source }
    }
}
