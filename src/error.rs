pub type CuelightResult<T> = Result<T, CuelightError>;

#[derive(thiserror::Error, Debug)]
pub enum CuelightError {
    #[error("spec error: {0}")]
    Spec(String),

    #[error("resolve error: {0}")]
    Resolve(String),

    #[error("timeline error: {0}")]
    Timeline(String),

    #[error("json error: {0}")]
    Json(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CuelightError {
    pub fn spec(msg: impl Into<String>) -> Self {
        Self::Spec(msg.into())
    }

    pub fn resolve(msg: impl Into<String>) -> Self {
        Self::Resolve(msg.into())
    }

    pub fn timeline(msg: impl Into<String>) -> Self {
        Self::Timeline(msg.into())
    }

    pub fn json(msg: impl Into<String>) -> Self {
        Self::Json(msg.into())
    }
}
