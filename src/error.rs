use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("invalid scene: {0}")]
    InvalidScene(String),

    #[error("invalid render settings: {0}")]
    InvalidSettings(String),

    #[error("unknown scene identifier: {0}")]
    UnknownPreset(String),

    #[error("malformed scene file: {0}")]
    SceneFile(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("image encoding failed: {0}")]
    Image(#[from] image::ImageError),

    #[error("worker pool creation failed: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
