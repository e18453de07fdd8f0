use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum PortfolioError {
    #[error("unrecognised color `{0}`")]
    InvalidColor(String),

    #[error("invalid particle config: {0}")]
    InvalidParticleConfig(String),

    #[error("particle config is not valid JSON: {0}")]
    ParticleConfigJson(String),
}

pub type Result<T> = std::result::Result<T, PortfolioError>;
