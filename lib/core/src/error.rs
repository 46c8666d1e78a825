use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Benchmark requires at least one measurement run")]
    NoMeasurementRuns,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
