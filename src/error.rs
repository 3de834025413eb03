use thiserror::Error;

#[derive(Debug, Error)]
pub enum PiError {
    #[error("invalid digit count '{0}', expected a positive integer")]
    InvalidDigits(String),
    #[error("{digits} digits need {bits} bits of precision, at most {max} are supported")]
    PrecisionTooLarge { digits: u64, bits: u64, max: u64 },
    #[error("assembled value is not finite")]
    NonFinite,
    #[error("could not build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type Result<T> = std::result::Result<T, PiError>;
