use thiserror::Error;

/// Error type for threshold secret sharing operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShamirError {
    /// Threshold outside of `1..=total_shares`
    #[error("Threshold {threshold} must be between 1 and total shares {total_shares}")]
    InvalidThreshold { threshold: u32, total_shares: u32 },

    /// Share count that cannot be given distinct non-zero x-coordinates in the field
    #[error("Invalid share count {0}")]
    InvalidShareCount(u32),

    /// Insufficient shares for reconstruction
    #[error("Need at least {needed} shares, got {got}")]
    InsufficientShares { needed: u32, got: u32 },

    /// The value has no multiplicative inverse for the modulus
    #[error("Modular inverse does not exist")]
    NoInverse,

    /// Two shares carry the same x-coordinate
    #[error("Duplicate share x-coordinate {0}")]
    DuplicateShare(u32),

    /// Share x-coordinate is zero in the field
    #[error("Invalid share index {0}")]
    InvalidShareIndex(u32),

    /// Share value is not a field element
    #[error("Value of share {0} is not reduced modulo the prime")]
    ShareOutOfRange(u32),

    /// Secret is not a field element
    #[error("Secret must be smaller than the field modulus")]
    SecretOutOfRange,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Randomness source unavailable: {0}")]
    RandomnessUnavailable(String),
}

pub type Result<T> = std::result::Result<T, ShamirError>;
