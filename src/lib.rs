//! Threshold secret sharing over a large prime field
//!
//! A secret below the prime `2^127 - 1` is split into `n` shares so that any
//! `k` of them reconstruct it exactly through Lagrange interpolation, while
//! fewer than `k` reveal nothing about it.
//!
//! Shares are not authenticated: a corrupted share silently yields a wrong
//! secret. Arithmetic is not constant-time.
//!
//! # Quick Start
//!
//! ```
//! use num_bigint::BigUint;
//! use prime_shamir::ShamirShare;
//!
//! // Create a scheme with 5 shares and threshold 3
//! let mut scheme = ShamirShare::new(5, 3).unwrap();
//!
//! let secret = BigUint::from(42u32);
//! let shares = scheme.split(&secret).unwrap();
//!
//! // Any 3 shares recover the secret
//! let picked = [shares[0].clone(), shares[2].clone(), shares[4].clone()];
//! assert_eq!(scheme.reconstruct(&picked).unwrap(), secret);
//!
//! // Two are not enough
//! assert!(scheme.reconstruct(&shares[0..2]).is_err());
//! ```

mod config;
mod error;
mod finite_field;
mod polynomial;
mod shamir;

pub use config::{Config, SplitMode};
pub use error::{Result, ShamirError};
pub use finite_field::{MERSENNE_127, PrimeField, mod_inverse, mod_pow};
pub use polynomial::{Polynomial, evaluate};
pub use shamir::{
    Dealer, ShamirShare, ShamirShareBuilder, Share, interpolate_at, reconstruct,
    reconstruct_with_field, split,
};

// Re-export common types for convenience
pub mod prelude {
    pub use super::{
        Config, PrimeField, Result, ShamirError, ShamirShare, Share, SplitMode, reconstruct, split,
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigUint;

    #[test]
    fn test_full_workflow() -> Result<()> {
        let secret = BigUint::from(12_345_678_901_234_567_890u64);

        let mut shamir = ShamirShare::new(5, 3)?;
        let shares = shamir.split(&secret)?;
        assert_eq!(shares.len(), 5);

        let reconstruction_shares = vec![shares[4].clone(), shares[1].clone(), shares[3].clone()];
        let reconstructed = shamir.reconstruct(&reconstruction_shares)?;
        assert_eq!(reconstructed, secret);

        Ok(())
    }

    #[test]
    fn test_with_config() -> Result<()> {
        let config = Config::new()
            .with_modulus(BigUint::from(2_305_843_009_213_693_951u64))? // 2^61 - 1
            .with_mode(SplitMode::Parallel);

        let secret = BigUint::from(1_000_000_007u64);
        let mut shamir = ShamirShare::builder(5, 3).with_config(config).build()?;
        let shares = shamir.split(&secret)?;

        assert!(shares.iter().all(|s| shamir.field().contains(&s.y)));
        assert_eq!(shamir.reconstruct(&shares[2..])?, secret);

        Ok(())
    }

    #[test]
    fn test_error_handling() {
        assert!(matches!(
            ShamirShare::new(2, 3),
            Err(ShamirError::InvalidThreshold { .. })
        ));

        let mut shamir = ShamirShare::new(5, 3).unwrap();
        let shares = shamir.split(&BigUint::from(1u32)).unwrap();

        assert!(matches!(
            shamir.reconstruct(&shares[0..2]),
            Err(ShamirError::InsufficientShares { .. })
        ));
    }
}
