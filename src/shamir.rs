use crate::config::{Config, SplitMode};
use crate::error::{Result, ShamirError};
use crate::finite_field::PrimeField;
use crate::polynomial::Polynomial;
use num_bigint::BigUint;
use num_traits::{One, Zero};
use rand::rngs::OsRng;
use rand_chacha::ChaCha20Rng;
use rand_core::SeedableRng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::iter::FusedIterator;

/// A share in Shamir's Secret Sharing scheme
///
/// A share is a point `(x, y)` on the sharing polynomial. `x` is never zero,
/// since `y` at zero is the secret itself. Fewer than `threshold` shares are
/// independent of the secret.
///
/// # Example
/// ```
/// use num_bigint::BigUint;
/// use prime_shamir::ShamirShare;
///
/// let mut shamir = ShamirShare::new(5, 3).unwrap();
/// let shares = shamir.split(&BigUint::from(42u32)).unwrap();
/// let share = &shares[0];
///
/// assert_eq!(share.x, 1);
/// assert!(shamir.field().contains(&share.y));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Share {
    /// x-coordinate of the point, `1..=total_shares` for freshly split shares
    pub x: u32,
    /// Polynomial evaluated at `x`, reduced modulo the field prime
    pub y: BigUint,
}

impl Share {
    pub fn new(x: u32, y: BigUint) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Share {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Share {}: {}", self.x, self.y)
    }
}

/// Threshold secret sharing over a prime field
///
/// Secrets are field elements (integers below the prime, 2^127 - 1 by
/// default). Each split draws a fresh polynomial of degree `threshold - 1`
/// whose constant term is the secret, using a ChaCha20 CSPRNG seeded from the
/// OS.
///
/// # Example
/// ```
/// use num_bigint::BigUint;
/// use prime_shamir::ShamirShare;
///
/// // Create a scheme with 5 total shares and threshold of 3
/// let mut scheme = ShamirShare::builder(5, 3).build().unwrap();
///
/// let secret = BigUint::from(12345678901234567890u64);
/// let shares = scheme.split(&secret).unwrap();
///
/// // Reconstruct with 3 shares
/// let reconstructed = scheme.reconstruct(&shares[2..5]).unwrap();
/// assert_eq!(reconstructed, secret);
/// ```
pub struct ShamirShare {
    /// Total number of shares to generate
    total_shares: u32,
    /// Minimum number of shares needed for reconstruction
    threshold: u32,
    config: Config,
    /// Source of the random polynomial coefficients
    rng: ChaCha20Rng,
}

/// Builder for creating ShamirShare instances with custom configuration
///
/// # Example
/// ```
/// use num_bigint::BigUint;
/// use prime_shamir::{Config, ShamirShare, SplitMode};
///
/// let config = Config::new()
///     .with_modulus(BigUint::from(2_147_483_647u32))
///     .unwrap()
///     .with_mode(SplitMode::Parallel);
///
/// let shamir = ShamirShare::builder(5, 3)
///     .with_config(config)
///     .build()
///     .unwrap();
/// ```
#[derive(Debug)]
pub struct ShamirShareBuilder {
    total_shares: u32,
    threshold: u32,
    config: Config,
    seed: Option<u64>,
}

impl ShamirShareBuilder {
    /// Creates a new builder with the specified parameters and default configuration
    ///
    /// # Arguments
    /// * `total_shares` - Total number of shares to create
    /// * `threshold` - Minimum shares required for reconstruction (1-total_shares)
    pub fn new(total_shares: u32, threshold: u32) -> Self {
        Self {
            total_shares,
            threshold,
            config: Config::default(),
            seed: None,
        }
    }

    /// Sets a custom configuration for the ShamirShare instance
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Seeds the coefficient generator deterministically
    ///
    /// Shares produced this way are reproducible and therefore only suitable
    /// for tests and benchmarks.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builds the ShamirShare instance with validation
    ///
    /// # Errors
    /// Returns `ShamirError` if:
    /// - `threshold` is 0 or greater than `total_shares`
    /// - `total_shares` does not fit below the field modulus
    /// - Configuration validation fails
    /// - The OS randomness source cannot seed the generator
    pub fn build(self) -> Result<ShamirShare> {
        if self.threshold == 0 || self.threshold > self.total_shares {
            return Err(ShamirError::InvalidThreshold {
                threshold: self.threshold,
                total_shares: self.total_shares,
            });
        }

        self.config.validate()?;

        // x-coordinates 1..=n must stay distinct and non-zero mod p
        if BigUint::from(self.total_shares) >= *self.config.field.modulus() {
            return Err(ShamirError::InvalidShareCount(self.total_shares));
        }

        let rng = match self.seed {
            Some(seed) => ChaCha20Rng::seed_from_u64(seed),
            None => ChaCha20Rng::try_from_rng(&mut OsRng)
                .map_err(|e| ShamirError::RandomnessUnavailable(e.to_string()))?,
        };

        Ok(ShamirShare {
            total_shares: self.total_shares,
            threshold: self.threshold,
            config: self.config,
            rng,
        })
    }
}

impl ShamirShare {
    /// Creates a scheme with default configuration
    ///
    /// Shorthand for `ShamirShare::builder(total_shares, threshold).build()`.
    pub fn new(total_shares: u32, threshold: u32) -> Result<Self> {
        Self::builder(total_shares, threshold).build()
    }

    pub fn builder(total_shares: u32, threshold: u32) -> ShamirShareBuilder {
        ShamirShareBuilder::new(total_shares, threshold)
    }

    pub fn total_shares(&self) -> u32 {
        self.total_shares
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    pub fn field(&self) -> &PrimeField {
        &self.config.field
    }

    /// Splits a secret into `total_shares` shares
    ///
    /// The polynomial `secret + r1*x + ... + r_{k-1}*x^(k-1)` is evaluated at
    /// `x = 1..=total_shares` and dropped afterwards; every call draws new
    /// coefficients.
    ///
    /// # Errors
    /// Returns `ShamirError::SecretOutOfRange` if the secret is not smaller
    /// than the field modulus.
    ///
    /// # Example
    /// ```
    /// use num_bigint::BigUint;
    /// use prime_shamir::ShamirShare;
    ///
    /// let mut scheme = ShamirShare::new(5, 3).unwrap();
    /// let shares = scheme.split(&BigUint::from(7u32)).unwrap();
    /// assert_eq!(shares.len(), 5);
    /// ```
    pub fn split(&mut self, secret: &BigUint) -> Result<Vec<Share>> {
        let polynomial = self.sharing_polynomial(secret.clone())?;
        let field = &self.config.field;

        let shares: Vec<Share> = match self.config.mode {
            SplitMode::Sequential => (1..=self.total_shares)
                .map(|x| share_at(&polynomial, x, field))
                .collect(),
            SplitMode::Parallel => (1..=self.total_shares)
                .into_par_iter()
                .map(|x| share_at(&polynomial, x, field))
                .collect(),
        };

        tracing::debug!(
            total_shares = self.total_shares,
            threshold = self.threshold,
            mode = ?self.config.mode,
            "split secret"
        );
        Ok(shares)
    }

    /// Returns a lazy iterator over the shares of a fresh sharing polynomial
    ///
    /// Shares are computed on demand, so callers that only need a few of them
    /// skip the remaining evaluations.
    ///
    /// # Example
    /// ```
    /// use num_bigint::BigUint;
    /// use prime_shamir::ShamirShare;
    ///
    /// let mut scheme = ShamirShare::new(10, 4).unwrap();
    /// let secret = BigUint::from(99u32);
    /// let shares: Vec<_> = scheme.dealer(&secret).unwrap().take(4).collect();
    /// assert_eq!(scheme.reconstruct(&shares).unwrap(), secret);
    /// ```
    pub fn dealer(&mut self, secret: &BigUint) -> Result<Dealer> {
        let polynomial = self.sharing_polynomial(secret.clone())?;
        Ok(Dealer {
            polynomial,
            field: self.config.field.clone(),
            next_x: 1,
            total_shares: self.total_shares,
        })
    }

    /// Reconstructs the secret from the first `threshold` shares
    ///
    /// See [`reconstruct_with_field`] for the validation performed.
    pub fn reconstruct(&self, shares: &[Share]) -> Result<BigUint> {
        reconstruct_with_field(shares, self.threshold, &self.config.field)
    }

    /// Re-randomizes shares without changing the secret they encode
    ///
    /// A fresh polynomial with zero constant term is evaluated at each
    /// share's x-coordinate and added to its value. Refreshed shares
    /// reconstruct the original secret, but cannot be combined with shares
    /// from before the refresh.
    ///
    /// # Errors
    /// Returns `ShamirError` if fewer than `threshold` shares are given or any
    /// share fails validation (zero or duplicate x, unreduced y).
    pub fn refresh_shares(&mut self, shares: &[Share]) -> Result<Vec<Share>> {
        let got = share_count(shares);
        if got < self.threshold {
            return Err(ShamirError::InsufficientShares {
                needed: self.threshold,
                got,
            });
        }
        validate_shares(shares, &self.config.field)?;

        let field = &self.config.field;
        let delta = Polynomial::random(
            BigUint::zero(),
            (self.threshold - 1) as usize,
            field,
            &mut self.rng,
        );
        let refreshed = shares
            .iter()
            .map(|share| {
                let offset = delta.evaluate(&BigUint::from(share.x), field);
                Share::new(share.x, field.add(&share.y, &offset))
            })
            .collect();

        tracing::debug!(shares = got, threshold = self.threshold, "refreshed shares");
        Ok(refreshed)
    }

    fn sharing_polynomial(&mut self, secret: BigUint) -> Result<Polynomial> {
        if !self.config.field.contains(&secret) {
            return Err(ShamirError::SecretOutOfRange);
        }
        Ok(Polynomial::random(
            secret,
            (self.threshold - 1) as usize,
            &self.config.field,
            &mut self.rng,
        ))
    }
}

/// Lazy share generator returned by [`ShamirShare::dealer`]
#[derive(Debug, Clone)]
pub struct Dealer {
    polynomial: Polynomial,
    field: PrimeField,
    next_x: u64,
    total_shares: u32,
}

impl Iterator for Dealer {
    type Item = Share;

    fn next(&mut self) -> Option<Share> {
        if self.next_x > u64::from(self.total_shares) {
            return None;
        }
        let share = share_at(&self.polynomial, self.next_x as u32, &self.field);
        self.next_x += 1;
        Some(share)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (u64::from(self.total_shares) + 1 - self.next_x) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Dealer {}

impl FusedIterator for Dealer {}

/// Splits `secret` into `n` shares over GF(2^127 - 1), any `k` of which recover it
///
/// # Errors
/// - `ShamirError::InvalidThreshold` unless `1 <= k <= n`
/// - `ShamirError::SecretOutOfRange` if `secret >= 2^127 - 1`
///
/// # Example
/// ```
/// use num_bigint::BigUint;
/// use prime_shamir::{reconstruct, split};
///
/// let secret = BigUint::from(42u32);
/// let shares = split(&secret, 5, 3).unwrap();
/// let picked = [shares[0].clone(), shares[2].clone(), shares[4].clone()];
/// assert_eq!(reconstruct(&picked, 3).unwrap(), secret);
/// ```
pub fn split(secret: &BigUint, n: u32, k: u32) -> Result<Vec<Share>> {
    ShamirShare::new(n, k)?.split(secret)
}

/// Reconstructs a secret over GF(2^127 - 1) from the first `k` shares
pub fn reconstruct(shares: &[Share], k: u32) -> Result<BigUint> {
    reconstruct_with_field(shares, k, &PrimeField::mersenne127())
}

/// Reconstructs a secret from the first `k` shares using Lagrange interpolation at zero
///
/// Only `shares[..k]` take part; callers choose which shares come first.
///
/// # Errors
/// Returns `ShamirError` if:
/// - `k` is zero
/// - Fewer than `k` shares are supplied
/// - Two of the chosen shares have the same x-coordinate
/// - A chosen share has x ≡ 0 or an unreduced value
/// - The modulus is not prime (`NoInverse`)
pub fn reconstruct_with_field(shares: &[Share], k: u32, field: &PrimeField) -> Result<BigUint> {
    let got = share_count(shares);
    if k == 0 {
        return Err(ShamirError::InvalidThreshold {
            threshold: k,
            total_shares: got,
        });
    }
    if got < k {
        return Err(ShamirError::InsufficientShares { needed: k, got });
    }

    let secret = interpolate_at(&shares[..k as usize], &BigUint::zero(), field)?;
    tracing::debug!(threshold = k, supplied = got, "reconstructed secret");
    Ok(secret)
}

/// Evaluates the unique polynomial of degree `< shares.len()` through `shares` at `x`
///
/// Reconstruction is interpolation at `x = 0`; other points recover the value a
/// missing share would have had.
///
/// # Example
/// ```
/// use num_bigint::BigUint;
/// use prime_shamir::{interpolate_at, PrimeField, ShamirShare};
///
/// let mut scheme = ShamirShare::new(5, 3).unwrap();
/// let shares = scheme.split(&BigUint::from(5u32)).unwrap();
/// let recovered = interpolate_at(&shares[..3], &BigUint::from(5u32), scheme.field()).unwrap();
/// assert_eq!(recovered, shares[4].y);
/// ```
pub fn interpolate_at(shares: &[Share], x: &BigUint, field: &PrimeField) -> Result<BigUint> {
    if shares.is_empty() {
        return Err(ShamirError::InsufficientShares { needed: 1, got: 0 });
    }
    validate_shares(shares, field)?;

    let xs: Vec<BigUint> = shares.iter().map(|s| BigUint::from(s.x)).collect();
    let coefficients = lagrange_coefficients(&xs, x, field)?;

    Ok(shares
        .iter()
        .zip(&coefficients)
        .fold(BigUint::zero(), |acc, (share, coeff)| {
            field.add(&acc, &field.mul(&share.y, coeff))
        }))
}

/// Lagrange basis values `L_i(at)` for the given x-coordinates
fn lagrange_coefficients(xs: &[BigUint], at: &BigUint, field: &PrimeField) -> Result<Vec<BigUint>> {
    xs.iter()
        .enumerate()
        .map(|(i, x_i)| -> Result<BigUint> {
            let mut numerator = BigUint::one();
            let mut denominator = BigUint::one();
            for (j, x_j) in xs.iter().enumerate() {
                if i != j {
                    numerator = field.mul(&numerator, &field.sub(at, x_j));
                    denominator = field.mul(&denominator, &field.sub(x_i, x_j));
                }
            }
            let inverse = field.inverse(&denominator).inspect_err(|_| {
                tracing::error!(
                    modulus = %field.modulus(),
                    "interpolation denominator has no inverse; modulus is not prime"
                );
            })?;
            Ok(field.mul(&numerator, &inverse))
        })
        .collect()
}

/// Rejects share sets that would make interpolation ill-defined
fn validate_shares(shares: &[Share], field: &PrimeField) -> Result<()> {
    let mut seen = HashSet::with_capacity(shares.len());
    for share in shares {
        let x = field.reduce(&BigUint::from(share.x));
        if x.is_zero() {
            return Err(ShamirError::InvalidShareIndex(share.x));
        }
        if !seen.insert(x) {
            return Err(ShamirError::DuplicateShare(share.x));
        }
        if !field.contains(&share.y) {
            return Err(ShamirError::ShareOutOfRange(share.x));
        }
    }
    Ok(())
}

#[inline]
fn share_at(polynomial: &Polynomial, x: u32, field: &PrimeField) -> Share {
    Share::new(x, polynomial.evaluate(&BigUint::from(x), field))
}

#[inline]
fn share_count(shares: &[Share]) -> u32 {
    u32::try_from(shares.len()).unwrap_or(u32::MAX)
}
