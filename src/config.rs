use crate::error::Result;
use crate::finite_field::PrimeField;
use num_bigint::BigUint;

/// Processing mode for share generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SplitMode {
    /// Evaluate the polynomial at each x-coordinate in turn
    #[default]
    Sequential,
    /// Evaluate the polynomial at all x-coordinates in parallel
    Parallel,
}

/// Configuration options for splitting and reconstruction
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Field the polynomial lives in, GF(2^127 - 1) unless overridden
    pub field: PrimeField,
    /// Processing mode
    pub mode: SplitMode,
}

impl Config {
    /// Creates a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the prime modulus of the field
    ///
    /// # Errors
    /// Returns `ShamirError::InvalidConfig` if `modulus < 2`.
    pub fn with_modulus(mut self, modulus: BigUint) -> Result<Self> {
        self.field = PrimeField::new(modulus)?;
        Ok(self)
    }

    /// Sets the processing mode
    pub fn with_mode(mut self, mode: SplitMode) -> Self {
        self.mode = mode;
        self
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<()> {
        PrimeField::new(self.field.modulus().clone()).map(|_| ())
    }
}
