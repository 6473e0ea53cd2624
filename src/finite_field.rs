use crate::error::{Result, ShamirError};
use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Zero};
use once_cell::sync::Lazy;
use rand_core::RngCore;
#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

/// The Mersenne prime 2^127 - 1, the default field modulus
pub static MERSENNE_127: Lazy<BigUint> = Lazy::new(|| BigUint::from(u128::MAX >> 1));

/// Computes `base^exponent mod modulus` using square-and-multiply
///
/// # Panics
/// Panics if `modulus` is zero.
///
/// # Example
/// ```
/// use num_bigint::BigUint;
/// use prime_shamir::mod_pow;
///
/// let r = mod_pow(&BigUint::from(3u32), &BigUint::from(200u32), &BigUint::from(13u32));
/// assert_eq!(r, BigUint::from(9u32));
/// ```
pub fn mod_pow(base: &BigUint, exponent: &BigUint, modulus: &BigUint) -> BigUint {
    let mut result = BigUint::one() % modulus;
    let mut base = base % modulus;
    for bit in 0..exponent.bits() {
        if exponent.bit(bit) {
            result = result * &base % modulus;
        }
        base = &base * &base % modulus;
    }
    result
}

/// Computes the multiplicative inverse of `a` modulo `modulus`
///
/// Uses the extended Euclidean algorithm. The result is always reduced into
/// `[0, modulus)`.
///
/// # Errors
/// Returns [`ShamirError::NoInverse`] if `gcd(a, modulus) != 1`, which for a
/// prime modulus only happens when `a ≡ 0`.
///
/// # Example
/// ```
/// use num_bigint::BigUint;
/// use prime_shamir::mod_inverse;
///
/// let inv = mod_inverse(&BigUint::from(3u32), &BigUint::from(11u32)).unwrap();
/// assert_eq!(inv, BigUint::from(4u32));
/// ```
pub fn mod_inverse(a: &BigUint, modulus: &BigUint) -> Result<BigUint> {
    if modulus.is_zero() {
        return Err(ShamirError::NoInverse);
    }
    let m = BigInt::from(modulus.clone());
    let (g, x, _) = egcd(&BigInt::from(a % modulus), &m);
    if !g.is_one() {
        return Err(ShamirError::NoInverse);
    }
    // Bezout coefficient may be negative
    let (_, inverse) = x.mod_floor(&m).into_parts();
    Ok(inverse)
}

/// Returns `(g, x, y)` with `a*x + b*y = g = gcd(a, b)`
fn egcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    if b.is_zero() {
        return (a.clone(), BigInt::one(), BigInt::zero());
    }
    let (g, x1, y1) = egcd(b, &(a % b));
    let y = x1 - (a / b) * &y1;
    (g, y1, y)
}

/// Prime field GF(p) described by its modulus
///
/// The modulus is carried as a value so every arithmetic routine stays a pure
/// function of its inputs. Elements are plain [`BigUint`]s in `[0, p)`.
///
/// # Example
/// ```
/// use num_bigint::BigUint;
/// use prime_shamir::PrimeField;
///
/// let field = PrimeField::new(BigUint::from(13u32)).unwrap();
/// let a = BigUint::from(7u32);
/// let b = BigUint::from(9u32);
/// assert_eq!(field.add(&a, &b), BigUint::from(3u32));
/// assert_eq!(field.sub(&a, &b), BigUint::from(11u32));
/// assert_eq!(field.mul(&a, &b), BigUint::from(11u32));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimeField {
    modulus: BigUint,
}

impl Default for PrimeField {
    fn default() -> Self {
        Self::mersenne127()
    }
}

impl PrimeField {
    /// Creates a field for the given modulus
    ///
    /// Primality is not verified; a composite modulus surfaces later as
    /// [`ShamirError::NoInverse`] during interpolation.
    pub fn new(modulus: BigUint) -> Result<Self> {
        if modulus < BigUint::from(2u32) {
            return Err(ShamirError::InvalidConfig(
                "Field modulus must be at least 2".into(),
            ));
        }
        Ok(Self { modulus })
    }

    /// The field GF(2^127 - 1)
    pub fn mersenne127() -> Self {
        Self {
            modulus: MERSENNE_127.clone(),
        }
    }

    #[inline]
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// Whether `value` is a canonical element of the field
    #[inline]
    pub fn contains(&self, value: &BigUint) -> bool {
        value < &self.modulus
    }

    #[inline]
    pub fn reduce(&self, value: &BigUint) -> BigUint {
        value % &self.modulus
    }

    #[inline]
    pub fn add(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a + b) % &self.modulus
    }

    #[inline]
    pub fn sub(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (self.reduce(a) + &self.modulus - self.reduce(b)) % &self.modulus
    }

    #[inline]
    pub fn mul(&self, a: &BigUint, b: &BigUint) -> BigUint {
        a * b % &self.modulus
    }

    pub fn pow(&self, base: &BigUint, exponent: &BigUint) -> BigUint {
        mod_pow(base, exponent, &self.modulus)
    }

    pub fn inverse(&self, value: &BigUint) -> Result<BigUint> {
        mod_inverse(value, &self.modulus)
    }

    /// Draws a uniformly distributed element of `[0, p)`
    ///
    /// Random bytes are masked to the bit length of the modulus and
    /// rejected when they land outside the field, so every element is
    /// equally likely.
    pub fn random_element<R: RngCore + ?Sized>(&self, rng: &mut R) -> BigUint {
        let bits = self.modulus.bits();
        let len = bits.div_ceil(8) as usize;
        let mask = 0xffu8 >> (len as u64 * 8 - bits);
        let mut bytes = vec![0u8; len];
        loop {
            rng.fill_bytes(&mut bytes);
            bytes[len - 1] &= mask;
            let candidate = BigUint::from_bytes_le(&bytes);
            if candidate < self.modulus {
                #[cfg(feature = "zeroize")]
                bytes.zeroize();
                return candidate;
            }
        }
    }
}
