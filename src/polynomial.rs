use crate::finite_field::PrimeField;
use num_bigint::BigUint;
use num_traits::Zero;
use rand_core::RngCore;

/// Evaluates `coefficients[0] + coefficients[1]*x + ... mod modulus`
///
/// Uses Horner's method, reducing after every step so intermediate values stay
/// below `modulus^2`.
///
/// # Panics
/// Panics if `modulus` is zero.
///
/// # Example
/// ```
/// use num_bigint::BigUint;
/// use prime_shamir::evaluate;
///
/// // 3 + 2x + x^2 at x = 3
/// let coefficients = [3u32, 2, 1].map(BigUint::from);
/// let y = evaluate(&coefficients, &BigUint::from(3u32), &BigUint::from(100u32));
/// assert_eq!(y, BigUint::from(18u32));
/// ```
pub fn evaluate(coefficients: &[BigUint], x: &BigUint, modulus: &BigUint) -> BigUint {
    coefficients
        .iter()
        .rev()
        .fold(BigUint::zero(), |acc, c| (acc * x + c) % modulus)
}

/// Polynomial over a prime field, coefficients in ascending order
///
/// `[1, 2, 3]` is `1 + 2x + 3x^2`. Unlike a general polynomial type, trailing
/// zero coefficients are kept: a sharing polynomial has exactly `threshold`
/// coefficients whatever their values.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Polynomial {
    coefficients: Vec<BigUint>,
}

impl Polynomial {
    pub fn new(coefficients: Vec<BigUint>) -> Self {
        Self { coefficients }
    }

    /// Builds `constant + r1*x + ... + r_degree*x^degree` with uniform random `r_i`
    pub fn random<R: RngCore + ?Sized>(
        constant: BigUint,
        degree: usize,
        field: &PrimeField,
        rng: &mut R,
    ) -> Self {
        let mut coefficients = Vec::with_capacity(degree + 1);
        coefficients.push(constant);
        for _ in 0..degree {
            coefficients.push(field.random_element(rng));
        }
        Self { coefficients }
    }

    #[inline]
    pub fn evaluate(&self, x: &BigUint, field: &PrimeField) -> BigUint {
        evaluate(&self.coefficients, x, field.modulus())
    }

    pub fn constant_term(&self) -> BigUint {
        self.coefficients.first().cloned().unwrap_or_default()
    }

    /// Nominal degree (`coefficients.len() - 1`), zero for the empty polynomial
    pub fn degree(&self) -> usize {
        self.coefficients.len().saturating_sub(1)
    }

    pub fn coefficients(&self) -> &[BigUint] {
        &self.coefficients
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_chacha::ChaCha20Rng;
    use rand_core::SeedableRng;

    fn big(v: u128) -> BigUint {
        BigUint::from(v)
    }

    fn poly(coefficients: &[u128]) -> Polynomial {
        Polynomial::new(coefficients.iter().copied().map(BigUint::from).collect())
    }

    #[test]
    fn test_polynomial_evaluation() {
        let field = PrimeField::new(big(101)).unwrap();
        let p = poly(&[3, 2, 1]); // 3 + 2x + 1x^2
        assert_eq!(p.evaluate(&big(0), &field), big(3));
        assert_eq!(p.evaluate(&big(1), &field), big(6));
        assert_eq!(p.evaluate(&big(2), &field), big(11));
        assert_eq!(p.evaluate(&big(3), &field), big(18));
    }

    #[test]
    fn test_polynomial_evaluation_with_modulo() {
        let coefficients = [100u32, 200, 300].map(BigUint::from); // 100 + 200x + 300x^2
        let modulus = big(257);
        assert_eq!(
            evaluate(&coefficients, &big(1), &modulus),
            big((100 + 200 + 300) % 257)
        );
        assert_eq!(
            evaluate(&coefficients, &big(2), &modulus),
            big((100 + 400 + 1200) % 257)
        );
    }

    #[test]
    fn test_evaluation_matches_direct_summation() {
        let field = PrimeField::mersenne127();
        let mut rng = ChaCha20Rng::seed_from_u64(5);
        let p = Polynomial::random(big(42), 6, &field, &mut rng);
        let x = big(1_000_003);
        let direct = p
            .coefficients()
            .iter()
            .enumerate()
            .fold(BigUint::zero(), |acc, (i, c)| {
                let term = c * field.pow(&x, &big(i as u128));
                field.add(&acc, &term)
            });
        assert_eq!(p.evaluate(&x, &field), direct);
    }

    #[test]
    fn test_evaluation_is_deterministic() {
        let field = PrimeField::mersenne127();
        let p = Polynomial::random(big(7), 4, &field, &mut ChaCha20Rng::seed_from_u64(1));
        let x = big(9);
        assert_eq!(p.evaluate(&x, &field), p.evaluate(&x, &field));
    }

    #[test]
    fn test_empty_and_constant_polynomials() {
        let modulus = big(13);
        assert_eq!(evaluate(&[], &big(5), &modulus), big(0));
        assert_eq!(evaluate(&[big(12)], &big(5), &modulus), big(12));
        assert_eq!(poly(&[]).constant_term(), big(0));
        assert_eq!(poly(&[]).degree(), 0);
    }

    #[test]
    fn test_random_polynomial_shape() {
        let field = PrimeField::mersenne127();
        let mut rng = ChaCha20Rng::seed_from_u64(99);
        let p = Polynomial::random(big(42), 2, &field, &mut rng);
        assert_eq!(p.degree(), 2);
        assert_eq!(p.constant_term(), big(42));
        assert_eq!(p.evaluate(&big(0), &field), big(42));
        assert!(p.coefficients().iter().all(|c| field.contains(c)));
    }

    #[test]
    fn test_fresh_randomness_per_polynomial() {
        let field = PrimeField::mersenne127();
        let mut rng = ChaCha20Rng::seed_from_u64(2024);
        let a = Polynomial::random(big(1), 3, &field, &mut rng);
        let b = Polynomial::random(big(1), 3, &field, &mut rng);
        assert_ne!(a, b);
    }
}
