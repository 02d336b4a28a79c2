use std::collections::BTreeMap;

use num_rational::BigRational;
use num_traits::{One, Zero};

/// A monomial: variable id to exponent, zero exponents never stored.
///
/// Variable ids cover both anonymized symbols and interned power
/// generators; the polynomial layer does not distinguish them.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Monomial(BTreeMap<u32, u32>);

impl Monomial {
    /// The constant monomial (every exponent zero).
    #[must_use]
    pub fn constant() -> Self {
        Self(BTreeMap::new())
    }

    /// The monomial for a single variable to the first power.
    #[must_use]
    pub fn var(id: u32) -> Self {
        let mut exponents = BTreeMap::new();
        exponents.insert(id, 1);
        Self(exponents)
    }

    /// Multiplies two monomials by adding exponents.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        let mut exponents = self.0.clone();
        for (&id, &exp) in &other.0 {
            *exponents.entry(id).or_insert(0) += exp;
        }
        Self(exponents)
    }

    /// Sum of all exponents.
    #[must_use]
    pub fn total_degree(&self) -> u32 {
        self.0.values().sum()
    }
}

/// A multivariate polynomial with exact rational coefficients.
///
/// Terms map monomials to nonzero `BigRational` coefficients, so structural
/// equality is semantic equality and no normalization pass is needed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Poly {
    terms: BTreeMap<Monomial, BigRational>,
}

impl Poly {
    /// The zero polynomial.
    #[must_use]
    pub fn zero() -> Self {
        Self { terms: BTreeMap::new() }
    }

    /// The constant polynomial 1.
    #[must_use]
    pub fn one() -> Self {
        Self::constant(BigRational::one())
    }

    /// A constant polynomial.
    #[must_use]
    pub fn constant(value: BigRational) -> Self {
        let mut poly = Self::zero();
        poly.add_term(Monomial::constant(), value);
        poly
    }

    /// The polynomial for a single variable.
    #[must_use]
    pub fn var(id: u32) -> Self {
        let mut poly = Self::zero();
        poly.add_term(Monomial::var(id), BigRational::one());
        poly
    }

    /// Whether this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Adds one term, dropping the monomial when its coefficient cancels.
    pub fn add_term(&mut self, mono: Monomial, coeff: BigRational) {
        if coeff.is_zero() {
            return;
        }
        let cancelled = {
            let entry = self.terms.entry(mono.clone()).or_insert_with(BigRational::zero);
            *entry += coeff;
            entry.is_zero()
        };
        if cancelled {
            self.terms.remove(&mono);
        }
    }

    /// Polynomial addition.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        let mut result = self.clone();
        for (mono, coeff) in &other.terms {
            result.add_term(mono.clone(), coeff.clone());
        }
        result
    }

    /// Polynomial subtraction.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Negates all coefficients.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self { terms: self.terms.iter().map(|(m, c)| (m.clone(), -c)).collect() }
    }

    /// Polynomial multiplication.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        let mut result = Self::zero();
        for (m1, c1) in &self.terms {
            for (m2, c2) in &other.terms {
                result.add_term(m1.mul(m2), c1 * c2);
            }
        }
        result
    }

    /// Raises the polynomial to a non-negative integer power.
    #[must_use]
    pub fn pow(&self, exponent: u32) -> Self {
        let mut result = Self::one();
        for _ in 0..exponent {
            result = result.mul(self);
        }
        result
    }

    /// Returns `k` such that `self == k * other`, if any.
    ///
    /// Used to detect constant exponents: a rational function `num/den` is
    /// the constant `k` exactly when its numerator is `k` times its
    /// denominator.
    #[must_use]
    pub fn scalar_ratio(&self, other: &Self) -> Option<BigRational> {
        if other.is_zero() || self.terms.len() != other.terms.len() {
            return None;
        }

        let mut ratio: Option<BigRational> = None;
        for ((m1, c1), (m2, c2)) in self.terms.iter().zip(&other.terms) {
            if m1 != m2 {
                return None;
            }
            let current = c1 / c2;
            match &ratio {
                None => ratio = Some(current),
                Some(previous) if *previous == current => {},
                Some(_) => return None,
            }
        }
        ratio
    }

    /// Maximum total degree among all terms.
    #[must_use]
    pub fn max_total_degree(&self) -> u32 {
        self.terms.keys().map(Monomial::total_degree).max().unwrap_or(0)
    }
}
