use num_rational::BigRational;
use num_traits::{ToPrimitive, Zero};

use crate::{
    error::EquivError,
    symbolic::{expr::Expr, poly::Poly},
};

/// Largest integer exponent expanded into repeated multiplication.
///
/// Exponents in real programs are literals, which are anonymized into
/// symbols, so a constant exponent only arises from a self-cancelling
/// sub-expression. The cap keeps pathological inputs from blowing up the
/// polynomial degree.
pub const MAX_EXPANDED_EXPONENT: i64 = 32;

/// A formal quotient of two polynomials.
///
/// The denominator is never identically zero; constructing one fails the
/// equivalence check instead. Quotients are not reduced; equality is
/// decided by cross-multiplication, which captures cancellation without
/// polynomial GCD.
#[derive(Debug, Clone)]
pub struct Ratio {
    num: Poly,
    den: Poly,
}

impl Ratio {
    /// The quotient for a single variable.
    #[must_use]
    pub fn var(id: u32) -> Self {
        Self { num: Poly::var(id),
               den: Poly::one(), }
    }

    /// The constant 1.
    #[must_use]
    pub fn one() -> Self {
        Self { num: Poly::one(),
               den: Poly::one(), }
    }

    /// `self + other` over the common denominator.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        Self { num: self.num.mul(&other.den).add(&other.num.mul(&self.den)),
               den: self.den.mul(&other.den), }
    }

    /// `self - other` over the common denominator.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        Self { num: self.num.mul(&other.den).sub(&other.num.mul(&self.den)),
               den: self.den.mul(&other.den), }
    }

    /// `self * other`.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        Self { num: self.num.mul(&other.num),
               den: self.den.mul(&other.den), }
    }

    /// `self / other`.
    ///
    /// # Errors
    /// Fails when `other` is the identically-zero expression.
    pub fn div(&self, other: &Self) -> Result<Self, EquivError> {
        if other.num.is_zero() {
            return Err(EquivError::ZeroDenominator);
        }
        Ok(Self { num: self.num.mul(&other.den),
                  den: self.den.mul(&other.num), })
    }

    /// Raises the quotient to an integer power.
    ///
    /// # Errors
    /// Fails when raising the identically-zero expression to a negative
    /// power.
    pub fn pow_integer(&self, exponent: i64) -> Result<Self, EquivError> {
        if exponent == 0 {
            return Ok(Self::one());
        }

        let magnitude = u32::try_from(exponent.unsigned_abs())
            .map_err(|_| EquivError::UnsupportedExponent)?;
        if exponent > 0 {
            return Ok(Self { num: self.num.pow(magnitude),
                             den: self.den.pow(magnitude), });
        }

        if self.num.is_zero() {
            return Err(EquivError::ZeroDenominator);
        }
        Ok(Self { num: self.den.pow(magnitude),
                  den: self.num.pow(magnitude), })
    }

    /// Decides mathematical equality by cross-multiplication.
    ///
    /// `n1/d1 == n2/d2` over an integral domain exactly when
    /// `n1*d2 == n2*d1`, so common factors cancel without ever computing a
    /// polynomial GCD.
    #[must_use]
    pub fn algebraically_equal(&self, other: &Self) -> bool {
        self.num.mul(&other.den) == other.num.mul(&self.den)
    }

    /// Extracts the constant value of a constant quotient, if any.
    #[must_use]
    pub fn as_constant(&self) -> Option<BigRational> {
        if self.num.is_zero() {
            return Some(BigRational::zero());
        }
        self.num.scalar_ratio(&self.den)
    }
}

/// The canonical form of one expanded program.
#[derive(Debug, Clone)]
pub enum Canon {
    /// An arithmetic program: a single rational function.
    Ratio(Ratio),
    /// A `greater` comparison at the root, kept as its two sides.
    Relation(Ratio, Ratio),
}

impl Canon {
    /// Whether two canonical forms denote the same computation.
    ///
    /// Relations compare side by side; a relation never equals a plain
    /// arithmetic result.
    #[must_use]
    pub fn algebraically_equal(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Ratio(a), Self::Ratio(b)) => a.algebraically_equal(b),
            (Self::Relation(al, ar), Self::Relation(bl, br)) => {
                al.algebraically_equal(bl) && ar.algebraically_equal(br)
            },
            _ => false,
        }
    }
}

/// Lowers expression trees into canonical forms over a shared variable
/// space.
///
/// Symbols occupy variable ids `0..symbol_count`; opaque power generators
/// (a `**` with a non-constant exponent) are interned behind them and
/// deduplicated structurally, so the same power sub-expression in both
/// programs lowers to the same variable. One canonicalizer is shared per
/// equivalence check and discarded afterwards.
pub struct Canonicalizer {
    symbol_count: u32,
    generators:   Vec<(Ratio, Ratio)>,
}

impl Canonicalizer {
    /// Creates a canonicalizer for programs with `symbol_count` anonymized
    /// symbols.
    #[must_use]
    pub fn new(symbol_count: u32) -> Self {
        Self { symbol_count,
               generators: Vec::new(), }
    }

    /// Lowers a full expression tree.
    ///
    /// # Errors
    /// Propagates every structural failure: relational operands inside
    /// arithmetic, identically-zero divisors, unexpandable exponents.
    pub fn lower(&mut self, expr: &Expr) -> Result<Canon, EquivError> {
        if let Expr::Gt(lhs, rhs) = expr {
            let lhs = self.lower_ratio(lhs)?;
            let rhs = self.lower_ratio(rhs)?;
            return Ok(Canon::Relation(lhs, rhs));
        }
        Ok(Canon::Ratio(self.lower_ratio(expr)?))
    }

    fn lower_ratio(&mut self, expr: &Expr) -> Result<Ratio, EquivError> {
        match expr {
            Expr::Symbol(id) => Ok(Ratio::var(*id)),
            Expr::Add(lhs, rhs) => Ok(self.lower_ratio(lhs)?.add(&self.lower_ratio(rhs)?)),
            Expr::Sub(lhs, rhs) => Ok(self.lower_ratio(lhs)?.sub(&self.lower_ratio(rhs)?)),
            Expr::Mul(lhs, rhs) => Ok(self.lower_ratio(lhs)?.mul(&self.lower_ratio(rhs)?)),
            Expr::Div(lhs, rhs) => self.lower_ratio(lhs)?.div(&self.lower_ratio(rhs)?),
            Expr::Pow(base, exponent) => {
                let base = self.lower_ratio(base)?;
                let exponent = self.lower_ratio(exponent)?;

                if let Some(constant) = exponent.as_constant() {
                    if constant.is_integer() {
                        let small = constant.to_integer()
                                            .to_i64()
                                            .filter(|e| e.abs() <= MAX_EXPANDED_EXPONENT)
                                            .ok_or(EquivError::UnsupportedExponent)?;
                        return base.pow_integer(small);
                    }
                }

                Ok(Ratio::var(self.power_generator(&base, &exponent)))
            },
            Expr::Gt(_, _) => Err(EquivError::RelationalOperand),
        }
    }

    /// Interns an opaque power generator, reusing a structurally equal one.
    fn power_generator(&mut self, base: &Ratio, exponent: &Ratio) -> u32 {
        for (index, (known_base, known_exp)) in self.generators.iter().enumerate() {
            if known_base.algebraically_equal(base) && known_exp.algebraically_equal(exponent) {
                return self.symbol_count + index as u32;
            }
        }
        self.generators.push((base.clone(), exponent.clone()));
        self.symbol_count + (self.generators.len() - 1) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::ops::Operation;
    use crate::symbolic::expr::Expr as E;

    fn lower(expr: &E) -> Canon {
        Canonicalizer::new(8).lower(expr).expect("lowerable expression")
    }

    #[test]
    fn commutative_addition_is_equal() {
        let ab = E::binary(Operation::Add, E::symbol(0), E::symbol(1));
        let ba = E::binary(Operation::Add, E::symbol(1), E::symbol(0));
        assert!(lower(&ab).algebraically_equal(&lower(&ba)));
    }

    #[test]
    fn subtraction_order_matters() {
        let ab = E::binary(Operation::Subtract, E::symbol(0), E::symbol(1));
        let ba = E::binary(Operation::Subtract, E::symbol(1), E::symbol(0));
        assert!(!lower(&ab).algebraically_equal(&lower(&ba)));
    }

    #[test]
    fn common_factor_cancels() {
        // (a0 * a1) / a1 == a0
        let product = E::binary(Operation::Multiply, E::symbol(0), E::symbol(1));
        let quotient = E::binary(Operation::Divide, product, E::symbol(1));
        let bare = E::Symbol(0);
        assert!(lower(&quotient).algebraically_equal(&lower(&bare)));
    }

    #[test]
    fn division_by_identical_zero_fails() {
        let zero = E::binary(Operation::Subtract, E::symbol(0), E::symbol(0));
        let div = E::binary(Operation::Divide, E::symbol(1), zero);
        assert_eq!(Canonicalizer::new(8).lower(&div).unwrap_err(),
                   EquivError::ZeroDenominator);
    }

    #[test]
    fn relational_operand_inside_arithmetic_fails() {
        let gt = E::binary(Operation::Greater, E::symbol(0), E::symbol(1));
        let sum = E::binary(Operation::Add, gt, E::symbol(2));
        assert_eq!(Canonicalizer::new(8).lower(&sum).unwrap_err(),
                   EquivError::RelationalOperand);
    }

    #[test]
    fn power_generators_are_shared() {
        let mut canonicalizer = Canonicalizer::new(4);
        let pow = E::binary(Operation::Exp, E::symbol(0), E::symbol(1));
        let first = canonicalizer.lower(&pow).expect("lowerable");
        let second = canonicalizer.lower(&pow).expect("lowerable");
        assert!(first.algebraically_equal(&second));
    }

    #[test]
    fn self_cancelling_exponent_expands() {
        // a0 ** (a1 / a1) == a0
        let unit = E::binary(Operation::Divide, E::symbol(1), E::symbol(1));
        let pow = E::binary(Operation::Exp, E::symbol(0), unit);
        assert!(lower(&pow).algebraically_equal(&lower(&E::Symbol(0))));
    }
}
