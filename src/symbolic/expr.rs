use std::rc::Rc;

use crate::interpreter::ops::Operation;

/// A symbolic expression tree built while checking program equivalence.
///
/// Leaves are anonymized symbols, one per distinct literal argument text,
/// assigned in first-seen order while scanning the first program. Internal
/// nodes map the six program operations onto arithmetic and comparison
/// operators. Trees are built, canonicalized, and discarded within one
/// equivalence check; nothing is shared across calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// An anonymized literal operand.
    Symbol(u32),
    /// `add` → `+`
    Add(Rc<Expr>, Rc<Expr>),
    /// `subtract` → `-`
    Sub(Rc<Expr>, Rc<Expr>),
    /// `multiply` → `*`
    Mul(Rc<Expr>, Rc<Expr>),
    /// `divide` → `/`
    Div(Rc<Expr>, Rc<Expr>),
    /// `exp` → `**`
    Pow(Rc<Expr>, Rc<Expr>),
    /// `greater` → `>`
    Gt(Rc<Expr>, Rc<Expr>),
}

impl Expr {
    /// Builds a symbol leaf.
    #[must_use]
    pub fn symbol(id: u32) -> Rc<Self> {
        Rc::new(Self::Symbol(id))
    }

    /// Builds the tree node corresponding to one program operation.
    #[must_use]
    pub fn binary(op: Operation, lhs: Rc<Self>, rhs: Rc<Self>) -> Rc<Self> {
        Rc::new(match op {
                    Operation::Add => Self::Add(lhs, rhs),
                    Operation::Subtract => Self::Sub(lhs, rhs),
                    Operation::Multiply => Self::Mul(lhs, rhs),
                    Operation::Divide => Self::Div(lhs, rhs),
                    Operation::Exp => Self::Pow(lhs, rhs),
                    Operation::Greater => Self::Gt(lhs, rhs),
                })
    }

    fn precedence(&self) -> u8 {
        match self {
            Self::Gt(_, _) => 0,
            Self::Add(_, _) | Self::Sub(_, _) => 1,
            Self::Mul(_, _) | Self::Div(_, _) => 2,
            Self::Pow(_, _) => 3,
            Self::Symbol(_) => 4,
        }
    }
}

impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let write_side = |f: &mut std::fmt::Formatter<'_>, side: &Self, parens: bool| {
            if parens {
                write!(f, "({side})")
            } else {
                write!(f, "{side}")
            }
        };

        match self {
            Self::Symbol(id) => write!(f, "a{id}"),
            Self::Add(l, r) | Self::Sub(l, r) | Self::Mul(l, r) | Self::Div(l, r)
            | Self::Pow(l, r) | Self::Gt(l, r) => {
                let op = match self {
                    Self::Add(_, _) => "+",
                    Self::Sub(_, _) => "-",
                    Self::Mul(_, _) => "*",
                    Self::Div(_, _) => "/",
                    Self::Pow(_, _) => "**",
                    Self::Gt(_, _) => ">",
                    Self::Symbol(_) => unreachable!(),
                };
                let prec = self.precedence();
                write_side(f, l, l.precedence() < prec)?;
                write!(f, " {op} ")?;
                // Right side needs parentheses at equal precedence too:
                // these operators associate to the left.
                write_side(f, r, r.precedence() <= prec)
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_precedence() {
        let e = Expr::binary(Operation::Multiply,
                             Expr::binary(Operation::Add, Expr::symbol(0), Expr::symbol(1)),
                             Expr::symbol(2));
        assert_eq!(e.to_string(), "(a0 + a1) * a2");

        let e = Expr::binary(Operation::Subtract,
                             Expr::symbol(0),
                             Expr::binary(Operation::Subtract, Expr::symbol(1), Expr::symbol(2)));
        assert_eq!(e.to_string(), "a0 - (a1 - a2)");
    }
}
