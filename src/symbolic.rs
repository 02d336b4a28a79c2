/// Canonical forms over exact rational-function algebra.
///
/// Lowers expression trees into formal quotients of multivariate
/// polynomials, interning opaque power generators, and decides equality by
/// cross-multiplication so that commutativity, associativity and
/// cancellation all fall out without a polynomial GCD.
pub mod canon;
/// Equivalence checking of tokenized programs.
///
/// Recovers the per-program step lists, anonymizes literal operands into
/// shared symbols (seeded from the first program only), expands the final
/// step of each program into a substituted expression tree, and compares
/// canonical forms.
pub mod equiv;
/// Symbolic expression trees.
///
/// Defines the Rc-based tree the equivalence checker builds: anonymized
/// symbol leaves and one node per program operation.
pub mod expr;
/// Exact multivariate polynomials.
///
/// Sparse polynomials with `BigRational` coefficients keyed by monomials;
/// the arithmetic layer underneath the canonical forms.
pub mod poly;
