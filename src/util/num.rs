/// Decimal places an executed answer is rounded to before being reported.
pub const ANSWER_DECIMALS: i32 = 5;

/// Coerces a heterogeneous textual numeral into a floating-point value.
///
/// The coercion chain mirrors how numerals appear in financial documents and
/// generated programs: plain numbers with optional comma thousands separators
/// (`"1,234.5"`), percentages (`"12%"` is `0.12`), and named constants with
/// the `const_` prefix (`"const_1000000"`), including the `const_m1` alias
/// for negative one. Anything that fails every branch resolves to `None`,
/// the not-available sentinel. This function is total and never panics.
///
/// # Parameters
/// - `text`: The textual numeral to coerce.
///
/// # Returns
/// - `Some(f64)`: The coerced value.
/// - `None`: The text is not a recognized numeral.
///
/// # Example
/// ```
/// use finprog::util::num::coerce;
///
/// assert_eq!(coerce("1,234.5"), Some(1234.5));
/// assert_eq!(coerce("12%"), Some(0.12));
/// assert_eq!(coerce("const_m1"), Some(-1.0));
/// assert_eq!(coerce("const_1000000"), Some(1_000_000.0));
/// assert_eq!(coerce("abc"), None);
/// ```
#[must_use]
pub fn coerce(text: &str) -> Option<f64> {
    let cleaned = text.replace(',', "");
    let cleaned = cleaned.trim();

    if let Ok(value) = cleaned.parse::<f64>() {
        return Some(value);
    }

    if cleaned.contains('%') {
        let stripped = cleaned.replace('%', "");
        return stripped.trim().parse::<f64>().ok().map(|value| value / 100.0);
    }

    if cleaned.contains("const_") {
        let stripped = cleaned.replace("const_", "");
        let stripped = if stripped == "m1" { "-1".to_string() } else { stripped };
        return stripped.trim().parse::<f64>().ok();
    }

    None
}

/// Coerces one table cell, tolerating document formatting noise.
///
/// Currency markers are removed and a trailing parenthesized annotation
/// (footnote references, loss markers) is dropped before the standard
/// [`coerce`] chain runs.
///
/// # Example
/// ```
/// use finprog::util::num::coerce_cell;
///
/// assert_eq!(coerce_cell("$1,234 (estimated)"), Some(1234.0));
/// assert_eq!(coerce_cell("7.5%"), Some(0.075));
/// assert_eq!(coerce_cell("n/a"), None);
/// ```
#[must_use]
pub fn coerce_cell(text: &str) -> Option<f64> {
    let cleaned = text.replace('$', "");
    let cleaned = cleaned.split('(').next().unwrap_or("").trim();
    coerce(cleaned)
}

/// Coerces a full table row of cells.
///
/// A single uncoercible cell fails the whole row, so callers can tell
/// numeric rows apart from header or annotation rows.
///
/// # Returns
/// - `Some(Vec<f64>)`: Every cell coerced.
/// - `None`: At least one cell was not a numeral.
#[must_use]
pub fn coerce_row<S: AsRef<str>>(cells: &[S]) -> Option<Vec<f64>> {
    cells.iter().map(|cell| coerce_cell(cell.as_ref())).collect()
}

/// Rounds a final answer to [`ANSWER_DECIMALS`] decimal places.
///
/// Ties round to even.
///
/// # Example
/// ```
/// use finprog::util::num::round_answer;
///
/// assert_eq!(round_answer(1.0 / 3.0), 0.33333);
/// assert_eq!(round_answer(2.0), 2.0);
/// ```
#[must_use]
pub fn round_answer(value: f64) -> f64 {
    let scale = 10f64.powi(ANSWER_DECIMALS);
    (value * scale).round_ties_even() / scale
}
