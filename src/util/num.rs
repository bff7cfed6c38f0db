/// Renders a result as expression text.
///
/// Uses the shortest representation that parses back to the identical
/// `f64`, without an exponent, so the text is a valid numeric literal for any
/// finite non-negative value. Integral values have no fractional part.
///
/// ## Example
/// ```
/// use pastel_calc::{evaluate, util::num::buffer_text};
///
/// assert_eq!(buffer_text(14.0), "14");
/// assert_eq!(buffer_text(0.1 + 0.2), "0.30000000000000004");
///
/// let value = evaluate("1/3").unwrap();
/// assert_eq!(evaluate(&buffer_text(value)), Ok(value));
/// ```
#[must_use]
pub fn buffer_text(value: f64) -> String {
    format!("{value}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn large_and_small_values_stay_literal() {
        assert_eq!(buffer_text(1e21), "1000000000000000000000");
        assert_eq!(buffer_text(1e-7), "0.0000001");
        assert_eq!(buffer_text(2.5), "2.5");
    }

    #[test]
    fn negative_values_keep_their_sign() {
        assert_eq!(buffer_text(-3.0), "-3");
    }
}
