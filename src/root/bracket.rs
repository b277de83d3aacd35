use super::Error;

/// Validates bracket values and returns them in normalized (lower < upper) order.
pub(crate) fn validate_bracket(bracket: [f64; 2]) -> Result<(f64, f64), Error> {
    let [a, b] = bracket;

    if !a.is_finite() {
        return Err(Error::NonFiniteBracket { value: a });
    }

    if !b.is_finite() {
        return Err(Error::NonFiniteBracket { value: b });
    }

    #[allow(clippy::float_cmp)]
    if a == b {
        return Err(Error::ZeroWidthBracket { value: a });
    }

    if a < b { Ok((a, b)) } else { Ok((b, a)) }
}
