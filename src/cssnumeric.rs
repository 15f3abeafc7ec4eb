//! This file separates out the more tedious aspects of string parsing, in this case the numeric
//! tokens that appear inside CSS functional color notation: plain integers like `255`, decimals
//! like `0.8` or `.5`, and percentages like `40%` or `12.5%`. Exponent notation is not accepted.
//! (Source for CSS syntax: [https://www.w3.org/TR/css-color-3/](https://www.w3.org/TR/css-color-3/).)

use thiserror::Error;

/// A CSS numeric value. Either an integer, like 255, a decimal, like 0.8, or a percentage, like
/// 104% or 12.5%.
#[derive(Debug, PartialEq, Copy, Clone)]
pub(crate) enum CSSNumeric {
    /// A string of digits, such as "124", with an optional leading '+' or '-'.
    Integer(i64),
    /// Digits containing exactly one '.', such as "0.5" or ".5".
    Float(f64),
    /// An integer or decimal followed by '%'.
    Percentage(f64),
}

impl CSSNumeric {
    /// The bare number with the unit dropped: "40%" gives 40.
    pub(crate) fn value(self) -> f64 {
        match self {
            CSSNumeric::Integer(val) => val as f64,
            CSSNumeric::Float(val) | CSSNumeric::Percentage(val) => val,
        }
    }
}

/// An error in parsing a CSS color string.
#[derive(Debug, Clone, Hash, PartialEq, Eq, Error)]
#[allow(clippy::enum_variant_names)]
pub enum CSSParseError {
    /// Non-numeric characters were used in a string on which a parse into a number was attempted.
    #[error("unexpected non-numeric characters")]
    InvalidNumericCharacters,
    /// Invalid numeric syntax was used, such as multiple periods or a sign in the wrong place.
    #[error("invalid numeric syntax")]
    InvalidNumericSyntax,
    /// A general color syntax error, such as an unknown function or the wrong number of
    /// components.
    #[error("invalid color syntax")]
    InvalidColorSyntax,
    /// A `#` prefixed string that is not 3, 4, 6 or 8 hexadecimal digits.
    #[error("invalid hex color code")]
    InvalidHexCode,
    /// A bare word that is not a CSS color keyword.
    #[error("unknown color keyword `{0}`")]
    UnknownColorName(String),
}

/// Parses a CSS integer (a string of characters '0'-'9'), a CSS decimal (digits with one '.') or a
/// CSS percentage (either of those followed by '%'), each with an optional sign.
pub(crate) fn parse_css_number(num: &str) -> Result<CSSNumeric, CSSParseError> {
    if num.is_empty() {
        return Err(CSSParseError::InvalidNumericSyntax);
    }
    if !num.chars().all(|c| "0123456789-+.%".contains(c)) {
        return Err(CSSParseError::InvalidNumericCharacters);
    }
    let (is_positive, unsigned) = if let Some(rest) = num.strip_prefix('-') {
        (false, rest)
    } else if let Some(rest) = num.strip_prefix('+') {
        (true, rest)
    } else {
        (true, num)
    };
    let (body, is_percent) = match unsigned.strip_suffix('%') {
        Some(body) => (body, true),
        None => (unsigned, false),
    };
    // what's left has to be digits and at most one period, and at least one of them a digit
    if body.contains(|c| "-+%".contains(c))
        || body.matches('.').count() > 1
        || !body.chars().any(|c| c.is_ascii_digit())
    {
        return Err(CSSParseError::InvalidNumericSyntax);
    }
    let sign = if is_positive { 1.0 } else { -1.0 };

    if is_percent {
        let val: f64 = body
            .parse()
            .map_err(|_| CSSParseError::InvalidNumericSyntax)?;
        Ok(CSSNumeric::Percentage(sign * val))
    } else if body.contains('.') {
        let val: f64 = body
            .parse()
            .map_err(|_| CSSParseError::InvalidNumericSyntax)?;
        Ok(CSSNumeric::Float(sign * val))
    } else {
        // only digits are left, so the parse can only fail by overflowing: saturate, and let the
        // caller clamp
        let val: i64 = body.parse().unwrap_or(i64::MAX);
        Ok(CSSNumeric::Integer(if is_positive { val } else { -val }))
    }
}
