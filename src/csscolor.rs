//! This file uses the CSS numeric parsing in `cssnumeric.rs` to validate and parse the CSS color
//! notations a user is likely to type or a host is likely to hand over: hex codes, `rgb()`/`rgba()`,
//! `hsl()`/`hsla()`, the named keywords and `transparent`. Arithmetic, `calc()` and the newer color
//! functions are not supported. CSS Color Level 3 describes the grammar:
//! [https://www.w3.org/TR/css-color-3/](https://www.w3.org/TR/css-color-3/).
//!
//! Out-of-range components are clamped rather than rejected, as browsers do: `rgb(300, 0, 0)` is
//! red. Leading or trailing whitespace makes a string invalid.

use std::str::FromStr;

use regex::Regex;

use crate::colors::{HSLColor, RGBColor};
use crate::cssnumeric::{parse_css_number, CSSNumeric, CSSParseError};
use crate::named_colors;

lazy_static! {
    // three components separated by commas or whitespace, then an optional alpha after ',' or '/'
    static ref RGB_FUNCTION: Regex = Regex::new(
        r"^(?i:rgba?)\(\s*([^\s,/()]+)(?:\s*,\s*|\s+)([^\s,/()]+)(?:\s*,\s*|\s+)([^\s,/()]+)\s*(?:[,/]\s*([^\s,/()]+)\s*)?\)$"
    )
    .unwrap();
    static ref HSL_FUNCTION: Regex = Regex::new(
        r"^(?i:hsla?)\(\s*([^\s,/()]+)(?:\s*,\s*|\s+)([^\s,/()]+)(?:\s*,\s*|\s+)([^\s,/()]+)\s*(?:[,/]\s*([^\s,/()]+)\s*)?\)$"
    )
    .unwrap();
    static ref KEYWORD: Regex = Regex::new(r"^[A-Za-z]+$").unwrap();
}

/// A successfully parsed CSS color, kept in the model it was written in so that nothing is
/// rounded before the caller decides to.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum CssColor {
    /// Written in sRGB terms: a hex code, `rgb()`/`rgba()`, or a keyword.
    Rgb {
        /// The color itself.
        color: RGBColor,
        /// Opacity from 0 to 1.
        alpha: f64,
    },
    /// Written with `hsl()`/`hsla()`.
    Hsl {
        /// The color itself.
        color: HSLColor,
        /// Opacity from 0 to 1.
        alpha: f64,
    },
}

impl CssColor {
    /// The opacity, from 0 to 1. Notations without an alpha channel are fully opaque.
    pub fn alpha(&self) -> f64 {
        match *self {
            CssColor::Rgb { alpha, .. } | CssColor::Hsl { alpha, .. } => alpha,
        }
    }

    /// The color as unrounded sRGB.
    pub fn to_rgb(&self) -> RGBColor {
        match *self {
            CssColor::Rgb { color, .. } => color,
            CssColor::Hsl { color, .. } => color.into(),
        }
    }

    /// The color as unrounded HSL. A color written as `hsl()` comes back exactly as written.
    pub fn to_hsl(&self) -> HSLColor {
        match *self {
            CssColor::Rgb { color, .. } => color.into(),
            CssColor::Hsl { color, .. } => color,
        }
    }
}

impl FromStr for CssColor {
    type Err = CSSParseError;

    fn from_str(css: &str) -> Result<CssColor, CSSParseError> {
        if let Some(digits) = css.strip_prefix('#') {
            return parse_hex(digits);
        }
        if let Some(caps) = RGB_FUNCTION.captures(css) {
            let color = RGBColor {
                r: rgb_component(&caps[1])?,
                g: rgb_component(&caps[2])?,
                b: rgb_component(&caps[3])?,
            };
            let alpha = caps.get(4).map_or(Ok(1.0), |a| alpha_component(a.as_str()))?;
            return Ok(CssColor::Rgb { color, alpha });
        }
        if let Some(caps) = HSL_FUNCTION.captures(css) {
            let color = HSLColor {
                h: hue_component(&caps[1])?,
                s: percent_component(&caps[2])?,
                l: percent_component(&caps[3])?,
            };
            let alpha = caps.get(4).map_or(Ok(1.0), |a| alpha_component(a.as_str()))?;
            return Ok(CssColor::Hsl { color, alpha });
        }
        if KEYWORD.is_match(css) {
            if css.eq_ignore_ascii_case("transparent") {
                return Ok(CssColor::Rgb {
                    color: RGBColor::from_u8(0, 0, 0),
                    alpha: 0.0,
                });
            }
            return named_colors::lookup(css)
                .map(|(r, g, b)| CssColor::Rgb {
                    color: RGBColor::from_u8(r, g, b),
                    alpha: 1.0,
                })
                .ok_or_else(|| CSSParseError::UnknownColorName(css.to_string()));
        }
        Err(CSSParseError::InvalidColorSyntax)
    }
}

/// Parses any supported CSS color notation.
/// # Example
/// ```
/// # use colorpickr::parse_css_color;
/// let teal = parse_css_color("rgb(0 128 128 / 50%)").unwrap();
/// assert_eq!(teal.to_rgb().rounded(), (0, 128, 128));
/// assert_eq!(teal.alpha(), 0.5);
/// assert!(parse_css_color("rgb(0, 128)").is_err());
/// ```
pub fn parse_css_color(css: &str) -> Result<CssColor, CSSParseError> {
    css.parse()
}

/// Returns `true` if the string is a color this module can parse.
pub fn is_valid_css_color(css: &str) -> bool {
    parse_css_color(css).is_ok()
}

/// Parses the digits after a `#`: `rgb`, `rgba`, `rrggbb` or `rrggbbaa`, in either case.
fn parse_hex(digits: &str) -> Result<CssColor, CSSParseError> {
    let nibble = |c: u8| (c as char).to_digit(16).map(|d| d as u8);
    let bytes = digits.as_bytes();
    let components: Option<Vec<u8>> = match bytes.len() {
        // each digit is doubled: "a" means "aa"
        3 | 4 => bytes.iter().map(|&c| nibble(c).map(|n| n * 17)).collect(),
        6 | 8 => bytes
            .chunks(2)
            .map(|pair| Some(nibble(pair[0])? << 4 | nibble(pair[1])?))
            .collect(),
        _ => return Err(CSSParseError::InvalidHexCode),
    };
    let components = components.ok_or(CSSParseError::InvalidHexCode)?;
    let alpha = components
        .get(3)
        .map_or(1.0, |&a| f64::from(a) / 255.0);
    Ok(CssColor::Rgb {
        color: RGBColor::from_u8(components[0], components[1], components[2]),
        alpha,
    })
}

/// A red, green or blue component: a number from 0 to 255 or a percentage, clamped.
fn rgb_component(token: &str) -> Result<f64, CSSParseError> {
    Ok(match parse_css_number(token)? {
        CSSNumeric::Percentage(val) => (num::clamp(val, 0.0, 100.0) * 2.55).round(),
        other => num::clamp(other.value(), 0.0, 255.0),
    })
}

/// An alpha component: a number from 0 to 1 or a percentage, clamped.
fn alpha_component(token: &str) -> Result<f64, CSSParseError> {
    Ok(match parse_css_number(token)? {
        CSSNumeric::Percentage(val) => num::clamp(val / 100.0, 0.0, 1.0),
        other => num::clamp(other.value(), 0.0, 1.0),
    })
}

/// A hue in degrees, with or without the `deg` unit, wrapped into 0-360.
fn hue_component(token: &str) -> Result<f64, CSSParseError> {
    let token = token.strip_suffix("deg").unwrap_or(token);
    match parse_css_number(token)? {
        CSSNumeric::Percentage(_) => Err(CSSParseError::InvalidColorSyntax),
        other => Ok(((other.value() % 360.0) + 360.0) % 360.0),
    }
}

/// Saturation or lightness, which CSS only allows as a percentage.
fn percent_component(token: &str) -> Result<f64, CSSParseError> {
    match parse_css_number(token)? {
        CSSNumeric::Percentage(val) => Ok(num::clamp(val, 0.0, 100.0)),
        _ => Err(CSSParseError::InvalidColorSyntax),
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    fn rgb_of(css: &str) -> (u8, u8, u8) {
        parse_css_color(css).unwrap().to_rgb().rounded()
    }

    #[test]
    fn test_rgb_num_parsing() {
        assert_eq!(104., rgb_component("104").unwrap());
        assert_eq!(255., rgb_component("234923").unwrap());
        assert_eq!(0., rgb_component("-12").unwrap());
        assert_eq!(122., rgb_component("48%").unwrap());
        assert_eq!(255., rgb_component("115%").unwrap());
        assert_eq!(
            Err(CSSParseError::InvalidNumericCharacters),
            rgb_component("abc")
        );
        assert_eq!(
            Err(CSSParseError::InvalidNumericSyntax),
            rgb_component("123%%")
        );
    }

    #[test]
    fn test_rgb_str_parsing() {
        assert_eq!(rgb_of("rgb(125, 20%, 0)"), (125, 51, 0));
        // clamping in every direction
        assert_eq!(rgb_of("rgb(-125, -20%, 300)"), (0, 0, 255));
        assert_eq!(
            rgb_of("rgb(99999999999999999999, 0, -99999999999999999999)"),
            (255, 0, 0)
        );
        assert_eq!(
            parse_css_color("hsl(0, 50%, 50%, 99999999999999999999)")
                .unwrap()
                .alpha(),
            1.0
        );
        // modern space-separated syntax
        assert_eq!(rgb_of("rgb(1 2 3)"), (1, 2, 3));
        assert_eq!(rgb_of("RGBA(10,20,30,0.5)"), (10, 20, 30));
        assert_eq!(
            parse_css_color("rgba(10, 20, 30, 0.25)").unwrap().alpha(),
            0.25
        );
        assert_eq!(parse_css_color("rgb(10 20 30 / 150%)").unwrap().alpha(), 1.0);
        assert_eq!(
            Err(CSSParseError::InvalidColorSyntax),
            parse_css_color("rgb(123, 123, 41, 22, 1)")
        );
        assert_eq!(
            Err(CSSParseError::InvalidColorSyntax),
            parse_css_color("rgb(())")
        );
        assert_eq!(
            Err(CSSParseError::InvalidNumericCharacters),
            parse_css_color("rgb(1e2, 0, 0)")
        );
    }

    #[test]
    fn test_hex_parsing() {
        assert_eq!(rgb_of("#abc"), (0xaa, 0xbb, 0xcc));
        assert_eq!(rgb_of("#AABBCC"), (0xaa, 0xbb, 0xcc));
        assert_eq!(rgb_of("#12345678"), (0x12, 0x34, 0x56));
        assert_eq!(parse_css_color("#12345678").unwrap().alpha(), 120. / 255.);
        assert_eq!(parse_css_color("#0008").unwrap().alpha(), 136. / 255.);
        assert_eq!(parse_css_color("#abc").unwrap().alpha(), 1.0);
        assert_eq!(parse_css_color("#abcde"), Err(CSSParseError::InvalidHexCode));
        assert_eq!(parse_css_color("#ggg"), Err(CSSParseError::InvalidHexCode));
        assert_eq!(parse_css_color("#"), Err(CSSParseError::InvalidHexCode));
        // no hash, no hex
        assert_eq!(
            parse_css_color("abc"),
            Err(CSSParseError::UnknownColorName("abc".to_string()))
        );
    }

    #[test]
    fn test_hsl_parsing() {
        let css = parse_css_color("hsl(120, 50%, 50%)").unwrap();
        assert_eq!(
            css,
            CssColor::Hsl {
                color: HSLColor {
                    h: 120.,
                    s: 50.,
                    l: 50.
                },
                alpha: 1.0
            }
        );
        assert_eq!(css.to_rgb().rounded(), (64, 191, 64));
        // hue wraps, and takes an optional unit
        assert_eq!(parse_css_color("hsl(-90deg 100% 50%)").unwrap().to_hsl().h, 270.);
        assert_eq!(parse_css_color("hsl(480, 100%, 50%)").unwrap().to_hsl().h, 120.);
        assert_eq!(parse_css_color("hsla(0, 0%, 0%, 40%)").unwrap().alpha(), 0.4);
        // saturation and lightness need percent signs
        assert_eq!(
            parse_css_color("hsl(120, 50, 50)"),
            Err(CSSParseError::InvalidColorSyntax)
        );
    }

    #[test]
    fn test_keywords() {
        assert_eq!(rgb_of("rebeccapurple"), (102, 51, 153));
        assert_eq!(rgb_of("Red"), (255, 0, 0));
        assert_eq!(parse_css_color("transparent").unwrap().alpha(), 0.0);
        assert!(!is_valid_css_color("not-a-color"));
        assert!(!is_valid_css_color("blurple"));
        assert!(!is_valid_css_color(" red"));
        assert!(!is_valid_css_color(""));
    }
}
