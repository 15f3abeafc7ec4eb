//! sRGB with continuous components. Parsed CSS colors land here before anything gets rounded, so
//! that a color given as `hsl()` keeps its exact hue when the record is built.

/// A color in sRGB, with each component ranging from 0 to 255 but not necessarily integral.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct RGBColor {
    /// The red component.
    pub r: f64,
    /// The green component.
    pub g: f64,
    /// The blue component.
    pub b: f64,
}

impl RGBColor {
    /// Builds a color from integral components.
    pub fn from_u8(r: u8, g: u8, b: u8) -> RGBColor {
        RGBColor {
            r: f64::from(r),
            g: f64::from(g),
            b: f64::from(b),
        }
    }

    /// Rounds each component to the nearest integer, clamping into 0-255 first.
    pub fn rounded(&self) -> (u8, u8, u8) {
        let round = |c: f64| num::clamp(c, 0.0, 255.0).round() as u8;
        (round(self.r), round(self.g), round(self.b))
    }

    /// The six-digit lowercase hex code of the rounded color, without a leading `#`.
    /// # Example
    /// ```
    /// # use colorpickr::colors::RGBColor;
    /// let orange = RGBColor { r: 255., g: 127.6, b: 0. };
    /// assert_eq!(orange.to_hex_code(), "ff8000");
    /// ```
    pub fn to_hex_code(&self) -> String {
        let (r, g, b) = self.rounded();
        format!("{:02x}{:02x}{:02x}", r, g, b)
    }
}
