//! This file implements HSL as it is used on the web: a simple transformation of sRGB that creates a
//! cylindrical space. HSL has the same problems with perceptual uniformity as sRGB does, but it
//! maps nicely onto the controls of a color picker: one slider for hue, two axes for how vivid and
//! how bright the color is. *Lightness* in HSL runs from black, through the fully saturated color
//! in the middle, to white at the end.
//!
//! This implementation is hexagonal: values are first put on a hexagon, and then that hexagon is
//! "squeezed" into a circle, which is exactly what CSS does. Converting gray into HSL gives a hue of
//! 0 degrees, although any hue could be used in its place.
//!
//! Unlike a lot of libraries, saturation and lightness here run from 0 to 100, the same units the
//! picker shows and CSS writes as percentages.

use std::f64;

use super::rgbcolor::RGBColor;

/// A color in the HSL color space, a direct transformation of sRGB. Nothing is rounded: use this to
/// move between RGB and HSL without losing precision.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct HSLColor {
    /// The hue component, in degrees. Ranges from 0 to 360.
    pub h: f64,
    /// The saturation component. Ranges from 0 to 100.
    pub s: f64,
    /// The lightness component. Ranges from 0 to 100. Defined as the average of the largest and
    /// smallest RGB components, which sacrifices accuracy for convenience.
    pub l: f64,
}

impl From<RGBColor> for HSLColor {
    fn from(rgb: RGBColor) -> HSLColor {
        let (r, g, b) = (rgb.r / 255.0, rgb.g / 255.0, rgb.b / 255.0);

        // if you tilt the RGB cube and project it into a hexagon, the equivalent of radius is simply
        // the largest component minus the smallest one
        // More info: https://en.wikipedia.org/wiki/HSL_and_HSV#Formal_derivation
        let max_c = r.max(g).max(b);
        let min_c = r.min(g).min(b);
        let chroma = max_c - min_c;

        // hue is the proportion of the way around the hexagon, treated as degrees
        let hue = if chroma == 0.0 {
            // undefined for gray: 0 by convention
            0.0
        } else if max_c == r {
            // red sector: adding green moves up the hexagon, adding blue moves down
            ((g - b) / chroma % 6.0) * 60.0
        } else if max_c == g {
            ((b - r) / chroma) * 60.0 + 120.0
        } else {
            ((r - g) / chroma) * 60.0 + 240.0
        };
        // the red sector goes negative when blue outweighs green
        let hue = if hue < 0.0 { hue + 360.0 } else { hue };

        let lightness = (max_c + min_c) / 2.0;
        // saturation is chroma relative to the largest chroma possible at this lightness
        let saturation = if lightness == 1.0 || lightness == 0.0 {
            0.0
        } else {
            chroma / (1.0 - (2.0 * lightness - 1.0).abs())
        };

        HSLColor {
            h: hue,
            s: saturation * 100.0,
            l: lightness * 100.0,
        }
    }
}

impl From<HSLColor> for RGBColor {
    fn from(hsl: HSLColor) -> RGBColor {
        let s = hsl.s / 100.0;
        let l = hsl.l / 100.0;
        let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;

        // the second-largest RGB value when the smallest is 0
        let x = chroma * (1.0 - ((hsl.h / 60.0) % 2.0 - 1.0).abs());
        // which side of the hexagon we're on decides which two components are largest
        let (r1, g1, b1) = if hsl.h <= 60.0 {
            (chroma, x, 0.0)
        } else if hsl.h <= 120.0 {
            (x, chroma, 0.0)
        } else if hsl.h <= 180.0 {
            (0.0, chroma, x)
        } else if hsl.h <= 240.0 {
            (0.0, x, chroma)
        } else if hsl.h <= 300.0 {
            (x, 0.0, chroma)
        } else {
            (chroma, 0.0, x)
        };
        // lift every component by the same amount to reach the right lightness
        let offset = l - chroma / 2.0;
        RGBColor {
            r: (r1 + offset) * 255.0,
            g: (g1 + offset) * 255.0,
            b: (b1 + offset) * 255.0,
        }
    }
}
