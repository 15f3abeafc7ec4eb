//! This module contains the continuous color spaces the picker moves between. Neither type rounds
//! anything: rounding to the integer units of the picker happens once, in [`ColorRecord`].
//!
//! [`ColorRecord`]: ../color/struct.ColorRecord.html
pub mod hslcolor;
pub mod rgbcolor;

// for convenience, use this namespace for the color objects
pub use self::hslcolor::HSLColor;
pub use self::rgbcolor::RGBColor;
