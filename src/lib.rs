//! Colorpickr is the engine behind an interactive color picker widget. It has two halves that know
//! nothing about each other, and a small piece of state that joins them:
//!
//! - The color model engine ([`color`], [`coord`] and the parsers under them) turns any CSS color
//!   string into a [`ColorRecord`] that carries RGB, HSL and a hex code in step with each other.
//!   It also maps a color onto the 2-D plot of whichever [`Channel`] is active, and maps plot
//!   positions back into channel values. Everything here is pure and never fails: bad input becomes
//!   black, and out-of-range numbers are clamped.
//! - The [`drag`] controller turns pointer and touch events on the plot's surface into positions in
//!   the plot's own range, and holds global pointer listeners only for as long as a drag lasts.
//! - A [`ColorPicker`](picker::ColorPicker) owns the current color, takes edits from every input the
//!   widget has, and reports each change to the host.
//!
//! Rendering is left to the host.
//!
//! # Example
//! ```
//! use colorpickr::{channel_to_coords, coords_to_channel_values, parse_color, Channel};
//!
//! let color = parse_color("hsl(200, 30%, 80%)");
//! let plot = channel_to_coords(Channel::L, &color);
//! // the lightness plot shows hue across and saturation up
//! assert_eq!((plot.x, plot.y), (200., 70.));
//!
//! let moved = color.apply(&coords_to_channel_values(Channel::L, plot.coord()));
//! assert_eq!(moved.hsl(), color.hsl());
//! ```

// we don't mess around with documentation
#![deny(missing_docs)]

extern crate num;
extern crate serde;
#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate maplit;

pub mod channel;
pub mod color;
pub mod colors;
pub mod config;
pub mod coord;
pub mod csscolor;
mod cssnumeric;
pub mod drag;
mod named_colors;
pub mod picker;
pub mod prelude;

pub use channel::{is_hsl_channel, is_rgb_channel, Channel, ColorMode, InputId, ALPHA_CHANNEL};
pub use color::{
    hsl_to_rgb, is_light_surface, normalize_hex, normalize_string, parse_color, rgb_to_hex,
    rgb_to_hsl, rgba_color, to_number, ChannelValues, ColorRecord, Hsl, Rgb,
};
pub use coord::{channel_to_coords, coords_to_channel_values, Bounds, Coord, PlotCoords};
pub use csscolor::{is_valid_css_color, parse_css_color, CssColor};
pub use cssnumeric::CSSParseError;
