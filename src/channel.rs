//! The six color channels a picker can put on its plot and sliders, the two input modes they come
//! in, and the alpha input that sits beside them.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// The label of the alpha input.
pub const ALPHA_CHANNEL: &str = "α";

/// One of the six editable color channels. `R`, `G` and `B` make up the RGB family, `H`, `S`
/// and `L` the HSL family.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    /// Red, 0-255.
    R,
    /// Green, 0-255.
    G,
    /// Blue, 0-255.
    B,
    /// Hue, 0-360.
    H,
    /// Saturation, 0-100.
    S,
    /// Lightness, 0-100.
    L,
}

impl Channel {
    /// Every channel, RGB family first.
    pub const ALL: [Channel; 6] = [
        Channel::R,
        Channel::G,
        Channel::B,
        Channel::H,
        Channel::S,
        Channel::L,
    ];

    /// `true` for red, green and blue.
    pub fn is_rgb(self) -> bool {
        matches!(self, Channel::R | Channel::G | Channel::B)
    }

    /// `true` for hue, saturation and lightness.
    pub fn is_hsl(self) -> bool {
        matches!(self, Channel::H | Channel::S | Channel::L)
    }

    /// The input mode this channel belongs to.
    pub fn mode(self) -> ColorMode {
        if self.is_rgb() {
            ColorMode::Rgb
        } else {
            ColorMode::Hsl
        }
    }

    /// The largest value the channel's slider and numeric input accept.
    pub fn max(self) -> u16 {
        match self {
            Channel::R | Channel::G | Channel::B => 255,
            Channel::H => 360,
            Channel::S | Channel::L => 100,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Channel::R => "r",
            Channel::G => "g",
            Channel::B => "b",
            Channel::H => "h",
            Channel::S => "s",
            Channel::L => "l",
        }
    }
}

/// Free-function form of [`Channel::is_rgb`].
pub fn is_rgb_channel(channel: Channel) -> bool {
    channel.is_rgb()
}

/// Free-function form of [`Channel::is_hsl`].
pub fn is_hsl_channel(channel: Channel) -> bool {
    channel.is_hsl()
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A string that does not name a channel.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown color channel `{0}`")]
pub struct UnknownChannel(pub String);

impl FromStr for Channel {
    type Err = UnknownChannel;

    fn from_str(s: &str) -> Result<Channel, UnknownChannel> {
        Channel::ALL
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownChannel(s.to_string()))
    }
}

/// Which family of numeric inputs the picker shows.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Red, green and blue inputs.
    Rgb,
    /// Hue, saturation and lightness inputs.
    Hsl,
}

impl Default for ColorMode {
    fn default() -> ColorMode {
        ColorMode::Hsl
    }
}

/// Identifies a numeric input: one of the six channels, or alpha.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum InputId {
    /// A color channel input.
    Channel(Channel),
    /// The alpha input, edited as a percentage.
    Alpha,
}

impl InputId {
    /// The largest value the input accepts. Alpha is edited in percent.
    pub fn max(self) -> u16 {
        match self {
            InputId::Channel(channel) => channel.max(),
            InputId::Alpha => 100,
        }
    }
}

impl From<Channel> for InputId {
    fn from(channel: Channel) -> InputId {
        InputId::Channel(channel)
    }
}

impl fmt::Display for InputId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            InputId::Channel(channel) => fmt::Display::fmt(channel, f),
            InputId::Alpha => f.write_str(ALPHA_CHANNEL),
        }
    }
}
