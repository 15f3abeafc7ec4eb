//! This module contains [`Coord`], a point on the picker's 2-D plot, and the mapping between a
//! color's channels and that plot. Whichever channel is active gets the slider; the plot shows the
//! other two channels of its family:
//!
//! | active | x axis | y axis | x max | y max |
//! |--------|--------|--------|-------|-------|
//! | r      | b      | g      | 255   | 255   |
//! | g      | b      | r      | 255   | 255   |
//! | b      | r      | g      | 255   | 255   |
//! | h      | s      | l      | 100   | 100   |
//! | s      | h      | l      | 360   | 100   |
//! | l      | h      | s      | 360   | 100   |
//!
//! Each axis spans the natural range of the channel it shows, which is why the hue plot is 100
//! wide and the saturation and lightness plots are 360 wide. The y axis is flipped: larger channel
//! values sit higher on the plot, at smaller y.

use std::ops::{Add, Sub};

use crate::channel::Channel;
use crate::color::{ChannelValues, ColorRecord};

/// A point on a 2-D plane. Used both for plot positions and for pointer positions in pixels.
///
/// # Example
/// ```
/// # use colorpickr::Coord;
/// let pointer = Coord { x: 150., y: 40. };
/// let origin = Coord { x: 100., y: 10. };
/// assert_eq!(pointer - origin, Coord { x: 50., y: 30. });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize, Serialize)]
pub struct Coord {
    /// The horizontal axis.
    pub x: f64,
    /// The vertical axis, growing downwards.
    pub y: f64,
}

impl Add for Coord {
    type Output = Coord;
    fn add(self, rhs: Coord) -> Coord {
        Coord {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl Sub for Coord {
    type Output = Coord;
    fn sub(self, rhs: Coord) -> Coord {
        Coord {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

/// The extent of a plot: coordinates run from 0 to `xmax` and from 0 to `ymax`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Bounds {
    /// Largest x value.
    pub xmax: f64,
    /// Largest y value.
    pub ymax: f64,
}

/// A position on a plot together with that plot's extent.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct PlotCoords {
    /// Largest x value.
    pub xmax: f64,
    /// Largest y value.
    pub ymax: f64,
    /// Horizontal position.
    pub x: f64,
    /// Vertical position.
    pub y: f64,
}

impl PlotCoords {
    /// The position alone.
    pub fn coord(&self) -> Coord {
        Coord {
            x: self.x,
            y: self.y,
        }
    }

    /// The extent alone.
    pub fn bounds(&self) -> Bounds {
        Bounds {
            xmax: self.xmax,
            ymax: self.ymax,
        }
    }
}

/// The channels shown on the x and y axes when `channel` is active.
pub fn plot_axes(channel: Channel) -> (Channel, Channel) {
    match channel {
        Channel::R => (Channel::B, Channel::G),
        Channel::G => (Channel::B, Channel::R),
        Channel::B => (Channel::R, Channel::G),
        Channel::H => (Channel::S, Channel::L),
        Channel::S => (Channel::H, Channel::L),
        Channel::L => (Channel::H, Channel::S),
    }
}

/// The extent of the plot shown when `channel` is active.
pub fn plot_bounds(channel: Channel) -> Bounds {
    match channel {
        Channel::R | Channel::G | Channel::B => Bounds {
            xmax: 255.,
            ymax: 255.,
        },
        Channel::H => Bounds {
            xmax: 100.,
            ymax: 100.,
        },
        Channel::S | Channel::L => Bounds {
            xmax: 360.,
            ymax: 100.,
        },
    }
}

/// Places a color on the plot for the active channel.
/// # Example
/// ```
/// # use colorpickr::{channel_to_coords, parse_color, Channel};
/// let plot = channel_to_coords(Channel::S, &parse_color("hsl(200, 30%, 80%)"));
/// assert_eq!((plot.x, plot.y, plot.xmax, plot.ymax), (200., 20., 360., 100.));
/// ```
pub fn channel_to_coords(channel: Channel, color: &ColorRecord) -> PlotCoords {
    let (x_channel, y_channel) = plot_axes(channel);
    let bounds = plot_bounds(channel);
    PlotCoords {
        xmax: bounds.xmax,
        ymax: bounds.ymax,
        x: f64::from(color.get(x_channel)),
        y: bounds.ymax - f64::from(color.get(y_channel)),
    }
}

/// Reads the two sibling channel values off a plot position, rounding the position to whole units
/// first. This is the inverse of [`channel_to_coords`]; the result only mentions the two channels
/// on the plot's axes.
pub fn coords_to_channel_values(channel: Channel, pos: Coord) -> ChannelValues {
    let (x_channel, y_channel) = plot_axes(channel);
    let ymax = plot_bounds(channel).ymax as i64;
    ChannelValues::new()
        .with(x_channel, pos.x.round() as i64)
        .with(y_channel, ymax - pos.y.round() as i64)
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use crate::color::{parse_color, Hsl, Rgb};

    #[test]
    fn test_mapping_table() {
        let color = parse_color("rgb(10, 20, 30)");
        let plot = channel_to_coords(Channel::R, &color);
        assert_eq!(plot.coord(), Coord { x: 30., y: 235. });
        assert_eq!(plot.bounds(), Bounds { xmax: 255., ymax: 255. });
        assert_eq!(channel_to_coords(Channel::G, &color).coord(), Coord { x: 30., y: 245. });
        assert_eq!(channel_to_coords(Channel::B, &color).coord(), Coord { x: 10., y: 235. });

        let color = parse_color("hsl(200, 30%, 80%)");
        let plot = channel_to_coords(Channel::H, &color);
        assert_eq!(plot.coord(), Coord { x: 30., y: 20. });
        assert_eq!(plot.bounds(), Bounds { xmax: 100., ymax: 100. });
        let plot = channel_to_coords(Channel::L, &color);
        assert_eq!(plot.coord(), Coord { x: 200., y: 70. });
        assert_eq!(plot.bounds(), Bounds { xmax: 360., ymax: 100. });
    }

    #[test]
    fn test_coords_to_values() {
        let values = coords_to_channel_values(Channel::R, Coord { x: 12.4, y: 55.6 });
        assert_eq!(values.get(Channel::B), Some(12));
        assert_eq!(values.get(Channel::G), Some(199));
        assert_eq!(values.get(Channel::R), None);

        let values = coords_to_channel_values(Channel::S, Coord { x: 359.5, y: 0. });
        assert_eq!(values.get(Channel::H), Some(360));
        assert_eq!(values.get(Channel::L), Some(100));
    }

    #[test]
    fn test_round_trip_through_plot() {
        let colors = ["#000", "#fff", "rebeccapurple", "hsl(300, 80%, 25%)", "rgb(1, 254, 77)"];
        for css in colors.iter() {
            let color = parse_color(css);
            for channel in Channel::ALL.iter().copied() {
                let plot = channel_to_coords(channel, &color);
                let values = coords_to_channel_values(channel, plot.coord());
                let (x_channel, y_channel) = plot_axes(channel);
                let expected = ChannelValues::new()
                    .with(x_channel, i64::from(color.get(x_channel)))
                    .with(y_channel, i64::from(color.get(y_channel)));
                assert_eq!(values, expected);
                // applying the plot's own position changes nothing
                assert_eq!(color.apply(&values).hsl(), color.hsl());
            }
        }
    }

    #[test]
    fn test_every_sibling_pair_round_trips() {
        let check = |channel: Channel, color: &ColorRecord| {
            let (x_channel, y_channel) = plot_axes(channel);
            let values = coords_to_channel_values(channel, channel_to_coords(channel, color).coord());
            assert_eq!(values.get(x_channel), Some(i64::from(color.get(x_channel))));
            assert_eq!(values.get(y_channel), Some(i64::from(color.get(y_channel))));
            assert_eq!(values.iter().count(), 2);
        };
        for channel in [Channel::R, Channel::G, Channel::B].iter().copied() {
            let (x_channel, y_channel) = plot_axes(channel);
            for x in 0..=255 {
                for y in 0..=255 {
                    let values = ChannelValues::new().with(x_channel, x).with(y_channel, y);
                    let mut rgb = [0u8; 3];
                    for (c, val) in values.iter() {
                        rgb[c as usize] = val as u8;
                    }
                    let color = ColorRecord::from_rgb(
                        Rgb {
                            r: rgb[0],
                            g: rgb[1],
                            b: rgb[2],
                        },
                        1.0,
                    );
                    check(channel, &color);
                }
            }
        }
        for channel in [Channel::H, Channel::S, Channel::L].iter().copied() {
            let (x_channel, y_channel) = plot_axes(channel);
            for x in 0..=i64::from(x_channel.max()) {
                for y in 0..=i64::from(y_channel.max()) {
                    let hsl = ChannelValues::new().with(x_channel, x).with(y_channel, y);
                    let get = |c: Channel| hsl.get(c).unwrap_or(0);
                    // 360 is the same hue as 0, so it can't come back as itself
                    if get(Channel::H) == 360 {
                        continue;
                    }
                    let color = ColorRecord::from_hsl(
                        Hsl {
                            h: get(Channel::H) as u16,
                            s: get(Channel::S) as u8,
                            l: get(Channel::L) as u8,
                        },
                        1.0,
                    );
                    check(channel, &color);
                }
            }
        }
    }

    #[test]
    fn test_axes_stay_in_family() {
        for channel in Channel::ALL.iter().copied() {
            let (x, y) = plot_axes(channel);
            assert_ne!(x, channel);
            assert_ne!(y, channel);
            assert_eq!(x.is_rgb(), channel.is_rgb());
            assert_eq!(y.is_rgb(), channel.is_rgb());
        }
    }
}
