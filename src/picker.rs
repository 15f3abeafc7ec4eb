//! This module contains [`ColorPicker`], the state a host widget keeps for one picker. It owns the
//! single current [`ColorRecord`] and a separate copy of the initial one, and every input the widget
//! has (sliders, numeric fields, the hex field and the plot) funnels into it through one of its
//! methods. After each change the picker hands a [`ChangeData`] snapshot to the host's callback.
//!
//! The plot is not driven directly: the host binds a [`DragController`](crate::drag::DragController)
//! to the plot surface with [`ColorPicker::plot_bounds`] and forwards its positions to
//! [`ColorPicker::on_xy_change`].

use std::fmt;

use tracing::warn;

use crate::channel::{Channel, ColorMode, InputId};
use crate::color::{normalize_string, parse_color, rgba_color, to_number, ChannelValues, ColorRecord};
use crate::config::PickerConfig;
use crate::coord::{channel_to_coords, coords_to_channel_values, plot_bounds, Bounds, Coord, PlotCoords};
use crate::csscolor::parse_css_color;

/// What the host is told after every change.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeData {
    /// The current color.
    #[serde(flatten)]
    pub color: ColorRecord,
    /// Whether the last edit came from valid hex input.
    pub hex_input: bool,
    /// The numeric input family on display.
    pub mode: ColorMode,
    /// The active channel.
    pub channel: Channel,
}

type ChangeCallback = Box<dyn FnMut(&ChangeData)>;

/// The authoritative color state behind one picker widget.
///
/// # Example
/// ```
/// # use colorpickr::picker::ColorPicker;
/// # use colorpickr::config::PickerConfig;
/// # use colorpickr::{Channel, Coord};
/// let mut picker = ColorPicker::new(PickerConfig {
///     initial_value: "#ff0000".to_string(),
///     channel: Channel::H,
///     ..PickerConfig::default()
/// });
/// // drag to the bottom-left corner of the hue plot: no saturation, no lightness
/// picker.on_xy_change(Coord { x: 0., y: 100. });
/// assert_eq!(picker.color().hex(), "000000");
///
/// picker.reset();
/// assert_eq!(picker.color().hex(), "ff0000");
/// ```
pub struct ColorPicker {
    config: PickerConfig,
    color: ColorRecord,
    initial: ColorRecord,
    mode: ColorMode,
    channel: Channel,
    hex_input: bool,
    // raw text in the hex field while the user is typing
    hex_draft: Option<String>,
    on_change: Option<ChangeCallback>,
}

impl fmt::Debug for ColorPicker {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("ColorPicker")
            .field("config", &self.config)
            .field("color", &self.color)
            .field("initial", &self.initial)
            .field("mode", &self.mode)
            .field("channel", &self.channel)
            .field("hex_input", &self.hex_input)
            .field("hex_draft", &self.hex_draft)
            .finish()
    }
}

impl ColorPicker {
    /// Creates a picker showing `config.initial_value`.
    pub fn new(config: PickerConfig) -> ColorPicker {
        let initial = assign_color(&config, &config.initial_value);
        ColorPicker {
            color: initial.clone(),
            initial,
            mode: config.initial_mode,
            channel: config.channel,
            hex_input: false,
            hex_draft: None,
            on_change: None,
            config,
        }
    }

    /// Registers the host's change callback. It is first called on the next change.
    pub fn with_on_change<F>(mut self, on_change: F) -> ColorPicker
    where
        F: FnMut(&ChangeData) + 'static,
    {
        self.on_change = Some(Box::new(on_change));
        self
    }

    /// The settings the picker was created with.
    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    /// The current color.
    pub fn color(&self) -> &ColorRecord {
        &self.color
    }

    /// The color reset goes back to.
    pub fn initial(&self) -> &ColorRecord {
        &self.initial
    }

    /// The numeric input family on display.
    pub fn mode(&self) -> ColorMode {
        self.mode
    }

    /// The channel on the slider.
    pub fn channel(&self) -> Channel {
        self.channel
    }

    /// Whether the last edit came from valid hex input.
    pub fn hex_input(&self) -> bool {
        self.hex_input
    }

    /// What the hex field shows: the user's text while they are typing, the color's code otherwise.
    pub fn hex_field(&self) -> &str {
        self.hex_draft.as_deref().unwrap_or_else(|| self.color.hex())
    }

    /// Where the current color sits on the plot.
    pub fn plot(&self) -> PlotCoords {
        channel_to_coords(self.channel, &self.color)
    }

    /// The range the plot's drag controller should scale into.
    pub fn plot_bounds(&self) -> Bounds {
        plot_bounds(self.channel)
    }

    /// Whether the plot's indicator should be drawn dark.
    pub fn is_light_surface(&self) -> bool {
        self.color.is_light_surface()
    }

    /// The slider's value: the active channel of the current color.
    pub fn slider_value(&self) -> u16 {
        self.color.get(self.channel)
    }

    /// Opacity in whole percent, as the alpha input shows it.
    pub fn alpha_percent(&self) -> u8 {
        (self.color.a() * 100.0).round() as u8
    }

    /// The current color as a CSS `rgba()` string, for the swatch.
    pub fn swatch_css(&self) -> String {
        rgba_color(
            self.color.r(),
            self.color.g(),
            self.color.b(),
            f64::from(self.alpha_percent()),
        )
    }

    /// Replaces some channels of the current color. Unmentioned channels keep their values.
    pub fn change_channels(&mut self, values: ChannelValues) {
        if self.config.read_only {
            return;
        }
        self.color = self.color.apply(&values);
        self.hex_draft = None;
        self.hex_input = false;
        self.emit();
    }

    /// Handles an edit to one numeric input. Alpha is given in percent.
    pub fn set_channel_value(&mut self, input: InputId, value: i64) {
        match input {
            InputId::Channel(channel) => self.change_channels(ChannelValues::new().with(channel, value)),
            InputId::Alpha => self.change_alpha(value),
        }
    }

    /// Sets the opacity, in percent. Ignored when alpha is disabled.
    pub fn change_alpha(&mut self, percent: i64) {
        if self.config.read_only || !self.config.alpha {
            return;
        }
        let percent = num::clamp(percent, 0, 100);
        self.color = self.color.with_alpha(percent as f64 / 100.0);
        self.hex_draft = None;
        self.hex_input = false;
        self.emit();
    }

    /// Handles the channel slider's text value.
    pub fn on_slider_change(&mut self, text: &str) {
        self.set_channel_value(InputId::Channel(self.channel), to_number(text));
    }

    /// Handles the alpha slider's text value, in percent.
    pub fn on_alpha_slider_change(&mut self, text: &str) {
        self.change_alpha(to_number(text));
    }

    /// Handles typing in the hex field. The text is kept as typed; if it makes a valid color, that
    /// color becomes current, otherwise the current color stays.
    pub fn change_hex(&mut self, text: &str) {
        if self.config.read_only {
            return;
        }
        let value = normalize_string(text);
        let css = format!("#{}", value);
        let valid = parse_css_color(&css).is_ok();
        if valid {
            self.color = assign_color(&self.config, &css);
        }
        self.hex_draft = Some(value);
        self.hex_input = valid;
        self.emit();
    }

    /// Handles the hex field losing focus. Whatever is left in it is taken as the color, and text
    /// that isn't a valid color gives black.
    pub fn blur_hex(&mut self, text: &str) {
        if self.config.read_only {
            return;
        }
        let css = format!("#{}", normalize_string(text));
        self.color = assign_color(&self.config, &css);
        self.hex_draft = None;
        self.hex_input = true;
        self.emit();
    }

    /// Handles a position from the plot's drag controller, in [`ColorPicker::plot_bounds`] units.
    pub fn on_xy_change(&mut self, pos: Coord) {
        self.change_channels(coords_to_channel_values(self.channel, pos));
    }

    /// Switches the numeric inputs between RGB and HSL.
    pub fn set_mode(&mut self, mode: ColorMode) {
        self.mode = mode;
        self.hex_input = false;
        self.emit();
    }

    /// Changes which channel is on the slider.
    pub fn set_channel(&mut self, channel: Channel) {
        self.channel = channel;
        self.hex_input = false;
        self.emit();
    }

    /// Goes back to the initial color, if reset is enabled.
    pub fn reset(&mut self) {
        if self.config.read_only || !self.config.reset {
            return;
        }
        self.color = self.initial.clone();
        self.hex_draft = None;
        self.emit();
    }

    /// Sets the color from the host's side, optionally making it the new reset target. Works on
    /// read-only pickers too.
    pub fn override_value(&mut self, css: &str, update_initial: bool) {
        let next = assign_color(&self.config, css);
        if update_initial {
            self.initial = next.clone();
        }
        self.color = next;
        self.hex_draft = None;
        self.emit();
    }

    /// The snapshot the change callback receives.
    pub fn change_data(&self) -> ChangeData {
        ChangeData {
            color: self.color.clone(),
            hex_input: self.hex_input,
            mode: self.mode,
            channel: self.channel,
        }
    }

    fn emit(&mut self) {
        let data = self.change_data();
        if let Some(on_change) = self.on_change.as_mut() {
            on_change(&data);
        }
    }
}

/// Parses a color for the picker, making it opaque if alpha is disabled.
fn assign_color(config: &PickerConfig, css: &str) -> ColorRecord {
    let color = parse_color(css);
    if !config.alpha && color.a() < 1.0 {
        warn!(
            input = css,
            alpha = color.a(),
            "color has an alpha channel but alpha is disabled, resetting it to 1"
        );
        return color.with_alpha(1.0);
    }
    color
}
