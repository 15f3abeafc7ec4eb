//! Host-supplied picker settings.

use crate::channel::{Channel, ColorMode};

/// How a [`ColorPicker`](crate::picker::ColorPicker) starts out and what it lets the user do.
/// Keys are camelCase when (de)serialized, and any missing key takes its default.
///
/// # Example
/// ```
/// # use colorpickr::config::PickerConfig;
/// # use colorpickr::{Channel, ColorMode};
/// let config = PickerConfig {
///     initial_value: "rebeccapurple".to_string(),
///     channel: Channel::R,
///     ..PickerConfig::default()
/// };
/// assert!(config.alpha);
/// assert_eq!(config.initial_mode, ColorMode::Hsl);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PickerConfig {
    /// The CSS color the picker starts from, and goes back to on reset.
    pub initial_value: String,
    /// Whether opacity can be edited. When off, every assigned color is made fully opaque.
    pub alpha: bool,
    /// Whether reset-to-initial is offered.
    pub reset: bool,
    /// Which family of numeric inputs is shown first.
    pub initial_mode: ColorMode,
    /// The channel on the slider; the plot shows the other two of its family.
    pub channel: Channel,
    /// Ignore every user edit.
    pub read_only: bool,
}

impl Default for PickerConfig {
    fn default() -> PickerConfig {
        PickerConfig {
            initial_value: "#000".to_string(),
            alpha: true,
            reset: true,
            initial_mode: ColorMode::Hsl,
            channel: Channel::H,
            read_only: false,
        }
    }
}
