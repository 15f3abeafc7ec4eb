//! This module brings the pieces a host needs to wire up a picker under a single namespace: the
//! color record and its parser, channels and modes, plot coordinates, the drag controller and its
//! host-side traits, and the picker itself. The conversion functions and the continuous color types
//! in [`colors`](crate::colors) are not included.

pub use crate::channel::{Channel, ColorMode, InputId};
pub use crate::color::{parse_color, ChannelValues, ColorRecord};
pub use crate::config::PickerConfig;
pub use crate::coord::{Bounds, Coord, PlotCoords};
pub use crate::drag::{
    DragController, GlobalEvent, InputSurface, PointerEvent, Surface, SurfaceRect,
};
pub use crate::picker::{ChangeData, ColorPicker};
