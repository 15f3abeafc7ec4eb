//! Pointer dragging over the picker's 2-D plot.
//!
//! A [`DragController`] is bound to one rectangular [`Surface`] and turns pointer and touch events
//! into positions on that surface, scaled into the caller's [`Bounds`] and handed to a change
//! callback. It has two states: idle, and dragging. A press on the surface starts a drag and
//! reports the pressed position straight away, so a click without movement still picks a color.
//! While the drag lasts the controller listens on the global [`InputSurface`] rather than on the
//! surface itself, so the pointer keeps steering the value after it leaves the widget. A release
//! anywhere ends the drag.
//!
//! The global listeners are owned by an [`InputCapture`] guard held inside the drag session. Every
//! way out of a drag (release, touch end, [`DragController::teardown`], or dropping the
//! controller) drops the guard, which removes exactly the listeners it added.
//!
//! # Example
//! ```
//! use std::cell::{Cell, RefCell};
//! use std::rc::Rc;
//! use colorpickr::drag::*;
//! use colorpickr::{Bounds, Coord};
//!
//! struct Plot;
//! impl Surface for Plot {
//!     fn bounding_rect(&self) -> Option<SurfaceRect> {
//!         Some(SurfaceRect { left: 0., top: 0., width: 300., height: 300. })
//!     }
//! }
//!
//! #[derive(Default)]
//! struct Window(Cell<usize>);
//! impl InputSurface for Window {
//!     fn add_listener(&self, _: GlobalEvent) { self.0.set(self.0.get() + 1) }
//!     fn remove_listener(&self, _: GlobalEvent) { self.0.set(self.0.get() - 1) }
//! }
//!
//! let window = Rc::new(Window::default());
//! let seen = Rc::new(RefCell::new(Vec::new()));
//! let sink = Rc::clone(&seen);
//! let mut control = DragController::bind(
//!     Plot,
//!     Rc::clone(&window),
//!     Bounds { xmax: 255., ymax: 255. },
//!     move |pos: Coord| sink.borrow_mut().push(pos),
//! );
//!
//! control.pointer_down(&mut PointerEvent::mouse(150., 150.));
//! assert_eq!(window.0.get(), 4);
//! control.handle_global(GlobalEvent::MouseMove, &mut PointerEvent::mouse(0., 0.));
//! control.handle_global(GlobalEvent::MouseUp, &mut PointerEvent::mouse(0., 0.));
//! assert_eq!(window.0.get(), 0);
//! assert_eq!(*seen.borrow(), vec![Coord { x: 127.5, y: 127.5 }, Coord { x: 0., y: 0. }]);
//! ```

use std::rc::Rc;

use tracing::{debug, trace};

use crate::coord::{Bounds, Coord};

/// The on-screen rectangle of a surface, in the same pixel space as pointer events.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SurfaceRect {
    /// Left edge.
    pub left: f64,
    /// Top edge.
    pub top: f64,
    /// Width, in pixels.
    pub width: f64,
    /// Height, in pixels.
    pub height: f64,
}

/// The element a drag is bound to.
pub trait Surface {
    /// The element's current rectangle, or `None` while it is not attached and has no geometry.
    fn bounding_rect(&self) -> Option<SurfaceRect>;
}

/// Events the controller listens for on the global input surface while a drag is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlobalEvent {
    /// The mouse moved.
    MouseMove,
    /// A mouse button was released.
    MouseUp,
    /// A touch point moved.
    TouchMove,
    /// A touch point was lifted.
    TouchEnd,
}

impl GlobalEvent {
    /// Everything a drag listens for, in registration order.
    pub const DRAG_EVENTS: [GlobalEvent; 4] = [
        GlobalEvent::MouseMove,
        GlobalEvent::MouseUp,
        GlobalEvent::TouchMove,
        GlobalEvent::TouchEnd,
    ];

    /// `true` for the events that end a drag.
    pub fn ends_drag(self) -> bool {
        matches!(self, GlobalEvent::MouseUp | GlobalEvent::TouchEnd)
    }
}

/// The window-level event source that a drag captures. The host keeps track of which events are
/// being listened for and routes them to [`DragController::handle_global`].
///
/// Methods take `&self`: the host is single-threaded and shares one input surface between many
/// controllers, so implementations use interior mutability.
pub trait InputSurface {
    /// Starts delivering `event` to the controller.
    fn add_listener(&self, event: GlobalEvent);
    /// Stops delivering `event` to the controller.
    fn remove_listener(&self, event: GlobalEvent);
}

/// Where a pointer event came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerSource {
    /// A mouse or other pointing device.
    Mouse,
    /// The first changed touch point of a touch event.
    Touch,
}

/// A pointer position, as the host's event loop reports it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Position in the same pixel space as [`SurfaceRect`].
    pub client: Coord,
    /// What produced the event.
    pub source: PointerSource,
    default_prevented: bool,
}

impl PointerEvent {
    /// A mouse event at the given position.
    pub fn mouse(x: f64, y: f64) -> PointerEvent {
        PointerEvent::new(Coord { x, y }, PointerSource::Mouse)
    }

    /// A touch event whose first changed touch point is at the given position.
    pub fn touch(x: f64, y: f64) -> PointerEvent {
        PointerEvent::new(Coord { x, y }, PointerSource::Touch)
    }

    fn new(client: Coord, source: PointerSource) -> PointerEvent {
        PointerEvent {
            client,
            source,
            default_prevented: false,
        }
    }

    /// Asks the host to skip its default handling, such as selecting text or scrolling.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Whether a handler asked to skip the default handling.
    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Holds the global drag listeners for as long as it lives.
pub struct InputCapture<W: InputSurface> {
    input: Rc<W>,
}

impl<W: InputSurface> InputCapture<W> {
    /// Registers every [`GlobalEvent::DRAG_EVENTS`] listener.
    pub fn acquire(input: Rc<W>) -> InputCapture<W> {
        for event in GlobalEvent::DRAG_EVENTS.iter().copied() {
            input.add_listener(event);
        }
        InputCapture { input }
    }
}

impl<W: InputSurface> Drop for InputCapture<W> {
    fn drop(&mut self) {
        for event in GlobalEvent::DRAG_EVENTS.iter().copied() {
            self.input.remove_listener(event);
        }
    }
}

struct DragSession<W: InputSurface> {
    // pointer position relative to the surface at drag start
    start: Coord,
    // raw pointer position at drag start
    offset: Coord,
    _capture: InputCapture<W>,
}

/// Where the position indicator sits, in whole percent of the surface's size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IndicatorPosition {
    /// Distance from the top edge, 0-100.
    pub top: u8,
    /// Distance from the left edge, 0-100.
    pub left: u8,
}

/// Converts a plot position into the indicator's place on the surface, clamped to the surface.
pub fn indicator_position(value: Coord, bounds: Bounds) -> IndicatorPosition {
    let percent = |val: f64, max: f64| num::clamp(val / max * 100.0, 0.0, 100.0).round() as u8;
    IndicatorPosition {
        top: percent(value.y, bounds.ymax),
        left: percent(value.x, bounds.xmax),
    }
}

/// The drag state machine for one surface. See the module documentation.
pub struct DragController<S, W, F>
where
    S: Surface,
    W: InputSurface,
    F: FnMut(Coord),
{
    surface: S,
    input: Rc<W>,
    bounds: Bounds,
    on_change: F,
    session: Option<DragSession<W>>,
}

impl<S, W, F> DragController<S, W, F>
where
    S: Surface,
    W: InputSurface,
    F: FnMut(Coord),
{
    /// Binds a controller to a surface. Nothing is registered until the first press.
    pub fn bind(surface: S, input: Rc<W>, bounds: Bounds, on_change: F) -> Self {
        DragController {
            surface,
            input,
            bounds,
            on_change,
            session: None,
        }
    }

    /// The range positions are scaled into.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Changes the range positions are scaled into, as happens when the active channel changes.
    /// Takes effect from the next event, even mid-drag.
    pub fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }

    /// The bound surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Handles a mouse press or touch start on the surface: reports the pressed position and starts
    /// a drag. Does nothing but prevent the default if the surface has no geometry.
    pub fn pointer_down(&mut self, event: &mut PointerEvent) {
        event.prevent_default();
        let rect = match self.surface.bounding_rect() {
            Some(rect) => rect,
            None => {
                debug!("surface has no geometry, ignoring press");
                return;
            }
        };
        let start = event.client
            - Coord {
                x: rect.left,
                y: rect.top,
            };
        self.change(start);

        // a press without a release in between still gets exactly one set of listeners
        self.session = None;
        self.session = Some(DragSession {
            start,
            offset: event.client,
            _capture: InputCapture::acquire(Rc::clone(&self.input)),
        });
        debug!(x = start.x, y = start.y, "drag started");
    }

    /// Handles a mouse or touch move. Ignored unless a drag is in progress.
    pub fn pointer_move(&mut self, event: &mut PointerEvent) {
        let (start, offset) = match &self.session {
            Some(session) => (session.start, session.offset),
            None => return,
        };
        event.prevent_default();
        self.change(event.client + start - offset);
    }

    /// Handles a mouse release or touch end. Ends the drag and removes the global listeners; no
    /// further change is reported.
    pub fn pointer_up(&mut self) {
        if self.session.take().is_some() {
            debug!("drag ended");
        }
    }

    /// Routes a global event delivered by the host.
    pub fn handle_global(&mut self, event: GlobalEvent, pointer: &mut PointerEvent) {
        if event.ends_drag() {
            self.pointer_up();
        } else {
            self.pointer_move(pointer);
        }
    }

    /// Ends any drag in progress. Call this before the surface goes away; dropping the controller
    /// has the same effect.
    pub fn teardown(&mut self) {
        self.pointer_up();
    }

    /// Where the indicator for `value` sits on the surface.
    pub fn indicator(&self, value: Coord) -> IndicatorPosition {
        indicator_position(value, self.bounds)
    }

    // `pos` is relative to the surface's top-left corner, in pixels
    fn change(&mut self, pos: Coord) {
        let rect = match self.surface.bounding_rect() {
            Some(rect) if rect.width > 0.0 && rect.height > 0.0 => rect,
            _ => {
                debug!("surface has no geometry, ignoring pointer");
                return;
            }
        };
        let value = Coord {
            x: num::clamp(pos.x, 0.0, rect.width) / rect.width * self.bounds.xmax,
            y: num::clamp(pos.y, 0.0, rect.height) / rect.height * self.bounds.ymax,
        };
        trace!(x = value.x, y = value.y, "drag position");
        (self.on_change)(value);
    }
}
