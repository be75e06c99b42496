//! Live compass heading.
//!
//! A source hands out an [`OrientationSubscription`] per listener. Dropping the
//! handle removes the listener, so a view that owns the handle cannot leak it.

use {
    crate::{config::DF, domain::normalize_degrees},
    std::{cell::Cell, rc::Rc},
};

/// Receives the raw angle of each orientation event; `None` when the event had none.
pub type HeadingListener = Box<dyn FnMut(Option<f64>)>;

/// Single-writer cell holding the current heading in `[0, 360)`. Clones share the value.
#[derive(Debug, Clone, Default)]
pub struct HeadingCell(Rc<Cell<f64>>);

impl HeadingCell {
    pub fn degrees(&self) -> f64 {
        self.0.get()
    }

    /// Store a new reading. Events without a usable angle are ignored rather than
    /// snapping the compass back to north. Returns whether the heading changed.
    pub fn apply(&self, reading: Option<f64>) -> bool {
        let Some(degrees) = reading.filter(|d| d.is_finite()) else {
            return false;
        };
        let degrees = normalize_degrees(degrees);
        if DF.log_orientation_events {
            log::info!("heading {:.1}", degrees);
        }
        let changed = self.0.get() != degrees;
        self.0.set(degrees);
        changed
    }
}

/// Handle to a live listener. Dropping it unsubscribes.
pub struct OrientationSubscription {
    dispose: Option<Box<dyn FnOnce()>>,
}

impl OrientationSubscription {
    pub fn new(dispose: impl FnOnce() + 'static) -> Self {
        Self {
            dispose: Some(Box::new(dispose)),
        }
    }

    /// Explicit form of dropping the handle.
    pub fn unsubscribe(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(dispose) = self.dispose.take() {
            dispose();
        }
    }
}

impl Drop for OrientationSubscription {
    fn drop(&mut self) {
        self.release();
    }
}

pub trait OrientationSource {
    /// `None` when the device has no orientation sensor; the heading then stays at its default.
    fn subscribe(&self, listener: HeadingListener) -> Option<OrientationSubscription>;
}

/// For platforms without an orientation sensor.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOrientation;

impl OrientationSource for NoOrientation {
    fn subscribe(&self, _listener: HeadingListener) -> Option<OrientationSubscription> {
        None
    }
}

/// Compass heading of one orientation event, clockwise from north.
///
/// Safari reports `webkitCompassHeading` (already clockwise). Everyone else
/// reports `alpha`, which grows counter-clockwise. `None` when neither is present.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
pub(crate) fn compass_heading(webkit: Option<f64>, alpha: Option<f64>) -> Option<f64> {
    webkit.or_else(|| alpha.map(|alpha| 360.0 - alpha))
}

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserOrientation;

#[cfg(target_arch = "wasm32")]
mod browser {
    use {
        super::*,
        wasm_bindgen::{JsCast, JsValue, closure::Closure},
        web_sys::DeviceOrientationEvent,
    };

    const ABSOLUTE_EVENT: &str = "deviceorientationabsolute";
    const RELATIVE_EVENT: &str = "deviceorientation";

    /// `deviceorientation*` events on `window`.
    pub struct BrowserOrientation;

    fn heading_of(event: &DeviceOrientationEvent) -> Option<f64> {
        let webkit = js_sys::Reflect::get(event, &JsValue::from_str("webkitCompassHeading"))
            .ok()
            .and_then(|v| v.as_f64());
        compass_heading(webkit, event.alpha())
    }

    impl OrientationSource for BrowserOrientation {
        fn subscribe(&self, listener: HeadingListener) -> Option<OrientationSubscription> {
            let window = web_sys::window()?;
            let supported =
                js_sys::Reflect::has(&window, &JsValue::from_str("DeviceOrientationEvent"))
                    .unwrap_or(false);
            if !supported {
                log::info!("DeviceOrientationEvent not supported; compass stays north-up");
                return None;
            }
            let absolute =
                js_sys::Reflect::has(&window, &JsValue::from_str("ondeviceorientationabsolute"))
                    .unwrap_or(false);
            let event_name = if absolute {
                ABSOLUTE_EVENT
            } else {
                RELATIVE_EVENT
            };

            let mut listener = listener;
            let callback = Closure::<dyn FnMut(DeviceOrientationEvent)>::new(
                move |event: DeviceOrientationEvent| listener(heading_of(&event)),
            );

            if let Err(e) = window
                .add_event_listener_with_callback(event_name, callback.as_ref().unchecked_ref())
            {
                log::warn!("Could not listen for {}: {:?}", event_name, e);
                return None;
            }
            log::info!("Subscribed to {}", event_name);

            Some(OrientationSubscription::new(move || {
                let _ = window.remove_event_listener_with_callback(
                    event_name,
                    callback.as_ref().unchecked_ref(),
                );
                log::info!("Unsubscribed from {}", event_name);
                drop(callback);
            }))
        }
    }
}

#[cfg(test)]
pub(crate) mod test_source {
    //! In-memory source that tracks live listeners.
    use {super::*, std::cell::RefCell};

    type Slots = Rc<RefCell<Vec<Option<HeadingListener>>>>;

    #[derive(Default, Clone)]
    pub(crate) struct ScriptedOrientation {
        slots: Slots,
    }

    impl ScriptedOrientation {
        pub fn emit(&self, reading: Option<f64>) {
            for listener in self.slots.borrow_mut().iter_mut().flatten() {
                listener(reading);
            }
        }

        pub fn active_listeners(&self) -> usize {
            self.slots.borrow().iter().filter(|s| s.is_some()).count()
        }
    }

    impl OrientationSource for ScriptedOrientation {
        fn subscribe(&self, listener: HeadingListener) -> Option<OrientationSubscription> {
            let mut slots = self.slots.borrow_mut();
            slots.push(Some(listener));
            let index = slots.len() - 1;
            let slots = self.slots.clone();
            Some(OrientationSubscription::new(move || {
                slots.borrow_mut()[index] = None;
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{test_source::ScriptedOrientation, *};

    fn wired(source: &ScriptedOrientation) -> (HeadingCell, Option<OrientationSubscription>) {
        let heading = HeadingCell::default();
        let sink = heading.clone();
        let sub = source.subscribe(Box::new(move |reading| {
            sink.apply(reading);
        }));
        (heading, sub)
    }

    #[test]
    fn webkit_heading_takes_priority_over_alpha() {
        assert_eq!(compass_heading(Some(42.0), Some(90.0)), Some(42.0));
        assert_eq!(compass_heading(Some(42.0), None), Some(42.0));
    }

    #[test]
    fn alpha_is_turned_clockwise() {
        assert_eq!(compass_heading(None, Some(90.0)), Some(270.0));
        assert_eq!(compass_heading(None, Some(270.0)), Some(90.0));

        let heading = HeadingCell::default();
        heading.apply(Some(123.0));
        heading.apply(compass_heading(None, Some(0.0)));
        assert_eq!(heading.degrees(), 0.0);
    }

    #[test]
    fn event_without_angles_leaves_heading_alone() {
        assert_eq!(compass_heading(None, None), None);

        let heading = HeadingCell::default();
        heading.apply(Some(75.0));
        assert!(!heading.apply(compass_heading(None, None)));
        assert_eq!(heading.degrees(), 75.0);
    }

    #[test]
    fn absent_angle_keeps_previous_heading() {
        let heading = HeadingCell::default();
        assert!(heading.apply(Some(90.0)));
        assert!(!heading.apply(None));
        assert!(!heading.apply(Some(f64::NAN)));
        assert_eq!(heading.degrees(), 90.0);
    }

    #[test]
    fn readings_are_normalized() {
        let heading = HeadingCell::default();
        heading.apply(Some(360.0));
        assert_eq!(heading.degrees(), 0.0);
        heading.apply(Some(-30.0));
        assert_eq!(heading.degrees(), 330.0);
        assert!(!heading.apply(Some(690.0)));
    }

    #[test]
    fn events_reach_the_cell_while_subscribed() {
        let source = ScriptedOrientation::default();
        let (heading, sub) = wired(&source);
        assert!(sub.is_some());
        source.emit(Some(45.0));
        source.emit(None);
        assert_eq!(heading.degrees(), 45.0);
    }

    #[test]
    fn dropping_the_handle_removes_the_listener() {
        let source = ScriptedOrientation::default();
        let (heading, sub) = wired(&source);
        assert_eq!(source.active_listeners(), 1);

        drop(sub);
        assert_eq!(source.active_listeners(), 0);

        source.emit(Some(200.0));
        assert_eq!(heading.degrees(), 0.0);
    }

    #[test]
    fn explicit_unsubscribe_runs_disposal_once() {
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let sub = OrientationSubscription::new(move || counter.set(counter.get() + 1));
        sub.unsubscribe();
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn no_sensor_means_no_subscription_and_north_up() {
        let heading = HeadingCell::default();
        let sink = heading.clone();
        let sub = NoOrientation.subscribe(Box::new(move |r| {
            sink.apply(r);
        }));
        assert!(sub.is_none());
        assert_eq!(heading.degrees(), 0.0);
    }
}
