use {
    crate::domain::Coordinates,
    async_trait::async_trait,
    thiserror::Error,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeolocationError {
    /// The platform has no way to locate the device.
    #[error("geolocation is not available on this platform")]
    Unavailable,
    /// The user refused the permission prompt.
    #[error("location permission was denied")]
    Denied,
    #[error("position could not be determined (code {code}): {message}")]
    PositionFailed { code: u16, message: String },
}

/// Single-shot position lookup. Called once per session; there is no retry.
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait LocationSource {
    async fn current_position(&self) -> Result<Coordinates, GeolocationError>;
}

/// A position known up front (native builds take it from the command line).
/// `None` behaves like a device without a location sensor.
#[derive(Debug, Clone, Copy)]
pub struct FixedLocation(pub Option<Coordinates>);

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl LocationSource for FixedLocation {
    async fn current_position(&self) -> Result<Coordinates, GeolocationError> {
        self.0.ok_or(GeolocationError::Unavailable)
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserGeolocation;

#[cfg(target_arch = "wasm32")]
mod browser {
    use {
        super::*,
        futures::channel::oneshot,
        std::{cell::RefCell, rc::Rc},
        wasm_bindgen::{JsCast, JsValue, closure::Closure},
        web_sys::{GeolocationPosition, GeolocationPositionError},
    };

    type Reply = Rc<RefCell<Option<oneshot::Sender<Result<Coordinates, GeolocationError>>>>>;

    /// `navigator.geolocation.getCurrentPosition` as a future.
    pub struct BrowserGeolocation;

    fn send(reply: &Reply, result: Result<Coordinates, GeolocationError>) {
        if let Some(tx) = reply.borrow_mut().take() {
            let _ = tx.send(result);
        }
    }

    fn map_error(err: &GeolocationPositionError) -> GeolocationError {
        match err.code() {
            GeolocationPositionError::PERMISSION_DENIED => GeolocationError::Denied,
            code => GeolocationError::PositionFailed {
                code,
                message: err.message(),
            },
        }
    }

    #[async_trait(?Send)]
    impl LocationSource for BrowserGeolocation {
        async fn current_position(&self) -> Result<Coordinates, GeolocationError> {
            let window = web_sys::window().ok_or(GeolocationError::Unavailable)?;
            let navigator = window.navigator();
            let has_geolocation =
                js_sys::Reflect::has(&navigator, &JsValue::from_str("geolocation"))
                    .unwrap_or(false);
            if !has_geolocation {
                return Err(GeolocationError::Unavailable);
            }
            let geolocation = navigator
                .geolocation()
                .map_err(|_| GeolocationError::Unavailable)?;

            let (tx, rx) = oneshot::channel();
            let reply: Reply = Rc::new(RefCell::new(Some(tx)));

            // Both callbacks live in this future and are freed with it, whichever one fires.
            let on_success: Closure<dyn FnMut(GeolocationPosition)> = {
                let reply = reply.clone();
                Closure::once(move |position: GeolocationPosition| {
                    let coords = position.coords();
                    let result = Coordinates::new(coords.latitude(), coords.longitude())
                        .map_err(|e| GeolocationError::PositionFailed {
                            code: 0,
                            message: e.to_string(),
                        });
                    send(&reply, result);
                })
            };
            let on_error: Closure<dyn FnMut(GeolocationPositionError)> = {
                let reply = reply.clone();
                Closure::once(move |err: GeolocationPositionError| {
                    send(&reply, Err(map_error(&err)));
                })
            };

            geolocation
                .get_current_position_with_error_callback(
                    on_success.as_ref().unchecked_ref(),
                    Some(on_error.as_ref().unchecked_ref()),
                )
                .map_err(|_| GeolocationError::Unavailable)?;

            // A dropped sender means the browser never called back; treat as no capability.
            let result = rx.await.unwrap_or(Err(GeolocationError::Unavailable));
            drop((on_success, on_error));
            result
        }
    }
}
