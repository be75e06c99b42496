//! Device capabilities: one-shot position and the live compass heading.
mod geolocation;
mod orientation;

pub use {
    geolocation::{FixedLocation, GeolocationError, LocationSource},
    orientation::{
        HeadingCell, HeadingListener, NoOrientation, OrientationSource, OrientationSubscription,
    },
};

#[cfg(target_arch = "wasm32")]
pub use {geolocation::BrowserGeolocation, orientation::BrowserOrientation};

#[cfg(test)]
pub(crate) use orientation::test_source;
