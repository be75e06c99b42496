//! The one-shot startup task: locate the device, then fetch the session.
//!
//! Runs off the UI thread (a tokio runtime on its own thread natively,
//! `spawn_local` in the browser) and reports back over an mpsc channel.

use {
    crate::{
        app::{ErrorKind, LoadingStage},
        config::{ApiKey, ConfigError, DF},
        data::{FetchError, HttpGet, PrayerDataFetcher, ReqwestClient},
        domain::PrayerSession,
        sensors::{GeolocationError, LocationSource},
    },
    eframe::egui::Context,
    std::sync::mpsc::Sender,
    thiserror::Error,
};

#[cfg(not(target_arch = "wasm32"))]
use {
    crate::{data::TransportError, sensors::FixedLocation},
    std::thread,
    tokio::runtime::Runtime,
};

#[cfg(target_arch = "wasm32")]
use crate::sensors::BrowserGeolocation;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    #[error(transparent)]
    Geolocation(#[from] GeolocationError),
    #[error(transparent)]
    PrayerService(#[from] FetchError),
    #[error("configuration: {0}")]
    Config(#[from] ConfigError),
}

impl SessionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Geolocation(GeolocationError::Unavailable) => ErrorKind::GeolocationUnavailable,
            Self::Geolocation(GeolocationError::Denied) => ErrorKind::GeolocationDenied,
            Self::Geolocation(GeolocationError::PositionFailed { .. }) => {
                ErrorKind::GeolocationFailed
            }
            // A missing key looks the same to the user as the service refusing us.
            Self::PrayerService(_) | Self::Config(_) => ErrorKind::PrayerServiceFailure,
        }
    }
}

#[derive(Debug)]
pub enum StartupEvent {
    Stage(LoadingStage),
    Finished(Result<PrayerSession, SessionError>),
}

/// Locate once, then fetch. The fetcher is only built after a position is known so
/// that location problems are reported ahead of configuration problems.
pub async fn load_session<L, C, F>(
    location: &L,
    make_fetcher: F,
    on_stage: impl Fn(LoadingStage),
) -> Result<PrayerSession, SessionError>
where
    L: LocationSource,
    C: HttpGet,
    F: FnOnce() -> Result<PrayerDataFetcher<C>, SessionError>,
{
    on_stage(LoadingStage::Locating);
    let coords = location.current_position().await?;
    log::info!("Device located at {}", coords);

    let fetcher = make_fetcher()?;
    on_stage(LoadingStage::Fetching);
    Ok(fetcher.fetch(coords).await?)
}

fn live_fetcher() -> Result<PrayerDataFetcher<ReqwestClient>, SessionError> {
    let api_key = ApiKey::from_env()?;
    let client = ReqwestClient::new().map_err(FetchError::from)?;
    Ok(PrayerDataFetcher::new(client, api_key))
}

async fn run_startup<L: LocationSource>(location: &L, tx: Sender<StartupEvent>, ctx: Context) {
    let notify = |event: StartupEvent| {
        if DF.log_startup_stages {
            log::info!("Startup event: {:?}", StartupStageLabel(&event));
        }
        // The receiver only disappears when the app is closing.
        let _ = tx.send(event);
        ctx.request_repaint();
    };

    let result = load_session(location, live_fetcher, |stage| {
        notify(StartupEvent::Stage(stage))
    })
    .await;
    notify(StartupEvent::Finished(result));
}

/// Short form for logs: stage name or outcome, never the whole session.
struct StartupStageLabel<'a>(&'a StartupEvent);

impl std::fmt::Debug for StartupStageLabel<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            StartupEvent::Stage(stage) => write!(f, "{:?}", stage),
            StartupEvent::Finished(Ok(_)) => f.write_str("Finished(ok)"),
            StartupEvent::Finished(Err(e)) => write!(f, "Finished({:?})", e.kind()),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn spawn_startup(location: FixedLocation, tx: Sender<StartupEvent>, ctx: Context) {
    thread::spawn(move || match Runtime::new() {
        Ok(rt) => rt.block_on(run_startup(&location, tx, ctx)),
        Err(e) => {
            log::error!("Failed to create runtime: {}", e);
            let err = FetchError::Transport(TransportError::Request(e.to_string()));
            let _ = tx.send(StartupEvent::Finished(Err(err.into())));
            ctx.request_repaint();
        }
    });
}

#[cfg(target_arch = "wasm32")]
pub(crate) fn spawn_startup(tx: Sender<StartupEvent>, ctx: Context) {
    wasm_bindgen_futures::spawn_local(async move {
        run_startup(&BrowserGeolocation, tx, ctx).await;
    });
}
