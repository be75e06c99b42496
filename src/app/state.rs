// src/app/state.rs

use {
    crate::{
        app::{LiveClock, SessionError, StartupEvent},
        domain::PrayerSession,
        ui::UI_TEXT,
    },
    std::rc::Rc,
};

/// What the startup task is currently waiting on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadingStage {
    #[default]
    Locating,
    Fetching,
}

/// User-facing failure category. Each maps to one fixed message; causes only go to the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    GeolocationUnavailable,
    GeolocationDenied,
    GeolocationFailed,
    PrayerServiceFailure,
}

impl ErrorKind {
    pub fn message(&self) -> &str {
        match self {
            Self::GeolocationUnavailable => &UI_TEXT.error_geolocation_unavailable,
            Self::GeolocationDenied => &UI_TEXT.error_geolocation_denied,
            Self::GeolocationFailed => &UI_TEXT.error_geolocation_failed,
            Self::PrayerServiceFailure => &UI_TEXT.error_prayer_service,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub(crate) struct LoadingState {
    pub(crate) stage: LoadingStage,
}

impl LoadingState {
    /// Fold one startup event in. Returns the next state once the session settles.
    pub(crate) fn apply(&mut self, event: StartupEvent) -> Option<AppState> {
        match event {
            StartupEvent::Stage(stage) => {
                self.stage = stage;
                None
            }
            StartupEvent::Finished(Ok(session)) => Some(AppState::Ready(Box::new(
                ReadyState::new(session, &chrono::Local::now()),
            ))),
            StartupEvent::Finished(Err(err)) => Some(AppState::from_error(&err)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ErrorState {
    pub(crate) kind: ErrorKind,
}

#[derive(Debug, Clone)]
pub(crate) struct ReadyState {
    pub(crate) session: Rc<PrayerSession>,
    pub(crate) clock: LiveClock,
}

impl ReadyState {
    pub(crate) fn new(session: PrayerSession, now: &chrono::DateTime<chrono::Local>) -> Self {
        Self {
            session: Rc::new(session),
            clock: LiveClock::new(now),
        }
    }
}

pub(crate) enum AppState {
    Loading(LoadingState),
    Error(ErrorState),
    Ready(Box<ReadyState>),
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Loading(LoadingState::default())
    }
}

impl AppState {
    pub(crate) fn from_error(err: &SessionError) -> Self {
        log::error!("Session failed: {}", err);
        AppState::Error(ErrorState { kind: err.kind() })
    }

    pub(crate) fn name(&self) -> &'static str {
        match self {
            AppState::Loading(_) => "Loading",
            AppState::Error(_) => "Error",
            AppState::Ready(_) => "Ready",
        }
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::{
            data::{FetchError, fixtures::ERROR_BODY, parse_prayer_response, HttpResponse},
            sensors::GeolocationError,
        },
    };

    fn rejected() -> SessionError {
        let response = HttpResponse {
            status: 200,
            body: ERROR_BODY.as_bytes().to_vec(),
        };
        let err: FetchError = parse_prayer_response(&response).unwrap_err();
        SessionError::PrayerService(err)
    }

    #[test]
    fn stage_events_stay_in_loading() {
        let mut loading = LoadingState::default();
        assert_eq!(loading.stage, LoadingStage::Locating);
        assert!(loading.apply(StartupEvent::Stage(LoadingStage::Fetching)).is_none());
        assert_eq!(loading.stage, LoadingStage::Fetching);
    }

    #[test]
    fn failures_become_error_kinds() {
        let mut loading = LoadingState::default();
        let next = loading.apply(StartupEvent::Finished(Err(SessionError::Geolocation(
            GeolocationError::Denied,
        ))));
        assert!(matches!(
            next,
            Some(AppState::Error(ErrorState {
                kind: ErrorKind::GeolocationDenied
            }))
        ));

        let next = loading.apply(StartupEvent::Finished(Err(rejected())));
        assert!(matches!(
            next,
            Some(AppState::Error(ErrorState {
                kind: ErrorKind::PrayerServiceFailure
            }))
        ));
    }

    #[test]
    fn every_kind_has_a_message() {
        for kind in [
            ErrorKind::GeolocationUnavailable,
            ErrorKind::GeolocationDenied,
            ErrorKind::GeolocationFailed,
            ErrorKind::PrayerServiceFailure,
        ] {
            assert!(!kind.message().is_empty());
        }
        assert_ne!(
            ErrorKind::GeolocationDenied.message(),
            ErrorKind::GeolocationUnavailable.message()
        );
    }
}
