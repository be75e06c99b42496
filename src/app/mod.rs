mod clock;
mod phases;
mod root;
mod startup;
mod state;

pub(crate) use {
    clock::LiveClock,
    phases::PhaseView,
    state::{AppState, ErrorState, LoadingState, ReadyState},
};

pub use {
    root::App,
    startup::{SessionError, StartupEvent, load_session},
    state::{ErrorKind, LoadingStage},
};
