pub(super) mod error;
pub(super) mod loading;
pub(super) mod phase_view;
pub(super) mod ready;

pub(crate) use phase_view::PhaseView;
