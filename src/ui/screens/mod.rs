mod error;
mod loading;
mod ready;

pub(crate) use {error::render_error, loading::render_loading, ready::render_ready};
