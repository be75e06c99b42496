mod compass;
mod screens;
mod styles;
mod ui_config;
mod ui_text;

pub(crate) use compass::draw_compass;
pub(crate) use screens::{render_error, render_loading, render_ready};
pub(crate) use styles::{UiStyleExt, setup_custom_visuals};
pub(crate) use ui_config::{UI_CONFIG, UI_TEXT};
