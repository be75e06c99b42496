use {
    crate::{
        app::ErrorState,
        ui::{UI_CONFIG, UI_TEXT},
    },
    eframe::egui::{CentralPanel, Context, RichText},
};

/// Only the fixed message for the kind is shown; causes stay in the log.
pub(crate) fn render_error(ctx: &Context, state: &ErrorState) {
    CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() * 0.35);
            ui.heading(
                RichText::new(&UI_TEXT.error_title)
                    .strong()
                    .color(UI_CONFIG.colors.error),
            );
            ui.add_space(10.0);
            ui.label(RichText::new(state.kind.message()).color(UI_CONFIG.colors.label));
        });
    });
}
