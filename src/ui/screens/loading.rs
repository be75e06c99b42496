use {
    crate::{
        app::{LoadingStage, LoadingState},
        ui::{UI_CONFIG, UI_TEXT},
    },
    eframe::egui::{CentralPanel, Context, RichText},
};

pub(crate) fn render_loading(ctx: &Context, state: &LoadingState) {
    let message = match state.stage {
        LoadingStage::Locating => &UI_TEXT.ls_locating,
        LoadingStage::Fetching => &UI_TEXT.ls_fetching,
    };
    CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() * 0.35);
            ui.heading(
                RichText::new(&UI_TEXT.app_title)
                    .size(24.0)
                    .strong()
                    .color(UI_CONFIG.colors.heading),
            );
            ui.add_space(20.0);
            ui.spinner();
            ui.add_space(10.0);
            ui.label(RichText::new(message).italics().color(UI_CONFIG.colors.label));
        });
    });
}
