use {
    crate::ui::UI_CONFIG,
    eframe::egui::{Align, Context, Layout, RichText, Ui, Visuals},
};

pub(crate) fn colored_subsection_heading(text: impl Into<String>) -> RichText {
    RichText::new(text.into()).color(UI_CONFIG.colors.subsection_heading)
}

pub(crate) fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();
    visuals.window_fill = UI_CONFIG.colors.central_panel;
    visuals.panel_fill = UI_CONFIG.colors.central_panel;
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;
    ctx.set_visuals(visuals);
    ctx.style_mut(|s| s.interaction.selectable_labels = false);
}

pub(crate) trait UiStyleExt {
    fn label_subdued(&mut self, text: impl Into<String>);
    fn label_subheader(&mut self, text: impl Into<String>);
    /// Label above a larger value, on a card background.
    fn time_card(&mut self, label: &str, value: &str);
    /// Label left, value right, on one row.
    fn time_row(&mut self, label: &str, value: &str);
}

impl UiStyleExt for Ui {
    fn label_subdued(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).small().color(UI_CONFIG.colors.subdued));
    }

    fn label_subheader(&mut self, text: impl Into<String>) {
        self.label(colored_subsection_heading(text));
    }

    fn time_card(&mut self, label: &str, value: &str) {
        UI_CONFIG.card_frame().show(self, |ui| {
            ui.vertical_centered(|ui| {
                ui.label_subdued(label);
                ui.label(
                    RichText::new(value)
                        .size(20.0)
                        .strong()
                        .color(UI_CONFIG.colors.heading),
                );
            });
        });
    }

    fn time_row(&mut self, label: &str, value: &str) {
        self.horizontal(|ui| {
            ui.label(RichText::new(label).color(UI_CONFIG.colors.label));
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.label(RichText::new(value).monospace().color(UI_CONFIG.colors.heading));
            });
        });
    }
}
