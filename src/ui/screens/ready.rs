use {
    crate::{
        app::ReadyState,
        compass::CompassAngles,
        domain::{PrayerName, PrayerSession},
        ui::{UI_CONFIG, UI_TEXT, UiStyleExt, draw_compass},
    },
    eframe::egui::{CentralPanel, CollapsingHeader, Context, Grid, RichText, ScrollArea, Ui},
};

pub(crate) fn render_ready(
    ctx: &Context,
    state: &ReadyState,
    angles: CompassAngles,
    has_orientation: bool,
) {
    let session = &state.session;
    CentralPanel::default().show(ctx, |ui| {
        ScrollArea::vertical().show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.set_max_width(UI_CONFIG.content_width);
                ui.add_space(16.0);
                render_header(ui, state.clock.text(), session);
                ui.add_space(12.0);
                render_cards(ui, session);
                ui.add_space(16.0);

                draw_compass(ui, angles);
                if !has_orientation {
                    ui.label_subdued(&UI_TEXT.label_compass_fixed);
                }
                ui.add_space(16.0);

                render_prayer_grid(ui, session);
                ui.add_space(8.0);
                render_more_times(ui, session);
                ui.add_space(16.0);
            });
        });
    });
}

fn render_header(ui: &mut Ui, clock: &str, session: &PrayerSession) {
    ui.label(
        RichText::new(clock)
            .monospace()
            .size(UI_CONFIG.clock_size)
            .strong()
            .color(UI_CONFIG.colors.heading),
    );
    if let Some(name) = &session.location_name {
        ui.label(RichText::new(name).color(UI_CONFIG.colors.label));
    }
    ui.label_subdued(format!(
        "{} | {}",
        session.date.gregorian, session.date.hijri
    ));
}

fn render_cards(ui: &mut Ui, session: &PrayerSession) {
    ui.columns(2, |cols| {
        cols[0].time_card(
            PrayerName::Sunrise.label(),
            session.times.get(PrayerName::Sunrise),
        );
        cols[1].time_card(
            &UI_TEXT.label_qibla,
            &format!("{:.2}°", session.qibla.degrees()),
        );
    });
}

fn render_prayer_grid(ui: &mut Ui, session: &PrayerSession) {
    Grid::new("obligatory_prayers")
        .num_columns(5)
        .spacing([12.0, 4.0])
        .show(ui, |ui| {
            for (name, _) in session.times.obligatory() {
                ui.label_subheader(name.label());
            }
            ui.end_row();
            for (_, time) in session.times.obligatory() {
                ui.label(
                    RichText::new(time)
                        .monospace()
                        .strong()
                        .color(UI_CONFIG.colors.heading),
                );
            }
            ui.end_row();
        });
}

fn render_more_times(ui: &mut Ui, session: &PrayerSession) {
    CollapsingHeader::new(UI_TEXT.label_more_times.as_str())
        .default_open(false)
        .show(ui, |ui| {
            for (name, time) in session.times.auxiliary() {
                ui.time_row(name.label(), time);
            }
        });
}
