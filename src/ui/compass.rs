use {
    crate::{
        compass::CompassAngles,
        ui::{UI_CONFIG, UI_TEXT},
    },
    eframe::egui::{Align2, FontId, Painter, Pos2, Sense, Stroke, Ui, Vec2, vec2},
};

/// Screen point at `radius` from `center`, `degrees` clockwise from straight up.
pub(crate) fn dial_point(center: Pos2, radius: f32, degrees: f64) -> Pos2 {
    let (sin, cos) = (degrees.to_radians() as f32).sin_cos();
    center + vec2(radius * sin, -radius * cos)
}

/// Compass face: the dial turns with `angles.dial` so its N tracks true north, the
/// needle turns with `angles.needle` so it tracks the Qibla.
pub(crate) fn draw_compass(ui: &mut Ui, angles: CompassAngles) {
    let style = &UI_CONFIG.compass;
    let (rect, _response) = ui.allocate_exact_size(Vec2::splat(style.diameter), Sense::hover());
    if !ui.is_rect_visible(rect) {
        return;
    }
    let painter = ui.painter_at(rect);
    let center = rect.center();
    let radius = style.diameter / 2.0 - style.ring_width;

    painter.circle_stroke(center, radius, Stroke::new(style.ring_width, style.ring));
    draw_dial(&painter, center, radius, angles.dial);

    let tip = dial_point(center, radius - style.major_tick - 4.0, angles.needle);
    let tail = dial_point(center, radius * 0.3, angles.needle + 180.0);
    painter.line_segment([tail, tip], Stroke::new(style.needle_width, style.needle));
    painter.circle_filled(tip, style.needle_width * 1.5, style.needle);
    painter.circle_filled(center, style.needle_width * 1.5, style.hub);
}

fn draw_dial(painter: &Painter, center: Pos2, radius: f32, rotation: f64) {
    let style = &UI_CONFIG.compass;
    for step in 0..72u32 {
        let degrees = rotation + f64::from(step) * 5.0;
        let (len, width) = match step {
            s if s % 18 == 0 => (style.major_tick, 2.0),
            s if s % 6 == 0 => (style.major_tick * 0.75, 1.5),
            _ => (style.minor_tick, 1.0),
        };
        painter.line_segment(
            [
                dial_point(center, radius, degrees),
                dial_point(center, radius - len, degrees),
            ],
            Stroke::new(width, style.tick),
        );
    }

    let label_radius = radius - style.major_tick - 14.0;
    for (i, letter) in UI_TEXT.cardinals.iter().enumerate() {
        let degrees = rotation + i as f64 * 90.0;
        let color = if i == 0 { style.north } else { style.ring };
        painter.text(
            dial_point(center, label_radius, degrees),
            Align2::CENTER_CENTER,
            *letter,
            FontId::proportional(18.0),
            color,
        );
    }
}

#[cfg(test)]
mod tests {
    use {super::*, eframe::egui::pos2};

    fn close(a: Pos2, b: Pos2) -> bool {
        (a - b).length() < 1e-3
    }

    #[test]
    fn zero_degrees_points_up() {
        let c = pos2(100.0, 100.0);
        assert!(close(dial_point(c, 10.0, 0.0), pos2(100.0, 90.0)));
    }

    #[test]
    fn positive_angles_turn_clockwise_on_screen() {
        let c = pos2(0.0, 0.0);
        assert!(close(dial_point(c, 10.0, 90.0), pos2(10.0, 0.0)));
        assert!(close(dial_point(c, 10.0, 180.0), pos2(0.0, 10.0)));
        assert!(close(dial_point(c, 10.0, -90.0), pos2(-10.0, 0.0)));
    }

    #[test]
    fn needle_tracks_bearing_when_heading_is_zero() {
        let c = pos2(0.0, 0.0);
        let angles = CompassAngles::new(118.97, 0.0);
        assert!(close(
            dial_point(c, 1.0, angles.needle),
            dial_point(c, 1.0, 118.97)
        ));
        assert!(close(dial_point(c, 1.0, angles.dial), pos2(0.0, -1.0)));
    }
}
