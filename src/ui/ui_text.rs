use std::sync::LazyLock;

pub struct UiText {
    pub app_title: String,

    // Loading screen
    pub ls_locating: String,
    pub ls_fetching: String,

    // Error screen
    pub error_title: String,
    pub error_geolocation_unavailable: String,
    pub error_geolocation_denied: String,
    pub error_geolocation_failed: String,
    pub error_prayer_service: String,

    // Ready screen
    pub label_qibla: String,
    pub label_more_times: String,
    pub label_compass_fixed: String,
    pub cardinals: [&'static str; 4],
}

pub static UI_TEXT: LazyLock<UiText> = LazyLock::new(|| UiText {
    app_title: "Qibla Times".to_string(),

    ls_locating: "Finding your location...".to_string(),
    ls_fetching: "Loading prayer times...".to_string(),

    error_title: "Something went wrong".to_string(),
    error_geolocation_unavailable: "Geolocation is not supported on this device.".to_string(),
    error_geolocation_denied: "Please allow location access to see prayer times.".to_string(),
    error_geolocation_failed: "Could not determine your location.".to_string(),
    error_prayer_service: "Could not fetch prayer data.".to_string(),

    label_qibla: "Qibla".to_string(),
    label_more_times: "More times".to_string(),
    label_compass_fixed: "No compass sensor: dial shows north at the top.".to_string(),
    cardinals: ["N", "E", "S", "W"],
});

#[cfg(test)]
mod tests {
    use super::*;

    // Plain Latin text is covered by egui's default fonts; pictographs mostly are not.
    #[test]
    fn labels_use_only_plain_text() {
        let text = &*UI_TEXT;
        let labels = [
            &text.app_title,
            &text.ls_locating,
            &text.ls_fetching,
            &text.error_title,
            &text.error_geolocation_unavailable,
            &text.error_geolocation_denied,
            &text.error_geolocation_failed,
            &text.error_prayer_service,
            &text.label_qibla,
            &text.label_more_times,
            &text.label_compass_fixed,
        ];
        for label in labels {
            assert!(label.is_ascii(), "{label:?} needs a glyph outside the default fonts");
        }
        assert!(text.cardinals.iter().all(|c| c.is_ascii()));
    }
}
