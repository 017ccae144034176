use super::*;

#[test]
fn presets_round_trip_through_keys() {
    for preset in CanvasPreset::ALL {
        assert_eq!(CanvasPreset::from_key(preset.key()), Some(preset));
    }
    assert_eq!(CanvasPreset::from_key("myspace"), None);
}

#[test]
fn canvas_from_preset_copies_size() {
    let c = Canvas::from_preset(CanvasPreset::YoutubeThumbnail);
    assert_eq!(c.preset, "youtube-thumb");
    assert_eq!((c.width, c.height), (1280, 720));
    assert_eq!(Canvas::default().preset, "ig-story");
}

#[test]
fn custom_canvas_rejects_zero_size() {
    assert!(Canvas::custom(0, 10).is_err());
    assert!(Canvas::custom(10, 10).is_ok());
}

#[test]
fn clamp_bounds_both_sides() {
    assert_eq!(clamp(-5.0, 0.0, 10.0), 0.0);
    assert_eq!(clamp(15.0, 0.0, 10.0), 10.0);
    assert_eq!(clamp(5.0, 0.0, 10.0), 5.0);
}

#[test]
fn format_time_uses_two_decimals() {
    assert_eq!(format_time(0.0), "0.00");
    assert_eq!(format_time(1234.0), "1.23");
    assert_eq!(format_time(5000.0), "5.00");
}
