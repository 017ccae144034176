use super::*;

#[test]
fn every_preset_expands_to_a_valid_keyframe() {
    for preset in AnimationPreset::ALL {
        let kf = preset.keyframe();
        kf.validate().unwrap();
        assert_eq!(kf.start_time, Some(0.0));
        assert_eq!(AnimationPreset::from_key(preset.key()), Some(preset));
    }
}

#[test]
fn bounce_in_uses_elastic_scale() {
    let kf = AnimationPreset::BounceIn.keyframe();
    assert_eq!(kf.property, Property::Scale);
    assert_eq!(kf.ease, Some(Ease::ElasticOut));
    assert_eq!(kf.duration, Some(800.0));
}

#[test]
fn slide_in_left_starts_off_canvas() {
    let kf = AnimationPreset::SlideInLeft.keyframe();
    assert_eq!((kf.from, kf.to), (Some(-200.0), Some(0.0)));
}

#[test]
fn serde_uses_preset_keys() {
    let p: AnimationPreset = serde_json::from_str("\"slideInUp\"").unwrap();
    assert_eq!(p, AnimationPreset::SlideInUp);
}
