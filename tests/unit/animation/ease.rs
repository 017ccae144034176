use super::*;

const EPS: f64 = 1e-9;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= EPS
}

#[test]
fn endpoints_are_stable() {
    for ease in Ease::ALL {
        assert!(close(ease.apply(0.0), 0.0), "{ease} at 0");
        assert!(close(ease.apply(1.0), 1.0), "{ease} at 1");
    }
}

#[test]
fn elastic_returns_exact_endpoints() {
    assert_eq!(Ease::ElasticOut.apply(0.0), 0.0);
    assert_eq!(Ease::ElasticOut.apply(1.0), 1.0);
}

#[test]
fn midpoints_match_closed_forms() {
    for t in [0.25, 0.5, 0.75] {
        let c1 = 1.70158;
        let c3 = c1 + 1.0;
        let expected = [
            (Ease::Linear, t),
            (Ease::Power1Out, t),
            (Ease::Power2Out, 1.0 - (1.0 - t) * (1.0 - t)),
            (Ease::Power3Out, 1.0 - (1.0 - t) * (1.0 - t) * (1.0 - t)),
            (Ease::Power2In, t * t),
            (Ease::Power3In, t * t * t),
            (
                Ease::Power2InOut,
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0) * (-2.0 * t + 2.0) / 2.0
                },
            ),
            (
                Ease::BackOut,
                1.0 + c3 * (t - 1.0) * (t - 1.0) * (t - 1.0) + c1 * (t - 1.0) * (t - 1.0),
            ),
            (
                Ease::ElasticOut,
                2f64.powf(-10.0 * t) * ((t * 10.0 - 0.75) * (2.0 * std::f64::consts::PI) / 3.0).sin()
                    + 1.0,
            ),
        ];
        for (ease, want) in expected {
            assert!(close(ease.apply(t), want), "{ease} at {t}");
        }
    }
}

#[test]
fn known_values() {
    assert!(close(Ease::Power2Out.apply(0.5), 0.75));
    assert!(close(Ease::Power3Out.apply(0.5), 0.875));
    assert!(close(Ease::Power2InOut.apply(0.25), 0.125));
    assert!(close(Ease::Power2InOut.apply(0.75), 0.875));
    assert!(close(Ease::ElasticOut.apply(0.5), 1.015625));
}

#[test]
fn back_out_overshoots() {
    assert!(Ease::BackOut.apply(0.8) > 1.0);
}

#[test]
fn inputs_are_not_clamped() {
    assert_eq!(Ease::Linear.apply(1.5), 1.5);
    assert!(close(Ease::Power2In.apply(-1.0), 1.0));
}

#[test]
fn lookup_falls_back_to_power2_out() {
    assert_eq!(Ease::from_name(None), Ease::Power2Out);
    assert_eq!(Ease::from_name(Some("bounce.out")), Ease::Power2Out);
    assert_eq!(Ease::from_name(Some("")), Ease::Power2Out);
    assert_eq!(Ease::from_name(Some("power3.in")), Ease::Power3In);
}

#[test]
fn names_parse_back() {
    for ease in Ease::ALL {
        assert_eq!(Ease::parse(ease.name()), Some(ease));
    }
    assert_eq!(Ease::parse("elastic.out(1,0.5)"), Some(Ease::ElasticOut));
    assert_eq!(Ease::parse("Power2.Out"), None);
}

#[test]
fn whitespace_only_relaxed_inside_parameters() {
    assert_eq!(Ease::parse("elastic.out( 1 ,0.5 )"), Some(Ease::ElasticOut));
    assert_eq!(Ease::parse("back.out( 1.7)"), Some(Ease::BackOut));
    assert_eq!(Ease::parse("lin ear"), None);
    assert_eq!(Ease::parse("power2 .out"), None);
    assert_eq!(Ease::parse(" linear"), None);
    assert_eq!(Ease::from_name(Some("lin ear")), Ease::Power2Out);
}

#[test]
fn serde_uses_names_and_never_fails() {
    assert_eq!(
        serde_json::to_string(&Ease::BackOut).unwrap(),
        "\"back.out(1.7)\""
    );
    let e: Ease = serde_json::from_str("\"power2.inOut\"").unwrap();
    assert_eq!(e, Ease::Power2InOut);
    let unknown: Ease = serde_json::from_str("\"wobble\"").unwrap();
    assert_eq!(unknown, Ease::Power2Out);
}
