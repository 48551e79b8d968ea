use egui::Color32;
use egui_cyberpunk::{ButtonConfig, ButtonSize, ColorError, CyberpunkButton};

#[test]
fn test_config_from_json() {
    let json = r##"{
        "label": "Override",
        "glow_color": "#8AFF00",
        "accent_color": "#00FFD1",
        "size": "large"
    }"##;
    let cfg: ButtonConfig = serde_json::from_str(json).expect("parse config");
    let style = cfg.resolve().expect("valid colors");
    assert_eq!(style.glow, Color32::from_rgb(0x8a, 0xff, 0x00));
    assert_eq!(style.accent, Color32::from_rgb(0x00, 0xff, 0xd1));
    assert_eq!(style.size, ButtonSize::Large);
}

#[test]
fn test_size_aliases() {
    for (raw, size) in [
        ("\"sm\"", ButtonSize::Small),
        ("\"md\"", ButtonSize::Medium),
        ("\"lg\"", ButtonSize::Large),
        ("\"small\"", ButtonSize::Small),
    ] {
        let parsed: ButtonSize = serde_json::from_str(raw).expect("parse size");
        assert_eq!(parsed, size);
    }
    assert_eq!(
        serde_json::to_string(&ButtonSize::Large).expect("serialize size"),
        "\"large\""
    );
}

#[test]
fn test_missing_fields_use_defaults() {
    let cfg: ButtonConfig = serde_json::from_str(r#"{ "label": "Engage" }"#).expect("parse config");
    assert_eq!(cfg.size, ButtonSize::Medium);
    let button = CyberpunkButton::from_config(&cfg).expect("default colors are valid");
    assert_eq!(button.get_style().glow, Color32::from_rgb(0x00, 0xf0, 0xff));
    assert_eq!(button.get_style().accent, Color32::from_rgb(0xff, 0x00, 0xea));
}

#[test]
fn test_invalid_color_surfaces_at_boundary() {
    let cfg: ButtonConfig =
        serde_json::from_str(r##"{ "label": "x", "glow_color": "#12345" }"##).expect("parse config");
    let err = CyberpunkButton::from_config(&cfg).expect_err("five digits is not a color");
    assert_eq!(
        err,
        ColorError::InvalidLength {
            value: "#12345".to_owned(),
            len: 5
        }
    );
    assert_eq!(
        err.to_string(),
        "color `#12345` has 5 hex digits, expected 3, 4, 6 or 8"
    );
}
