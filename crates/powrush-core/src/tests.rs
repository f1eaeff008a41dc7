use crate::{
    AmplificationResult, GateState, Intensity, PowerChannels, PowrushDefaults, PowrushError,
    ThrivingOutcome, SCARCITY_STATUS,
};

#[test]
fn lenient_parse_falls_back_to_divine_max() {
    for raw in ["", "GENTLE", "max_equitable", "cosmic ", "ultra"] {
        assert_eq!(Intensity::parse_or_default(raw), Intensity::DivineMax);
    }
    for level in Intensity::ALL {
        assert_eq!(Intensity::parse_or_default(level.as_str()), level);
    }
}

#[test]
fn strict_parse_reports_invalid_intensity() {
    let err = "ultra".parse::<Intensity>().unwrap_err();
    assert_eq!(err, PowrushError::InvalidIntensity("ultra".into()));
    assert_eq!("planetary".parse::<Intensity>().unwrap(), Intensity::Planetary);
}

#[test]
fn default_channels_match_documented_values() {
    let channels = PowerChannels::default();
    assert_eq!(channels.current(), "divine_sanctified");
    assert_eq!(channels.intensity, Intensity::DivineMax);
    assert!(channels.gate.is_active());
    assert_eq!(channels.scarcity_elimination_factor(), 1.0);
    assert!(channels.equitable_amplification().is_infinite());
    assert_eq!(channels.thriving_bias, 0.99);
}

#[test]
fn calibration_resets_scarcity_and_keeps_raw_bias() {
    let mut channels = PowerChannels::default();
    channels.apply_calibration(Intensity::Gentle, 1.7);
    assert_eq!(channels.scarcity_elimination_factor(), 1.0);
    assert_eq!(channels.thriving_bias, 1.7);
    assert_eq!(channels.intensity, Intensity::Gentle);
}

#[test]
fn defaults_from_partial_json() {
    let defaults = PowrushDefaults::from_json(r#"{"gate":"closed","thriving_bias":0.5}"#).unwrap();
    assert_eq!(defaults.gate, GateState::Closed);
    assert_eq!(defaults.thriving_bias, 0.5);
    assert_eq!(defaults.current, "divine_sanctified");
    assert_eq!(defaults.intensity, Intensity::DivineMax);
}

#[test]
fn defaults_reject_empty_current_and_bad_json() {
    assert!(PowrushDefaults::from_json(r#"{"current":"  "}"#).is_err());
    assert!(PowrushDefaults::from_json(r#"{"intensity":7}"#).is_err());
    assert!(PowrushDefaults::from_json("not json").is_err());
}

#[test]
fn defaults_coerce_unknown_intensity() {
    let defaults = PowrushDefaults::from_json(r#"{"intensity":"ultra"}"#).unwrap();
    assert_eq!(defaults.intensity, Intensity::DivineMax);
    let defaults = PowrushDefaults::from_json(r#"{"intensity":"gentle"}"#).unwrap();
    assert_eq!(defaults.intensity, Intensity::Gentle);
}

#[test]
fn deserialized_channels_keep_fixed_constants() {
    let raw = r#"{
        "current": "divine_sanctified",
        "intensity": "cosmic",
        "gate": "active_permanent",
        "scarcity_elimination_factor": 0.25,
        "equitable_amplification": 3.0,
        "thriving_bias": 0.5
    }"#;
    let channels: PowerChannels = serde_json::from_str(raw).unwrap();
    assert_eq!(channels.scarcity_elimination_factor(), 1.0);
    assert!(channels.equitable_amplification().is_infinite());
    assert_eq!(channels.intensity, Intensity::Cosmic);
    assert_eq!(channels.thriving_bias, 0.5);
}

#[test]
fn snapshot_copies_channels() {
    let channels = PowerChannels::default();
    let result =
        AmplificationResult::snapshot(&channels, "x", 5.0, ThrivingOutcome::SafeguardFallback);
    assert_eq!(result.scope, "x");
    assert_eq!(result.nodes_covered, 5.0);
    assert_eq!(result.power_infused, channels.current());
    assert_eq!(result.scarcity_status, SCARCITY_STATUS);
    assert!(!result.is_thriving());
    assert_eq!(result.thriving_probability(), 0.0);
}
