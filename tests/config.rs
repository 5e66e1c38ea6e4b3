use market_depth_wasm::config::DepthConfig;
use market_depth_wasm::domain::errors::DepthError;

#[test]
fn default_config_shape() {
    insta::assert_json_snapshot!(DepthConfig::default(), @r###"
    {
      "priceDecimals": 2,
      "barWidthPx": 160,
      "barHeightPx": 32,
      "bidColor": "#0066FF",
      "askColor": "#FF0000",
      "loadingText": "Loading market depth data...",
      "replayIntervalMs": 1000,
      "replayEnabled": true
    }
    "###);
}

#[test]
fn empty_object_is_default() {
    assert_eq!(DepthConfig::from_json("{}").unwrap(), DepthConfig::default());
}

#[test]
fn bad_json_is_config_error() {
    let err = DepthConfig::from_json("[1, 2]").unwrap_err();
    assert!(matches!(err, DepthError::Config(_)));
    assert!(err.to_string().starts_with("Config Error:"));
}

#[test]
fn oversized_precision_is_rejected() {
    assert!(DepthConfig::from_json(r#"{"priceDecimals": 12}"#).is_err());
}

#[test]
fn replay_can_be_switched_off() {
    let config = DepthConfig::from_json(r#"{"replayEnabled": false}"#).unwrap();
    assert!(!config.replay_enabled);
    assert_eq!(config.replay_interval_ms, 1000);
}
