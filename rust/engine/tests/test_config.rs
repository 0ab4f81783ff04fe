use loto90_engine::config::EngineConfig;
use loto90_engine::errors::ConfigError;

#[test]
fn defaults_match_the_house_rules() {
    let config = EngineConfig::default();
    assert_eq!(config.jackpot_threshold, 40);
    assert_eq!(config.jackpot_contribution_rate, 0.10);
    assert_eq!(config.jackpot_minimum, 5000);
    assert!(config.validate().is_ok());
}

#[test]
fn zero_threshold_is_rejected() {
    let config = EngineConfig {
        jackpot_threshold: 0,
        ..EngineConfig::default()
    };
    assert!(matches!(
        config.validate().unwrap_err(),
        ConfigError::InvalidValue(_)
    ));
}

#[test]
fn contribution_rate_must_be_a_positive_fraction() {
    for rate in [0.0, -0.1, 1.5] {
        let config = EngineConfig {
            jackpot_contribution_rate: rate,
            ..EngineConfig::default()
        };
        assert!(
            config.validate().is_err(),
            "rate {} should be rejected",
            rate
        );
    }

    let full = EngineConfig {
        jackpot_contribution_rate: 1.0,
        ..EngineConfig::default()
    };
    assert!(full.validate().is_ok(), "a 100% rate is legal");
}

#[test]
fn config_round_trips_through_json() {
    let config = EngineConfig::default();
    let json = serde_json::to_string(&config).unwrap();
    let back: EngineConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
}
