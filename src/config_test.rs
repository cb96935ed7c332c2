use super::*;

/// # Safety
/// Tests must run with `--test-threads=1` to avoid env races.
unsafe fn clear_listings_env() {
    unsafe {
        std::env::remove_var("LISTINGS_TITLE");
        std::env::remove_var("LISTINGS_BRAND");
        std::env::remove_var("LISTINGS_LOG_LEVEL");
    }
}

#[test]
fn default_config_values() {
    let cfg = AppConfig::default();
    assert_eq!(cfg.title, DEFAULT_TITLE);
    assert_eq!(cfg.brand, DEFAULT_BRAND);
    assert_eq!(cfg.log_level, LevelFilter::Info);
}

#[test]
fn env_overrides_and_fallbacks() {
    unsafe {
        clear_listings_env();
    }
    assert_eq!(AppConfig::try_from_env(), Ok(AppConfig::default()));

    unsafe {
        std::env::set_var("LISTINGS_TITLE", "  Homes for Sale ");
        std::env::set_var("LISTINGS_BRAND", "Prabhu Realty");
        std::env::set_var("LISTINGS_LOG_LEVEL", "DEBUG");
    }
    let cfg = AppConfig::try_from_env().unwrap();
    assert_eq!(cfg.title, "Homes for Sale");
    assert_eq!(cfg.brand, "Prabhu Realty");
    assert_eq!(cfg.log_level, LevelFilter::Debug);

    unsafe {
        std::env::set_var("LISTINGS_TITLE", "   ");
        std::env::set_var("LISTINGS_LOG_LEVEL", "loud");
    }
    assert_eq!(
        AppConfig::try_from_env(),
        Err(ConfigError::InvalidLogLevel { var: "LISTINGS_LOG_LEVEL", value: "loud".to_owned() })
    );
    assert_eq!(AppConfig::from_env(), AppConfig::default());

    unsafe { clear_listings_env() };
}

#[test]
fn parse_log_level_accepts_known_levels() {
    assert_eq!(parse_log_level("X", "off"), Ok(LevelFilter::Off));
    assert_eq!(parse_log_level("X", "warn"), Ok(LevelFilter::Warn));
    assert_eq!(parse_log_level("X", "Trace"), Ok(LevelFilter::Trace));
}

#[test]
fn parse_log_level_rejects_unknown() {
    let err = parse_log_level("X", "verbose").unwrap_err();
    assert_eq!(err.to_string(), "invalid value \"verbose\" for X: expected off, error, warn, info, debug or trace");
}
