use super::*;

#[test]
fn defaults_match_backend_limits() {
    let config = SiteConfig::default();
    assert_eq!(config.api_base, "");
    assert_eq!(config.default_limit, 10);
    assert_eq!(config.max_limit, 50);
    assert_eq!(config.max_comment_chars, 280);
    assert_eq!(config.slide_interval_ms, 1000);
}

#[test]
fn no_overrides_yields_defaults() {
    assert_eq!(SiteConfig::from_overrides(RawOverrides::default()), SiteConfig::default());
}

#[test]
fn overrides_are_parsed_and_trimmed() {
    let config = SiteConfig::from_overrides(RawOverrides {
        api_base: Some(" https://example.com/ "),
        default_limit: Some(" 5 "),
        max_limit: Some("20"),
        max_comment_chars: Some("140"),
        slide_interval_ms: Some("250"),
    });
    assert_eq!(config.api_base, "https://example.com");
    assert_eq!(config.default_limit, 5);
    assert_eq!(config.max_limit, 20);
    assert_eq!(config.max_comment_chars, 140);
    assert_eq!(config.slide_interval_ms, 250);
}

#[test]
fn unparsable_overrides_fall_back() {
    let config = SiteConfig::from_overrides(RawOverrides {
        default_limit: Some("lots"),
        slide_interval_ms: Some("-3"),
        ..RawOverrides::default()
    });
    assert_eq!(config.default_limit, DEFAULT_COMMENT_LIMIT);
    assert_eq!(config.slide_interval_ms, DEFAULT_SLIDE_INTERVAL_MS);
}

#[test]
fn default_limit_clamped_to_max() {
    let config = SiteConfig::from_overrides(RawOverrides {
        default_limit: Some("80"),
        max_limit: Some("30"),
        ..RawOverrides::default()
    });
    assert_eq!(config.default_limit, 30);
}

#[test]
fn endpoint_prefixes_api_base() {
    let mut config = SiteConfig::default();
    assert_eq!(config.endpoint("/data"), "/data");
    config.api_base = "https://example.com".to_owned();
    assert_eq!(config.endpoint("/like"), "https://example.com/like");
}

#[test]
fn parse_limit_input_handles_blank_garbage_and_overflow() {
    let config = SiteConfig::default();
    assert_eq!(config.parse_limit_input("7"), 7);
    assert_eq!(config.parse_limit_input(" 12 "), 12);
    assert_eq!(config.parse_limit_input(""), 10);
    assert_eq!(config.parse_limit_input("-1"), 10);
    assert_eq!(config.parse_limit_input("abc"), 10);
    assert_eq!(config.parse_limit_input("500"), 50);
    assert_eq!(config.parse_limit_input("0"), 0);
}
