//! Site configuration with defaults and build-time overrides.
//!
//! The browser has no process environment, so overrides are baked in at
//! compile time through `option_env!`. Anything missing or unparsable falls
//! back to the defaults below.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE: &str = "";
pub const DEFAULT_COMMENT_LIMIT: u32 = 10;
/// Largest `limit` the `/data` endpoint accepts.
pub const MAX_COMMENT_LIMIT: u32 = 50;
/// Longest comment the `/data` endpoint accepts, in characters.
pub const MAX_COMMENT_CHARS: usize = 280;
pub const DEFAULT_SLIDE_INTERVAL_MS: u32 = 1000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Prefix for every backend path; empty means same origin.
    pub api_base: String,
    pub default_limit: u32,
    pub max_limit: u32,
    pub max_comment_chars: usize,
    pub slide_interval_ms: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_owned(),
            default_limit: DEFAULT_COMMENT_LIMIT,
            max_limit: MAX_COMMENT_LIMIT,
            max_comment_chars: MAX_COMMENT_CHARS,
            slide_interval_ms: DEFAULT_SLIDE_INTERVAL_MS,
        }
    }
}

/// Raw override values, one per `PORTFOLIO_*` variable.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawOverrides<'a> {
    pub api_base: Option<&'a str>,
    pub default_limit: Option<&'a str>,
    pub max_limit: Option<&'a str>,
    pub max_comment_chars: Option<&'a str>,
    pub slide_interval_ms: Option<&'a str>,
}

impl SiteConfig {
    /// Build config from compile-time variables.
    ///
    /// Optional:
    /// - `PORTFOLIO_API_BASE`: backend origin/prefix, default same origin
    /// - `PORTFOLIO_DEFAULT_LIMIT`: default 10
    /// - `PORTFOLIO_MAX_LIMIT`: default 50
    /// - `PORTFOLIO_MAX_COMMENT_CHARS`: default 280
    /// - `PORTFOLIO_SLIDE_INTERVAL_MS`: default 1000
    pub fn from_build_env() -> Self {
        Self::from_overrides(RawOverrides {
            api_base: option_env!("PORTFOLIO_API_BASE"),
            default_limit: option_env!("PORTFOLIO_DEFAULT_LIMIT"),
            max_limit: option_env!("PORTFOLIO_MAX_LIMIT"),
            max_comment_chars: option_env!("PORTFOLIO_MAX_COMMENT_CHARS"),
            slide_interval_ms: option_env!("PORTFOLIO_SLIDE_INTERVAL_MS"),
        })
    }

    #[must_use]
    pub fn from_overrides(raw: RawOverrides<'_>) -> Self {
        let api_base = raw
            .api_base
            .map_or(DEFAULT_API_BASE, str::trim)
            .trim_end_matches('/')
            .to_owned();
        let max_limit = parse_or(raw.max_limit, MAX_COMMENT_LIMIT).max(1);
        let default_limit = parse_or(raw.default_limit, DEFAULT_COMMENT_LIMIT).min(max_limit);
        let max_comment_chars = parse_or(raw.max_comment_chars, MAX_COMMENT_CHARS).max(1);
        let slide_interval_ms = parse_or(raw.slide_interval_ms, DEFAULT_SLIDE_INTERVAL_MS).max(1);

        Self { api_base, default_limit, max_limit, max_comment_chars, slide_interval_ms }
    }

    /// Join a backend path (leading `/`) onto `api_base`.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.api_base)
    }

    /// Resolve the limit typed into the limit input.
    ///
    /// Blank or unparsable input falls back to `default_limit`; anything above
    /// `max_limit` is clamped.
    #[must_use]
    pub fn parse_limit_input(&self, raw: &str) -> u32 {
        parse_or(Some(raw), self.default_limit).min(self.max_limit)
    }
}

fn parse_or<T: std::str::FromStr>(raw: Option<&str>, default: T) -> T {
    match raw.map(str::trim).map(str::parse::<T>) {
        Some(Ok(value)) => value,
        _ => default,
    }
}
