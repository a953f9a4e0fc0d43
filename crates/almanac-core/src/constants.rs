/// Product name used to build identifiers.
pub const PRODUCT_NAME: &str = "Almanac";

/// Vendor segment of the default product identifier.
pub const PRODUCT_VENDOR: &str = "Almanac";

/// Default `PRODID` for calendars created by this library (RFC 5545 §3.7.3).
pub const DEFAULT_PRODID: &str =
    const_str::concat!("-//", PRODUCT_VENDOR, "//", PRODUCT_NAME, " iCalendar Codec//EN");

/// The only iCalendar `VERSION` defined by RFC 5545.
pub const ICALENDAR_VERSION: &str = "2.0";

/// Prefix for environment variables read by [`crate::config::Settings::load`].
pub const ENV_PREFIX: &str = "ALMANAC";

/// Optional settings file consulted after the environment.
pub const CONFIG_FILE: &str = "almanac.toml";
