/// Application-level constants
pub const APP_NAME: &str = "Hemolog";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Log filter used when RUST_LOG is not set.
pub fn default_log_filter() -> String {
    format!("{}=info", env!("CARGO_PKG_NAME"))
}
