use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "MedicareCoder";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "MEDICARE_CODER_DATA_DIR";

/// Consultation length assumed when neither the note nor the caller gives one.
pub const DEFAULT_CONSULTATION_MINUTES: u32 = 15;

/// Get the application data directory.
/// `$MEDICARE_CODER_DATA_DIR` wins; otherwise the platform local data dir,
/// falling back to `./data` when the platform has none.
pub fn data_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV).filter(|v| !v.is_empty()) {
        return PathBuf::from(dir);
    }
    dirs::data_local_dir()
        .map(|d| d.join(APP_NAME))
        .unwrap_or_else(|| PathBuf::from("data"))
}

/// Get the directory holding the MBS schedule file
pub fn catalog_dir() -> PathBuf {
    data_dir().join("mbs_codes")
}

/// Get the MBS schedule file path
pub fn catalog_path() -> PathBuf {
    catalog_dir().join("mbs_items.json")
}

/// Log filter used when `RUST_LOG` is not set.
pub fn default_log_filter() -> &'static str {
    "medicare_coder=info"
}
