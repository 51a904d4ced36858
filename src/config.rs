use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "Clinara";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default tracing filter when RUST_LOG is unset.
pub fn default_log_filter() -> String {
    format!("{}=info", env!("CARGO_PKG_NAME"))
}

/// Get the application data directory
/// ~/Clinara/ on all platforms (user-visible)
pub fn app_data_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Cannot determine home directory");
    home.join("Clinara")
}

/// Get the exports directory (dashboard reports land here)
pub fn exports_dir() -> PathBuf {
    app_data_dir().join("exports")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_data_dir_under_home() {
        let dir = app_data_dir();
        let home = dirs::home_dir().unwrap();
        assert!(dir.starts_with(home));
        assert!(dir.ends_with("Clinara"));
    }

    #[test]
    fn exports_dir_under_app_data() {
        let exports = exports_dir();
        let app = app_data_dir();
        assert!(exports.starts_with(app));
        assert!(exports.ends_with("exports"));
    }

    #[test]
    fn app_name_is_clinara() {
        assert_eq!(APP_NAME, "Clinara");
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, "0.1.0");
    }

    #[test]
    fn default_filter_scopes_to_crate() {
        assert!(default_log_filter().starts_with("clinara="));
    }
}
