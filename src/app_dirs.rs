use directories::ProjectDirs;
use std::path::PathBuf;

/// Centralized application directory resolution
pub struct AppDirs;

impl AppDirs {
    /// `<config_dir>/lottle/config.json`, falling back to the working directory
    /// when no home directory can be resolved.
    pub fn config_path() -> PathBuf {
        ProjectDirs::from("", "", "lottle")
            .map(|proj_dirs| proj_dirs.config_dir().join("config.json"))
            .unwrap_or_else(|| PathBuf::from("lottle_config.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_path_is_json_under_app_name() {
        let path = AppDirs::config_path();

        assert_eq!(path.extension().and_then(|ext| ext.to_str()), Some("json"));
        assert!(path.to_string_lossy().contains("lottle"));
    }
}
