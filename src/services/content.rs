//! Profile loading
//!
//! Reads an optional YAML profile override. Anything that goes wrong falls
//! back to the built-in profile; the error is handed back for display.

use crate::config::Config;
use crate::model::Profile;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Load a YAML profile from disk
pub fn load_profile<P: AsRef<Path>>(path: P) -> Result<Profile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read profile {}", path.display()))?;

    let profile: Profile = serde_yaml::from_str(&contents)
        .with_context(|| format!("Failed to parse profile {}", path.display()))?;

    Ok(profile)
}

/// Profile selected by the config, plus the load error if the override failed
pub fn resolve_profile(config: &Config) -> (Profile, Option<String>) {
    let Some(ref path) = config.content_path else {
        return (Profile::default(), None);
    };

    match load_profile(path) {
        Ok(profile) => {
            tracing::info!(path = %path, "loaded profile override");
            (profile, None)
        }
        Err(e) => {
            let message = format!("{:#}", e);
            tracing::warn!(path = %path, error = %message, "profile override rejected");
            (Profile::default(), Some(message))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_profile_from_yaml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "owner: Jane Doe\ntitle: Systems Engineer").unwrap();

        let profile = load_profile(file.path()).unwrap();
        assert_eq!(profile.owner, "Jane Doe");
        assert_eq!(profile.title, "Systems Engineer");
        assert_eq!(profile.skills, Profile::default().skills);
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = load_profile("/nonexistent/profile.yml").unwrap_err();
        assert!(format!("{:#}", err).contains("/nonexistent/profile.yml"));
    }

    #[test]
    fn test_resolve_without_override_uses_builtin() {
        let (profile, error) = resolve_profile(&Config::default());
        assert_eq!(profile, Profile::default());
        assert!(error.is_none());
    }

    #[test]
    fn test_resolve_bad_override_falls_back() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "skills: 42").unwrap();

        let config = Config {
            content_path: Some(file.path().to_string_lossy().to_string()),
            ..Config::default()
        };
        let (profile, error) = resolve_profile(&config);
        assert_eq!(profile, Profile::default());
        assert!(error.unwrap().contains("Failed to parse profile"));
    }
}
