//! Default locations for rit state.
//!
//! Everything rit persists lives under a single home directory. Commands
//! receive it from the `--home` flag (or `RIT_HOME`) and derive the concrete
//! file locations with the helpers below.

use std::path::{Path, PathBuf};

/// File name of the provider schema inside the rit home.
pub const PROVIDERS_FILENAME: &str = "providers.json";

/// File name of the repository registry inside the rit home.
pub const REPOSITORIES_FILENAME: &str = "repositories.json";

/// Directory holding one file per stored credential.
pub const CREDENTIALS_DIRNAME: &str = "credentials";

/// Returns the default rit home directory.
///
/// Uses `~/.rit` on every platform. Falls back to `.rit` in the current
/// directory if the home directory cannot be determined.
pub fn default_home() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join(".rit"))
        .unwrap_or_else(|| PathBuf::from(".rit"))
}

/// Location of the provider schema file.
pub fn providers_path(home: &Path) -> PathBuf {
    home.join(PROVIDERS_FILENAME)
}

/// Location of the repository registry file.
pub fn repositories_path(home: &Path) -> PathBuf {
    home.join(REPOSITORIES_FILENAME)
}

/// Directory where credential records are written.
pub fn credentials_dir(home: &Path) -> PathBuf {
    home.join(CREDENTIALS_DIRNAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_home_returns_path() {
        let home = default_home();
        assert!(home.ends_with(".rit"));
    }

    #[test]
    fn test_paths_are_under_home() {
        let home = Path::new("/tmp/rit-home");
        assert_eq!(
            providers_path(home),
            PathBuf::from("/tmp/rit-home/providers.json")
        );
        assert_eq!(
            repositories_path(home),
            PathBuf::from("/tmp/rit-home/repositories.json")
        );
        assert_eq!(
            credentials_dir(home),
            PathBuf::from("/tmp/rit-home/credentials")
        );
    }
}
