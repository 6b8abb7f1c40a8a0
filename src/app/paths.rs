// SPDX-License-Identifier: MPL-2.0
//! Where `settings.toml` lives.
//!
//! Candidates, most specific first: an explicit directory passed by the
//! caller, the `--config-dir` flag, `ICED_SHOWCASE_CONFIG_DIR`, then the
//! platform config directory from `dirs` with an `IcedShowcase` subfolder.

use std::path::PathBuf;
use std::sync::OnceLock;

/// Subdirectory created under the platform config directory.
const APP_DIR_NAME: &str = "IcedShowcase";

/// Environment variable that relocates the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_SHOWCASE_CONFIG_DIR";

static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the `--config-dir` flag for the rest of the process.
///
/// Returns `false` when a value was already recorded; the first one wins.
pub fn init_cli_override(config_dir: Option<String>) -> bool {
    let accepted = CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_ok();
    if !accepted {
        tracing::warn!("config directory override was already initialized");
    }
    accepted
}

/// Config directory, preferring `explicit` when given.
///
/// Returns `None` only when nothing is configured and the platform has no
/// config directory.
pub fn get_app_config_dir_with_override(explicit: Option<PathBuf>) -> Option<PathBuf> {
    let cli = CLI_CONFIG_DIR.get().cloned().flatten();
    let env = std::env::var_os(ENV_CONFIG_DIR).map(PathBuf::from);
    resolve(explicit, cli, env, dirs::config_dir)
}

/// Pure resolution step; `platform` is only consulted as a last resort.
fn resolve(
    explicit: Option<PathBuf>,
    cli: Option<PathBuf>,
    env: Option<PathBuf>,
    platform: impl FnOnce() -> Option<PathBuf>,
) -> Option<PathBuf> {
    explicit
        .or(cli)
        .or(env.filter(|path| !path.as_os_str().is_empty()))
        .or_else(|| platform().map(|base| base.join(APP_DIR_NAME)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn platform() -> Option<PathBuf> {
        Some(PathBuf::from("/home/ada/.config"))
    }

    fn some(path: &str) -> Option<PathBuf> {
        Some(PathBuf::from(path))
    }

    #[test]
    fn explicit_directory_wins_over_everything() {
        let resolved = resolve(some("/explicit"), some("/cli"), some("/env"), platform);
        assert_eq!(resolved, some("/explicit"));
    }

    #[test]
    fn cli_flag_beats_environment() {
        assert_eq!(resolve(None, some("/cli"), some("/env"), platform), some("/cli"));
    }

    #[test]
    fn environment_beats_platform_default() {
        assert_eq!(resolve(None, None, some("/env"), platform), some("/env"));
    }

    #[test]
    fn empty_environment_value_is_ignored() {
        assert_eq!(
            resolve(None, None, some(""), platform),
            some("/home/ada/.config/IcedShowcase")
        );
    }

    #[test]
    fn platform_default_gets_app_subdirectory() {
        assert_eq!(
            resolve(None, None, None, platform),
            some("/home/ada/.config/IcedShowcase")
        );
    }

    #[test]
    fn no_candidate_yields_none() {
        assert_eq!(resolve(None, None, None, || None), None);
    }

    #[test]
    fn explicit_override_is_returned_unchanged() {
        let explicit = PathBuf::from("/custom/config/path");
        assert_eq!(
            get_app_config_dir_with_override(Some(explicit.clone())),
            Some(explicit)
        );
    }
}
