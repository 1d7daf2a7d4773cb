use std::{path::PathBuf, str::FromStr};
use thiserror::Error;

pub const ENV_UNBOUND: &str = "CATALOG_ADMIN_UNBOUND";
pub const ENV_DELETE: &str = "CATALOG_ADMIN_DELETE";
pub const ENV_DIALOG_DIR: &str = "CATALOG_ADMIN_DIALOG_DIR";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be one of {expected}, got {got:?}")]
    InvalidValue {
        var: &'static str,
        expected: &'static str,
        got: String,
    },
}

/// What a mutation does while no file is bound to the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnboundPolicy {
    /// Apply the change in memory, then warn that nothing was written.
    #[default]
    WarnAfter,
    /// Refuse the change with `NoFileBound`.
    Block,
}

impl FromStr for UnboundPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "warn" => Ok(Self::WarnAfter),
            "block" => Ok(Self::Block),
            _ => Err(ConfigError::InvalidValue {
                var: ENV_UNBOUND,
                expected: "warn, block",
                got: s.to_string(),
            }),
        }
    }
}

/// How many records a delete-by-name removes when names collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeletePolicy {
    #[default]
    RemoveAll,
    FirstMatch,
}

impl FromStr for DeletePolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::RemoveAll),
            "first" => Ok(Self::FirstMatch),
            _ => Err(ConfigError::InvalidValue {
                var: ENV_DELETE,
                expected: "all, first",
                got: s.to_string(),
            }),
        }
    }
}

/// Policy knobs shared by both catalogs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdminConfig {
    pub unbound: UnboundPolicy,
    pub delete: DeletePolicy,
    /// Starting directory for file dialogs.
    pub dialog_dir: Option<PathBuf>,
}

impl AdminConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                    | Default     |
    /// |----------------------------|-------------|
    /// | `CATALOG_ADMIN_UNBOUND`    | `warn`      |
    /// | `CATALOG_ADMIN_DELETE`     | `all`       |
    /// | `CATALOG_ADMIN_DIALOG_DIR` | home dir    |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let unbound = lookup(ENV_UNBOUND)
            .map(|v| v.parse::<UnboundPolicy>())
            .transpose()?
            .unwrap_or_default();
        let delete = lookup(ENV_DELETE)
            .map(|v| v.parse::<DeletePolicy>())
            .transpose()?
            .unwrap_or_default();
        let dialog_dir = lookup(ENV_DIALOG_DIR)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .or_else(home_dir);

        Ok(Self {
            unbound,
            delete,
            dialog_dir,
        })
    }
}

fn home_dir() -> Option<PathBuf> {
    std::env::var_os("USERPROFILE")
        .or_else(|| std::env::var_os("HOME"))
        .map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = AdminConfig::from_lookup(lookup(&[])).expect("config");
        assert_eq!(cfg.unbound, UnboundPolicy::WarnAfter);
        assert_eq!(cfg.delete, DeletePolicy::RemoveAll);
    }

    #[test]
    fn parses_policies_case_insensitively() {
        let cfg = AdminConfig::from_lookup(lookup(&[
            (ENV_UNBOUND, "Block"),
            (ENV_DELETE, " first "),
            (ENV_DIALOG_DIR, "/srv/catalog"),
        ]))
        .expect("config");
        assert_eq!(cfg.unbound, UnboundPolicy::Block);
        assert_eq!(cfg.delete, DeletePolicy::FirstMatch);
        assert_eq!(cfg.dialog_dir, Some(PathBuf::from("/srv/catalog")));
    }

    #[test]
    fn rejects_unknown_values() {
        let err = AdminConfig::from_lookup(lookup(&[(ENV_DELETE, "some")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                var: ENV_DELETE,
                expected: "all, first",
                got: "some".to_string(),
            }
        );
    }
}
