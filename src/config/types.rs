use serde::{Deserialize, Serialize};

/// User settings substituted into generated compose and `.env` files.
///
/// Every field is a plain string because the values only ever appear as
/// template text; the engine performs no numeric interpretation. A
/// `Settings` passed into generation is always fully populated. Partial
/// records exist only inside [`SettingsOverlay`] while a settings file is
/// being merged over the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub puid: String,
    pub pgid: String,
    pub umask: String,
    pub container_name_prefix: String,
    pub config_path: String,
    pub data_path: String,
    pub timezone: String,
    pub restart_policy: String,
    pub network_mode: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            puid: "1000".to_string(),
            pgid: "1000".to_string(),
            umask: "022".to_string(),
            container_name_prefix: "".to_string(),
            config_path: "./config".to_string(),
            data_path: "./data".to_string(),
            timezone: "UTC".to_string(),
            restart_policy: "unless-stopped".to_string(),
            network_mode: "bridge".to_string(),
        }
    }
}

/// Partial settings as read from a TOML settings file. Absent fields keep
/// their defaults when applied.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SettingsOverlay {
    pub puid: Option<String>,
    pub pgid: Option<String>,
    pub umask: Option<String>,
    pub container_name_prefix: Option<String>,
    pub config_path: Option<String>,
    pub data_path: Option<String>,
    pub timezone: Option<String>,
    pub restart_policy: Option<String>,
    pub network_mode: Option<String>,
}

impl SettingsOverlay {
    pub fn apply(self, base: Settings) -> Settings {
        Settings {
            puid: self.puid.unwrap_or(base.puid),
            pgid: self.pgid.unwrap_or(base.pgid),
            umask: self.umask.unwrap_or(base.umask),
            container_name_prefix: self
                .container_name_prefix
                .unwrap_or(base.container_name_prefix),
            config_path: self.config_path.unwrap_or(base.config_path),
            data_path: self.data_path.unwrap_or(base.data_path),
            timezone: self.timezone.unwrap_or(base.timezone),
            restart_policy: self.restart_policy.unwrap_or(base.restart_policy),
            network_mode: self.network_mode.unwrap_or(base.network_mode),
        }
    }
}
