//! `.env` file emission.

use crate::config::Settings;

/// Render the settings into the fixed `.env` template: the nine recognized
/// keys as `KEY=value` lines under their explanatory comments. Pure text
/// rendering; values are inserted verbatim.
pub fn generate(settings: &Settings) -> String {
    format!(
        "# Docker Compose Environment Variables\n\
         # These can be overridden by setting them in your shell or in a .env file\n\
         \n\
         # User/Group Identifiers\n\
         # These help avoid permission issues between host and container\n\
         PUID={puid}\n\
         PGID={pgid}\n\
         UMASK={umask}\n\
         \n\
         # Container name prefix\n\
         CONTAINER_PREFIX={prefix}\n\
         \n\
         # Paths for persistent data\n\
         CONFIG_PATH={config_path}\n\
         DATA_PATH={data_path}\n\
         \n\
         # Container settings\n\
         TZ={tz}\n\
         RESTART_POLICY={restart_policy}\n\
         NETWORK_MODE={network_mode}\n",
        puid = settings.puid,
        pgid = settings.pgid,
        umask = settings.umask,
        prefix = settings.container_name_prefix,
        config_path = settings.config_path,
        data_path = settings.data_path,
        tz = settings.timezone,
        restart_policy = settings.restart_policy,
        network_mode = settings.network_mode,
    )
}
