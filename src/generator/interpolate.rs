//! Placeholder interpolation.
//!
//! Service bodies reference settings through a fixed set of nine
//! `${NAME}` tokens. When inline interpolation is requested the tokens are
//! replaced with the concrete setting values; otherwise they are left for
//! Docker Compose to resolve against the emitted `.env` file.

use crate::config::Settings;

/// Replace every occurrence of the nine recognized placeholders with the
/// matching settings value. Unknown `${...}` tokens are left untouched, and
/// values are inserted verbatim with no quoting or escaping.
///
/// Substitution is purely textual and never introduces or removes lines, so
/// it commutes with reindentation.
pub fn interpolate(body: &str, settings: &Settings) -> String {
    body.replace("${CONFIG_PATH}", &settings.config_path)
        .replace("${DATA_PATH}", &settings.data_path)
        .replace("${TZ}", &settings.timezone)
        .replace("${PUID}", &settings.puid)
        .replace("${PGID}", &settings.pgid)
        .replace("${UMASK}", &settings.umask)
        .replace("${RESTART_POLICY}", &settings.restart_policy)
        .replace("${NETWORK_MODE}", &settings.network_mode)
        .replace("${CONTAINER_PREFIX}", &settings.container_name_prefix)
}
