use crate::catalog::ServiceDefinition;
use crate::config::Settings;

pub mod compose_gen;
pub mod env_gen;
pub mod indent;
pub mod interpolate;
pub mod ports;

pub use compose_gen::{ComposeOutput, COMPOSE_HEADER};
pub use ports::ConflictReport;

/// Assemble the `docker-compose.yaml` document for the selected services.
pub fn generate_compose(
    services: &[&ServiceDefinition],
    settings: &Settings,
    interpolate_values: bool,
) -> ComposeOutput {
    compose_gen::generate(services, settings, interpolate_values)
}

/// Render the matching `.env` file for the same settings.
pub fn generate_env_file(settings: &Settings) -> String {
    env_gen::generate(settings)
}
