//! Compose document assembly.
//!
//! Takes the selected services in order and produces the final
//! `docker-compose.yaml` text: banner, one `services:` root, one reindented
//! block per service, then the global port-conflict pass over the whole
//! document. Pure function of its inputs; identical selection and settings
//! always produce byte-identical output.

use crate::catalog::ServiceDefinition;
use crate::config::Settings;
use crate::generator::indent::reindent_fragment;
use crate::generator::interpolate::interpolate;
use crate::generator::ports::{detect_and_fix_port_conflicts, ConflictReport};

/// Fixed banner identifying the generator, kept byte-compatible with the
/// upstream DCM project so generated files are recognizable in the wild.
pub const COMPOSE_HEADER: &str = "\
#  ____   ____ __  __ \n\
# |  _ \\ / ___|  \\/  |\n\
# | | | | |   | |\\/| | This compose file was generated by DCM: https://github.com/ajnart/docker-compose-maker\n\
# | |_| | |___| |  | |\n\
# |____/ \\____|_|  |_|\n\
#\n";

/// The assembled document plus what the conflict pass changed.
/// `port_conflicts` is `None` when nothing had to be fixed.
#[derive(Debug, Clone)]
pub struct ComposeOutput {
    pub content: String,
    pub port_conflicts: Option<ConflictReport>,
}

/// Assemble the compose document for the given services, in selection order.
///
/// Each service with a non-empty body contributes a blank separator line, a
/// `# name: description` comment and its reindented body; empty bodies are
/// skipped entirely. With `interpolate_values` set, the nine `${...}`
/// placeholders are substituted inline; otherwise they stay in the file for
/// resolution against the `.env`.
pub fn generate(
    services: &[&ServiceDefinition],
    settings: &Settings,
    interpolate_values: bool,
) -> ComposeOutput {
    let mut document = String::from(COMPOSE_HEADER);
    document.push_str("services:\n");

    for service in services {
        if service.compose_body.trim().is_empty() {
            log::debug!("Skipping {}: empty compose body", service.id);
            continue;
        }

        document.push('\n');
        document.push_str(&format!("  # {}: {}\n", service.name, service.description));

        let mut body = reindent_fragment(&service.compose_body);
        if interpolate_values {
            body = interpolate(&body, settings);
        }
        document.push_str(&body);
        document.push('\n');
    }

    let (content, report) = detect_and_fix_port_conflicts(&document);
    if !report.is_empty() {
        log::info!("Fixed {} host port conflict(s)", report.fixed);
    }

    ComposeOutput {
        content,
        port_conflicts: if report.is_empty() { None } else { Some(report) },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn definition(id: &str, body: &str) -> ServiceDefinition {
        ServiceDefinition {
            id: id.to_string(),
            name: id.to_string(),
            description: format!("{} test service", id),
            compose_body: body.to_string(),
            is_unsupported: false,
        }
    }

    #[test]
    fn document_opens_with_banner_then_services_root() {
        let def = definition("app", "app:\n  image: nginx:latest");
        let output = generate(&[&def], &Settings::default(), false);

        assert!(output.content.starts_with(COMPOSE_HEADER));
        let after_header = &output.content[COMPOSE_HEADER.len()..];
        assert!(after_header.starts_with("services:\n"));
    }

    #[test]
    fn each_service_gets_comment_and_blank_separator() {
        let a = definition("alpha", "alpha:\n  image: a:1");
        let b = definition("beta", "beta:\n  image: b:1");
        let output = generate(&[&a, &b], &Settings::default(), false);

        assert!(output
            .content
            .contains("\n\n  # alpha: alpha test service\n  alpha:\n    image: a:1\n"));
        assert!(output
            .content
            .contains("\n\n  # beta: beta test service\n  beta:\n    image: b:1\n"));
    }

    #[test]
    fn empty_body_contributes_nothing() {
        let real = definition("app", "app:\n  image: nginx:latest");
        let empty = definition("ghost", "");
        let with_ghost = generate(&[&real, &empty], &Settings::default(), false);
        let without = generate(&[&real], &Settings::default(), false);

        assert_eq!(with_ghost.content, without.content);
        assert!(!with_ghost.content.contains("ghost"));
    }

    #[test]
    fn generation_is_deterministic() {
        let a = definition("alpha", "alpha:\n  image: a:1\n  ports:\n    - \"8080:80\"");
        let b = definition("beta", "beta:\n  image: b:1\n  ports:\n    - \"8080:81\"");
        let first = generate(&[&a, &b], &Settings::default(), false);
        let second = generate(&[&a, &b], &Settings::default(), false);
        assert_eq!(first.content, second.content);
    }

    #[test]
    fn end_to_end_conflict_example() {
        let x = definition(
            "servicex",
            "servicex:\n  image: x:latest\n  ports:\n    - \"8080:80\"",
        );
        let y = definition(
            "servicey",
            "servicey:\n  image: y:latest\n  ports:\n    - \"8080:81\"",
        );
        let output = generate(&[&x, &y], &Settings::default(), false);

        // both services nested under services:, ports at 4, items at 6
        assert!(output.content.contains("\n  servicex:\n"));
        assert!(output.content.contains("\n  servicey:\n"));
        assert!(output.content.contains("\n    ports:\n"));
        assert!(output.content.contains("\n      - \"8080:80\"\n"));
        assert!(output.content.contains("\n      - \"8081:81\"\n"));
        assert_eq!(output.content.matches("8080:").count(), 1);

        let report = output.port_conflicts.expect("one conflict expected");
        assert_eq!(report.fixed, 1);
        assert_eq!(report.conflicts.len(), 1);
    }

    #[test]
    fn no_conflicts_means_no_report() {
        let def = definition("app", "app:\n  image: nginx:latest\n  ports:\n    - \"80:80\"");
        let output = generate(&[&def], &Settings::default(), false);
        assert!(output.port_conflicts.is_none());
    }

    #[test]
    fn interpolation_flag_substitutes_placeholders() {
        let def = definition(
            "app",
            "app:\n  container_name: ${CONTAINER_PREFIX}app\n  environment:\n    - TZ=${TZ}",
        );
        let settings = Settings {
            container_name_prefix: "dcm-".into(),
            timezone: "Europe/Paris".into(),
            ..Settings::default()
        };

        let plain = generate(&[&def], &settings, false);
        assert!(plain.content.contains("${CONTAINER_PREFIX}app"));
        assert!(plain.content.contains("TZ=${TZ}"));

        let interpolated = generate(&[&def], &settings, true);
        assert!(interpolated.content.contains("container_name: dcm-app"));
        assert!(interpolated.content.contains("TZ=Europe/Paris"));
        assert!(!interpolated.content.contains("${"));
    }
}
