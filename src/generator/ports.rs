//! Host-port conflict detection and repair.
//!
//! Independently authored services routinely claim the same host port. After
//! assembly the whole document gets one global pass: host-side bindings are
//! collected per service, and every port claimed by more than one service is
//! kept for the first claimant (document order) while later claimants are
//! remapped to the next free port above their original one.
//!
//! Only list entries shaped `- "host:container"` (optionally with a
//! container range and `/tcp` or `/udp` suffix, quotes optional) are
//! considered. Anything else under `ports:` (IP-prefixed bindings,
//! placeholder ports, long syntax) is left untouched: skipping an entry
//! only under-detects, while a bad rewrite would corrupt the file.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{HashMap, HashSet};

// Service names sit at indent 2 in the assembled document.
static SERVICE_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^  ([A-Za-z0-9][A-Za-z0-9_.-]*):\s*$").unwrap());

static PORT_BINDING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"^(?P<prefix>\s*-\s*["']?)(?P<host>\d+):(?P<container>\d+(?:-\d+)?)(?P<proto>/(?:tcp|udp))?(?P<suffix>["']?\s*)$"#,
    )
    .unwrap()
});

/// What the conflict pass changed, if anything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConflictReport {
    pub fixed: usize,
    pub conflicts: Vec<String>,
}

impl ConflictReport {
    pub fn is_empty(&self) -> bool {
        self.fixed == 0
    }
}

#[derive(Debug)]
struct Binding {
    line: usize,
    service: String,
    host_port: u32,
    /// `/tcp` or `/udp` suffix; absent means tcp.
    protocol: String,
}

/// Scan assembled compose text for host-port collisions and rewrite the
/// colliding lines. Returns the corrected text and a report of every
/// reassignment; on a collision-free document the text comes back unchanged
/// and the report is empty.
pub fn detect_and_fix_port_conflicts(content: &str) -> (String, ConflictReport) {
    let mut lines: Vec<String> = content.split('\n').map(str::to_string).collect();
    let bindings = collect_bindings(&lines);

    // Every host port claimed anywhere in the document, any protocol. The
    // free-port search must not hand out a port some other service already
    // holds, even on a different protocol.
    let mut used: HashSet<u32> = bindings.iter().map(|b| b.host_port).collect();

    // First claimant per (port, protocol), in document order.
    let mut first_claimant: HashMap<(u32, String), String> = HashMap::new();
    let mut report = ConflictReport::default();

    for binding in &bindings {
        let key = (binding.host_port, binding.protocol.clone());
        match first_claimant.get(&key).cloned() {
            None => {
                first_claimant.insert(key, binding.service.clone());
            }
            Some(owner) if owner == binding.service => {
                // the same service repeating a binding is not a cross-service
                // conflict; leave it alone
            }
            Some(owner) => {
                let new_port = next_free_port(binding.host_port, &used);
                used.insert(new_port);

                lines[binding.line] =
                    rewrite_host_port(&lines[binding.line], new_port);
                report.conflicts.push(format!(
                    "{}: host port {} already used by {}, remapped to {}",
                    binding.service, binding.host_port, owner, new_port
                ));
                report.fixed += 1;
            }
        }
    }

    (lines.join("\n"), report)
}

fn collect_bindings(lines: &[String]) -> Vec<Binding> {
    let mut bindings = Vec::new();
    let mut current_service: Option<String> = None;
    let mut in_ports = false;

    for (index, line) in lines.iter().enumerate() {
        if let Some(captures) = SERVICE_LINE.captures(line) {
            current_service = Some(captures[1].to_string());
            in_ports = false;
            continue;
        }

        let trimmed = line.trim();
        if trimmed == "ports:" {
            in_ports = true;
            continue;
        }
        if !in_ports {
            continue;
        }

        if trimmed.starts_with('-') {
            let (Some(service), Some(captures)) =
                (current_service.as_ref(), PORT_BINDING.captures(line))
            else {
                continue;
            };
            let Ok(host_port) = captures["host"].parse::<u32>() else {
                continue;
            };
            bindings.push(Binding {
                line: index,
                service: service.clone(),
                host_port,
                protocol: captures
                    .name("proto")
                    .map(|m| m.as_str().to_string())
                    .unwrap_or_default(),
            });
        } else if !trimmed.is_empty() {
            // any other key ends the ports block
            in_ports = false;
        }
    }

    bindings
}

/// Linear scan upward from the original port to the smallest host port not
/// claimed anywhere in the document.
fn next_free_port(from: u32, used: &HashSet<u32>) -> u32 {
    let mut candidate = from + 1;
    while used.contains(&candidate) {
        candidate += 1;
    }
    candidate
}

fn rewrite_host_port(line: &str, new_port: u32) -> String {
    let captures = PORT_BINDING
        .captures(line)
        .expect("rewrites only target lines that already matched");
    format!(
        "{}{}:{}{}{}",
        &captures["prefix"],
        new_port,
        &captures["container"],
        captures.name("proto").map(|m| m.as_str()).unwrap_or(""),
        &captures["suffix"],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_SERVICE_CLASH: &str = "services:\n\
         \x20 servicex:\n\
         \x20   image: x:latest\n\
         \x20   ports:\n\
         \x20     - \"8080:80\"\n\
         \x20 servicey:\n\
         \x20   image: y:latest\n\
         \x20   ports:\n\
         \x20     - \"8080:81\"\n";

    #[test]
    fn first_claimant_keeps_its_port() {
        let (fixed, report) = detect_and_fix_port_conflicts(TWO_SERVICE_CLASH);
        assert_eq!(report.fixed, 1);
        assert_eq!(report.conflicts.len(), 1);
        assert!(fixed.contains("- \"8080:80\""));
        assert!(fixed.contains("- \"8081:81\""));
        assert_eq!(fixed.matches("\"8080:").count(), 1);
    }

    #[test]
    fn report_names_both_services_and_both_ports() {
        let (_, report) = detect_and_fix_port_conflicts(TWO_SERVICE_CLASH);
        let entry = &report.conflicts[0];
        assert!(entry.contains("servicey"));
        assert!(entry.contains("servicex"));
        assert!(entry.contains("8080"));
        assert!(entry.contains("8081"));
    }

    #[test]
    fn conflict_free_document_is_untouched() {
        let content = "services:\n  a:\n    ports:\n      - \"8080:80\"\n  b:\n    ports:\n      - \"9090:90\"\n";
        let (fixed, report) = detect_and_fix_port_conflicts(content);
        assert_eq!(fixed, content);
        assert!(report.is_empty());
        assert_eq!(report.fixed, 0);
        assert!(report.conflicts.is_empty());
    }

    #[test]
    fn free_port_search_skips_ports_used_elsewhere() {
        let content = "services:\n\
             \x20 a:\n\
             \x20   ports:\n\
             \x20     - \"8080:80\"\n\
             \x20 b:\n\
             \x20   ports:\n\
             \x20     - \"8081:80\"\n\
             \x20 c:\n\
             \x20   ports:\n\
             \x20     - \"8080:80\"\n";
        let (fixed, report) = detect_and_fix_port_conflicts(content);
        // 8081 belongs to b, so c lands on 8082
        assert!(fixed.contains("- \"8082:80\""));
        assert_eq!(report.fixed, 1);
    }

    #[test]
    fn same_port_different_protocols_do_not_conflict() {
        let content = "services:\n\
             \x20 a:\n\
             \x20   ports:\n\
             \x20     - \"6881:6881\"\n\
             \x20 b:\n\
             \x20   ports:\n\
             \x20     - \"6881:6881/udp\"\n";
        let (fixed, report) = detect_and_fix_port_conflicts(content);
        assert_eq!(fixed, content);
        assert!(report.is_empty());
    }

    #[test]
    fn udp_suffix_survives_a_rewrite() {
        let content = "services:\n\
             \x20 a:\n\
             \x20   ports:\n\
             \x20     - \"6881:6881/udp\"\n\
             \x20 b:\n\
             \x20   ports:\n\
             \x20     - \"6881:6881/udp\"\n";
        let (fixed, report) = detect_and_fix_port_conflicts(content);
        assert_eq!(report.fixed, 1);
        assert!(fixed.contains("- \"6882:6881/udp\""));
    }

    #[test]
    fn unparseable_entries_are_left_alone() {
        let content = "services:\n\
             \x20 a:\n\
             \x20   ports:\n\
             \x20     - \"127.0.0.1:8080:80\"\n\
             \x20     - \"${WEB_PORT}:80\"\n\
             \x20 b:\n\
             \x20   ports:\n\
             \x20     - \"127.0.0.1:8080:80\"\n";
        let (fixed, report) = detect_and_fix_port_conflicts(content);
        assert_eq!(fixed, content);
        assert!(report.is_empty());
    }

    #[test]
    fn ports_outside_a_ports_block_are_ignored() {
        // environment values can look like bindings; the scanner must not touch them
        let content = "services:\n\
             \x20 a:\n\
             \x20   environment:\n\
             \x20     - \"8080:80\"\n\
             \x20 b:\n\
             \x20   ports:\n\
             \x20     - \"8080:80\"\n";
        let (fixed, report) = detect_and_fix_port_conflicts(content);
        assert_eq!(fixed, content);
        assert!(report.is_empty());
    }

    #[test]
    fn repeated_binding_within_one_service_is_not_a_conflict() {
        let content = "services:\n\
             \x20 a:\n\
             \x20   ports:\n\
             \x20     - \"8080:80\"\n\
             \x20     - \"8080:80\"\n";
        let (fixed, report) = detect_and_fix_port_conflicts(content);
        assert_eq!(fixed, content);
        assert!(report.is_empty());
    }

    #[test]
    fn unquoted_bindings_are_handled() {
        let content = "services:\n\
             \x20 a:\n\
             \x20   ports:\n\
             \x20     - 3000:3000\n\
             \x20 b:\n\
             \x20   ports:\n\
             \x20     - 3000:3000\n";
        let (fixed, report) = detect_and_fix_port_conflicts(content);
        assert_eq!(report.fixed, 1);
        assert!(fixed.contains("- 3001:3000\n"));
    }
}
