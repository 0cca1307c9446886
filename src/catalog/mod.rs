pub mod builtin;

use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// One self-hosted service as authored in a catalog.
///
/// `compose_body` is the raw YAML for a single service entry: the
/// `serviceName:` key and its nested mapping, in whatever indentation the
/// author used. The generator reindents it; nothing here is trusted
/// verbatim. An empty body is allowed and means the service contributes
/// nothing to the generated document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceDefinition {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub compose_body: String,
    #[serde(default)]
    pub is_unsupported: bool,
}

/// The full set of known services: built-ins plus any loaded catalog files.
#[derive(Debug, Clone)]
pub struct Catalog {
    services: Vec<ServiceDefinition>,
}

impl Catalog {
    /// Catalog containing only the built-in service definitions.
    pub fn builtin() -> Self {
        Self {
            services: builtin::definitions(),
        }
    }

    /// Append service definitions from a JSON catalog file (an array of
    /// [`ServiceDefinition`] objects). Ids must not collide with services
    /// already in the catalog.
    pub fn load_file(&mut self, path: &Path) -> Result<()> {
        let raw = fs::read_to_string(path).map_err(|e| CatalogError::UnreadableFile {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let extra: Vec<ServiceDefinition> = serde_json::from_str(&raw)?;

        let known: HashSet<&str> = self.services.iter().map(|s| s.id.as_str()).collect();
        for service in &extra {
            if known.contains(service.id.as_str()) {
                return Err(CatalogError::DuplicateService(service.id.clone()).into());
            }
        }

        log::info!(
            "Loaded {} service definitions from {}",
            extra.len(),
            path.display()
        );
        self.services.extend(extra);
        Ok(())
    }

    pub fn services(&self) -> &[ServiceDefinition] {
        &self.services
    }

    pub fn get(&self, id: &str) -> Option<&ServiceDefinition> {
        self.services.iter().find(|s| s.id == id)
    }

    /// Resolve a list of service ids, preserving the requested order.
    pub fn select(&self, ids: &[String]) -> Result<Vec<&ServiceDefinition>> {
        ids.iter()
            .map(|id| {
                self.get(id)
                    .ok_or_else(|| CatalogError::UnknownService(id.clone()).into())
            })
            .collect()
    }

    /// All services not flagged as unsupported, in catalog order.
    pub fn supported(&self) -> Vec<&ServiceDefinition> {
        self.services.iter().filter(|s| !s.is_unsupported).collect()
    }
}
