use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::environment::{DeployEnvironment, EnvironmentProfile};
use crate::domain::inventory::{self, HOSTS, Inventory};
use crate::domain::AppError;

pub const DEFAULT_ENVIRONMENT: &str = "development";
pub const DEFAULT_APP_VERSION: &str = "1.0.0";

/// Caller-supplied scaffold options.
///
/// Values are kept loosely typed so the resolver can reject them with
/// `InvalidConfiguration` instead of failing at parse time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct ScaffoldParams {
    pub environment: String,
    pub host_ports: BTreeMap<String, i64>,
    pub app_version: String,
}

impl Default for ScaffoldParams {
    fn default() -> Self {
        let host_ports = HOSTS
            .iter()
            .filter_map(|host| host.default_port.map(|port| (host.name.to_string(), i64::from(port))))
            .collect();
        Self {
            environment: DEFAULT_ENVIRONMENT.to_string(),
            host_ports,
            app_version: DEFAULT_APP_VERSION.to_string(),
        }
    }
}

/// Validated parameters ready to feed artifact templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedParams {
    pub environment: DeployEnvironment,
    pub profile: EnvironmentProfile,
    pub inventory: Inventory,
    pub app_version: String,
}

impl ScaffoldParams {
    /// Override (or add) the port for one host.
    pub fn with_port(mut self, host: impl Into<String>, port: i64) -> Self {
        self.host_ports.insert(host.into(), port);
        self
    }

    pub fn with_environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = environment.into();
        self
    }

    /// Check every option and produce typed values.
    ///
    /// Hosts missing from `host_ports` keep their catalog default.
    pub fn validate(&self) -> Result<ResolvedParams, AppError> {
        let environment = DeployEnvironment::from_name(&self.environment).ok_or_else(|| {
            AppError::invalid_configuration(format!(
                "unrecognized environment '{}' (expected one of: {})",
                self.environment,
                DeployEnvironment::available_names()
            ))
        })?;

        let app_version = self.app_version.trim();
        if app_version.is_empty() || app_version.chars().any(char::is_whitespace) {
            return Err(AppError::invalid_configuration(format!(
                "app_version '{}' must be a non-empty token without whitespace",
                self.app_version
            )));
        }

        let ports = self.effective_ports()?;
        let inventory = Inventory::build(|host| ports.get(host.name).copied().unwrap_or_default());

        Ok(ResolvedParams {
            environment,
            profile: environment.profile(),
            inventory,
            app_version: app_version.to_string(),
        })
    }

    fn effective_ports(&self) -> Result<BTreeMap<&'static str, u16>, AppError> {
        let mut ports: BTreeMap<&'static str, u16> = HOSTS
            .iter()
            .filter_map(|host| host.default_port.map(|port| (host.name, port)))
            .collect();

        for (name, &raw) in &self.host_ports {
            let host = inventory::find_host(name)
                .filter(|host| host.default_port.is_some())
                .ok_or_else(|| {
                    AppError::invalid_configuration(format!(
                        "unknown host '{}' in host_ports (expected one of: {})",
                        name,
                        inventory::port_host_names().join(", ")
                    ))
                })?;
            let port = u16::try_from(raw).ok().filter(|port| *port > 0).ok_or_else(|| {
                AppError::invalid_configuration(format!(
                    "port {} for host '{}' must be between 1 and 65535",
                    raw, name
                ))
            })?;
            ports.insert(host.name, port);
        }

        let mut owners: BTreeMap<u16, &str> = BTreeMap::new();
        for (&name, &port) in &ports {
            if let Some(other) = owners.insert(port, name) {
                return Err(AppError::invalid_configuration(format!(
                    "port {} is assigned to both '{}' and '{}'",
                    port, other, name
                )));
            }
        }

        Ok(ports)
    }
}
