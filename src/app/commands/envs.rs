use serde::Serialize;

use crate::domain::inventory::HOSTS;
use crate::domain::{DeployEnvironment, EnvironmentProfile};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnvironmentSummary {
    pub profile: EnvironmentProfile,
    pub is_default: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostPortSummary {
    pub host: &'static str,
    pub group: &'static str,
    pub port: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnvironmentListing {
    pub environments: Vec<EnvironmentSummary>,
    pub default_ports: Vec<HostPortSummary>,
}

pub fn execute() -> EnvironmentListing {
    let environments = DeployEnvironment::ALL
        .into_iter()
        .map(|env| EnvironmentSummary {
            profile: env.profile(),
            is_default: env == DeployEnvironment::default(),
        })
        .collect();

    let default_ports = HOSTS
        .iter()
        .filter_map(|host| {
            host.default_port.map(|port| HostPortSummary { host: host.name, group: host.group.name(), port })
        })
        .collect();

    EnvironmentListing { environments, default_ports }
}
