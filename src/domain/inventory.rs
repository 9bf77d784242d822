//! Host catalog for the generated inventory.

use serde::Serialize;

/// Inventory group a host belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostGroup {
    Webservers,
    Databases,
    Loadbalancers,
}

impl HostGroup {
    pub fn name(self) -> &'static str {
        match self {
            HostGroup::Webservers => "webservers",
            HostGroup::Databases => "databases",
            HostGroup::Loadbalancers => "loadbalancers",
        }
    }
}

/// Static description of one inventory host.
#[derive(Debug, Clone, Copy)]
pub struct HostDefinition {
    pub name: &'static str,
    pub group: HostGroup,
    pub default_port: Option<u16>,
}

/// Hosts emitted into every inventory. Hosts without a default port do not listen.
pub const HOSTS: &[HostDefinition] = &[
    HostDefinition { name: "web1", group: HostGroup::Webservers, default_port: Some(8080) },
    HostDefinition { name: "web2", group: HostGroup::Webservers, default_port: Some(8081) },
    HostDefinition { name: "db1", group: HostGroup::Databases, default_port: Some(5432) },
    HostDefinition { name: "lb1", group: HostGroup::Loadbalancers, default_port: None },
];

pub fn find_host(name: &str) -> Option<&'static HostDefinition> {
    HOSTS.iter().find(|host| host.name == name)
}

/// Names of hosts that accept a port assignment.
pub fn port_host_names() -> Vec<&'static str> {
    HOSTS.iter().filter(|host| host.default_port.is_some()).map(|host| host.name).collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebHost {
    pub name: String,
    pub server_role: &'static str,
    pub port: u16,
    pub app_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatabaseHost {
    pub name: String,
    pub port: u16,
    pub db_name: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadBalancerHost {
    pub name: String,
    pub algorithm: &'static str,
}

/// Concrete hosts with their effective ports, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Inventory {
    pub webservers: Vec<WebHost>,
    pub databases: Vec<DatabaseHost>,
    pub loadbalancers: Vec<LoadBalancerHost>,
}

impl Inventory {
    /// Build the inventory using `port_of` to look up each listening host's port.
    pub fn build(port_of: impl Fn(&HostDefinition) -> u16) -> Self {
        let mut webservers = Vec::new();
        let mut databases = Vec::new();
        let mut loadbalancers = Vec::new();

        for host in HOSTS {
            match host.group {
                HostGroup::Webservers => {
                    let server_role = if webservers.is_empty() { "primary" } else { "secondary" };
                    webservers.push(WebHost {
                        name: host.name.to_string(),
                        server_role,
                        port: port_of(host),
                        app_name: format!("flask-demo-{}", host.name),
                    });
                }
                HostGroup::Databases => databases.push(DatabaseHost {
                    name: host.name.to_string(),
                    port: port_of(host),
                    db_name: "app_database",
                }),
                HostGroup::Loadbalancers => loadbalancers.push(LoadBalancerHost {
                    name: host.name.to_string(),
                    algorithm: "round_robin",
                }),
            }
        }

        Self { webservers, databases, loadbalancers }
    }
}
