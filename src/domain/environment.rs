use serde::Serialize;

/// Deployment environment a scaffold targets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DeployEnvironment {
    #[default]
    Development,
    Staging,
    Production,
}

/// Environment-specific values embedded into inventory and group variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnvironmentProfile {
    pub name: &'static str,
    pub debug: bool,
    pub log_level: &'static str,
    pub max_workers: u32,
    pub timeout: u32,
    pub max_failure_percentage: u32,
}

impl DeployEnvironment {
    pub const ALL: [DeployEnvironment; 3] =
        [DeployEnvironment::Development, DeployEnvironment::Staging, DeployEnvironment::Production];

    pub fn name(self) -> &'static str {
        match self {
            DeployEnvironment::Development => "development",
            DeployEnvironment::Staging => "staging",
            DeployEnvironment::Production => "production",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|env| env.name() == name)
    }

    /// Comma-separated list of recognized names for error messages.
    pub fn available_names() -> String {
        Self::ALL.iter().map(|env| env.name()).collect::<Vec<_>>().join(", ")
    }

    pub fn profile(self) -> EnvironmentProfile {
        match self {
            DeployEnvironment::Development => EnvironmentProfile {
                name: self.name(),
                debug: false,
                log_level: "INFO",
                max_workers: 4,
                timeout: 30,
                max_failure_percentage: 20,
            },
            DeployEnvironment::Staging => EnvironmentProfile {
                name: self.name(),
                debug: false,
                log_level: "INFO",
                max_workers: 2,
                timeout: 30,
                max_failure_percentage: 20,
            },
            DeployEnvironment::Production => EnvironmentProfile {
                name: self.name(),
                debug: false,
                log_level: "WARNING",
                max_workers: 8,
                timeout: 60,
                max_failure_percentage: 10,
            },
        }
    }
}
