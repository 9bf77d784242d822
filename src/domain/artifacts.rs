//! Static layout of the generated deployment lab.
//!
//! Adding a generated file means adding a row to `ARTIFACTS` and a template
//! under `src/assets/templates/`.

use crate::domain::paths;

/// Parameter an artifact template may reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateParam {
    /// `environment`: environment name string.
    Environment,
    /// `profile`: environment-specific values (debug, log level, workers, ...).
    Profile,
    /// `inventory`: hosts grouped as webservers, databases, loadbalancers.
    Inventory,
    /// `app_version`: version string embedded into metadata.
    AppVersion,
}

impl TemplateParam {
    pub fn key(self) -> &'static str {
        match self {
            TemplateParam::Environment => "environment",
            TemplateParam::Profile => "profile",
            TemplateParam::Inventory => "inventory",
            TemplateParam::AppVersion => "app_version",
        }
    }
}

/// One generated file.
#[derive(Debug, Clone, Copy)]
pub struct ArtifactSpec {
    /// Relative output path; rendered with the same parameters as the content.
    pub path: &'static str,
    /// Embedded template name.
    pub template: &'static str,
    /// Parameters the template is allowed to see.
    pub params: &'static [TemplateParam],
    /// Set the owner-executable bit after writing.
    pub executable: bool,
}

/// Directories created under the output root, parents first.
pub const DIRECTORIES: &[&str] =
    &["inventories", "group_vars", "playbooks", "playbooks/templates", "roles"];

pub const ARTIFACTS: &[ArtifactSpec] = &[
    ArtifactSpec {
        path: "inventories/[[ environment ]].yml",
        template: "inventory.yml.tmpl",
        params: &[TemplateParam::Environment, TemplateParam::Inventory, TemplateParam::AppVersion],
        executable: false,
    },
    ArtifactSpec {
        path: "group_vars/webservers.yml",
        template: "group_vars_webservers.yml.tmpl",
        params: &[TemplateParam::Environment, TemplateParam::Profile],
        executable: false,
    },
    ArtifactSpec {
        path: "playbooks/deploy-app.yml",
        template: "deploy-app.yml.tmpl",
        params: &[TemplateParam::AppVersion],
        executable: false,
    },
    ArtifactSpec {
        path: "playbooks/templates/app.conf.j2",
        template: "app.conf.j2.tmpl",
        params: &[],
        executable: false,
    },
    ArtifactSpec {
        path: "playbooks/templates/supervisor-app.conf.j2",
        template: "supervisor-app.conf.j2.tmpl",
        params: &[],
        executable: false,
    },
    ArtifactSpec {
        path: "ansible-deploy.sh",
        template: "ansible-deploy.sh.tmpl",
        params: &[],
        executable: true,
    },
    ArtifactSpec {
        path: "Makefile",
        template: "Makefile.tmpl",
        params: &[TemplateParam::Environment, TemplateParam::Inventory],
        executable: false,
    },
    ArtifactSpec {
        path: "README.md",
        template: "README.md.tmpl",
        params: &[TemplateParam::Environment, TemplateParam::Inventory, TemplateParam::AppVersion],
        executable: false,
    },
];

/// Directories sorted so every parent precedes its children; ties keep table order.
pub fn ordered_directories() -> Vec<&'static str> {
    let mut directories = DIRECTORIES.to_vec();
    directories.sort_by_key(|dir| paths::depth(dir));
    directories
}
