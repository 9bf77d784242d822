use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use crate::domain::{AppError, ScaffoldParams};

/// Command-line values layered over the parameter file.
#[derive(Debug, Clone, Default)]
pub struct ParamOverrides {
    pub environment: Option<String>,
    /// `HOST=PORT` assignments; later entries win.
    pub ports: Vec<String>,
    pub app_version: Option<String>,
}

/// Load scaffold parameters from `config` (if given) and apply `overrides`.
pub fn load_params(
    config: Option<&Path>,
    overrides: &ParamOverrides,
) -> Result<ScaffoldParams, AppError> {
    let mut params = match config {
        Some(path) => read_params_file(path)?,
        None => ScaffoldParams::default(),
    };

    if let Some(environment) = &overrides.environment {
        params.environment = environment.clone();
    }
    if let Some(app_version) = &overrides.app_version {
        params.app_version = app_version.clone();
    }
    for assignment in &overrides.ports {
        let (host, port) = parse_port_assignment(assignment)?;
        params.host_ports.insert(host, port);
    }

    debug!(?params, "loaded scaffold parameters");
    Ok(params)
}

fn read_params_file(path: &Path) -> Result<ScaffoldParams, AppError> {
    let content = fs::read_to_string(path).map_err(|err| match err.kind() {
        ErrorKind::NotFound => {
            AppError::invalid_configuration(format!("config file not found: {}", path.display()))
        }
        _ => AppError::invalid_configuration(format!(
            "failed to read config file {}: {}",
            path.display(),
            err
        )),
    })?;

    let mut params: ScaffoldParams = toml::from_str(&content).map_err(|err| {
        AppError::invalid_configuration(format!("{}: {}", path.display(), err.message()))
    })?;

    // Ports listed in the file merge over the catalog defaults.
    let file_ports = std::mem::take(&mut params.host_ports);
    params.host_ports = ScaffoldParams::default().host_ports;
    params.host_ports.extend(file_ports);
    Ok(params)
}

/// Parse a `HOST=PORT` assignment.
///
/// The port is kept as a wide integer so out-of-range values reach the
/// resolver and are reported there.
pub fn parse_port_assignment(assignment: &str) -> Result<(String, i64), AppError> {
    let invalid = || {
        AppError::invalid_configuration(format!(
            "port assignment '{}' must look like HOST=PORT",
            assignment
        ))
    };

    let (host, port) = assignment.split_once('=').ok_or_else(invalid)?;
    let host = host.trim();
    if host.is_empty() {
        return Err(invalid());
    }
    let port = port.trim().parse::<i64>().map_err(|_| invalid())?;
    Ok((host.to_string(), port))
}
