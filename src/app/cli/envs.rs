use crate::app::api;
use crate::domain::AppError;

pub(super) fn run_envs() -> Result<(), AppError> {
    let listing = api::environments();

    println!("Environments:");
    for env in &listing.environments {
        let profile = &env.profile;
        println!(
            "  {}{}: log_level={} max_workers={} timeout={}s max_failure_percentage={}% debug={}",
            profile.name,
            if env.is_default { " (default)" } else { "" },
            profile.log_level,
            profile.max_workers,
            profile.timeout,
            profile.max_failure_percentage,
            profile.debug
        );
    }

    println!("Default host ports:");
    for port in &listing.default_ports {
        println!("  {} ({}): {}", port.host, port.group, port.port);
    }
    Ok(())
}
