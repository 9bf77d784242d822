//! Scaffold parameter loading.
//!
//! Parameters come from an optional TOML file and command-line overrides.
//! Validation of the merged values belongs to the resolver.

mod load_params;

pub use load_params::{ParamOverrides, load_params, parse_port_assignment};
