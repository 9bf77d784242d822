//! deploykit: generate Ansible deployment-lab scaffolding from a declarative artifact manifest.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod exit_codes;
pub mod ports;


pub use app::api;
pub use domain::AppError;
