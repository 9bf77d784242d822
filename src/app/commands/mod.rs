pub mod envs;
pub mod generate;
pub mod plan;
