//! CLI Adapter.

mod envs;
mod generate;
mod plan;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::app::api::{self, ParamOverrides, PlanFormat, ScaffoldParams};
use crate::app::logging;
use crate::domain::AppError;
use crate::exit_codes;

pub const DEFAULT_ROOT: &str = "Lab7";

#[derive(Parser)]
#[command(name = "deploykit")]
#[command(version)]
#[command(
    about = "Generate Ansible deployment-lab scaffolding from a declarative manifest",
    long_about = None
)]
struct Cli {
    /// Emit debug diagnostics on stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the lab layout under the output root
    #[clap(visible_alias = "g")]
    Generate {
        #[command(flatten)]
        params: ParamArgs,
        /// Reference document (PDF or text) read before writing
        #[arg(short, long)]
        source: Option<PathBuf>,
        /// Continue when the reference document cannot be read
        #[arg(long)]
        ignore_source_errors: bool,
        /// Seconds to wait for document extraction
        #[arg(long, default_value_t = 30)]
        source_timeout: u64,
    },
    /// Show the resolved manifest without writing anything
    #[clap(visible_alias = "p")]
    Plan {
        #[command(flatten)]
        params: ParamArgs,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = PlanFormatArg::Text)]
        format: PlanFormatArg,
    },
    /// List recognized environments and default host ports
    Envs,
}

/// Scaffold parameters shared by `generate` and `plan`.
#[derive(Args)]
struct ParamArgs {
    /// Output root directory
    #[arg(short, long, default_value = DEFAULT_ROOT)]
    root: PathBuf,
    /// Target environment (development, staging, production)
    #[arg(short, long = "env")]
    environment: Option<String>,
    /// Host port override as HOST=PORT (repeatable)
    #[arg(long = "port", value_name = "HOST=PORT")]
    ports: Vec<String>,
    /// Application version embedded into inventory and playbook
    #[arg(long)]
    app_version: Option<String>,
    /// TOML parameter file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl ParamArgs {
    fn load(&self) -> Result<ScaffoldParams, AppError> {
        let overrides = ParamOverrides {
            environment: self.environment.clone(),
            ports: self.ports.clone(),
            app_version: self.app_version.clone(),
        };
        api::load_params(self.config.as_deref(), &overrides)
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum PlanFormatArg {
    Text,
    Json,
    Yaml,
}

impl From<PlanFormatArg> for PlanFormat {
    fn from(value: PlanFormatArg) -> Self {
        match value {
            PlanFormatArg::Text => PlanFormat::Text,
            PlanFormatArg::Json => PlanFormat::Json,
            PlanFormatArg::Yaml => PlanFormat::Yaml,
        }
    }
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result: Result<i32, AppError> = match cli.command {
        Commands::Generate { params, source, ignore_source_errors, source_timeout } => {
            generate::run_generate(&params, source, ignore_source_errors, source_timeout)
        }
        Commands::Plan { params, format } => plan::run_plan(&params, format.into()).map(|_| exit_codes::OK),
        Commands::Envs => envs::run_envs().map(|_| exit_codes::OK),
    };

    match result {
        Ok(exit_code) => {
            if exit_code != exit_codes::OK {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}
