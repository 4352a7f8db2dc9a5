pub mod args;
pub mod commands;
pub mod output;

use clap::Parser;
use clap::builder::BoolishValueParser;

use crate::config::app_config::AppConfig;

/// Render an env file into a Kubernetes ConfigMap or an App Engine app.yaml.
///
/// Flags may be written Go style (`-name api`, `-scaling=false`) or with
/// a double dash. As in Go, a string flag always takes the next argument
/// as its value, even one starting with `-`.
#[derive(Parser, Debug)]
#[command(name = "envrender", version, about, long_about = None)]
pub struct Cli {
    /// Select the config type: kubernetes-configmap or appengine
    #[arg(long = "type", value_name = "TYPE", allow_hyphen_values = true)]
    pub kind: Option<String>,

    /// Set namespace
    #[arg(long, allow_hyphen_values = true)]
    pub namespace: Option<String>,

    /// Set name
    #[arg(long, allow_hyphen_values = true)]
    pub name: Option<String>,

    /// Set runtime
    #[arg(long, allow_hyphen_values = true)]
    pub runtime: Option<String>,

    /// Set env
    #[arg(long, allow_hyphen_values = true)]
    pub env: Option<String>,

    /// Set command
    #[arg(long, allow_hyphen_values = true)]
    pub command: Option<String>,

    /// Disable healthcheck
    #[arg(
        long = "disable-healthcheck",
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new()
    )]
    pub disable_healthcheck: Option<bool>,

    /// Enable automatic scaling [default: true]
    #[arg(
        long,
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new()
    )]
    pub scaling: Option<bool>,

    /// Set scaling min num instances
    #[arg(long = "scaling-min", allow_hyphen_values = true)]
    pub scaling_min: Option<String>,

    /// Set scaling max num instances
    #[arg(long = "scaling-max", allow_hyphen_values = true)]
    pub scaling_max: Option<String>,

    /// Set scaling cpu utilization target
    #[arg(long = "scaling-cpu", allow_hyphen_values = true)]
    pub scaling_cpu: Option<String>,

    /// Enable resources requisition [default: true]
    #[arg(
        long,
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new()
    )]
    pub resources: Option<bool>,

    /// Set resource memory (in GB)
    #[arg(long = "resources-memory", allow_hyphen_values = true)]
    pub resources_memory: Option<String>,

    /// Set resource cpu count
    #[arg(long = "resources-cpu-count", allow_hyphen_values = true)]
    pub resources_cpu_count: Option<String>,

    /// Env file for the config file
    #[arg(long = "env-file", allow_hyphen_values = true)]
    pub env_file: Option<String>,

    /// Output file
    #[arg(long = "output-file", allow_hyphen_values = true)]
    pub output_file: Option<String>,

    /// TOML file with default flag values
    #[arg(long, env = "ENVRENDER_CONFIG", allow_hyphen_values = true)]
    pub config: Option<String>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode: only show errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    /// The values given on the command line, in config-file shape.
    pub fn overrides(&self) -> AppConfig {
        AppConfig {
            kind: self.kind.clone(),
            namespace: self.namespace.clone(),
            name: self.name.clone(),
            runtime: self.runtime.clone(),
            env: self.env.clone(),
            command: self.command.clone(),
            disable_healthcheck: self.disable_healthcheck,
            scaling: self.scaling,
            scaling_min: self.scaling_min.clone(),
            scaling_max: self.scaling_max.clone(),
            scaling_cpu: self.scaling_cpu.clone(),
            resources: self.resources,
            resources_memory: self.resources_memory.clone(),
            resources_cpu_count: self.resources_cpu_count.clone(),
            env_file: self.env_file.clone(),
            output_file: self.output_file.clone(),
        }
    }
}
