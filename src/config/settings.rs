use crate::config::app_config::AppConfig;

/// Fully resolved inputs for one run.
///
/// Built from command-line flags layered over the optional config file,
/// with built-in defaults for anything neither of them sets.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub kind: String,
    pub namespace: String,
    pub name: String,
    pub runtime: String,
    pub env: String,
    pub command: String,
    pub disable_healthcheck: bool,
    pub scaling: bool,
    pub scaling_min: String,
    pub scaling_max: String,
    pub scaling_cpu: String,
    pub resources: bool,
    pub resources_memory: String,
    pub resources_cpu_count: String,
    pub env_file: String,
    pub output_file: String,
}

impl Settings {
    /// Layer `flags` over `file`. A value set in `flags` always wins.
    pub fn merge(flags: AppConfig, file: AppConfig) -> Self {
        Self {
            kind: flags.kind.or(file.kind).unwrap_or_default(),
            namespace: flags.namespace.or(file.namespace).unwrap_or_default(),
            name: flags.name.or(file.name).unwrap_or_default(),
            runtime: flags.runtime.or(file.runtime).unwrap_or_default(),
            env: flags.env.or(file.env).unwrap_or_default(),
            command: flags.command.or(file.command).unwrap_or_default(),
            disable_healthcheck: flags
                .disable_healthcheck
                .or(file.disable_healthcheck)
                .unwrap_or(false),
            scaling: flags.scaling.or(file.scaling).unwrap_or(true),
            scaling_min: flags.scaling_min.or(file.scaling_min).unwrap_or_default(),
            scaling_max: flags.scaling_max.or(file.scaling_max).unwrap_or_default(),
            scaling_cpu: flags.scaling_cpu.or(file.scaling_cpu).unwrap_or_default(),
            resources: flags.resources.or(file.resources).unwrap_or(true),
            resources_memory: flags
                .resources_memory
                .or(file.resources_memory)
                .unwrap_or_default(),
            resources_cpu_count: flags
                .resources_cpu_count
                .or(file.resources_cpu_count)
                .unwrap_or_default(),
            env_file: flags.env_file.or(file.env_file).unwrap_or_default(),
            output_file: flags.output_file.or(file.output_file).unwrap_or_default(),
        }
    }
}
