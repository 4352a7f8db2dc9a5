use std::path::{Path, PathBuf};

use crate::cli::output;
use crate::config::settings::Settings;
use crate::core::errors::{EnvRenderError, Result};
use crate::core::models::app_engine::{AppEngine, ResourcesField, ScalingField};
use crate::core::models::env_file::EnvVars;
use crate::core::models::kubernetes::Kubernetes;
use crate::core::models::target::{Target, TargetKind};
use crate::core::services::env_loader::EnvLoader;
use crate::core::services::renderer::Renderer;
use crate::core::traits::validate::Validate;

/// Execute a render run.
///
/// Selects the target by `-type`, loads the env file, validates the
/// record and writes the rendered file. Nothing is written unless every
/// check passes.
pub fn execute(settings: &Settings) -> Result<()> {
    let kind: TargetKind = settings.kind.parse()?;

    output::header(&format!("envrender: {kind}"));

    let env_file = EnvLoader.load(&settings.env_file)?;
    if let Some(path) = &env_file.source_path {
        output::detail(&format!("env file: {}", path.display()));
    }

    for (key, line) in env_file.duplicate_keys() {
        output::warning(&format!(
            "{key} is defined more than once; using the value from line {line}"
        ));
    }

    let env_vars = EnvVars::from(&env_file);
    if env_vars.is_empty() {
        output::warning(&format!("{} defines no variables", settings.env_file));
    }
    for key in env_vars.keys() {
        output::detail(key);
    }

    let target = build_target(kind, settings, env_vars);
    target.validate()?;

    let output_path = output_path(settings)?;
    output::detail(&format!("output file: {}", output_path.display()));

    let renderer = Renderer::new()?;
    renderer.write_to_file(&target, &output_path)?;

    output::success(&format!(
        "Wrote {kind} to {} ({} variables)",
        output_path.display(),
        target.env_vars().len()
    ));

    Ok(())
}

/// Populate the record for `kind` from the resolved settings.
pub fn build_target(kind: TargetKind, settings: &Settings, env_vars: EnvVars) -> Target {
    match kind {
        TargetKind::KubernetesConfigMap => Target::Kubernetes(Kubernetes {
            env_vars,
            namespace: settings.namespace.clone(),
            name: settings.name.clone(),
        }),
        TargetKind::AppEngine => Target::AppEngine(AppEngine {
            env_vars,
            name: settings.name.clone(),
            runtime: settings.runtime.clone(),
            env: settings.env.clone(),
            command: settings.command.clone(),
            disable_health_check: settings.disable_healthcheck,
            scaling: settings.scaling,
            scaling_field: ScalingField {
                min_num_instances: settings.scaling_min.clone(),
                max_num_instances: settings.scaling_max.clone(),
                cpu_utilization: settings.scaling_cpu.clone(),
            },
            resources: settings.resources,
            resources_field: ResourcesField {
                cpu_count: settings.resources_cpu_count.clone(),
                memory_gb: settings.resources_memory.clone(),
            },
        }),
    }
}

fn output_path(settings: &Settings) -> Result<PathBuf> {
    if settings.output_file.is_empty() {
        return Err(EnvRenderError::MissingFlag {
            flag: "output-file",
        });
    }
    Ok(Path::new(&settings.output_file).to_path_buf())
}
