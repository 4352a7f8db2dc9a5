use serde::Serialize;

use crate::core::errors::Result;
use crate::core::models::env_file::EnvVars;
use crate::core::traits::validate::{Validate, require};

/// Fields of an App Engine `app.yaml` descriptor.
///
/// `scaling_field` and `resources_field` are only rendered, and only
/// validated, when `scaling` and `resources` are enabled.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppEngine {
    pub env_vars: EnvVars,
    pub name: String,
    pub runtime: String,
    pub env: String,
    pub command: String,
    pub disable_health_check: bool,
    pub scaling: bool,
    pub scaling_field: ScalingField,
    pub resources: bool,
    pub resources_field: ResourcesField,
}

/// The `automatic_scaling` block.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ScalingField {
    pub min_num_instances: String,
    pub max_num_instances: String,
    pub cpu_utilization: String,
}

/// The `resources` block.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ResourcesField {
    pub cpu_count: String,
    pub memory_gb: String,
}

impl Validate for AppEngine {
    fn validate(&self) -> Result<()> {
        require(&self.name, "name")?;
        require(&self.runtime, "runtime")?;
        require(&self.env, "env")?;
        require(&self.command, "command")?;

        if self.scaling {
            require(&self.scaling_field.min_num_instances, "scaling-min")?;
            require(&self.scaling_field.max_num_instances, "scaling-max")?;
            require(&self.scaling_field.cpu_utilization, "scaling-cpu")?;
        }

        if self.resources {
            require(&self.resources_field.memory_gb, "resources-memory")?;
            require(&self.resources_field.cpu_count, "resources-cpu-count")?;
        }

        Ok(())
    }
}
