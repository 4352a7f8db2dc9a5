use serde::Serialize;

use crate::core::errors::Result;
use crate::core::models::env_file::EnvVars;
use crate::core::traits::validate::{Validate, require};

/// Fields of a Kubernetes ConfigMap manifest.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Kubernetes {
    pub env_vars: EnvVars,
    pub namespace: String,
    pub name: String,
}

impl Validate for Kubernetes {
    fn validate(&self) -> Result<()> {
        require(&self.namespace, "namespace")?;
        require(&self.name, "name")?;
        Ok(())
    }
}
