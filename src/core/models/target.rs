use std::fmt;
use std::str::FromStr;

use crate::core::errors::{EnvRenderError, Result};
use crate::core::models::app_engine::AppEngine;
use crate::core::models::env_file::EnvVars;
use crate::core::models::kubernetes::Kubernetes;
use crate::core::traits::validate::Validate;

/// Output format selected by `-type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    KubernetesConfigMap,
    AppEngine,
}

impl TargetKind {
    pub const ALL: [TargetKind; 2] = [TargetKind::KubernetesConfigMap, TargetKind::AppEngine];

    /// The `-type` value for this format.
    pub fn as_str(self) -> &'static str {
        match self {
            TargetKind::KubernetesConfigMap => "kubernetes-configmap",
            TargetKind::AppEngine => "appengine",
        }
    }
}

impl FromStr for TargetKind {
    type Err = EnvRenderError;

    fn from_str(s: &str) -> Result<Self> {
        TargetKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| EnvRenderError::TypeNotFound {
                value: s.to_string(),
            })
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A populated record for one of the supported formats.
#[derive(Debug, Clone, PartialEq)]
pub enum Target {
    Kubernetes(Kubernetes),
    AppEngine(AppEngine),
}

impl Target {
    pub fn kind(&self) -> TargetKind {
        match self {
            Target::Kubernetes(_) => TargetKind::KubernetesConfigMap,
            Target::AppEngine(_) => TargetKind::AppEngine,
        }
    }

    pub fn env_vars(&self) -> &EnvVars {
        match self {
            Target::Kubernetes(k) => &k.env_vars,
            Target::AppEngine(a) => &a.env_vars,
        }
    }
}

impl Validate for Target {
    fn validate(&self) -> Result<()> {
        match self {
            Target::Kubernetes(k) => k.validate(),
            Target::AppEngine(a) => a.validate(),
        }
    }
}
