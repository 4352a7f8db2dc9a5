use std::path::Path;

use minijinja::{AutoEscape, Environment, UndefinedBehavior};

use crate::core::errors::Result;
use crate::core::models::target::{Target, TargetKind};

const CONFIGMAP_TEMPLATE: &str = include_str!("../../templates/configmap.yaml.j2");
const APP_ENGINE_TEMPLATE: &str = include_str!("../../templates/app.yaml.j2");

/// Renders target records into their deployment file formats.
///
/// Both templates are compiled once when the renderer is built. Values
/// are emitted verbatim: no escaping is applied, and the whitespace of
/// the templates is reproduced exactly, trailing newline included.
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.set_keep_trailing_newline(true);
        env.set_undefined_behavior(UndefinedBehavior::Strict);

        env.add_template(
            template_name(TargetKind::KubernetesConfigMap),
            CONFIGMAP_TEMPLATE,
        )?;
        env.add_template(template_name(TargetKind::AppEngine), APP_ENGINE_TEMPLATE)?;

        Ok(Self { env })
    }

    /// Render `target` into a string.
    pub fn render(&self, target: &Target) -> Result<String> {
        let tpl = self.env.get_template(template_name(target.kind()))?;
        let rendered = match target {
            Target::Kubernetes(k) => tpl.render(k)?,
            Target::AppEngine(a) => tpl.render(a)?,
        };
        Ok(rendered)
    }

    /// Render `target` and write it to `path`, creating or truncating the file.
    ///
    /// The file is only touched once rendering has succeeded.
    pub fn write_to_file(&self, target: &Target, path: &Path) -> Result<()> {
        let content = self.render(target)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

fn template_name(kind: TargetKind) -> &'static str {
    match kind {
        TargetKind::KubernetesConfigMap => "configmap.yaml",
        TargetKind::AppEngine => "app.yaml",
    }
}
