use k8s_openapi::api::core::v1::{EphemeralContainer, SecurityContext};
use serde::Serialize;

use crate::cli::{Cli, PullPolicy};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PodRef {
    pub name: String,
    pub namespace: String,
}

/// Settings of the debugger container injected into every matching pod.
#[derive(Debug, Clone)]
pub struct DebugContainer {
    /// Generated once per run and shared by all pods patched in that run.
    pub name: String,
    pub image: String,
    pub target_container: String,
    pub pull_policy: PullPolicy,
    pub interactive: bool,
    pub privileged: bool,
}

impl DebugContainer {
    pub fn to_ephemeral_container(&self) -> EphemeralContainer {
        EphemeralContainer {
            name: self.name.clone(),
            image: Some(self.image.clone()),
            target_container_name: Some(self.target_container.clone()),
            image_pull_policy: Some(self.pull_policy.as_str().to_string()),
            stdin: Some(self.interactive),
            tty: Some(self.interactive),
            security_context: Some(SecurityContext {
                privileged: Some(self.privileged),
                ..Default::default()
            }),
            ..Default::default()
        }
    }
}

/// Everything a single injection run needs, built once from the command line.
#[derive(Debug, Clone)]
pub struct InjectorConfig {
    pub namespace: String,
    pub selector: String,
    pub container: DebugContainer,
    pub dry_run: bool,
}

impl InjectorConfig {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            namespace: cli.namespace.clone(),
            selector: cli.selector.clone(),
            container: DebugContainer {
                name: format!("{}{}", cli.name_prefix, uuid::Uuid::new_v4()),
                image: cli.image.clone(),
                target_container: cli.target_container.clone(),
                pull_policy: cli.pull_policy,
                interactive: true,
                privileged: !cli.unprivileged,
            },
            dry_run: cli.dry_run,
        }
    }
}

/// Body of a patch against the `ephemeralcontainers` subresource of a pod.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EphemeralContainersPatch {
    pub spec: EphemeralContainersSpec,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EphemeralContainersSpec {
    pub ephemeral_containers: Vec<EphemeralContainer>,
}

impl EphemeralContainersPatch {
    pub fn new(container: &DebugContainer) -> Self {
        Self {
            spec: EphemeralContainersSpec {
                ephemeral_containers: vec![container.to_ephemeral_container()],
            },
        }
    }
}
