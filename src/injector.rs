use crate::kubernetes::PodApi;
use crate::types::{EphemeralContainersPatch, InjectorConfig, PodRef};
use std::io::Write;
use tracing::debug;

pub async fn list_matching_pods(
    api: &impl PodApi,
    config: &InjectorConfig,
) -> anyhow::Result<Vec<PodRef>> {
    debug!(
        "Listing pods in namespace {} with selector {}",
        config.namespace, config.selector
    );
    api.list_pods(&config.namespace, &config.selector).await
}

pub async fn inject_debug_container(
    api: &impl PodApi,
    config: &InjectorConfig,
    pod: &PodRef,
) -> anyhow::Result<()> {
    let patch = EphemeralContainersPatch::new(&config.container);
    debug!(
        "Patching pod {}/{} with ephemeral container {}",
        pod.namespace, pod.name, config.container.name
    );
    api.patch_ephemeral_containers(pod, &patch, config.dry_run).await
}

/// Lists matching pods and injects the debugger into each one, in list order.
/// Stops at the first failed patch.
pub async fn run<W: Write>(
    api: &impl PodApi,
    config: &InjectorConfig,
    out: &mut W,
) -> anyhow::Result<()> {
    let pods = list_matching_pods(api, config).await?;
    writeln!(out, "Found {} pods", pods.len())?;
    out.flush()?;

    if !pods.is_empty() && tracing::enabled!(tracing::Level::DEBUG) {
        let body = serde_yaml::to_string(&EphemeralContainersPatch::new(&config.container))?;
        debug!("Patch body:\n{}", body);
    }

    let suffix = if config.dry_run { " (dry run)" } else { "" };
    for pod in &pods {
        inject_debug_container(api, config, pod).await?;
        writeln!(out, "Debug container injected for pod {}{}", pod.name, suffix)?;
        out.flush()?;
    }

    Ok(())
}
