use crate::types::{EphemeralContainersPatch, PodRef};
use anyhow::Context;
use k8s_openapi::api::core::v1::Pod;
use kube::api::{ListParams, Patch, PatchParams};
use kube::{Api, Client, ResourceExt, config};
use std::path::Path;
use tracing::info;

/// The two cluster operations the injector relies on.
pub trait PodApi {
    async fn list_pods(
        &self,
        namespace: &str,
        label_selector: &str,
    ) -> anyhow::Result<Vec<PodRef>>;

    async fn patch_ephemeral_containers(
        &self,
        pod: &PodRef,
        patch: &EphemeralContainersPatch,
        dry_run: bool,
    ) -> anyhow::Result<()>;
}

pub struct KubePodApi {
    client: Client,
}

impl KubePodApi {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl PodApi for KubePodApi {
    async fn list_pods(
        &self,
        namespace: &str,
        label_selector: &str,
    ) -> anyhow::Result<Vec<PodRef>> {
        let api: Api<Pod> = Api::namespaced(self.client.clone(), namespace);
        let pods = api
            .list(&ListParams::default().labels(label_selector))
            .await
            .with_context(|| {
                format!(
                    "Failed to list pods in namespace '{}' with selector '{}'",
                    namespace, label_selector
                )
            })?;

        Ok(pods
            .items
            .iter()
            .map(|pod| PodRef {
                name: pod.name_any(),
                namespace: pod.namespace().unwrap_or_else(|| namespace.to_string()),
            })
            .collect())
    }

    async fn patch_ephemeral_containers(
        &self,
        pod: &PodRef,
        patch: &EphemeralContainersPatch,
        dry_run: bool,
    ) -> anyhow::Result<()> {
        let api: Api<Pod> = Api::namespaced(self.client.clone(), &pod.namespace);
        let mut pp = PatchParams::default();
        if dry_run {
            pp = pp.dry_run();
        }
        api.patch_ephemeral_containers(&pod.name, &pp, &Patch::Strategic(patch))
            .await
            .with_context(|| {
                format!(
                    "Failed to patch ephemeral containers of pod {}/{}",
                    pod.namespace, pod.name
                )
            })?;
        Ok(())
    }
}

pub async fn initialize_client(
    kubeconfig: Option<&Path>,
    context: Option<String>,
) -> anyhow::Result<Client> {
    let options = config::KubeConfigOptions {
        context: context.clone(),
        ..Default::default()
    };

    let config = match (kubeconfig, &context) {
        (Some(path), _) => {
            let kubeconfig = config::Kubeconfig::read_from(path)
                .with_context(|| format!("Failed to read kubeconfig {}", path.display()))?;
            config::Config::from_custom_kubeconfig(kubeconfig, &options)
                .await
                .with_context(|| match &context {
                    Some(ctx) => format!(
                        "Context '{}' not found in kubeconfig {}",
                        ctx,
                        path.display()
                    ),
                    None => format!("Failed to load kubeconfig {}", path.display()),
                })?
        }
        (None, Some(ctx)) => config::Config::from_kubeconfig(&options)
            .await
            .map_err(|e| anyhow::anyhow!("Context '{}' not found in kubeconfig: {}", ctx, e))?,
        (None, None) => config::Config::infer().await?,
    };

    info!("Connecting to {}", config.cluster_url);
    Ok(Client::try_from(config)?)
}
