use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "kubectl-debug-inject")]
#[command(about = "Inject an ephemeral debugger container into pods matching a label selector")]
pub struct Cli {
    /// Label selector
    #[arg(short = 'l', long, default_value = "serviceweaver/app=server.out")]
    pub selector: String,

    /// Namespace
    #[arg(short = 'n', long, default_value = "default")]
    pub namespace: String,

    /// Path to a kubeconfig file (inferred if omitted)
    #[arg(long)]
    pub kubeconfig: Option<PathBuf>,

    /// Context
    #[arg(long)]
    pub context: Option<String>,

    /// Debugger image
    #[arg(long, default_value = "h21565897/distributeddebugger:144")]
    pub image: String,

    /// Container whose process namespace the debugger joins
    #[arg(long = "target", default_value = "serviceweaver")]
    pub target_container: String,

    /// Image pull policy
    #[arg(long, value_enum, default_value_t = PullPolicy::Always)]
    pub pull_policy: PullPolicy,

    /// Prefix of the generated debug container name
    #[arg(long, default_value = "ssh-debugger")]
    pub name_prefix: String,

    /// Do not request a privileged security context
    #[arg(long)]
    pub unprivileged: bool,

    /// Ask the API server to validate the patches without persisting them
    #[arg(long)]
    pub dry_run: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "PascalCase")]
pub enum PullPolicy {
    Always,
    IfNotPresent,
    Never,
}

impl PullPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            PullPolicy::Always => "Always",
            PullPolicy::IfNotPresent => "IfNotPresent",
            PullPolicy::Never => "Never",
        }
    }
}
