use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use futures::StreamExt;

use kor_k8s::KubeClient;
use kor_report::{NamespaceOutcome, format_output, namespace_names, scan_namespaces};

mod config;
mod namespaces;

use config::{FileConfig, Settings};
use namespaces::select_namespaces;

/// Kor - find ConfigMaps that no Pod references
#[derive(Parser, Debug)]
#[command(name = "kor")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the kubeconfig file (defaults to ~/.kube/config)
    #[arg(long, value_name = "PATH")]
    kubeconfig: Option<PathBuf>,

    /// Kubernetes context name (defaults to the kubeconfig's current context)
    #[arg(long, value_name = "CONTEXT")]
    context: Option<String>,

    /// Only scan this namespace (repeatable)
    #[arg(short = 'n', long = "namespace", value_name = "NAMESPACE")]
    namespaces: Vec<String>,

    /// Skip this namespace (repeatable)
    #[arg(short = 'e', long = "exclude-namespace", value_name = "NAMESPACE")]
    exclude_namespaces: Vec<String>,

    /// Number of namespaces to scan at once
    #[arg(long)]
    concurrency: Option<usize>,

    /// Config file (defaults to ~/.kor/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run_app(args).await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run_app(args: Args) -> Result<()> {
    let file = FileConfig::load(args.config.as_deref())?;
    let settings = Settings::resolve(args, file);
    tracing::debug!(?settings, "resolved settings");

    let client = KubeClient::new(settings.kubeconfig.as_deref(), settings.context.as_deref())
        .await
        .context("Failed to create Kubernetes client")?;
    tracing::debug!(context = client.context().unwrap_or("<none>"), "connected");

    let all = namespace_names(&client)
        .await
        .context("Failed to retrieve namespaces")?;
    let namespaces = select_namespaces(all, &settings.namespaces, &settings.exclude_namespaces);

    let results = scan_namespaces(&client, namespaces, settings.concurrency);
    futures::pin_mut!(results);

    let mut stdout = io::stdout();
    let mut stderr = io::stderr();
    while let Some(outcome) = results.next().await {
        write_outcome(&mut stdout, &mut stderr, outcome)?;
    }

    Ok(())
}

/// Print a report to `out`, or the reason a namespace was skipped to `err`
fn write_outcome(out: &mut impl Write, err: &mut impl Write, outcome: NamespaceOutcome) -> io::Result<()> {
    match outcome {
        (_, Ok(report)) => {
            writeln!(out, "{}", format_output(&report.namespace, &report.unused))?;
            writeln!(out)
        }
        (namespace, Err(e)) => {
            tracing::warn!(namespace = %namespace, "skipping namespace");
            writeln!(
                err,
                "Failed to process namespace {}: {:#}",
                namespace,
                anyhow::Error::new(e)
            )
        }
    }
}
