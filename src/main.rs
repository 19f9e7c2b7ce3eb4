use std::path::PathBuf;
use std::process::ExitCode;

use tracing::error;

use nexus_artifact_versions::config::ResolverConfig;
use nexus_artifact_versions::{LuceneSearchResolver, VersionReader};

/// Prints the download URLs for the search described in a JSON config file, one per line
#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let config_path = match std::env::args_os().nth(1) {
        Some(p) => PathBuf::from(p),
        None => {
            eprintln!("usage: nexus-artifact-versions <config.json>");
            return ExitCode::from(2);
        }
    };

    match run(config_path).await {
        Ok(urls) => {
            for url in urls {
                println!("{}", url);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(config_path: PathBuf) -> anyhow::Result<Vec<String>> {
    let config = ResolverConfig::load(&config_path).await?;
    LuceneSearchResolver::from_config(config)
        .retrieve_versions()
        .await
}
