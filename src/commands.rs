//! Subcommand handlers.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Serialize;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use altwise_config::{ConfigLoader, ConfigOverrides, ProcessEnv, resolve};
use altwise_core::{HttpTransport, SuggestionOutcome, SuggestionPipeline, Transport};
use altwise_protocols::{PipelineError, ScannedNode};
use altwise_scanner::{flagged_nodes, line_col};

/// Flags of the `suggest` subcommand.
pub(crate) struct SuggestOptions {
    pub config: PathBuf,
    pub endpoint: Option<String>,
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub vision: bool,
}

/// Where a flagged node sits and why it was flagged.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Finding {
    file: String,
    line: usize,
    column: usize,
    kind: &'static str,
    reason: &'static str,
}

impl Finding {
    fn new(path: &Path, text: &str, node: &ScannedNode) -> Self {
        let (line, column) = line_col(text, node.start());
        Self {
            file: path.display().to_string(),
            line,
            column,
            kind: node.kind(),
            reason: reason(node),
        }
    }
}

#[derive(Serialize)]
struct SuggestionRecord<'a> {
    #[serde(flatten)]
    finding: Finding,
    #[serde(flatten)]
    outcome: &'a SuggestionOutcome,
}

fn reason(node: &ScannedNode) -> &'static str {
    match node {
        ScannedNode::Svg(_) => "svg has no <title> or <desc> and is not aria-hidden",
        ScannedNode::Img(_) => "img has no alt attribute and is not hidden or presentational",
    }
}

fn read_document(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

/// Directory relative image paths in `path` are resolved against.
fn document_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// `altwise scan`: print every flagged node.
pub(crate) fn scan(files: &[PathBuf], json: bool) -> Result<()> {
    for path in files {
        let text = read_document(path)?;
        let flagged = flagged_nodes(&text);
        info!(file = %path.display(), flagged = flagged.len(), "scanned");

        for node in &flagged {
            let finding = Finding::new(path, &text, node);
            if json {
                println!("{}", serde_json::to_string(&finding)?);
            } else {
                println!(
                    "{}:{}:{}: {}",
                    finding.file, finding.line, finding.column, finding.reason
                );
            }
        }
    }
    Ok(())
}

/// `altwise suggest`: run the pipeline on every flagged node.
pub(crate) async fn suggest(files: &[PathBuf], options: SuggestOptions) -> Result<()> {
    let env = ProcessEnv;
    let config_path = ConfigLoader::expand_path(&options.config.to_string_lossy());
    let file_config = ConfigLoader::load_optional(&config_path, &env)
        .with_context(|| format!("failed to load config {}", config_path.display()))?;
    let overrides = ConfigOverrides {
        api_key: options.api_key,
        endpoint: options.endpoint,
        model: options.model,
        use_vision: options.vision.then_some(true),
    };
    let resolved = resolve(&overrides, &file_config, &env).context("invalid configuration")?;

    if !resolved.client.has_credentials() {
        info!("no provider endpoint or API key configured, using the offline heuristic");
    }

    let transport: Arc<dyn Transport> = Arc::new(
        HttpTransport::new(Duration::from_secs(resolved.http.timeout_secs))
            .context("failed to build HTTP client")?,
    );

    let cancel = CancellationToken::new();
    tokio::spawn({
        let cancel = cancel.clone();
        async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                cancel.cancel();
            }
        }
    });

    for path in files {
        let text = read_document(path)?;
        let pipeline = SuggestionPipeline::builder(resolved.client.clone())
            .max_tokens(resolved.http.max_tokens)
            .transport(transport.clone())
            .base_dir(document_dir(path))
            .build()
            .context("failed to build suggestion pipeline")?;

        for node in flagged_nodes(&text) {
            let outcome = match pipeline.suggest(&node, &cancel).await {
                Ok(outcome) => outcome,
                Err(PipelineError::Cancelled) => {
                    warn!("interrupted, stopping");
                    return Ok(());
                }
            };
            let record = SuggestionRecord {
                finding: Finding::new(path, &text, &node),
                outcome: &outcome,
            };
            println!("{}", serde_json::to_string(&record)?);
        }
    }
    Ok(())
}
