use super::*;
use std::collections::VecDeque;
use std::sync::Mutex;

use altwise_protocols::Span;
use async_trait::async_trait;
use serde_json::{Value, json};

const OPENAI: &str = "https://api.openai.com/v1/chat/completions";
const MENU: &str = r#"<svg viewBox="0 0 24 24"><line x1="3" y1="6" x2="21" y2="6"/><line x1="3" y1="12" x2="21" y2="12"/><line x1="3" y1="18" x2="21" y2="18"/></svg>"#;

/// Replays canned replies and records every request it sees.
struct ScriptedTransport {
    replies: Mutex<VecDeque<Result<Value, ProviderError>>>,
    requests: Mutex<Vec<ProviderRequest>>,
}

impl ScriptedTransport {
    fn new(replies: Vec<Result<Value, ProviderError>>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.into()),
            requests: Mutex::new(Vec::new()),
        })
    }

    fn requests(&self) -> Vec<ProviderRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn post_json(&self, request: &ProviderRequest) -> Result<Value, ProviderError> {
        self.requests.lock().unwrap().push(request.clone());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ProviderError::Network("no scripted reply".to_string())))
    }
}

fn chat_reply(text: &str) -> Result<Value, ProviderError> {
    Ok(json!({"choices": [{"message": {"role": "assistant", "content": text}}]}))
}

fn refused() -> Result<Value, ProviderError> {
    Err(ProviderError::Network("connection refused".to_string()))
}

fn pipeline(config: ClientConfig, transport: &Arc<ScriptedTransport>) -> SuggestionPipeline {
    SuggestionPipeline::builder(config)
        .transport(transport.clone())
        .build()
        .unwrap()
}

/// Stands in for a rasteriser.
struct PngRenderer;

impl SvgRenderer for PngRenderer {
    fn render(&self, _markup: &str) -> Result<ImageSource, ProviderError> {
        Ok(ImageSource::base64("image/png", "iVBORw0KGgo="))
    }
}

fn raster_pipeline(
    config: ClientConfig,
    transport: &Arc<ScriptedTransport>,
) -> SuggestionPipeline {
    SuggestionPipeline::builder(config)
        .transport(transport.clone())
        .renderer(Arc::new(PngRenderer))
        .build()
        .unwrap()
}

fn img(src: &str) -> ImgNode {
    let raw_markup = format!("<img src=\"{}\">", src);
    ImgNode {
        start: 0,
        end: raw_markup.len(),
        open_tag_span: Span::new(0, raw_markup.len()),
        raw_markup,
        src: Some(src.to_string()),
        alt: None,
        has_alt: false,
        has_aria_hidden: false,
        has_role: false,
    }
}

#[test]
fn test_strategy_plans() {
    let transport = ScriptedTransport::new(vec![]);
    assert_eq!(
        pipeline(ClientConfig::default(), &transport).strategies(),
        vec![Strategy::Heuristic]
    );
    assert_eq!(
        pipeline(ClientConfig::new(OPENAI, "k"), &transport).strategies(),
        vec![Strategy::Text, Strategy::Heuristic]
    );
    assert_eq!(
        pipeline(ClientConfig::new(OPENAI, "k").with_vision(true), &transport).strategies(),
        vec![Strategy::Vision, Strategy::Text, Strategy::Heuristic]
    );
}

#[test]
fn test_vision_flag_without_credentials_is_heuristic_only() {
    let transport = ScriptedTransport::new(vec![]);
    let config = ClientConfig::new(OPENAI, "  ").with_vision(true);
    assert_eq!(pipeline(config, &transport).strategies(), vec![Strategy::Heuristic]);
}

#[tokio::test]
async fn test_no_credentials_uses_heuristic_without_network() {
    let transport = ScriptedTransport::new(vec![]);
    let outcome = pipeline(ClientConfig::default(), &transport)
        .suggest_svg(MENU, &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(outcome.strategy, Strategy::Heuristic);
    assert_eq!(outcome.suggestion, classify_svg(MENU));
    assert!(outcome.warnings.is_empty());
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn test_text_mode_success() {
    let transport = ScriptedTransport::new(vec![chat_reply(
        r#"Claro! {"isDecorative":false,"titleText":"Menu","descText":""}"#,
    )]);
    let outcome = pipeline(ClientConfig::new(OPENAI, "k").with_model("gpt-4o"), &transport)
        .suggest_svg(MENU, &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(outcome.strategy, Strategy::Text);
    assert_eq!(outcome.suggestion, Suggestion::informative("Menu", ""));

    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].body["model"], "gpt-4o");
    assert!(requests[0].body["messages"][1]["content"].as_str().unwrap().contains("<line"));
}

#[tokio::test]
async fn test_vision_failure_degrades_to_text() {
    let transport = ScriptedTransport::new(vec![
        refused(),
        chat_reply(r#"{"isDecorative":false,"titleText":"Abrir menu","descText":""}"#),
    ]);
    let outcome = raster_pipeline(ClientConfig::new(OPENAI, "k").with_vision(true), &transport)
        .suggest_svg(MENU, &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(outcome.strategy, Strategy::Text);
    assert_eq!(outcome.suggestion.title_text, "Abrir menu");
    assert_eq!(outcome.warnings.len(), 1);
    assert!(outcome.warnings[0].starts_with("vision"));

    let requests = transport.requests();
    assert_eq!(requests.len(), 2);
    let vision_url = requests[0].body["messages"][1]["content"][1]["image_url"]["url"]
        .as_str()
        .unwrap();
    assert_eq!(vision_url, "data:image/png;base64,iVBORw0KGgo=");
    assert!(requests[1].body["messages"][1]["content"].is_string());
}

#[tokio::test]
async fn test_every_stage_failing_ends_in_heuristic() {
    let transport = ScriptedTransport::new(vec![
        refused(),
        Err(ProviderError::from_api_response(500, "upstream down")),
    ]);
    let outcome = raster_pipeline(ClientConfig::new(OPENAI, "k").with_vision(true), &transport)
        .suggest_svg(MENU, &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(outcome.strategy, Strategy::Heuristic);
    assert_eq!(outcome.suggestion, classify_svg(MENU));
    assert_eq!(outcome.warnings.len(), 2);
    assert!(outcome.warnings[1].contains("500"));
    assert_eq!(transport.requests().len(), 2);
}

#[tokio::test]
async fn test_svg_payload_never_sent_to_vision() {
    let transport = ScriptedTransport::new(vec![chat_reply(
        r#"{"isDecorative":false,"titleText":"Abrir menu","descText":""}"#,
    )]);
    let outcome = pipeline(ClientConfig::new(OPENAI, "k").with_vision(true), &transport)
        .suggest_svg(MENU, &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(outcome.strategy, Strategy::Text);
    assert_eq!(outcome.warnings.len(), 1);
    assert!(outcome.warnings[0].contains("Unsupported image: image/svg+xml"));

    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].body["messages"][1]["content"].is_string());
}

#[tokio::test]
async fn test_img_svg_source_skips_vision_request() {
    let transport = ScriptedTransport::new(vec![chat_reply(
        r#"{"isDecorative":false,"titleText":"Logo da loja","descText":""}"#,
    )]);
    let outcome = pipeline(ClientConfig::new(OPENAI, "k").with_vision(true), &transport)
        .suggest_img(&img("https://cdn.test/logo.svg"), &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(outcome.strategy, Strategy::Text);
    assert!(outcome.warnings[0].contains("image/svg+xml"));
    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].body["messages"][1]["content"].as_str().unwrap().contains("logo.svg"));
}

#[tokio::test]
async fn test_unparseable_reply_degrades() {
    let transport = ScriptedTransport::new(vec![chat_reply("Sorry, I can't do that.")]);
    let outcome = pipeline(ClientConfig::new(OPENAI, "k"), &transport)
        .suggest_svg(MENU, &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(outcome.strategy, Strategy::Heuristic);
    assert!(outcome.warnings[0].contains("No JSON object"));
}

#[tokio::test]
async fn test_missing_vendor_field_degrades() {
    let transport = ScriptedTransport::new(vec![Ok(json!({"choices": []}))]);
    let outcome = pipeline(ClientConfig::new(OPENAI, "k"), &transport)
        .suggest_svg(MENU, &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(outcome.strategy, Strategy::Heuristic);
    assert!(outcome.warnings[0].contains("choices[0].message.content"));
}

#[tokio::test]
async fn test_provider_decorative_reply_has_empty_texts() {
    let transport = ScriptedTransport::new(vec![chat_reply(
        r#"{"isDecorative":true,"titleText":"Ornament","descText":"Swirl"}"#,
    )]);
    let outcome = pipeline(ClientConfig::new(OPENAI, "k"), &transport)
        .suggest_svg("<svg><rect/></svg>", &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(outcome.suggestion, Suggestion::decorative());
}

#[tokio::test]
async fn test_structured_reply_keeps_analysis() {
    let transport = ScriptedTransport::new(vec![chat_reply(
        r#"{"conformidade":{"status":"Não conforme"},"tipoImagem":{"classificacao":"Funcional"},"recomendacao":{"altText":"Pesquisar","descricaoLonga":""}}"#,
    )]);
    let outcome = pipeline(ClientConfig::new(OPENAI, "k"), &transport)
        .suggest_svg(MENU, &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(outcome.suggestion.title_text, "Pesquisar");
    assert!(outcome.suggestion.wcag_analysis.is_some());
}

#[tokio::test]
async fn test_cancelled_before_start() {
    let transport = ScriptedTransport::new(vec![]);
    let cancel = CancellationToken::new();
    cancel.cancel();

    let err = pipeline(ClientConfig::new(OPENAI, "k"), &transport)
        .suggest_svg(MENU, &cancel)
        .await
        .unwrap_err();
    assert_eq!(err, PipelineError::Cancelled);
    assert!(transport.requests().is_empty());

    let err = pipeline(ClientConfig::default(), &transport)
        .suggest_svg(MENU, &cancel)
        .await
        .unwrap_err();
    assert_eq!(err, PipelineError::Cancelled);
}

#[tokio::test]
async fn test_img_vision_with_remote_url() {
    let transport = ScriptedTransport::new(vec![chat_reply(
        r#"{"isDecorative":false,"titleText":"Gato dormindo","descText":""}"#,
    )]);
    let outcome = pipeline(ClientConfig::new(OPENAI, "k").with_vision(true), &transport)
        .suggest_img(&img("https://cdn.test/cat.jpg"), &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(outcome.strategy, Strategy::Vision);
    assert_eq!(outcome.suggestion.title_text, "Gato dormindo");
    let requests = transport.requests();
    assert_eq!(
        requests[0].body["messages"][1]["content"][1]["image_url"]["url"],
        "https://cdn.test/cat.jpg"
    );
}

#[tokio::test]
async fn test_img_vision_reads_local_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("chart.png"), b"\x89PNG").unwrap();

    let transport = ScriptedTransport::new(vec![chat_reply(
        r#"{"isDecorative":false,"titleText":"Vendas","descText":""}"#,
    )]);
    let pipeline = SuggestionPipeline::builder(ClientConfig::new(OPENAI, "k").with_vision(true))
        .transport(transport.clone())
        .base_dir(dir.path())
        .build()
        .unwrap();
    let outcome = pipeline
        .suggest_img(&img("chart.png"), &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(outcome.strategy, Strategy::Vision);
    let url = transport.requests()[0].body["messages"][1]["content"][1]["image_url"]["url"]
        .as_str()
        .unwrap()
        .to_string();
    assert!(url.starts_with("data:image/png;base64,"));
}

#[tokio::test]
async fn test_img_missing_local_file_skips_network() {
    let dir = tempfile::tempdir().unwrap();
    let transport = ScriptedTransport::new(vec![]);
    let pipeline = SuggestionPipeline::builder(ClientConfig::new(OPENAI, "k").with_vision(true))
        .transport(transport.clone())
        .base_dir(dir.path())
        .build()
        .unwrap();

    let node = img("img/company-logo.png");
    let outcome = pipeline.suggest_img(&node, &CancellationToken::new()).await.unwrap();

    assert_eq!(outcome.strategy, Strategy::Heuristic);
    assert_eq!(outcome.suggestion, classify_img("img/company-logo.png"));
    assert_eq!(outcome.warnings.len(), 1);
    assert!(outcome.warnings[0].contains("not found"));
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn test_img_relative_path_without_base_dir_skips_network() {
    let transport = ScriptedTransport::new(vec![]);
    let outcome = pipeline(ClientConfig::new(OPENAI, "k").with_vision(true), &transport)
        .suggest_img(&img("photos/beach.jpg"), &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(outcome.strategy, Strategy::Heuristic);
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn test_img_text_mode_sends_source_in_prompt() {
    let transport = ScriptedTransport::new(vec![chat_reply(
        r#"{"isDecorative":false,"titleText":"Foto da equipe","descText":""}"#,
    )]);
    let outcome = pipeline(ClientConfig::new(OPENAI, "k"), &transport)
        .suggest_img(&img("team-photo.jpg"), &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(outcome.strategy, Strategy::Text);
    let prompt = transport.requests()[0].body["messages"][1]["content"]
        .as_str()
        .unwrap()
        .to_string();
    assert!(prompt.contains("team-photo.jpg"));
}

#[tokio::test]
async fn test_suggest_dispatches_on_node_kind() {
    let transport = ScriptedTransport::new(vec![]);
    let pipeline = pipeline(ClientConfig::default(), &transport);
    let cancel = CancellationToken::new();

    let node = ScannedNode::from(img("spacer.gif"));
    let outcome = pipeline.suggest(&node, &cancel).await.unwrap();
    assert_eq!(outcome.suggestion, classify_img("spacer.gif"));
}

#[test]
fn test_outcome_serialization() {
    let outcome = SuggestionOutcome {
        suggestion: Suggestion::informative("Menu", ""),
        strategy: Strategy::Heuristic,
        warnings: vec![],
    };
    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["strategy"], "heuristic");
    assert_eq!(json["suggestion"]["titleText"], "Menu");
}
