use std::net::SocketAddr;
use futures::{SinkExt, StreamExt};
use serde_json::{json, Value};
use chatbench::api::{build_router, AppState};
use chatbench::chat::ChatService;
use chatbench::config::{ProviderEndpoint, ProvidersConfig};
use chatbench::faq::FaqStore;
use chatbench::llm::ProviderRouter;
use chatbench::prompt::{PromptStore, PromptTemplate};
use tokio_tungstenite::tungstenite::Message;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn spawn_server(endpoints: ProvidersConfig) -> (SocketAddr, AppState) {
    let faq = FaqStore::empty(std::env::temp_dir().join("chatbench-ws-unused.json"));
    let state = AppState::new(ChatService::new(faq, ProviderRouter::new(endpoints), PromptStore::in_memory(PromptTemplate::default())));
    let app = build_router(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (addr, state)
}

type Client = tokio_tungstenite::WebSocketStream<tokio_tungstenite::MaybeTlsStream<tokio::net::TcpStream>>;

async fn exchange(ws: &mut Client, payload: &str) -> Value {
    ws.send(Message::Text(payload.to_string())).await.unwrap();
    loop {
        let frame = ws.next().await.expect("connection closed").unwrap();
        if let Message::Text(text) = frame {
            return serde_json::from_str(&text).unwrap();
        }
    }
}

#[tokio::test]
async fn test_errors_keep_session_open() {
    let (addr, state) = spawn_server(ProvidersConfig::default()).await;
    let (mut ws, _) = tokio_tungstenite::connect_async(format!("ws://{}/ws/chat", addr)).await.unwrap();

    let reply = exchange(&mut ws, "not json at all").await;
    assert!(reply["error"].as_str().unwrap().starts_with("Bad request: Invalid chat request"));

    let reply = exchange(&mut ws, &json!({"message": "hi", "model": "llama-3"}).to_string()).await;
    assert_eq!(reply["error"], "Unsupported model: llama-3");

    let reply = exchange(&mut ws, &json!({"message": "hi", "model": "gpt-4"}).to_string()).await;
    assert_eq!(reply["error"], "OpenAI API key required");

    assert!(state.service.history.is_empty());
    ws.close(None).await.unwrap();
}

#[tokio::test]
async fn test_relays_results() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "content": [{"type": "text", "text": "네, 결제 후 발행됩니다."}]
        })))
        .mount(&mock_server)
        .await;

    let (addr, state) = spawn_server(ProvidersConfig {
        anthropic: Some(ProviderEndpoint { base_url: Some(mock_server.uri()), api_key: None }),
        ..Default::default()
    })
    .await;
    let (mut ws, _) = tokio_tungstenite::connect_async(format!("ws://{}/ws/chat", addr)).await.unwrap();

    let request = json!({
        "message": "세금계산서 발행 되나요?",
        "model": "claude-3-sonnet",
        "api_key": "sk-ant-test"
    })
    .to_string();

    let first = exchange(&mut ws, &request).await;
    assert_eq!(first["model"], "claude-3-sonnet");
    assert_eq!(first["response"], "네, 결제 후 발행됩니다.");
    assert!(first["tokens_used"].as_u64().unwrap() > 0);

    let bad = exchange(&mut ws, r#"{"message": "x", "model": "claude-3-sonnet"}"#).await;
    assert_eq!(bad["error"], "Anthropic API key required");

    let second = exchange(&mut ws, &request).await;
    assert_eq!(second["response"], "네, 결제 후 발행됩니다.");

    assert_eq!(state.service.history.len(), 2);
    ws.close(None).await.unwrap();
}
