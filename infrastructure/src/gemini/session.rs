//! Gemini chat session
//!
//! The REST API is stateless, so the conversation history is kept here and
//! sent in full with each turn. A turn joins the history only once its
//! reply stream completes.

use super::client::GeminiClient;
use super::error::{GeminiError, Result};
use super::protocol::{Content, GenerateContentRequest, GenerateContentResponse};
use super::sse::SseParser;
use async_trait::async_trait;
use futures::{Stream, StreamExt};
use nationsense_application::{ChatSession, GatewayError, StreamHandle};
use nationsense_domain::StreamEvent;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, mpsc};
use tracing::{debug, warn};

const STREAM_BUFFER: usize = 64;

pub struct GeminiChatSession {
    client: Arc<GeminiClient>,
    system_instruction: String,
    /// Completed turns, oldest first
    history: Arc<Mutex<Vec<Content>>>,
}

impl GeminiChatSession {
    pub fn new(client: Arc<GeminiClient>, system_instruction: String) -> Self {
        Self {
            client,
            system_instruction,
            history: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

#[async_trait]
impl ChatSession for GeminiChatSession {
    async fn send_streaming(&self, text: &str) -> std::result::Result<StreamHandle, GatewayError> {
        let user_turn = Content::user(text);
        let mut contents = self.history.lock().await.clone();
        contents.push(user_turn.clone());

        let request = GenerateContentRequest::conversation(contents)
            .with_system_instruction(self.system_instruction.clone());
        let response = self
            .client
            .stream(&self.client.config().chat_model, &request)
            .await?;

        let (tx, rx) = mpsc::channel(STREAM_BUFFER);
        let history = Arc::clone(&self.history);
        let idle = self.client.config().stream_idle_timeout();

        tokio::spawn(async move {
            match pump_stream(response.bytes_stream(), idle, &tx).await {
                Ok(full) => {
                    {
                        let mut history = history.lock().await;
                        history.push(user_turn);
                        history.push(Content::model(full.clone()));
                    }
                    let _ = tx.send(StreamEvent::Completed(full)).await;
                }
                Err(e) => {
                    warn!("Chat stream failed: {}", e);
                    let _ = tx.send(StreamEvent::Error(e.to_string())).await;
                }
            }
        });

        Ok(StreamHandle::new(rx))
    }
}

/// Read an SSE body, forwarding each text increment as a delta.
///
/// Returns the full reply once the body ends.
async fn pump_stream<S, B, E>(
    stream: S,
    idle: Duration,
    tx: &mpsc::Sender<StreamEvent>,
) -> Result<String>
where
    S: Stream<Item = std::result::Result<B, E>>,
    B: AsRef<[u8]>,
    E: std::fmt::Display,
{
    let mut stream = std::pin::pin!(stream);
    let mut parser = SseParser::new();
    let mut full = String::new();

    loop {
        let next = tokio::time::timeout(idle, stream.next())
            .await
            .map_err(|_| GeminiError::Timeout)?;
        let Some(chunk) = next else { break };
        let chunk = chunk.map_err(|e| GeminiError::Stream(e.to_string()))?;

        for frame in parser.push(chunk.as_ref()) {
            forward_frame(&frame, &mut full, tx).await?;
        }
    }
    if let Some(frame) = parser.finish() {
        forward_frame(&frame, &mut full, tx).await?;
    }

    debug!("Chat stream complete: {} chars", full.len());
    Ok(full)
}

async fn forward_frame(
    frame: &str,
    full: &mut String,
    tx: &mpsc::Sender<StreamEvent>,
) -> Result<()> {
    let response: GenerateContentResponse = serde_json::from_str(frame)?;
    if let Some(error) = response.error {
        return Err(GeminiError::Api {
            status: error.code,
            message: error.message,
        });
    }

    let delta = response.text();
    if delta.is_empty() {
        return Ok(());
    }
    full.push_str(&delta);
    tx.send(StreamEvent::Delta(delta))
        .await
        .map_err(|_| GeminiError::Stream("receiver dropped".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::stream;

    fn frame(text: &str) -> Vec<u8> {
        let body = serde_json::json!({
            "candidates": [{"content": {"role": "model", "parts": [{"text": text}]}}]
        });
        format!("data: {}\r\n\r\n", body).into_bytes()
    }

    async fn drain(mut rx: mpsc::Receiver<StreamEvent>) -> Vec<StreamEvent> {
        let mut events = Vec::new();
        while let Ok(event) = rx.try_recv() {
            events.push(event);
        }
        events
    }

    #[tokio::test]
    async fn test_pump_forwards_deltas_in_order() {
        let chunks: Vec<std::result::Result<Vec<u8>, std::io::Error>> =
            vec![Ok(frame("Hello")), Ok(frame(", ")), Ok(frame("traveler"))];
        let (tx, rx) = mpsc::channel(8);

        let full = pump_stream(stream::iter(chunks), Duration::from_secs(1), &tx)
            .await
            .unwrap();
        drop(tx);

        assert_eq!(full, "Hello, traveler");
        assert_eq!(
            drain(rx).await,
            vec![
                StreamEvent::Delta("Hello".into()),
                StreamEvent::Delta(", ".into()),
                StreamEvent::Delta("traveler".into()),
            ]
        );
    }

    #[tokio::test]
    async fn test_pump_handles_frames_split_across_chunks() {
        let bytes = frame("Caw");
        let (head, tail) = bytes.split_at(10);
        let chunks: Vec<std::result::Result<Vec<u8>, std::io::Error>> =
            vec![Ok(head.to_vec()), Ok(tail.to_vec())];
        let (tx, _rx) = mpsc::channel(8);

        let full = pump_stream(stream::iter(chunks), Duration::from_secs(1), &tx)
            .await
            .unwrap();
        assert_eq!(full, "Caw");
    }

    #[tokio::test]
    async fn test_pump_surfaces_transport_error() {
        let chunks: Vec<std::result::Result<Vec<u8>, std::io::Error>> = vec![
            Ok(frame("I soar")),
            Err(std::io::Error::other("connection reset")),
        ];
        let (tx, _rx) = mpsc::channel(8);

        let err = pump_stream(stream::iter(chunks), Duration::from_secs(1), &tx)
            .await
            .unwrap_err();
        assert!(matches!(err, GeminiError::Stream(m) if m.contains("connection reset")));
    }

    #[tokio::test]
    async fn test_pump_surfaces_api_error_frame() {
        let chunks: Vec<std::result::Result<Vec<u8>, std::io::Error>> = vec![Ok(
            b"data: {\"error\":{\"code\":429,\"message\":\"quota\"}}\n\n".to_vec(),
        )];
        let (tx, _rx) = mpsc::channel(8);

        let err = pump_stream(stream::iter(chunks), Duration::from_secs(1), &tx)
            .await
            .unwrap_err();
        assert!(matches!(err, GeminiError::Api { status: 429, .. }));
    }

    #[tokio::test]
    async fn test_pump_times_out_when_idle() {
        let chunks = stream::iter(vec![Ok::<_, std::io::Error>(frame("slow"))])
            .chain(stream::pending());
        let (tx, _rx) = mpsc::channel(8);

        let err = pump_stream(chunks, Duration::from_millis(20), &tx)
            .await
            .unwrap_err();
        assert!(matches!(err, GeminiError::Timeout));
    }
}
