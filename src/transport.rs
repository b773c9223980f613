use std::future::Future;

use futures_util::{SinkExt, StreamExt};
use tokio::sync::mpsc;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::client::IntoClientRequest;
use tokio_tungstenite::tungstenite::protocol::Message;

use crate::client::consts::DEFAULT_CAPACITY;
use crate::error::TransportError;

/// Notifications delivered by an open transport, in arrival order.
#[derive(Debug, Clone)]
pub enum TransportEvent {
    /// One discrete text frame from the service.
    Frame(String),
    /// The link is gone: remote close, network drop, or read error. No
    /// further sends will reach the service.
    Closed(Option<String>),
}

/// Channel pair owned by the session for one open connection. Dropping
/// `outbound` tells the transport to close the link.
pub struct TransportHandle {
    pub outbound: mpsc::Sender<String>,
    pub events: mpsc::Receiver<TransportEvent>,
}

/// A persistent, message-oriented connection to the service.
///
/// [`WsTransport`] is the production implementation; tests substitute a fake
/// backed by plain channels so session behavior runs without a network.
pub trait Transport: Send + Sync {
    fn connect(
        &self,
        url: &str,
    ) -> impl Future<Output = Result<TransportHandle, TransportError>> + Send;
}

/// WebSocket transport over tokio-tungstenite. Splits the stream and runs
/// one task per direction, bridging both halves to the handle's channels.
pub struct WsTransport;

impl Transport for WsTransport {
    fn connect(
        &self,
        url: &str,
    ) -> impl Future<Output = Result<TransportHandle, TransportError>> + Send {
        let url = url.to_string();
        async move {
            let request = url
                .into_client_request()
                .map_err(|e| TransportError::Handshake(e.to_string()))?;
            let (ws_stream, _) = connect_async(request)
                .await
                .map_err(|e| TransportError::Handshake(e.to_string()))?;
            tracing::info!("live websocket connected");

            let (mut write, mut read) = ws_stream.split();
            let (out_tx, mut out_rx) = mpsc::channel::<String>(DEFAULT_CAPACITY);
            let (ev_tx, ev_rx) = mpsc::channel::<TransportEvent>(DEFAULT_CAPACITY);

            tokio::spawn(async move {
                while let Some(frame) = out_rx.recv().await {
                    if let Err(e) = write.send(Message::Text(frame)).await {
                        tracing::error!("failed to send frame: {}", e);
                        break;
                    }
                }
                // Sender dropped or sink failed: finish with a close frame.
                if let Err(e) = write.send(Message::Close(None)).await {
                    tracing::debug!("close frame not delivered: {}", e);
                }
            });

            tokio::spawn(async move {
                loop {
                    match read.next().await {
                        Some(Ok(Message::Text(text))) => {
                            if ev_tx.send(TransportEvent::Frame(text)).await.is_err() {
                                break;
                            }
                        }
                        Some(Ok(Message::Binary(bin))) => {
                            tracing::warn!("unexpected binary frame ({} bytes)", bin.len());
                        }
                        Some(Ok(Message::Close(frame))) => {
                            let reason = frame.map(|f| f.reason.to_string());
                            tracing::info!(?reason, "websocket closed by server");
                            let _ = ev_tx.send(TransportEvent::Closed(reason)).await;
                            break;
                        }
                        Some(Ok(_)) => {}
                        Some(Err(e)) => {
                            tracing::error!("failed to read frame: {}", e);
                            let _ = ev_tx
                                .send(TransportEvent::Closed(Some(e.to_string())))
                                .await;
                            break;
                        }
                        None => {
                            let _ = ev_tx.send(TransportEvent::Closed(None)).await;
                            break;
                        }
                    }
                }
            });

            Ok(TransportHandle {
                outbound: out_tx,
                events: ev_rx,
            })
        }
    }
}
