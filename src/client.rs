use std::sync::{Arc, Mutex};

use tokio::sync::{broadcast, mpsc};

use crate::error::{ClientError, TransportError};
use crate::transport::{Transport, TransportEvent, TransportHandle, WsTransport};
use crate::types;

mod config;
pub(crate) mod consts;
mod utils;

pub use config::{Config, ConfigBuilder};

pub type LiveEventRx = broadcast::Receiver<LiveEvent>;

/// Lifecycle and content notifications emitted by a session.
#[derive(Debug, Clone)]
pub enum LiveEvent {
    /// The service acknowledged the setup frame; audio and text input will
    /// now be transmitted.
    SetupComplete,
    /// One `serverContent` payload, forwarded undecoded. Interpreting the
    /// modality-specific contents is the caller's job.
    ServerContent(serde_json::Value),
    /// The link dropped or was closed by the service mid-session.
    Closed { reason: Option<String> },
}

/// Connection lifecycle of a [`LiveClient`].
///
/// `Idle -> Connecting -> AwaitingSetupAck -> Ready -> Closed`, with
/// `Errored` reachable from any state before `Closed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Connecting,
    AwaitingSetupAck,
    Ready,
    Closed,
    Errored,
}

/// Client for one bidirectional live session.
///
/// Owns the transport handle exclusively; callers interact only through the
/// operations here and the events from [`LiveClient::events`]. At most one
/// session is live per client, and a second `connect` while one is open is
/// rejected rather than silently replacing it.
pub struct LiveClient<T: Transport = WsTransport> {
    config: Config,
    transport: T,
    state: Arc<Mutex<SessionState>>,
    outbound: Option<mpsc::Sender<String>>,
    event_tx: broadcast::Sender<LiveEvent>,
    recv_handle: Option<tokio::task::JoinHandle<()>>,
}

impl LiveClient {
    pub fn new(config: Config) -> Self {
        Self::with_transport(config, WsTransport)
    }
}

impl<T: Transport> LiveClient<T> {
    pub fn with_transport(config: Config, transport: T) -> Self {
        let (event_tx, _) = broadcast::channel(consts::DEFAULT_CAPACITY);
        Self {
            config,
            transport,
            state: Arc::new(Mutex::new(SessionState::Idle)),
            outbound: None,
            event_tx,
            recv_handle: None,
        }
    }

    pub fn state(&self) -> SessionState {
        read_state(&self.state)
    }

    /// Whether the setup handshake has completed and sends will transmit.
    pub fn is_ready(&self) -> bool {
        self.state() == SessionState::Ready
    }

    /// Subscribes to session events. Valid before or after `connect`;
    /// subscribing before guarantees no event is missed.
    pub fn events(&self) -> LiveEventRx {
        self.event_tx.subscribe()
    }

    /// Opens the transport and sends the setup frame.
    ///
    /// Resolves as soon as the setup frame is handed to the transport, not
    /// when the service acknowledges it; readiness is signaled separately by
    /// [`LiveEvent::SetupComplete`]. Fails before any I/O when no api key is
    /// configured, and with [`ClientError::AlreadyConnected`] while a
    /// session is live.
    pub async fn connect(&mut self, setup: types::SetupConfig) -> Result<(), ClientError> {
        match self.state() {
            SessionState::Idle | SessionState::Closed | SessionState::Errored => {}
            _ => return Err(ClientError::AlreadyConnected),
        }
        if !self.config.has_api_key() {
            return Err(ClientError::MissingApiKey);
        }

        set_state(&self.state, SessionState::Connecting);
        let url = utils::build_url(&self.config);
        let TransportHandle { outbound, events } = match self.transport.connect(&url).await {
            Ok(handle) => handle,
            Err(e) => {
                set_state(&self.state, SessionState::Errored);
                return Err(e.into());
            }
        };

        // The transport is open: the setup frame goes out before any other
        // traffic.
        let setup_event = types::ClientEvent::Setup(types::events::Setup::from(&setup));
        let frame = match serde_json::to_string(&setup_event) {
            Ok(frame) => frame,
            Err(e) => {
                set_state(&self.state, SessionState::Errored);
                return Err(e.into());
            }
        };
        if outbound.send(frame).await.is_err() {
            set_state(&self.state, SessionState::Errored);
            return Err(ClientError::Transport(TransportError::Closed));
        }
        set_state(&self.state, SessionState::AwaitingSetupAck);

        self.outbound = Some(outbound);
        self.recv_handle = Some(tokio::spawn(recv_loop(
            events,
            self.state.clone(),
            self.event_tx.clone(),
        )));
        Ok(())
    }

    /// Streams one raw PCM16 chunk (16 kHz mono) as a base64 media frame.
    ///
    /// Fire and forget: a chunk sent before the session is ready, or after
    /// it closed, is dropped silently so audio producers need not track
    /// connection state.
    pub async fn send_realtime_audio(&self, audio: &[u8]) {
        if !self.is_ready() {
            tracing::debug!("dropping audio chunk, session not ready");
            return;
        }
        let event = types::ClientEvent::RealtimeInput(types::events::RealtimeInput::pcm16_chunk(
            audio,
        ));
        self.send_client_event(event).await;
    }

    /// Sends one completed user text turn. Same readiness gating as audio.
    pub async fn send_client_text(&self, text: &str) {
        if !self.is_ready() {
            tracing::debug!("dropping text turn, session not ready");
            return;
        }
        let event =
            types::ClientEvent::ClientContent(types::events::ClientContent::user_turn(text));
        self.send_client_event(event).await;
    }

    /// Tears the session down. Idempotent: closing an already-closed or
    /// never-connected client is a no-op.
    pub fn disconnect(&mut self) {
        // Dropping the outbound sender lets the transport flush a close
        // frame and terminate.
        self.outbound = None;
        if let Some(handle) = self.recv_handle.take() {
            handle.abort();
        }
        set_state(&self.state, SessionState::Closed);
    }

    async fn send_client_event(&self, event: types::ClientEvent) {
        let Some(tx) = self.outbound.as_ref() else {
            return;
        };
        match serde_json::to_string(&event) {
            Ok(frame) => {
                if tx.send(frame).await.is_err() {
                    tracing::warn!("dropping frame, transport closed");
                }
            }
            Err(e) => {
                tracing::error!("failed to serialize event: {}", e);
            }
        }
    }
}

impl<T: Transport> Drop for LiveClient<T> {
    fn drop(&mut self) {
        if let Some(handle) = self.recv_handle.take() {
            handle.abort();
        }
    }
}

async fn recv_loop(
    mut events: mpsc::Receiver<TransportEvent>,
    state: Arc<Mutex<SessionState>>,
    event_tx: broadcast::Sender<LiveEvent>,
) {
    while let Some(event) = events.recv().await {
        match event {
            TransportEvent::Frame(text) => match serde_json::from_str::<types::ServerMessage>(&text)
            {
                Ok(message) => {
                    if message.is_unknown() {
                        tracing::debug!("ignoring unrecognized server frame");
                    }
                    if message.setup_complete.is_some() {
                        if read_state(&state) == SessionState::AwaitingSetupAck {
                            set_state(&state, SessionState::Ready);
                            emit(&event_tx, LiveEvent::SetupComplete);
                        } else {
                            tracing::debug!("ignoring duplicate setupComplete");
                        }
                    }
                    if let Some(content) = message.server_content {
                        emit(&event_tx, LiveEvent::ServerContent(content));
                    }
                }
                // Recoverable: the frame is discarded and the session
                // stays up.
                Err(e) => {
                    tracing::warn!("discarding malformed server frame: {}", e);
                }
            },
            TransportEvent::Closed(reason) => {
                tracing::info!(?reason, "session closed by transport");
                set_state(&state, SessionState::Closed);
                emit(&event_tx, LiveEvent::Closed { reason });
                break;
            }
        }
    }
}

fn emit(event_tx: &broadcast::Sender<LiveEvent>, event: LiveEvent) {
    // A send error only means nobody is subscribed.
    let _ = event_tx.send(event);
}

fn set_state(state: &Mutex<SessionState>, next: SessionState) {
    if let Ok(mut guard) = state.lock() {
        *guard = next;
    }
}

fn read_state(state: &Mutex<SessionState>) -> SessionState {
    state.lock().map(|guard| *guard).unwrap_or(SessionState::Errored)
}

/// Connects with an explicit [`Config`] and returns the live client.
pub async fn connect_with_config(
    config: Config,
    setup: types::SetupConfig,
) -> Result<LiveClient, ClientError> {
    let mut client = LiveClient::new(config);
    client.connect(setup).await?;
    Ok(client)
}

/// Connects with configuration taken from the environment.
pub async fn connect(setup: types::SetupConfig) -> Result<LiveClient, ClientError> {
    connect_with_config(Config::new(), setup).await
}
