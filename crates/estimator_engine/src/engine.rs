use std::sync::{mpsc, Arc};
use std::thread;

use engine_logging::{engine_error, engine_info};
use estimator_core::RequestId;

use crate::connector::{Connector, ReqwestConnector};
use crate::{ConnectError, ConnectorSettings, EngineEvent};

enum EngineCommand {
    Connect {
        request_id: RequestId,
        token: String,
        dataset_id: String,
    },
}

/// Runs connector calls on a background tokio runtime so the UI thread never blocks.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: ConnectorSettings) -> Self {
        Self::with_connector(Arc::new(ReqwestConnector::new(settings)))
    }

    pub fn with_connector(connector: Arc<dyn Connector>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    engine_error!("Failed to start engine runtime: {}", err);
                    return;
                }
            };
            while let Ok(command) = cmd_rx.recv() {
                let connector = connector.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(connector.as_ref(), command, event_tx).await;
                });
            }
            engine_info!("Engine command channel closed");
        });

        Self { cmd_tx, event_rx }
    }

    /// Queues a connect attempt. Fails when the engine thread is gone, in
    /// which case no completion event will ever arrive for `request_id`.
    pub fn connect(
        &self,
        request_id: RequestId,
        token: impl Into<String>,
        dataset_id: impl Into<String>,
    ) -> Result<(), ConnectError> {
        self.cmd_tx
            .send(EngineCommand::Connect {
                request_id,
                token: token.into(),
                dataset_id: dataset_id.into(),
            })
            .map_err(|_| ConnectError::EngineUnavailable)
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }
}

async fn handle_command(
    connector: &dyn Connector,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Connect {
            request_id,
            token,
            dataset_id,
        } => {
            let result = connector.connect(&token, &dataset_id).await;
            let _ = event_tx.send(EngineEvent::ConnectCompleted { request_id, result });
        }
    }
}
