use std::io;
use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use pasi_core::FileHandle;
use widget_logging::{widget_debug, widget_warn};

use crate::analysis::{build_invoker, AnalysisInvoker, AnalysisSettings};
use crate::encode::{FileEncoder, FsFileEncoder};
use crate::EngineEvent;

enum EngineCommand {
    Encode { file: FileHandle },
    Analyze { payload: String },
}

/// Runs file reads and analysis requests on a background tokio runtime.
///
/// Results come back as [`EngineEvent`]s in the order they finish.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: Arc<Mutex<mpsc::Receiver<EngineEvent>>>,
}

impl EngineHandle {
    pub fn new(settings: &AnalysisSettings) -> io::Result<Self> {
        Self::with_parts(Arc::new(FsFileEncoder), build_invoker(settings))
    }

    pub fn with_parts(
        encoder: Arc<dyn FileEncoder>,
        invoker: Arc<dyn AnalysisInvoker>,
    ) -> io::Result<Self> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Runtime::new()?;

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let encoder = encoder.clone();
                let invoker = invoker.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    let event = handle_command(encoder.as_ref(), invoker.as_ref(), command).await;
                    let _ = event_tx.send(event);
                });
            }
            widget_debug!("engine command channel closed");
        });

        Ok(Self {
            cmd_tx,
            event_rx: Arc::new(Mutex::new(event_rx)),
        })
    }

    pub fn encode(&self, file: FileHandle) {
        self.send(EngineCommand::Encode { file });
    }

    pub fn analyze(&self, payload: impl Into<String>) {
        self.send(EngineCommand::Analyze {
            payload: payload.into(),
        });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.lock().ok()?.try_recv().ok()
    }

    fn send(&self, command: EngineCommand) {
        if self.cmd_tx.send(command).is_err() {
            widget_warn!("engine worker is gone; command dropped");
        }
    }
}

async fn handle_command(
    encoder: &dyn FileEncoder,
    invoker: &dyn AnalysisInvoker,
    command: EngineCommand,
) -> EngineEvent {
    match command {
        EngineCommand::Encode { file } => EngineEvent::FileEncoded {
            result: encoder.encode(&file).await,
        },
        EngineCommand::Analyze { payload } => EngineEvent::AnalysisFinished {
            result: invoker.invoke(&payload).await,
        },
    }
}
