use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use pasi_core::{Effect, Msg};
use pasi_engine::{AnalysisSettings, EngineEvent, EngineHandle};
use widget_logging::widget_info;

use super::app::HostEvent;
use super::notify::UserNotifier;

pub struct EffectRunner {
    engine: EngineHandle,
    notifier: Box<dyn UserNotifier>,
}

impl EffectRunner {
    pub fn new(
        settings: &AnalysisSettings,
        host_tx: mpsc::Sender<HostEvent>,
        notifier: Box<dyn UserNotifier>,
    ) -> std::io::Result<Self> {
        let engine = EngineHandle::new(settings)?;
        let runner = Self { engine, notifier };
        runner.spawn_event_loop(host_tx);
        Ok(runner)
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::EncodeFile { file } => {
                    widget_info!("EncodeFile name={} bytes={}", file.name, file.byte_size);
                    self.engine.encode(file);
                }
                Effect::InvokeAnalysis { payload } => {
                    widget_info!("InvokeAnalysis payload_len={}", payload.len());
                    self.engine.analyze(payload);
                }
                Effect::NotifyUser { message } => self.notifier.notify(&message),
            }
        }
    }

    fn spawn_event_loop(&self, host_tx: mpsc::Sender<HostEvent>) {
        let engine = self.engine.clone();
        thread::spawn(move || loop {
            if let Some(event) = engine.try_recv() {
                if host_tx.send(HostEvent::Msg(map_event(event))).is_err() {
                    break;
                }
            } else {
                thread::sleep(Duration::from_millis(20));
            }
        });
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::FileEncoded { result } => match result {
            Ok(payload) => Msg::FileEncoded { payload },
            Err(failure) => Msg::FileReadFailed {
                message: failure.to_string(),
            },
        },
        EngineEvent::AnalysisFinished { result } => match result {
            Ok(result) => Msg::AnalysisCompleted(result),
            Err(failure) => Msg::AnalysisFailed {
                message: failure.to_string(),
            },
        },
    }
}
