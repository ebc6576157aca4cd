use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use pasi_core::{AnalysisResult, FileHandle};
use pasi_engine::{
    AnalysisFailure, AnalysisInvoker, EngineEvent, EngineHandle, FileEncoder, ReadFailure,
};

struct StubEncoder;

#[async_trait::async_trait]
impl FileEncoder for StubEncoder {
    async fn encode(&self, file: &FileHandle) -> Result<String, ReadFailure> {
        if file.name == "broken.jpg" {
            return Err(ReadFailure::Io {
                path: file.location.display().to_string(),
                message: "revoked".to_string(),
            });
        }
        Ok(format!("data:,{}", file.name))
    }
}

#[derive(Default)]
struct RecordingInvoker {
    payloads: Mutex<Vec<String>>,
}

#[async_trait::async_trait]
impl AnalysisInvoker for RecordingInvoker {
    async fn invoke(&self, payload: &str) -> Result<AnalysisResult, AnalysisFailure> {
        self.payloads.lock().unwrap().push(payload.to_string());
        Ok(AnalysisResult::new(format!("scored {payload}")))
    }
}

fn wait_for_event(engine: &EngineHandle) -> EngineEvent {
    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        if let Some(event) = engine.try_recv() {
            return event;
        }
        assert!(Instant::now() < deadline, "timed out waiting for engine event");
        thread::sleep(Duration::from_millis(5));
    }
}

fn stub_engine() -> EngineHandle {
    EngineHandle::with_parts(Arc::new(StubEncoder), Arc::new(RecordingInvoker::default())).unwrap()
}

#[test]
fn encode_command_reports_payload() {
    let engine = stub_engine();
    engine.encode(FileHandle::new("photo.jpg", 10, "/uploads/photo.jpg"));

    assert_eq!(
        wait_for_event(&engine),
        EngineEvent::FileEncoded {
            result: Ok("data:,photo.jpg".to_string())
        }
    );
}

#[test]
fn encode_failure_is_reported_as_event() {
    let engine = stub_engine();
    engine.encode(FileHandle::new("broken.jpg", 10, "/uploads/broken.jpg"));

    match wait_for_event(&engine) {
        EngineEvent::FileEncoded { result: Err(err) } => {
            assert!(matches!(err, ReadFailure::Io { .. }));
        }
        other => panic!("unexpected event {other:?}"),
    }
}

#[test]
fn analyze_command_invokes_once() {
    let invoker = Arc::new(RecordingInvoker::default());
    let engine = EngineHandle::with_parts(Arc::new(StubEncoder), invoker.clone()).unwrap();
    engine.analyze("data:,photo.jpg");

    assert_eq!(
        wait_for_event(&engine),
        EngineEvent::AnalysisFinished {
            result: Ok(AnalysisResult::new("scored data:,photo.jpg"))
        }
    );
    assert_eq!(*invoker.payloads.lock().unwrap(), vec!["data:,photo.jpg"]);
    assert!(engine.try_recv().is_none());
}
