//! Voice-command listener tests
//!
//! Drives the listening state machine with a scripted recognition engine and
//! a paused tokio clock: deadline timing, transcript classification, engine
//! failures, race behavior, and external cancellation.

use aimcoach::{
    CommandListener, GuidanceConfig, GuidanceError, ListenOutcome, RecognitionEvent,
    SpeechRecognizer,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tokio::time::Instant;

/// Recognition engine driven from the test: events are injected through a
/// channel, stop calls are counted and can be made to fail.
struct ScriptedEngine {
    session: Option<mpsc::Receiver<RecognitionEvent>>,
    stops: Arc<AtomicUsize>,
    fail_stop: bool,
}

impl ScriptedEngine {
    fn new() -> (Self, mpsc::Sender<RecognitionEvent>, Arc<AtomicUsize>) {
        let (tx, rx) = mpsc::channel(4);
        let stops = Arc::new(AtomicUsize::new(0));
        let engine = Self {
            session: Some(rx),
            stops: stops.clone(),
            fail_stop: false,
        };
        (engine, tx, stops)
    }

    fn failing_stop(mut self) -> Self {
        self.fail_stop = true;
        self
    }
}

impl SpeechRecognizer for ScriptedEngine {
    fn start(&mut self) -> Result<mpsc::Receiver<RecognitionEvent>, GuidanceError> {
        self.session
            .take()
            .ok_or_else(|| GuidanceError::Recognition("session already started".to_string()))
    }

    fn stop(&mut self) -> Result<(), GuidanceError> {
        self.stops.fetch_add(1, Ordering::SeqCst);
        if self.fail_stop {
            Err(GuidanceError::Recognition(
                "session already stopped".to_string(),
            ))
        } else {
            Ok(())
        }
    }
}

fn listener() -> CommandListener {
    CommandListener::new(GuidanceConfig::default().listener)
}

fn transcript(text: &str) -> RecognitionEvent {
    RecognitionEvent::Transcript {
        text: text.to_string(),
        confidence: 0.9,
    }
}

#[tokio::test(start_paused = true)]
async fn test_no_engine_resolves_not_supported_without_timer() {
    let (_cancel_tx, cancel_rx) = watch::channel(false);
    let start = Instant::now();

    let outcome = listener().listen(None::<ScriptedEngine>, cancel_rx).await;

    assert_eq!(outcome, Some(ListenOutcome::NotSupported));
    // Resolved synchronously: the paused clock never advanced
    assert_eq!(Instant::now(), start);
}

#[tokio::test(start_paused = true)]
async fn test_silence_aborts_exactly_at_deadline() {
    let (engine, _tx, stops) = ScriptedEngine::new();
    let (_cancel_tx, cancel_rx) = watch::channel(false);
    let start = Instant::now();

    let outcome = listener().listen(Some(engine), cancel_rx).await;

    assert_eq!(outcome, Some(ListenOutcome::Abort));
    assert_eq!(Instant::now() - start, Duration::from_millis(5000));
    assert_eq!(stops.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn test_open_camera_transcript() {
    let (engine, tx, stops) = ScriptedEngine::new();
    let (_cancel_tx, cancel_rx) = watch::channel(false);

    tx.send(transcript("abrir a câmera por favor")).await.unwrap();
    let outcome = listener().listen(Some(engine), cancel_rx).await;

    assert_eq!(outcome, Some(ListenOutcome::OpenCamera));
    assert_eq!(stops.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn test_cancel_transcript() {
    let (engine, tx, _stops) = ScriptedEngine::new();
    let (_cancel_tx, cancel_rx) = watch::channel(false);

    tx.send(transcript("cancelar")).await.unwrap();
    let outcome = listener().listen(Some(engine), cancel_rx).await;

    assert_eq!(outcome, Some(ListenOutcome::Cancel));
}

#[tokio::test(start_paused = true)]
async fn test_unrecognized_transcript_aborts() {
    let (engine, tx, _stops) = ScriptedEngine::new();
    let (_cancel_tx, cancel_rx) = watch::channel(false);

    tx.send(transcript("oi")).await.unwrap();
    let outcome = listener().listen(Some(engine), cancel_rx).await;

    assert_eq!(outcome, Some(ListenOutcome::Abort));
}

#[tokio::test(start_paused = true)]
async fn test_engine_error_aborts() {
    let (engine, tx, stops) = ScriptedEngine::new();
    let (_cancel_tx, cancel_rx) = watch::channel(false);

    tx.send(RecognitionEvent::Error("audio device lost".to_string()))
        .await
        .unwrap();
    let outcome = listener().listen(Some(engine), cancel_rx).await;

    assert_eq!(outcome, Some(ListenOutcome::Abort));
    assert_eq!(stops.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn test_session_end_without_result_aborts() {
    let (engine, tx, _stops) = ScriptedEngine::new();
    let (_cancel_tx, cancel_rx) = watch::channel(false);

    tx.send(RecognitionEvent::End).await.unwrap();
    let outcome = listener().listen(Some(engine), cancel_rx).await;

    assert_eq!(outcome, Some(ListenOutcome::Abort));
}

#[tokio::test(start_paused = true)]
async fn test_dropped_event_channel_aborts() {
    let (engine, tx, _stops) = ScriptedEngine::new();
    let (_cancel_tx, cancel_rx) = watch::channel(false);

    drop(tx);
    let outcome = listener().listen(Some(engine), cancel_rx).await;

    assert_eq!(outcome, Some(ListenOutcome::Abort));
}

#[tokio::test(start_paused = true)]
async fn test_stop_failure_is_swallowed() {
    let (engine, tx, stops) = ScriptedEngine::new();
    let engine = engine.failing_stop();
    let (_cancel_tx, cancel_rx) = watch::channel(false);

    tx.send(transcript("abrir a câmera")).await.unwrap();
    let outcome = listener().listen(Some(engine), cancel_rx).await;

    // Outcome is delivered even though stopping the session failed
    assert_eq!(outcome, Some(ListenOutcome::OpenCamera));
    assert_eq!(stops.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn test_simultaneous_transcript_and_deadline_resolve_once() {
    let (engine, tx, stops) = ScriptedEngine::new();
    let (_cancel_tx, cancel_rx) = watch::channel(false);

    let handle = tokio::spawn(listener().listen(Some(engine), cancel_rx));
    // Let the session reach its select point with nothing pending
    tokio::task::yield_now().await;

    // Enqueue the transcript first, then expire the deadline before the
    // listener gets a chance to run again
    tx.send(transcript("abrir a câmera")).await.unwrap();
    tokio::time::advance(Duration::from_millis(5000)).await;

    let outcome = handle.await.unwrap();
    assert_eq!(outcome, Some(ListenOutcome::OpenCamera));
    // Exactly one resolution, exactly one stop attempt
    assert_eq!(stops.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn test_deadline_with_empty_queue_beats_late_transcript() {
    let (engine, tx, stops) = ScriptedEngine::new();
    let (_cancel_tx, cancel_rx) = watch::channel(false);

    let handle = tokio::spawn(listener().listen(Some(engine), cancel_rx));
    tokio::task::yield_now().await;

    // Nothing queued when the deadline expires: the deadline wins, and a
    // transcript arriving afterwards is a no-op (the session is terminal)
    tokio::time::advance(Duration::from_millis(5000)).await;
    let _ = tx.send(transcript("abrir a câmera")).await;

    let outcome = handle.await.unwrap();
    assert_eq!(outcome, Some(ListenOutcome::Abort));
    assert_eq!(stops.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn test_external_cancellation_produces_no_outcome() {
    let (engine, _tx, stops) = ScriptedEngine::new();
    let (cancel_tx, cancel_rx) = watch::channel(false);

    let handle = tokio::spawn(listener().listen(Some(engine), cancel_rx));
    tokio::task::yield_now().await;

    cancel_tx.send(true).unwrap();
    let outcome = handle.await.unwrap();

    assert_eq!(outcome, None);
    assert_eq!(stops.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn test_dropped_cancel_handle_keeps_race_alive() {
    let (engine, _tx, _stops) = ScriptedEngine::new();
    let (cancel_tx, cancel_rx) = watch::channel(false);
    drop(cancel_tx);

    let start = Instant::now();
    let outcome = listener().listen(Some(engine), cancel_rx).await;

    // Losing the cancel handle is not a cancellation; the deadline still runs
    assert_eq!(outcome, Some(ListenOutcome::Abort));
    assert_eq!(Instant::now() - start, Duration::from_millis(5000));
}

#[test]
fn test_outcome_serialization() {
    for outcome in [
        ListenOutcome::OpenCamera,
        ListenOutcome::Cancel,
        ListenOutcome::Abort,
        ListenOutcome::NotSupported,
    ] {
        let json = serde_json::to_string(&outcome).unwrap();
        let deserialized: ListenOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, outcome);
    }

    let json = serde_json::to_string(&ListenOutcome::OpenCamera).unwrap();
    assert!(json.contains("OpenCamera"));
}

#[tokio::test(start_paused = true)]
async fn test_session_start_failure_aborts() {
    // An engine whose session cannot start behaves like an engine error
    let (mut engine, _tx, stops) = ScriptedEngine::new();
    // Consume the session so start() inside listen fails
    let _ = engine.start().unwrap();
    let (_cancel_tx, cancel_rx) = watch::channel(false);

    let outcome = listener().listen(Some(engine), cancel_rx).await;

    assert_eq!(outcome, Some(ListenOutcome::Abort));
    assert_eq!(stops.load(Ordering::SeqCst), 1);
}
