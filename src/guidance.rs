//! The periodic guidance loop.
//!
//! While the camera preview is active, every tick runs one synchronous pass:
//! sample the latest frame, score it, classify the scores, and forward the
//! advisory through the throttled voice output. A slow pass delays the next
//! tick rather than overlapping it.

use crate::advisor::ThrottledAdvisor;
use crate::config::{GuidanceConfig, QualityThresholds};
use crate::quality::{classify, score_frame};
use crate::sampler::FrameSampler;
use crate::types::{FrameSource, GuidanceResult, VoiceSink};
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::MissedTickBehavior;

/// Owns one camera screen's guidance pipeline.
pub struct GuidanceLoop<S: FrameSource, V: VoiceSink> {
    sampler: FrameSampler<S>,
    advisor: ThrottledAdvisor<V>,
    thresholds: QualityThresholds,
    tick: Duration,
}

impl<S: FrameSource, V: VoiceSink> GuidanceLoop<S, V> {
    pub fn new(source: S, sink: V, config: &GuidanceConfig) -> Self {
        Self {
            sampler: FrameSampler::new(source, config.timing.sample_width),
            advisor: ThrottledAdvisor::new(
                sink,
                Duration::from_millis(config.timing.cooldown_ms),
            ),
            thresholds: config.quality.clone(),
            tick: Duration::from_millis(config.timing.tick_ms),
        }
    }

    /// Run until `shutdown` flips to true or its sender is dropped.
    ///
    /// After shutdown no further advisory is produced; in-flight state is
    /// simply dropped with the loop.
    pub async fn run(mut self, mut shutdown: watch::Receiver<bool>) {
        let mut ticker = tokio::time::interval(self.tick);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        log::info!("Guidance loop started, {} ms tick", self.tick.as_millis());

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    self.tick_once();
                }
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        break;
                    }
                }
            }
        }

        log::info!("Guidance loop stopped");
    }

    /// One scoring pass. Returns `None` when no scoreable frame is available
    /// (camera not ready or degenerate geometry) - that tick is skipped.
    pub fn tick_once(&mut self) -> Option<GuidanceResult> {
        let frame = self.sampler.sample()?;
        let scores = score_frame(&frame);
        let result = classify(scores, &self.thresholds);

        log::debug!(
            "Tick: blur={:.1} edge={:.1} ok={} \"{}\"",
            result.blur_score,
            result.edge_score,
            result.ok,
            result.message
        );

        self.advisor.emit(&result.message);
        Some(result)
    }
}
