//! Tick orchestration.
//!
//! [`Aggregator`] owns the alert engine and the three optional sinks.  Once
//! per tick it copies the shared snapshot, runs the rules outside the lock,
//! claims the tick's sequence number, and emits snapshot → alerts →
//! indicator codes.  An absent or failing sink degrades that one output to a
//! local log line; the tick loop itself never stops.
//!
//! ```text
//!  SharedState ──▶ ┌───────────────────────┐ ──▶ SnapshotSink
//!                  │      Aggregator       │ ──▶ AlertSink
//!                  │  copy · rules · emit  │ ──▶ IndicatorSink
//!                  └───────────────────────┘
//! ```

use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use log::{debug, info, warn};

use crate::analyzer::alerts::AlertEngine;
use crate::analyzer::messages::SnapshotMessage;
use crate::analyzer::ports::{AlertSink, IndicatorSink, SnapshotSink};
use crate::config::SystemConfig;
use crate::hal;
use crate::producer::TASK_STACK_BYTES;
use crate::state::SharedState;

pub struct Aggregator<S, A, I> {
    engine: AlertEngine,
    stats: Option<S>,
    alerts: Option<A>,
    indicator: Option<I>,
}

impl<S, A, I> Aggregator<S, A, I>
where
    S: SnapshotSink,
    A: AlertSink,
    I: IndicatorSink,
{
    /// Sinks are optional capabilities: pass `None` for a consumer that is
    /// not deployed and its output is logged locally instead.
    pub fn new(
        config: &SystemConfig,
        stats: Option<S>,
        alerts: Option<A>,
        indicator: Option<I>,
    ) -> Self {
        if stats.is_none() {
            info!("snapshot sink absent, snapshots will be logged locally");
        }
        if alerts.is_none() {
            info!("alert sink absent, alerts will be logged locally");
        }
        if indicator.is_none() {
            info!("indicator sink absent, pulses will be logged locally");
        }
        Self {
            engine: AlertEngine::new(config.thresholds),
            stats,
            alerts,
            indicator,
        }
    }

    /// Run one tick against `state` and return the emitted snapshot message.
    pub fn tick(&mut self, state: &SharedState) -> SnapshotMessage {
        // One consistent copy; the lock is gone before any rule runs.
        let snap = state.snapshot();

        let timestamp = hal::now_unix_secs();
        let assessment = self.engine.evaluate(&snap, timestamp);

        // Write the level back and claim this tick's sequence number.
        let seq = state.finish_tick(assessment.level);

        // Snapshot goes out every tick, alert or no alert.
        let msg = SnapshotMessage::assemble(seq, timestamp, &snap, assessment.level);
        match &mut self.stats {
            Some(sink) => {
                if let Err(e) = sink.send(&msg) {
                    warn!("snapshot #{seq} not delivered: {e}");
                }
            }
            None => info!("(simulated send) {msg}"),
        }

        for alert in &assessment.alerts {
            info!("alert: {alert}");
            if let Some(sink) = &mut self.alerts {
                if let Err(e) = sink.send(alert) {
                    warn!("alert not delivered: {e}");
                }
            }

            if let Some(code) = alert.category.indicator() {
                match &mut self.indicator {
                    Some(sink) => {
                        if let Err(e) = sink.trigger(code) {
                            warn!("indicator {code} not triggered: {e}");
                        }
                    }
                    None => debug!("(simulated send) indicator {code}"),
                }
            }
        }

        debug!(
            "tick #{seq}: {} alert(s), level {}",
            assessment.alerts.len(),
            assessment.level
        );
        msg
    }
}

/// Spawn the aggregator thread: sleep one interval, tick, repeat until the
/// running flag clears.
pub fn spawn<S, A, I>(
    mut aggregator: Aggregator<S, A, I>,
    state: SharedState,
    interval: Duration,
    running: Arc<AtomicBool>,
) -> io::Result<JoinHandle<()>>
where
    S: SnapshotSink + Send + 'static,
    A: AlertSink + Send + 'static,
    I: IndicatorSink + Send + 'static,
{
    thread::Builder::new()
        .name("aggregator".into())
        .stack_size(TASK_STACK_BYTES)
        .spawn(move || {
            info!("aggregator started");
            while running.load(Ordering::Relaxed) {
                thread::sleep(interval);
                aggregator.tick(&state);
            }
            info!("aggregator stopped");
        })
}
