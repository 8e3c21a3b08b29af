//! End-to-end aggregator ticks over a populated shared state.
//!
//! These drive the real engine, state and message assembly together; only
//! the sinks are doubles.  Producer threads are not involved, each test
//! publishes channel values directly and calls `tick`.

use homesentry::analyzer::aggregator::Aggregator;
use homesentry::analyzer::messages::{AlertCategory, AlertLevel, IndicatorCode};
use homesentry::config::SystemConfig;
use homesentry::error::SinkError;
use homesentry::state::SharedState;

use crate::mock_rig::{
    RecordingAlertSink, RecordingIndicatorSink, RecordingSnapshotSink, SharedRecord, sink_record,
};

type RecordingAggregator =
    Aggregator<RecordingSnapshotSink, RecordingAlertSink, RecordingIndicatorSink>;

fn rig() -> (SharedState, SharedRecord, RecordingAggregator) {
    let config = SystemConfig::default();
    let record = sink_record();
    let agg = Aggregator::new(
        &config,
        Some(RecordingSnapshotSink::new(&record)),
        Some(RecordingAlertSink::new(&record)),
        Some(RecordingIndicatorSink::new(&record)),
    );
    (SharedState::default(), record, agg)
}

#[test]
fn three_tick_room_scenario() {
    let (state, record, mut agg) = rig();

    // Tick 1: hot room, quiet otherwise, door open.
    state.publish_climate(32, 40);
    state.publish_gas(false);
    state.publish_motion(false);
    state.publish_range(45, false);
    agg.tick(&state);

    // Tick 2: nothing changed; the temperature rule is level-triggered and
    // fires again.
    agg.tick(&state);

    // Tick 3: door swings closed while the room is still hot.
    state.publish_range(8, true);
    agg.tick(&state);

    let r = record.borrow();
    assert_eq!(r.snapshots.len(), 3);
    let seqs: Vec<u32> = r.snapshots.iter().map(|s| s.sequence_num).collect();
    assert_eq!(seqs, vec![0, 1, 2]);

    let cats: Vec<AlertCategory> = r.alerts.iter().map(|a| a.category).collect();
    assert_eq!(
        cats,
        vec![
            AlertCategory::TempHigh,
            AlertCategory::TempHigh,
            AlertCategory::TempHigh,
            AlertCategory::DoorClosed,
        ]
    );
    // The door alert carries the measured distance as its value.
    assert_eq!(r.alerts[3].value, 8);

    assert_eq!(
        r.pulses,
        vec![
            IndicatorCode::Temperature,
            IndicatorCode::Temperature,
            IndicatorCode::Temperature,
            IndicatorCode::Door,
        ]
    );
    assert!(
        r.snapshots
            .iter()
            .all(|s| s.alert_level == AlertLevel::Warning)
    );
}

#[test]
fn snapshot_message_carries_the_current_ticks_level() {
    let (state, record, mut agg) = rig();
    state.publish_gas(true);

    let msg = agg.tick(&state);

    // The level computed this tick is in this tick's snapshot message, not
    // deferred to the next one.
    assert_eq!(msg.sequence_num, 0);
    assert_eq!(msg.alert_level, AlertLevel::Critical);
    assert_eq!(record.borrow().snapshots[0].alert_level, AlertLevel::Critical);
    // And the shared state now carries it too.
    assert_eq!(state.snapshot().alert_level, AlertLevel::Critical);
}

#[test]
fn all_invalid_state_still_reports_every_tick() {
    let (state, record, mut agg) = rig();

    agg.tick(&state);
    agg.tick(&state);

    let r = record.borrow();
    assert_eq!(r.snapshots.len(), 2);
    assert!(r.alerts.is_empty());
    assert!(r.pulses.is_empty());
    assert!(!r.snapshots[0].temperature_valid);
    assert!(!r.snapshots[0].door_valid);
    assert_eq!(r.snapshots[1].sequence_num, 1);
    assert!(r.snapshots.iter().all(|s| s.alert_level == AlertLevel::Info));
}

#[test]
fn absent_sinks_still_run_the_tick() {
    let config = SystemConfig::default();
    let state = SharedState::default();
    let mut agg = RecordingAggregator::new(&config, None, None, None);

    state.publish_climate(35, 50);
    state.publish_gas(true);
    let msg = agg.tick(&state);

    assert_eq!(msg.alert_level, AlertLevel::Critical);
    // Tick bookkeeping ran even with nowhere to deliver.
    assert_eq!(state.snapshot().sequence_num, 1);
}

#[test]
fn failing_snapshot_sink_does_not_block_alert_delivery() {
    let config = SystemConfig::default();
    let record = sink_record();
    let mut agg = Aggregator::new(
        &config,
        Some(RecordingSnapshotSink::failing(&record, SinkError::Unavailable)),
        Some(RecordingAlertSink::new(&record)),
        Some(RecordingIndicatorSink::new(&record)),
    );
    let state = SharedState::default();
    state.publish_gas(true);

    agg.tick(&state);
    agg.tick(&state);

    let r = record.borrow();
    // The failing sink was offered a message every tick regardless.
    assert_eq!(r.snapshots.len(), 2);
    assert_eq!(r.alerts.len(), 2);
    assert_eq!(
        r.alerts[0].description.as_str(),
        "Gas detected - potential hazard!"
    );
    assert_eq!(r.pulses, vec![IndicatorCode::Gas, IndicatorCode::Gas]);
}

#[test]
fn cold_room_alerts_without_an_indicator_pulse() {
    let (state, record, mut agg) = rig();
    state.publish_climate(10, 40);

    agg.tick(&state);

    let r = record.borrow();
    assert_eq!(r.alerts.len(), 1);
    assert_eq!(r.alerts[0].category, AlertCategory::TempLow);
    assert!(r.pulses.is_empty());
}

#[test]
fn motion_repeats_with_its_own_pulse_code() {
    let (state, record, mut agg) = rig();
    state.publish_motion(true);

    agg.tick(&state);
    agg.tick(&state);

    let r = record.borrow();
    let cats: Vec<AlertCategory> = r.alerts.iter().map(|a| a.category).collect();
    assert_eq!(cats, vec![AlertCategory::Motion, AlertCategory::Motion]);
    assert_eq!(r.pulses, vec![IndicatorCode::Motion, IndicatorCode::Motion]);
    assert!(r.snapshots.iter().all(|s| s.alert_level == AlertLevel::Info));
}
