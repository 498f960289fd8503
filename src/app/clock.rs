//! Wall clock sampling and 12-hour formatting

use std::time::Duration;

use chrono::{Local, Timelike};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use super::action::Action;

/// A wall-clock sample
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClockReading {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl ClockReading {
    pub fn new(hours: u32, minutes: u32, seconds: u32) -> Self {
        Self { hours, minutes, seconds }
    }

    /// Sample local time
    pub fn now() -> Self {
        let now = Local::now();
        Self::new(now.hour(), now.minute(), now.second())
    }

    /// Display form, e.g. `7:05`
    pub fn format(&self) -> String {
        format_time(self.hours, self.minutes)
    }
}

/// Map a 24-hour hour onto the 12-hour dial, with 0 and 12 shown as 12
pub fn format_hours(hours: u32) -> u32 {
    if hours % 12 == 0 { 12 } else { hours % 12 }
}

/// Format hours and minutes as `h:mm`
pub fn format_time(hours: u32, minutes: u32) -> String {
    format!("{}:{:02}", format_hours(hours), minutes)
}

/// Spawn the clock task
///
/// Samples local time every `interval` and sends [`Action::ClockTick`] when
/// the whole second changes. Stops when `token` is cancelled or the
/// receiver is dropped.
pub fn spawn(
    interval: Duration,
    tx: mpsc::UnboundedSender<Action>,
    token: CancellationToken,
) -> JoinHandle<()> {
    spawn_with(ClockReading::now, interval, tx, token)
}

/// Spawn the clock task with a custom time source
pub fn spawn_with<F>(
    mut sample: F,
    interval: Duration,
    tx: mpsc::UnboundedSender<Action>,
    token: CancellationToken,
) -> JoinHandle<()>
where
    F: FnMut() -> ClockReading + Send + 'static,
{
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        let mut last: Option<ClockReading> = None;

        loop {
            tokio::select! {
                _ = token.cancelled() => break,
                _ = ticker.tick() => {
                    let reading = sample();
                    if last.is_some_and(|prev| prev.seconds == reading.seconds) {
                        continue;
                    }
                    last = Some(reading);
                    if tx.send(Action::ClockTick(reading)).is_err() {
                        break;
                    }
                }
            }
        }
        tracing::debug!("clock stopped");
    })
}
