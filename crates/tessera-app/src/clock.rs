//! Status-bar clock.
//!
//! All [`Clock`]s share one process-wide timer thread. The first `Clock`
//! starts it, dropping the last one stops it. The thread wakes up just
//! after every minute boundary and publishes the time through a single
//! atomic, so readers never block on it.
//!
//! The time shown is UTC, not local time. On a machine whose time zone is
//! not UTC the status bar is shifted by the zone offset.

use std::sync::atomic::{AtomicU16, Ordering};
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::sync::{Arc, Mutex, PoisonError, Weak};
use std::thread::JoinHandle;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

static GLOBAL_TIMER: Mutex<Weak<ClockTimer>> = Mutex::new(Weak::new());

/// Hours and minutes packed as `hours << 8 | minutes`.
fn pack(hours: u8, minutes: u8) -> u16 {
    (hours as u16) << 8 | minutes as u16
}

fn unpack(value: u16) -> (u8, u8) {
    ((value >> 8) as u8, value as u8)
}

/// Current UTC wall-clock time as (hours, minutes, seconds).
///
/// No time zone handling.
fn wall_clock() -> (u8, u8, u8) {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let time_of_day = secs % 86400;
    (
        (time_of_day / 3600) as u8,
        ((time_of_day % 3600) / 60) as u8,
        (time_of_day % 60) as u8,
    )
}

/// Store the current time and return how long to sleep until just past
/// the next minute boundary (never less than a second).
fn refresh(snapshot: &AtomicU16) -> Duration {
    let (hours, minutes, seconds) = wall_clock();
    snapshot.store(pack(hours, minutes), Ordering::Release);
    log::trace!("Time updated: {hours:02}:{minutes:02}:{seconds:02}");
    Duration::from_secs(60u64.saturating_sub(seconds as u64).max(1))
}

/// The shared timer behind every [`Clock`].
#[derive(Debug)]
pub struct ClockTimer {
    snapshot: Arc<AtomicU16>,
    stop: Option<Sender<()>>,
    thread: Option<JoinHandle<()>>,
}

impl ClockTimer {
    fn start() -> Self {
        let snapshot = Arc::new(AtomicU16::new(0));
        let mut wait = refresh(&snapshot);

        let (stop, stopped) = mpsc::channel::<()>();
        let shared = Arc::clone(&snapshot);
        let thread = std::thread::Builder::new()
            .name("tessera-clock".into())
            .spawn(move || {
                loop {
                    match stopped.recv_timeout(wait) {
                        Err(RecvTimeoutError::Timeout) => wait = refresh(&shared),
                        Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                    }
                }
            });
        let thread = match thread {
            Ok(handle) => Some(handle),
            Err(e) => {
                // The time shown stays frozen at the start value.
                log::error!("Could not start clock timer: {e}");
                None
            },
        };

        Self {
            snapshot,
            stop: Some(stop),
            thread,
        }
    }

    fn time(&self) -> (u8, u8) {
        unpack(self.snapshot.load(Ordering::Acquire))
    }
}

impl Drop for ClockTimer {
    fn drop(&mut self) {
        drop(self.stop.take());
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

/// The shared timer, starting it if no `Clock` currently holds it.
fn global_timer() -> Arc<ClockTimer> {
    let mut slot = GLOBAL_TIMER.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(timer) = slot.upgrade() {
        return timer;
    }
    let timer = Arc::new(ClockTimer::start());
    *slot = Arc::downgrade(&timer);
    timer
}

/// Format a time as `HH:MM` or, in 12-hour mode, `HH:MMam`/`HH:MMpm`.
pub fn format_time(hours: u8, minutes: u8, is24: bool) -> String {
    let hours = hours % 24;
    if is24 {
        return format!("{hours:02}:{minutes:02}");
    }
    let pm = hours >= 12;
    let hours = if pm { hours - 12 } else { hours };
    let suffix = if pm { "pm" } else { "am" };
    format!("{hours:02}:{minutes:02}{suffix}")
}

/// Handle to the shared clock.
#[derive(Debug, Clone)]
pub struct Clock {
    timer: Arc<ClockTimer>,
}

impl Clock {
    pub fn new() -> Self {
        Self {
            timer: global_timer(),
        }
    }

    /// Current (hours, minutes), UTC.
    pub fn current_time(&self) -> (u8, u8) {
        self.timer.time()
    }

    pub fn time_string(&self, is24: bool) -> String {
        let (hours, minutes) = self.current_time();
        format_time(hours, minutes, is24)
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}
