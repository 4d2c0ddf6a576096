//! Grounding countdown and breathing micro-timer.
//!
//! Both timers render progress to any writer and wait through a [`Ticker`],
//! so tests can drive them without sleeping. The wall clock sits behind
//! [`Clock`] for the same reason: an entry is stamped when the countdown
//! ends, not when the program started.

use crate::constants::BREATH_PHASES;
use chrono::{Local, NaiveDateTime};
use std::io::{self, Write};
use std::thread;
use std::time::Duration;
use tracing::debug;

const ONE_SECOND: Duration = Duration::from_secs(1);

/// Something that can block the current thread for a while.
pub trait Ticker {
    /// Waits for `duration` before returning.
    fn sleep(&mut self, duration: Duration);
}

/// Source of the current local date and time.
pub trait Clock {
    /// Local wall-clock time, without a timezone.
    fn now(&self) -> NaiveDateTime;
}

/// The real clock: local time from the OS, sleeps via `std::thread::sleep`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Ticker for SystemClock {
    fn sleep(&mut self, duration: Duration) {
        thread::sleep(duration);
    }
}

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Counts down `seconds`, redrawing the remaining time in place.
///
/// # Examples
///
/// ```
/// use gentleday::timer::{countdown, Ticker};
/// use std::time::Duration;
///
/// struct Instant;
/// impl Ticker for Instant {
///     fn sleep(&mut self, _: Duration) {}
/// }
///
/// let mut out = Vec::new();
/// countdown(2, &mut Instant, &mut out).unwrap();
/// let text = String::from_utf8(out).unwrap();
/// assert!(text.contains("2s remaining"));
/// assert!(text.contains("Done."));
/// ```
pub fn countdown<T, W>(seconds: u64, ticker: &mut T, out: &mut W) -> io::Result<()>
where
    T: Ticker + ?Sized,
    W: Write + ?Sized,
{
    debug!(seconds, "starting countdown");
    for left in (1..=seconds).rev() {
        write!(out, "\r⏳ {}s remaining...", left)?;
        out.flush()?;
        ticker.sleep(ONE_SECOND);
    }
    write!(out, "\r⏳ 0s remaining...")?;
    writeln!(out, "\rDone.{:46}", "")?;
    out.flush()
}

/// Runs `breaths` rounds of inhale, hold and exhale.
pub fn micro_breaths<T, W>(breaths: u32, ticker: &mut T, out: &mut W) -> io::Result<()>
where
    T: Ticker + ?Sized,
    W: Write + ?Sized,
{
    writeln!(out, "\n🌬  Micro-timer: {} breaths", breaths)?;
    for _ in 0..breaths {
        for &(label, seconds) in BREATH_PHASES {
            breath_phase(label, seconds, ticker, out)?;
        }
    }
    writeln!(out, "✓ Micro-timer complete.")?;
    out.flush()
}

fn breath_phase<T, W>(label: &str, seconds: u64, ticker: &mut T, out: &mut W) -> io::Result<()>
where
    T: Ticker + ?Sized,
    W: Write + ?Sized,
{
    for left in (1..=seconds).rev() {
        write!(out, "\r{} {}… ", label, left)?;
        out.flush()?;
        ticker.sleep(ONE_SECOND);
    }
    writeln!(out, "\r{} done.     ", label)
}
