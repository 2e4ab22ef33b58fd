/// Timer module for counting down a single interval
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

const TICK: Duration = Duration::from_secs(1);

/// Waits out one tick of the countdown.
pub trait Ticker {
    fn wait(&mut self, period: Duration);
}

/// Blocks the calling thread on the wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct Sleeper;

impl Ticker for Sleeper {
    fn wait(&mut self, period: Duration) {
        thread::sleep(period);
    }
}

/// Count `duration` down to zero, one second per update, rewriting a single
/// `Time left: MM:SS` line, then print `Time's up!` on its own line.
pub fn countdown<W: Write, T: Ticker>(
    out: &mut W,
    ticker: &mut T,
    duration: Duration,
) -> io::Result<()> {
    let mut remaining = duration;

    while !remaining.is_zero() {
        write!(out, "\rTime left: {}", format_remaining(remaining))?;
        out.flush()?;

        ticker.wait(TICK);
        remaining = remaining.saturating_sub(TICK);
    }

    writeln!(out, "\nTime's up!")?;
    out.flush()
}

/// Whole minutes and seconds, zero padded. Sub-second remainders are dropped.
pub fn format_remaining(remaining: Duration) -> String {
    let total = remaining.as_secs();
    format!("{:02}:{:02}", total / 60, total % 60)
}

pub fn duration_from_minutes(minutes: u64) -> Duration {
    Duration::from_secs(minutes * 60)
}
