//! The ordered list of intervals that make up a run.

use std::fmt;
use std::time::Duration;

use crate::config::Config;
use crate::error::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntervalKind {
    Work,
    ShortBreak,
    LongBreak,
}

impl IntervalKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            IntervalKind::Work => "work",
            IntervalKind::ShortBreak => "short break",
            IntervalKind::LongBreak => "long break",
        }
    }
}

impl fmt::Display for IntervalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One step of a run. Built once by [`plan`] and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interval {
    pub kind: IntervalKind,
    /// 1-based cycle this interval belongs to.
    pub cycle: usize,
    pub duration: Duration,
    pub label: String,
}

impl Interval {
    fn new(kind: IntervalKind, cycle: usize, duration: Duration) -> Self {
        let minutes = duration.as_secs() / 60;
        let label = match kind {
            IntervalKind::Work => format!("Cycle {:02}: Work for {:02} minutes", cycle, minutes),
            IntervalKind::ShortBreak | IntervalKind::LongBreak => {
                format!("Take a {:02} minute break", minutes)
            }
        };
        Self {
            kind,
            cycle,
            duration,
            label,
        }
    }
}

/// Expand a config into its work/break sequence.
///
/// Every cycle is a work interval followed by a short break, except the last
/// which is followed by a long break.
pub fn plan(config: &Config) -> Result<Vec<Interval>, ConfigError> {
    if config.cycles == 0 {
        return Err(ConfigError::NoCycles);
    }
    for (kind, duration) in [
        (IntervalKind::Work, config.work_duration),
        (IntervalKind::ShortBreak, config.short_break),
        (IntervalKind::LongBreak, config.long_break),
    ] {
        if duration.is_zero() {
            return Err(ConfigError::ZeroDuration { kind });
        }
    }

    let mut intervals = Vec::with_capacity(config.cycles * 2);
    for cycle in 1..=config.cycles {
        intervals.push(Interval::new(IntervalKind::Work, cycle, config.work_duration));
        if cycle < config.cycles {
            intervals.push(Interval::new(IntervalKind::ShortBreak, cycle, config.short_break));
        } else {
            intervals.push(Interval::new(IntervalKind::LongBreak, cycle, config.long_break));
        }
    }
    Ok(intervals)
}
