//! Drives a run: announce each interval, then count it down.

use std::io::Write;

use tracing::{debug, info, warn};

use crate::error::Result;
use crate::interval::Interval;
use crate::notify::{Notifier, TITLE};
use crate::timer::{Ticker, countdown};

pub struct Session<N, W, T> {
    notifier: N,
    out: W,
    ticker: T,
}

impl<N: Notifier, W: Write, T: Ticker> Session<N, W, T> {
    pub fn new(notifier: N, out: W, ticker: T) -> Self {
        Self {
            notifier,
            out,
            ticker,
        }
    }

    /// Run every interval in order. Blocks until the last one has elapsed.
    ///
    /// Notification failures are logged and skipped; only output errors
    /// stop the run.
    pub fn run(&mut self, intervals: &[Interval]) -> Result<()> {
        info!(intervals = intervals.len(), "starting run");

        for interval in intervals {
            debug!(kind = %interval.kind, cycle = interval.cycle, duration = ?interval.duration, "interval");
            self.announce(interval)?;
            countdown(&mut self.out, &mut self.ticker, interval.duration)?;
        }

        info!("run complete");
        Ok(())
    }

    fn announce(&mut self, interval: &Interval) -> Result<()> {
        if let Err(err) = self.notifier.notify(TITLE, &interval.label) {
            warn!(error = %err, kind = %interval.kind, cycle = interval.cycle, "notification failed");
        }
        writeln!(self.out, "{}", interval.label)?;
        Ok(())
    }

    pub fn into_inner(self) -> (N, W) {
        (self.notifier, self.out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::error::NotifyError;
    use crate::interval::{IntervalKind, plan};
    use std::cell::RefCell;
    use std::io;
    use std::time::Duration;

    struct Instant;

    impl Ticker for Instant {
        fn wait(&mut self, _period: Duration) {}
    }

    #[derive(Default)]
    struct Recording {
        messages: RefCell<Vec<String>>,
        fail: bool,
    }

    impl Notifier for Recording {
        fn notify(&self, title: &str, message: &str) -> std::result::Result<(), NotifyError> {
            assert_eq!(title, TITLE);
            self.messages.borrow_mut().push(message.to_string());
            if self.fail {
                Err(NotifyError::CurrentDir(io::Error::new(
                    io::ErrorKind::NotFound,
                    "stubbed",
                )))
            } else {
                Ok(())
            }
        }
    }

    fn config(cycles: usize) -> Config {
        Config {
            work_duration: Duration::from_secs(3),
            short_break: Duration::from_secs(1),
            long_break: Duration::from_secs(2),
            cycles,
        }
    }

    #[test]
    fn notifies_once_per_interval_in_order() {
        let intervals = plan(&config(2)).unwrap();
        let mut session = Session::new(Recording::default(), Vec::new(), Instant);

        session.run(&intervals).unwrap();

        let (notifier, _) = session.into_inner();
        assert_eq!(
            notifier.messages.into_inner(),
            vec![
                "Cycle 01: Work for 00 minutes",
                "Take a 00 minute break",
                "Cycle 02: Work for 00 minutes",
                "Take a 00 minute break",
            ]
        );
    }

    #[test]
    fn failed_notifications_do_not_stop_the_run() {
        let intervals = plan(&config(3)).unwrap();
        let notifier = Recording {
            fail: true,
            ..Recording::default()
        };
        let mut session = Session::new(notifier, Vec::new(), Instant);

        session.run(&intervals).unwrap();

        let (notifier, out) = session.into_inner();
        let output = String::from_utf8(out).unwrap();
        assert_eq!(notifier.messages.borrow().len(), 6);
        assert_eq!(output.matches("Time's up!").count(), 6);
        assert!(output.contains("Cycle 03: Work"));
    }

    #[test]
    fn announcement_precedes_its_countdown() {
        let intervals = plan(&config(1)).unwrap();
        assert_eq!(intervals[1].kind, IntervalKind::LongBreak);
        let mut session = Session::new(Recording::default(), Vec::new(), Instant);

        session.run(&intervals).unwrap();

        let (_, out) = session.into_inner();
        let output = String::from_utf8(out).unwrap();
        assert!(output.starts_with("Cycle 01: Work for 00 minutes\n\rTime left: 00:03"));
        let brk = output.find("Take a 00 minute break").unwrap();
        let first_up = output.find("Time's up!").unwrap();
        assert!(first_up < brk);
        assert!(output[brk..].contains("\rTime left: 00:02"));
    }
}
