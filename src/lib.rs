//! A terminal Pomodoro clock: fixed work/break intervals with a live
//! countdown and a desktop notification as each interval starts.

pub mod config;
pub mod error;
pub mod interval;
pub mod logging;
pub mod notify;
pub mod session;
pub mod timer;

pub use config::{Config, Settings};
pub use error::{Error, Result};
pub use interval::{Interval, IntervalKind, plan};
pub use notify::Notifier;
pub use session::Session;
