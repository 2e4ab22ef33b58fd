use std::io::{self, Write};

use pomodoro_clock::timer::Sleeper;
use pomodoro_clock::{Config, Session, Settings, logging, notify, plan};

fn main() -> pomodoro_clock::Result<()> {
    logging::init();

    if let Err(err) = ctrlc::set_handler(|| {
        println!("\n🛑 Interrupted!");
        let _ = io::stdout().flush();
        std::process::exit(130);
    }) {
        tracing::warn!(error = %err, "could not install Ctrl-C handler");
    }

    let intervals = plan(&Config::new())?;
    let settings = Settings::load();
    let notifier = notify::from_settings(&settings.notifications);

    // Unlocked handle: the Ctrl-C handler prints from another thread.
    let mut session = Session::new(notifier, io::stdout(), Sleeper);
    session.run(&intervals)
}
