//! Desktop notifications raised at the start of each interval.

use std::env;
use std::path::{Path, PathBuf};

use notify_rust::Notification;

use crate::config::NotificationSettings;
use crate::error::NotifyError;

pub const TITLE: &str = "Pomodoro Clock";

pub trait Notifier {
    fn notify(&self, title: &str, message: &str) -> Result<(), NotifyError>;
}

/// Pushes notifications through the platform notification service.
#[derive(Debug, Clone)]
pub struct DesktopNotifier {
    app_id: String,
    icon: PathBuf,
}

impl DesktopNotifier {
    pub fn new(settings: &NotificationSettings) -> Self {
        Self {
            app_id: settings.app_id.clone(),
            icon: settings.icon.clone(),
        }
    }

    /// Absolute icon path. Relative paths are resolved against the working
    /// directory each time, so a `chdir` between intervals is honoured.
    pub fn icon_path(&self) -> Result<PathBuf, NotifyError> {
        resolve_icon(&self.icon, env::current_dir)
    }
}

impl Notifier for DesktopNotifier {
    fn notify(&self, title: &str, message: &str) -> Result<(), NotifyError> {
        let icon = self.icon_path()?;

        let mut notification = Notification::new();
        notification.appname(&self.app_id).summary(title).body(message);
        if let Some(icon) = icon.to_str() {
            notification.icon(icon);
        }

        notification.show()?;
        Ok(())
    }
}

/// Used when notifications are turned off in the settings file.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentNotifier;

impl Notifier for SilentNotifier {
    fn notify(&self, _title: &str, _message: &str) -> Result<(), NotifyError> {
        Ok(())
    }
}

impl<N: Notifier + ?Sized> Notifier for Box<N> {
    fn notify(&self, title: &str, message: &str) -> Result<(), NotifyError> {
        (**self).notify(title, message)
    }
}

/// Pick the notifier the settings ask for.
pub fn from_settings(settings: &NotificationSettings) -> Box<dyn Notifier> {
    if settings.enabled {
        Box::new(DesktopNotifier::new(settings))
    } else {
        Box::new(SilentNotifier)
    }
}

fn resolve_icon<F>(icon: &Path, current_dir: F) -> Result<PathBuf, NotifyError>
where
    F: FnOnce() -> std::io::Result<PathBuf>,
{
    if icon.is_absolute() {
        return Ok(icon.to_path_buf());
    }
    let base = current_dir().map_err(NotifyError::CurrentDir)?;
    Ok(base.join(icon))
}
