//! Platform link openers.

use std::process::{Command, Stdio};

use super::error::LinkError;

/// Something that can hand a URL to the user's browser.
pub trait LinkOpener: Send + Sync {
    /// Human-readable name for error messages.
    fn name(&self) -> &'static str;

    /// Check if this opener can be used on the current system.
    fn is_available(&self) -> bool;

    /// Open the URL. Must not block on the browser.
    fn open(&self, url: &str) -> Result<(), LinkError>;
}

/// Opener that spawns a platform command (`xdg-open`, `open`, `cmd /C start`).
///
/// The child gets null stdio and is reaped on a background thread, so the
/// browser never shares the terminal or any handle with the player.
#[derive(Debug, Clone, Copy)]
pub struct CommandOpener {
    program: &'static str,
    leading_args: &'static [&'static str],
}

impl CommandOpener {
    /// Linux/BSD desktop opener.
    pub const fn xdg_open() -> Self {
        Self {
            program: "xdg-open",
            leading_args: &[],
        }
    }

    /// macOS opener.
    pub const fn open() -> Self {
        Self {
            program: "open",
            leading_args: &[],
        }
    }

    /// Windows opener. The empty string is the window title `start` expects.
    pub const fn start() -> Self {
        Self {
            program: "cmd",
            leading_args: &["/C", "start", ""],
        }
    }

    /// Build the command that would open `url`.
    pub fn command(&self, url: &str) -> Command {
        let mut command = Command::new(self.program);
        command
            .args(self.leading_args)
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        command
    }

    fn tool_exists(&self) -> bool {
        Command::new("which")
            .arg(self.program)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }
}

impl LinkOpener for CommandOpener {
    fn name(&self) -> &'static str {
        self.program
    }

    fn is_available(&self) -> bool {
        if cfg!(windows) {
            return self.program == "cmd";
        }
        self.tool_exists()
    }

    fn open(&self, url: &str) -> Result<(), LinkError> {
        let mut child = self
            .command(url)
            .spawn()
            .map_err(|e| LinkError::OpenerFailed {
                opener: self.program,
                message: e.to_string(),
            })?;

        std::thread::spawn(move || {
            let _ = child.wait();
        });
        Ok(())
    }
}

/// Get the platform-appropriate openers in priority order.
pub fn platform_openers() -> Vec<Box<dyn LinkOpener>> {
    #[cfg(target_os = "macos")]
    {
        vec![Box::new(CommandOpener::open())]
    }

    #[cfg(windows)]
    {
        vec![Box::new(CommandOpener::start())]
    }

    #[cfg(not(any(target_os = "macos", windows)))]
    {
        vec![Box::new(CommandOpener::xdg_open())]
    }
}
