use anyhow::{anyhow, Context, Result};
use std::process::Command;
use std::thread::JoinHandle;

use super::Platform;
use crate::dispatch::CommandRequest;

/// Something that can start a [`CommandRequest`].
pub trait Launcher {
    /// Start `request` on a worker thread and return without waiting for it.
    fn launch(&self, request: CommandRequest) -> LaunchHandle;
}

/// The worker thread behind one launch.
///
/// Joining it reports whether the process could be spawned. The spawned
/// terminal itself is never waited on.
#[derive(Debug)]
pub struct LaunchHandle(JoinHandle<Result<()>>);

impl LaunchHandle {
    /// Run `task` on a new thread.
    pub fn spawn<F>(task: F) -> Self
    where
        F: FnOnce() -> Result<()> + Send + 'static,
    {
        Self(std::thread::spawn(task))
    }

    /// Block until the spawn attempt finished.
    ///
    /// # Errors
    /// Returns the spawn error, or an error when the worker panicked.
    pub fn wait(self) -> Result<()> {
        self.0
            .join()
            .map_err(|_| anyhow!("Launcher thread panicked"))?
    }
}

/// Opens a new terminal window per command, detached from this process.
#[derive(Debug, Clone)]
pub struct TerminalLauncher {
    platform: Platform,
}

impl TerminalLauncher {
    /// Launcher that wraps commands the way `platform` expects.
    #[must_use]
    pub const fn new(platform: Platform) -> Self {
        Self { platform }
    }
}

impl Default for TerminalLauncher {
    fn default() -> Self {
        Self::new(Platform::current())
    }
}

impl Launcher for TerminalLauncher {
    fn launch(&self, request: CommandRequest) -> LaunchHandle {
        let platform = self.platform.clone();
        LaunchHandle::spawn(move || spawn_detached(&platform, &request))
    }
}

fn spawn_detached(platform: &Platform, request: &CommandRequest) -> Result<()> {
    let argv = platform.wrap(request.tokens());
    tracing::info!(command = ?argv, "Launching");

    let (program, args) = argv.split_first().context("Empty command")?;
    let mut cmd = Command::new(program);
    cmd.args(args);
    if let Some(dir) = request.working_dir() {
        cmd.current_dir(dir);
    }
    detach(&mut cmd);
    cmd.spawn()
        .with_context(|| format!("Failed to spawn {program}"))?;
    Ok(())
}

#[cfg(windows)]
fn detach(cmd: &mut Command) {
    use std::os::windows::process::CommandExt;
    const CREATE_NEW_CONSOLE: u32 = 0x0000_0010;
    cmd.creation_flags(CREATE_NEW_CONSOLE);
}

#[cfg(not(windows))]
fn detach(cmd: &mut Command) {
    use std::process::Stdio;
    cmd.stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());
}
