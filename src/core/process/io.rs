// git-pick: fuzzy pickers for everyday git operations
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! I/O streaming and output capture for processes.
//!
//! ```text
//! run_child()
//!   stdout/stderr reader tasks (read to end)
//!   stdin writer (optional, closed after write)
//!   wait
//!   join readers --> ProcessOutput { stdout, stderr, exit_code }
//! ```
//!
//! Readers own their whole stream and hand the text back through their
//! `JoinHandle`.

use crate::error::Result;
use anyhow::Context;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWriteExt};
use tokio::process::Child;
use tokio::task::JoinHandle;
use tracing::{trace, warn};

use super::builder::{ProcessBuilder, ProcessOutput, StdinSource, StreamFlags};

/// Spawns a reader task for one output stream if it is piped.
fn spawn_reader<R>(
    stream: Option<R>,
    flags: StreamFlags,
    process_name: &str,
    stream_name: &'static str,
) -> Option<JoinHandle<String>>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    if !flags.intersects(StreamFlags::FORWARD_TO_LOG | StreamFlags::KEEP_IN_STRING) {
        return None;
    }
    let name = process_name.to_string();
    stream.map(|stream| {
        tokio::spawn(async move { read_stream(stream, flags, &name, stream_name).await })
    })
}

/// Waits for a reader task and returns its text.
async fn join_reader(handle: Option<JoinHandle<String>>) -> String {
    match handle {
        Some(handle) => handle.await.unwrap_or_default(),
        None => String::new(),
    }
}

impl ProcessBuilder {
    /// Runs the child process, handling I/O streaming and waiting for completion.
    pub(super) async fn run_child(&self, name: &str, child: &mut Child) -> Result<ProcessOutput> {
        let stdout_handle = spawn_reader(child.stdout.take(), self.stdout_config(), name, "stdout");
        let stderr_handle = spawn_reader(child.stderr.take(), self.stderr_config(), name, "stderr");

        self.write_stdin(name, child).await?;

        let exit_status = child
            .wait()
            .await
            .with_context(|| format!("failed waiting for process {name} to exit"))?;

        let stdout = join_reader(stdout_handle).await;
        let stderr = join_reader(stderr_handle).await;

        Ok(ProcessOutput::new(
            exit_status.code().unwrap_or(-1),
            stdout,
            stderr,
        ))
    }

    /// Writes stdin content to the child process if configured.
    ///
    /// A child that exits before reading everything (fzf on a quick accept)
    /// closes the pipe; that is not an error.
    async fn write_stdin(&self, name: &str, child: &mut Child) -> Result<()> {
        if let StdinSource::Bytes(content) = self.stdin_source()
            && let Some(mut stdin) = child.stdin.take()
        {
            match stdin.write_all(content).await {
                Ok(()) => {}
                Err(e) if e.kind() == std::io::ErrorKind::BrokenPipe => {
                    trace!(process = %name, "stdin closed early");
                }
                Err(e) => {
                    return Err(e)
                        .with_context(|| format!("failed to write to stdin for process {name}"));
                }
            }
            drop(stdin);
        }
        Ok(())
    }
}

/// Reads a stream to the end, forwarding lines to the log and keeping the text if asked.
async fn read_stream<R>(
    mut reader: R,
    flags: StreamFlags,
    process_name: &str,
    stream_name: &str,
) -> String
where
    R: AsyncRead + Unpin,
{
    let mut bytes = Vec::new();
    if let Err(e) = reader.read_to_end(&mut bytes).await {
        warn!(
            process = %process_name,
            stream = %stream_name,
            error = %e,
            "error reading stream"
        );
    }
    let text = String::from_utf8_lossy(&bytes).into_owned();

    if flags.contains(StreamFlags::FORWARD_TO_LOG) {
        for line in text.lines() {
            trace!(process = %process_name, stream = %stream_name, line = %line, "output");
        }
    }

    if flags.contains(StreamFlags::KEEP_IN_STRING) {
        text
    } else {
        String::new()
    }
}
