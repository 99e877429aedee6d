//! System clipboard adapter
//!
//! Pipes text into the platform's clipboard command:
//! - macOS: pbcopy
//! - Linux: wl-copy, then xclip, then xsel
//! - Windows: clip.exe

use std::process::Stdio;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::domain::ports::Clipboard;
use crate::error::ClipboardError;

/// A clipboard command and its arguments
type Candidate = (&'static str, &'static [&'static str]);

#[cfg(target_os = "macos")]
const CANDIDATES: &[Candidate] = &[("pbcopy", &[])];

#[cfg(target_os = "linux")]
const CANDIDATES: &[Candidate] = &[
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
];

#[cfg(target_os = "windows")]
const CANDIDATES: &[Candidate] = &[("clip", &[])];

#[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
const CANDIDATES: &[Candidate] = &[];

#[derive(Debug, Clone)]
pub struct SystemClipboard {
    candidates: &'static [Candidate],
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self {
            candidates: CANDIDATES,
        }
    }
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    fn with_candidates(candidates: &'static [Candidate]) -> Self {
        Self { candidates }
    }
}

#[async_trait]
impl Clipboard for SystemClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        if self.candidates.is_empty() {
            return Err(ClipboardError::Unsupported);
        }

        let mut spawn_errors = Vec::new();
        for &(program, args) in self.candidates {
            let child = Command::new(program)
                .args(args)
                .stdin(Stdio::piped())
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .spawn();

            let mut child = match child {
                Ok(child) => child,
                Err(e) => {
                    tracing::debug!(program, error = %e, "Clipboard command unavailable");
                    spawn_errors.push(format!("{}: {}", program, e));
                    continue;
                }
            };

            if let Some(mut stdin) = child.stdin.take() {
                stdin
                    .write_all(text.as_bytes())
                    .await
                    .map_err(|e| ClipboardError::Write(format!("{}: {}", program, e)))?;
            }

            let status = child
                .wait()
                .await
                .map_err(|e| ClipboardError::Write(format!("{}: {}", program, e)))?;

            return if status.success() {
                Ok(())
            } else {
                Err(ClipboardError::Write(format!("{} exited with {}", program, status)))
            };
        }

        Err(ClipboardError::Spawn(spawn_errors.join("; ")))
    }
}
