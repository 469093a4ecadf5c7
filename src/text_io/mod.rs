use crate::api::{FirefliesError, TranscriptTextResponse};
use anyhow::{anyhow, Context, Result};
use arboard::Clipboard;
use std::io::Write;
use std::process::{Child, Command, Stdio};
use tracing::{debug, info, warn};
use which::which;

/// Destination for transcript text.
pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// The OS clipboard.
///
/// On Linux the command-line tools are tried first: they hand the selection to
/// a helper that outlives this process. `arboard` is used everywhere else and
/// as the fallback.
#[derive(Default)]
pub struct SystemClipboard {
    native: Option<Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn copy_with_native(&mut self, text: &str) -> Result<()> {
        if self.native.is_none() {
            self.native = Some(Clipboard::new().context("Failed to access clipboard")?);
        }
        let clipboard = self
            .native
            .as_mut()
            .ok_or_else(|| anyhow!("Clipboard backend unavailable"))?;
        clipboard
            .set_text(text)
            .context("Failed to copy text to clipboard")
    }
}

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        info!("Copying {} chars to clipboard", text.len());

        if cfg!(target_os = "linux") {
            match copy_with_system_backends(text) {
                Ok(()) => return Ok(()),
                Err(err) => debug!("{}; trying native clipboard", err),
            }
        }

        self.copy_with_native(text)
    }
}

/// In-memory clipboard, for callers that want the text without touching the OS.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Option<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl ClipboardSink for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}

/// Join sentence texts in API order, one per line.
///
/// Returns `Ok(None)` when there are no sentences.
pub fn join_sentences(response: &TranscriptTextResponse) -> Result<Option<String>, FirefliesError> {
    let sentences = match response.transcript().and_then(|t| t.sentences.as_ref()) {
        Some(sentences) if !sentences.is_empty() => sentences,
        _ => return Ok(None),
    };

    let texts = sentences
        .iter()
        .map(|sentence| {
            sentence
                .text
                .as_deref()
                .ok_or(FirefliesError::MissingField("text"))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Some(texts.join("\n")))
}

/// Copy the transcript text to `sink`. `false` means there was nothing to copy.
pub fn copy_transcript(
    response: &TranscriptTextResponse,
    sink: &mut dyn ClipboardSink,
) -> Result<bool, FirefliesError> {
    let Some(text) = join_sentences(response)? else {
        return Ok(false);
    };

    sink.set_text(&text)?;
    Ok(true)
}

fn copy_with_system_backends(text: &str) -> Result<()> {
    for backend in CLIPBOARD_BACKENDS {
        if which(backend.copy_cmd).is_err() {
            continue;
        }

        let mut child = match Command::new(backend.copy_cmd)
            .args(backend.copy_args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
        {
            Ok(child) => child,
            Err(err) => {
                warn!("Failed to spawn {}: {}", backend.name, err);
                continue;
            }
        };

        if feed_child(&mut child, text) {
            debug!("Text copied to clipboard with {}", backend.name);
            return Ok(());
        }
    }

    Err(anyhow!("No clipboard tool (wl-copy/xclip/xsel) succeeded"))
}

/// Write `text` to the child's stdin and wait for it to exit successfully.
///
/// The child is always reaped; on a failed write it is killed first.
fn feed_child(child: &mut Child, text: &str) -> bool {
    let written = match child.stdin.take() {
        Some(mut stdin) => stdin.write_all(text.as_bytes()).is_ok(),
        None => true,
    };

    if !written {
        let _ = child.kill();
        let _ = child.wait();
        return false;
    }

    matches!(child.wait(), Ok(status) if status.success())
}

struct ClipboardBackend {
    name: &'static str,
    copy_cmd: &'static str,
    copy_args: &'static [&'static str],
}

const CLIPBOARD_BACKENDS: &[ClipboardBackend] = &[
    ClipboardBackend {
        name: "wl-copy",
        copy_cmd: "wl-copy",
        copy_args: &[],
    },
    ClipboardBackend {
        name: "xclip",
        copy_cmd: "xclip",
        copy_args: &["-selection", "clipboard"],
    },
    ClipboardBackend {
        name: "xsel",
        copy_cmd: "xsel",
        copy_args: &["--clipboard", "--input"],
    },
];
