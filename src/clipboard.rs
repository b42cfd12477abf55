//! Clipboard sinks for copying the picked symbol.
//!
//! The picker only needs to put text on the clipboard, so the platform
//! specifics sit behind the one-method [`ClipboardSink`] trait.

use std::io::Write;
use std::process::{Command, Stdio};

use crate::config::{ClipboardBackend, ClipboardConfig};
use crate::error::{MojiError, MojiResult};

/// Something that can put text on the system clipboard.
pub trait ClipboardSink: Send + Sync {
    fn copy(&self, text: &str) -> MojiResult<()>;
}

/// Pipes text into an external command, `xclip -selection clipboard` by default.
///
/// The text goes through stdin, never through a shell, so symbols containing
/// quotes or other shell metacharacters are copied unchanged.
#[derive(Debug, Clone)]
pub struct CommandSink {
    program: String,
    args: Vec<String>,
}

impl CommandSink {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// `xclip -selection clipboard`
    pub fn xclip() -> Self {
        let defaults = ClipboardConfig::default();
        Self::new(defaults.command, defaults.args)
    }
}

impl ClipboardSink for CommandSink {
    fn copy(&self, text: &str) -> MojiResult<()> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .spawn()
            .map_err(|e| MojiError::Clipboard(format!("Failed to start {}: {}", self.program, e)))?;

        if let Some(mut stdin) = child.stdin.take() {
            if let Err(e) = stdin.write_all(text.as_bytes()) {
                drop(stdin);
                // Reap the child so a failed write does not leave a zombie
                let _ = child.kill();
                let _ = child.wait();
                return Err(MojiError::Clipboard(format!(
                    "Failed to write to clipboard: {}",
                    e
                )));
            }
        }

        let status = child
            .wait()
            .map_err(|e| MojiError::Clipboard(format!("Failed to wait for {}: {}", self.program, e)))?;

        if status.success() {
            Ok(())
        } else {
            Err(MojiError::Clipboard(format!("{} exited with {}", self.program, status)))
        }
    }
}

/// Native clipboard access through arboard.
#[cfg(feature = "iced-ui")]
#[derive(Debug, Default, Clone, Copy)]
pub struct ArboardSink;

#[cfg(feature = "iced-ui")]
impl ClipboardSink for ArboardSink {
    fn copy(&self, text: &str) -> MojiResult<()> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| MojiError::Clipboard(e.to_string()))?;
        clipboard
            .set_text(text)
            .map_err(|e| MojiError::Clipboard(e.to_string()))
    }
}

/// Build the sink selected in the config.
pub fn sink_from_config(config: &ClipboardConfig) -> Box<dyn ClipboardSink> {
    match config.backend {
        ClipboardBackend::Command => {
            Box::new(CommandSink::new(config.command.clone(), config.args.clone()))
        }
        #[cfg(feature = "iced-ui")]
        ClipboardBackend::Native => Box::new(ArboardSink),
        #[cfg(not(feature = "iced-ui"))]
        ClipboardBackend::Native => {
            tracing::warn!("Native clipboard not built in, falling back to {}", config.command);
            Box::new(CommandSink::new(config.command.clone(), config.args.clone()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_sink_pipes_stdin() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("clip.txt");
        let sink = CommandSink::new("tee", vec![out.display().to_string()]);

        sink.copy("🐱 'quoted'").unwrap();

        assert_eq!(std::fs::read_to_string(&out).unwrap(), "🐱 'quoted'");
    }

    #[test]
    fn test_missing_program_is_error() {
        let sink = CommandSink::new("moji-no-such-clipboard-tool", Vec::new());
        assert!(matches!(sink.copy("x"), Err(MojiError::Clipboard(_))));
    }

    #[test]
    fn test_failing_program_is_error() {
        let sink = CommandSink::new("false", Vec::new());
        assert!(matches!(sink.copy("x"), Err(MojiError::Clipboard(_))));
    }

    #[test]
    fn test_program_ignoring_stdin_is_error() {
        // `true` exits without reading, so a payload larger than the pipe
        // buffer fails with a broken pipe
        let sink = CommandSink::new("true", Vec::new());
        let payload = "🐱".repeat(256 * 1024);

        assert!(matches!(sink.copy(&payload), Err(MojiError::Clipboard(_))));
    }

    #[test]
    fn test_xclip_defaults() {
        let sink = CommandSink::xclip();
        assert_eq!(sink.program, "xclip");
        assert_eq!(sink.args, vec!["-selection", "clipboard"]);
    }
}
