use std::env;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, ExitStatus, Stdio};

use thiserror::Error;

use crate::config::ShareSettings;

use super::content::ShareContent;

#[derive(Debug, Error)]
pub enum ShareError {
    #[error("failed to write note to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to run `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("`{program}` exited with {status}")]
    Failed { program: String, status: ExitStatus },
}

/// Somewhere a note can be sent.
pub trait ShareTarget {
    /// Name shown in the chooser.
    fn label(&self) -> String;
    fn share(&self, content: &ShareContent) -> Result<(), ShareError>;
}

/// Appends notes to a markdown file.
#[derive(Debug, Clone)]
pub struct NoteFileTarget {
    path: PathBuf,
}

impl NoteFileTarget {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    #[cfg(test)]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    fn append(&self, content: &ShareContent) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        write!(file, "## {}\n{}\n\n", content.subject, content.body)
    }
}

impl ShareTarget for NoteFileTarget {
    fn label(&self) -> String {
        format!("Notes file ({})", self.path.display())
    }

    fn share(&self, content: &ShareContent) -> Result<(), ShareError> {
        self.append(content).map_err(|source| ShareError::Write {
            path: self.path.clone(),
            source,
        })?;
        tracing::info!(path = %self.path.display(), subject = %content.subject, "note saved");
        Ok(())
    }
}

/// Runs an external command with the note body on stdin.
///
/// The command also sees `NOTE_ACTION`, `NOTE_TITLE`, `NOTE_CONTENT` and
/// `NOTE_MIME_TYPE` in its environment.
#[derive(Debug, Clone)]
pub struct CommandTarget {
    program: String,
    args: Vec<String>,
}

impl CommandTarget {
    /// Build from an argv list. Returns `None` for an empty list.
    pub fn from_argv(argv: &[String]) -> Option<Self> {
        let (program, args) = argv.split_first()?;
        if program.trim().is_empty() {
            return None;
        }
        Some(Self {
            program: program.clone(),
            args: args.to_vec(),
        })
    }
}

impl ShareTarget for CommandTarget {
    fn label(&self) -> String {
        format!("Command ({})", self.program)
    }

    fn share(&self, content: &ShareContent) -> Result<(), ShareError> {
        let spawn_err = |source| ShareError::Spawn {
            program: self.program.clone(),
            source,
        };

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .env("NOTE_ACTION", &content.action)
            .env("NOTE_TITLE", &content.subject)
            .env("NOTE_CONTENT", &content.body)
            .env("NOTE_MIME_TYPE", &content.mime_type)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(spawn_err)?;

        if let Some(mut stdin) = child.stdin.take() {
            // A receiver that ignores stdin may close it early.
            let _ = stdin.write_all(content.body.as_bytes());
        }

        let status = child.wait().map_err(spawn_err)?;
        if !status.success() {
            return Err(ShareError::Failed {
                program: self.program.clone(),
                status,
            });
        }
        tracing::info!(program = %self.program, subject = %content.subject, "note sent");
        Ok(())
    }
}

/// `$XDG_DATA_HOME/vinyl/notes.md`, or `~/.local/share/vinyl/notes.md`.
fn default_notes_path() -> Option<PathBuf> {
    let data_home = if let Some(xdg) = env::var_os("XDG_DATA_HOME") {
        Some(PathBuf::from(xdg))
    } else {
        env::var_os("HOME").map(|home| PathBuf::from(home).join(".local").join("share"))
    };

    data_home.map(|d| d.join("vinyl").join("notes.md"))
}

/// Targets offered by the chooser, in display order.
pub fn targets_from_settings(settings: &ShareSettings) -> Vec<Box<dyn ShareTarget>> {
    let mut targets: Vec<Box<dyn ShareTarget>> = Vec::new();

    if let Some(path) = settings.notes_path.clone().or_else(default_notes_path) {
        targets.push(Box::new(NoteFileTarget::new(path)));
    }
    if let Some(cmd) = CommandTarget::from_argv(&settings.command) {
        targets.push(Box::new(cmd));
    }

    targets
}
