//! Dialogue script parser.
//!
//! A script file holds two paragraphs separated by a `---` line: the
//! escalating lines an NPC cycles through on repeated talks, then the
//! possible closing responses once the player returns with the relic.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DialogueScript {
    pub lines: Vec<String>,
    pub final_responses: Vec<String>,
}

impl DialogueScript {
    /// Line for the given annoyance level, clamped to the last scripted line
    /// once the counter runs past the end.
    pub fn line(&self, annoyance: usize) -> Option<&str> {
        if self.lines.is_empty() {
            return None;
        }
        let idx = annoyance.min(self.lines.len() - 1);
        Some(&self.lines[idx])
    }

    pub fn final_response(&self, index: usize) -> Option<&str> {
        if self.final_responses.is_empty() {
            return None;
        }
        let idx = index.min(self.final_responses.len() - 1);
        Some(&self.final_responses[idx])
    }
}

#[derive(Debug)]
pub enum DialogueFileError {
    /// Underlying I/O failure.
    Io(io::Error),
    /// No `---` separator between the two paragraphs.
    MissingSeparator,
    /// A paragraph contains no lines.
    EmptyParagraph,
}

impl fmt::Display for DialogueFileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "dialogue I/O error: {e}"),
            Self::MissingSeparator => {
                write!(f, "dialogue file has no `---` separator")
            }
            Self::EmptyParagraph => write!(f, "dialogue paragraph is empty"),
        }
    }
}

impl std::error::Error for DialogueFileError {}

impl From<io::Error> for DialogueFileError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

pub fn load_script(path: &Path) -> Result<DialogueScript, DialogueFileError> {
    parse_script(&fs::read_to_string(path)?)
}

pub fn parse_script(text: &str) -> Result<DialogueScript, DialogueFileError> {
    let mut lines = Vec::new();
    let mut final_responses = Vec::new();
    let mut past_separator = false;

    for raw in text.lines() {
        let line = raw.trim_end();
        if line.trim() == "---" {
            if past_separator {
                continue;
            }
            past_separator = true;
            continue;
        }
        if line.trim().is_empty() {
            continue;
        }
        if past_separator {
            final_responses.push(line.to_string());
        } else {
            lines.push(line.to_string());
        }
    }

    if !past_separator {
        return Err(DialogueFileError::MissingSeparator);
    }
    if lines.is_empty() || final_responses.is_empty() {
        return Err(DialogueFileError::EmptyParagraph);
    }
    Ok(DialogueScript { lines, final_responses })
}
