//! Recorded input scripts (JSON lines)
//!
//! Each non-empty line is one step:
//! `{"at_ms": 120, "input": {"type": "mouse_move", "x": 300.0, "y": 310.0}}`
//! or `{"at_ms": 900, "action": "open 2"}` for section commands.

use anyhow::{anyhow, bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::commands::Command;
use crate::input::RawInput;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptStep {
    /// Offset from the start of the replay
    #[serde(default)]
    pub at_ms: u64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<RawInput>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
}

impl ScriptStep {
    pub fn at(&self) -> Duration {
        Duration::from_millis(self.at_ms)
    }

    pub fn command(&self) -> Result<Command> {
        match (&self.input, &self.action) {
            (Some(input), None) => Ok(Command::Input(input.clone())),
            (None, Some(action)) => Command::parse(action)
                .ok_or_else(|| anyhow!("unknown action '{}'", action)),
            (Some(_), Some(_)) => bail!("step has both input and action"),
            (None, None) => bail!("step has neither input nor action"),
        }
    }
}

/// A parsed script, steps sorted by time
#[derive(Debug, Clone, Default)]
pub struct Script {
    pub steps: Vec<(Duration, Command)>,
}

impl Script {
    pub fn parse(contents: &str) -> Result<Self> {
        let mut steps = Vec::new();
        for (idx, line) in contents.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let step: ScriptStep = serde_json::from_str(line)
                .with_context(|| format!("Invalid script step on line {}", idx + 1))?;
            let command = step
                .command()
                .with_context(|| format!("Invalid script step on line {}", idx + 1))?;
            steps.push((step.at(), command));
        }
        // Stable: equal timestamps keep file order
        steps.sort_by_key(|(at, _)| *at);
        Ok(Self { steps })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script {}", path.display()))?;
        Self::parse(&contents)
    }
}
