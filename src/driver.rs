//! Drives a reveal section from commands: stdin sessions and script replay

use anyhow::{Context, Result};
use glam::Vec2;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::time::{sleep_until, Instant};
use tracing::{debug, warn};

use crate::commands::Command;
use crate::config::Config;
use crate::gallery::{Carousel, Gallery};
use crate::reveal::RevealController;
use crate::script::Script;

/// Outcome of one command
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Ok,
    Status(String),
    Error(String),
    Quit,
}

impl Reply {
    fn error(msg: impl Into<String>) -> Self {
        Reply::Error(msg.into())
    }

    /// Line written back to the client
    pub fn line(&self) -> String {
        match self {
            Reply::Ok | Reply::Quit => "ok\n".to_string(),
            Reply::Status(json) => format!("{}\n", json),
            Reply::Error(msg) => format!("error: {}\n", msg),
        }
    }
}

#[derive(Debug)]
pub struct Driver {
    section: RevealController,
}

impl Driver {
    pub fn new(config: Config) -> Self {
        Self {
            section: RevealController::new(config),
        }
    }

    pub fn section(&self) -> &RevealController {
        &self.section
    }

    /// Current view as a JSON line body
    pub fn status(&self) -> Result<String> {
        serde_json::to_string(&self.section.view()).context("Failed to encode view")
    }

    /// Apply one command. Must run inside a tokio runtime.
    pub fn apply(&mut self, command: Command) -> Reply {
        // An exit animation may have finished since the last command
        self.section.sync();
        match command {
            Command::Input(raw) => {
                match raw.normalize() {
                    Some(event) => {
                        self.section.handle(event);
                    }
                    None => debug!(?raw, "Dropped touch event without touch points"),
                }
                Reply::Ok
            }
            Command::Resize { width, height } => match self.section.game_mut() {
                Some(game) => match game.resize(Vec2::new(width, height)) {
                    Ok(()) => Reply::Ok,
                    Err(e) => Reply::error(e.to_string()),
                },
                None => Reply::error("game is not mounted"),
            },
            Command::Status => match self.status() {
                Ok(json) => Reply::Status(json),
                Err(e) => Reply::error(e.to_string()),
            },
            Command::Back => {
                if self.section.go_back() {
                    Reply::Ok
                } else {
                    Reply::error("game is already showing")
                }
            }
            Command::Open(index) => match self.section.gallery_mut() {
                Some(gallery) => {
                    if gallery.open(index) {
                        Reply::Ok
                    } else {
                        Reply::error(format!("no photo {}", index))
                    }
                }
                None => Reply::error("gallery is hidden"),
            },
            Command::Next => self.step_lightbox(Gallery::next),
            Command::Prev => self.step_lightbox(Gallery::prev),
            Command::Close => match self.section.gallery_mut() {
                Some(gallery) => {
                    gallery.close();
                    Reply::Ok
                }
                None => Reply::error("gallery is hidden"),
            },
            Command::ScrollLeft => self.scroll(Carousel::scroll_left),
            Command::ScrollRight => self.scroll(Carousel::scroll_right),
            Command::Quit => Reply::Quit,
        }
    }

    fn step_lightbox(&mut self, step: fn(&mut Gallery) -> Option<usize>) -> Reply {
        match self.section.gallery_mut() {
            Some(gallery) => match step(gallery) {
                Some(_) => Reply::Ok,
                None => Reply::error("lightbox is closed"),
            },
            None => Reply::error("gallery is hidden"),
        }
    }

    fn scroll(&mut self, scroll: fn(&mut Carousel) -> f32) -> Reply {
        match self.section.gallery_mut() {
            Some(gallery) => {
                let offset = scroll(gallery.carousel_mut());
                debug!(offset, "Carousel scrolled");
                Reply::Ok
            }
            None => Reply::error("gallery is hidden"),
        }
    }

    /// Read commands line by line and answer each one until EOF or `quit`
    pub async fn run_interactive<R, W>(&mut self, reader: R, mut writer: W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = reader.lines();
        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }
            let reply = match Command::parse(&line) {
                Some(cmd) => self.apply(cmd),
                None => Reply::error("unknown command"),
            };
            writer.write_all(reply.line().as_bytes()).await?;
            writer.flush().await?;
            if reply == Reply::Quit {
                break;
            }
        }
        Ok(())
    }

    /// Replay a script, writing the view after every step. With `realtime`
    /// each step waits for its timestamp on the tokio clock.
    pub async fn run_script<W>(&mut self, script: Script, realtime: bool, mut writer: W) -> Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        let started = Instant::now();
        for (at, command) in script.steps {
            if realtime {
                sleep_until(started + at).await;
            }
            match self.apply(command) {
                Reply::Quit => break,
                Reply::Error(msg) => warn!(at_ms = at.as_millis() as u64, "Script step rejected: {}", msg),
                _ => {}
            }
            let line = format!("{}\n", self.status()?);
            writer.write_all(line.as_bytes()).await?;
        }
        writer.flush().await?;
        Ok(())
    }
}
