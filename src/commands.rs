//! Text commands for driving a section from stdin or scripts

use crate::input::RawInput;

/// Commands understood by the driver
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Input(RawInput),
    Resize { width: f32, height: f32 },
    Status,
    Back,
    Open(usize),
    Next,
    Prev,
    Close,
    ScrollLeft,
    ScrollRight,
    Quit,
}

impl Command {
    /// Parse a command from a string
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        let mut parts = s.split_whitespace();
        let name = parts.next()?;
        let args: Vec<&str> = parts.collect();

        let cmd = match (name, args.as_slice()) {
            ("down", [x, y]) => Command::Input(RawInput::MouseDown {
                x: x.parse().ok()?,
                y: y.parse().ok()?,
            }),
            ("move", [x, y]) => Command::Input(RawInput::MouseMove {
                x: x.parse().ok()?,
                y: y.parse().ok()?,
            }),
            ("up", []) => Command::Input(RawInput::MouseUp),
            ("touch-start", [x, y]) => Command::Input(RawInput::TouchStart {
                touches: vec![[x.parse().ok()?, y.parse().ok()?]],
            }),
            ("touch-move", [x, y]) => Command::Input(RawInput::TouchMove {
                touches: vec![[x.parse().ok()?, y.parse().ok()?]],
            }),
            ("touch-end", []) => Command::Input(RawInput::TouchEnd),
            ("resize", [w, h]) => Command::Resize {
                width: w.parse().ok()?,
                height: h.parse().ok()?,
            },
            ("status", []) => Command::Status,
            ("back", []) => Command::Back,
            ("open", [n]) => Command::Open(n.parse().ok()?),
            ("next", []) => Command::Next,
            ("prev", []) => Command::Prev,
            ("close", []) => Command::Close,
            ("scroll-left", []) => Command::ScrollLeft,
            ("scroll-right", []) => Command::ScrollRight,
            ("quit", []) => Command::Quit,
            _ => return None,
        };
        Some(cmd)
    }
}
