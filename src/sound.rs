//! Terminal bell as the game's only sound.

use std::io::{self, Write};

use tracing::{trace, warn};

use crate::core::SoundHooks;
use crate::types::SoundEvent;

/// Rings BEL on the events worth hearing; everything else is only traced.
#[derive(Debug)]
pub struct TerminalBell<W = io::Stdout> {
    enabled: bool,
    out: W,
}

impl TerminalBell<io::Stdout> {
    pub fn stdout(enabled: bool) -> Self {
        Self::new(enabled, io::stdout())
    }
}

impl<W: Write> TerminalBell<W> {
    pub fn new(enabled: bool, out: W) -> Self {
        Self { enabled, out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn rings(event: SoundEvent) -> usize {
        match event {
            SoundEvent::Tetris => 2,
            SoundEvent::LineClear | SoundEvent::LevelUp | SoundEvent::GameOver => 1,
            _ => 0,
        }
    }
}

impl<W: Write> SoundHooks for TerminalBell<W> {
    fn play(&mut self, event: SoundEvent) {
        trace!(event = event.as_str(), "sound");
        let rings = Self::rings(event);
        if !self.enabled || rings == 0 {
            return;
        }
        let result = self
            .out
            .write_all(&b"\x07\x07"[..rings])
            .and_then(|()| self.out.flush());
        if let Err(err) = result {
            warn!(%err, "terminal bell failed");
        }
    }
}
