//! Fire-and-forget sound cues.
//!
//! A terminal has no mixer, so the cues ring the bell. Failures are logged and
//! dropped; nothing waits on a cue.

use log::debug;
use std::io::Write;

pub trait AudioNotifier {
    fn food_consumed(&mut self);
    fn game_over(&mut self);
}

/// Rings the bell by writing BEL to `out`
pub struct TerminalBell<W: Write> {
    out: W,
}

impl<W: Write> TerminalBell<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    fn ring(&mut self, cue: &str) {
        let result = self.out.write_all(b"\x07").and_then(|_| self.out.flush());
        if let Err(err) = result {
            debug!("{} cue dropped: {}", cue, err);
        }
    }
}

impl<W: Write> AudioNotifier for TerminalBell<W> {
    fn food_consumed(&mut self) {
        self.ring("food");
    }

    // Two rings so the end of a run is distinguishable
    fn game_over(&mut self) {
        self.ring("game-over");
        self.ring("game-over");
    }
}

pub struct Muted;

impl AudioNotifier for Muted {
    fn food_consumed(&mut self) {}
    fn game_over(&mut self) {}
}

/// Pick the notifier for a session
pub fn notifier(sound: bool) -> Box<dyn AudioNotifier> {
    if sound {
        Box::new(TerminalBell::new(std::io::stderr()))
    } else {
        Box::new(Muted)
    }
}
