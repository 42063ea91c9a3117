//! Scanner modes and the state threaded between tokens and lines

use serde::Serialize;
use std::fmt;

/// Sub-grammar the scanner is currently in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    #[default]
    Start,
    /// Inside a `/* ... */` comment that spans lines.
    Comment,
    /// Right after `fn`, waiting for the name being defined.
    FunctionName,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Mode::Start => "start",
            Mode::Comment => "comment",
            Mode::FunctionName => "function-name",
        })
    }
}

/// Mode change requested by a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Enter a mode, remembering the current one.
    Push(Mode),
    /// Return to the mode saved by the matching push.
    Pop,
    /// Replace the current mode without touching the stack.
    Goto(Mode),
}

/// Everything the scanner carries from one token to the next.
///
/// Line-based hosts keep the state left behind by line N and hand it back
/// when classifying line N+1.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ScannerState {
    mode: Mode,
    stack: Vec<Mode>,
    depth: usize,
}

impl ScannerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// A state that starts in `mode` with an empty stack.
    pub fn in_mode(mode: Mode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Bracket nesting depth at this point of the text.
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub(crate) fn apply(&mut self, transition: Transition) {
        let from = self.mode;
        match transition {
            Transition::Push(to) => {
                self.stack.push(self.mode);
                self.mode = to;
            }
            Transition::Pop => {
                self.mode = self.stack.pop().unwrap_or_default();
            }
            Transition::Goto(to) => {
                self.mode = to;
            }
        }
        log::trace!("scanner mode {} -> {}", from, self.mode);
    }

    pub(crate) fn nest(&mut self, delta: i32) {
        if delta > 0 {
            self.depth += 1;
        } else if delta < 0 {
            self.depth = self.depth.saturating_sub(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_pop_restores_mode() {
        let mut state = ScannerState::in_mode(Mode::FunctionName);
        state.apply(Transition::Push(Mode::Comment));
        assert_eq!(state.mode(), Mode::Comment);
        state.apply(Transition::Pop);
        assert_eq!(state.mode(), Mode::FunctionName);
    }

    #[test]
    fn test_pop_on_empty_stack_returns_to_start() {
        let mut state = ScannerState::in_mode(Mode::Comment);
        state.apply(Transition::Pop);
        assert_eq!(state.mode(), Mode::Start);
    }

    #[test]
    fn test_goto_keeps_stack() {
        let mut state = ScannerState::new();
        state.apply(Transition::Push(Mode::Comment));
        state.apply(Transition::Goto(Mode::FunctionName));
        state.apply(Transition::Pop);
        assert_eq!(state.mode(), Mode::Start);
    }

    #[test]
    fn test_depth_never_goes_negative() {
        let mut state = ScannerState::new();
        state.nest(-1);
        assert_eq!(state.depth(), 0);
        state.nest(1);
        state.nest(1);
        state.nest(-1);
        assert_eq!(state.depth(), 1);
    }
}
