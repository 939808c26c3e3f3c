//! Lexical context stack.
//!
//! Each nested lexical region (string continuation, `#{...}` interpolation,
//! heredoc opener line, heredoc body) is a [`Frame`] on the stack. The frame
//! carries the data captured when the region was entered, so a suspended
//! region resumes with exactly its own terminator and flags.
//!
//! The base frame scans plain statements and is never popped.

use garnet_lexer_core::{Span, TokenKind};
use smallvec::SmallVec;
use tracing::trace;

/// Terminator data captured by a heredoc opener.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Heredoc {
    /// Terminator identifier, quotes excluded. Points into the opener text.
    pub term: Span,
    /// `<<-ID` / `<<~ID`: the terminator line may be indented.
    pub indent: bool,
    /// `<<'ID'`: no escapes, no interpolation.
    pub raw: bool,
}

/// Scanning mode of a frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Mode {
    /// Default statement dispatch.
    Statements,
    /// Rest of a double-quoted literal after an interpolation.
    Quoted { close: u8 },
    /// Statements inside `#{...}`; `braces` counts unmatched `{` seen inside.
    Interpolation { braces: u32 },
    /// Statements after a heredoc opener, up to the end of its line.
    HeredocFirstLine(Heredoc),
    /// Heredoc body lines, up to the terminator line.
    HeredocBody(Heredoc),
}

/// One lexical context.
#[derive(Copy, Clone, Debug)]
pub(crate) struct Frame {
    /// The previous token of this context abuts the cursor.
    pub nospace: bool,
    /// The previous token places the next name in method-definition position
    /// (`def`, `def self.`, `def Const.`).
    pub def_name: bool,
    /// Kind of the previous token of this context; `NewLine` when fresh.
    pub prev: TokenKind,
    pub mode: Mode,
}

impl Frame {
    fn new(mode: Mode) -> Self {
        Frame {
            nospace: false,
            def_name: false,
            prev: TokenKind::NewLine,
            mode,
        }
    }
}

/// Non-empty stack of lexical contexts.
pub(crate) struct ContextStack {
    top: Frame,
    /// Frames below `top`, bottom first.
    suspended: SmallVec<[Frame; 4]>,
}

impl ContextStack {
    pub(crate) fn new() -> Self {
        ContextStack {
            top: Frame::new(Mode::Statements),
            suspended: SmallVec::new(),
        }
    }

    #[inline]
    pub(crate) fn top(&self) -> &Frame {
        &self.top
    }

    #[inline]
    pub(crate) fn top_mut(&mut self) -> &mut Frame {
        &mut self.top
    }

    /// Number of frames, the base frame included.
    #[inline]
    pub(crate) fn depth(&self) -> usize {
        self.suspended.len() + 1
    }

    /// Enter a nested region with a fresh frame.
    pub(crate) fn push(&mut self, mode: Mode) {
        let parent = std::mem::replace(&mut self.top, Frame::new(mode));
        self.suspended.push(parent);
        trace!(?mode, depth = self.depth(), "push context");
    }

    /// Leave the current region. The base frame stays.
    pub(crate) fn pop(&mut self) {
        if let Some(parent) = self.suspended.pop() {
            let left = std::mem::replace(&mut self.top, parent);
            trace!(mode = ?left.mode, depth = self.depth(), "pop context");
        }
    }

    /// Replace the top frame with a fresh frame in `mode`.
    pub(crate) fn swap(&mut self, mode: Mode) {
        trace!(from = ?self.top.mode, to = ?mode, "swap context");
        self.top = Frame::new(mode);
    }

    /// Update the lookback state after a token of `kind` was produced while
    /// the stack held `depth` frames.
    ///
    /// The frame that was active when the token started is the one updated.
    /// A frame pushed by the token keeps its fresh state; if the token popped
    /// the active frame, the newly exposed parent is updated instead.
    pub(crate) fn record(&mut self, depth: usize, kind: TokenKind) {
        let index = depth.min(self.depth()) - 1;
        let frame = match self.suspended.get_mut(index) {
            Some(frame) => frame,
            None => &mut self.top,
        };
        frame.def_name = match kind {
            TokenKind::KeywordDef => true,
            TokenKind::KeywordSelf | TokenKind::Dot | TokenKind::ConstIdent => frame.def_name,
            _ => false,
        };
        frame.prev = kind;
        if kind != TokenKind::NewLine {
            frame.nospace = true;
        }
    }

    /// Adjust the brace count of the interpolation frame on top.
    pub(crate) fn count_brace(&mut self, kind: TokenKind) {
        if let Mode::Interpolation { braces } = &mut self.top.mode {
            match kind {
                TokenKind::LBrace => *braces += 1,
                TokenKind::RBrace => *braces = braces.saturating_sub(1),
                _ => {}
            }
        }
    }
}
