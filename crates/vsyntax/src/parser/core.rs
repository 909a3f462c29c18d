//! Parser state machine and low-level operations.

use rowan::{Checkpoint, GreenNode, GreenNodeBuilder, TextRange, TextSize};

use super::cst::{SyntaxKind, TokenSet};
use super::lexer::{Token, token_text};
use crate::Error;
use crate::diagnostics::{DiagnosticKind, Diagnostics};

/// Nesting limit applied by [`parse`](super::parse).
pub const DEFAULT_RECURSION_FUEL: u32 = 512;

#[derive(Debug, Clone, Copy)]
pub(super) struct OpenDelimiter {
    pub kind: SyntaxKind,
    pub span: TextRange,
}

/// Trivia tokens are buffered and flushed when starting a new node.
pub struct Parser<'src> {
    pub(super) source: &'src str,
    pub(super) tokens: Vec<Token>,
    pub(super) pos: usize,
    pub(super) trivia_buffer: Vec<Token>,
    pub(super) builder: GreenNodeBuilder<'static>,
    pub(super) diagnostics: Diagnostics,
    pub(super) depth: u32,
    pub(super) last_diagnostic_pos: Option<TextSize>,
    pub(super) delimiter_stack: Vec<OpenDelimiter>,
    pub(super) debug_fuel: std::cell::Cell<u32>,
    /// Set inside `if`/`for`/`match`/... headers, where `{` opens the body.
    pub(super) no_struct_literal: bool,
    /// Set right before an expression that may be prefixed with `mut`.
    pub(super) mut_allowed: bool,
    pub(super) block_depth: u32,
    exec_fuel_initial: Option<u32>,
    exec_fuel_remaining: Option<u32>,
    recursion_fuel_limit: Option<u32>,
    fatal_error: Option<Error>,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str, tokens: Vec<Token>) -> Self {
        Self {
            source,
            tokens,
            pos: 0,
            trivia_buffer: Vec::with_capacity(4),
            builder: GreenNodeBuilder::new(),
            diagnostics: Diagnostics::new(),
            depth: 0,
            last_diagnostic_pos: None,
            delimiter_stack: Vec::with_capacity(8),
            debug_fuel: std::cell::Cell::new(256),
            no_struct_literal: false,
            mut_allowed: false,
            block_depth: 0,
            exec_fuel_initial: None,
            exec_fuel_remaining: None,
            recursion_fuel_limit: None,
            fatal_error: None,
        }
    }

    pub fn with_exec_fuel(mut self, limit: Option<u32>) -> Self {
        self.exec_fuel_initial = limit;
        self.exec_fuel_remaining = limit;
        self
    }

    pub fn with_recursion_fuel(mut self, limit: Option<u32>) -> Self {
        self.recursion_fuel_limit = limit;
        self
    }

    pub(super) fn finish(mut self) -> Result<(GreenNode, Diagnostics, u32), Error> {
        self.drain_trivia();
        if let Some(err) = self.fatal_error {
            return Err(err);
        }
        let exec_fuel_consumed = match (self.exec_fuel_initial, self.exec_fuel_remaining) {
            (Some(initial), Some(remaining)) => initial.saturating_sub(remaining),
            _ => 0,
        };
        Ok((self.builder.finish(), self.diagnostics, exec_fuel_consumed))
    }

    pub(super) fn has_fatal_error(&self) -> bool {
        self.fatal_error.is_some()
    }

    /// Current significant token. `SyntaxKind::Error` stands for end of input.
    pub(super) fn current(&mut self) -> SyntaxKind {
        self.skip_trivia_to_buffer();
        self.nth_raw(0)
    }

    fn reset_debug_fuel(&self) {
        self.debug_fuel.set(256);
    }

    pub(super) fn nth_raw(&self, lookahead: usize) -> SyntaxKind {
        self.ensure_progress();
        self.tokens
            .get(self.pos + lookahead)
            .map_or(SyntaxKind::Error, |t| t.kind)
    }

    fn consume_exec_fuel(&mut self) {
        if let Some(ref mut remaining) = self.exec_fuel_remaining {
            if *remaining == 0 {
                if self.fatal_error.is_none() {
                    self.fatal_error = Some(Error::ExecFuelExhausted);
                }
                return;
            }
            *remaining -= 1;
        }
    }

    pub(super) fn current_span(&mut self) -> TextRange {
        self.skip_trivia_to_buffer();
        self.tokens
            .get(self.pos)
            .map_or_else(|| TextRange::empty(self.eof_offset()), |t| t.span)
    }

    pub(super) fn current_text(&mut self) -> &'src str {
        self.skip_trivia_to_buffer();
        match self.tokens.get(self.pos) {
            Some(token) => token_text(self.source, token),
            None => "",
        }
    }

    pub(super) fn eof_offset(&self) -> TextSize {
        TextSize::from(self.source.len() as u32)
    }

    pub(super) fn eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    pub(super) fn should_stop(&mut self) -> bool {
        self.skip_trivia_to_buffer();
        self.eof() || self.has_fatal_error()
    }

    pub(super) fn currently_is(&mut self, kind: SyntaxKind) -> bool {
        self.current() == kind
    }

    pub(super) fn currently_is_one_of(&mut self, set: TokenSet) -> bool {
        set.contains(self.current())
    }

    /// Index of the `n`-th significant token at or after the current position.
    fn nth_significant(&mut self, n: usize) -> Option<usize> {
        self.skip_trivia_to_buffer();
        self.ensure_progress();
        self.tokens[self.pos..]
            .iter()
            .enumerate()
            .filter(|(_, t)| !t.kind.is_trivia())
            .nth(n)
            .map(|(i, _)| self.pos + i)
    }

    /// LL(k) lookahead past trivia.
    pub(super) fn peek_nth(&mut self, n: usize) -> SyntaxKind {
        self.nth_significant(n)
            .map_or(SyntaxKind::Error, |i| self.tokens[i].kind)
    }

    pub(super) fn peek_nth_text(&mut self, n: usize) -> &'src str {
        match self.nth_significant(n) {
            Some(i) => token_text(self.source, &self.tokens[i]),
            None => "",
        }
    }

    pub(super) fn next_is(&mut self, kind: SyntaxKind) -> bool {
        self.peek_nth(1) == kind
    }

    /// Whether the `n`-th significant token directly follows the one before it.
    pub(super) fn nth_is_glued(&mut self, n: usize) -> bool {
        match self.nth_significant(n) {
            Some(i) => i > 0 && !self.tokens[i - 1].kind.is_trivia(),
            None => false,
        }
    }

    /// Whether the current token directly follows the previous one, without trivia.
    pub(super) fn current_is_glued(&mut self) -> bool {
        self.nth_is_glued(0)
    }

    /// Whether a line break separates the current token from the previous one.
    pub(super) fn newline_before(&mut self) -> bool {
        self.skip_trivia_to_buffer();
        self.tokens[..self.pos]
            .iter()
            .rev()
            .take_while(|t| t.kind.is_trivia())
            .any(|t| match t.kind {
                SyntaxKind::Newline => true,
                SyntaxKind::BlockComment => token_text(self.source, t).contains('\n'),
                _ => false,
            })
    }

    /// Raw token scan from the current position, trivia skipped.
    pub(super) fn lookahead(&mut self) -> impl Iterator<Item = SyntaxKind> + '_ {
        self.skip_trivia_to_buffer();
        self.ensure_progress();
        self.tokens[self.pos..]
            .iter()
            .map(|t| t.kind)
            .filter(|k| !k.is_trivia())
    }

    pub(super) fn skip_trivia_to_buffer(&mut self) {
        while self.pos < self.tokens.len() && self.tokens[self.pos].kind.is_trivia() {
            self.trivia_buffer.push(self.tokens[self.pos]);
            self.pos += 1;
        }
    }

    pub(super) fn drain_trivia(&mut self) {
        for token in self.trivia_buffer.drain(..) {
            let text = token_text(self.source, &token);
            self.builder.token(token.kind.into(), text);
        }
    }

    pub(super) fn start_node(&mut self, kind: SyntaxKind) {
        self.drain_trivia();
        self.builder.start_node(kind.into());
    }

    pub(super) fn start_node_at(&mut self, checkpoint: Checkpoint, kind: SyntaxKind) {
        self.builder.start_node_at(checkpoint, kind.into());
    }

    pub(super) fn finish_node(&mut self) {
        self.builder.finish_node();
    }

    pub(super) fn checkpoint(&mut self) -> Checkpoint {
        self.skip_trivia_to_buffer();
        self.drain_trivia();
        self.builder.checkpoint()
    }

    pub(super) fn bump(&mut self) {
        self.skip_trivia_to_buffer();
        if self.eof() {
            return;
        }
        self.reset_debug_fuel();
        self.consume_exec_fuel();

        self.drain_trivia();

        let token = self.tokens[self.pos];
        let text = token_text(self.source, &token);
        self.builder.token(token.kind.into(), text);
        self.pos += 1;
    }

    /// Wraps the current token in a node of `kind`.
    pub(super) fn bump_as(&mut self, kind: SyntaxKind) {
        self.start_node(kind);
        self.bump();
        self.finish_node();
    }

    pub(super) fn eat_token(&mut self, kind: SyntaxKind) -> bool {
        if self.currently_is(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Inserts a zero-width `MISSING` node holding an empty token of `kind`.
    pub(super) fn missing(&mut self, kind: SyntaxKind) {
        self.start_node(SyntaxKind::Missing);
        self.builder.token(kind.into(), "");
        self.finish_node();
    }

    /// On mismatch: emit diagnostic, insert a `MISSING` node, don't consume.
    pub(super) fn expect(&mut self, kind: SyntaxKind, what: &str) -> bool {
        if self.eat_token(kind) {
            return true;
        }
        self.error_msg(DiagnosticKind::ExpectedToken, what);
        self.missing(kind);
        false
    }

    pub(super) fn current_suppression_span(&mut self) -> TextRange {
        self.delimiter_stack
            .last()
            .map(|d| TextRange::new(d.span.start(), self.eof_offset()))
            .unwrap_or_else(|| self.current_span())
    }

    fn should_report(&mut self, pos: TextSize) -> bool {
        if self.last_diagnostic_pos == Some(pos) {
            return false;
        }
        self.last_diagnostic_pos = Some(pos);
        true
    }

    fn bump_as_error(&mut self) {
        if !self.eof() {
            self.start_node(SyntaxKind::Error);
            self.bump();
            self.finish_node();
        }
    }

    fn get_error_ranges(&mut self) -> Option<(TextRange, TextRange)> {
        let range = self.current_span();
        if !self.should_report(range.start()) {
            return None;
        }
        let suppression = self.current_suppression_span();
        Some((range, suppression))
    }

    pub(super) fn error(&mut self, kind: DiagnosticKind) {
        let Some((range, suppression)) = self.get_error_ranges() else {
            return;
        };
        self.diagnostics
            .report(kind, range)
            .suppression_range(suppression)
            .emit();
    }

    pub(super) fn error_msg(&mut self, kind: DiagnosticKind, message: impl Into<String>) {
        let Some((range, suppression)) = self.get_error_ranges() else {
            return;
        };
        self.diagnostics
            .report(kind, range)
            .message(message)
            .suppression_range(suppression)
            .emit();
    }

    /// Reports at an explicit range, bypassing the current-token position.
    pub(super) fn error_at(&mut self, kind: DiagnosticKind, range: TextRange) {
        if !self.should_report(range.start()) {
            return;
        }
        self.diagnostics.report(kind, range).emit();
    }

    /// Wraps the current token in an `ERROR` node. Lexical error tokens get
    /// their own diagnostic kind instead of `kind`.
    pub(super) fn error_and_bump(&mut self, kind: DiagnosticKind) {
        let kind = lexical_diagnostic(self.current()).unwrap_or(kind);
        self.error(kind);
        self.bump_as_error();
    }

    pub(super) fn error_and_bump_msg(&mut self, kind: DiagnosticKind, message: impl Into<String>) {
        self.error_at_current(kind, message);
        self.bump_as_error();
    }

    /// Like `error_msg`, but a lexical error token reports its own kind.
    fn error_at_current(&mut self, kind: DiagnosticKind, message: impl Into<String>) {
        match lexical_diagnostic(self.current()) {
            Some(lexical) => self.error(lexical),
            None => self.error_msg(kind, message),
        }
    }

    /// Wraps everything up to the recovery set in one `ERROR` node.
    pub(super) fn error_recover(
        &mut self,
        kind: DiagnosticKind,
        message: &str,
        recovery: TokenSet,
    ) {
        if self.currently_is_one_of(recovery) || self.should_stop() {
            self.error_msg(kind, message);
            return;
        }

        self.start_node(SyntaxKind::Error);
        self.error_at_current(kind, message);
        let mut depth = 0u32;
        while !self.should_stop() {
            let current = self.current();
            if depth == 0 && recovery.contains(current) {
                break;
            }
            match current {
                SyntaxKind::ParenOpen | SyntaxKind::BracketOpen | SyntaxKind::BraceOpen => {
                    depth += 1
                }
                SyntaxKind::ParenClose | SyntaxKind::BracketClose | SyntaxKind::BraceClose => {
                    depth = depth.saturating_sub(1)
                }
                _ => {}
            }
            self.bump();
        }
        self.finish_node();
    }

    pub(super) fn enter_recursion(&mut self) -> bool {
        if let Some(limit) = self.recursion_fuel_limit
            && self.depth >= limit
        {
            if self.fatal_error.is_none() {
                self.fatal_error = Some(Error::RecursionLimitExceeded);
            }
            return false;
        }
        self.depth += 1;
        self.reset_debug_fuel();
        true
    }

    pub(super) fn exit_recursion(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.reset_debug_fuel();
    }

    pub(super) fn push_delimiter(&mut self, kind: SyntaxKind) {
        let span = self.current_span();
        self.delimiter_stack.push(OpenDelimiter { kind, span });
    }

    pub(super) fn pop_delimiter(&mut self) -> Option<OpenDelimiter> {
        self.delimiter_stack.pop()
    }

    /// Bumps the opener at the current position and tracks it for unclosed reporting.
    pub(super) fn open_delimiter(&mut self) {
        let kind = self.current();
        self.push_delimiter(kind);
        self.bump();
    }

    /// Consumes the closer matching the innermost open delimiter, or reports it
    /// unclosed and inserts a `MISSING` closer.
    pub(super) fn close_delimiter(&mut self, closer: SyntaxKind) {
        let open = self.pop_delimiter();
        if self.eat_token(closer) {
            return;
        }
        let kind = match closer {
            SyntaxKind::ParenClose => DiagnosticKind::UnclosedParen,
            SyntaxKind::BracketClose => DiagnosticKind::UnclosedBracket,
            _ => DiagnosticKind::UnclosedBrace,
        };
        match open {
            Some(open) => {
                let related = format!("`{}` opened here", open.kind.name());
                self.error_unclosed_delimiter(kind, related, open.span);
            }
            None => self.error(kind),
        }
        self.missing(closer);
    }

    pub(super) fn error_unclosed_delimiter(
        &mut self,
        kind: DiagnosticKind,
        related_msg: impl Into<String>,
        open_range: TextRange,
    ) {
        let current = self.current_span();
        if !self.should_report(current.start()) {
            return;
        }
        // Use full range for easier downstream error suppression
        let full_range = TextRange::new(open_range.start(), current.end());
        self.diagnostics
            .report(kind, full_range)
            .related_to(related_msg, open_range)
            .emit();
    }

    pub(super) fn last_non_trivia_end(&self) -> Option<TextSize> {
        self.tokens[..self.pos]
            .iter()
            .rev()
            .find(|t| !t.kind.is_trivia())
            .map(|t| t.span.end())
    }
}

/// Diagnostic kind for a lexical error token, if `kind` is one.
pub(super) fn lexical_diagnostic(kind: SyntaxKind) -> Option<DiagnosticKind> {
    match kind {
        SyntaxKind::InvalidNumber => Some(DiagnosticKind::InvalidNumber),
        SyntaxKind::InvalidEscape => Some(DiagnosticKind::InvalidEscape),
        SyntaxKind::UnterminatedComment => Some(DiagnosticKind::UnclosedComment),
        _ => None,
    }
}
