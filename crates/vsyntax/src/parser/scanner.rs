//! Stateful scanner for V source text.
//!
//! Logos recognizes the regular tokens; everything whose meaning depends on what came
//! before is decided here:
//!
//! - string literals with `${...}` and `$name` splices, escapes and format specifiers
//! - comments, numeric literals, runes
//! - C directives and the opaque bodies of `asm`/`sql` blocks
//! - promotion of line breaks to `LineTerminator` tokens
//!
//! All history lives in [`ScannerState`], which is created fresh per file and threaded
//! through [`scan_token`] by mutable reference. There are no globals, so a state can be
//! set up by hand in tests and driven byte slice by byte slice.
//!
//! # Terminators
//!
//! A physical line break becomes a `LineTerminator` iff the innermost code frame is a
//! brace block, a `const (`/`__global (` group or the file itself, no interpolation splice
//! is open, and the last significant token can end a statement. Inside `(`, `[` or a splice
//! line breaks stay trivia. A line break followed by `.field`, `else` or `$else` on the
//! next line continues the current statement.

use logos::Logos;
use rowan::TextRange;

use super::cst::SyntaxKind::{self, *};
use super::lexer::{Token, range_to_text_range};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringFlavor {
    /// `'...'`, escapes and interpolation.
    Interpreted,
    /// `r'...'`, neither escapes nor interpolation.
    Raw,
    /// `c'...'`, escapes only.
    Foreign,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StringFrame {
    pub quote: u8,
    pub flavor: StringFlavor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortSplicePhase {
    ExpectIdent,
    AfterOperand,
}

/// One level of lexical nesting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frame {
    Paren,
    Bracket,
    Brace,
    /// `(` after `const` or `__global`; keeps terminators.
    Group,
    /// `<` directly after a capitalized identifier.
    Angle,
    Str(StringFrame),
    /// `${ ... }`; braces opened directly inside are counted, not pushed.
    Splice { brace_depth: u32 },
    /// `$name.field(args)`
    ShortSplice(ShortSplicePhase),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum DirectiveState {
    #[default]
    None,
    IncludePath,
    IncludeMessage,
    DefineName,
    Body,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum RawBlock {
    #[default]
    Idle,
    Header,
    /// Header after a name, where `.` may extend it (`sql app.db {`).
    HeaderName,
    Content,
}

/// Per-file scanner memory.
#[derive(Debug, Clone, Default)]
pub struct ScannerState {
    frames: Vec<Frame>,
    last: Option<SyntaxKind>,
    last_end: usize,
    last_ident_capitalized: bool,
    last_closed_generic: bool,
    directive: DirectiveState,
    raw_block: RawBlock,
    pending_terminator: bool,
}

impl ScannerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Last significant token kind.
    pub fn last(&self) -> Option<SyntaxKind> {
        self.last
    }

    pub fn in_string(&self) -> bool {
        matches!(self.frames.last(), Some(Frame::Str(_)))
    }

    /// Whether a line break at this point would be promoted to a terminator.
    pub fn terminator_allowed(&self) -> bool {
        let in_splice = self
            .frames
            .iter()
            .any(|f| matches!(f, Frame::Splice { .. } | Frame::ShortSplice(_)));
        let innermost_ok = matches!(
            self.frames.last(),
            None | Some(Frame::Brace | Frame::Group)
        );
        !in_splice && innermost_ok && self.last.is_some_and(|k| self.ends_statement(k))
    }

    fn ends_statement(&self, kind: SyntaxKind) -> bool {
        match kind {
            Gt => self.last_closed_generic,
            KwReturn | KwBreak | KwContinue => true,
            _ => is_operand_end(kind),
        }
    }

    fn last_is_operand(&self) -> bool {
        self.last.is_some_and(is_operand_end)
    }

    fn push(&mut self, frame: Frame) {
        self.frames.push(frame);
    }

    fn pop_angles(&mut self) {
        while matches!(self.frames.last(), Some(Frame::Angle)) {
            self.frames.pop();
        }
    }

    /// Pops up to and including the nearest frame accepted by `matches`, without
    /// crossing a string or splice boundary. A stray closer leaves the stack alone.
    fn close(&mut self, matches: impl Fn(&Frame) -> bool) {
        let found = self
            .frames
            .iter()
            .rev()
            .take_while(|f| !matches!(f, Frame::Str(_) | Frame::Splice { .. }))
            .position(&matches);
        if let Some(depth) = found {
            let keep = self.frames.len() - depth - 1;
            self.frames.truncate(keep);
        }
    }

    /// Updates the state after `token` has been produced.
    fn observe(&mut self, source: &str, token: Token) {
        let kind = token.kind;
        if kind.is_trivia() {
            return;
        }
        let start = usize::from(token.span.start());
        let end = usize::from(token.span.end());
        let text = &source[start..end];
        let mut closed_generic = false;

        match kind {
            ParenOpen => {
                let frame = if matches!(self.last, Some(KwConst | KwGlobal)) {
                    Frame::Group
                } else {
                    Frame::Paren
                };
                self.push(frame);
            }
            BracketOpen | AttrOpen => self.push(Frame::Bracket),
            BraceOpen => {
                self.pop_angles();
                if let Some(Frame::Splice { brace_depth }) = self.frames.last_mut() {
                    *brace_depth += 1;
                } else {
                    self.push(Frame::Brace);
                }
            }
            ParenClose => self.close(|f| matches!(f, Frame::Paren | Frame::Group)),
            BracketClose => self.close(|f| matches!(f, Frame::Bracket)),
            BraceClose => {
                if let Some(Frame::Splice { brace_depth }) = self.frames.last_mut() {
                    *brace_depth = brace_depth.saturating_sub(1);
                } else {
                    self.close(|f| matches!(f, Frame::Brace));
                }
            }
            Lt if self.last_ident_capitalized && self.last_end == start => {
                self.push(Frame::Angle);
            }
            Gt if matches!(self.frames.last(), Some(Frame::Angle)) => {
                self.frames.pop();
                closed_generic = true;
            }
            StringOpen => {
                let quote = text.as_bytes().last().copied().unwrap_or(b'\'');
                let flavor = match text.as_bytes().first() {
                    Some(b'r') => StringFlavor::Raw,
                    Some(b'c') => StringFlavor::Foreign,
                    _ => StringFlavor::Interpreted,
                };
                self.push(Frame::Str(StringFrame { quote, flavor }));
            }
            StringClose => {
                if self.in_string() {
                    self.frames.pop();
                }
            }
            InterpolationOpen => self.push(Frame::Splice { brace_depth: 0 }),
            InterpolationClose => {
                if matches!(self.frames.last(), Some(Frame::Splice { .. })) {
                    self.frames.pop();
                }
            }
            Dollar if self.in_string() => {
                self.push(Frame::ShortSplice(ShortSplicePhase::ExpectIdent));
            }
            Ident => {
                if let Some(Frame::ShortSplice(phase)) = self.frames.last_mut() {
                    *phase = ShortSplicePhase::AfterOperand;
                }
            }
            Dot => {
                if let Some(Frame::ShortSplice(phase)) = self.frames.last_mut() {
                    *phase = ShortSplicePhase::ExpectIdent;
                }
            }
            _ => {}
        }

        self.directive = match (self.directive, kind) {
            (_, Directive) => match text {
                "#include" | "#preinclude" | "#postinclude" | "#insert" => {
                    DirectiveState::IncludePath
                }
                "#define" => DirectiveState::DefineName,
                _ => DirectiveState::Body,
            },
            (DirectiveState::IncludePath, CIncludePath) => DirectiveState::IncludeMessage,
            (DirectiveState::IncludePath, StringClose) if !self.in_string() => {
                DirectiveState::IncludeMessage
            }
            (DirectiveState::IncludePath, StringOpen | StringContent | Escape | InvalidEscape) => {
                DirectiveState::IncludePath
            }
            (DirectiveState::DefineName, Ident) => DirectiveState::Body,
            _ => DirectiveState::None,
        };

        self.raw_block = match (self.raw_block, kind) {
            (_, KwAsm) => RawBlock::Header,
            (RawBlock::Idle, Ident) if text == "sql" && self.last != Some(Dot) => RawBlock::Header,
            (RawBlock::Header | RawBlock::HeaderName, Ident) => RawBlock::HeaderName,
            (RawBlock::HeaderName, Dot) => RawBlock::Header,
            (RawBlock::Header | RawBlock::HeaderName, BraceOpen) => RawBlock::Content,
            _ => RawBlock::Idle,
        };

        self.last = Some(kind);
        self.last_end = end;
        self.last_closed_generic = closed_generic;
        self.last_ident_capitalized = kind == Ident && text.chars().next().is_some_and(is_upper);
    }
}

/// Tokens after which an expression is complete.
fn is_operand_end(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        Ident
            | PseudoComptimeIdent
            | Int
            | Float
            | Rune
            | StringClose
            | ParenClose
            | BracketClose
            | BraceClose
            | Question
            | Bang
            | PlusPlus
            | MinusMinus
            | KwNone
            | KwTrue
            | KwFalse
            | Directive
            | DirectiveBody
            | CIncludePath
            | Garbage
            | InvalidNumber
            | InvalidEscape
    )
}

/// Produces the token starting at `offset`, or `None` at end of input.
pub fn scan_token(source: &str, offset: usize, state: &mut ScannerState) -> Option<Token> {
    let token = next_token(source, offset, state)?;
    state.observe(source, token);
    Some(token)
}

/// Pull-model iterator over a whole file.
pub struct Scanner<'src> {
    source: &'src str,
    offset: usize,
    state: ScannerState,
}

impl<'src> Scanner<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            offset: 0,
            state: ScannerState::new(),
        }
    }

    pub fn state(&self) -> &ScannerState {
        &self.state
    }
}

impl Iterator for Scanner<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let token = scan_token(self.source, self.offset, &mut self.state)?;
        self.offset = usize::from(token.span.end());
        Some(token)
    }
}

fn tok(kind: SyntaxKind, start: usize, end: usize) -> Token {
    Token::new(kind, range_to_text_range(start..end))
}

fn next_token(source: &str, offset: usize, state: &mut ScannerState) -> Option<Token> {
    if state.pending_terminator {
        state.pending_terminator = false;
        return Some(Token::new(
            LineTerminator,
            TextRange::empty((offset as u32).into()),
        ));
    }

    settle_short_splice(&source[offset..], state);

    let rest = source.get(offset..).filter(|r| !r.is_empty())?;

    if let Some(Frame::Str(frame)) = state.frames.last().copied() {
        return Some(scan_string_part(source, offset, frame));
    }

    if state.raw_block == RawBlock::Content
        && let Some(token) = scan_raw_block(source, offset)
    {
        return Some(token);
    }

    let first = rest.as_bytes()[0];
    let at_space = matches!(first, b' ' | b'\t' | b'\n' | b'\r');
    match state.directive {
        DirectiveState::Body if !at_space => return Some(scan_directive_body(source, offset)),
        DirectiveState::IncludePath if first == b'<' => {
            return Some(scan_include_path(source, offset));
        }
        DirectiveState::IncludeMessage if first == b'#' => {
            return Some(scan_directive_body(source, offset));
        }
        _ => {}
    }

    Some(scan_code(source, offset, state))
}

/// Leaves a `$name` splice once the next character cannot continue it.
fn settle_short_splice(rest: &str, state: &mut ScannerState) {
    while let Some(Frame::ShortSplice(phase)) = state.frames.last().copied() {
        let continues = match phase {
            ShortSplicePhase::ExpectIdent => starts_ident(rest),
            ShortSplicePhase::AfterOperand => {
                rest.starts_with('(') || (rest.starts_with('.') && starts_ident(&rest[1..]))
            }
        };
        if continues {
            return;
        }
        state.frames.pop();
    }
}

fn scan_code(source: &str, offset: usize, state: &mut ScannerState) -> Token {
    let rest = &source[offset..];
    let bytes = rest.as_bytes();
    let next = bytes.get(1).copied();

    match bytes[0] {
        b'\n' | b'\r' => scan_newline(source, offset, state),
        b'/' if next == Some(b'*') => scan_block_comment(source, offset, state),
        b'#' if offset == 0 && next == Some(b'!') => tok(LineComment, offset, line_end(source, offset)),
        b'#' => {
            let len = 1 + ident_len(&rest[1..]);
            let kind = if len > 1 { Directive } else { Garbage };
            tok(kind, offset, offset + len)
        }
        b'\'' | b'"' => tok(StringOpen, offset, offset + 1),
        b'r' | b'c' if matches!(next, Some(b'\'' | b'"')) => tok(StringOpen, offset, offset + 2),
        b'`' => scan_rune(source, offset),
        b'0'..=b'9' => scan_number(source, offset),
        b'.' if next.is_some_and(|c| c.is_ascii_digit()) && !state.last_is_operand() => {
            scan_number(source, offset)
        }
        b'$' => scan_dollar(rest, offset),
        b'@' => scan_at(rest, offset),
        b'!' => {
            for (word, kind) in [("in", NotIn), ("is", NotIs)] {
                if rest[1..].starts_with(word) && !starts_ident_continue(&rest[1 + word.len()..]) {
                    return tok(kind, offset, offset + 1 + word.len());
                }
            }
            lex_regular(rest, offset)
        }
        b'>' if matches!(state.frames.last(), Some(Frame::Angle)) => tok(Gt, offset, offset + 1),
        b'}' if matches!(state.frames.last(), Some(Frame::Splice { brace_depth: 0 })) => {
            tok(InterpolationClose, offset, offset + 1)
        }
        b':' if matches!(state.frames.last(), Some(Frame::Splice { brace_depth: 0 }))
            && next != Some(b'=') =>
        {
            scan_format_spec(source, offset)
        }
        _ => lex_regular(rest, offset),
    }
}

/// Falls back to the logos-derived recognizer for one regular token.
fn lex_regular(rest: &str, offset: usize) -> Token {
    let mut lexer = SyntaxKind::lexer(rest);
    let char_len = rest.chars().next().map_or(1, char::len_utf8);
    match lexer.next() {
        Some(Ok(kind)) => tok(kind, offset, offset + lexer.span().end),
        _ => tok(Garbage, offset, offset + lexer.span().end.max(char_len)),
    }
}

fn scan_newline(source: &str, offset: usize, state: &mut ScannerState) -> Token {
    let bytes = source.as_bytes();
    let len = if bytes[offset] == b'\r' && bytes.get(offset + 1) == Some(&b'\n') {
        2
    } else {
        1
    };
    state.pop_angles();
    if matches!(state.raw_block, RawBlock::Header | RawBlock::HeaderName) {
        state.raw_block = RawBlock::Idle;
    }
    state.directive = DirectiveState::None;

    let kind = if state.terminator_allowed() && !continues_on_next_line(&source[offset + len..]) {
        LineTerminator
    } else {
        Newline
    };
    tok(kind, offset, offset + len)
}

/// Whether the next non-blank line continues the current statement.
fn continues_on_next_line(rest: &str) -> bool {
    let line = rest.trim_start_matches([' ', '\t', '\n', '\r']);
    if let Some(after_dot) = line.strip_prefix('.') {
        return starts_ident(after_dot);
    }
    ["else", "$else"]
        .iter()
        .any(|kw| line.starts_with(kw) && !starts_ident_continue(&line[kw.len()..]))
}

fn scan_block_comment(source: &str, offset: usize, state: &mut ScannerState) -> Token {
    let Some(close) = source[offset + 2..].find("*/") else {
        return tok(UnterminatedComment, offset, source.len());
    };
    let end = offset + 2 + close + 2;
    if source[offset..end].contains('\n') && state.terminator_allowed() {
        state.pending_terminator = true;
    }
    tok(BlockComment, offset, end)
}

fn scan_dollar(rest: &str, offset: usize) -> Token {
    for (word, kind) in [("$if", ComptimeIf), ("$else", ComptimeElse), ("$for", ComptimeFor)] {
        if rest.starts_with(word) && !starts_ident_continue(&rest[word.len()..]) {
            return tok(kind, offset, offset + word.len());
        }
    }
    tok(Dollar, offset, offset + 1)
}

fn scan_at(rest: &str, offset: usize) -> Token {
    if rest[1..].starts_with('[') {
        return tok(AttrOpen, offset, offset + 2);
    }
    let len = ident_len(&rest[1..]);
    if len > 0 {
        let word = &rest[1..1 + len];
        if is_keyword(word) || super::lexer::is_builtin_type(word) {
            return tok(Ident, offset, offset + 1 + len);
        }
        if is_pseudo_comptime_name(word) {
            return tok(PseudoComptimeIdent, offset, offset + 1 + len);
        }
    }
    tok(At, offset, offset + 1)
}

fn is_keyword(word: &str) -> bool {
    let mut lexer = SyntaxKind::lexer(word);
    matches!(lexer.next(), Some(Ok(kind)) if kind.is_keyword() && lexer.span().end == word.len())
}

/// `[A-Z][A-Z0-9_]+`
fn is_pseudo_comptime_name(word: &str) -> bool {
    let mut chars = word.chars();
    chars.next().is_some_and(|c| c.is_ascii_uppercase())
        && word.len() > 1
        && chars.all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}

fn scan_string_part(source: &str, offset: usize, frame: StringFrame) -> Token {
    let bytes = source.as_bytes();
    let first = bytes[offset];
    let interpolates = frame.flavor == StringFlavor::Interpreted;
    let escapes = frame.flavor != StringFlavor::Raw;

    if first == frame.quote {
        return tok(StringClose, offset, offset + 1);
    }
    if first == b'\\' && escapes {
        return scan_escape(source, offset);
    }
    if first == b'$' && interpolates {
        if bytes.get(offset + 1) == Some(&b'{') {
            return tok(InterpolationOpen, offset, offset + 2);
        }
        if starts_ident(&source[offset + 1..]) {
            return tok(Dollar, offset, offset + 1);
        }
    }

    let mut end = offset + 1;
    while end < bytes.len() {
        let b = bytes[end];
        if b == frame.quote
            || (b == b'\\' && escapes)
            || (b == b'$' && interpolates && is_splice_start(&source[end..]))
        {
            break;
        }
        end += 1;
    }
    tok(StringContent, offset, end)
}

fn is_splice_start(rest: &str) -> bool {
    rest.starts_with("${") || (rest.starts_with('$') && starts_ident(&rest[1..]))
}

fn scan_escape(source: &str, offset: usize) -> Token {
    match escape_len(&source.as_bytes()[offset + 1..]) {
        Some(len) => tok(Escape, offset, offset + 1 + len),
        None => {
            let len = source[offset + 1..].chars().next().map_or(0, char::len_utf8);
            tok(InvalidEscape, offset, offset + 1 + len)
        }
    }
}

/// Length of a valid escape after the backslash.
fn escape_len(rest: &[u8]) -> Option<usize> {
    let hex_run = |n: usize| {
        let digits = rest.get(1..1 + n)?;
        digits.iter().all(u8::is_ascii_hexdigit).then_some(1 + n)
    };
    match *rest.first()? {
        b'u' => hex_run(4),
        b'U' => hex_run(8),
        b'x' => hex_run(2),
        b'0'..=b'7' => Some(rest.iter().take(3).take_while(|b| matches!(b, b'0'..=b'7')).count()),
        b'\n' => Some(1),
        b'\r' => Some(if rest.get(1) == Some(&b'\n') { 2 } else { 1 }),
        b'\'' | b'"' | b'`' | b'$' | b'\\' | b'a' | b'b' | b'e' | b'f' | b'n' | b'r' | b't'
        | b'v' => Some(1),
        _ => None,
    }
}

/// `:` plus specifier up to the closing `}` of a splice.
fn scan_format_spec(source: &str, offset: usize) -> Token {
    let bytes = source.as_bytes();
    let mut end = offset + 1;
    while end < bytes.len() && !matches!(bytes[end], b'}' | b'\'' | b'"' | b'\n') {
        end += 1;
    }
    tok(FormatSpec, offset, end)
}

fn scan_rune(source: &str, offset: usize) -> Token {
    let bytes = source.as_bytes();
    let mut i = offset + 1;
    let mut valid = true;
    loop {
        match bytes.get(i) {
            None | Some(b'\n') => return tok(Garbage, offset, offset + 1),
            Some(b'`') if i == offset + 1 => return tok(Garbage, offset, offset + 2),
            Some(b'`') => break,
            Some(b'\\') => match escape_len(&bytes[i + 1..]) {
                Some(len) => i += 1 + len,
                None => {
                    valid = false;
                    i += 1 + source[i + 1..].chars().next().map_or(0, char::len_utf8);
                }
            },
            Some(_) => i += source[i..].chars().next().map_or(1, char::len_utf8),
        }
    }
    tok(if valid { Rune } else { InvalidEscape }, offset, i + 1)
}

/// Integer and float literals in all bases. A digit outside the base, a trailing `_`
/// or an identifier glued to the literal turns the whole run into `InvalidNumber`.
fn scan_number(source: &str, offset: usize) -> Token {
    let bytes = source.as_bytes();
    let mut i = offset;
    let mut kind = Int;
    let mut valid = true;

    let prefix = if bytes[i] == b'0' {
        bytes.get(i + 1).map(|b| b.to_ascii_lowercase())
    } else {
        None
    };

    match prefix {
        Some(b'x') => {
            i += 2;
            let int_digits = eat_digits(bytes, &mut i, u8::is_ascii_hexdigit);
            let mut has_fraction = false;
            if bytes.get(i) == Some(&b'.') && bytes.get(i + 1).is_some_and(u8::is_ascii_hexdigit) {
                i += 1;
                eat_digits(bytes, &mut i, u8::is_ascii_hexdigit);
                has_fraction = true;
            }
            if matches!(bytes.get(i), Some(b'p' | b'P')) {
                i += 1;
                valid &= eat_exponent_digits(bytes, &mut i);
                kind = Float;
            } else if has_fraction {
                valid = false;
            }
            valid &= int_digits || has_fraction;
        }
        Some(b'b') => {
            i += 2;
            valid &= eat_digits(bytes, &mut i, |b| matches!(b, b'0' | b'1'));
        }
        Some(b'o') => {
            i += 2;
            valid &= eat_digits(bytes, &mut i, |b| matches!(b, b'0'..=b'7'));
        }
        _ => {
            let leading_zero = bytes[i] == b'0';
            eat_digits(bytes, &mut i, u8::is_ascii_digit);
            let int_end = i;
            if bytes.get(i) == Some(&b'.') && bytes.get(i + 1).is_some_and(u8::is_ascii_digit) {
                i += 1;
                eat_digits(bytes, &mut i, u8::is_ascii_digit);
                kind = Float;
            }
            if matches!(bytes.get(i), Some(b'e' | b'E'))
                && bytes
                    .get(i + 1)
                    .is_some_and(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-'))
            {
                i += 1;
                valid &= eat_exponent_digits(bytes, &mut i);
                kind = Float;
            }
            // `0755` is octal
            if kind == Int && leading_zero && int_end > offset + 1 {
                valid &= bytes[offset + 1..int_end]
                    .iter()
                    .all(|b| matches!(b, b'0'..=b'7' | b'_'));
            }
        }
    }

    valid &= bytes[i - 1] != b'_';
    let tail = ident_continue_len(&source[i..]);
    if tail > 0 {
        i += tail;
        valid = false;
    }

    tok(if valid { kind } else { InvalidNumber }, offset, i)
}

/// Consumes digits and `_` separators; true if at least one digit matched.
fn eat_digits(bytes: &[u8], i: &mut usize, is_digit: impl Fn(&u8) -> bool) -> bool {
    let mut seen = false;
    while let Some(b) = bytes.get(*i) {
        if is_digit(b) {
            seen = true;
        } else if *b != b'_' {
            break;
        }
        *i += 1;
    }
    seen
}

fn eat_exponent_digits(bytes: &[u8], i: &mut usize) -> bool {
    if matches!(bytes.get(*i), Some(b'+' | b'-')) {
        *i += 1;
    }
    eat_digits(bytes, i, u8::is_ascii_digit)
}

/// `<stdio.h>` after `#include`.
fn scan_include_path(source: &str, offset: usize) -> Token {
    let end = line_end(source, offset);
    match source[offset..end].find('>') {
        Some(close) => tok(CIncludePath, offset, offset + close + 1),
        None => tok(Garbage, offset, end),
    }
}

/// Rest of a directive line; a trailing `\` joins the next line.
fn scan_directive_body(source: &str, offset: usize) -> Token {
    let mut end = offset;
    loop {
        end = line_end(source, end);
        let continued = source[offset..end].ends_with('\\');
        if !continued || end >= source.len() {
            break;
        }
        end += if source[end..].starts_with("\r\n") { 2 } else { 1 };
    }
    tok(DirectiveBody, offset, end)
}

/// Opaque text between the braces of an `asm`/`sql` block, nested braces balanced.
fn scan_raw_block(source: &str, offset: usize) -> Option<Token> {
    let mut depth = 0u32;
    for (i, b) in source.as_bytes()[offset..].iter().enumerate() {
        match b {
            b'{' => depth += 1,
            b'}' if depth == 0 => {
                return (i > 0).then(|| tok(RawBlockContent, offset, offset + i));
            }
            b'}' => depth -= 1,
            _ => {}
        }
    }
    (source.len() > offset).then(|| tok(RawBlockContent, offset, source.len()))
}

/// Offset of the first `\n`/`\r` at or after `offset`, or end of input.
fn line_end(source: &str, offset: usize) -> usize {
    source[offset..]
        .find(['\n', '\r'])
        .map_or(source.len(), |i| offset + i)
}

pub(crate) fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || is_greek(c)
}

pub(crate) fn is_ident_continue(c: char) -> bool {
    is_ident_start(c) || c.is_ascii_digit()
}

fn is_greek(c: char) -> bool {
    matches!(c, 'α'..='ω' | 'Α'..='Ω' | 'µ')
}

fn is_upper(c: char) -> bool {
    c.is_ascii_uppercase() || matches!(c, 'Α'..='Ω')
}

fn starts_ident(rest: &str) -> bool {
    rest.chars().next().is_some_and(is_ident_start)
}

fn starts_ident_continue(rest: &str) -> bool {
    rest.chars().next().is_some_and(is_ident_continue)
}

fn ident_len(rest: &str) -> usize {
    if !starts_ident(rest) {
        return 0;
    }
    ident_continue_len(rest)
}

fn ident_continue_len(rest: &str) -> usize {
    rest.char_indices()
        .find(|(_, c)| !is_ident_continue(*c))
        .map_or(rest.len(), |(i, _)| i)
}
