use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::SyntaxKind::{self, *};
use crate::parser::cst::token_sets::{STMT_END, TYPE_FIRST};
use crate::parser::lexer::{is_builtin_type, token_text};

/// How far bounded lookahead scans before giving up.
const LOOKAHEAD_LIMIT: usize = 64;

pub(super) fn is_capitalized(text: &str) -> bool {
    text.chars().next().is_some_and(|c| c.is_ascii_uppercase() || ('Α'..='Ω').contains(&c))
}

/// `C.name` and `JS.name` bind foreign symbols.
pub(super) fn is_binding_language(text: &str) -> bool {
    matches!(text, "C" | "JS")
}

impl<'src> Parser<'src> {
    /// Significant tokens from the current one on: `(index, kind)`.
    pub(super) fn significant_ahead(&mut self) -> Vec<(usize, SyntaxKind)> {
        self.skip_trivia_to_buffer();
        self.ensure_progress();
        self.tokens[self.pos..]
            .iter()
            .enumerate()
            .filter(|(_, t)| !t.kind.is_trivia())
            .take(LOOKAHEAD_LIMIT)
            .map(|(i, t)| (self.pos + i, t.kind))
            .collect()
    }

    pub(super) fn text_at(&self, index: usize) -> &'src str {
        token_text(self.source, &self.tokens[index])
    }

    pub(super) fn glued_at(&self, index: usize) -> bool {
        index > 0 && !self.tokens[index - 1].kind.is_trivia()
    }

    pub(super) fn at_statement_end(&mut self) -> bool {
        self.should_stop() || self.currently_is_one_of(STMT_END)
    }

    pub(super) fn skip_terminators(&mut self) {
        while matches!(self.current(), LineTerminator | Semicolon) {
            self.bump();
        }
    }

    /// A type may start here, on the same line.
    pub(super) fn at_type_start(&mut self) -> bool {
        self.currently_is_one_of(TYPE_FIRST) && !self.newline_before()
    }

    pub(super) fn parse_identifier(&mut self) {
        self.parse_name_as(Identifier);
    }

    /// Wraps an identifier (or a keyword used as a name) in `kind`.
    pub(super) fn parse_name_as(&mut self, kind: SyntaxKind) {
        let current = self.current();
        if current == Ident || current.is_keyword() {
            self.bump_as(kind);
            return;
        }
        self.error(DiagnosticKind::ExpectedIdentifier);
        self.missing(Ident);
    }

    /// Runs `f` with composite literals enabled or disabled.
    pub(super) fn with_struct_literals<T>(
        &mut self,
        allowed: bool,
        f: impl FnOnce(&mut Self) -> T,
    ) -> T {
        let saved = std::mem::replace(&mut self.no_struct_literal, !allowed);
        let result = f(self);
        self.no_struct_literal = saved;
        result
    }

    /// Index just past the bracket group opened at `ahead[start]`.
    fn skip_group(ahead: &[(usize, SyntaxKind)], start: usize) -> Option<usize> {
        let mut depth = 0i32;
        for (offset, (_, kind)) in ahead[start..].iter().enumerate() {
            match kind {
                ParenOpen | BracketOpen | BraceOpen | AttrOpen => depth += 1,
                ParenClose | BracketClose | BraceClose => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(start + offset + 1);
                    }
                }
                _ => {}
            }
        }
        None
    }

    /// At `<`: type arguments closed by `>` and followed by `(`.
    pub(super) fn generic_call_ahead(&mut self) -> bool {
        let ahead = self.significant_ahead();
        let mut depth = 0i32;
        for (i, (_, kind)) in ahead.iter().enumerate() {
            match kind {
                Lt => depth += 1,
                Gt => depth -= 1,
                Shr => depth -= 2,
                Ident | Comma | Dot | BracketOpen | BracketClose | Amp | Question | Int | KwFn
                | Ellipsis => {}
                _ => return false,
            }
            if depth <= 0 {
                return depth == 0 && ahead.get(i + 1).is_some_and(|(_, k)| *k == ParenOpen);
            }
        }
        false
    }

    /// At `[`: `[N]T` where `T` is glued to the closing bracket.
    pub(super) fn fixed_array_type_ahead(&mut self) -> bool {
        let ahead = self.significant_ahead();
        match ahead.as_slice() {
            [_, (_, Int | Ident), (_, BracketClose), (index, next), ..] => {
                matches!(next, Ident | BracketOpen | Amp | Question | KwFn) && self.glued_at(*index)
            }
            _ => false,
        }
    }

    /// At `fn`: a declaration rather than a fn literal.
    pub(super) fn function_declaration_ahead(&mut self) -> bool {
        let ahead = self.significant_ahead();
        match ahead.get(1).map(|(_, k)| *k) {
            Some(Ident) => true,
            Some(ParenOpen) => {
                // `fn (r T) name(` is a method, `fn (x int) {` a literal
                let Some(after) = Self::skip_group(&ahead, 1) else {
                    return false;
                };
                match ahead.get(after).map(|(_, k)| *k) {
                    Some(Ident) => true,
                    Some(kind) => {
                        crate::parser::cst::token_sets::OVERLOADABLE_OPS.contains(kind)
                            && ahead.get(after + 1).is_some_and(|(_, k)| *k == ParenOpen)
                    }
                    None => false,
                }
            }
            _ => false,
        }
    }

    /// At the token after `for`: `[mut] a, [mut] b in`.
    pub(super) fn for_in_ahead(&mut self) -> bool {
        let ahead = self.significant_ahead();
        let mut expect_name = true;
        for (_, kind) in ahead.iter() {
            match (expect_name, kind) {
                (true, KwMut) => {}
                (true, Ident) => expect_name = false,
                (false, Comma) => expect_name = true,
                (false, KwIn) => return true,
                _ => return false,
            }
        }
        false
    }

    /// At the token after `for`: a `;` before the body opens.
    pub(super) fn cstyle_for_ahead(&mut self) -> bool {
        let ahead = self.significant_ahead();
        let mut depth = 0u32;
        for (_, kind) in ahead.iter() {
            match kind {
                Semicolon if depth == 0 => return true,
                BraceOpen if depth == 0 => return false,
                ParenOpen | BracketOpen | BraceOpen => depth += 1,
                ParenClose | BracketClose | BraceClose => depth = depth.saturating_sub(1),
                LineTerminator => return false,
                _ => {}
            }
        }
        false
    }

    /// At `(`: a parameter list whose entries carry names.
    pub(super) fn named_parameters_ahead(&mut self) -> bool {
        let ahead = self.significant_ahead();
        let mut depth = 0u32;
        for (i, (index, kind)) in ahead.iter().enumerate() {
            match kind {
                ParenOpen | BracketOpen => depth += 1,
                ParenClose | BracketClose => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        return false;
                    }
                }
                KwMut if depth == 1 => return true,
                Ident if depth == 1 => {
                    let text = self.text_at(*index);
                    let after_dot = i > 0 && ahead[i - 1].1 == Dot;
                    let next = ahead.get(i + 1).map(|(_, k)| *k);
                    let type_follows = matches!(
                        next,
                        Some(
                            Ident
                                | BracketOpen
                                | Amp
                                | AmpAmp
                                | Question
                                | Bang
                                | KwFn
                                | Ellipsis
                                | Star
                        )
                    );
                    if type_follows && !after_dot && !matches!(text, "map" | "chan") {
                        return true;
                    }
                }
                _ => {}
            }
        }
        false
    }

    /// At `sql`: a database name or selector, then the raw query block.
    pub(super) fn sql_header_ahead(&mut self) -> bool {
        let ahead = self.significant_ahead();
        let kind_at = |i: usize| ahead.get(i).map(|(_, k)| *k);
        let mut i = 2;
        while kind_at(i) == Some(Dot) && kind_at(i + 1) == Some(Ident) {
            i += 2;
        }
        kind_at(1) == Some(Ident) && kind_at(i) == Some(BraceOpen)
    }

    /// At a match arm value: sum-type variants joined by `|`, like `Ident | ast.Lit`.
    pub(super) fn type_list_ahead(&mut self) -> bool {
        let ahead = self.significant_ahead();
        let kind_at = |i: usize| ahead.get(i).map(|(_, k)| *k);
        if kind_at(0) != Some(Ident) {
            return false;
        }
        let (name, pipe) = if kind_at(1) == Some(Dot) && kind_at(2) == Some(Ident) {
            (ahead[2].0, 3)
        } else {
            (ahead[0].0, 1)
        };
        let name = self.text_at(name);
        kind_at(pipe) == Some(Pipe) && (is_capitalized(name) || is_builtin_type(name))
    }

    /// At `{` inside a header: a glued composite literal that is followed by the real body.
    pub(super) fn literal_in_header_ahead(&mut self) -> bool {
        if !self.current_is_glued() {
            return false;
        }
        let ahead = self.significant_ahead();
        let Some(after) = Self::skip_group(&ahead, 0) else {
            return false;
        };
        matches!(ahead.get(after).map(|(_, k)| *k), Some(BraceOpen | Dot))
    }

    /// At `(`: the first argument can only be a type (`sizeof(int)`, `json.decode(Foo, s)`).
    pub(super) fn special_call_ahead(&mut self) -> bool {
        let ahead = self.significant_ahead();
        let kind_at = |i: usize| ahead.get(i).map(|(_, k)| *k);
        let ends_arg = |k: Option<SyntaxKind>| matches!(k, Some(ParenClose | Comma));
        match kind_at(1) {
            Some(BracketOpen) => {
                kind_at(2) == Some(BracketClose)
                    && kind_at(3) == Some(Ident)
                    && ends_arg(kind_at(4))
            }
            Some(Question) => true,
            Some(Amp) => {
                kind_at(2) == Some(Ident)
                    && is_capitalized(self.text_at(ahead[2].0))
                    && ends_arg(kind_at(3))
            }
            Some(Ident) => {
                let text = self.text_at(ahead[1].0);
                if text == "map" && kind_at(2) == Some(BracketOpen) {
                    return true;
                }
                if is_binding_language(text) {
                    return false;
                }
                if kind_at(2) == Some(Dot) && kind_at(3) == Some(Ident) {
                    return is_capitalized(self.text_at(ahead[3].0)) && ends_arg(kind_at(4));
                }
                let type_like = is_capitalized(text) || crate::parser::lexer::is_builtin_type(text);
                type_like && ends_arg(kind_at(2))
            }
            _ => false,
        }
    }

    /// At an identifier: `mod.Type` used as a type in expression position.
    pub(super) fn qualified_type_ahead(&mut self) -> bool {
        let ahead = self.significant_ahead();
        let [_, (_, Dot), (name, Ident), rest @ ..] = ahead.as_slice() else {
            return false;
        };
        if !is_capitalized(self.text_at(*name)) {
            return false;
        }
        match rest.first() {
            Some((_, BraceOpen)) => !self.no_struct_literal,
            Some((index, Lt)) => self.glued_at(*index),
            Some((_, ParenOpen)) => true,
            _ => false,
        }
    }
}
