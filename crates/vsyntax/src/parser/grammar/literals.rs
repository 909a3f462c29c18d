//! String literals and their interpolations.

use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::SyntaxKind::*;

impl Parser<'_> {
    /// `'...'`, `"..."`, `r'...'`, `c'...'`
    pub(crate) fn parse_string_literal(&mut self) {
        let kind = match self.current_text().as_bytes().first() {
            Some(b'r') => RawStringLiteral,
            Some(b'c') => CStringLiteral,
            _ => InterpretedStringLiteral,
        };
        let open = self.current_span();
        self.start_node(kind);
        self.bump_expected(StringOpen);

        loop {
            match self.current() {
                StringClose => {
                    self.bump();
                    break;
                }
                _ if self.should_stop() => {
                    let range = rowan::TextRange::new(open.start(), self.eof_offset());
                    self.error_at(DiagnosticKind::UnclosedString, range);
                    self.missing(StringClose);
                    break;
                }
                StringContent => self.bump(),
                Escape => self.bump_as(EscapeSequence),
                InvalidEscape => self.error_and_bump(DiagnosticKind::InvalidEscape),
                InterpolationOpen => self.parse_interpolation(),
                Dollar => self.parse_short_interpolation(),
                _ => self.error_and_bump(DiagnosticKind::UnexpectedToken),
            }
        }
        self.finish_node();
    }

    /// `${expr}` or `${expr:fmt}`
    fn parse_interpolation(&mut self) {
        self.start_node(StringInterpolation);
        self.bump_expected(InterpolationOpen);
        self.with_struct_literals(true, |p| p.parse_expr());
        if self.currently_is(FormatSpec) {
            self.bump_as(FormatSpecifier);
        }
        self.expect(InterpolationClose, "`}` to close the interpolation");
        self.finish_node();
    }

    /// `$name`, `$name.field`, `$name.method(args)`
    fn parse_short_interpolation(&mut self) {
        self.start_node(StringInterpolation);
        self.bump_expected(Dollar);
        let checkpoint = self.checkpoint();
        self.parse_identifier();
        loop {
            match self.current() {
                Dot if self.next_is(Ident) => {
                    self.start_node_at(checkpoint, SelectorExpression);
                    self.bump();
                    self.bump_as(FieldIdentifier);
                    self.finish_node();
                }
                ParenOpen if self.current_is_glued() => {
                    self.start_node_at(checkpoint, CallExpression);
                    self.parse_argument_list();
                    self.finish_node();
                }
                _ => break,
            }
        }
        self.finish_node();
    }
}
