//! Type expressions.

use super::utils::{is_binding_language, is_capitalized};
use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::SyntaxKind::{self, *};
use crate::parser::cst::token_sets::TYPE_FIRST;
use crate::parser::lexer::is_builtin_type;

impl Parser<'_> {
    pub(crate) fn parse_type(&mut self) {
        if !self.enter_recursion() {
            return;
        }
        match self.current() {
            Question => self.parse_prefixed_type(OptionType, true),
            Bang => self.parse_prefixed_type(ResultType, true),
            Ellipsis => self.parse_prefixed_type(VariadicType, true),
            Amp | AmpAmp | Star => self.parse_prefixed_type(PointerType, false),
            BracketOpen => self.parse_array_type(),
            ParenOpen => self.parse_multi_return_type(),
            KwFn => self.parse_function_type(),
            Ident => self.parse_named_type(),
            _ => {
                self.error(DiagnosticKind::ExpectedType);
                self.missing(Ident);
            }
        }
        self.exit_recursion();
    }

    /// `?T`, `!T`, `...T`, `&T`; the first three may stand alone.
    fn parse_prefixed_type(&mut self, kind: SyntaxKind, inner_optional: bool) {
        self.start_node(kind);
        self.bump();
        if !inner_optional || self.at_type_start() {
            self.parse_type();
        }
        self.finish_node();
    }

    /// `[]T` or `[N]T`
    fn parse_array_type(&mut self) {
        if self.next_is(BracketClose) {
            self.start_node(ArrayType);
            self.bump_expected(BracketOpen);
            self.bump_expected(BracketClose);
            self.parse_type();
            self.finish_node();
            return;
        }
        self.start_node(FixedArrayType);
        self.open_delimiter();
        self.with_struct_literals(false, |p| p.parse_expr());
        self.close_delimiter(BracketClose);
        self.parse_type();
        self.finish_node();
    }

    /// `(A, B)`
    fn parse_multi_return_type(&mut self) {
        self.start_node(MultiReturnType);
        self.open_delimiter();
        while !self.currently_is(ParenClose) && !self.should_stop() {
            self.parse_type();
            if !self.eat_token(Comma) {
                break;
            }
        }
        self.close_delimiter(ParenClose);
        self.finish_node();
    }

    /// `fn (int, string) bool`
    fn parse_function_type(&mut self) {
        self.start_node(FunctionType);
        self.bump_expected(KwFn);
        if self.currently_is(ParenOpen) {
            self.parse_parameter_list();
        } else {
            self.expect(ParenOpen, "`(` to start the parameter list");
        }
        if self.at_type_start() {
            self.parse_type();
        }
        self.finish_node();
    }

    fn parse_named_type(&mut self) {
        let checkpoint = self.checkpoint();
        let text = self.current_text();
        let next = self.peek_nth(1);

        if text == "map" && next == BracketOpen {
            self.start_node(MapType);
            self.bump();
            self.open_delimiter();
            self.parse_type();
            self.close_delimiter(BracketClose);
            self.parse_type();
            self.finish_node();
            return;
        }
        if text == "chan" && TYPE_FIRST.contains(next) {
            self.start_node(ChannelType);
            self.bump();
            self.parse_type();
            self.finish_node();
            return;
        }

        if next == Dot && self.peek_nth(2) == Ident {
            if is_binding_language(text) {
                self.start_node(BindedType);
                self.bump();
                self.bump_expected(Dot);
                let name_kind = if is_capitalized(self.current_text()) {
                    TypeIdentifier
                } else {
                    Identifier
                };
                self.bump_as(name_kind);
                self.finish_node();
                self.parse_generic_suffix(checkpoint);
                return;
            }
            if !is_capitalized(text) && is_capitalized(self.peek_nth_text(2)) {
                self.start_node(QualifiedType);
                self.bump_as(ModuleIdentifier);
                self.bump_expected(Dot);
                self.bump_as(TypeIdentifier);
                self.finish_node();
                self.parse_generic_suffix(checkpoint);
                return;
            }
        }

        let kind = if is_builtin_type(text) {
            BuiltinType
        } else if text.len() == 1 && is_capitalized(text) {
            TypePlaceholder
        } else {
            TypeIdentifier
        };
        self.bump_as(kind);
        self.parse_generic_suffix(checkpoint);
    }

    /// Wraps the type that started at `checkpoint` when `<` is glued to it.
    fn parse_generic_suffix(&mut self, checkpoint: rowan::Checkpoint) {
        if self.currently_is(Lt) && self.current_is_glued() {
            self.start_node_at(checkpoint, GenericType);
            self.parse_type_arguments();
            self.finish_node();
        }
    }

    /// `<int, string>`
    pub(crate) fn parse_type_arguments(&mut self) {
        self.start_node(TypeParameters);
        self.bump_expected(Lt);
        while !self.currently_is(Gt) && !self.should_stop() {
            self.parse_type();
            if !self.eat_token(Comma) {
                break;
            }
        }
        self.expect(Gt, "`>` to close the type arguments");
        self.finish_node();
    }

    /// `<T, U>` or `[T, U]` on a declaration.
    pub(crate) fn parse_generic_parameters(&mut self) {
        let closer = if self.currently_is(BracketOpen) {
            BracketClose
        } else {
            Gt
        };
        self.start_node(TypeParameters);
        self.bump();
        while !self.currently_is(closer) && !self.should_stop() {
            self.start_node(TypeParameterDeclaration);
            let kind = if self.current_text().len() == 1 {
                TypePlaceholder
            } else {
                TypeIdentifier
            };
            self.parse_name_as(kind);
            self.finish_node();
            if !self.eat_token(Comma) {
                break;
            }
        }
        let what = if closer == Gt {
            "`>` to close the type parameters"
        } else {
            "`]` to close the type parameters"
        };
        self.expect(closer, what);
        self.finish_node();
    }
}
