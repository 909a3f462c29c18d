//! Expressions.
//!
//! Binary operators go through a Pratt loop over [`infix_binding_power`]; everything
//! tighter than a binary operator (prefix operators, selectors, calls, indexing,
//! `?`/`!`/`or {}` propagation) is handled by `parse_unary` and `parse_postfix`.

use rowan::Checkpoint;

use super::utils::{is_binding_language, is_capitalized};
use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::SyntaxKind::{self, *};
use crate::parser::cst::token_sets::{EXPR_RECOVERY, LIST_RECOVERY, MEMBER_RECOVERY, PREFIX_OPS};
use crate::parser::lexer::is_builtin_type;

/// Left binding power of a binary operator. All levels are left-associative.
pub(crate) fn infix_binding_power(kind: SyntaxKind) -> Option<u8> {
    let bp = match kind {
        PipePipe => 1,
        AmpAmp => 2,
        EqEq | BangEq | Lt | LtEq | Gt | GtEq | KwIn | NotIn | KwIs | NotIs => 3,
        Plus | Minus | Pipe | Caret => 4,
        Star | Slash | Percent | Shl | Shr | UShr | Amp | AmpCaret => 5,
        KwAs => 6,
        _ => return None,
    };
    Some(bp)
}

impl Parser<'_> {
    pub(crate) fn parse_expr(&mut self) {
        self.parse_expr_bp(0);
    }

    /// Expression in a header where `{` opens the body.
    pub(crate) fn parse_condition(&mut self) {
        self.with_struct_literals(false, |p| p.parse_expr());
    }

    fn parse_expr_bp(&mut self, min_bp: u8) {
        if !self.enter_recursion() {
            return;
        }
        let checkpoint = self.checkpoint();
        self.parse_unary();

        loop {
            let op = self.current();
            let Some(bp) = infix_binding_power(op) else {
                break;
            };
            if bp <= min_bp {
                break;
            }
            let kind = match op {
                KwAs => AsTypeCastExpression,
                KwIs | NotIs => IsExpression,
                KwIn | NotIn => InExpression,
                _ => BinaryExpression,
            };
            self.start_node_at(checkpoint, kind);
            self.bump();
            if matches!(kind, AsTypeCastExpression | IsExpression) {
                self.parse_type();
            } else {
                self.parse_expr_bp(bp);
            }
            self.finish_node();
        }

        self.exit_recursion();
    }

    fn parse_unary(&mut self) {
        if !self.currently_is_one_of(PREFIX_OPS) {
            self.parse_postfix();
            return;
        }
        if !self.enter_recursion() {
            return;
        }
        self.start_node(UnaryExpression);
        self.bump();
        self.parse_unary();
        self.finish_node();
        self.exit_recursion();
    }

    fn parse_postfix(&mut self) {
        let checkpoint = self.checkpoint();
        if !self.parse_primary() {
            return;
        }
        self.parse_postfix_ops(checkpoint);
    }

    fn parse_postfix_ops(&mut self, checkpoint: Checkpoint) {
        loop {
            match self.current() {
                Dot if self.next_is(Dollar) => {
                    self.start_node_at(checkpoint, ComptimeSelectorExpression);
                    self.bump_expected(Dot);
                    self.bump_expected(Dollar);
                    if self.currently_is(ParenOpen) {
                        self.open_delimiter();
                        self.with_struct_literals(true, |p| p.parse_expr());
                        self.close_delimiter(ParenClose);
                    } else {
                        self.parse_identifier();
                    }
                    self.finish_node();
                }
                Dot => {
                    self.start_node_at(checkpoint, SelectorExpression);
                    self.bump_expected(Dot);
                    self.parse_name_as(FieldIdentifier);
                    self.finish_node();
                }
                ParenOpen if !self.newline_before() => self.parse_call(checkpoint),
                Lt if self.current_is_glued() && self.generic_call_ahead() => {
                    self.start_node_at(checkpoint, CallExpression);
                    self.parse_type_arguments();
                    self.parse_argument_list();
                    self.finish_node();
                }
                BracketOpen if self.current_is_glued() => self.parse_index(checkpoint),
                Question if !self.newline_before() => {
                    self.start_node_at(checkpoint, OptionPropagator);
                    self.bump();
                    self.finish_node();
                }
                Bang if self.current_is_glued() => {
                    self.start_node_at(checkpoint, OptionPropagator);
                    self.bump();
                    self.finish_node();
                }
                KwOr if self.next_is(BraceOpen) => {
                    self.start_node_at(checkpoint, OptionPropagator);
                    self.start_node(OrBlock);
                    self.bump();
                    self.parse_block();
                    self.finish_node();
                    self.finish_node();
                }
                _ => break,
            }
        }
    }

    fn parse_call(&mut self, checkpoint: Checkpoint) {
        if self.special_call_ahead() {
            self.start_node_at(checkpoint, SpecialCallExpression);
            self.parse_special_arguments();
        } else {
            self.start_node_at(checkpoint, CallExpression);
            self.parse_argument_list();
        }
        self.finish_node();
    }

    /// `a[i]`, `a[lo..hi]`, `a[..hi]`, `a[lo..]`
    fn parse_index(&mut self, checkpoint: Checkpoint) {
        let saved = std::mem::replace(&mut self.no_struct_literal, false);
        self.open_delimiter();
        let mut kind = IndexExpression;
        if !self.currently_is(DotDot) {
            self.parse_expr();
        }
        if self.eat_token(DotDot) {
            kind = SliceExpression;
            if !self.currently_is(BracketClose) {
                self.parse_expr();
            }
        }
        self.close_delimiter(BracketClose);
        self.no_struct_literal = saved;
        self.start_node_at(checkpoint, kind);
        self.finish_node();
    }

    pub(crate) fn parse_argument_list(&mut self) {
        self.start_node(ArgumentList);
        let saved = std::mem::replace(&mut self.no_struct_literal, false);
        self.open_delimiter();
        loop {
            if self.currently_is(ParenClose) || self.should_stop() {
                break;
            }
            self.parse_argument();
            if self.eat_token(Comma) || self.currently_is(ParenClose) {
                continue;
            }
            if self.newline_before() && !self.currently_is_one_of(EXPR_RECOVERY) {
                continue;
            }
            self.error_recover(
                DiagnosticKind::UnexpectedToken,
                "expected `,` or `)` after argument",
                LIST_RECOVERY,
            );
            if !self.eat_token(Comma) {
                break;
            }
        }
        self.close_delimiter(ParenClose);
        self.no_struct_literal = saved;
        self.finish_node();
    }

    fn parse_argument(&mut self) {
        let current = self.current();
        if (current == Ident || current.is_keyword()) && self.next_is(Colon) {
            self.start_node(KeyedElement);
            self.bump_as(FieldIdentifier);
            self.bump_expected(Colon);
            self.parse_expr();
            self.finish_node();
            return;
        }
        self.mut_allowed = current == KwMut;
        self.parse_expr();
    }

    /// `(T)` or `(T, expr)` where the first argument is a type.
    fn parse_special_arguments(&mut self) {
        self.start_node(SpecialArgumentList);
        let saved = std::mem::replace(&mut self.no_struct_literal, false);
        self.open_delimiter();
        self.parse_type();
        while self.eat_token(Comma) {
            if self.currently_is(ParenClose) {
                break;
            }
            self.parse_expr();
        }
        self.close_delimiter(ParenClose);
        self.no_struct_literal = saved;
        self.finish_node();
    }

    /// Produces one operand; `false` when nothing usable was found.
    fn parse_primary(&mut self) -> bool {
        let mut_allowed = std::mem::take(&mut self.mut_allowed);
        match self.current() {
            Int => self.bump_as(IntLiteral),
            Float => self.bump_as(FloatLiteral),
            Rune => self.bump_as(RuneLiteral),
            KwNone => self.bump_as(NoneLiteral),
            KwTrue => self.bump_as(TrueLiteral),
            KwFalse => self.bump_as(FalseLiteral),
            PseudoComptimeIdent => self.bump_as(PseudoComptimeIdentifier),
            StringOpen => self.parse_string_literal(),
            Ident => self.parse_identifier_operand(),
            Dollar => {
                self.start_node(ComptimeIdentifier);
                self.bump();
                self.parse_identifier();
                self.finish_node();
            }
            Dot if self.next_is(Ident) => {
                self.start_node(TypeSelectorExpression);
                self.bump();
                self.bump_as(FieldIdentifier);
                self.finish_node();
            }
            ParenOpen => {
                self.start_node(ParenthesizedExpression);
                let saved = std::mem::replace(&mut self.no_struct_literal, false);
                self.open_delimiter();
                self.parse_expr();
                self.close_delimiter(ParenClose);
                self.no_struct_literal = saved;
                self.finish_node();
            }
            BracketOpen => self.parse_bracket_operand(),
            BraceOpen if !self.no_struct_literal => self.parse_map_literal(),
            Ellipsis => {
                self.start_node(SpreadOperator);
                self.bump();
                self.parse_unary();
                self.finish_node();
            }
            KwMut => {
                if !mut_allowed {
                    self.error(DiagnosticKind::MisplacedMut);
                }
                self.start_node(MutableExpression);
                self.bump();
                self.eat_token(KwStatic);
                self.parse_unary();
                self.finish_node();
            }
            KwFn => self.parse_fn_literal(),
            KwIf => self.parse_if_expression(),
            ComptimeIf => self.parse_comptime_if_expression(),
            KwMatch => self.parse_match_expression(),
            KwSelect => self.parse_select_expression(),
            KwLock | KwRlock => self.parse_lock_expression(),
            KwUnsafe => {
                self.start_node(UnsafeExpression);
                self.bump();
                self.parse_block();
                self.finish_node();
            }
            kind if kind.is_error() && !self.eof() => {
                self.error_and_bump(DiagnosticKind::UnexpectedToken);
            }
            _ if self.should_stop() || self.currently_is_one_of(EXPR_RECOVERY) => {
                self.error(DiagnosticKind::ExpectedExpression);
                self.missing(Ident);
                return false;
            }
            _ => {
                self.error_and_bump(DiagnosticKind::ExpectedExpression);
                return false;
            }
        }
        true
    }

    fn parse_identifier_operand(&mut self) {
        let text = self.current_text();
        let next = self.peek_nth(1);

        if text == "sql" && next == Ident && self.sql_header_ahead() {
            self.parse_sql_expression();
            return;
        }
        if is_binding_language(text) && next == Dot && self.peek_nth(2) == Ident {
            if self.peek_nth(3) == BraceOpen && self.nth_is_glued(3) && !self.no_struct_literal {
                self.parse_type_operand();
                return;
            }
            self.start_node(BindedIdentifier);
            self.bump();
            self.bump_expected(Dot);
            self.bump_as(Identifier);
            self.finish_node();
            return;
        }
        if is_builtin_type(text) && next == ParenOpen && self.nth_is_glued(1) {
            self.parse_type_operand();
            return;
        }
        let type_like = (text == "map" && next == BracketOpen)
            || (text == "chan" && next == Ident)
            || is_capitalized(text)
            || self.qualified_type_ahead();
        if type_like {
            self.parse_type_operand();
            return;
        }
        self.bump_as(Identifier);
    }

    /// A type in operand position, optionally initialized, cast or selected from.
    fn parse_type_operand(&mut self) {
        let checkpoint = self.checkpoint();
        self.parse_type();
        self.parse_type_operand_suffix(checkpoint);
    }

    fn parse_type_operand_suffix(&mut self, checkpoint: Checkpoint) {
        match self.current() {
            BraceOpen => {
                let misplaced = self.no_struct_literal;
                if misplaced && !self.literal_in_header_ahead() {
                    return;
                }
                if misplaced {
                    self.error(DiagnosticKind::CompositeLiteralInCondition);
                }
                self.start_node_at(checkpoint, TypeInitializer);
                self.parse_literal_value();
                self.finish_node();
                if misplaced {
                    self.start_node_at(checkpoint, Error);
                    self.finish_node();
                }
            }
            ParenOpen if !self.newline_before() => {
                self.start_node_at(checkpoint, TypeCastExpression);
                let saved = std::mem::replace(&mut self.no_struct_literal, false);
                self.open_delimiter();
                self.parse_expr();
                self.close_delimiter(ParenClose);
                self.no_struct_literal = saved;
                self.finish_node();
            }
            Dot if self.next_is(Ident) => {
                self.start_node_at(checkpoint, TypeSelectorExpression);
                self.bump_expected(Dot);
                self.bump_as(FieldIdentifier);
                self.finish_node();
            }
            _ => {}
        }
    }

    /// `{ field: value, ... }`
    fn parse_literal_value(&mut self) {
        self.start_node(LiteralValue);
        let saved = std::mem::replace(&mut self.no_struct_literal, false);
        self.open_delimiter();
        loop {
            while matches!(self.current(), Comma | LineTerminator | Semicolon) {
                self.bump();
            }
            if self.currently_is(BraceClose) || self.should_stop() {
                break;
            }
            self.parse_literal_element();
            if matches!(self.current(), Comma | LineTerminator | Semicolon | BraceClose) {
                continue;
            }
            self.error_recover(
                DiagnosticKind::UnexpectedToken,
                "expected `,` or `}` after field",
                MEMBER_RECOVERY.union(LIST_RECOVERY),
            );
            if !matches!(self.current(), Comma | LineTerminator) {
                break;
            }
        }
        self.close_delimiter(BraceClose);
        self.no_struct_literal = saved;
        self.finish_node();
    }

    fn parse_literal_element(&mut self) {
        let current = self.current();
        if (current == Ident || current.is_keyword()) && self.next_is(Colon) {
            self.start_node(KeyedElement);
            self.bump_as(FieldIdentifier);
            self.bump_expected(Colon);
            self.parse_expr();
            self.finish_node();
            return;
        }
        if current == Ellipsis {
            self.parse_expr();
            return;
        }
        self.start_node(Element);
        self.parse_expr();
        self.finish_node();
    }

    /// `{ key: value, ... }` without a type in front.
    fn parse_map_literal(&mut self) {
        self.start_node(Map);
        self.open_delimiter();
        loop {
            while matches!(self.current(), Comma | LineTerminator | Semicolon) {
                self.bump();
            }
            if self.currently_is(BraceClose) || self.should_stop() {
                break;
            }
            self.start_node(KeyedElement);
            self.parse_expr();
            self.expect(Colon, "`:` between key and value");
            self.parse_expr();
            self.finish_node();
            if matches!(self.current(), Comma | LineTerminator | Semicolon | BraceClose) {
                continue;
            }
            self.error_recover(
                DiagnosticKind::UnexpectedToken,
                "expected `,` or `}` after map entry",
                MEMBER_RECOVERY.union(LIST_RECOVERY),
            );
            if !matches!(self.current(), Comma | LineTerminator) {
                break;
            }
        }
        self.close_delimiter(BraceClose);
        self.finish_node();
    }

    /// `[1, 2, 3]`, `[1, 2]!`, or an array type used as an operand (`[]int{}`, `[]u8(s)`).
    fn parse_bracket_operand(&mut self) {
        if self.next_is(BracketClose) || self.fixed_array_type_ahead() {
            self.parse_type_operand();
            return;
        }

        let checkpoint = self.checkpoint();
        let saved = std::mem::replace(&mut self.no_struct_literal, false);
        self.open_delimiter();
        loop {
            while self.eat_token(Comma) {}
            if self.currently_is(BracketClose) || self.should_stop() {
                break;
            }
            self.parse_expr();
            if self.eat_token(Comma) || self.currently_is(BracketClose) {
                continue;
            }
            if self.newline_before() && !self.currently_is_one_of(EXPR_RECOVERY) {
                continue;
            }
            self.error_recover(
                DiagnosticKind::UnexpectedToken,
                "expected `,` or `]` after element",
                LIST_RECOVERY,
            );
            if !self.eat_token(Comma) {
                break;
            }
        }
        self.close_delimiter(BracketClose);
        self.no_struct_literal = saved;

        let kind = if self.currently_is(Bang) && self.current_is_glued() {
            self.bump();
            FixedArray
        } else {
            Array
        };
        self.start_node_at(checkpoint, kind);
        self.finish_node();
    }

    /// `fn [captured] (params) ret { body }`
    fn parse_fn_literal(&mut self) {
        self.start_node(FnLiteral);
        self.bump_expected(KwFn);
        if self.currently_is(BracketOpen) {
            self.start_node(ExposedVariablesList);
            self.open_delimiter();
            while !self.currently_is(BracketClose) && !self.should_stop() {
                if self.currently_is(KwMut) {
                    self.start_node(MutableExpression);
                    self.bump();
                    self.parse_identifier();
                    self.finish_node();
                } else {
                    self.parse_identifier();
                }
                if !self.eat_token(Comma) {
                    break;
                }
            }
            self.close_delimiter(BracketClose);
            self.finish_node();
        }
        if self.currently_is(ParenOpen) {
            self.parse_parameter_list();
        } else {
            self.expect(ParenOpen, "`(` to start the parameter list");
        }
        if !self.currently_is(BraceOpen) && self.at_type_start() {
            self.parse_type();
        }
        self.parse_block();
        self.finish_node();
    }

    fn parse_if_expression(&mut self) {
        if !self.enter_recursion() {
            return;
        }
        self.start_node(IfExpression);
        self.bump_expected(KwIf);
        self.parse_if_header();
        self.parse_block();
        if self.eat_else_continuation(KwElse) {
            if self.currently_is(KwIf) {
                self.parse_if_expression();
            } else {
                self.parse_block();
            }
        }
        self.finish_node();
        self.exit_recursion();
    }

    /// Condition, or a guard such as `x := opt()`.
    fn parse_if_header(&mut self) {
        let checkpoint = self.checkpoint();
        self.parse_condition();
        if !matches!(self.current(), Comma | ColonEq) {
            return;
        }
        while self.eat_token(Comma) {
            self.parse_condition();
        }
        self.start_node_at(checkpoint, ExpressionList);
        self.finish_node();
        self.start_node_at(checkpoint, ShortVarDeclaration);
        self.expect(ColonEq, "`:=` in the guard");
        self.start_node(ExpressionList);
        self.parse_condition();
        self.finish_node();
        self.finish_node();
    }

    /// Consumes `else` (or `$else`), also when it sits on the line after `}`.
    fn eat_else_continuation(&mut self, else_kind: SyntaxKind) -> bool {
        if self.currently_is(LineTerminator) && self.next_is(else_kind) {
            self.bump();
        }
        self.eat_token(else_kind)
    }

    fn parse_comptime_if_expression(&mut self) {
        if !self.enter_recursion() {
            return;
        }
        self.start_node(ComptimeIfExpression);
        self.bump_expected(ComptimeIf);
        self.parse_condition();
        self.parse_block();
        if self.eat_else_continuation(ComptimeElse) {
            if self.currently_is(ComptimeIf) {
                self.parse_comptime_if_expression();
            } else {
                self.parse_block();
            }
        }
        self.finish_node();
        self.exit_recursion();
    }

    fn parse_match_expression(&mut self) {
        self.start_node(MatchExpression);
        self.bump_expected(KwMatch);
        self.parse_condition();
        if !self.currently_is(BraceOpen) {
            self.error(DiagnosticKind::ExpectedBlock);
            self.missing(BraceOpen);
            self.finish_node();
            return;
        }
        let saved = std::mem::replace(&mut self.no_struct_literal, false);
        self.open_delimiter();
        loop {
            self.skip_terminators();
            if self.currently_is(BraceClose) || self.should_stop() {
                break;
            }
            if self.currently_is(KwElse) {
                self.start_node(DefaultCase);
                self.bump();
                self.parse_block();
                self.finish_node();
            } else {
                self.start_node(ExpressionCase);
                if self.type_list_ahead() {
                    self.parse_type_list();
                } else {
                    loop {
                        self.parse_case_value();
                        if !self.eat_token(Comma) {
                            break;
                        }
                    }
                }
                self.parse_block();
                self.finish_node();
            }
            self.expect_member_end("expected a new match arm");
        }
        self.close_delimiter(BraceClose);
        self.no_struct_literal = saved;
        self.finish_node();
    }

    /// `A | B | mod.C`
    fn parse_type_list(&mut self) {
        self.start_node(TypeList);
        self.parse_type();
        while self.eat_token(Pipe) {
            self.parse_type();
        }
        self.finish_node();
    }

    /// `value` or `lo...hi`
    fn parse_case_value(&mut self) {
        let checkpoint = self.checkpoint();
        self.parse_condition();
        if matches!(self.current(), DotDot | Ellipsis) {
            self.start_node_at(checkpoint, Range);
            self.bump();
            self.parse_condition();
            self.finish_node();
        }
    }

    /// After a member of a `{}` body: a terminator, a line break or the closing brace.
    ///
    /// A line break without a terminator happens before `else` and `.name`, which the
    /// scanner treats as continuations.
    pub(crate) fn expect_member_end(&mut self, message: &str) {
        if matches!(self.current(), LineTerminator | Semicolon | BraceClose)
            || self.newline_before()
            || self.should_stop()
        {
            return;
        }
        self.error_recover(DiagnosticKind::UnexpectedToken, message, MEMBER_RECOVERY);
    }

    fn parse_select_expression(&mut self) {
        self.start_node(SelectExpression);
        self.bump_expected(KwSelect);
        if !self.currently_is(BraceOpen) {
            self.error(DiagnosticKind::ExpectedBlock);
            self.missing(BraceOpen);
            self.finish_node();
            return;
        }
        self.open_delimiter();
        loop {
            self.skip_terminators();
            if self.currently_is(BraceClose) || self.should_stop() {
                break;
            }
            match self.current() {
                KwElse => {
                    self.start_node(SelectDefaultBranch);
                    self.bump();
                }
                Gt => {
                    self.start_node(SelectDefaultBranch);
                    self.bump();
                    self.parse_condition();
                }
                _ => {
                    self.start_node(SelectBranch);
                    self.with_struct_literals(false, |p| p.parse_simple_statement());
                }
            }
            self.parse_block();
            self.finish_node();
            self.expect_member_end("expected a new select branch");
        }
        self.close_delimiter(BraceClose);
        self.finish_node();
    }

    /// `lock a, b { ... }`, `rlock x { ... }`
    fn parse_lock_expression(&mut self) {
        self.start_node(LockExpression);
        self.bump();
        if !self.currently_is(BraceOpen) {
            loop {
                self.parse_condition();
                if !self.eat_token(Comma) {
                    break;
                }
            }
        }
        self.parse_block();
        self.finish_node();
    }

    /// `sql db { select from User }`
    fn parse_sql_expression(&mut self) {
        self.start_node(SqlExpression);
        self.bump_expected(Ident);
        let checkpoint = self.checkpoint();
        self.parse_identifier();
        while self.currently_is(Dot) {
            self.start_node_at(checkpoint, SelectorExpression);
            self.bump();
            self.parse_name_as(FieldIdentifier);
            self.finish_node();
        }
        self.open_delimiter();
        self.eat_token(RawBlockContent);
        self.close_delimiter(BraceClose);
        self.finish_node();
    }
}
