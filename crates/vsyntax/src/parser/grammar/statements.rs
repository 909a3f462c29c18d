//! Statements and blocks.

use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::SyntaxKind::{self, *};
use crate::parser::cst::token_sets::{
    ASSIGN_OPS, EXPR_FIRST, ITEM_KEYWORDS, STMT_END, STMT_FIRST, STMT_RECOVERY,
};

impl Parser<'_> {
    pub(crate) fn parse_block(&mut self) {
        if !self.currently_is(BraceOpen) {
            self.error(DiagnosticKind::ExpectedBlock);
            self.missing(BraceOpen);
            return;
        }
        if !self.enter_recursion() {
            return;
        }
        self.start_node(Block);
        let saved = std::mem::replace(&mut self.no_struct_literal, false);
        self.open_delimiter();
        self.block_depth += 1;
        self.parse_statement_list(Some(BraceClose));
        self.block_depth -= 1;
        self.close_delimiter(BraceClose);
        self.no_struct_literal = saved;
        self.finish_node();
        self.exit_recursion();
    }

    /// Statements and declarations up to `closer`, or to end of input.
    pub(crate) fn parse_statement_list(&mut self, closer: Option<SyntaxKind>) {
        loop {
            self.skip_terminators();
            if self.should_stop() {
                break;
            }
            let current = self.current();
            if Some(current) == closer {
                break;
            }
            if current == BraceClose {
                self.error_and_bump_msg(DiagnosticKind::UnexpectedToken, "unmatched `}`");
                continue;
            }
            self.parse_statement();
            self.expect_statement_end();
        }
    }

    fn expect_statement_end(&mut self) {
        if self.should_stop() || self.currently_is_one_of(STMT_END) {
            return;
        }
        if self.currently_is_one_of(STMT_FIRST) {
            self.error(DiagnosticKind::MissingTerminator);
            self.missing(LineTerminator);
            return;
        }
        self.error_recover(
            DiagnosticKind::UnexpectedToken,
            "expected newline or `;` after statement",
            STMT_RECOVERY,
        );
    }

    pub(crate) fn parse_statement(&mut self) {
        match self.current() {
            BraceOpen => self.parse_block(),
            KwReturn => self.parse_return_statement(),
            KwBreak => self.parse_jump_statement(BreakStatement),
            KwContinue => self.parse_jump_statement(ContinueStatement),
            KwGoto => {
                self.start_node(GotoStatement);
                self.bump();
                self.parse_name_as(LabelName);
                self.finish_node();
            }
            KwDefer => {
                self.start_node(DeferStatement);
                self.bump();
                self.parse_block();
                self.finish_node();
            }
            KwGo => {
                self.start_node(GoStatement);
                self.bump();
                self.parse_expr();
                self.finish_node();
            }
            KwAssert => {
                self.start_node(AssertStatement);
                self.bump();
                self.parse_expr();
                if self.eat_token(Comma) {
                    self.parse_expr();
                }
                self.finish_node();
            }
            KwAsm => self.parse_asm_statement(),
            KwFor => self.parse_for_statement(),
            ComptimeFor => {
                self.start_node(ComptimeForStatement);
                self.bump();
                self.parse_for_in_operator();
                self.parse_block();
                self.finish_node();
            }
            Ident if self.next_is(Colon) => self.parse_labeled_statement(),
            KwFn if self.function_declaration_ahead() => self.parse_item(),
            KwFn => self.parse_simple_statement(),
            BracketOpen if self.attribute_ahead() => self.parse_item(),
            kind if ITEM_KEYWORDS.contains(kind) => self.parse_item(),
            kind if EXPR_FIRST.contains(kind) => self.parse_simple_statement(),
            _ => self.error_and_bump_msg(DiagnosticKind::UnexpectedToken, "expected a statement"),
        }
    }

    /// Expression statement, declaration, assignment, `++`/`--` or send.
    pub(crate) fn parse_simple_statement(&mut self) {
        let checkpoint = self.checkpoint();
        self.mut_allowed = true;
        self.parse_expr();
        let mut count = 1;
        while self.eat_token(Comma) {
            self.mut_allowed = true;
            self.parse_expr();
            count += 1;
        }
        self.mut_allowed = false;

        match self.current() {
            ColonEq => {
                self.start_node_at(checkpoint, ExpressionList);
                self.finish_node();
                self.start_node_at(checkpoint, ShortVarDeclaration);
                self.bump();
                self.parse_expression_list();
                self.finish_node();
            }
            op if ASSIGN_OPS.contains(op) => {
                self.start_node_at(checkpoint, ExpressionList);
                self.finish_node();
                self.start_node_at(checkpoint, AssignmentStatement);
                self.bump();
                self.parse_expression_list();
                self.finish_node();
            }
            PlusPlus | MinusMinus if count == 1 => {
                let kind = if self.currently_is(PlusPlus) {
                    IncStatement
                } else {
                    DecStatement
                };
                self.start_node_at(checkpoint, kind);
                self.bump();
                self.finish_node();
            }
            Arrow if count == 1 => {
                self.start_node_at(checkpoint, SendStatement);
                self.bump();
                self.parse_expr();
                self.finish_node();
            }
            _ if count > 1 => {
                self.start_node_at(checkpoint, ExpressionList);
                self.finish_node();
                self.expect(Eq, "`=` or `:=` after the expression list");
            }
            _ => {}
        }
    }

    pub(crate) fn parse_expression_list(&mut self) {
        self.start_node(ExpressionList);
        loop {
            self.parse_expr();
            if !self.eat_token(Comma) {
                break;
            }
        }
        self.finish_node();
    }

    fn parse_return_statement(&mut self) {
        self.start_node(ReturnStatement);
        self.bump_expected(KwReturn);
        if !self.at_statement_end() && self.currently_is_one_of(EXPR_FIRST) {
            self.parse_expression_list();
        }
        self.finish_node();
    }

    /// `break` / `continue` with an optional label.
    fn parse_jump_statement(&mut self, kind: SyntaxKind) {
        self.start_node(kind);
        self.bump();
        if self.currently_is(Ident) && !self.newline_before() {
            self.bump_as(LabelName);
        }
        self.finish_node();
    }

    fn parse_labeled_statement(&mut self) {
        let checkpoint = self.checkpoint();
        self.bump_as(LabelName);
        self.bump_expected(Colon);
        if self.at_statement_end() {
            self.start_node_at(checkpoint, EmptyLabeledStatement);
            self.finish_node();
            return;
        }
        self.start_node_at(checkpoint, LabeledStatement);
        self.parse_statement();
        self.finish_node();
    }

    /// `asm amd64 { ... }`; the body is kept as one raw token.
    fn parse_asm_statement(&mut self) {
        self.start_node(AsmStatement);
        self.bump_expected(KwAsm);
        while self.currently_is(Ident) {
            self.bump_as(Identifier);
        }
        if self.currently_is(BraceOpen) {
            self.open_delimiter();
            self.eat_token(RawBlockContent);
            self.close_delimiter(BraceClose);
        } else {
            self.error(DiagnosticKind::ExpectedBlock);
            self.missing(BraceOpen);
        }
        self.finish_node();
    }

    /// `for {}`, `for cond {}`, `for init; cond; post {}`, `for k, v in xs {}`
    fn parse_for_statement(&mut self) {
        self.start_node(ForStatement);
        self.bump_expected(KwFor);
        if !self.currently_is(BraceOpen) {
            if self.for_in_ahead() {
                self.parse_for_in_operator();
            } else if self.cstyle_for_ahead() {
                self.parse_cstyle_for_clause();
            } else {
                self.parse_condition();
            }
        }
        self.parse_block();
        self.finish_node();
    }

    pub(crate) fn parse_for_in_operator(&mut self) {
        self.start_node(ForInOperator);
        loop {
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
        self.expect(KwIn, "`in`");
        let checkpoint = self.checkpoint();
        self.parse_condition();
        if self.currently_is(DotDot) {
            self.start_node_at(checkpoint, Range);
            self.bump();
            self.parse_condition();
            self.finish_node();
        }
        self.finish_node();
    }

    fn parse_cstyle_for_clause(&mut self) {
        self.start_node(CstyleForClause);
        self.with_struct_literals(false, |p| {
            if !p.currently_is(Semicolon) {
                p.parse_simple_statement();
            }
            p.expect(Semicolon, "`;` after the loop initializer");
            if !p.currently_is(Semicolon) {
                p.parse_expr();
            }
            p.expect(Semicolon, "`;` after the loop condition");
            if !p.currently_is(BraceOpen) {
                p.parse_simple_statement();
            }
        });
        self.finish_node();
    }
}
