//! Declarations, attributes and C directives.

use rowan::{Checkpoint, TextRange};

use super::utils::{is_binding_language, is_capitalized};
use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::SyntaxKind::{self, *};
use crate::parser::cst::token_sets::{LIST_RECOVERY, OVERLOADABLE_OPS, TYPE_FIRST};

const DECLARATION_KEYWORDS: [SyntaxKind; 10] = [
    KwModule,
    KwFn,
    KwConst,
    KwGlobal,
    KwType,
    KwStruct,
    KwUnion,
    KwEnum,
    KwInterface,
    KwPub,
];

impl Parser<'_> {
    pub(crate) fn parse_source_file(&mut self) {
        self.start_node(SourceFile);
        self.parse_statement_list(None);
        self.skip_trivia_to_buffer();
        self.drain_trivia();
        self.finish_node();
    }

    /// A declaration, optionally preceded by attributes that become its first child.
    pub(crate) fn parse_item(&mut self) {
        let checkpoint = self.checkpoint();
        if self.attribute_ahead() {
            let start = self.current_span().start();
            self.parse_attributes();
            let end = self.last_non_trivia_end().unwrap_or(start);
            let declaration_follows = self
                .lookahead()
                .find(|k| !matches!(k, LineTerminator | Semicolon))
                .is_some_and(|k| DECLARATION_KEYWORDS.contains(&k));
            if !declaration_follows {
                self.error_at(
                    DiagnosticKind::AttributeWithoutDeclaration,
                    TextRange::new(start, end),
                );
                return;
            }
            self.skip_terminators();
        }

        let current = self.current();
        let keyword = if current == KwPub {
            self.peek_nth(1)
        } else {
            current
        };
        match keyword {
            KwModule if current == KwModule => self.parse_module_clause(checkpoint),
            KwImport if current == KwImport => self.parse_import_declaration(),
            KwConst => self.parse_const_declaration(checkpoint),
            KwGlobal => self.parse_global_declaration(checkpoint),
            KwFn => self.parse_function_declaration(checkpoint),
            KwType => self.parse_type_declaration(checkpoint),
            KwStruct | KwUnion => self.parse_struct_declaration(checkpoint),
            KwEnum => self.parse_enum_declaration(checkpoint),
            KwInterface => self.parse_interface_declaration(checkpoint),
            Directive if current == Directive => self.parse_c_directive(),
            _ => self.error_and_bump_msg(
                DiagnosticKind::UnexpectedToken,
                "expected a declaration after `pub`",
            ),
        }
    }

    /// `[attr]` at file level or `@[attr]` anywhere.
    pub(crate) fn attribute_ahead(&mut self) -> bool {
        self.attribute_at(0)
    }

    fn attribute_at(&mut self, n: usize) -> bool {
        match self.peek_nth(n) {
            AttrOpen => true,
            BracketOpen if self.block_depth == 0 => {
                matches!(
                    (self.peek_nth(n + 1), self.peek_nth(n + 2)),
                    (KwIf, _) | (KwUnsafe, BracketClose) | (Ident, BracketClose | Colon | Semicolon)
                )
            }
            _ => false,
        }
    }

    fn parse_attributes(&mut self) {
        self.start_node(AttributeList);
        loop {
            self.parse_attribute_declaration();
            if self.currently_is(LineTerminator) && self.attribute_at(1) {
                self.bump();
                continue;
            }
            if self.attribute_ahead() {
                continue;
            }
            break;
        }
        self.finish_node();
    }

    /// `[a; b: 'x']` or `@[a]`
    fn parse_attribute_declaration(&mut self) {
        self.start_node(AttributeDeclaration);
        self.open_delimiter();
        loop {
            self.parse_attribute_spec();
            if !self.eat_token(Semicolon) {
                break;
            }
        }
        self.close_delimiter(BracketClose);
        self.finish_node();
    }

    fn parse_attribute_spec(&mut self) {
        self.start_node(AttributeSpec);
        match self.current() {
            KwIf => {
                self.bump();
                self.parse_identifier();
                self.eat_token(Question);
            }
            StringOpen => self.parse_string_literal(),
            _ => {
                self.parse_identifier();
                if self.eat_token(Colon) {
                    self.parse_expr();
                }
            }
        }
        self.finish_node();
    }

    fn parse_module_clause(&mut self, checkpoint: Checkpoint) {
        self.start_node_at(checkpoint, ModuleClause);
        self.bump_expected(KwModule);
        self.parse_identifier();
        self.finish_node();
    }

    /// `import a.b.c as d { x, Y }`
    fn parse_import_declaration(&mut self) {
        self.start_node(ImportDeclaration);
        self.bump_expected(KwImport);

        self.start_node(ImportPath);
        if self.currently_is(Ident) {
            self.bump();
            while self.currently_is(Dot) && self.next_is(Ident) {
                self.bump();
                self.bump();
            }
        } else {
            self.error(DiagnosticKind::ExpectedIdentifier);
            self.missing(Ident);
        }
        self.finish_node();

        if self.currently_is(KwAs) {
            self.start_node(ImportAlias);
            self.bump();
            self.parse_name_as(ModuleIdentifier);
            self.finish_node();
        }

        if self.currently_is(BraceOpen) {
            self.start_node(ImportSymbols);
            self.open_delimiter();
            self.start_node(ImportSymbolsList);
            while !self.currently_is(BraceClose) && !self.should_stop() {
                let kind = if is_capitalized(self.current_text()) {
                    TypeIdentifier
                } else {
                    Identifier
                };
                self.parse_name_as(kind);
                if !self.eat_token(Comma) {
                    break;
                }
            }
            self.finish_node();
            self.close_delimiter(BraceClose);
            self.finish_node();
        }
        self.finish_node();
    }

    /// Parses `spec` once, or repeatedly inside `( ... )`.
    fn parse_grouped(&mut self, spec: fn(&mut Self)) {
        if !self.currently_is(ParenOpen) {
            spec(self);
            return;
        }
        self.open_delimiter();
        loop {
            self.skip_terminators();
            if self.currently_is(ParenClose) || self.should_stop() {
                break;
            }
            spec(self);
            if matches!(self.current(), LineTerminator | Semicolon | ParenClose) {
                continue;
            }
            self.error_recover(
                DiagnosticKind::UnexpectedToken,
                "expected newline after declaration",
                LIST_RECOVERY,
            );
            if !self.currently_is(LineTerminator) {
                break;
            }
        }
        self.close_delimiter(ParenClose);
    }

    fn parse_const_declaration(&mut self, checkpoint: Checkpoint) {
        self.start_node_at(checkpoint, ConstDeclaration);
        self.eat_token(KwPub);
        self.bump_expected(KwConst);
        self.parse_grouped(|p| {
            p.start_node(ConstSpec);
            p.parse_identifier();
            p.expect(Eq, "`=` after the constant name");
            p.parse_expr();
            p.finish_node();
        });
        self.finish_node();
    }

    fn parse_global_declaration(&mut self, checkpoint: Checkpoint) {
        self.start_node_at(checkpoint, GlobalVarDeclaration);
        self.eat_token(KwPub);
        self.bump_expected(KwGlobal);
        self.parse_grouped(|p| {
            let spec = p.checkpoint();
            p.parse_identifier();
            if p.eat_token(Eq) {
                p.start_node_at(spec, GlobalVarSpec);
                p.parse_expr();
            } else {
                p.start_node_at(spec, GlobalVarTypeInitializer);
                p.parse_type();
                if p.eat_token(Eq) {
                    p.parse_expr();
                }
            }
            p.finish_node();
        });
        self.finish_node();
    }

    /// `fn (r T) name<G>(params) ret { body }`
    fn parse_function_declaration(&mut self, checkpoint: Checkpoint) {
        self.start_node_at(checkpoint, FunctionDeclaration);
        self.eat_token(KwPub);
        self.bump_expected(KwFn);
        if self.currently_is(ParenOpen) {
            self.parse_parameter_list();
        }

        let current = self.current();
        if current == Ident && is_binding_language(self.current_text()) && self.next_is(Dot) {
            self.start_node(BindedIdentifier);
            self.bump();
            self.bump_expected(Dot);
            self.parse_identifier();
            self.finish_node();
        } else if OVERLOADABLE_OPS.contains(current) {
            self.bump_as(OverloadableOperator);
        } else {
            self.parse_identifier();
        }

        if self.currently_is(Lt) || (self.currently_is(BracketOpen) && self.current_is_glued()) {
            self.parse_generic_parameters();
        }
        if self.currently_is(ParenOpen) {
            self.parse_parameter_list();
        } else {
            self.expect(ParenOpen, "`(` to start the parameter list");
        }
        if !self.currently_is(BraceOpen) && self.at_type_start() {
            self.parse_type();
        }
        if self.currently_is(BraceOpen) {
            self.parse_block();
        }
        self.finish_node();
    }

    /// `(a int, mut b []string)` or `(int, string)`
    pub(crate) fn parse_parameter_list(&mut self) {
        let named = self.named_parameters_ahead();
        self.start_node(if named {
            ParameterList
        } else {
            TypeOnlyParameterList
        });
        let saved = std::mem::replace(&mut self.no_struct_literal, false);
        self.open_delimiter();
        loop {
            if self.currently_is(ParenClose) || self.should_stop() {
                break;
            }
            if named {
                self.parse_parameter_declaration();
            } else {
                self.parse_type();
            }
            if self.eat_token(Comma) || self.currently_is(ParenClose) {
                continue;
            }
            self.error_recover(
                DiagnosticKind::UnexpectedToken,
                "expected `,` or `)` after parameter",
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

    /// `name type`; the type is omitted for all but the last of `a, b int`.
    fn parse_parameter_declaration(&mut self) {
        self.start_node(ParameterDeclaration);
        if self.currently_is(Ellipsis) && matches!(self.peek_nth(1), Comma | ParenClose) {
            // C variadic `...`
            self.parse_type();
            self.finish_node();
            return;
        }
        self.eat_token(KwMut);
        if self.currently_is(Ident) && self.current_text() == "shared" && self.next_is(Ident) {
            self.bump();
        }
        self.parse_identifier();
        if !matches!(self.current(), Comma | ParenClose) {
            self.parse_type();
        }
        self.finish_node();
    }

    /// `type Name = A | B`
    fn parse_type_declaration(&mut self, checkpoint: Checkpoint) {
        self.start_node_at(checkpoint, TypeDeclaration);
        self.eat_token(KwPub);
        self.bump_expected(KwType);
        self.parse_name_as(TypeIdentifier);
        if self.currently_is(Lt) || (self.currently_is(BracketOpen) && self.current_is_glued()) {
            self.parse_generic_parameters();
        }
        self.expect(Eq, "`=` after the type name");
        loop {
            self.parse_type();
            // variants may continue on the next line
            if self.currently_is(LineTerminator) && self.next_is(Pipe) {
                self.bump();
            }
            if !self.eat_token(Pipe) {
                break;
            }
        }
        self.finish_node();
    }

    /// `struct Foo<T> { ... }`, `union U { ... }`, `struct C.stat { ... }`
    fn parse_struct_declaration(&mut self, checkpoint: Checkpoint) {
        self.start_node_at(checkpoint, StructDeclaration);
        self.eat_token(KwPub);
        self.bump();
        if self.currently_is(Ident) && is_binding_language(self.current_text()) && self.next_is(Dot) {
            self.parse_type();
        } else {
            self.parse_name_as(TypeIdentifier);
        }
        if self.currently_is(Lt) || (self.currently_is(BracketOpen) && self.current_is_glued()) {
            self.parse_generic_parameters();
        }
        self.parse_member_list(StructFieldDeclarationList, "`{` to open the struct body", |p| {
            if p.struct_scope_ahead() {
                p.start_node(StructFieldScope);
                while !p.currently_is(Colon) {
                    p.bump();
                }
                p.bump_expected(Colon);
                p.finish_node();
                return false;
            }
            p.parse_struct_field();
            true
        });
        self.finish_node();
    }

    fn struct_scope_ahead(&mut self) -> bool {
        matches!(
            (self.current(), self.peek_nth(1), self.peek_nth(2)),
            (KwPub, Colon, _) | (KwPub, KwMut, Colon) | (KwMut, Colon, _) | (KwGlobal, Colon, _)
        )
    }

    /// `name type = default [attrs]`, or an embedded type.
    fn parse_struct_field(&mut self) {
        self.start_node(StructFieldDeclaration);
        let current = self.current();
        let named = (current == Ident || current.is_keyword())
            && !is_capitalized(self.current_text())
            && TYPE_FIRST.contains(self.peek_nth(1))
            && !self.nth_is_glued(1);
        if named {
            self.bump_as(FieldIdentifier);
        }
        self.parse_type();
        if self.eat_token(Eq) {
            self.parse_expr();
        }
        self.parse_trailing_attribute();
        self.finish_node();
    }

    fn parse_trailing_attribute(&mut self) {
        if matches!(self.current(), BracketOpen | AttrOpen) && !self.newline_before() {
            self.parse_attribute_declaration();
        }
    }

    /// `enum Color as u8 { red = 1 }`
    fn parse_enum_declaration(&mut self, checkpoint: Checkpoint) {
        self.start_node_at(checkpoint, EnumDeclaration);
        self.eat_token(KwPub);
        self.bump_expected(KwEnum);
        self.parse_name_as(TypeIdentifier);
        if self.eat_token(KwAs) {
            self.parse_type();
        }
        self.parse_member_list(EnumMemberDeclarationList, "`{` to open the enum body", |p| {
            p.start_node(EnumMember);
            p.parse_identifier();
            if p.eat_token(Eq) {
                p.parse_expr();
            }
            p.parse_trailing_attribute();
            p.finish_node();
            true
        });
        self.finish_node();
    }

    /// `interface Speaker { mut: name string  speak() string }`
    fn parse_interface_declaration(&mut self, checkpoint: Checkpoint) {
        self.start_node_at(checkpoint, InterfaceDeclaration);
        self.eat_token(KwPub);
        self.bump_expected(KwInterface);
        self.parse_name_as(TypeIdentifier);
        if self.currently_is(Lt) || (self.currently_is(BracketOpen) && self.current_is_glued()) {
            self.parse_generic_parameters();
        }
        self.parse_member_list(InterfaceSpecList, "`{` to open the interface body", |p| {
            if p.currently_is(KwMut) && p.next_is(Colon) {
                p.start_node(InterfaceFieldScope);
                p.bump();
                p.bump();
                p.finish_node();
                return false;
            }
            if p.currently_is(Ident) && p.next_is(ParenOpen) {
                p.start_node(InterfaceSpec);
                p.bump_as(FieldIdentifier);
                p.parse_parameter_list();
                if p.at_type_start() {
                    p.parse_type();
                }
                p.finish_node();
                return true;
            }
            p.parse_struct_field();
            true
        });
        self.finish_node();
    }

    /// `{ member* }`; `member` returns whether a terminator must follow it.
    fn parse_member_list(
        &mut self,
        kind: SyntaxKind,
        what: &str,
        member: fn(&mut Self) -> bool,
    ) {
        if !self.currently_is(BraceOpen) {
            self.expect(BraceOpen, what);
            return;
        }
        self.start_node(kind);
        let saved = std::mem::replace(&mut self.no_struct_literal, false);
        self.open_delimiter();
        loop {
            self.skip_terminators();
            if self.currently_is(BraceClose) || self.should_stop() {
                break;
            }
            let before = self.pos;
            if member(self) {
                self.expect_member_end("expected newline after member");
            }
            if self.pos == before {
                self.error_and_bump(DiagnosticKind::UnexpectedToken);
            }
        }
        self.close_delimiter(BraceClose);
        self.no_struct_literal = saved;
        self.finish_node();
    }

    /// `#include`, `#flag`, `#define`, `#pkgconfig`; other directives are reported.
    fn parse_c_directive(&mut self) {
        let kind = match self.current_text() {
            "#include" | "#preinclude" | "#postinclude" | "#insert" => CIncludeClause,
            "#flag" => CFlagClause,
            "#define" => CDefineClause,
            "#pkgconfig" => CPkgconfig,
            name => {
                self.start_node(Error);
                self.error_msg(DiagnosticKind::UnknownDirective, name);
                self.bump();
                self.eat_token(DirectiveBody);
                self.finish_node();
                return;
            }
        };
        self.start_node(kind);
        self.bump_expected(Directive);
        match kind {
            CIncludeClause => match self.current() {
                CIncludePath => self.bump(),
                StringOpen => self.parse_string_literal(),
                _ => {
                    self.error_msg(DiagnosticKind::ExpectedToken, "an include path");
                    self.missing(CIncludePath);
                }
            },
            CDefineClause => self.parse_identifier(),
            _ => {}
        }
        self.eat_token(DirectiveBody);
        self.finish_node();
    }
}
