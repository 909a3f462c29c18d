//! Syntax kinds for V source code.
//!
//! `SyntaxKind` serves dual roles: token kinds (from the scanner) and node kinds (from the parser).
//! Logos derives recognition of the regular tokens; everything context-dependent (strings,
//! numbers, comments, directives, terminators) is produced by the hand-written scanner, and
//! node kinds carry no token attributes at all.
//! `VLang` implements Rowan's `Language` trait for tree construction.

use logos::Logos;
use rowan::Language;

/// All token and node kinds. Tokens first, then nodes, then `__LAST` sentinel.
/// `#[repr(u16)]` enables safe transmute in `kind_from_raw`.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum SyntaxKind {
    #[token("(")]
    ParenOpen = 0,

    #[token(")")]
    ParenClose,

    #[token("[")]
    BracketOpen,

    #[token("]")]
    BracketClose,

    #[token("{")]
    BraceOpen,

    #[token("}")]
    BraceClose,

    #[token(",")]
    Comma,

    #[token(";")]
    Semicolon,

    #[token(":")]
    Colon,

    #[token(".")]
    Dot,

    #[token("..")]
    DotDot,

    #[token("...")]
    Ellipsis,

    #[token("?")]
    Question,

    #[token("!")]
    Bang,

    #[token("~")]
    Tilde,

    #[token("@")]
    At,

    /// `@[` opening a new-style attribute.
    #[token("@[")]
    AttrOpen,

    /// `$` of a compile-time identifier or a short interpolation splice.
    #[token("$")]
    Dollar,

    #[token("=")]
    Eq,

    #[token(":=")]
    ColonEq,

    #[token("+=")]
    PlusEq,

    #[token("-=")]
    MinusEq,

    #[token("*=")]
    StarEq,

    #[token("/=")]
    SlashEq,

    #[token("%=")]
    PercentEq,

    #[token("&=")]
    AmpEq,

    #[token("|=")]
    PipeEq,

    #[token("^=")]
    CaretEq,

    #[token("<<=")]
    ShlEq,

    #[token(">>=")]
    ShrEq,

    #[token(">>>=")]
    UShrEq,

    #[token("&^=")]
    AmpCaretEq,

    #[token("+")]
    Plus,

    #[token("-")]
    Minus,

    #[token("*")]
    Star,

    #[token("/")]
    Slash,

    #[token("%")]
    Percent,

    #[token("<<")]
    Shl,

    #[token(">>")]
    Shr,

    #[token(">>>")]
    UShr,

    #[token("&")]
    Amp,

    #[token("|")]
    Pipe,

    #[token("^")]
    Caret,

    #[token("&^")]
    AmpCaret,

    #[token("&&")]
    AmpAmp,

    #[token("||")]
    PipePipe,

    #[token("==")]
    EqEq,

    #[token("!=")]
    BangEq,

    #[token("<")]
    Lt,

    #[token("<=")]
    LtEq,

    #[token(">")]
    Gt,

    #[token(">=")]
    GtEq,

    /// `<-`, channel send and receive.
    #[token("<-")]
    Arrow,

    #[token("++")]
    PlusPlus,

    #[token("--")]
    MinusMinus,

    /// `!in`, merged by the scanner.
    NotIn,

    /// `!is`, merged by the scanner.
    NotIs,

    #[token("as")]
    KwAs,

    #[token("asm")]
    KwAsm,

    #[token("assert")]
    KwAssert,

    #[token("break")]
    KwBreak,

    #[token("const")]
    KwConst,

    #[token("continue")]
    KwContinue,

    #[token("defer")]
    KwDefer,

    #[token("else")]
    KwElse,

    #[token("enum")]
    KwEnum,

    #[token("false")]
    KwFalse,

    #[token("fn")]
    KwFn,

    #[token("for")]
    KwFor,

    #[token("__global")]
    KwGlobal,

    #[token("go")]
    KwGo,

    #[token("goto")]
    KwGoto,

    #[token("if")]
    KwIf,

    #[token("import")]
    KwImport,

    #[token("in")]
    KwIn,

    #[token("interface")]
    KwInterface,

    #[token("is")]
    KwIs,

    #[token("lock")]
    KwLock,

    #[token("match")]
    KwMatch,

    #[token("module")]
    KwModule,

    #[token("mut")]
    KwMut,

    #[token("none")]
    KwNone,

    #[token("or")]
    KwOr,

    #[token("pub")]
    KwPub,

    #[token("return")]
    KwReturn,

    #[token("rlock")]
    KwRlock,

    #[token("select")]
    KwSelect,

    #[token("static")]
    KwStatic,

    #[token("struct")]
    KwStruct,

    #[token("true")]
    KwTrue,

    #[token("type")]
    KwType,

    #[token("union")]
    KwUnion,

    #[token("unsafe")]
    KwUnsafe,

    /// `$if`
    ComptimeIf,

    /// `$else`
    ComptimeElse,

    /// `$for`
    ComptimeFor,

    /// Identifier. Capitalization decides between value and type names in the parser.
    /// Defined after keywords so they take precedence. `@kw` escapes are produced by the scanner.
    #[regex(r"[a-zA-Z_α-ωΑ-Ωµ][a-zA-Z0-9_α-ωΑ-Ωµ]*")]
    Ident,

    /// `@FILE`, `@LINE`, ...
    PseudoComptimeIdent,

    Int,
    Float,
    Rune,

    /// Opening quote, including an `r`/`c` prefix.
    StringOpen,
    StringClose,
    StringContent,
    Escape,
    /// `${`
    InterpolationOpen,
    /// `}` closing a `${` splice.
    InterpolationClose,
    /// `:08.3f` inside a splice.
    FormatSpec,

    /// `#include`, `#flag`, `#define`, ...
    Directive,
    /// Rest of a directive line, continuation lines included.
    DirectiveBody,
    /// `<stdio.h>`
    CIncludePath,
    /// Opaque body of an `asm`/`sql` block.
    RawBlockContent,

    #[regex(r"[ \t\f]+")]
    Whitespace,

    #[token("\n")]
    #[token("\r\n")]
    #[token("\r")]
    Newline,

    #[regex(r"//[^\n]*", allow_greedy = true)]
    LineComment,

    BlockComment,

    /// Line break promoted to a statement terminator.
    LineTerminator,

    /// Coalesced unrecognized characters
    Garbage,
    InvalidNumber,
    InvalidEscape,
    UnterminatedComment,

    // --- Node kinds (non-terminals) ---
    Error,
    /// Zero-width placeholder for a required token that is absent.
    Missing,

    SourceFile,

    // Expressions
    ParenthesizedExpression,
    UnaryExpression,
    BinaryExpression,
    AsTypeCastExpression,
    TypeCastExpression,
    CallExpression,
    SpecialCallExpression,
    SpecialArgumentList,
    ArgumentList,
    ComptimeIdentifier,
    ComptimeSelectorExpression,
    OptionPropagator,
    OrBlock,
    NoneLiteral,
    TrueLiteral,
    FalseLiteral,
    SpreadOperator,
    TypeInitializer,
    LiteralValue,
    KeyedElement,
    Element,
    Map,
    Array,
    FixedArray,
    MutableExpression,
    BindedIdentifier,
    SelectorExpression,
    IndexExpression,
    SliceExpression,
    Range,
    InExpression,
    IsExpression,
    TypeSelectorExpression,
    PseudoComptimeIdentifier,
    FnLiteral,
    ExposedVariablesList,
    IfExpression,
    ComptimeIfExpression,
    MatchExpression,
    ExpressionCase,
    DefaultCase,
    SelectExpression,
    SelectBranch,
    SelectDefaultBranch,
    LockExpression,
    UnsafeExpression,
    SqlExpression,

    // Leaves
    Identifier,
    FieldIdentifier,
    ModuleIdentifier,
    LabelName,
    IntLiteral,
    FloatLiteral,
    RuneLiteral,
    InterpretedStringLiteral,
    RawStringLiteral,
    CStringLiteral,
    StringInterpolation,
    FormatSpecifier,
    EscapeSequence,

    // Types
    BuiltinType,
    TypeIdentifier,
    TypePlaceholder,
    QualifiedType,
    BindedType,
    GenericType,
    TypeParameters,
    PointerType,
    ArrayType,
    FixedArrayType,
    MapType,
    ChannelType,
    OptionType,
    ResultType,
    MultiReturnType,
    VariadicType,
    FunctionType,
    TypeList,

    // Statements
    Block,
    ExpressionList,
    IdentifierList,
    AssignableIdentifierList,
    ShortVarDeclaration,
    AssignmentStatement,
    IncStatement,
    DecStatement,
    SendStatement,
    AssertStatement,
    ReturnStatement,
    BreakStatement,
    ContinueStatement,
    GotoStatement,
    LabeledStatement,
    EmptyLabeledStatement,
    DeferStatement,
    GoStatement,
    AsmStatement,
    ForStatement,
    ComptimeForStatement,
    ForInOperator,
    CstyleForClause,

    // Declarations
    ModuleClause,
    ImportDeclaration,
    ImportPath,
    ImportAlias,
    ImportSymbols,
    ImportSymbolsList,
    ConstDeclaration,
    ConstSpec,
    GlobalVarDeclaration,
    GlobalVarSpec,
    GlobalVarTypeInitializer,
    FunctionDeclaration,
    OverloadableOperator,
    ParameterList,
    ParameterDeclaration,
    TypeOnlyParameterList,
    TypeParameterDeclaration,
    TypeDeclaration,
    StructDeclaration,
    StructFieldDeclarationList,
    StructFieldScope,
    StructFieldDeclaration,
    EnumDeclaration,
    EnumMemberDeclarationList,
    EnumMember,
    InterfaceDeclaration,
    InterfaceSpecList,
    InterfaceFieldScope,
    InterfaceSpec,
    AttributeList,
    AttributeDeclaration,
    AttributeSpec,
    CIncludeClause,
    CFlagClause,
    CDefineClause,
    CPkgconfig,

    // Must be last - used for bounds checking in `kind_from_raw`
    #[doc(hidden)]
    __LAST,
}

use SyntaxKind::*;

impl SyntaxKind {
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(self, Whitespace | Newline | LineComment | BlockComment)
    }

    /// Lexical error tokens and `ERROR` nodes.
    #[inline]
    pub fn is_error(self) -> bool {
        matches!(
            self,
            Error | Garbage | InvalidNumber | InvalidEscape | UnterminatedComment
        )
    }

    #[inline]
    pub fn is_node(self) -> bool {
        self >= Error && self < __LAST
    }

    #[inline]
    pub fn is_keyword(self) -> bool {
        self >= KwAs && self <= KwUnsafe
    }

    /// Whether the kind shows up in the S-expression view (nodes plus comments).
    #[inline]
    pub fn is_named(self) -> bool {
        self.is_node() || matches!(self, LineComment | BlockComment)
    }

    /// Node name as exposed to tree consumers, or the token spelling.
    pub fn name(self) -> &'static str {
        match self {
            ParenOpen => "(",
            ParenClose => ")",
            BracketOpen => "[",
            BracketClose => "]",
            BraceOpen => "{",
            BraceClose => "}",
            Comma => ",",
            Semicolon => ";",
            Colon => ":",
            Dot => ".",
            DotDot => "..",
            Ellipsis => "...",
            Question => "?",
            Bang => "!",
            Tilde => "~",
            At => "@",
            AttrOpen => "@[",
            Dollar => "$",
            Eq => "=",
            ColonEq => ":=",
            PlusEq => "+=",
            MinusEq => "-=",
            StarEq => "*=",
            SlashEq => "/=",
            PercentEq => "%=",
            AmpEq => "&=",
            PipeEq => "|=",
            CaretEq => "^=",
            ShlEq => "<<=",
            ShrEq => ">>=",
            UShrEq => ">>>=",
            AmpCaretEq => "&^=",
            Plus => "+",
            Minus => "-",
            Star => "*",
            Slash => "/",
            Percent => "%",
            Shl => "<<",
            Shr => ">>",
            UShr => ">>>",
            Amp => "&",
            Pipe => "|",
            Caret => "^",
            AmpCaret => "&^",
            AmpAmp => "&&",
            PipePipe => "||",
            EqEq => "==",
            BangEq => "!=",
            Lt => "<",
            LtEq => "<=",
            Gt => ">",
            GtEq => ">=",
            Arrow => "<-",
            PlusPlus => "++",
            MinusMinus => "--",
            NotIn => "!in",
            NotIs => "!is",
            KwAs => "as",
            KwAsm => "asm",
            KwAssert => "assert",
            KwBreak => "break",
            KwConst => "const",
            KwContinue => "continue",
            KwDefer => "defer",
            KwElse => "else",
            KwEnum => "enum",
            KwFalse => "false",
            KwFn => "fn",
            KwFor => "for",
            KwGlobal => "__global",
            KwGo => "go",
            KwGoto => "goto",
            KwIf => "if",
            KwImport => "import",
            KwIn => "in",
            KwInterface => "interface",
            KwIs => "is",
            KwLock => "lock",
            KwMatch => "match",
            KwModule => "module",
            KwMut => "mut",
            KwNone => "none",
            KwOr => "or",
            KwPub => "pub",
            KwReturn => "return",
            KwRlock => "rlock",
            KwSelect => "select",
            KwStatic => "static",
            KwStruct => "struct",
            KwTrue => "true",
            KwType => "type",
            KwUnion => "union",
            KwUnsafe => "unsafe",
            ComptimeIf => "$if",
            ComptimeElse => "$else",
            ComptimeFor => "$for",
            Ident => "identifier",
            PseudoComptimeIdent => "pseudo_comptime_identifier",
            Int => "int_literal",
            Float => "float_literal",
            Rune => "rune_literal",
            StringOpen => "string_open",
            StringClose => "string_close",
            StringContent => "string_content",
            Escape => "escape",
            InterpolationOpen => "${",
            InterpolationClose => "interpolation_close",
            FormatSpec => "format_spec",
            Directive => "directive",
            DirectiveBody => "directive_body",
            CIncludePath => "c_include_path",
            RawBlockContent => "raw_block_content",
            Whitespace => "whitespace",
            Newline => "newline",
            LineComment | BlockComment => "comment",
            LineTerminator => "terminator",
            Garbage => "garbage",
            InvalidNumber => "invalid_number",
            InvalidEscape => "invalid_escape",
            UnterminatedComment => "unterminated_comment",

            Error => "ERROR",
            Missing => "MISSING",
            SourceFile => "source_file",
            ParenthesizedExpression => "parenthesized_expression",
            UnaryExpression => "unary_expression",
            BinaryExpression => "binary_expression",
            AsTypeCastExpression => "as_type_cast_expression",
            TypeCastExpression => "type_cast_expression",
            CallExpression => "call_expression",
            SpecialCallExpression => "special_call_expression",
            SpecialArgumentList => "special_argument_list",
            ArgumentList => "argument_list",
            ComptimeIdentifier => "comptime_identifier",
            ComptimeSelectorExpression => "comptime_selector_expression",
            OptionPropagator => "option_propagator",
            OrBlock => "or_block",
            NoneLiteral => "none",
            TrueLiteral => "true",
            FalseLiteral => "false",
            SpreadOperator => "spread_operator",
            TypeInitializer => "type_initializer",
            LiteralValue => "literal_value",
            KeyedElement => "keyed_element",
            Element => "element",
            Map => "map",
            Array => "array",
            FixedArray => "fixed_array",
            MutableExpression => "mutable_expression",
            BindedIdentifier => "binded_identifier",
            SelectorExpression => "selector_expression",
            IndexExpression => "index_expression",
            SliceExpression => "slice_expression",
            Range => "range",
            InExpression => "in_expression",
            IsExpression => "is_expression",
            TypeSelectorExpression => "type_selector_expression",
            PseudoComptimeIdentifier => "pseudo_comptime_identifier",
            FnLiteral => "fn_literal",
            ExposedVariablesList => "exposed_variables_list",
            IfExpression => "if_expression",
            ComptimeIfExpression => "comptime_if_expression",
            MatchExpression => "match_expression",
            ExpressionCase => "expression_case",
            DefaultCase => "default_case",
            SelectExpression => "select_expression",
            SelectBranch => "select_branch",
            SelectDefaultBranch => "select_default_branch",
            LockExpression => "lock_expression",
            UnsafeExpression => "unsafe_expression",
            SqlExpression => "sql_expression",
            Identifier => "identifier",
            FieldIdentifier => "field_identifier",
            ModuleIdentifier => "module_identifier",
            LabelName => "label_name",
            IntLiteral => "int_literal",
            FloatLiteral => "float_literal",
            RuneLiteral => "rune_literal",
            InterpretedStringLiteral => "interpreted_string_literal",
            RawStringLiteral => "raw_string_literal",
            CStringLiteral => "c_string_literal",
            StringInterpolation => "string_interpolation",
            FormatSpecifier => "format_specifier",
            EscapeSequence => "escape_sequence",
            BuiltinType => "builtin_type",
            TypeIdentifier => "type_identifier",
            TypePlaceholder => "type_placeholder",
            QualifiedType => "qualified_type",
            BindedType => "binded_type",
            GenericType => "generic_type",
            TypeParameters => "type_parameters",
            PointerType => "pointer_type",
            ArrayType => "array_type",
            FixedArrayType => "fixed_array_type",
            MapType => "map_type",
            ChannelType => "channel_type",
            OptionType => "option_type",
            ResultType => "result_type",
            MultiReturnType => "multi_return_type",
            VariadicType => "variadic_type",
            FunctionType => "function_type",
            TypeList => "type_list",
            Block => "block",
            ExpressionList => "expression_list",
            IdentifierList => "identifier_list",
            AssignableIdentifierList => "assignable_identifier_list",
            ShortVarDeclaration => "short_var_declaration",
            AssignmentStatement => "assignment_statement",
            IncStatement => "inc_statement",
            DecStatement => "dec_statement",
            SendStatement => "send_statement",
            AssertStatement => "assert_statement",
            ReturnStatement => "return_statement",
            BreakStatement => "break_statement",
            ContinueStatement => "continue_statement",
            GotoStatement => "goto_statement",
            LabeledStatement => "labeled_statement",
            EmptyLabeledStatement => "empty_labeled_statement",
            DeferStatement => "defer_statement",
            GoStatement => "go_statement",
            AsmStatement => "asm_statement",
            ForStatement => "for_statement",
            ComptimeForStatement => "comptime_for_statement",
            ForInOperator => "for_in_operator",
            CstyleForClause => "cstyle_for_clause",
            ModuleClause => "module_clause",
            ImportDeclaration => "import_declaration",
            ImportPath => "import_path",
            ImportAlias => "import_alias",
            ImportSymbols => "import_symbols",
            ImportSymbolsList => "import_symbols_list",
            ConstDeclaration => "const_declaration",
            ConstSpec => "const_spec",
            GlobalVarDeclaration => "global_var_declaration",
            GlobalVarSpec => "global_var_spec",
            GlobalVarTypeInitializer => "global_var_type_initializer",
            FunctionDeclaration => "function_declaration",
            OverloadableOperator => "overloadable_operator",
            ParameterList => "parameter_list",
            ParameterDeclaration => "parameter_declaration",
            TypeOnlyParameterList => "type_only_parameter_list",
            TypeParameterDeclaration => "type_parameter_declaration",
            TypeDeclaration => "type_declaration",
            StructDeclaration => "struct_declaration",
            StructFieldDeclarationList => "struct_field_declaration_list",
            StructFieldScope => "struct_field_scope",
            StructFieldDeclaration => "struct_field_declaration",
            EnumDeclaration => "enum_declaration",
            EnumMemberDeclarationList => "enum_member_declaration_list",
            EnumMember => "enum_member",
            InterfaceDeclaration => "interface_declaration",
            InterfaceSpecList => "interface_spec_list",
            InterfaceFieldScope => "interface_field_scope",
            InterfaceSpec => "interface_spec",
            AttributeList => "attribute_list",
            AttributeDeclaration => "attribute_declaration",
            AttributeSpec => "attribute_spec",
            CIncludeClause => "c_include_clause",
            CFlagClause => "c_flag_clause",
            CDefineClause => "c_define_clause",
            CPkgconfig => "c_pkgconfig",
            __LAST => "__LAST",
        }
    }

    /// Every node kind, in declaration order.
    pub fn node_kinds() -> impl Iterator<Item = SyntaxKind> {
        (Error as u16..__LAST as u16).map(|raw| VLang::kind_from_raw(rowan::SyntaxKind(raw)))
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    #[inline]
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

/// Language tag for Rowan's tree types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum VLang {}

impl Language for VLang {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        assert!(raw.0 < __LAST as u16);
        // SAFETY: We've verified the value is in bounds, and SyntaxKind is repr(u16)
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type aliases for Rowan types parameterized by our language.
pub type SyntaxNode = rowan::SyntaxNode<VLang>;
pub type SyntaxToken = rowan::SyntaxToken<VLang>;
pub type SyntaxElement = rowan::NodeOrToken<SyntaxNode, SyntaxToken>;

/// 128-bit bitset of token `SyntaxKind`s for O(1) membership testing.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct TokenSet(u128);

impl TokenSet {
    /// Creates an empty token set.
    pub const EMPTY: TokenSet = TokenSet(0);

    /// Panics at compile time if any kind's discriminant >= 128.
    #[inline]
    pub const fn new(kinds: &[SyntaxKind]) -> Self {
        let mut bits = 0u128;
        let mut i = 0;
        while i < kinds.len() {
            let kind = kinds[i] as u16;
            assert!(kind < 128, "SyntaxKind value exceeds TokenSet capacity");
            bits |= 1 << kind;
            i += 1;
        }
        TokenSet(bits)
    }

    #[inline]
    pub const fn single(kind: SyntaxKind) -> Self {
        let kind = kind as u16;
        assert!(kind < 128, "SyntaxKind value exceeds TokenSet capacity");
        TokenSet(1 << kind)
    }

    #[inline]
    pub const fn contains(&self, kind: SyntaxKind) -> bool {
        let kind = kind as u16;
        if kind >= 128 {
            return false;
        }
        self.0 & (1 << kind) != 0
    }

    #[inline]
    pub const fn union(self, other: TokenSet) -> TokenSet {
        TokenSet(self.0 | other.0)
    }
}

impl std::fmt::Debug for TokenSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut list = f.debug_set();
        for i in 0..128u16 {
            if self.0 & (1 << i) != 0 && i < __LAST as u16 {
                list.entry(&VLang::kind_from_raw(rowan::SyntaxKind(i)));
            }
        }
        list.finish()
    }
}

/// Pre-defined token sets for the parser.
pub mod token_sets {
    use super::{SyntaxKind::*, TokenSet};

    pub const TRIVIA: TokenSet = TokenSet::new(&[Whitespace, Newline, LineComment, BlockComment]);

    pub const LITERALS: TokenSet = TokenSet::new(&[Int, Float, Rune, StringOpen]);

    /// Tokens that may start an expression.
    pub const EXPR_FIRST: TokenSet = LITERALS.union(TokenSet::new(&[
        Ident,
        PseudoComptimeIdent,
        KwNone,
        KwTrue,
        KwFalse,
        ParenOpen,
        BracketOpen,
        BraceOpen,
        Dot,
        Dollar,
        Plus,
        Minus,
        Bang,
        Tilde,
        Caret,
        Star,
        Amp,
        Arrow,
        KwFn,
        KwIf,
        ComptimeIf,
        KwMatch,
        KwSelect,
        KwLock,
        KwRlock,
        KwUnsafe,
        KwMut,
        Ellipsis,
    ]));

    /// Tokens that may start a type.
    pub const TYPE_FIRST: TokenSet = TokenSet::new(&[
        Ident,
        Question,
        Bang,
        Amp,
        Star,
        BracketOpen,
        ParenOpen,
        KwFn,
        Ellipsis,
    ]);

    pub const ASSIGN_OPS: TokenSet = TokenSet::new(&[
        Eq, PlusEq, MinusEq, StarEq, SlashEq, PercentEq, AmpEq, PipeEq, CaretEq, ShlEq, ShrEq,
        UShrEq, AmpCaretEq,
    ]);

    pub const PREFIX_OPS: TokenSet =
        TokenSet::new(&[Plus, Minus, Bang, Tilde, Caret, Star, Amp, Arrow]);

    pub const OVERLOADABLE_OPS: TokenSet = TokenSet::new(&[
        Plus, Minus, Star, Slash, Percent, Lt, Gt, EqEq, BangEq, LtEq, GtEq,
    ]);

    /// Tokens after which a statement may end.
    pub const STMT_END: TokenSet = TokenSet::new(&[LineTerminator, Semicolon, BraceClose]);

    /// Declaration keywords that start a top-level item.
    pub const ITEM_KEYWORDS: TokenSet = TokenSet::new(&[
        KwModule,
        KwImport,
        KwConst,
        KwGlobal,
        KwFn,
        KwType,
        KwStruct,
        KwUnion,
        KwEnum,
        KwInterface,
        KwPub,
        AttrOpen,
        Directive,
    ]);

    /// Tokens that may start a statement or a declaration.
    pub const STMT_FIRST: TokenSet = EXPR_FIRST.union(ITEM_KEYWORDS).union(TokenSet::new(&[
        KwReturn,
        KwBreak,
        KwContinue,
        KwGoto,
        KwDefer,
        KwGo,
        KwAssert,
        KwAsm,
        KwFor,
        ComptimeFor,
    ]));

    pub const STMT_RECOVERY: TokenSet = STMT_END;

    /// Where an absent operand is reported as missing instead of consuming the token.
    pub const EXPR_RECOVERY: TokenSet = TokenSet::new(&[
        Comma,
        Colon,
        Semicolon,
        LineTerminator,
        ParenClose,
        BracketClose,
        BraceClose,
        BraceOpen,
        DotDot,
        InterpolationClose,
        FormatSpec,
        StringClose,
    ]);

    /// Synchronization points inside bracketed lists.
    pub const LIST_RECOVERY: TokenSet = TokenSet::new(&[
        Comma,
        ParenClose,
        BracketClose,
        BraceClose,
        LineTerminator,
    ]);

    /// Synchronization points inside a struct, enum or interface body.
    pub const MEMBER_RECOVERY: TokenSet = TokenSet::new(&[LineTerminator, BraceClose]);
}
