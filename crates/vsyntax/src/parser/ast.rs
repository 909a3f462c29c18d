//! Typed AST wrappers over CST nodes.
//!
//! Each struct wraps a `SyntaxNode` and provides typed accessors named after the
//! grammar's field names (`left`, `right`, `condition`, `body`, ...). Accessors return
//! `None` when the tree is incomplete; nothing here validates.

use super::cst::{SyntaxKind, SyntaxNode, SyntaxToken};

macro_rules! ast_node {
    ($name:ident, $kind:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(SyntaxNode);

        impl $name {
            pub fn cast(node: SyntaxNode) -> Option<Self> {
                (node.kind() == SyntaxKind::$kind).then(|| Self(node))
            }

            pub fn as_cst(&self) -> &SyntaxNode {
                &self.0
            }
        }
    };
}

ast_node!(SourceFile, SourceFile);
ast_node!(Block, Block);
ast_node!(ModuleClause, ModuleClause);
ast_node!(ImportDeclaration, ImportDeclaration);
ast_node!(ConstDeclaration, ConstDeclaration);
ast_node!(ConstSpec, ConstSpec);
ast_node!(GlobalVarDeclaration, GlobalVarDeclaration);
ast_node!(FunctionDeclaration, FunctionDeclaration);
ast_node!(ParameterList, ParameterList);
ast_node!(ParameterDeclaration, ParameterDeclaration);
ast_node!(TypeDeclaration, TypeDeclaration);
ast_node!(StructDeclaration, StructDeclaration);
ast_node!(StructFieldDeclaration, StructFieldDeclaration);
ast_node!(EnumDeclaration, EnumDeclaration);
ast_node!(EnumMember, EnumMember);
ast_node!(InterfaceDeclaration, InterfaceDeclaration);
ast_node!(AttributeList, AttributeList);

ast_node!(ShortVarDeclaration, ShortVarDeclaration);
ast_node!(AssignmentStatement, AssignmentStatement);
ast_node!(ExpressionList, ExpressionList);
ast_node!(ReturnStatement, ReturnStatement);
ast_node!(ForStatement, ForStatement);
ast_node!(ForInOperator, ForInOperator);

ast_node!(BinaryExpression, BinaryExpression);
ast_node!(UnaryExpression, UnaryExpression);
ast_node!(CallExpression, CallExpression);
ast_node!(ArgumentList, ArgumentList);
ast_node!(SelectorExpression, SelectorExpression);
ast_node!(IndexExpression, IndexExpression);
ast_node!(ParenthesizedExpression, ParenthesizedExpression);
ast_node!(IfExpression, IfExpression);
ast_node!(MatchExpression, MatchExpression);
ast_node!(FnLiteral, FnLiteral);
ast_node!(TypeInitializer, TypeInitializer);
ast_node!(Identifier, Identifier);
ast_node!(IntLiteral, IntLiteral);

/// `'...'`, `r'...'` or `c'...'`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StringLiteral(SyntaxNode);

impl StringLiteral {
    pub fn cast(node: SyntaxNode) -> Option<Self> {
        matches!(
            node.kind(),
            SyntaxKind::InterpretedStringLiteral
                | SyntaxKind::RawStringLiteral
                | SyntaxKind::CStringLiteral
        )
        .then(|| Self(node))
    }

    pub fn as_cst(&self) -> &SyntaxNode {
        &self.0
    }

    pub fn is_raw(&self) -> bool {
        self.0.kind() == SyntaxKind::RawStringLiteral
    }

    /// Whether any `${...}` or `$name` splice occurs.
    pub fn has_interpolation(&self) -> bool {
        self.0
            .children()
            .any(|c| c.kind() == SyntaxKind::StringInterpolation)
    }
}

/// Expression kinds without a dedicated wrapper.
const OTHER_EXPRESSIONS: &[SyntaxKind] = &[
    SyntaxKind::FloatLiteral,
    SyntaxKind::RuneLiteral,
    SyntaxKind::NoneLiteral,
    SyntaxKind::TrueLiteral,
    SyntaxKind::FalseLiteral,
    SyntaxKind::AsTypeCastExpression,
    SyntaxKind::TypeCastExpression,
    SyntaxKind::SpecialCallExpression,
    SyntaxKind::ComptimeIdentifier,
    SyntaxKind::ComptimeSelectorExpression,
    SyntaxKind::OptionPropagator,
    SyntaxKind::SpreadOperator,
    SyntaxKind::Map,
    SyntaxKind::Array,
    SyntaxKind::FixedArray,
    SyntaxKind::MutableExpression,
    SyntaxKind::BindedIdentifier,
    SyntaxKind::SliceExpression,
    SyntaxKind::InExpression,
    SyntaxKind::IsExpression,
    SyntaxKind::TypeSelectorExpression,
    SyntaxKind::PseudoComptimeIdentifier,
    SyntaxKind::ComptimeIfExpression,
    SyntaxKind::SelectExpression,
    SyntaxKind::LockExpression,
    SyntaxKind::UnsafeExpression,
    SyntaxKind::SqlExpression,
];

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    Binary(BinaryExpression),
    Unary(UnaryExpression),
    Call(CallExpression),
    Selector(SelectorExpression),
    Index(IndexExpression),
    Parenthesized(ParenthesizedExpression),
    If(IfExpression),
    Match(MatchExpression),
    FnLiteral(FnLiteral),
    TypeInitializer(TypeInitializer),
    Identifier(Identifier),
    Int(IntLiteral),
    String(StringLiteral),
    Other(SyntaxNode),
}

impl Expr {
    pub fn cast(node: SyntaxNode) -> Option<Self> {
        let expr = match node.kind() {
            SyntaxKind::BinaryExpression => Expr::Binary(BinaryExpression(node)),
            SyntaxKind::UnaryExpression => Expr::Unary(UnaryExpression(node)),
            SyntaxKind::CallExpression => Expr::Call(CallExpression(node)),
            SyntaxKind::SelectorExpression => Expr::Selector(SelectorExpression(node)),
            SyntaxKind::IndexExpression => Expr::Index(IndexExpression(node)),
            SyntaxKind::ParenthesizedExpression => {
                Expr::Parenthesized(ParenthesizedExpression(node))
            }
            SyntaxKind::IfExpression => Expr::If(IfExpression(node)),
            SyntaxKind::MatchExpression => Expr::Match(MatchExpression(node)),
            SyntaxKind::FnLiteral => Expr::FnLiteral(FnLiteral(node)),
            SyntaxKind::TypeInitializer => Expr::TypeInitializer(TypeInitializer(node)),
            SyntaxKind::Identifier => Expr::Identifier(Identifier(node)),
            SyntaxKind::IntLiteral => Expr::Int(IntLiteral(node)),
            _ => {
                if let Some(string) = StringLiteral::cast(node.clone()) {
                    return Some(Expr::String(string));
                }
                if !OTHER_EXPRESSIONS.contains(&node.kind()) {
                    return None;
                }
                Expr::Other(node)
            }
        };
        Some(expr)
    }

    pub fn as_cst(&self) -> &SyntaxNode {
        match self {
            Expr::Binary(n) => n.as_cst(),
            Expr::Unary(n) => n.as_cst(),
            Expr::Call(n) => n.as_cst(),
            Expr::Selector(n) => n.as_cst(),
            Expr::Index(n) => n.as_cst(),
            Expr::Parenthesized(n) => n.as_cst(),
            Expr::If(n) => n.as_cst(),
            Expr::Match(n) => n.as_cst(),
            Expr::FnLiteral(n) => n.as_cst(),
            Expr::TypeInitializer(n) => n.as_cst(),
            Expr::Identifier(n) => n.as_cst(),
            Expr::Int(n) => n.as_cst(),
            Expr::String(n) => n.as_cst(),
            Expr::Other(n) => n,
        }
    }
}

/// A statement inside a block or at file level.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Stmt {
    ShortVar(ShortVarDeclaration),
    Assignment(AssignmentStatement),
    Return(ReturnStatement),
    For(ForStatement),
    Block(Block),
    Expression(Expr),
    /// Inc/dec, send, jumps, labels, `defer`, `go`, `assert`, `asm`, `$for`.
    Other(SyntaxNode),
}

impl Stmt {
    pub fn cast(node: SyntaxNode) -> Option<Self> {
        let stmt = match node.kind() {
            SyntaxKind::ShortVarDeclaration => Stmt::ShortVar(ShortVarDeclaration(node)),
            SyntaxKind::AssignmentStatement => Stmt::Assignment(AssignmentStatement(node)),
            SyntaxKind::ReturnStatement => Stmt::Return(ReturnStatement(node)),
            SyntaxKind::ForStatement => Stmt::For(ForStatement(node)),
            SyntaxKind::Block => Stmt::Block(Block(node)),
            SyntaxKind::IncStatement
            | SyntaxKind::DecStatement
            | SyntaxKind::SendStatement
            | SyntaxKind::AssertStatement
            | SyntaxKind::BreakStatement
            | SyntaxKind::ContinueStatement
            | SyntaxKind::GotoStatement
            | SyntaxKind::LabeledStatement
            | SyntaxKind::EmptyLabeledStatement
            | SyntaxKind::DeferStatement
            | SyntaxKind::GoStatement
            | SyntaxKind::AsmStatement
            | SyntaxKind::ComptimeForStatement => Stmt::Other(node),
            _ => Stmt::Expression(Expr::cast(node)?),
        };
        Some(stmt)
    }

    pub fn as_cst(&self) -> &SyntaxNode {
        match self {
            Stmt::ShortVar(n) => n.as_cst(),
            Stmt::Assignment(n) => n.as_cst(),
            Stmt::Return(n) => n.as_cst(),
            Stmt::For(n) => n.as_cst(),
            Stmt::Block(n) => n.as_cst(),
            Stmt::Expression(e) => e.as_cst(),
            Stmt::Other(n) => n,
        }
    }
}

/// A declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Item {
    Module(ModuleClause),
    Import(ImportDeclaration),
    Const(ConstDeclaration),
    Global(GlobalVarDeclaration),
    Function(FunctionDeclaration),
    TypeAlias(TypeDeclaration),
    Struct(StructDeclaration),
    Enum(EnumDeclaration),
    Interface(InterfaceDeclaration),
    /// `#include`, `#flag`, `#define`, `#pkgconfig`
    Directive(SyntaxNode),
}

impl Item {
    pub fn cast(node: SyntaxNode) -> Option<Self> {
        let item = match node.kind() {
            SyntaxKind::ModuleClause => Item::Module(ModuleClause(node)),
            SyntaxKind::ImportDeclaration => Item::Import(ImportDeclaration(node)),
            SyntaxKind::ConstDeclaration => Item::Const(ConstDeclaration(node)),
            SyntaxKind::GlobalVarDeclaration => Item::Global(GlobalVarDeclaration(node)),
            SyntaxKind::FunctionDeclaration => Item::Function(FunctionDeclaration(node)),
            SyntaxKind::TypeDeclaration => Item::TypeAlias(TypeDeclaration(node)),
            SyntaxKind::StructDeclaration => Item::Struct(StructDeclaration(node)),
            SyntaxKind::EnumDeclaration => Item::Enum(EnumDeclaration(node)),
            SyntaxKind::InterfaceDeclaration => Item::Interface(InterfaceDeclaration(node)),
            SyntaxKind::CIncludeClause
            | SyntaxKind::CFlagClause
            | SyntaxKind::CDefineClause
            | SyntaxKind::CPkgconfig => Item::Directive(node),
            _ => return None,
        };
        Some(item)
    }

    pub fn as_cst(&self) -> &SyntaxNode {
        match self {
            Item::Module(n) => n.as_cst(),
            Item::Import(n) => n.as_cst(),
            Item::Const(n) => n.as_cst(),
            Item::Global(n) => n.as_cst(),
            Item::Function(n) => n.as_cst(),
            Item::TypeAlias(n) => n.as_cst(),
            Item::Struct(n) => n.as_cst(),
            Item::Enum(n) => n.as_cst(),
            Item::Interface(n) => n.as_cst(),
            Item::Directive(n) => n,
        }
    }
}

/// A type expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Type(SyntaxNode);

impl Type {
    pub fn cast(node: SyntaxNode) -> Option<Self> {
        matches!(
            node.kind(),
            SyntaxKind::BuiltinType
                | SyntaxKind::TypeIdentifier
                | SyntaxKind::TypePlaceholder
                | SyntaxKind::QualifiedType
                | SyntaxKind::BindedType
                | SyntaxKind::GenericType
                | SyntaxKind::PointerType
                | SyntaxKind::ArrayType
                | SyntaxKind::FixedArrayType
                | SyntaxKind::MapType
                | SyntaxKind::ChannelType
                | SyntaxKind::OptionType
                | SyntaxKind::ResultType
                | SyntaxKind::MultiReturnType
                | SyntaxKind::VariadicType
                | SyntaxKind::FunctionType
        )
        .then(|| Self(node))
    }

    pub fn as_cst(&self) -> &SyntaxNode {
        &self.0
    }

    pub fn kind(&self) -> SyntaxKind {
        self.0.kind()
    }

    /// Source text without surrounding trivia.
    pub fn text(&self) -> String {
        self.0.text().to_string().trim().to_string()
    }

    /// Element, pointee or payload type for wrapper types.
    pub fn inner(&self) -> Option<Type> {
        self.0.children().find_map(Type::cast)
    }
}

fn first_token(node: &SyntaxNode) -> Option<SyntaxToken> {
    node.children_with_tokens()
        .filter_map(|it| it.into_token())
        .find(|t| !t.kind().is_trivia())
}

fn child_token(node: &SyntaxNode, kind: SyntaxKind) -> Option<SyntaxToken> {
    node.children_with_tokens()
        .filter_map(|it| it.into_token())
        .find(|t| t.kind() == kind)
}

/// Text of the first child node of one of `kinds`, e.g. an `identifier`.
fn name_of(node: &SyntaxNode, kinds: &[SyntaxKind]) -> Option<String> {
    node.children()
        .find(|c| kinds.contains(&c.kind()))
        .map(|c| c.text().to_string().trim().to_string())
}

fn has_pub(node: &SyntaxNode) -> bool {
    child_token(node, SyntaxKind::KwPub).is_some()
}

impl SourceFile {
    pub(crate) fn from_root(node: SyntaxNode) -> Self {
        Self(node)
    }

    pub fn items(&self) -> impl Iterator<Item = Item> + '_ {
        self.0.children().filter_map(Item::cast)
    }

    pub fn statements(&self) -> impl Iterator<Item = Stmt> + '_ {
        self.0.children().filter_map(Stmt::cast)
    }

    pub fn module(&self) -> Option<ModuleClause> {
        self.0.children().find_map(ModuleClause::cast)
    }

    pub fn imports(&self) -> impl Iterator<Item = ImportDeclaration> + '_ {
        self.0.children().filter_map(ImportDeclaration::cast)
    }

    pub fn functions(&self) -> impl Iterator<Item = FunctionDeclaration> + '_ {
        self.0.children().filter_map(FunctionDeclaration::cast)
    }
}

impl Block {
    pub fn statements(&self) -> impl Iterator<Item = Stmt> + '_ {
        self.0.children().filter_map(Stmt::cast)
    }

    pub fn items(&self) -> impl Iterator<Item = Item> + '_ {
        self.0.children().filter_map(Item::cast)
    }
}

impl ModuleClause {
    pub fn name(&self) -> Option<String> {
        name_of(&self.0, &[SyntaxKind::Identifier])
    }
}

impl ImportDeclaration {
    /// Dotted module path, e.g. `net.http`.
    pub fn path(&self) -> Option<String> {
        name_of(&self.0, &[SyntaxKind::ImportPath])
    }

    pub fn alias(&self) -> Option<String> {
        let alias = self
            .0
            .children()
            .find(|c| c.kind() == SyntaxKind::ImportAlias)?;
        name_of(&alias, &[SyntaxKind::ModuleIdentifier])
    }

    pub fn symbols(&self) -> Vec<String> {
        self.0
            .descendants()
            .filter(|n| matches!(n.kind(), SyntaxKind::Identifier | SyntaxKind::TypeIdentifier))
            .map(|n| n.text().to_string().trim().to_string())
            .collect()
    }
}

impl ConstDeclaration {
    pub fn is_pub(&self) -> bool {
        has_pub(&self.0)
    }

    pub fn specs(&self) -> impl Iterator<Item = ConstSpec> + '_ {
        self.0.children().filter_map(ConstSpec::cast)
    }
}

impl ConstSpec {
    pub fn name(&self) -> Option<String> {
        name_of(&self.0, &[SyntaxKind::Identifier])
    }

    pub fn value(&self) -> Option<Expr> {
        self.0.children().skip(1).find_map(Expr::cast)
    }
}

impl FunctionDeclaration {
    pub fn is_pub(&self) -> bool {
        has_pub(&self.0)
    }

    pub fn attributes(&self) -> Option<AttributeList> {
        self.0.children().find_map(AttributeList::cast)
    }

    fn name_node(&self) -> Option<SyntaxNode> {
        self.0.children().find(|c| {
            matches!(
                c.kind(),
                SyntaxKind::Identifier
                    | SyntaxKind::BindedIdentifier
                    | SyntaxKind::OverloadableOperator
            )
        })
    }

    pub fn name(&self) -> Option<String> {
        self.name_node()
            .map(|n| n.text().to_string().trim().to_string())
    }

    /// Method receiver, the parameter list before the name.
    pub fn receiver(&self) -> Option<ParameterList> {
        let name = self.name_node()?;
        self.0
            .children()
            .take_while(|c| *c != name)
            .find_map(ParameterList::cast)
    }

    /// Parameter list after the name; may be a type-only list.
    pub fn parameters(&self) -> Option<SyntaxNode> {
        let name = self.name_node()?;
        self.0
            .children()
            .skip_while(|c| *c != name)
            .find(|c| {
                matches!(
                    c.kind(),
                    SyntaxKind::ParameterList | SyntaxKind::TypeOnlyParameterList
                )
            })
    }

    pub fn result(&self) -> Option<Type> {
        let parameters = self.parameters()?;
        self.0
            .children()
            .skip_while(|c| *c != parameters)
            .skip(1)
            .find_map(Type::cast)
    }

    pub fn body(&self) -> Option<Block> {
        self.0.children().find_map(Block::cast)
    }
}

impl ParameterList {
    pub fn parameters(&self) -> impl Iterator<Item = ParameterDeclaration> + '_ {
        self.0.children().filter_map(ParameterDeclaration::cast)
    }
}

impl ParameterDeclaration {
    pub fn is_mut(&self) -> bool {
        child_token(&self.0, SyntaxKind::KwMut).is_some()
    }

    pub fn name(&self) -> Option<String> {
        name_of(&self.0, &[SyntaxKind::Identifier])
    }

    pub fn ty(&self) -> Option<Type> {
        self.0.children().find_map(Type::cast)
    }
}

impl TypeDeclaration {
    pub fn name(&self) -> Option<String> {
        name_of(&self.0, &[SyntaxKind::TypeIdentifier])
    }

    /// Aliased type, or every variant of a sum type.
    pub fn variants(&self) -> impl Iterator<Item = Type> + '_ {
        self.0
            .children()
            .skip_while(|c| c.kind() != SyntaxKind::TypeIdentifier)
            .skip(1)
            .filter_map(Type::cast)
    }
}

impl StructDeclaration {
    pub fn is_pub(&self) -> bool {
        has_pub(&self.0)
    }

    pub fn is_union(&self) -> bool {
        child_token(&self.0, SyntaxKind::KwUnion).is_some()
    }

    pub fn name(&self) -> Option<String> {
        name_of(&self.0, &[SyntaxKind::TypeIdentifier, SyntaxKind::BindedType])
    }

    pub fn fields(&self) -> impl Iterator<Item = StructFieldDeclaration> + '_ {
        self.0
            .children()
            .filter(|c| c.kind() == SyntaxKind::StructFieldDeclarationList)
            .flat_map(|list| list.children())
            .filter_map(StructFieldDeclaration::cast)
    }
}

impl StructFieldDeclaration {
    /// `None` for an embedded type.
    pub fn name(&self) -> Option<String> {
        name_of(&self.0, &[SyntaxKind::FieldIdentifier])
    }

    pub fn ty(&self) -> Option<Type> {
        self.0.children().find_map(Type::cast)
    }

    pub fn default_value(&self) -> Option<Expr> {
        child_token(&self.0, SyntaxKind::Eq)?;
        self.0.children().filter(|c| Type::cast(c.clone()).is_none()).find_map(Expr::cast)
    }
}

impl EnumDeclaration {
    pub fn name(&self) -> Option<String> {
        name_of(&self.0, &[SyntaxKind::TypeIdentifier])
    }

    pub fn members(&self) -> impl Iterator<Item = EnumMember> + '_ {
        self.0
            .children()
            .filter(|c| c.kind() == SyntaxKind::EnumMemberDeclarationList)
            .flat_map(|list| list.children())
            .filter_map(EnumMember::cast)
    }
}

impl EnumMember {
    pub fn name(&self) -> Option<String> {
        name_of(&self.0, &[SyntaxKind::Identifier])
    }

    pub fn value(&self) -> Option<Expr> {
        self.0.children().skip(1).find_map(Expr::cast)
    }
}

impl InterfaceDeclaration {
    pub fn name(&self) -> Option<String> {
        name_of(&self.0, &[SyntaxKind::TypeIdentifier])
    }

    /// Method names, in declaration order.
    pub fn methods(&self) -> Vec<String> {
        self.0
            .descendants()
            .filter(|n| n.kind() == SyntaxKind::InterfaceSpec)
            .filter_map(|n| name_of(&n, &[SyntaxKind::FieldIdentifier]))
            .collect()
    }
}

impl AttributeList {
    /// Attribute names such as `inline` or `export`.
    pub fn names(&self) -> Vec<String> {
        self.0
            .descendants()
            .filter(|n| n.kind() == SyntaxKind::AttributeSpec)
            .filter_map(|n| name_of(&n, &[SyntaxKind::Identifier]))
            .collect()
    }
}

impl ShortVarDeclaration {
    pub fn left(&self) -> Option<ExpressionList> {
        self.0.children().find_map(ExpressionList::cast)
    }

    pub fn right(&self) -> Option<ExpressionList> {
        self.0.children().filter_map(ExpressionList::cast).nth(1)
    }
}

impl AssignmentStatement {
    pub fn left(&self) -> Option<ExpressionList> {
        self.0.children().find_map(ExpressionList::cast)
    }

    pub fn operator(&self) -> Option<SyntaxToken> {
        first_token(&self.0)
    }

    pub fn right(&self) -> Option<ExpressionList> {
        self.0.children().filter_map(ExpressionList::cast).nth(1)
    }
}

impl ExpressionList {
    pub fn exprs(&self) -> impl Iterator<Item = Expr> + '_ {
        self.0.children().filter_map(Expr::cast)
    }
}

impl ReturnStatement {
    pub fn values(&self) -> Option<ExpressionList> {
        self.0.children().find_map(ExpressionList::cast)
    }
}

impl ForStatement {
    pub fn for_in(&self) -> Option<ForInOperator> {
        self.0.children().find_map(ForInOperator::cast)
    }

    pub fn is_cstyle(&self) -> bool {
        self.0
            .children()
            .any(|c| c.kind() == SyntaxKind::CstyleForClause)
    }

    /// Loop condition of `for cond { }`.
    pub fn condition(&self) -> Option<Expr> {
        self.0.children().find_map(Expr::cast)
    }

    pub fn body(&self) -> Option<Block> {
        self.0.children().find_map(Block::cast)
    }
}

impl ForInOperator {
    /// Loop variables, without their `mut`.
    pub fn names(&self) -> Vec<String> {
        self.0
            .children_with_tokens()
            .take_while(|it| it.kind() != SyntaxKind::KwIn)
            .filter_map(|it| it.into_node())
            .flat_map(|c| match c.kind() {
                SyntaxKind::Identifier => Some(c),
                SyntaxKind::MutableExpression => {
                    c.children().find(|n| n.kind() == SyntaxKind::Identifier)
                }
                _ => None,
            })
            .map(|n| n.text().to_string().trim().to_string())
            .collect()
    }

    /// Iterated value; a `range` node for `a..b`.
    pub fn iterable(&self) -> Option<SyntaxNode> {
        self.0.children().last()
    }
}

impl BinaryExpression {
    pub fn left(&self) -> Option<Expr> {
        self.0.children().find_map(Expr::cast)
    }

    pub fn operator(&self) -> Option<SyntaxToken> {
        first_token(&self.0)
    }

    pub fn right(&self) -> Option<Expr> {
        self.0.children().filter_map(Expr::cast).nth(1)
    }
}

impl UnaryExpression {
    pub fn operator(&self) -> Option<SyntaxToken> {
        first_token(&self.0)
    }

    pub fn operand(&self) -> Option<Expr> {
        self.0.children().find_map(Expr::cast)
    }
}

impl CallExpression {
    pub fn function(&self) -> Option<Expr> {
        self.0.children().find_map(Expr::cast)
    }

    pub fn type_arguments(&self) -> Vec<Type> {
        self.0
            .children()
            .filter(|c| c.kind() == SyntaxKind::TypeParameters)
            .flat_map(|c| c.children())
            .filter_map(Type::cast)
            .collect()
    }

    pub fn arguments(&self) -> Option<ArgumentList> {
        self.0.children().find_map(ArgumentList::cast)
    }
}

impl ArgumentList {
    /// Positional arguments and `name: value` pairs, as raw nodes.
    pub fn args(&self) -> impl Iterator<Item = SyntaxNode> + '_ {
        self.0.children()
    }
}

impl SelectorExpression {
    pub fn operand(&self) -> Option<Expr> {
        self.0.children().find_map(Expr::cast)
    }

    pub fn field(&self) -> Option<String> {
        name_of(&self.0, &[SyntaxKind::FieldIdentifier])
    }
}

impl IndexExpression {
    pub fn operand(&self) -> Option<Expr> {
        self.0.children().find_map(Expr::cast)
    }

    pub fn index(&self) -> Option<Expr> {
        self.0.children().filter_map(Expr::cast).nth(1)
    }
}

impl ParenthesizedExpression {
    pub fn inner(&self) -> Option<Expr> {
        self.0.children().find_map(Expr::cast)
    }
}

impl IfExpression {
    /// Condition expression, or the `x := opt()` guard.
    pub fn condition(&self) -> Option<SyntaxNode> {
        self.0
            .children()
            .find(|c| c.kind() == SyntaxKind::ShortVarDeclaration || Expr::cast(c.clone()).is_some())
    }

    pub fn consequence(&self) -> Option<Block> {
        self.0.children().find_map(Block::cast)
    }

    /// `else` block or chained `else if`.
    pub fn alternative(&self) -> Option<SyntaxNode> {
        child_token(&self.0, SyntaxKind::KwElse)?;
        self.0.children().filter(|c| {
            matches!(c.kind(), SyntaxKind::Block | SyntaxKind::IfExpression)
        }).nth(1)
    }
}

impl MatchExpression {
    pub fn condition(&self) -> Option<Expr> {
        self.0.children().find_map(Expr::cast)
    }

    /// Arms, including the `else` arm.
    pub fn arms(&self) -> impl Iterator<Item = SyntaxNode> + '_ {
        self.0
            .children()
            .filter(|c| matches!(c.kind(), SyntaxKind::ExpressionCase | SyntaxKind::DefaultCase))
    }
}

impl FnLiteral {
    pub fn captures(&self) -> Vec<String> {
        self.0
            .children()
            .filter(|c| c.kind() == SyntaxKind::ExposedVariablesList)
            .flat_map(|c| c.descendants())
            .filter(|n| n.kind() == SyntaxKind::Identifier)
            .map(|n| n.text().to_string().trim().to_string())
            .collect()
    }

    pub fn body(&self) -> Option<Block> {
        self.0.children().find_map(Block::cast)
    }
}

impl TypeInitializer {
    pub fn ty(&self) -> Option<Type> {
        self.0.children().find_map(Type::cast)
    }

    /// `(field, value)` for keyed elements.
    pub fn fields(&self) -> Vec<(String, Option<Expr>)> {
        self.0
            .children()
            .filter(|c| c.kind() == SyntaxKind::LiteralValue)
            .flat_map(|c| c.children())
            .filter(|c| c.kind() == SyntaxKind::KeyedElement)
            .filter_map(|keyed| {
                let name = name_of(&keyed, &[SyntaxKind::FieldIdentifier])?;
                Some((name, keyed.children().find_map(Expr::cast)))
            })
            .collect()
    }
}

impl Identifier {
    pub fn text(&self) -> String {
        self.0.text().to_string().trim().to_string()
    }
}

impl IntLiteral {
    pub fn text(&self) -> String {
        self.0.text().to_string().trim().to_string()
    }
}
