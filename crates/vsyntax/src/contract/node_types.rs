//! Static `node-types.json` table for the trees the parser builds.

use rowan::Language;
use vsyntax_core::{FieldInfo, NodeType, NodeTypeTable, TypeRef};

use crate::parser::cst::SyntaxKind::{self, *};
use crate::parser::cst::VLang;
use crate::parser::cst::token_sets::{ASSIGN_OPS, PREFIX_OPS};
use crate::parser::infix_binding_power;

const EXPRESSION: &str = "_expression";
const STATEMENT: &str = "_statement";
const DECLARATION: &str = "_top_level_declaration";
const TYPE: &str = "_type";

/// Hidden supertype rules, in output order.
pub const SUPERTYPES: &[&str] = &[EXPRESSION, STATEMENT, DECLARATION, TYPE];

const EXPRESSION_KINDS: &[SyntaxKind] = &[
    ParenthesizedExpression,
    UnaryExpression,
    BinaryExpression,
    AsTypeCastExpression,
    TypeCastExpression,
    CallExpression,
    SpecialCallExpression,
    ComptimeIdentifier,
    ComptimeSelectorExpression,
    OptionPropagator,
    NoneLiteral,
    TrueLiteral,
    FalseLiteral,
    SpreadOperator,
    TypeInitializer,
    Map,
    Array,
    FixedArray,
    MutableExpression,
    BindedIdentifier,
    SelectorExpression,
    IndexExpression,
    SliceExpression,
    InExpression,
    IsExpression,
    TypeSelectorExpression,
    PseudoComptimeIdentifier,
    FnLiteral,
    IfExpression,
    ComptimeIfExpression,
    MatchExpression,
    SelectExpression,
    LockExpression,
    UnsafeExpression,
    SqlExpression,
    Identifier,
    IntLiteral,
    FloatLiteral,
    RuneLiteral,
    InterpretedStringLiteral,
    RawStringLiteral,
    CStringLiteral,
];

const STATEMENT_KINDS: &[SyntaxKind] = &[
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
    Block,
];

const DECLARATION_KINDS: &[SyntaxKind] = &[
    ModuleClause,
    ImportDeclaration,
    ConstDeclaration,
    GlobalVarDeclaration,
    FunctionDeclaration,
    TypeDeclaration,
    StructDeclaration,
    EnumDeclaration,
    InterfaceDeclaration,
    CIncludeClause,
    CFlagClause,
    CDefineClause,
    CPkgconfig,
];

const TYPE_KINDS: &[SyntaxKind] = &[
    BuiltinType,
    TypeIdentifier,
    TypePlaceholder,
    QualifiedType,
    BindedType,
    GenericType,
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
];

/// Every node type of the V tree: supertypes, named nodes, the `comment` extra, and
/// the anonymous operator tokens that operator fields refer to.
pub fn node_types() -> Vec<NodeType> {
    let mut nodes: Vec<NodeType> = SUPERTYPES
        .iter()
        .map(|&name| NodeType {
            subtypes: Some(subtypes(name)),
            ..NodeType::named(name)
        })
        .collect();

    for kind in SyntaxKind::node_kinds() {
        if matches!(kind, Error | Missing) {
            continue;
        }
        let mut node = NodeType::named(kind.name());
        node.root = kind == SourceFile;
        node.fields = fields_of(kind).into_iter().collect();
        node.children = children_of(kind);
        nodes.push(node);
    }

    nodes.push(NodeType {
        extra: true,
        ..NodeType::named(LineComment.name())
    });

    let mut anonymous: Vec<String> = Vec::new();
    for node in &nodes {
        for info in node.fields.values() {
            for ty in info.types.iter().filter(|t| !t.named) {
                if !anonymous.contains(&ty.type_name) {
                    anonymous.push(ty.type_name.clone());
                }
            }
        }
    }
    nodes.extend(anonymous.into_iter().map(NodeType::anonymous));
    nodes
}

/// [`node_types`] indexed by name.
pub fn node_type_table() -> NodeTypeTable {
    NodeTypeTable::new(node_types())
}

pub(super) fn token_kinds() -> impl Iterator<Item = SyntaxKind> {
    (0..Error as u16).map(|raw| VLang::kind_from_raw(rowan::SyntaxKind(raw)))
}

pub(super) fn binary_operators() -> impl Iterator<Item = (SyntaxKind, u8)> {
    token_kinds().filter_map(|kind| infix_binding_power(kind).map(|bp| (kind, bp)))
}

fn subtypes(supertype: &str) -> Vec<TypeRef> {
    let kinds = match supertype {
        EXPRESSION => EXPRESSION_KINDS,
        STATEMENT => STATEMENT_KINDS,
        DECLARATION => DECLARATION_KINDS,
        _ => TYPE_KINDS,
    };
    let mut refs: Vec<TypeRef> = kinds.iter().map(|k| TypeRef::named(k.name())).collect();
    if supertype == STATEMENT {
        refs.push(TypeRef::named(EXPRESSION));
    }
    refs
}

fn slot(multiple: bool, required: bool, types: &[&str]) -> FieldInfo {
    FieldInfo {
        multiple,
        required,
        types: types.iter().map(|&t| TypeRef::named(t)).collect(),
    }
}

fn required(name: &'static str, types: &[&str]) -> (String, FieldInfo) {
    (name.to_owned(), slot(false, true, types))
}

fn optional(name: &'static str, types: &[&str]) -> (String, FieldInfo) {
    (name.to_owned(), slot(false, false, types))
}

fn operator(spellings: impl IntoIterator<Item = &'static str>) -> (String, FieldInfo) {
    let types = spellings
        .into_iter()
        .map(|s| TypeRef {
            type_name: s.to_owned(),
            named: false,
        })
        .collect();
    let info = FieldInfo {
        multiple: false,
        required: true,
        types,
    };
    ("operator".to_owned(), info)
}

fn binary_spellings() -> Vec<&'static str> {
    binary_operators()
        .map(|(kind, _)| kind)
        .filter(|kind| !matches!(kind, KwAs | KwIn | NotIn | KwIs | NotIs))
        .map(SyntaxKind::name)
        .collect()
}

fn fields_of(kind: SyntaxKind) -> Vec<(String, FieldInfo)> {
    let params = &["parameter_list", "type_only_parameter_list"];
    match kind {
        UnaryExpression => vec![
            operator(token_kinds().filter(|k| PREFIX_OPS.contains(*k)).map(SyntaxKind::name)),
            required("operand", &[EXPRESSION]),
        ],
        BinaryExpression => vec![
            required("left", &[EXPRESSION]),
            operator(binary_spellings()),
            required("right", &[EXPRESSION]),
        ],
        AsTypeCastExpression => vec![
            required("value", &[EXPRESSION]),
            required("type", &[TYPE]),
        ],
        TypeCastExpression => vec![
            required("type", &[TYPE]),
            required("value", &[EXPRESSION]),
        ],
        CallExpression => vec![
            required("function", &[EXPRESSION]),
            optional("type_parameters", &["type_parameters"]),
            required("arguments", &["argument_list"]),
        ],
        SpecialCallExpression => vec![
            required("function", &["identifier"]),
            required("arguments", &["special_argument_list"]),
        ],
        TypeInitializer => vec![
            required("type", &[TYPE]),
            required("body", &["literal_value"]),
        ],
        KeyedElement => vec![
            required("key", &["field_identifier", EXPRESSION]),
            required("value", &[EXPRESSION]),
        ],
        SelectorExpression => vec![
            required("operand", &[EXPRESSION]),
            required("field", &["field_identifier"]),
        ],
        IndexExpression => vec![
            required("operand", &[EXPRESSION]),
            required("index", &[EXPRESSION]),
        ],
        SliceExpression => vec![
            required("operand", &[EXPRESSION]),
            optional("start", &[EXPRESSION]),
            optional("end", &[EXPRESSION]),
        ],
        Range => vec![
            optional("start", &[EXPRESSION]),
            optional("end", &[EXPRESSION]),
        ],
        InExpression => vec![
            required("left", &[EXPRESSION]),
            operator([KwIn.name(), NotIn.name()]),
            required("right", &[EXPRESSION]),
        ],
        IsExpression => vec![
            required("left", &[EXPRESSION]),
            operator([KwIs.name(), NotIs.name()]),
            required("right", &[TYPE]),
        ],
        TypeSelectorExpression => vec![
            optional("type", &[TYPE]),
            required("field_name", &["field_identifier"]),
        ],
        FnLiteral => vec![
            optional("captures", &["exposed_variables_list"]),
            required("parameters", params),
            optional("result", &[TYPE]),
            required("body", &["block"]),
        ],
        IfExpression => vec![
            required("condition", &[EXPRESSION, "short_var_declaration"]),
            required("consequence", &["block"]),
            optional("alternative", &["block", "if_expression"]),
        ],
        ComptimeIfExpression => vec![
            required("condition", &[EXPRESSION]),
            required("consequence", &["block"]),
            optional("alternative", &["block", "comptime_if_expression"]),
        ],
        MatchExpression => vec![required("condition", &[EXPRESSION])],
        ExpressionCase | DefaultCase => vec![required("consequence", &["block"])],
        MapType => vec![required("key", &[TYPE]), required("value", &[TYPE])],
        FunctionType => vec![
            required("parameters", params),
            optional("result", &[TYPE]),
        ],
        ShortVarDeclaration => vec![
            required("left", &["expression_list"]),
            required("right", &["expression_list"]),
        ],
        AssignmentStatement => vec![
            required("left", &["expression_list"]),
            operator(token_kinds().filter(|k| ASSIGN_OPS.contains(*k)).map(SyntaxKind::name)),
            required("right", &["expression_list"]),
        ],
        SendStatement => vec![
            required("channel", &[EXPRESSION]),
            required("value", &[EXPRESSION]),
        ],
        BreakStatement | ContinueStatement => vec![optional("label", &["label_name"])],
        GotoStatement | LabeledStatement => vec![required("label", &["label_name"])],
        ForStatement | ComptimeForStatement => vec![required("body", &["block"])],
        ForInOperator => vec![required("iterable", &[EXPRESSION, "range"])],
        ImportDeclaration => vec![
            required("path", &["import_path"]),
            optional("alias", &["import_alias"]),
            optional("symbols", &["import_symbols"]),
        ],
        ConstSpec | GlobalVarSpec => vec![
            required("name", &["identifier"]),
            required("value", &[EXPRESSION]),
        ],
        GlobalVarTypeInitializer => vec![
            required("name", &["identifier"]),
            required("type", &[TYPE]),
        ],
        FunctionDeclaration => vec![
            optional("attributes", &["attribute_list"]),
            optional("receiver", &["parameter_list"]),
            required(
                "name",
                &["identifier", "binded_identifier", "overloadable_operator"],
            ),
            optional("type_parameters", &["type_parameters"]),
            required("parameters", params),
            optional("result", &[TYPE]),
            optional("body", &["block"]),
        ],
        ParameterDeclaration => vec![
            optional("name", &["identifier"]),
            required("type", &[TYPE]),
        ],
        TypeDeclaration => vec![
            required("name", &["type_identifier"]),
            optional("type_parameters", &["type_parameters"]),
        ],
        StructDeclaration => vec![
            optional("attributes", &["attribute_list"]),
            required("name", &["type_identifier", "binded_type"]),
            optional("type_parameters", &["type_parameters"]),
            required("body", &["struct_field_declaration_list"]),
        ],
        StructFieldDeclaration => vec![
            optional("name", &["field_identifier"]),
            required("type", &[TYPE]),
            optional("default_value", &[EXPRESSION]),
            optional("attributes", &["attribute_declaration"]),
        ],
        EnumDeclaration => vec![
            required("name", &["type_identifier"]),
            optional("type", &[TYPE]),
            required("body", &["enum_member_declaration_list"]),
        ],
        EnumMember => vec![
            required("name", &["identifier"]),
            optional("value", &[EXPRESSION]),
        ],
        InterfaceDeclaration => vec![
            required("name", &["type_identifier"]),
            required("body", &["interface_spec_list"]),
        ],
        InterfaceSpec => vec![
            required("name", &["field_identifier"]),
            required("parameters", params),
            optional("result", &[TYPE]),
        ],
        _ => Vec::new(),
    }
}

fn children_of(kind: SyntaxKind) -> Option<FieldInfo> {
    let info = match kind {
        SourceFile | Block => slot(true, false, &[STATEMENT, DECLARATION]),
        ExpressionList => slot(true, true, &[EXPRESSION]),
        ArgumentList => slot(true, false, &[EXPRESSION, "keyed_element", TYPE]),
        ParenthesizedExpression | IncStatement | DecStatement => slot(false, true, &[EXPRESSION]),
        InterpretedStringLiteral | RawStringLiteral | CStringLiteral => {
            slot(true, false, &["escape_sequence", "string_interpolation"])
        }
        StringInterpolation => slot(true, true, &[EXPRESSION, "format_specifier"]),
        MatchExpression => slot(true, false, &["expression_case", "default_case"]),
        ExpressionCase => slot(true, true, &[EXPRESSION, TYPE, "range", "type_list"]),
        TypeList => slot(true, true, &[TYPE]),
        SqlExpression => slot(false, false, &["identifier", "selector_expression"]),
        ParameterList => slot(true, false, &["parameter_declaration"]),
        TypeOnlyParameterList => slot(true, false, &[TYPE]),
        ReturnStatement => slot(false, false, &["expression_list"]),
        AttributeList => slot(true, true, &["attribute_declaration"]),
        AttributeDeclaration => slot(true, true, &["attribute_spec"]),
        ModuleClause => slot(false, true, &["identifier"]),
        _ => return None,
    };
    Some(info)
}
