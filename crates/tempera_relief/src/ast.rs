//! Template AST node types.
//!
//! This module defines the AST handed to the generator by a parser. The
//! generator only borrows it, so one AST can be compiled any number of times.
//! Embedded code is kept as verbatim [`Expression`] snippets: nothing here
//! knows the grammar of the target language.

use serde::{Deserialize, Serialize};
use tempera_carton::String;

// ============================================================================
// Positions
// ============================================================================

/// A cursor position in a text.
///
/// `line` and `col` are zero-based; `col` counts Unicode scalar values since
/// the start of the line, `index` counts bytes since the start of the text.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct Position {
    /// Byte offset from start of text
    pub index: u32,
    /// Zero-based line number
    pub line: u32,
    /// Zero-based column, in scalar values
    pub col: u32,
}

impl Position {
    pub const fn new(index: u32, line: u32, col: u32) -> Self {
        Self { index, line, col }
    }

    /// Advance the position over `text`. Counters saturate at `u32::MAX`.
    pub fn advance(&mut self, text: &str) {
        for c in text.chars() {
            if c == '\n' {
                self.line = self.line.saturating_add(1);
                self.col = 0;
            } else {
                self.col = self.col.saturating_add(1);
            }
        }
        let len = u32::try_from(text.len()).unwrap_or(u32::MAX);
        self.index = self.index.saturating_add(len);
    }
}

/// Span `[from, to]` of a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Range {
    pub from: Position,
    pub to: Position,
}

impl Range {
    pub const fn new(from: Position, to: Position) -> Self {
        Self { from, to }
    }

    /// Whether `position` lies inside the range. The end is inclusive so a
    /// cursor placed right after the last character still hits the range.
    pub fn contains(&self, position: Position) -> bool {
        self.from.index <= position.index && position.index <= self.to.index
    }

    /// Length in bytes.
    pub fn len(&self) -> u32 {
        self.to.index - self.from.index
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A verbatim snippet of target-language code and where it came from.
///
/// The generator never looks inside the snippet; it only relocates it and
/// records the relocation in the source map. The source range is the
/// expression's identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Expression {
    pub value: String,
    pub range: Range,
}

impl Expression {
    pub fn new(value: impl Into<String>, range: Range) -> Self {
        Self {
            value: value.into(),
            range,
        }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        self.value.as_str()
    }
}

// ============================================================================
// Files and declarations
// ============================================================================

/// One template file: a namespace, explicit imports and the declarations in
/// source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateFile {
    /// Name of the module the file compiles into
    pub package: Expression,
    /// Paths imported into the generated module
    #[serde(default)]
    pub imports: Vec<Expression>,
    #[serde(default)]
    pub declarations: Vec<Declaration>,
}

impl TemplateFile {
    pub fn new(package: Expression) -> Self {
        Self {
            package,
            imports: Vec::new(),
            declarations: Vec::new(),
        }
    }

    pub fn has_html_templates(&self) -> bool {
        self.declarations
            .iter()
            .any(|d| matches!(d, Declaration::Html(_)))
    }

    pub fn has_css_templates(&self) -> bool {
        self.declarations
            .iter()
            .any(|d| matches!(d, Declaration::Css(_)))
    }
}

/// Top-level template declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Declaration {
    Html(HtmlTemplate),
    Css(CssTemplate),
    Script(ScriptTemplate),
}

impl Declaration {
    pub fn name(&self) -> &Expression {
        match self {
            Self::Html(t) => &t.name,
            Self::Css(t) => &t.name,
            Self::Script(t) => &t.name,
        }
    }
}

/// An HTML template compiled into a renderable unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HtmlTemplate {
    pub name: Expression,
    /// Parameter list, verbatim and unchecked
    pub parameters: Expression,
    pub children: Vec<Node>,
}

/// A CSS template compiled into a component class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CssTemplate {
    pub name: Expression,
    pub parameters: Expression,
    pub properties: Vec<CssProperty>,
}

/// A script template compiled into a named JavaScript function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptTemplate {
    pub name: Expression,
    pub parameters: Expression,
    /// Verbatim JavaScript function body
    pub body: String,
}

/// One declaration of a CSS template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum CssProperty {
    /// Value known at compile time
    Constant(ConstantCssProperty),
    /// Value computed at render time
    Expression(ExpressionCssProperty),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstantCssProperty {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpressionCssProperty {
    pub name: String,
    pub value: Expression,
}

// ============================================================================
// Template Nodes
// ============================================================================

/// All template child node types
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Node {
    DocType(DocType),
    Element(Element),
    Text(Text),
    /// Whitespace between nodes; never rendered
    Whitespace(Whitespace),
    StringExpression(StringExpression),
    For(ForExpression),
    If(IfExpression),
    Switch(SwitchExpression),
    CallTemplate(CallTemplateExpression),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocType {
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Text {
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Whitespace {
    pub value: String,
}

/// `{ expr }`: the escaped runtime value of an expression
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringExpression {
    pub expression: Expression,
}

/// Loop over the children; the expression is the loop header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForExpression {
    pub expression: Expression,
    pub children: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IfExpression {
    pub expression: Expression,
    pub then: Vec<Node>,
    #[serde(default)]
    pub else_branch: Option<Vec<Node>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwitchExpression {
    pub expression: Expression,
    pub cases: Vec<CaseExpression>,
    #[serde(default)]
    pub default: Option<Vec<Node>>,
}

/// One `case`; the expression is matched against the switch value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseExpression {
    pub expression: Expression,
    pub children: Vec<Node>,
}

/// Render another renderable unit into the current output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallTemplateExpression {
    pub expression: Expression,
}

// ============================================================================
// Elements
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    pub name: String,
    /// Void elements have no closing tag and must not have children
    pub void: bool,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    #[serde(default)]
    pub children: Vec<Node>,
}

impl Element {
    /// Create an element, deriving the void flag from the tag name.
    pub fn new(name: impl Into<String>, attributes: Vec<Attribute>, children: Vec<Node>) -> Self {
        let name = name.into();
        let void = tempera_carton::is_void_tag(&name);
        Self {
            name,
            void,
            attributes,
            children,
        }
    }
}

/// Element attribute
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Attribute {
    /// `name="value"`
    Constant(ConstantAttribute),
    /// `name`
    BoolConstant(BoolConstantAttribute),
    /// `name={ expr }`
    Expression(ExpressionAttribute),
    /// `name?={ expr }`
    BoolExpression(BoolExpressionAttribute),
}

impl Attribute {
    pub fn name(&self) -> &str {
        match self {
            Self::Constant(a) => a.name.as_str(),
            Self::BoolConstant(a) => a.name.as_str(),
            Self::Expression(a) => a.name.as_str(),
            Self::BoolExpression(a) => a.name.as_str(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstantAttribute {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoolConstantAttribute {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpressionAttribute {
    pub name: String,
    pub expression: Expression,
}

impl ExpressionAttribute {
    /// Event handler attributes (`onclick`, `onload`, ...) carry scripts.
    pub fn is_event_handler(&self) -> bool {
        self.name.starts_with("on")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoolExpressionAttribute {
    pub name: String,
    pub expression: Expression,
}
