//! Syntax-tree arena with parent back-references
//!
//! oxc's AST is owned top-down and has no parent pointers. The rule needs to look
//! upward (which call wraps this arrow? which JSX attribute holds it?), so the
//! program is flattened once into an arena of [`SyntaxNode`]s in pre-order. Each
//! node stores the index of its parent; parents are only ever used for lookups.
//!
//! Because nodes are stored in pre-order, the descendants of a node are exactly
//! the contiguous index range `id..subtree_end`.

use oxc_ast::ast::{
    ArrowFunctionExpression, BindingIdentifier, CallExpression, Function, FunctionBody,
    IdentifierReference, JSXAttribute, JSXElement, JSXOpeningElement, Program,
    VariableDeclarator,
};
use oxc_ast::AstKind;
use oxc_ast_visit::Visit;
use oxc_span::{GetSpan, Span};

/// Index of a node in a [`SyntaxTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u32);

impl NodeId {
    /// The program node
    pub const ROOT: NodeId = NodeId(0);

    fn new(index: usize) -> Self {
        Self(index as u32)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// The node kinds the rule distinguishes; everything else is `Other`
#[derive(Debug, Clone, Copy)]
pub enum NodeKind<'a> {
    Program,
    /// Function declaration or function expression
    Function(&'a Function<'a>),
    ArrowFunction(&'a ArrowFunctionExpression<'a>),
    FunctionBody(&'a FunctionBody<'a>),
    FormalParameters,
    FormalParameter,
    ObjectPattern,
    TypeAnnotation,
    CallExpression(&'a CallExpression<'a>),
    VariableDeclarator(&'a VariableDeclarator<'a>),
    IdentifierReference(&'a IdentifierReference<'a>),
    BindingIdentifier(&'a BindingIdentifier<'a>),
    /// String or template literal; its text is significant byte for byte
    TextLiteral,
    Parenthesized,
    JsxElement(&'a JSXElement<'a>),
    JsxOpeningElement(&'a JSXOpeningElement<'a>),
    JsxAttribute(&'a JSXAttribute<'a>),
    JsxExpressionContainer,
    JsxFragment,
    JsxText,
    Other,
}

impl<'a> NodeKind<'a> {
    fn from_ast(kind: AstKind<'a>) -> Self {
        match kind {
            AstKind::Program(_) => Self::Program,
            AstKind::Function(func) => Self::Function(func),
            AstKind::ArrowFunctionExpression(arrow) => Self::ArrowFunction(arrow),
            AstKind::FunctionBody(body) => Self::FunctionBody(body),
            AstKind::FormalParameters(_) => Self::FormalParameters,
            AstKind::FormalParameter(_) => Self::FormalParameter,
            AstKind::ObjectPattern(_) => Self::ObjectPattern,
            AstKind::TSTypeAnnotation(_) => Self::TypeAnnotation,
            AstKind::CallExpression(call) => Self::CallExpression(call),
            AstKind::VariableDeclarator(decl) => Self::VariableDeclarator(decl),
            AstKind::IdentifierReference(ident) => Self::IdentifierReference(ident),
            AstKind::BindingIdentifier(ident) => Self::BindingIdentifier(ident),
            AstKind::StringLiteral(_) | AstKind::TemplateLiteral(_) => Self::TextLiteral,
            AstKind::ParenthesizedExpression(_) => Self::Parenthesized,
            AstKind::JSXElement(element) => Self::JsxElement(element),
            AstKind::JSXOpeningElement(opening) => Self::JsxOpeningElement(opening),
            AstKind::JSXAttribute(attr) => Self::JsxAttribute(attr),
            AstKind::JSXExpressionContainer(_) => Self::JsxExpressionContainer,
            AstKind::JSXFragment(_) => Self::JsxFragment,
            AstKind::JSXText(_) => Self::JsxText,
            _ => Self::Other,
        }
    }

    /// Check if this node belongs to the JSX grammar
    pub fn is_markup(&self) -> bool {
        match self {
            Self::JsxElement(_)
            | Self::JsxOpeningElement(_)
            | Self::JsxAttribute(_)
            | Self::JsxExpressionContainer
            | Self::JsxFragment
            | Self::JsxText => true,
            Self::Program
            | Self::Function(_)
            | Self::ArrowFunction(_)
            | Self::FunctionBody(_)
            | Self::FormalParameters
            | Self::FormalParameter
            | Self::ObjectPattern
            | Self::TypeAnnotation
            | Self::CallExpression(_)
            | Self::VariableDeclarator(_)
            | Self::IdentifierReference(_)
            | Self::BindingIdentifier(_)
            | Self::TextLiteral
            | Self::Parenthesized
            | Self::Other => false,
        }
    }

    /// Check if this node defines a function the rule may inspect
    pub fn is_function(&self) -> bool {
        matches!(self, Self::Function(_) | Self::ArrowFunction(_))
    }
}

/// A node in the arena
#[derive(Debug, Clone, Copy)]
pub struct SyntaxNode<'a> {
    pub kind: NodeKind<'a>,
    pub span: Span,
    pub parent: Option<NodeId>,
    /// One past the last descendant's index
    subtree_end: usize,
}

/// Flattened, immutable view of a parsed program
#[derive(Debug)]
pub struct SyntaxTree<'a> {
    nodes: Vec<SyntaxNode<'a>>,
}

impl<'a> SyntaxTree<'a> {
    /// Flatten a program into an arena in a single traversal
    pub fn build(program: &'a Program<'a>) -> Self {
        let mut builder = TreeBuilder::default();
        builder.visit_program(program);
        Self { nodes: builder.nodes }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: NodeId) -> &SyntaxNode<'a> {
        &self.nodes[id.index()]
    }

    pub fn kind(&self, id: NodeId) -> NodeKind<'a> {
        self.nodes[id.index()].kind
    }

    pub fn span(&self, id: NodeId) -> Span {
        self.nodes[id.index()].span
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.index()].parent
    }

    /// Parent as the original ESTree shape would see it.
    ///
    /// Parenthesized expressions are skipped, and so are wrapper nodes that cover
    /// exactly the same span as the child (argument and JSX child wrappers).
    pub fn logical_parent(&self, id: NodeId) -> Option<NodeId> {
        let mut child_span = self.span(id);
        let mut current = self.parent(id)?;
        loop {
            let node = self.node(current);
            let transparent = match node.kind {
                NodeKind::Parenthesized => true,
                NodeKind::Other => node.span == child_span,
                _ => false,
            };
            if !transparent {
                return Some(current);
            }
            child_span = node.span;
            current = node.parent?;
        }
    }

    /// All ancestors from the parent up to the root
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.parent(id), move |&current| self.parent(current))
    }

    /// The node itself followed by all of its descendants, in pre-order
    pub fn subtree(&self, id: NodeId) -> impl Iterator<Item = NodeId> {
        (id.index()..self.nodes[id.index()].subtree_end).map(NodeId::new)
    }

    /// All descendants of a node, in pre-order
    pub fn descendants(&self, id: NodeId) -> impl Iterator<Item = NodeId> {
        self.subtree(id).skip(1)
    }

    /// Direct children of a node, in source order
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.descendants(id)
            .filter(move |&child| self.parent(child) == Some(id))
    }

    /// All function definitions, outermost first
    pub fn functions(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len())
            .map(NodeId::new)
            .filter(move |&id| self.kind(id).is_function())
    }

    /// Check if any identifier in the subtree, bound or referenced, has this name
    pub fn mentions_identifier(&self, id: NodeId, name: &str) -> bool {
        self.subtree(id).any(|node| match self.kind(node) {
            NodeKind::IdentifierReference(ident) => ident.name == name,
            NodeKind::BindingIdentifier(ident) => ident.name == name,
            _ => false,
        })
    }

    /// Body of a function node, if it has one
    pub fn function_body(&self, id: NodeId) -> Option<NodeId> {
        self.children(id)
            .find(|&child| matches!(self.kind(child), NodeKind::FunctionBody(_)))
    }
}

/// Builds the arena from `enter_node`/`leave_node` callbacks
#[derive(Default)]
struct TreeBuilder<'a> {
    nodes: Vec<SyntaxNode<'a>>,
    stack: Vec<NodeId>,
}

impl<'a> Visit<'a> for TreeBuilder<'a> {
    fn enter_node(&mut self, kind: AstKind<'a>) {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(SyntaxNode {
            kind: NodeKind::from_ast(kind),
            span: kind.span(),
            parent: self.stack.last().copied(),
            subtree_end: id.index() + 1,
        });
        self.stack.push(id);
    }

    fn leave_node(&mut self, _kind: AstKind<'a>) {
        if let Some(id) = self.stack.pop() {
            self.nodes[id.index()].subtree_end = self.nodes.len();
        }
    }
}
