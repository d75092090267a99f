//! Component detection
//!
//! Decides which functions define components using three lexical signals, in
//! order of authority: the declared name, a `memo`/`forwardRef` wrapper, and
//! JSX in the body. Also recognizes render-prop callback positions that must
//! never be treated as components.

use oxc_ast::ast::{CallExpression, Expression};
use oxc_span::GetSpan;
use tracing::trace;

use common::{
    is_lowercase_name, is_wrapper_name, CHILDREN_RENDER_PROP_COMPONENTS, CONTROLLER_COMPONENT,
    CONTROLLER_RENDER_PROP, RENDER_PROP_COMPONENTS, RENDER_PROP_NAMES,
};

use crate::tree::{NodeId, NodeKind, SyntaxTree};
use crate::utils::{callee_name, contains_markup, get_element_name};

/// Which wrapper a component is passed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrapperKind {
    Memo,
    ForwardRef,
}

impl WrapperKind {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "memo" => Some(Self::Memo),
            "forwardRef" => Some(Self::ForwardRef),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Memo => "memo",
            Self::ForwardRef => "forwardRef",
        }
    }
}

/// A recognized wrapper call around a component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WrapperInfo {
    pub kind: WrapperKind,
    /// Accessed through the library namespace (`React.memo`)
    pub qualified: bool,
}

impl WrapperInfo {
    /// Match a callee against `memo`, `forwardRef` and their `React.` forms
    pub fn from_callee(callee: &Expression) -> Option<Self> {
        let (name, qualified) = callee_name(callee)?;
        if !is_wrapper_name(name) {
            return None;
        }
        WrapperKind::from_name(name).map(|kind| Self { kind, qualified })
    }
}

/// A function that was classified as a component
#[derive(Debug, Clone, Copy)]
pub struct ComponentCandidate<'a> {
    pub node: NodeId,
    pub declared_name: Option<&'a str>,
    pub wrapper: Option<WrapperInfo>,
}

/// The call a function is directly passed to, as `(call node, call)`
pub fn direct_call<'a>(
    tree: &SyntaxTree<'a>,
    func: NodeId,
) -> Option<(NodeId, &'a CallExpression<'a>)> {
    let parent = tree.logical_parent(func)?;
    match tree.kind(parent) {
        // The callee position (an IIFE) is not an argument
        NodeKind::CallExpression(call) if call.callee.span().end <= tree.span(func).start => {
            Some((parent, call))
        }
        _ => None,
    }
}

/// Find a `memo`/`forwardRef` wrapper around a function.
///
/// Either the function is passed straight to the wrapper, or the first variable
/// declarator above it is initialized with a wrapper call.
pub fn detect_wrapper(tree: &SyntaxTree, func: NodeId) -> Option<WrapperInfo> {
    if let Some((_, call)) = direct_call(tree, func) {
        if let Some(info) = WrapperInfo::from_callee(&call.callee) {
            return Some(info);
        }
    }

    let declarator = tree.ancestors(func).find_map(|id| match tree.kind(id) {
        NodeKind::VariableDeclarator(decl) => Some(decl),
        _ => None,
    })?;

    match declarator.init.as_ref()?.without_parentheses() {
        Expression::CallExpression(call) => WrapperInfo::from_callee(&call.callee),
        _ => None,
    }
}

/// Name of the variable a node initializes, if the node is a declarator's init
fn binding_name<'a>(tree: &SyntaxTree<'a>, node: NodeId) -> Option<&'a str> {
    let parent = tree.logical_parent(node)?;
    let NodeKind::VariableDeclarator(decl) = tree.kind(parent) else {
        return None;
    };
    let init = decl.init.as_ref()?;
    if init.without_parentheses().span() != tree.span(node) {
        return None;
    }
    decl.id.get_binding_identifier().map(|id| id.name.as_str())
}

/// The name a function is declared under.
///
/// Its own name, else the variable it initializes, else the variable that
/// holds the call it is passed to.
pub fn declared_name<'a>(tree: &SyntaxTree<'a>, func: NodeId) -> Option<&'a str> {
    if let NodeKind::Function(f) = tree.kind(func) {
        if let Some(id) = &f.id {
            return Some(id.name.as_str());
        }
    }

    binding_name(tree, func).or_else(|| {
        let (call_node, _) = direct_call(tree, func)?;
        binding_name(tree, call_node)
    })
}

/// Classify a function, returning the candidate if it is a component
pub fn classify<'a>(tree: &SyntaxTree<'a>, func: NodeId) -> Option<ComponentCandidate<'a>> {
    let declared_name = declared_name(tree, func);

    if declared_name.is_some_and(is_lowercase_name) {
        trace!(name = declared_name, "lowercase name, not a component");
        return None;
    }

    // Passed as a callback to an arbitrary function (hooks, array methods)
    if let Some((_, call)) = direct_call(tree, func) {
        if WrapperInfo::from_callee(&call.callee).is_none() {
            trace!(name = declared_name, "callback argument, not a component");
            return None;
        }
    }

    if let Some(wrapper) = detect_wrapper(tree, func) {
        return Some(ComponentCandidate { node: func, declared_name, wrapper: Some(wrapper) });
    }

    if contains_markup(tree, tree.function_body(func)) {
        return Some(ComponentCandidate { node: func, declared_name, wrapper: None });
    }

    trace!(name = declared_name, "no wrapper and no JSX, not a component");
    None
}

/// Check if a function defines a component
pub fn is_component(tree: &SyntaxTree, func: NodeId) -> bool {
    classify(tree, func).is_some()
}

/// Check if a function sits in a render-prop position.
///
/// Exempt positions:
/// - `<Controller render={fn} />`
/// - `<Field>{fn}</Field>` (and the other children render-prop components)
/// - `<Query renderItem={fn} />` (known render-prop names on known components)
pub fn is_exempt_render_prop(tree: &SyntaxTree, func: NodeId) -> bool {
    let Some(container) = tree.logical_parent(func) else {
        return false;
    };
    if !matches!(tree.kind(container), NodeKind::JsxExpressionContainer) {
        return false;
    }
    let Some(owner) = tree.logical_parent(container) else {
        return false;
    };

    match tree.kind(owner) {
        NodeKind::JsxAttribute(attr) => {
            let Some(prop_name) = common::get_attribute_name(attr) else {
                return false;
            };
            let Some(NodeKind::JsxOpeningElement(opening)) =
                tree.logical_parent(owner).map(|id| tree.kind(id))
            else {
                return false;
            };
            let component = get_element_name(opening);

            if prop_name == CONTROLLER_RENDER_PROP && component == CONTROLLER_COMPONENT {
                return true;
            }
            RENDER_PROP_NAMES.contains(prop_name)
                && RENDER_PROP_COMPONENTS.contains(component.as_str())
        }
        NodeKind::JsxElement(element) => {
            let component = get_element_name(&element.opening_element);
            CHILDREN_RENDER_PROP_COMPONENTS.contains(component.as_str())
        }
        _ => false,
    }
}

/// Check if a function definition is one the rule inspects.
///
/// Arrow functions and function declarations always are. Function expressions
/// only when bound to a variable, passed to a call, or placed in a JSX
/// expression; object and class methods never are.
pub fn is_inspectable_function(tree: &SyntaxTree, func: NodeId) -> bool {
    match tree.kind(func) {
        NodeKind::ArrowFunction(_) => true,
        NodeKind::Function(f) if f.is_declaration() => f.body.is_some(),
        NodeKind::Function(f) if f.is_expression() => tree.logical_parent(func).is_some_and(|parent| {
            matches!(
                tree.kind(parent),
                NodeKind::VariableDeclarator(_)
                    | NodeKind::CallExpression(_)
                    | NodeKind::JsxExpressionContainer
            )
        }),
        _ => false,
    }
}
