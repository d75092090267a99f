//! Fix synthesis for destructured component parameters
//!
//! Every edit is computed against the original source text. The parameter is
//! replaced with `props` and the destructuring moves into a `const` at the top
//! of the body; expression-bodied arrows get a block body.

use oxc_ast::ast::{Expression, FormalParameters, Statement};
use oxc_span::{GetSpan, Span};

use common::{column, line_indent, reindent, PROPS_PARAM};

use crate::diagnostic::Fix;
use crate::tree::{NodeId, NodeKind, SyntaxTree};

/// A first parameter written as a bare object destructuring pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DestructuredParam {
    /// The formal parameter node
    pub node: NodeId,
    /// Whole parameter, including any type annotation
    pub span: Span,
    /// The `{ ... }` pattern alone
    pub pattern: Span,
    /// Type annotation after the pattern, if any
    pub type_annotation: Option<Span>,
}

/// Outcome of fix synthesis
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixResult {
    pub fixable: bool,
    pub fixes: Vec<Fix>,
}

impl FixResult {
    fn unfixable() -> Self {
        Self::default()
    }

    fn with(fixes: Vec<Fix>) -> Self {
        Self { fixable: true, fixes }
    }
}

fn formal_params<'a>(tree: &SyntaxTree<'a>, func: NodeId) -> Option<&'a FormalParameters<'a>> {
    match tree.kind(func) {
        // A TypeScript `this` parameter comes first in the list the user wrote
        NodeKind::Function(f) if f.this_param.is_none() => Some(&f.params),
        NodeKind::ArrowFunction(arrow) => Some(&arrow.params),
        _ => None,
    }
}

/// Find the parameter to rewrite.
///
/// Functions with one or two parameters have their first one inspected; the
/// second (e.g. a forwarded ref) is left alone. Defaulted patterns such as
/// `{ a } = {}` are not matched.
pub fn destructured_param(tree: &SyntaxTree, func: NodeId) -> Option<DestructuredParam> {
    let params = formal_params(tree, func)?;
    let count = params.items.len() + usize::from(params.rest.is_some());
    if !(1..=2).contains(&count) {
        return None;
    }
    let first_span = params.items.first()?.span;

    let node = tree.descendants(func).find(|&id| {
        matches!(tree.kind(id), NodeKind::FormalParameter) && tree.span(id) == first_span
    })?;

    let pattern = tree
        .descendants(node)
        .find(|&id| matches!(tree.kind(id), NodeKind::ObjectPattern))
        .map(|id| tree.span(id))
        .filter(|pattern| pattern.start == first_span.start)?;

    let type_annotation = tree
        .descendants(node)
        .filter(|&id| matches!(tree.kind(id), NodeKind::TypeAnnotation))
        .map(|id| tree.span(id))
        .find(|annotation| annotation.start >= pattern.end);

    let end = type_annotation.map_or(pattern.end, |annotation| annotation.end);
    if end != first_span.end {
        return None;
    }

    Some(DestructuredParam { node, span: first_span, pattern, type_annotation })
}

fn text(source: &str, span: Span) -> &str {
    source.get(span.start as usize..span.end as usize).unwrap_or_default()
}

/// Body expression of an expression-bodied arrow
fn expression_body<'a>(tree: &SyntaxTree<'a>, func: NodeId) -> Option<&'a Expression<'a>> {
    let NodeKind::ArrowFunction(arrow) = tree.kind(func) else {
        return None;
    };
    if !arrow.expression {
        return None;
    }
    match arrow.body.statements.first()? {
        Statement::ExpressionStatement(stmt) => Some(&stmt.expression),
        _ => None,
    }
}

/// Build the edits that move the destructuring into the body
pub fn build_fix(
    source: &str,
    tree: &SyntaxTree,
    func: NodeId,
    param: &DestructuredParam,
) -> FixResult {
    // A `props` binding or reference anywhere would be redeclared or shadowed
    if tree.mentions_identifier(func, PROPS_PARAM) {
        return FixResult::unfixable();
    }

    let pattern_text = text(source, param.pattern).trim();
    let annotation_text = param
        .type_annotation
        .map(|_| text(source, Span::new(param.pattern.end, param.span.end)).trim_start())
        .unwrap_or_default();
    let prelude = format!("const {pattern_text} = {PROPS_PARAM};");

    let replace_param = Fix::new(param.span, format!("{PROPS_PARAM}{annotation_text}"))
        .with_message(format!("Replace the parameter with `{PROPS_PARAM}`"));

    let Some(body_expr) = expression_body(tree, func) else {
        // Block body: declarations, function expressions, block arrows
        let Some(body) = tree.function_body(func) else {
            return FixResult::unfixable();
        };
        let brace = tree.span(body).start;
        let indent = line_indent(source, brace as usize);
        let insert = Fix::insert(brace + 1, format!("\n{indent}  {prelude}"))
            .with_message("Destructure at the top of the body");
        return FixResult::with(vec![replace_param, insert]);
    };

    let body_span = body_expr.span();
    let inner = body_expr.without_parentheses();
    let inner_span = inner.span();
    let inner_text = text(source, inner_span);
    let before = source.get(..inner_span.start as usize).unwrap_or_default().trim_end();
    let after = source.get(inner_span.end as usize..).unwrap_or_default().trim_start();
    let parenthesized = before.ends_with('(');

    // `=> ({ ... })` reads like a block body once rewritten
    if parenthesized && inner_text.starts_with('{') {
        return FixResult::unfixable();
    }

    let is_markup = matches!(inner, Expression::JSXElement(_) | Expression::JSXFragment(_));
    if is_markup && parenthesized && after.starts_with(')') {
        if let Some(fix) = rebuild_markup_body(source, tree, func, &prelude, inner_span) {
            return FixResult::with(vec![replace_param, fix]);
        }
    }

    let body_text = text(source, body_span);
    let replace_body = Fix::new(body_span, format!("{{ {prelude} return {body_text}; }}"))
        .with_message("Convert to a block body");
    FixResult::with(vec![replace_param, replace_body])
}

/// Turn `=> (\n  <markup />\n)` into a block returning the re-indented markup
fn rebuild_markup_body(
    source: &str,
    tree: &SyntaxTree,
    func: NodeId,
    prelude: &str,
    markup: Span,
) -> Option<Fix> {
    let NodeKind::ArrowFunction(arrow) = tree.kind(func) else {
        return None;
    };
    let head = source.get(arrow.params.span.end as usize..markup.start as usize)?;
    let arrow_end = arrow.params.span.end + u32::try_from(head.rfind("=>")?).ok()? + 2;
    let fn_span = tree.span(func);

    // Re-indenting would change the text of a literal that spans lines
    let has_multiline_literal = tree.descendants(func).any(|id| {
        let span = tree.span(id);
        matches!(tree.kind(id), NodeKind::TextLiteral)
            && span.start >= markup.start
            && span.end <= markup.end
            && text(source, span).contains('\n')
    });
    if has_multiline_literal {
        return None;
    }

    let indent = line_indent(source, fn_span.start as usize);
    let body = reindent(
        text(source, markup),
        column(source, markup.start as usize),
        &format!("{indent}    "),
    );
    let replacement =
        format!(" {{\n{indent}  {prelude}\n{indent}  return (\n{body}\n{indent}  );\n{indent}}}");

    Some(
        Fix::new(Span::new(arrow_end, fn_span.end), replacement)
            .with_message("Convert to a block body"),
    )
}
