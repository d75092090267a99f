//! Utility functions for the props destructuring rule

use oxc_ast::ast::{Expression, JSXOpeningElement};

use common::{get_tag_name, LIBRARY_ALIAS};

use crate::tree::{NodeId, SyntaxTree};

/// Check if a subtree contains any JSX node.
///
/// Stops at the first match. `None` (a function without a body) has no JSX.
pub fn contains_markup(tree: &SyntaxTree, node: Option<NodeId>) -> bool {
    node.is_some_and(|root| tree.subtree(root).any(|id| tree.kind(id).is_markup()))
}

/// Get the tag name of a JSX element for exemption lookups
pub fn get_element_name(opening: &JSXOpeningElement) -> String {
    get_tag_name(opening)
}

/// Split a callee into `(name, qualified)` when it is `name` or `React.name`
pub fn callee_name<'a>(callee: &'a Expression<'a>) -> Option<(&'a str, bool)> {
    match callee {
        Expression::Identifier(ident) => Some((ident.name.as_str(), false)),
        Expression::StaticMemberExpression(member) => match &member.object {
            Expression::Identifier(object) if object.name == LIBRARY_ALIAS => {
                Some((member.property.name.as_str(), true))
            }
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::NodeKind;
    use oxc_allocator::Allocator;
    use oxc_ast::ast::Statement;
    use oxc_parser::Parser;
    use oxc_span::SourceType;

    fn body_has_markup(source: &str) -> bool {
        let allocator = Allocator::default();
        let ret = Parser::new(&allocator, source, SourceType::jsx()).parse();
        let tree = SyntaxTree::build(&ret.program);
        let func = tree.functions().next().expect("source has a function");
        contains_markup(&tree, tree.function_body(func))
    }

    #[test]
    fn test_markup_in_return() {
        assert!(body_has_markup("function A() { return <div />; }"));
        assert!(body_has_markup("const A = () => <></>;"));
    }

    #[test]
    fn test_markup_nested_in_branches() {
        assert!(body_has_markup(
            "function A(x) { if (x) { for (;;) { try { return cond ? null : [<b key={1} />]; } catch {} } } return null; }"
        ));
    }

    #[test]
    fn test_no_markup() {
        assert!(!body_has_markup("function a(x) { return x + 1; }"));
        assert!(!body_has_markup("const a = (x) => ({ y: x });"));
    }

    #[test]
    fn test_markup_in_params_is_not_body() {
        assert!(!body_has_markup("function A({ icon = <Icon /> }) { return icon; }"));
    }

    #[test]
    fn test_absent_node() {
        let allocator = Allocator::default();
        let ret = Parser::new(&allocator, "", SourceType::jsx()).parse();
        let tree = SyntaxTree::build(&ret.program);
        assert!(!contains_markup(&tree, None));
        assert!(tree.functions().next().is_none());
    }

    #[test]
    fn test_callee_name() {
        let allocator = Allocator::default();
        let source = "memo(a); React.forwardRef(b); Lib.memo(c); a.b.memo(d); useQuery(e);";
        let ret = Parser::new(&allocator, source, SourceType::jsx()).parse();

        let names: Vec<Option<(&str, bool)>> = ret
            .program
            .body
            .iter()
            .map(|stmt| match stmt {
                Statement::ExpressionStatement(expr_stmt) => match &expr_stmt.expression {
                    Expression::CallExpression(call) => callee_name(&call.callee),
                    _ => None,
                },
                _ => None,
            })
            .collect();

        assert_eq!(
            names,
            vec![
                Some(("memo", false)),
                Some(("forwardRef", true)),
                None,
                None,
                Some(("useQuery", false)),
            ]
        );

        let tree = SyntaxTree::build(&ret.program);
        assert!(tree
            .subtree(NodeId::ROOT)
            .all(|id| !tree.kind(id).is_markup()));
        assert!(!matches!(tree.kind(NodeId::ROOT), NodeKind::Other));
    }
}
