//! Name checks for declarations and JSX nodes

use oxc_ast::ast::{
    JSXAttribute, JSXAttributeName, JSXElementName, JSXMemberExpression,
    JSXMemberExpressionObject, JSXOpeningElement,
};

use crate::constants::WRAPPER_NAMES;

/// Check if a declared name starts with a lowercase letter (helpers, hooks, callbacks)
pub fn is_lowercase_name(name: &str) -> bool {
    name.chars().next().is_some_and(|c| c.is_lowercase())
}

/// Check if a name is one of the recognized component wrappers
pub fn is_wrapper_name(name: &str) -> bool {
    WRAPPER_NAMES.contains(name)
}

/// Get the tag name from a JSX opening element
pub fn get_tag_name(opening: &JSXOpeningElement) -> String {
    get_jsx_element_name(&opening.name)
}

/// Get the name from a JSXElementName
fn get_jsx_element_name(name: &JSXElementName) -> String {
    match name {
        JSXElementName::Identifier(id) => id.name.to_string(),
        JSXElementName::IdentifierReference(id) => id.name.to_string(),
        JSXElementName::NamespacedName(ns) => {
            format!("{}:{}", ns.namespace.name, ns.name.name)
        }
        JSXElementName::MemberExpression(member) => {
            get_member_expression_name(member)
        }
        JSXElementName::ThisExpression(_) => "this".to_string(),
    }
}

/// Get the name from a JSX member expression (e.g., Foo.Bar.Baz)
fn get_member_expression_name(member: &JSXMemberExpression) -> String {
    let object = match &member.object {
        JSXMemberExpressionObject::IdentifierReference(id) => id.name.to_string(),
        JSXMemberExpressionObject::MemberExpression(m) => {
            get_member_expression_name(m)
        }
        JSXMemberExpressionObject::ThisExpression(_) => "this".to_string(),
    };
    format!("{}.{}", object, member.property.name)
}

/// Get the plain name of a JSX attribute; namespaced attributes have none
pub fn get_attribute_name<'a>(attr: &'a JSXAttribute<'a>) -> Option<&'a str> {
    match &attr.name {
        JSXAttributeName::Identifier(ident) => Some(ident.name.as_str()),
        JSXAttributeName::NamespacedName(_) => None,
    }
}
