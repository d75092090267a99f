//! Props destructuring lint rule
//!
//! This crate provides the `force-destructure-props` rule: components take a
//! single `props` parameter and destructure it in the body rather than in the
//! parameter list. Rules can be used:
//! 1. Standalone with an oxc AST for custom tooling
//! 2. Through the fix driver in the `force-destructure-props` crate

pub mod component;
pub mod fixer;
pub mod rules;
pub mod tree;
pub mod utils;
pub mod visitor;
mod context;
mod diagnostic;

pub use component::{classify, detect_wrapper, is_component, is_exempt_render_prop, WrapperInfo, WrapperKind};
pub use context::LintContext;
pub use diagnostic::{apply_fixes, Diagnostic, DiagnosticSeverity, Fix, FixError};
pub use fixer::{build_fix, destructured_param, DestructuredParam, FixResult};
pub use rules::*;
pub use tree::{NodeId, NodeKind, SyntaxTree};
pub use visitor::{lint, lint_with_config, LintResult, LintRunner, RuleSetting, RulesConfig};

/// Rule category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleCategory {
    /// Rules that encourage a consistent code style
    Style,
}

/// Rule metadata
pub trait RuleMeta {
    const NAME: &'static str;
    const CATEGORY: RuleCategory;
    /// URL to documentation
    fn docs_url() -> String;
}
