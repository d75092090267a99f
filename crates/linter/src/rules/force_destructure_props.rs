//! force-destructure-props
//!
//! Components take their input as a single `props` parameter and destructure it
//! at the top of the body, instead of destructuring in the parameter list.
//!
//! ```jsx
//! // flagged
//! function Widget({ name }) { return <div>{name}</div>; }
//!
//! // fixed
//! function Widget(props) {
//!   const { name } = props; return <div>{name}</div>; }
//! ```

use tracing::debug;

use crate::component::{classify, is_exempt_render_prop, is_inspectable_function};
use crate::context::LintContext;
use crate::diagnostic::{Diagnostic, DiagnosticSeverity};
use crate::fixer::{build_fix, destructured_param};
use crate::tree::{NodeId, SyntaxTree};
use crate::{RuleCategory, RuleMeta};

pub const MESSAGE: &str = "Destructure the input parameter inside the body, not in the parameter list.";

/// force-destructure-props rule
#[derive(Debug, Clone)]
pub struct ForceDestructureProps {
    pub severity: DiagnosticSeverity,
}

impl Default for ForceDestructureProps {
    fn default() -> Self {
        Self { severity: DiagnosticSeverity::Error }
    }
}

impl RuleMeta for ForceDestructureProps {
    const NAME: &'static str = "force-destructure-props";
    const CATEGORY: RuleCategory = RuleCategory::Style;

    fn docs_url() -> String {
        "https://github.com/rodion-maltsev/eslint-plugin-force-destructure-props#readme".to_string()
    }
}

impl ForceDestructureProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_severity(severity: DiagnosticSeverity) -> Self {
        Self { severity }
    }

    /// Check one function node, reporting at most one diagnostic
    pub fn check(&self, ctx: &mut LintContext<'_>, tree: &SyntaxTree, func: NodeId) {
        if !is_inspectable_function(tree, func) {
            return;
        }
        let Some(candidate) = classify(tree, func) else {
            return;
        };
        if is_exempt_render_prop(tree, func) {
            debug!(name = candidate.declared_name, "render prop callback, skipped");
            return;
        }
        let Some(param) = destructured_param(tree, func) else {
            return;
        };

        let fix = build_fix(ctx.source_text(), tree, func, &param);
        debug!(
            name = candidate.declared_name,
            wrapper = candidate.wrapper.map(|w| w.kind.as_str()),
            fixable = fix.fixable,
            "destructured parameter"
        );

        let diagnostic = Diagnostic::new(Self::NAME, param.span, MESSAGE)
            .with_severity(self.severity)
            .with_help("Take a single `props` parameter and destructure it in the body.")
            .with_fixes(fix.fixes);
        ctx.report(diagnostic);
    }
}
