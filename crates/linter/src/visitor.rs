//! Lint runner
//!
//! Flattens the program into a [`SyntaxTree`] once, then visits every function
//! definition in source order and runs the enabled rules on it.

use oxc_ast::ast::Program;
use oxc_span::SourceType;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::context::LintContext;
use crate::diagnostic::{Diagnostic, DiagnosticSeverity};
use crate::rules::ForceDestructureProps;
use crate::tree::SyntaxTree;

/// ESLint-style rule setting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleSetting {
    Off,
    Warn,
    #[default]
    Error,
}

impl RuleSetting {
    pub fn severity(self) -> Option<DiagnosticSeverity> {
        match self {
            Self::Off => None,
            Self::Warn => Some(DiagnosticSeverity::Warning),
            Self::Error => Some(DiagnosticSeverity::Error),
        }
    }
}

/// Configuration for which rules are enabled
///
/// Deserializes from an ESLint `rules` object; unknown rules are ignored.
///
/// ```json
/// { "force-destructure-props": "warn" }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RulesConfig {
    #[serde(rename = "force-destructure-props", default)]
    pub force_destructure_props: RuleSetting,
}

impl RulesConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn none() -> Self {
        Self { force_destructure_props: RuleSetting::Off }
    }

    pub fn with_force_destructure_props(mut self, setting: RuleSetting) -> Self {
        self.force_destructure_props = setting;
        self
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    fn force_destructure_props_rule(&self) -> Option<ForceDestructureProps> {
        self.force_destructure_props
            .severity()
            .map(ForceDestructureProps::with_severity)
    }
}

/// Runs all enabled rules over one program
pub struct LintRunner<'a> {
    ctx: LintContext<'a>,
    config: RulesConfig,
}

impl<'a> LintRunner<'a> {
    pub fn new(ctx: LintContext<'a>, config: RulesConfig) -> Self {
        Self { ctx, config }
    }

    /// Run all enabled rules on the given program
    pub fn run(mut self, program: &'a Program<'a>) -> LintResult {
        let Some(rule) = self.config.force_destructure_props_rule() else {
            return LintResult { diagnostics: Vec::new() };
        };

        let tree = SyntaxTree::build(program);
        for func in tree.functions() {
            rule.check(&mut self.ctx, &tree, func);
        }

        debug!(
            source_type = ?self.ctx.source_type(),
            nodes = tree.len(),
            diagnostics = self.ctx.diagnostics().len(),
            "lint finished"
        );
        let diagnostics = self.ctx.into_diagnostics();
        LintResult { diagnostics }
    }
}

/// Result of running the linter
#[derive(Debug)]
pub struct LintResult {
    pub diagnostics: Vec<Diagnostic>,
}

impl LintResult {
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| matches!(d.severity, DiagnosticSeverity::Error))
    }

    pub fn has_warnings(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, DiagnosticSeverity::Error))
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, DiagnosticSeverity::Warning))
            .count()
    }

    pub fn fixable_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_fixable()).count()
    }
}

/// Convenience function to lint a program with default configuration
pub fn lint<'a>(source_text: &'a str, program: &'a Program<'a>) -> LintResult {
    let ctx = LintContext::new(source_text, SourceType::tsx());
    LintRunner::new(ctx, RulesConfig::default()).run(program)
}

/// Convenience function to lint a program with custom configuration
pub fn lint_with_config<'a>(
    source_text: &'a str,
    source_type: SourceType,
    program: &'a Program<'a>,
    config: RulesConfig,
) -> LintResult {
    let ctx = LintContext::new(source_text, source_type);
    LintRunner::new(ctx, config).run(program)
}
