//! Force Destructure Props
//!
//! An oxc-based lint rule that keeps component props destructuring out of the
//! parameter list, with an autofix that moves it into the function body.
//!
//! ## Usage
//!
//! ```rust
//! use force_destructure_props::{fix, LintOptions};
//!
//! let source = "const Widget = ({ name }) => <div>{name}</div>;";
//! let output = fix(source, LintOptions::for_file("Widget.jsx")).unwrap();
//! assert_eq!(
//!     output.code,
//!     "const Widget = (props) => { const { name } = props; return <div>{name}</div>; };"
//! );
//! ```

pub use common::LintOptions;
pub use props_linter::{
    apply_fixes, Diagnostic, DiagnosticSeverity, Fix, FixError, LintResult, RuleSetting,
    RulesConfig,
};

use oxc_allocator::Allocator;
use oxc_parser::Parser;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors from linting or fixing a source file
#[derive(Debug, Error)]
pub enum LintError {
    #[error("failed to parse {filename}: {}", messages.join("; "))]
    Parse { filename: String, messages: Vec<String> },
    #[error("failed to apply fixes: {0}")]
    Fix(#[from] FixError),
}

/// Result of a fix run
#[derive(Debug)]
pub struct FixOutput {
    /// The fixed source code
    pub code: String,
    /// Number of passes that applied at least one fix
    pub passes: usize,
    /// Number of diagnostics whose fixes were applied
    pub applied: usize,
    /// Diagnostics left in the fixed code (unfixable, or over the pass limit)
    pub remaining: Vec<Diagnostic>,
}

/// Lint a source file with the rule enabled at its default severity
pub fn lint(source: &str, options: LintOptions) -> Result<LintResult, LintError> {
    lint_with_config(source, options, RulesConfig::default())
}

/// Lint a source file with a custom rule configuration
pub fn lint_with_config(
    source: &str,
    options: LintOptions,
    config: RulesConfig,
) -> Result<LintResult, LintError> {
    let allocator = Allocator::default();
    let ret = Parser::new(&allocator, source, options.source_type).parse();

    if ret.panicked || !ret.errors.is_empty() {
        return Err(LintError::Parse {
            filename: options.filename.to_string(),
            messages: ret.errors.iter().map(ToString::to_string).collect(),
        });
    }

    Ok(props_linter::lint_with_config(
        source,
        options.source_type,
        &ret.program,
        config,
    ))
}

/// Lint and fix a source file until it is clean or the pass limit is reached
pub fn fix(source: &str, options: LintOptions) -> Result<FixOutput, LintError> {
    fix_with_config(source, options, RulesConfig::default())
}

/// Lint and fix a source file with a custom rule configuration.
///
/// Each pass lints the current code, applies every fix set that does not overlap
/// an earlier one, and re-parses. Overlapping fix sets (nested components in a
/// rewritten body) are picked up by the next pass.
pub fn fix_with_config(
    source: &str,
    options: LintOptions,
    config: RulesConfig,
) -> Result<FixOutput, LintError> {
    let mut code = source.to_string();
    let mut applied = 0;

    for pass in 0..options.max_fix_passes {
        let result = lint_with_config(&code, options, config.clone())?;
        let (fixes, count) = select_fixes(&result.diagnostics);
        if count == 0 {
            return Ok(FixOutput { code, passes: pass, applied, remaining: result.diagnostics });
        }

        code = apply_fixes(&code, &fixes)?;
        applied += count;
        debug!(pass = pass + 1, fixed = count, "applied fix pass");
    }

    let result = lint_with_config(&code, options, config)?;
    if result.fixable_count() > 0 {
        warn!(
            filename = options.filename,
            passes = options.max_fix_passes,
            pending = result.fixable_count(),
            "stopped at the fix pass limit with fixes pending"
        );
    }

    Ok(FixOutput {
        code,
        passes: options.max_fix_passes,
        applied,
        remaining: result.diagnostics,
    })
}

/// Pick fix sets in source order, skipping any that overlap an earlier pick
fn select_fixes(diagnostics: &[Diagnostic]) -> (Vec<Fix>, usize) {
    let mut fixable: Vec<&Diagnostic> = diagnostics.iter().filter(|d| d.is_fixable()).collect();
    fixable.sort_by_key(|d| d.fix_span().map(|span| (span.start, span.end)));

    let mut fixes = Vec::new();
    let mut count = 0;
    let mut last_end: Option<u32> = None;
    for diagnostic in fixable {
        let Some(span) = diagnostic.fix_span() else {
            continue;
        };
        if last_end.is_some_and(|end| span.start <= end) {
            continue;
        }
        fixes.extend(diagnostic.fixes.iter().cloned());
        last_end = Some(span.end);
        count += 1;
    }
    (fixes, count)
}
