//! Diagnostic types for lint results

use oxc_span::Span;
use thiserror::Error;

/// Severity level for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticSeverity {
    Error,
    Warning,
}

/// A single text edit against the original source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fix {
    /// Start position of the span to replace
    pub start: u32,
    /// End position of the span to replace
    pub end: u32,
    /// The replacement text
    pub replacement: String,
    /// Description of what the fix does
    pub message: Option<String>,
}

impl Fix {
    pub fn new(span: Span, replacement: impl Into<String>) -> Self {
        Self {
            start: span.start,
            end: span.end,
            replacement: replacement.into(),
            message: None,
        }
    }

    /// Insert text at an offset without removing anything
    pub fn insert(offset: u32, text: impl Into<String>) -> Self {
        Self::new(Span::new(offset, offset), text)
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn span(&self) -> Span {
        Span::new(self.start, self.end)
    }
}

/// A lint diagnostic
///
/// All `fixes` belong to one edit set: they are applied together or not at all.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// The rule that produced this diagnostic
    pub rule: String,
    /// Start position of the span
    pub start: u32,
    /// End position of the span
    pub end: u32,
    /// Primary message
    pub message: String,
    /// Optional help text
    pub help: Option<String>,
    /// Severity level
    pub severity: DiagnosticSeverity,
    /// Edits that fix the problem
    pub fixes: Vec<Fix>,
}

impl Diagnostic {
    pub fn new(rule: impl Into<String>, span: Span, message: impl Into<String>) -> Self {
        Self {
            rule: rule.into(),
            start: span.start,
            end: span.end,
            message: message.into(),
            help: None,
            severity: DiagnosticSeverity::Warning,
            fixes: Vec::new(),
        }
    }

    pub fn span(&self) -> Span {
        Span::new(self.start, self.end)
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn with_severity(mut self, severity: DiagnosticSeverity) -> Self {
        self.severity = severity;
        self
    }

    pub fn with_fixes(mut self, fixes: impl IntoIterator<Item = Fix>) -> Self {
        self.fixes.extend(fixes);
        self
    }

    pub fn is_fixable(&self) -> bool {
        !self.fixes.is_empty()
    }

    /// Smallest span covering every edit, if there are any
    pub fn fix_span(&self) -> Option<Span> {
        let start = self.fixes.iter().map(|fix| fix.start).min()?;
        let end = self.fixes.iter().map(|fix| fix.end).max()?;
        Some(Span::new(start, end))
    }

    pub fn error(rule: impl Into<String>, span: Span, message: impl Into<String>) -> Self {
        Self::new(rule, span, message).with_severity(DiagnosticSeverity::Error)
    }

    pub fn warning(rule: impl Into<String>, span: Span, message: impl Into<String>) -> Self {
        Self::new(rule, span, message).with_severity(DiagnosticSeverity::Warning)
    }
}

/// Errors from applying an edit set
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FixError {
    #[error("edits {first:?} and {second:?} overlap")]
    Overlap { first: (u32, u32), second: (u32, u32) },
    #[error("edit {start}..{end} is outside the source or splits a character (source length {len})")]
    InvalidRange { start: u32, end: u32, len: usize },
}

/// Apply non-overlapping edits to the original source in one pass.
///
/// Edits may be given in any order; every offset refers to `source` as passed
/// in. Two insertions at the same offset are applied in the given order.
pub fn apply_fixes(source: &str, fixes: &[Fix]) -> Result<String, FixError> {
    let mut ordered: Vec<&Fix> = fixes.iter().collect();
    ordered.sort_by_key(|fix| (fix.start, fix.end));

    let mut output = String::with_capacity(source.len());
    let mut cursor = 0usize;
    let mut previous: Option<&Fix> = None;

    for fix in ordered {
        let (start, end) = (fix.start as usize, fix.end as usize);
        if start > end
            || end > source.len()
            || !source.is_char_boundary(start)
            || !source.is_char_boundary(end)
        {
            return Err(FixError::InvalidRange { start: fix.start, end: fix.end, len: source.len() });
        }
        if let Some(prev) = previous {
            // Touching ranges are fine; only shared bytes conflict
            if start < cursor {
                return Err(FixError::Overlap {
                    first: (prev.start, prev.end),
                    second: (fix.start, fix.end),
                });
            }
        }
        output.push_str(&source[cursor..start]);
        output.push_str(&fix.replacement);
        cursor = end;
        previous = Some(fix);
    }

    output.push_str(&source[cursor..]);
    Ok(output)
}
