//! Options for linting and fixing a single source file

use oxc_span::SourceType;

/// Default number of lint + fix passes, matching ESLint's fix loop
pub const DEFAULT_MAX_FIX_PASSES: usize = 10;

/// Configuration options for a lint/fix run
#[derive(Debug, Clone, Copy)]
pub struct LintOptions<'a> {
    /// Source filename, used to pick the source type
    pub filename: &'a str,

    /// Source type (tsx, jsx, etc.)
    pub source_type: SourceType,

    /// Upper bound on lint + fix passes in fix mode
    pub max_fix_passes: usize,
}

impl Default for LintOptions<'_> {
    fn default() -> Self {
        Self::defaults()
    }
}

impl<'a> LintOptions<'a> {
    pub fn defaults() -> Self {
        Self {
            filename: "input.tsx",
            source_type: SourceType::tsx(),
            max_fix_passes: DEFAULT_MAX_FIX_PASSES,
        }
    }

    /// Options for a named file; unknown extensions fall back to TSX
    pub fn for_file(filename: &'a str) -> Self {
        Self {
            filename,
            source_type: SourceType::from_path(filename).unwrap_or(SourceType::tsx()),
            ..Self::defaults()
        }
    }

    pub fn with_source_type(mut self, source_type: SourceType) -> Self {
        self.source_type = source_type;
        self
    }

    pub fn with_max_fix_passes(mut self, passes: usize) -> Self {
        self.max_fix_passes = passes;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_file_picks_source_type() {
        assert!(LintOptions::for_file("Widget.jsx").source_type.is_jsx());
        assert!(LintOptions::for_file("Widget.tsx").source_type.is_typescript());
        assert!(LintOptions::for_file("Widget.unknown").source_type.is_typescript());
    }

    #[test]
    fn test_defaults() {
        let options = LintOptions::default().with_max_fix_passes(3);
        assert_eq!(options.max_fix_passes, 3);
        assert_eq!(options.filename, "input.tsx");
    }
}
