pub mod check;
pub mod constants;
pub mod options;
pub mod text;

pub use check::*;
pub use constants::*;
pub use options::*;
pub use text::{column, line_indent, line_start, reindent};
