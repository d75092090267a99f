//! Lint rules

pub mod force_destructure_props;

pub use force_destructure_props::ForceDestructureProps;
