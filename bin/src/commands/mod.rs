//! CLI command implementations.

pub(crate) mod simulate;
