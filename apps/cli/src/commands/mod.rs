//! Command implementations for the Foldsplit CLI.

pub mod split;
