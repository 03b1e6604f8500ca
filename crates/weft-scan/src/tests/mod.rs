//! Crate-level tests spanning several modules.

mod behaviour;
