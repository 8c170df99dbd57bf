//! Diagnostic errors for store and environment operations
//!
//! Both failure modes are ordinary values: callers branch on the result
//! rather than catching anything. The [`miette::Diagnostic`] derive lets an
//! embedding evaluator render these as rich reports without this crate
//! knowing anything about source text or spans.

use miette::Diagnostic;
use thiserror::Error;

use crate::store::Addr;

/// Binding-storage diagnostic
#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
pub enum BindingError {
    // === Store Errors ===
    #[error("Invalid store address {addr} (store has {len} cells)")]
    #[diagnostic(
        code(store::invalid_address),
        help("addresses are minted by `Store::extend`; this store never issued that one")
    )]
    InvalidAddress {
        /// The address that was probed
        addr: Addr,
        /// Cell count at the time of the probe
        len: usize,
    },

    // === Environment Errors ===
    #[error("Undefined variable `{name}`")]
    #[diagnostic(
        code(env::name_not_found),
        help("no frame in the chain binds this name; was it defined before use?")
    )]
    NameNotFound { name: String },

    #[error("Extension frame has {names} names but {addrs} addresses")]
    #[diagnostic(code(env::frame_mismatch))]
    FrameLengthMismatch { names: usize, addrs: usize },
}
