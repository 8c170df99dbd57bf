//! Binding-storage core for a tree-walking interpreter
//!
//! A mutable store of addressable value cells plus a chain of lexical
//! environments mapping variable names to store addresses. The surrounding
//! evaluator allocates a cell with [`Store::extend`], binds a name to the
//! cell's address with [`Env::extend`] or [`GlobalEnv::add_binding`],
//! resolves names with [`Env::lookup`], and reads or writes the cell
//! through [`Store::deref`] and [`Store::assign`].
//!
//! # Architecture
//!
//! ```text
//! name → Env::lookup → Addr → Store::deref / Store::assign → value
//! ```
//!
//! The stored value type is opaque to this crate: [`Store`] is generic over
//! it. Cells are never reclaimed, and all operations are synchronous and
//! single-threaded.
//!
//! # Example
//!
//! ```
//! use cellar::{Env, GlobalEnv, Store};
//!
//! let mut store = Store::new();
//! let global = GlobalEnv::new();
//!
//! // Top-level definition: allocate a cell, bind its address
//! let addr = store.extend(42);
//! global.add_binding("answer", addr);
//!
//! // Reference: resolve the name, dereference the cell
//! let env = Env::from(global);
//! let addr = env.lookup("answer")?;
//! assert_eq!(store.deref(addr)?, &42);
//! # Ok::<(), cellar::BindingError>(())
//! ```

pub mod diagnostics;
pub mod env;
pub mod store;

// Re-exports for convenience
pub use diagnostics::BindingError;
pub use env::{Env, ExtFrame, GlobalEnv, GlobalFrame};
pub use store::{Addr, Store};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
