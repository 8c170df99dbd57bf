//! Lexical environment chain
//!
//! Environments come in two shapes: one mutable global frame per
//! interpreter instance, and immutable extension frames created at scope
//! entry (function application, local binding forms). Each extension frame
//! links to its enclosing environment; every chain terminates at the
//! global frame.
//!
//! Frames map variable names to store addresses through parallel
//! sequences: the name at position `i` is bound to the address at
//! position `i`. Names need not be unique within or across frames;
//! lookup scans each frame from the start, so the first match wins.

use std::cell::RefCell;
use std::rc::Rc;

use crate::diagnostics::BindingError;
use crate::store::Addr;

/// The mutable top-level frame
///
/// Two parallel growable sequences, equal in length at every observation
/// point. Appending is the only mutation; entries are never removed or
/// reordered.
#[derive(Debug, Default)]
pub struct GlobalFrame {
    names: Vec<String>,
    addrs: Vec<Addr>,
}

impl GlobalFrame {
    pub fn new() -> Self {
        GlobalFrame {
            names: Vec::new(),
            addrs: Vec::new(),
        }
    }

    /// Append a binding at matching positions in both sequences
    pub fn add_binding(&mut self, name: impl Into<String>, addr: Addr) {
        self.names.push(name.into());
        self.addrs.push(addr);
    }

    /// Address of the first entry for `name`, scanning from the start
    pub fn find(&self, name: &str) -> Option<Addr> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| self.addrs[i])
    }

    /// Current binding count, duplicates included
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Shared handle to the global frame
///
/// Cheap to clone; every clone observes the same frame, so bindings added
/// through one handle are visible to lookups through any environment
/// chain rooted at it. Uses `Rc` internally: handles are single-threaded,
/// matching the strictly sequential execution model.
#[derive(Clone, Debug, Default)]
pub struct GlobalEnv(Rc<RefCell<GlobalFrame>>);

impl GlobalEnv {
    /// Create a handle to a fresh empty global frame
    pub fn new() -> Self {
        GlobalEnv(Rc::new(RefCell::new(GlobalFrame::new())))
    }

    /// Append `name` bound to `addr`
    ///
    /// The only mutator of the global frame; this is how top-level
    /// definitions become visible to later lookups. No uniqueness check:
    /// re-adding an existing name leaves a duplicate entry, and lookup
    /// keeps resolving to the earliest one.
    pub fn add_binding(&self, name: impl Into<String>, addr: Addr) {
        let name = name.into();
        tracing::trace!(name = %name, %addr, "global binding added");
        self.0.borrow_mut().add_binding(name, addr);
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    fn find(&self, name: &str) -> Option<Addr> {
        self.0.borrow().find(name)
    }
}

/// One immutable extension frame
///
/// Fixed parallel name/address sequences plus the enclosing environment.
/// Never mutated after construction; only the chain's reference structure
/// is navigated. Built through [`Env::extend`], which enforces that the
/// sequences have equal length.
#[derive(Debug)]
pub struct ExtFrame {
    names: Vec<String>,
    addrs: Vec<Addr>,
    next: Env,
}

impl ExtFrame {
    fn find(&self, name: &str) -> Option<Addr> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| self.addrs[i])
    }
}

/// A handle into the environment chain
///
/// Clones are cheap and share frames.
#[derive(Clone, Debug)]
pub enum Env {
    /// The chain root: the global frame itself
    Global(GlobalEnv),
    /// An extension frame over an enclosing environment
    Ext(Rc<ExtFrame>),
}

impl Env {
    /// Extend this environment with one frame of new bindings
    ///
    /// Pure construction: the receiver is untouched and becomes the new
    /// frame's enclosing environment. `names` and `addrs` must have equal
    /// length; otherwise this fails with
    /// [`BindingError::FrameLengthMismatch`].
    pub fn extend(&self, names: Vec<String>, addrs: Vec<Addr>) -> Result<Env, BindingError> {
        if names.len() != addrs.len() {
            return Err(BindingError::FrameLengthMismatch {
                names: names.len(),
                addrs: addrs.len(),
            });
        }
        Ok(Env::Ext(Rc::new(ExtFrame {
            names,
            addrs,
            next: self.clone(),
        })))
    }

    /// Resolve `name` to a store address
    ///
    /// Walks frames from here outward. Within each frame the first match
    /// in left-to-right order wins; an entry in a closer frame shadows any
    /// entry for the same name further out. A miss at the global frame is
    /// terminal and fails with [`BindingError::NameNotFound`]. Lookup
    /// never mutates any frame.
    pub fn lookup(&self, name: &str) -> Result<Addr, BindingError> {
        let mut env = self;
        loop {
            match env {
                Env::Ext(frame) => {
                    if let Some(addr) = frame.find(name) {
                        tracing::trace!(name, %addr, "resolved in extension frame");
                        return Ok(addr);
                    }
                    env = &frame.next;
                }
                Env::Global(global) => {
                    return match global.find(name) {
                        Some(addr) => {
                            tracing::trace!(name, %addr, "resolved in global frame");
                            Ok(addr)
                        }
                        None => {
                            tracing::debug!(name, "name not found in any frame");
                            Err(BindingError::NameNotFound {
                                name: name.to_string(),
                            })
                        }
                    };
                }
            }
        }
    }

    /// Number of frames in the chain, the global frame included
    pub fn depth(&self) -> usize {
        let mut depth = 1;
        let mut env = self;
        while let Env::Ext(frame) = env {
            depth += 1;
            env = &frame.next;
        }
        depth
    }

    /// Whether this handle points directly at the global frame
    pub fn is_global(&self) -> bool {
        matches!(self, Env::Global(_))
    }
}

impl From<GlobalEnv> for Env {
    fn from(global: GlobalEnv) -> Self {
        Env::Global(global)
    }
}
