//! Named sub-agent handles kept for bookkeeping.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;

/// Opaque reference to a sub-agent. The caller keeps ownership of whatever
/// it points at; the registry only holds a clone of the `Arc`.
pub type DelegateHandle = Arc<dyn Any + Send + Sync>;

/// Stand-in registered when only a sub-agent's name is known, e.g. when the
/// names come from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedDelegate {
    pub name: String,
}

pub fn placeholder(name: impl Into<String>) -> DelegateHandle {
    Arc::new(NamedDelegate { name: name.into() })
}

/// Sub-agents by name, in registration order.
#[derive(Default)]
pub struct DelegateRegistry {
    delegates: IndexMap<String, DelegateHandle>,
}

impl DelegateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `handle` under `name`. Re-registering a name replaces the
    /// handle in place and returns the previous one.
    pub fn register(&mut self, name: String, handle: DelegateHandle) -> Option<DelegateHandle> {
        self.delegates.insert(name, handle)
    }

    pub fn names(&self) -> Vec<String> {
        self.delegates.keys().cloned().collect()
    }

    pub fn get(&self, name: &str) -> Option<&DelegateHandle> {
        self.delegates.get(name)
    }

    pub fn len(&self) -> usize {
        self.delegates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.delegates.is_empty()
    }
}

impl fmt::Debug for DelegateRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DelegateRegistry")
            .field("names", &self.delegates.keys().collect::<Vec<_>>())
            .finish()
    }
}
