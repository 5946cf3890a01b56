//! Tool descriptor registry.
//!
//! Holds the descriptors advertised to the model, in insertion order,
//! each with an enabled flag. Mutations bump a revision published
//! through a watch channel so the orchestration loop can notice changes
//! between rounds. Tool bodies may hold a registry handle and flip
//! flags mid-conversation.

use parking_lot::RwLock;
use tokio::sync::watch;
use tracing::debug;

use toolflow_protocols::ToolDescriptor;
use toolflow_protocols::error::RegistryError;

struct RegistryEntry {
    descriptor: ToolDescriptor,
    enabled: bool,
}

/// Registry of tool descriptors with enabled state.
///
/// Insertion order is preserved; the advertised list replays it. Names
/// are unique at any instant.
pub struct ToolRegistry {
    entries: RwLock<Vec<RegistryEntry>>,
    changes_tx: watch::Sender<u64>,
}

impl ToolRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        let (changes_tx, _) = watch::channel(0);
        Self {
            entries: RwLock::new(Vec::new()),
            changes_tx,
        }
    }

    /// Create a registry pre-populated with enabled descriptors.
    pub fn from_descriptors(descriptors: Vec<ToolDescriptor>) -> Result<Self, RegistryError> {
        let registry = Self::new();
        for descriptor in descriptors {
            registry.register(descriptor)?;
        }
        Ok(registry)
    }

    /// Register a descriptor, enabled.
    ///
    /// Returns an error if the name is already registered.
    pub fn register(&self, descriptor: ToolDescriptor) -> Result<(), RegistryError> {
        self.insert(descriptor, true)
    }

    /// Register a descriptor in the disabled state.
    pub fn register_disabled(&self, descriptor: ToolDescriptor) -> Result<(), RegistryError> {
        self.insert(descriptor, false)
    }

    fn insert(&self, descriptor: ToolDescriptor, enabled: bool) -> Result<(), RegistryError> {
        let mut entries = self.entries.write();
        if entries.iter().any(|e| e.descriptor.name == descriptor.name) {
            return Err(RegistryError::AlreadyRegistered(descriptor.name));
        }
        debug!(tool = %descriptor.name, enabled, "registering tool");
        entries.push(RegistryEntry { descriptor, enabled });
        drop(entries);
        self.bump();
        Ok(())
    }

    /// Enable a tool. Idempotent; only an actual flip bumps the revision.
    pub fn enable(&self, name: &str) -> Result<(), RegistryError> {
        self.set_enabled(name, true)
    }

    /// Disable a tool. Idempotent; only an actual flip bumps the revision.
    pub fn disable(&self, name: &str) -> Result<(), RegistryError> {
        self.set_enabled(name, false)
    }

    fn set_enabled(&self, name: &str, enabled: bool) -> Result<(), RegistryError> {
        let mut entries = self.entries.write();
        let entry = entries
            .iter_mut()
            .find(|e| e.descriptor.name == name)
            .ok_or_else(|| RegistryError::NotFound(name.to_string()))?;
        if entry.enabled == enabled {
            return Ok(());
        }
        entry.enabled = enabled;
        debug!(tool = %name, enabled, "tool enabled state changed");
        drop(entries);
        self.bump();
        Ok(())
    }

    /// Replace the full descriptor set (all enabled), e.g. after a
    /// backend list-changed notification.
    ///
    /// Rejects duplicate names without touching the current entries.
    pub fn replace(&self, descriptors: Vec<ToolDescriptor>) -> Result<(), RegistryError> {
        let mut replacement = Vec::with_capacity(descriptors.len());
        for descriptor in descriptors {
            if replacement
                .iter()
                .any(|e: &RegistryEntry| e.descriptor.name == descriptor.name)
            {
                return Err(RegistryError::AlreadyRegistered(descriptor.name));
            }
            replacement.push(RegistryEntry {
                descriptor,
                enabled: true,
            });
        }
        debug!(count = replacement.len(), "replacing tool registry contents");
        *self.entries.write() = replacement;
        self.bump();
        Ok(())
    }

    /// Get a descriptor by name.
    pub fn get(&self, name: &str) -> Option<ToolDescriptor> {
        self.entries
            .read()
            .iter()
            .find(|e| e.descriptor.name == name)
            .map(|e| e.descriptor.clone())
    }

    /// Check if a tool is registered (enabled or not).
    pub fn contains(&self, name: &str) -> bool {
        self.entries
            .read()
            .iter()
            .any(|e| e.descriptor.name == name)
    }

    /// Check if a tool is registered and enabled.
    pub fn is_enabled(&self, name: &str) -> bool {
        self.entries
            .read()
            .iter()
            .any(|e| e.descriptor.name == name && e.enabled)
    }

    /// Snapshot of the enabled descriptors, in insertion order.
    ///
    /// This is what each model request advertises; callers must re-read
    /// it every round rather than caching it.
    pub fn enabled_tools(&self) -> Vec<ToolDescriptor> {
        self.entries
            .read()
            .iter()
            .filter(|e| e.enabled)
            .map(|e| e.descriptor.clone())
            .collect()
    }

    /// Snapshot of every descriptor with its enabled flag.
    pub fn all_tools(&self) -> Vec<(ToolDescriptor, bool)> {
        self.entries
            .read()
            .iter()
            .map(|e| (e.descriptor.clone(), e.enabled))
            .collect()
    }

    /// List all registered tool names.
    pub fn list_names(&self) -> Vec<String> {
        self.entries
            .read()
            .iter()
            .map(|e| e.descriptor.name.clone())
            .collect()
    }

    /// Current revision; bumped on every effective mutation.
    pub fn revision(&self) -> u64 {
        *self.changes_tx.borrow()
    }

    /// Subscribe to revision changes.
    pub fn changes(&self) -> watch::Receiver<u64> {
        self.changes_tx.subscribe()
    }

    /// Number of registered tools (enabled or not).
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    fn bump(&self) {
        self.changes_tx.send_modify(|rev| *rev += 1);
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
