//! Channel registry
//!
//! Loggers look up and publish their channels here instead of in a
//! process-wide table. A registry can be owned by a single logger or shared
//! between several through an `Arc`.

use super::channel::Channel;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Default)]
pub struct ChannelRegistry {
    channels: RwLock<HashMap<String, Arc<Channel>>>,
}

impl ChannelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Publish a channel under its name.
    ///
    /// A channel already registered under the same name is replaced and
    /// returned. Loggers holding the previous channel keep writing to it.
    pub fn register(&self, channel: Arc<Channel>) -> Option<Arc<Channel>> {
        let name = channel.name().to_string();
        self.channels.write().insert(name, channel)
    }

    pub fn get(&self, name: &str) -> Option<Arc<Channel>> {
        self.channels.read().get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.channels.read().contains_key(name)
    }

    /// Remove a channel, flushing it first. Returns `false` if absent.
    pub fn dispose(&self, name: &str) -> bool {
        let removed = self.channels.write().remove(name);
        match removed {
            Some(channel) => {
                if let Err(e) = channel.flush() {
                    eprintln!("[LOGGER ERROR] Failed to flush {} on dispose: {}", name, e);
                }
                true
            }
            None => false,
        }
    }

    /// Remove `channel` only if it is the one currently registered under its name.
    pub fn dispose_if_current(&self, channel: &Arc<Channel>) -> bool {
        let mut channels = self.channels.write();
        let is_current = channels
            .get(channel.name())
            .is_some_and(|current| Arc::ptr_eq(current, channel));
        if is_current {
            channels.remove(channel.name());
        }
        is_current
    }

    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.channels.read().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.channels.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn channel(name: &str) -> Arc<Channel> {
        Arc::new(Channel::new(name, Vec::new()))
    }

    #[test]
    fn test_register_and_get() {
        let registry = ChannelRegistry::new();
        assert!(registry.is_empty());

        registry.register(channel("api_20250108"));

        assert!(registry.contains("api_20250108"));
        assert_eq!(registry.len(), 1);
        assert!(registry.get("api_20250108").is_some());
        assert!(registry.get("db_20250108").is_none());
    }

    #[test]
    fn test_register_replaces_same_name() {
        let registry = ChannelRegistry::new();
        let first = channel("api_20250108");
        let second = channel("api_20250108");

        assert!(registry.register(Arc::clone(&first)).is_none());
        let previous = registry.register(Arc::clone(&second)).expect("replaced");

        assert!(Arc::ptr_eq(&previous, &first));
        assert!(Arc::ptr_eq(&registry.get("api_20250108").unwrap(), &second));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_dispose() {
        let registry = ChannelRegistry::new();
        registry.register(channel("api_20250108"));

        assert!(registry.dispose("api_20250108"));
        assert!(!registry.dispose("api_20250108"));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_dispose_if_current_ignores_stale_channel() {
        let registry = ChannelRegistry::new();
        let stale = channel("api_20250108");
        let current = channel("api_20250108");
        registry.register(Arc::clone(&stale));
        registry.register(Arc::clone(&current));

        assert!(!registry.dispose_if_current(&stale));
        assert!(registry.contains("api_20250108"));
        assert!(registry.dispose_if_current(&current));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_names_sorted() {
        let registry = ChannelRegistry::new();
        registry.register(channel("b"));
        registry.register(channel("a"));
        assert_eq!(registry.names(), vec!["a".to_string(), "b".to_string()]);
    }
}
