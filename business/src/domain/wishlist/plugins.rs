use std::collections::HashMap;
use std::sync::Arc;

use super::aggregation::ItemOperation;
use super::model::WishlistItem;

/// Side-effecting callback invoked around a batch operation with the
/// delta items of the requested change.
pub trait ItemChangePlugin: Send + Sync {
    fn trigger(&self, items: &[WishlistItem]);
}

/// Ordered pre/post plugin lists, keyed by operation.
///
/// Plugins registered for one operation never fire for another; within
/// one operation they fire in registration order.
#[derive(Default)]
pub struct ItemPluginRegistry {
    pre: HashMap<ItemOperation, Vec<Arc<dyn ItemChangePlugin>>>,
    post: HashMap<ItemOperation, Vec<Arc<dyn ItemChangePlugin>>>,
}

impl ItemPluginRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_pre(&mut self, operation: ItemOperation, plugin: Arc<dyn ItemChangePlugin>) {
        self.pre.entry(operation).or_default().push(plugin);
    }

    pub fn register_post(&mut self, operation: ItemOperation, plugin: Arc<dyn ItemChangePlugin>) {
        self.post.entry(operation).or_default().push(plugin);
    }

    pub fn trigger_pre(&self, operation: ItemOperation, items: &[WishlistItem]) {
        if let Some(plugins) = self.pre.get(&operation) {
            for plugin in plugins {
                plugin.trigger(items);
            }
        }
    }

    pub fn trigger_post(&self, operation: ItemOperation, items: &[WishlistItem]) {
        if let Some(plugins) = self.post.get(&operation) {
            for plugin in plugins {
                plugin.trigger(items);
            }
        }
    }
}
