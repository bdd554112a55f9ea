use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::product::services::ProductLookupService;
use crate::domain::wishlist::errors::WishlistError;
use crate::domain::wishlist::model::{Wishlist, WishlistChange, WishlistItem};
use crate::domain::wishlist::plugins::ItemPluginRegistry;

/// Tag selecting the batch behavior of one aggregation call.
///
/// Add and Increase share the merge-or-append path, Remove and Decrease
/// share the decrement-or-delete path. Plugins are still keyed by the
/// exact tag, so an Increase never fires Add plugins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemOperation {
    Add,
    Remove,
    Increase,
    Decrease,
}

/// Applies batches of item deltas onto an owned wishlist.
///
/// Deltas merge into existing line items by group key, with a fallback
/// match by SKU on the removal path. The wishlist is mutated in place;
/// callers take it back with [`ItemAggregator::into_wishlist`].
///
/// Not safe for concurrent mutation: callers must serialize operations
/// against one wishlist instance.
pub struct ItemAggregator {
    wishlist: Wishlist,
    product_lookup: Arc<dyn ProductLookupService>,
    plugins: Arc<ItemPluginRegistry>,
}

impl ItemAggregator {
    pub fn new(
        wishlist: Wishlist,
        product_lookup: Arc<dyn ProductLookupService>,
        plugins: Arc<ItemPluginRegistry>,
    ) -> Self {
        Self {
            wishlist,
            product_lookup,
            plugins,
        }
    }

    pub fn wishlist(&self) -> &Wishlist {
        &self.wishlist
    }

    pub fn into_wishlist(self) -> Wishlist {
        self.wishlist
    }

    /// Runs one batch operation, with the operation's pre plugins before
    /// and its post plugins after the core algorithm. A lookup failure
    /// aborts the rest of the batch; mutations applied up to that point
    /// stick (callers own transactional semantics).
    pub async fn apply(
        &mut self,
        operation: ItemOperation,
        change: &WishlistChange,
    ) -> Result<&Wishlist, WishlistError> {
        self.plugins.trigger_pre(operation, &change.items);

        match operation {
            ItemOperation::Add | ItemOperation::Increase => self.merge_or_append(change).await?,
            ItemOperation::Remove | ItemOperation::Decrease => self.decrement_or_delete(change),
        }

        self.plugins.trigger_post(operation, &change.items);
        Ok(&self.wishlist)
    }

    pub async fn add_items(&mut self, change: &WishlistChange) -> Result<&Wishlist, WishlistError> {
        self.apply(ItemOperation::Add, change).await
    }

    pub async fn increase_items(
        &mut self,
        change: &WishlistChange,
    ) -> Result<&Wishlist, WishlistError> {
        self.apply(ItemOperation::Increase, change).await
    }

    pub async fn remove_items(
        &mut self,
        change: &WishlistChange,
    ) -> Result<&Wishlist, WishlistError> {
        self.apply(ItemOperation::Remove, change).await
    }

    pub async fn decrease_items(
        &mut self,
        change: &WishlistChange,
    ) -> Result<&Wishlist, WishlistError> {
        self.apply(ItemOperation::Decrease, change).await
    }

    /// Merge each delta into the line item sharing its group key, or
    /// append it as a new item enriched with the abstract product id
    /// resolved from the catalog.
    async fn merge_or_append(&mut self, change: &WishlistChange) -> Result<(), WishlistError> {
        let index = build_index(&self.wishlist.items);

        for delta in &change.items {
            let position = delta.merge_key().and_then(|key| index.get(key)).copied();

            match position {
                Some(position) => {
                    let existing = &mut self.wishlist.items[position];
                    existing.quantity = existing.quantity.saturating_add(delta.quantity);
                }
                None => {
                    let product = self.product_lookup.find_by_sku(&delta.sku).await?;
                    let mut item = delta.clone();
                    item.abstract_product_id = Some(product.abstract_product_id);
                    self.wishlist.items.push(item);
                }
            }
        }

        Ok(())
    }

    /// Decrement each delta's target, deleting targets whose quantity
    /// would drop to zero or below. A zero or negative delta quantity
    /// against an existing item also deletes it.
    ///
    /// The index is built once for the whole batch. Deletions are
    /// tombstoned so later deltas keep seeing pre-batch positions, and
    /// the tombstoned slots are compacted away before returning.
    fn decrement_or_delete(&mut self, change: &WishlistChange) {
        let index = build_index(&self.wishlist.items);
        let mut removed = vec![false; self.wishlist.items.len()];

        for delta in &change.items {
            let position = match delta.merge_key().and_then(|key| index.get(key)) {
                Some(&position) => Some(position),
                None => fallback_position(&self.wishlist.items, &removed, &index, &delta.sku),
            };

            let Some(position) = position else { continue };
            if removed[position] {
                continue;
            }

            let existing = &mut self.wishlist.items[position];
            let new_quantity = existing.quantity.saturating_sub(delta.quantity);
            if new_quantity > 0 && delta.quantity > 0 {
                existing.quantity = new_quantity;
            } else {
                removed[position] = true;
            }
        }

        let mut slot = 0;
        self.wishlist.items.retain(|_| {
            let keep = !removed[slot];
            slot += 1;
            keep
        });
    }
}

/// Map each indexable group key to its item's position. Built fresh per
/// batch, never reused across calls; items with absent keys are skipped.
fn build_index(items: &[WishlistItem]) -> HashMap<String, usize> {
    let mut index = HashMap::new();
    for (position, item) in items.iter().enumerate() {
        if let Some(key) = item.merge_key() {
            index.insert(key.to_string(), position);
        }
    }
    index
}

/// First live item with an equal SKU, resolved back through the index
/// via its own group key. First match wins even when several items share
/// a SKU under different group keys. None if nothing matches or the
/// matched item carries no indexable key.
fn fallback_position(
    items: &[WishlistItem],
    removed: &[bool],
    index: &HashMap<String, usize>,
    sku: &str,
) -> Option<usize> {
    items
        .iter()
        .enumerate()
        .filter(|(position, _)| !removed[*position])
        .find(|(_, item)| item.sku == sku)
        .and_then(|(_, item)| item.merge_key())
        .and_then(|key| index.get(key))
        .copied()
}
