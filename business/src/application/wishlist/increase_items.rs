use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::services::ProductLookupService;
use crate::domain::wishlist::aggregation::ItemAggregator;
use crate::domain::wishlist::errors::WishlistError;
use crate::domain::wishlist::model::Wishlist;
use crate::domain::wishlist::plugins::ItemPluginRegistry;
use crate::domain::wishlist::use_cases::increase_items::{
    IncreaseWishlistItemsParams, IncreaseWishlistItemsUseCase,
};

/// Same algorithm as adding: an increase against an unknown group key
/// appends a new line item.
pub struct IncreaseWishlistItemsUseCaseImpl {
    pub product_lookup: Arc<dyn ProductLookupService>,
    pub plugins: Arc<ItemPluginRegistry>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl IncreaseWishlistItemsUseCase for IncreaseWishlistItemsUseCaseImpl {
    async fn execute(
        &self,
        params: IncreaseWishlistItemsParams,
    ) -> Result<Wishlist, WishlistError> {
        self.logger.info(&format!(
            "Increasing {} item(s) on wishlist: {}",
            params.change.items.len(),
            params.wishlist.name
        ));

        let mut aggregator = ItemAggregator::new(
            params.wishlist,
            Arc::clone(&self.product_lookup),
            Arc::clone(&self.plugins),
        );
        aggregator.increase_items(&params.change).await?;
        let wishlist = aggregator.into_wishlist();

        self.logger.info(&format!(
            "Wishlist {} now holds {} item(s)",
            wishlist.name,
            wishlist.items.len()
        ));
        Ok(wishlist)
    }
}
