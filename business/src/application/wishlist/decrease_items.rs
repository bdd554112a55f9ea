use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::services::ProductLookupService;
use crate::domain::wishlist::aggregation::ItemAggregator;
use crate::domain::wishlist::errors::WishlistError;
use crate::domain::wishlist::model::Wishlist;
use crate::domain::wishlist::plugins::ItemPluginRegistry;
use crate::domain::wishlist::use_cases::decrease_items::{
    DecreaseWishlistItemsParams, DecreaseWishlistItemsUseCase,
};

/// Same algorithm as removal: quantities dropping to zero or below
/// delete the line item.
pub struct DecreaseWishlistItemsUseCaseImpl {
    pub product_lookup: Arc<dyn ProductLookupService>,
    pub plugins: Arc<ItemPluginRegistry>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DecreaseWishlistItemsUseCase for DecreaseWishlistItemsUseCaseImpl {
    async fn execute(
        &self,
        params: DecreaseWishlistItemsParams,
    ) -> Result<Wishlist, WishlistError> {
        self.logger.info(&format!(
            "Decreasing {} item(s) on wishlist: {}",
            params.change.items.len(),
            params.wishlist.name
        ));

        let mut aggregator = ItemAggregator::new(
            params.wishlist,
            Arc::clone(&self.product_lookup),
            Arc::clone(&self.plugins),
        );
        aggregator.decrease_items(&params.change).await?;
        let wishlist = aggregator.into_wishlist();

        self.logger.info(&format!(
            "Wishlist {} now holds {} item(s)",
            wishlist.name,
            wishlist.items.len()
        ));
        Ok(wishlist)
    }
}
