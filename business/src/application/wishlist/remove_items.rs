use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::services::ProductLookupService;
use crate::domain::wishlist::aggregation::ItemAggregator;
use crate::domain::wishlist::errors::WishlistError;
use crate::domain::wishlist::model::Wishlist;
use crate::domain::wishlist::plugins::ItemPluginRegistry;
use crate::domain::wishlist::use_cases::remove_items::{
    RemoveWishlistItemsParams, RemoveWishlistItemsUseCase,
};

pub struct RemoveWishlistItemsUseCaseImpl {
    pub product_lookup: Arc<dyn ProductLookupService>,
    pub plugins: Arc<ItemPluginRegistry>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveWishlistItemsUseCase for RemoveWishlistItemsUseCaseImpl {
    async fn execute(&self, params: RemoveWishlistItemsParams) -> Result<Wishlist, WishlistError> {
        self.logger.info(&format!(
            "Removing {} item(s) from wishlist: {}",
            params.change.items.len(),
            params.wishlist.name
        ));

        let mut aggregator = ItemAggregator::new(
            params.wishlist,
            Arc::clone(&self.product_lookup),
            Arc::clone(&self.plugins),
        );
        aggregator.remove_items(&params.change).await?;
        let wishlist = aggregator.into_wishlist();

        self.logger.info(&format!(
            "Wishlist {} now holds {} item(s)",
            wishlist.name,
            wishlist.items.len()
        ));
        Ok(wishlist)
    }
}
