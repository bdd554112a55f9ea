use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::services::ProductLookupService;
use crate::domain::wishlist::aggregation::ItemAggregator;
use crate::domain::wishlist::errors::WishlistError;
use crate::domain::wishlist::model::Wishlist;
use crate::domain::wishlist::plugins::ItemPluginRegistry;
use crate::domain::wishlist::use_cases::add_items::{
    AddWishlistItemsParams, AddWishlistItemsUseCase,
};

pub struct AddWishlistItemsUseCaseImpl {
    pub product_lookup: Arc<dyn ProductLookupService>,
    pub plugins: Arc<ItemPluginRegistry>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddWishlistItemsUseCase for AddWishlistItemsUseCaseImpl {
    async fn execute(&self, params: AddWishlistItemsParams) -> Result<Wishlist, WishlistError> {
        self.logger.info(&format!(
            "Adding {} item(s) to wishlist: {}",
            params.change.items.len(),
            params.wishlist.name
        ));

        let mut aggregator = ItemAggregator::new(
            params.wishlist,
            Arc::clone(&self.product_lookup),
            Arc::clone(&self.plugins),
        );
        aggregator.add_items(&params.change).await?;
        let wishlist = aggregator.into_wishlist();

        self.logger.info(&format!(
            "Wishlist {} now holds {} item(s)",
            wishlist.name,
            wishlist.items.len()
        ));
        Ok(wishlist)
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;

    use super::*;
    use crate::domain::product::errors::ProductError;
    use crate::domain::product::services::ProductConcrete;
    use crate::domain::wishlist::model::{WishlistChange, WishlistItem};

    mock! {
        pub ProductLookup {}

        #[async_trait]
        impl ProductLookupService for ProductLookup {
            async fn find_by_sku(&self, sku: &str) -> Result<ProductConcrete, ProductError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn test_wishlist(items: Vec<WishlistItem>) -> Wishlist {
        Wishlist::from_repository("Default".to_string(), "DE--1".to_string(), items)
    }

    #[tokio::test]
    async fn should_append_new_item_with_resolved_product_id() {
        let mut lookup = MockProductLookup::new();
        lookup.expect_find_by_sku().returning(|sku| {
            Ok(ProductConcrete {
                sku: sku.to_string(),
                abstract_product_id: 42,
            })
        });

        let use_case = AddWishlistItemsUseCaseImpl {
            product_lookup: Arc::new(lookup),
            plugins: Arc::new(ItemPluginRegistry::new()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AddWishlistItemsParams {
                wishlist: test_wishlist(vec![]),
                change: WishlistChange::new(vec![WishlistItem::new(
                    Some("B".to_string()),
                    "S2",
                    3,
                )]),
            })
            .await;

        assert!(result.is_ok());
        let wishlist = result.unwrap();
        assert_eq!(wishlist.items.len(), 1);
        assert_eq!(wishlist.items[0].quantity, 3);
        assert_eq!(wishlist.items[0].abstract_product_id, Some(42));
    }

    #[tokio::test]
    async fn should_merge_into_existing_item_without_lookup() {
        let use_case = AddWishlistItemsUseCaseImpl {
            product_lookup: Arc::new(MockProductLookup::new()),
            plugins: Arc::new(ItemPluginRegistry::new()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AddWishlistItemsParams {
                wishlist: test_wishlist(vec![WishlistItem::new(Some("A".to_string()), "S1", 2)]),
                change: WishlistChange::new(vec![WishlistItem::new(
                    Some("A".to_string()),
                    "S1",
                    3,
                )]),
            })
            .await;

        assert!(result.is_ok());
        let wishlist = result.unwrap();
        assert_eq!(wishlist.items.len(), 1);
        assert_eq!(wishlist.items[0].quantity, 5);
    }

    #[tokio::test]
    async fn should_propagate_lookup_failure() {
        let mut lookup = MockProductLookup::new();
        lookup
            .expect_find_by_sku()
            .returning(|_| Err(ProductError::NotFound));

        let use_case = AddWishlistItemsUseCaseImpl {
            product_lookup: Arc::new(lookup),
            plugins: Arc::new(ItemPluginRegistry::new()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AddWishlistItemsParams {
                wishlist: test_wishlist(vec![]),
                change: WishlistChange::new(vec![WishlistItem::new(None, "S-unknown", 1)]),
            })
            .await;

        assert!(result.is_err());
        assert!(matches!(
            result.unwrap_err(),
            WishlistError::Product(ProductError::NotFound)
        ));
    }
}
