use async_trait::async_trait;

use crate::domain::wishlist::errors::WishlistError;
use crate::domain::wishlist::model::{Wishlist, WishlistChange};

pub struct RemoveWishlistItemsParams {
    pub wishlist: Wishlist,
    pub change: WishlistChange,
}

#[async_trait]
pub trait RemoveWishlistItemsUseCase: Send + Sync {
    async fn execute(&self, params: RemoveWishlistItemsParams) -> Result<Wishlist, WishlistError>;
}
