use async_trait::async_trait;

use crate::domain::wishlist::errors::WishlistError;
use crate::domain::wishlist::model::{Wishlist, WishlistChange};

pub struct IncreaseWishlistItemsParams {
    pub wishlist: Wishlist,
    pub change: WishlistChange,
}

#[async_trait]
pub trait IncreaseWishlistItemsUseCase: Send + Sync {
    async fn execute(&self, params: IncreaseWishlistItemsParams)
    -> Result<Wishlist, WishlistError>;
}
