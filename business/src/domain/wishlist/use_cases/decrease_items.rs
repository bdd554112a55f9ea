use async_trait::async_trait;

use crate::domain::wishlist::errors::WishlistError;
use crate::domain::wishlist::model::{Wishlist, WishlistChange};

pub struct DecreaseWishlistItemsParams {
    pub wishlist: Wishlist,
    pub change: WishlistChange,
}

#[async_trait]
pub trait DecreaseWishlistItemsUseCase: Send + Sync {
    async fn execute(&self, params: DecreaseWishlistItemsParams)
    -> Result<Wishlist, WishlistError>;
}
