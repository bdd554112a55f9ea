use async_trait::async_trait;

use crate::domain::wishlist::errors::WishlistError;
use crate::domain::wishlist::model::{Wishlist, WishlistChange};

pub struct AddWishlistItemsParams {
    pub wishlist: Wishlist,
    pub change: WishlistChange,
}

#[async_trait]
pub trait AddWishlistItemsUseCase: Send + Sync {
    async fn execute(&self, params: AddWishlistItemsParams) -> Result<Wishlist, WishlistError>;
}
