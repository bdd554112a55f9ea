/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum WishlistError {
    #[error("wishlist.name_empty")]
    NameEmpty,
    #[error("wishlist.customer_reference_empty")]
    CustomerReferenceEmpty,
    #[error("product.not_found")]
    Product(#[from] crate::domain::product::errors::ProductError),
}
