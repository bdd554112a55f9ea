use serde::{Deserialize, Serialize};

use super::errors::WishlistError;

/// A single line item of a wishlist.
///
/// The same shape doubles as the delta format of a [`WishlistChange`]:
/// there `quantity` is a relative adjustment, not an absolute value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WishlistItem {
    pub group_key: Option<String>,
    pub sku: String,
    pub quantity: i32,
    pub abstract_product_id: Option<i64>,
}

impl WishlistItem {
    pub fn new(group_key: Option<String>, sku: impl Into<String>, quantity: i32) -> Self {
        Self {
            group_key,
            sku: sku.into(),
            quantity,
            abstract_product_id: None,
        }
    }

    /// The identity used to merge duplicate requests. Empty strings count
    /// as absent, same as a missing key.
    pub fn merge_key(&self) -> Option<&str> {
        self.group_key.as_deref().filter(|key| !key.is_empty())
    }
}

/// A requested batch of item deltas, applied in order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WishlistChange {
    pub items: Vec<WishlistItem>,
}

impl WishlistChange {
    pub fn new(items: Vec<WishlistItem>) -> Self {
        Self { items }
    }
}

/// A customer's named collection of line items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wishlist {
    pub name: String,
    pub customer_reference: String,
    pub items: Vec<WishlistItem>,
}

impl Wishlist {
    pub fn new(
        name: impl Into<String>,
        customer_reference: impl Into<String>,
    ) -> Result<Self, WishlistError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(WishlistError::NameEmpty);
        }

        let customer_reference = customer_reference.into();
        if customer_reference.trim().is_empty() {
            return Err(WishlistError::CustomerReferenceEmpty);
        }

        Ok(Self {
            name,
            customer_reference,
            items: Vec::new(),
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        name: String,
        customer_reference: String,
        items: Vec<WishlistItem>,
    ) -> Self {
        Self {
            name,
            customer_reference,
            items,
        }
    }
}
