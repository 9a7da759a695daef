//! The product record entity.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A catalog product.
///
/// Serialized with camelCase field names (`productId`, `description`,
/// `weight`, `price`, `notes`). `productID` is accepted on input as well,
/// since browser clients send that spelling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// Unique product identifier. Missing on input means blank, which
    /// [`Record::validate`] rejects.
    #[serde(default, alias = "productID", alias = "ProductId")]
    pub product_id: String,

    /// Free-text description.
    #[serde(default)]
    pub description: String,

    /// Weight in kilograms.
    #[serde(default)]
    pub weight: f64,

    /// Unit price.
    #[serde(default)]
    pub price: f64,

    /// Free-text notes.
    #[serde(default)]
    pub notes: String,
}

impl Record {
    /// Creates a record with the given id and description.
    ///
    /// # Examples
    ///
    /// ```
    /// use kyp_core::Record;
    ///
    /// let mouse = Record::new("P001", "Wireless Mouse")
    ///     .with_price(19.99)
    ///     .with_weight(0.1)
    ///     .with_notes("Ergonomic design");
    /// assert_eq!(mouse.product_id, "P001");
    /// ```
    pub fn new(product_id: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            product_id: product_id.into(),
            description: description.into(),
            weight: 0.0,
            price: 0.0,
            notes: String::new(),
        }
    }

    /// Sets the weight.
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    /// Sets the price.
    pub fn with_price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    /// Sets the notes.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// Checks that the record can be stored.
    ///
    /// The id must not be blank and numeric fields must be finite.
    pub fn validate(&self) -> Result<()> {
        if self.product_id.trim().is_empty() {
            return Err(Error::validation_field("productId", "must not be blank"));
        }
        if !self.price.is_finite() {
            return Err(Error::validation_field("price", "must be a finite number"));
        }
        if !self.weight.is_finite() {
            return Err(Error::validation_field("weight", "must be a finite number"));
        }
        Ok(())
    }
}
