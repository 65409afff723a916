//! Product Model
//!
//! Wix Stores catalog product, as sent in create/update requests.
//! Serialized in the remote API's camelCase shape.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Catalog product (target record of a catalog sync)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WixProduct {
    pub name: String,
    pub plain_description: String,
    /// URL slug derived from the item code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default)]
    pub product_type: ProductType,
    #[serde(default = "default_visible")]
    pub visible: bool,
    pub variants_info: VariantsInfo,
}

impl WixProduct {
    /// The product's only variant
    pub fn variant(&self) -> Option<&Variant> {
        self.variants_info.variants.first()
    }

    /// Problems that would make the catalog reject this product; empty when
    /// the product is ready to send
    pub fn validation_errors(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.name.trim().is_empty() {
            errors.push("product name is required".to_string());
        }
        if self.variants_info.variants.is_empty() {
            errors.push("at least one variant is required".to_string());
        }
        for (i, variant) in self.variants_info.variants.iter().enumerate() {
            if variant.sku.trim().is_empty() {
                errors.push(format!("variant {} must have a SKU", i + 1));
            }
            if variant.price.actual_price.amount < Decimal::ZERO {
                errors.push(format!("variant {} price must not be negative", i + 1));
            }
        }
        errors
    }
}

fn default_visible() -> bool {
    true
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductType {
    #[default]
    Physical,
    Digital,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantsInfo {
    pub variants: Vec<Variant>,
}

/// Product variant (SKU + price + physical properties)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variant {
    pub sku: String,
    pub price: VariantPrice,
    #[serde(default)]
    pub physical_properties: PhysicalProperties,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantPrice {
    pub actual_price: Money,
}

/// Price amount, sent as a decimal string so no precision is lost
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Money {
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PhysicalProperties {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::float_option"
    )]
    pub weight: Option<Decimal>,
}
