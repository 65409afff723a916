//! Item Model
//!
//! The host ERP's stock item, as delivered to lifecycle hooks. Field names
//! follow the host document so a hook payload deserializes directly.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::serde_helpers;

/// Item entity (source record of a catalog sync)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique item code in the host system
    pub item_code: String,
    /// Display name, may be empty
    #[serde(default)]
    pub item_name: String,
    #[serde(default, deserialize_with = "serde_helpers::non_empty_string")]
    pub description: Option<String>,
    /// Selling rate
    #[serde(
        default,
        serialize_with = "rust_decimal::serde::float_option::serialize",
        deserialize_with = "serde_helpers::lenient_decimal"
    )]
    pub standard_rate: Option<Decimal>,
    #[serde(
        default,
        alias = "weight",
        serialize_with = "rust_decimal::serde::float_option::serialize",
        deserialize_with = "serde_helpers::lenient_decimal"
    )]
    pub weight_per_unit: Option<Decimal>,
    /// Stock unit of measure
    #[serde(default)]
    pub stock_uom: String,
    #[serde(default, deserialize_with = "serde_helpers::non_empty_string")]
    pub item_group: Option<String>,
    #[serde(default, deserialize_with = "serde_helpers::flag")]
    pub is_sales_item: bool,
    #[serde(default, deserialize_with = "serde_helpers::flag")]
    pub disabled: bool,
    #[serde(default, deserialize_with = "serde_helpers::flag")]
    pub is_fixed_asset: bool,
    /// Remote catalog product ID, set after the first successful sync
    #[serde(default, deserialize_with = "serde_helpers::non_empty_string")]
    pub wix_product_id: Option<String>,
}

impl Item {
    /// Create an item with the given code and everything else unset
    pub fn new(item_code: impl Into<String>) -> Self {
        Self {
            item_code: item_code.into(),
            ..Default::default()
        }
    }

    /// Parse a raw host document
    pub fn from_document(doc: &serde_json::Value) -> Result<Self, serde_json::Error> {
        Self::deserialize(doc)
    }

    /// Name shown to users: item name, or the code when the name is blank
    pub fn display_name(&self) -> &str {
        if self.item_name.is_empty() {
            &self.item_code
        } else {
            &self.item_name
        }
    }

    pub fn remote_product_id(&self) -> Option<&str> {
        self.wix_product_id.as_deref()
    }

    pub fn is_synced(&self) -> bool {
        self.wix_product_id.is_some()
    }
}
