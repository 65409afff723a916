//! Sync eligibility
//!
//! An item is pushed to the catalog only if it is sellable, enabled, not a
//! fixed asset and carries a positive selling rate. Absent or malformed
//! fields count as "no".

use rust_decimal::Decimal;
use shared::Item;
use std::fmt;

/// Why an item was not synced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Integration or this hook is switched off
    SyncDisabled,
    NotSalesItem,
    Disabled,
    FixedAsset,
    /// Rate missing, zero or negative
    MissingPrice,
    ExcludedItemGroup(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SyncDisabled => write!(f, "sync disabled"),
            Self::NotSalesItem => write!(f, "not a sales item"),
            Self::Disabled => write!(f, "item disabled"),
            Self::FixedAsset => write!(f, "fixed asset"),
            Self::MissingPrice => write!(f, "no positive standard rate"),
            Self::ExcludedItemGroup(group) => write!(f, "item group '{group}' excluded"),
        }
    }
}

/// Eligibility rules, optionally excluding whole item groups
#[derive(Debug, Clone, Default)]
pub struct SyncFilter {
    excluded_item_groups: Vec<String>,
}

impl SyncFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Never sync items in these groups (e.g. "Services", "Raw Material")
    pub fn with_excluded_groups<I, S>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded_item_groups
            .extend(groups.into_iter().map(Into::into));
        self
    }

    pub fn excluded_item_groups(&self) -> &[String] {
        &self.excluded_item_groups
    }

    /// First rule the item fails, if any
    pub fn check(&self, item: &Item) -> Result<(), SkipReason> {
        if !item.is_sales_item {
            return Err(SkipReason::NotSalesItem);
        }
        if item.disabled {
            return Err(SkipReason::Disabled);
        }
        if item.is_fixed_asset {
            return Err(SkipReason::FixedAsset);
        }
        if !item.standard_rate.is_some_and(|rate| rate > Decimal::ZERO) {
            return Err(SkipReason::MissingPrice);
        }
        if let Some(group) = item
            .item_group
            .as_deref()
            .filter(|g| self.excluded_item_groups.iter().any(|ex| ex == g))
        {
            return Err(SkipReason::ExcludedItemGroup(group.to_string()));
        }
        Ok(())
    }

    pub fn is_eligible(&self, item: &Item) -> bool {
        self.check(item).is_ok()
    }
}

/// Whether `item` should be pushed to the catalog (default rules, no group exclusions)
pub fn is_eligible(item: &Item) -> bool {
    SyncFilter::default().is_eligible(item)
}
