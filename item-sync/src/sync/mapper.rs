//! Item → Wix product mapping
//!
//! Pure and deterministic: no I/O, no eligibility checks. Callers run the
//! filter first; an unfiltered item still maps to a well-formed product.

use rust_decimal::Decimal;
use shared::models::{
    Money, PhysicalProperties, ProductType, Variant, VariantPrice, VariantsInfo,
};
use shared::{Item, WixProduct};

/// Map an item to a single-variant catalog product
pub fn map_to_product(item: &Item) -> WixProduct {
    let name = if item.item_name.is_empty() {
        item.item_code.clone()
    } else {
        item.item_name.clone()
    };

    WixProduct {
        name,
        plain_description: item.description.clone().unwrap_or_default(),
        slug: Some(product_slug(&item.item_code)),
        product_type: ProductType::Physical,
        visible: true,
        variants_info: VariantsInfo {
            variants: vec![Variant {
                sku: item.item_code.clone(),
                price: VariantPrice {
                    actual_price: Money {
                        amount: item.standard_rate.unwrap_or(Decimal::ZERO),
                    },
                },
                physical_properties: PhysicalProperties {
                    weight: item.weight_per_unit,
                },
            }],
        },
    }
}

/// URL slug for an item code: lowercase, `[a-z0-9-_]` only, single dashes
pub fn product_slug(item_code: &str) -> String {
    let mut slug = String::with_capacity(item_code.len());
    for c in item_code.to_lowercase().chars() {
        let c = if c.is_ascii_alphanumeric() || c == '_' { c } else { '-' };
        if c == '-' && slug.ends_with('-') {
            continue;
        }
        slug.push(c);
    }
    slug.trim_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn d(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn widget() -> Item {
        Item {
            item_code: "SKU1".into(),
            item_name: "Widget".into(),
            standard_rate: Some(d("9.99")),
            weight_per_unit: Some(d("1.5")),
            is_sales_item: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_maps_fields() {
        let product = map_to_product(&widget());
        let variant = product.variant().unwrap();

        assert_eq!(product.name, "Widget");
        assert_eq!(product.plain_description, "");
        assert_eq!(product.variants_info.variants.len(), 1);
        assert_eq!(variant.sku, "SKU1");
        assert_eq!(variant.price.actual_price.amount, d("9.99"));
        assert_eq!(variant.physical_properties.weight, Some(d("1.5")));
    }

    #[test]
    fn test_name_falls_back_to_code() {
        let mut item = widget();
        item.item_code = "SKU2".into();
        item.item_name = String::new();
        assert_eq!(map_to_product(&item).name, "SKU2");
    }

    #[test]
    fn test_weight_omitted_when_absent() {
        let mut item = widget();
        item.weight_per_unit = None;
        let value = serde_json::to_value(map_to_product(&item)).unwrap();
        assert!(value["variantsInfo"]["variants"][0]["physicalProperties"]
            .get("weight")
            .is_none());
    }

    #[test]
    fn test_zero_values_pass_through() {
        let mut item = widget();
        item.weight_per_unit = Some(Decimal::ZERO);
        item.standard_rate = Some(Decimal::ZERO);
        let product = map_to_product(&item);
        let variant = product.variant().unwrap();
        assert_eq!(variant.physical_properties.weight, Some(Decimal::ZERO));
        assert_eq!(variant.price.actual_price.amount, Decimal::ZERO);
    }

    #[test]
    fn test_deterministic_and_input_untouched() {
        let item = widget();
        let before = item.clone();
        let a = serde_json::to_vec(&map_to_product(&item)).unwrap();
        let b = serde_json::to_vec(&map_to_product(&item)).unwrap();
        assert_eq!(a, b);
        assert_eq!(item, before);
    }

    #[test]
    fn test_scenario_payload() {
        let item = Item {
            item_code: "TEST-001".into(),
            item_name: "Test Product".into(),
            description: Some("Testing".into()),
            standard_rate: Some(d("29.99")),
            is_sales_item: true,
            ..Default::default()
        };
        let value = serde_json::to_value(map_to_product(&item)).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "Test Product",
                "plainDescription": "Testing",
                "slug": "test-001",
                "productType": "PHYSICAL",
                "visible": true,
                "variantsInfo": {
                    "variants": [{
                        "sku": "TEST-001",
                        "price": { "actualPrice": { "amount": "29.99" } },
                        "physicalProperties": {}
                    }]
                }
            })
        );
    }

    #[test]
    fn test_product_slug() {
        assert_eq!(product_slug("TEST-001"), "test-001");
        assert_eq!(product_slug("Red Shirt / XL"), "red-shirt-xl");
        assert_eq!(product_slug("--A__b--"), "a__b");
        assert_eq!(product_slug("café #1"), "caf-1");
    }
}
