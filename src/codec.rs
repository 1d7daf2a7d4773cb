//! JSON encoding for catalog files.
//! A catalog file is a top-level JSON array of record objects, written pretty-printed
//! with fields in declaration order.

use anyhow::Context;
use serde::{Serialize, de::DeserializeOwned};

/// Serialize `records` as an indented JSON array, terminated by a newline.
pub fn encode<T: Serialize>(records: &[T]) -> anyhow::Result<String> {
    let mut text = serde_json::to_string_pretty(records).context("encoding JSON")?;
    text.push('\n');
    Ok(text)
}

/// Parse a JSON array of records. Unknown fields are ignored, missing or `null` fields
/// take their default, and a top-level `null` is an empty list.
pub fn decode<T: DeserializeOwned>(text: &str) -> anyhow::Result<Vec<T>> {
    let records: Option<Vec<T>> = serde_json::from_str(text).context("parsing JSON")?;
    Ok(records.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Category, Item};
    use pretty_assertions::assert_eq;

    #[test]
    fn null_document_is_an_empty_list() {
        let items: Vec<Item> = decode("null").expect("decode");
        assert!(items.is_empty());
    }

    #[test]
    fn missing_fields_default_and_unknown_fields_are_ignored() {
        let items: Vec<Item> =
            decode(r#"[{"name": "Beetle", "colour": "green"}]"#).expect("decode");
        assert_eq!(
            items,
            vec![Item {
                name: "Beetle".to_string(),
                ..Default::default()
            }]
        );
    }

    #[test]
    fn null_fields_decode_as_defaults() {
        let items: Vec<Item> =
            decode(r#"[{"id": 1, "name": "Ant", "price": null}]"#).expect("decode");
        assert_eq!(items[0].price, "");
        assert_eq!(items[0].name, "Ant");

        let items: Vec<Item> = decode(r#"[{"id": null, "name": null}]"#).expect("decode");
        assert_eq!(items, vec![Item::default()]);
        let categories: Vec<Category> = decode(r#"[{"image": null}]"#).expect("decode");
        assert_eq!(categories, vec![Category::default()]);
    }

    #[test]
    fn object_at_top_level_is_rejected() {
        assert!(decode::<Category>(r#"{"name": "Bugs"}"#).is_err());
    }

    #[test]
    fn trailing_comma_is_rejected() {
        assert!(decode::<Category>(r#"[{"name": "Bugs",}]"#).is_err());
    }

    #[test]
    fn encode_keeps_declaration_order_and_indents() {
        let text = encode(&[Category {
            name: "Bugs".to_string(),
            image: "/images/bug.png".to_string(),
        }])
        .expect("encode");
        assert_eq!(
            text,
            "[\n  {\n    \"name\": \"Bugs\",\n    \"image\": \"/images/bug.png\"\n  }\n]\n"
        );
    }

    #[test]
    fn encode_empty_list() {
        assert_eq!(encode::<Item>(&[]).expect("encode"), "[]\n");
    }

    #[test]
    fn item_list_survives_encode_then_decode() {
        let items = vec![
            Item {
                id: 2,
                name: "Szarvasbogár".to_string(),
                picture: "/images/szarvas.jpg".to_string(),
                description: "Large \"stag\" beetle".to_string(),
                price: "4 500 Ft".to_string(),
                category: "Bogarak".to_string(),
            },
            Item {
                id: 1,
                name: "Ant".to_string(),
                picture: "/images/ant.png".to_string(),
                description: "Small".to_string(),
                price: "12.50".to_string(),
                category: "Bugs".to_string(),
            },
        ];
        let decoded: Vec<Item> = decode(&encode(&items).expect("encode")).expect("decode");
        assert_eq!(decoded, items);
    }
}
