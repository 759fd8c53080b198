//! Catalog domain records and CSV fixture parsing.

use anyhow::Result;
use csv::ReaderBuilder;
use log::warn;
use serde::{Deserialize, Serialize};

/// Embedded category fixture data (id, name, image).
pub static CATEGORIES_CSV: &str = include_str!("../../fixtures/categories.csv");

/// Embedded item fixture data
/// (id, name, description, price, stock, image, category id).
pub static CATALOG_CSV: &str = include_str!("../../fixtures/catalog.csv");

/// An item category shown in the catalog sidebar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub image: String,
}

/// A catalog entry with its quantity on hand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub description: String,
    /// Display price, already formatted (e.g. "$24.99").
    pub price: String,
    /// Quantity on hand. Malformed fixture values become NaN and flow
    /// through the stock-bar scales untouched.
    pub stock: f64,
    pub image: String,
    pub category_id: i64,
}

impl Item {
    /// The DOM element id this item's page row carries. The stock-bar
    /// render pass resolves its target container from this id.
    pub fn dom_id(&self) -> String {
        format!("item-{}", self.id)
    }
}

/// Parse the header-less category CSV. Rows with a malformed id are skipped.
pub fn parse_categories(csv_data: &str) -> Result<Vec<Category>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(csv_data.as_bytes());

    let mut categories = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let id = match record.get(0).unwrap_or("").trim().parse::<i64>() {
            Ok(id) => id,
            Err(_) => {
                warn!("skipping category row with malformed id: {:?}", record);
                continue;
            }
        };
        categories.push(Category {
            id,
            name: record.get(1).unwrap_or("").trim().to_string(),
            image: record.get(2).unwrap_or("").trim().to_string(),
        });
    }
    Ok(categories)
}

/// Parse the header-less item CSV.
///
/// Rows with a malformed id are skipped; a malformed stock field is kept as
/// NaN so the degradation happens visibly in the bar, not as a parse error.
pub fn parse_items(csv_data: &str) -> Result<Vec<Item>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(csv_data.as_bytes());

    let mut items = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let id = match record.get(0).unwrap_or("").trim().parse::<i64>() {
            Ok(id) => id,
            Err(_) => {
                warn!("skipping item row with malformed id: {:?}", record);
                continue;
            }
        };
        let stock = record
            .get(4)
            .unwrap_or("")
            .trim()
            .parse::<f64>()
            .unwrap_or(f64::NAN);
        items.push(Item {
            id,
            name: record.get(1).unwrap_or("").trim().to_string(),
            description: record.get(2).unwrap_or("").trim().to_string(),
            price: record.get(3).unwrap_or("").trim().to_string(),
            stock,
            image: record.get(5).unwrap_or("").trim().to_string(),
            category_id: record
                .get(6)
                .unwrap_or("")
                .trim()
                .parse::<i64>()
                .unwrap_or(0),
        });
    }
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_embedded_fixtures() {
        let categories = parse_categories(CATEGORIES_CSV).unwrap();
        let items = parse_items(CATALOG_CSV).unwrap();
        assert_eq!(categories.len(), 6);
        assert_eq!(items.len(), 15);
        // Every item points at a known category.
        for item in &items {
            assert!(categories.iter().any(|c| c.id == item.category_id));
        }
    }

    #[test]
    fn dom_id_prefixes_the_numeric_id() {
        let items = parse_items("3,Goalkeeper Gloves,,$34.00,7,gloves.jpg,1").unwrap();
        assert_eq!(items[0].dom_id(), "item-3");
    }

    #[test]
    fn empty_input_parses_to_empty() {
        assert!(parse_categories("").unwrap().is_empty());
        assert!(parse_items("").unwrap().is_empty());
    }

    #[test]
    fn malformed_stock_becomes_nan() {
        let items = parse_items("9,Bindings,,$159.00,plenty,bindings.jpg,4").unwrap();
        assert_eq!(items.len(), 1);
        assert!(items[0].stock.is_nan());
    }

    #[test]
    fn malformed_id_rows_are_skipped() {
        let csv = "1,Ball,,$5,10,ball.jpg,1\nnot-an-id,Broken,,$0,0,x.jpg,1\n";
        let items = parse_items(csv).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, 1);
    }

    #[test]
    fn item_serializes_to_json() {
        let item = Item {
            id: 1,
            name: "Soccer Ball".to_string(),
            description: "FIFA-approved size 5 match ball".to_string(),
            price: "$24.99".to_string(),
            stock: 64.0,
            image: "ball.jpg".to_string(),
            category_id: 1,
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["name"], "Soccer Ball");
        assert_eq!(json["stock"], 64.0);
    }
}
