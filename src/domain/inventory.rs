//! Inventory stock levels and derived fields

use serde_json::Value;

use crate::core::field::FieldValue;
use crate::core::record::Record;
use crate::domain::status::Color;

/// Items at or below this count are low on stock
pub const LOW_STOCK_THRESHOLD: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StockStatus {
    OutOfStock,
    LowStock,
    InStock,
}

impl StockStatus {
    pub fn from_count(available: f64) -> Self {
        if available <= 0.0 {
            StockStatus::OutOfStock
        } else if available <= LOW_STOCK_THRESHOLD {
            StockStatus::LowStock
        } else {
            StockStatus::InStock
        }
    }

    /// Value stored on enriched records and used by the stock filter
    pub fn as_str(self) -> &'static str {
        match self {
            StockStatus::OutOfStock => "out of stock",
            StockStatus::LowStock => "low stock",
            StockStatus::InStock => "in stock",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StockStatus::OutOfStock => "Out of Stock",
            StockStatus::LowStock => "Low Stock",
            StockStatus::InStock => "In Stock",
        }
    }

    pub fn color(self) -> Color {
        match self {
            StockStatus::OutOfStock => Color::Red,
            StockStatus::LowStock => Color::Yellow,
            StockStatus::InStock => Color::Green,
        }
    }
}

fn number(record: &Record, field: &str) -> f64 {
    record
        .get(field)
        .and_then(|v| FieldValue::from_json(v).as_number())
        .unwrap_or(0.0)
}

/// Stock status of an inventory record; a missing count reads as zero
pub fn stock_status(item: &Record) -> StockStatus {
    StockStatus::from_count(number(item, "availableCount"))
}

/// `availableCount * unitCost`, missing values counting as zero
pub fn total_value(item: &Record) -> f64 {
    number(item, "availableCount") * number(item, "unitCost")
}

fn json_number(n: f64) -> Value {
    if n.fract() == 0.0 && n.abs() < i64::MAX as f64 {
        Value::from(n as i64)
    } else {
        serde_json::Number::from_f64(n)
            .map(Value::Number)
            .unwrap_or(Value::Null)
    }
}

/// Add `stockStatus` and `totalValue` so the inventory view can filter and
/// sort on them
pub fn enrich_inventory_item(mut item: Record) -> Record {
    let status = stock_status(&item);
    let value = total_value(&item);
    item.insert("stockStatus", Value::String(status.as_str().to_string()));
    item.insert("totalValue", json_number(value));
    item
}

pub fn enrich_inventory(items: Vec<Record>) -> Vec<Record> {
    items.into_iter().map(enrich_inventory_item).collect()
}

/// Summed value of all stock
pub fn inventory_value(items: &[Record]) -> f64 {
    items.iter().map(total_value).sum()
}
