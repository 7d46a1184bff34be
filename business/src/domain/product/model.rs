use serde_json::Number;

pub const UNKNOWN: &str = "Unknown";
pub const NOT_AVAILABLE: &str = "N/A";

/// A per-100g nutrient as published by the catalog.
///
/// The catalog mixes numbers and strings for the same field, so both are kept
/// as-is instead of being coerced.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum NutrientValue {
    Number(Number),
    Text(String),
    #[default]
    NotAvailable,
}

impl NutrientValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            NutrientValue::Number(n) => n.as_f64(),
            _ => None,
        }
    }
}

impl std::fmt::Display for NutrientValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NutrientValue::Number(n) => write!(f, "{}", n),
            NutrientValue::Text(s) => write!(f, "{}", s),
            NutrientValue::NotAvailable => write!(f, "{}", NOT_AVAILABLE),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Nutrition {
    pub energy: NutrientValue,
    pub fat: NutrientValue,
    pub carbs: NutrientValue,
    pub protein: NutrientValue,
}

/// Product metadata for one barcode. Built fresh per lookup, never cached.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductInfo {
    pub barcode: String,
    pub found: bool,
    pub name: String,
    pub brand: String,
    pub category: String,
    pub origin: String,
    pub ingredients: String,
    pub image_url: Option<String>,
    pub nutrition: Nutrition,
}

impl ProductInfo {
    pub fn not_found(barcode: impl Into<String>) -> Self {
        Self {
            barcode: barcode.into(),
            found: false,
            name: UNKNOWN.to_string(),
            brand: UNKNOWN.to_string(),
            category: NOT_AVAILABLE.to_string(),
            origin: NOT_AVAILABLE.to_string(),
            ingredients: NOT_AVAILABLE.to_string(),
            image_url: None,
            nutrition: Nutrition::default(),
        }
    }
}
