use poem_openapi::Object;
use serde_json::Value;

use business::domain::product::model::{NOT_AVAILABLE, NutrientValue, Nutrition, ProductInfo};

pub const PRODUCT_FOUND: &str = "Product found";
pub const PRODUCT_NOT_FOUND: &str = "Product not found";

/// Per-100g nutrition facts. Each value is a number, a catalog string, or "N/A".
#[derive(Debug, Clone, Object)]
pub struct NutritionResponse {
    /// Energy in kcal per 100g
    pub energy: Value,
    /// Fat in grams per 100g
    pub fat: Value,
    /// Carbohydrates in grams per 100g
    pub carbs: Value,
    /// Protein in grams per 100g
    pub protein: Value,
}

fn nutrient_json(value: NutrientValue) -> Value {
    match value {
        NutrientValue::Number(n) => Value::Number(n),
        NutrientValue::Text(s) => Value::String(s),
        NutrientValue::NotAvailable => Value::String(NOT_AVAILABLE.to_string()),
    }
}

impl From<Nutrition> for NutritionResponse {
    fn from(n: Nutrition) -> Self {
        Self {
            energy: nutrient_json(n.energy),
            fat: nutrient_json(n.fat),
            carbs: nutrient_json(n.carbs),
            protein: nutrient_json(n.protein),
        }
    }
}

/// Catalog metadata for a barcode.
#[derive(Debug, Clone, Object)]
pub struct ProductInfoResponse {
    pub barcode: String,
    /// Whether any catalog endpoint matched the barcode
    pub found: bool,
    /// "Product found" or "Product not found"
    pub message: String,
    pub name: String,
    pub brand: String,
    pub category: String,
    pub origin: String,
    pub ingredients: String,
    #[oai(skip_serializing_if_is_none)]
    pub image_url: Option<String>,
    pub nutrition: NutritionResponse,
}

impl From<ProductInfo> for ProductInfoResponse {
    fn from(info: ProductInfo) -> Self {
        let message = if info.found {
            PRODUCT_FOUND
        } else {
            PRODUCT_NOT_FOUND
        };

        Self {
            barcode: info.barcode,
            found: info.found,
            message: message.to_string(),
            name: info.name,
            brand: info.brand,
            category: info.category,
            origin: info.origin,
            ingredients: info.ingredients,
            image_url: info.image_url,
            nutrition: info.nutrition.into(),
        }
    }
}
