use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};
use serde_json::{Number, Value};

use business::domain::product::catalog::{
    CatalogNutriments, CatalogRecord, CatalogResponse, ProductField,
};
use business::domain::product::model::NutrientValue;

/// Body shared by the v0, v2 and search endpoints. Every field is optional
/// and loosely typed because the catalog is not consistent about either.
#[derive(Debug, Deserialize)]
pub struct OpenFoodFactsResponse {
    #[serde(default)]
    status: Option<OpenFoodFactsStatus>,
    /// `Some` whenever the key exists, even with a `null` value.
    #[serde(default, deserialize_with = "present")]
    product: Option<OpenFoodFactsEntry>,
    #[serde(default)]
    products: Option<OpenFoodFactsProducts>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OpenFoodFactsStatus {
    Number(f64),
    Flag(bool),
    Other(IgnoredAny),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OpenFoodFactsProducts {
    List(Vec<OpenFoodFactsEntry>),
    Other(IgnoredAny),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OpenFoodFactsEntry {
    Product(OpenFoodFactsProduct),
    Other(IgnoredAny),
}

#[derive(Debug, Deserialize)]
struct OpenFoodFactsProduct {
    product_name: Option<OpenFoodFactsText>,
    brands: Option<OpenFoodFactsText>,
    categories: Option<OpenFoodFactsText>,
    countries: Option<OpenFoodFactsText>,
    ingredients_text: Option<OpenFoodFactsText>,
    image_url: Option<OpenFoodFactsText>,
    nutriments: Option<OpenFoodFactsNutrimentsEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OpenFoodFactsText {
    Text(String),
    Other(Value),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OpenFoodFactsNutrimentsEntry {
    Table(OpenFoodFactsNutriments),
    Other(IgnoredAny),
}

#[derive(Debug, Deserialize)]
struct OpenFoodFactsNutriments {
    #[serde(rename = "energy-kcal_100g")]
    energy_kcal: Option<OpenFoodFactsNutrient>,
    #[serde(rename = "fat_100g")]
    fat: Option<OpenFoodFactsNutrient>,
    #[serde(rename = "carbohydrates_100g")]
    carbohydrates: Option<OpenFoodFactsNutrient>,
    #[serde(rename = "proteins_100g")]
    proteins: Option<OpenFoodFactsNutrient>,
}

/// Nutrients come as numbers or as strings for the same key.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OpenFoodFactsNutrient {
    Number(Number),
    Text(String),
    Other(Value),
}

fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

impl OpenFoodFactsText {
    fn into_text(self) -> String {
        match self {
            OpenFoodFactsText::Text(text) => text,
            OpenFoodFactsText::Other(value) => value.to_string(),
        }
    }

    fn into_url(self) -> Option<String> {
        match self {
            OpenFoodFactsText::Text(url) => Some(url),
            OpenFoodFactsText::Other(_) => None,
        }
    }
}

fn nutrient(value: Option<OpenFoodFactsNutrient>) -> NutrientValue {
    match value {
        None => NutrientValue::NotAvailable,
        Some(OpenFoodFactsNutrient::Number(n)) => NutrientValue::Number(n),
        Some(OpenFoodFactsNutrient::Text(s)) => NutrientValue::Text(s),
        Some(OpenFoodFactsNutrient::Other(other)) => NutrientValue::Text(other.to_string()),
    }
}

impl From<OpenFoodFactsNutrimentsEntry> for CatalogNutriments {
    fn from(entry: OpenFoodFactsNutrimentsEntry) -> Self {
        match entry {
            OpenFoodFactsNutrimentsEntry::Table(table) => CatalogNutriments {
                energy_kcal: nutrient(table.energy_kcal),
                fat: nutrient(table.fat),
                carbohydrates: nutrient(table.carbohydrates),
                proteins: nutrient(table.proteins),
            },
            OpenFoodFactsNutrimentsEntry::Other(_) => CatalogNutriments::default(),
        }
    }
}

impl From<OpenFoodFactsEntry> for ProductField {
    fn from(entry: OpenFoodFactsEntry) -> Self {
        match entry {
            OpenFoodFactsEntry::Product(product) => ProductField::Record(CatalogRecord {
                product_name: product.product_name.map(OpenFoodFactsText::into_text),
                brands: product.brands.map(OpenFoodFactsText::into_text),
                categories: product.categories.map(OpenFoodFactsText::into_text),
                countries: product.countries.map(OpenFoodFactsText::into_text),
                ingredients_text: product.ingredients_text.map(OpenFoodFactsText::into_text),
                image_url: product.image_url.and_then(OpenFoodFactsText::into_url),
                nutriments: product.nutriments.map(Into::into).unwrap_or_default(),
            }),
            OpenFoodFactsEntry::Other(_) => ProductField::Malformed,
        }
    }
}

impl From<OpenFoodFactsResponse> for CatalogResponse {
    fn from(response: OpenFoodFactsResponse) -> Self {
        let status_ok = match response.status {
            Some(OpenFoodFactsStatus::Number(status)) => status == 1.0,
            Some(OpenFoodFactsStatus::Flag(status)) => status,
            Some(OpenFoodFactsStatus::Other(_)) | None => false,
        };
        let products = match response.products {
            Some(OpenFoodFactsProducts::List(entries)) => {
                entries.into_iter().map(ProductField::from).collect()
            }
            Some(OpenFoodFactsProducts::Other(_)) | None => Vec::new(),
        };

        CatalogResponse {
            status_ok,
            product: response.product.map(ProductField::from),
            products,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> CatalogResponse {
        serde_json::from_str::<OpenFoodFactsResponse>(body)
            .unwrap()
            .into()
    }

    fn record(field: Option<ProductField>) -> CatalogRecord {
        match field {
            Some(ProductField::Record(record)) => record,
            other => panic!("expected a product record, got {:?}", other),
        }
    }

    #[test]
    fn should_accept_numeric_and_boolean_ok_status() {
        assert!(parse(r#"{"status": 1}"#).status_ok);
        assert!(parse(r#"{"status": 1.0}"#).status_ok);
        assert!(parse(r#"{"status": true}"#).status_ok);
    }

    #[test]
    fn should_reject_other_status_values() {
        assert!(!parse(r#"{"status": 0}"#).status_ok);
        assert!(!parse(r#"{"status": "1"}"#).status_ok);
        assert!(!parse(r#"{"status": false}"#).status_ok);
        assert!(!parse(r#"{}"#).status_ok);
    }

    #[test]
    fn should_tell_null_product_apart_from_missing_product() {
        let null = parse(r#"{"status": 1, "product": null}"#);
        let missing = parse(r#"{"status": 1}"#);

        assert_eq!(null.product, Some(ProductField::Malformed));
        assert_eq!(missing.product, None);
    }

    #[test]
    fn should_mark_non_object_product_as_malformed() {
        let response = parse(r#"{"status": 1, "product": "gone", "products": [42, {}]}"#);

        assert_eq!(response.product, Some(ProductField::Malformed));
        assert_eq!(response.products[0], ProductField::Malformed);
        assert!(matches!(response.products[1], ProductField::Record(_)));
    }

    #[test]
    fn should_ignore_products_when_it_is_not_a_list() {
        let response = parse(r#"{"count": 0, "products": "none"}"#);

        assert!(response.products.is_empty());
    }

    #[test]
    fn should_render_non_string_text_fields_as_text() {
        let product =
            record(parse(r#"{"status": 1, "product": {"product_name": 7, "brands": null}}"#).product);

        assert_eq!(product.product_name.as_deref(), Some("7"));
        assert_eq!(product.brands, None);
    }

    #[test]
    fn should_drop_image_url_that_is_not_a_string() {
        let product = record(parse(r#"{"status": 1, "product": {"image_url": 12}}"#).product);

        assert_eq!(product.image_url, None);
    }

    #[test]
    fn should_keep_mixed_nutrients_as_published() {
        let body = r#"{
            "status": 1,
            "product": {
                "product_name": "Coca-Cola",
                "nutriments": {
                    "energy-kcal_100g": 42,
                    "fat_100g": "0",
                    "carbohydrates_100g": 10.6,
                    "proteins_100g": null
                }
            }
        }"#;

        let product = record(parse(body).product);

        assert_eq!(product.nutriments.energy_kcal, NutrientValue::Number(42.into()));
        assert_eq!(product.nutriments.fat, NutrientValue::Text("0".to_string()));
        assert_eq!(product.nutriments.carbohydrates.as_f64(), Some(10.6));
        assert_eq!(product.nutriments.proteins, NutrientValue::NotAvailable);
    }

    #[test]
    fn should_treat_non_object_nutriments_as_not_available() {
        let product = record(parse(r#"{"status": 1, "product": {"nutriments": []}}"#).product);

        assert_eq!(product.nutriments, CatalogNutriments::default());
    }
}
