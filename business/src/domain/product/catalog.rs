use super::errors::CatalogError;
use super::model::{NOT_AVAILABLE, NutrientValue, Nutrition, ProductInfo, UNKNOWN};

/// Catalog endpoints, tried in `FALLBACK_ORDER`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogEndpoint {
    /// `/api/v2/product/{barcode}`
    ProductV2,
    /// `/api/v0/product/{barcode}.json`
    ProductV0,
    /// `/cgi/search.pl?search_terms={barcode}&search_simple=1&action=process&json=1`
    Search,
    /// `/api/v0/product/{barcode}.json` on the India database.
    RegionalIndia,
}

impl CatalogEndpoint {
    pub const FALLBACK_ORDER: [CatalogEndpoint; 4] = [
        CatalogEndpoint::ProductV2,
        CatalogEndpoint::ProductV0,
        CatalogEndpoint::Search,
        CatalogEndpoint::RegionalIndia,
    ];
}

impl std::fmt::Display for CatalogEndpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogEndpoint::ProductV2 => write!(f, "product_v2"),
            CatalogEndpoint::ProductV0 => write!(f, "product_v0"),
            CatalogEndpoint::Search => write!(f, "search"),
            CatalogEndpoint::RegionalIndia => write!(f, "regional_india"),
        }
    }
}

/// Nutriments read from a catalog record, per 100g.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogNutriments {
    pub energy_kcal: NutrientValue,
    pub fat: NutrientValue,
    pub carbohydrates: NutrientValue,
    pub proteins: NutrientValue,
}

/// A product record as the catalog publishes it. `None` means absent or null.
///
/// Non-string scalars in text fields arrive already rendered as text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogRecord {
    pub product_name: Option<String>,
    pub brands: Option<String>,
    pub categories: Option<String>,
    pub countries: Option<String>,
    pub ingredients_text: Option<String>,
    pub image_url: Option<String>,
    pub nutriments: CatalogNutriments,
}

/// A `product` entry, which the catalog does not always send as an object.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductField {
    Record(CatalogRecord),
    Malformed,
}

/// One parsed catalog response body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogResponse {
    /// The body carried a status of `1` (or `true`).
    pub status_ok: bool,
    /// `None` when the body has no `product` key at all.
    pub product: Option<ProductField>,
    pub products: Vec<ProductField>,
}

/// A response body recognised as carrying a product record.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogPayload {
    /// `{"status": 1, "product": {...}}` from the v2 API.
    ProductV2(CatalogRecord),
    /// `{"status": 1, "product": {...}}` from a v0 API.
    ProductV0(CatalogRecord),
    /// `{"products": [{...}, ...]}`; holds the first product.
    Search(CatalogRecord),
}

impl CatalogPayload {
    /// Recognises a body by field presence.
    ///
    /// A `product` field with an ok status wins over `products`. A `product`
    /// field that is not an object makes the whole body unusable.
    pub fn recognize(endpoint: CatalogEndpoint, response: CatalogResponse) -> Option<Self> {
        if let (Some(product), true) = (response.product, response.status_ok) {
            let ProductField::Record(record) = product else {
                return None;
            };
            return Some(match endpoint {
                CatalogEndpoint::ProductV2 => CatalogPayload::ProductV2(record),
                _ => CatalogPayload::ProductV0(record),
            });
        }

        match response.products.into_iter().next()? {
            ProductField::Record(record) => Some(CatalogPayload::Search(record)),
            ProductField::Malformed => None,
        }
    }

    pub fn record(&self) -> &CatalogRecord {
        match self {
            CatalogPayload::ProductV2(record)
            | CatalogPayload::ProductV0(record)
            | CatalogPayload::Search(record) => record,
        }
    }

    /// Maps the record onto `ProductInfo` using the shared field table.
    pub fn into_product_info(self, barcode: &str) -> ProductInfo {
        let record = match self {
            CatalogPayload::ProductV2(record)
            | CatalogPayload::ProductV0(record)
            | CatalogPayload::Search(record) => record,
        };
        let or = |field: Option<String>, default: &str| field.unwrap_or_else(|| default.to_string());

        ProductInfo {
            barcode: barcode.to_string(),
            found: true,
            name: or(record.product_name, UNKNOWN),
            brand: or(record.brands, UNKNOWN),
            category: or(record.categories, NOT_AVAILABLE),
            origin: or(record.countries, NOT_AVAILABLE),
            ingredients: or(record.ingredients_text, NOT_AVAILABLE),
            image_url: record.image_url,
            nutrition: Nutrition {
                energy: record.nutriments.energy_kcal,
                fat: record.nutriments.fat,
                carbs: record.nutriments.carbohydrates,
                protein: record.nutriments.proteins,
            },
        }
    }
}

/// Outcome of querying a single endpoint.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupAttempt {
    Matched(CatalogPayload),
    NoMatch,
    Failed(CatalogError),
}

impl LookupAttempt {
    pub fn from_response(
        endpoint: CatalogEndpoint,
        response: Result<CatalogResponse, CatalogError>,
    ) -> Self {
        match response {
            Ok(body) => match CatalogPayload::recognize(endpoint, body) {
                Some(payload) => LookupAttempt::Matched(payload),
                None => LookupAttempt::NoMatch,
            },
            Err(err) => LookupAttempt::Failed(err),
        }
    }
}
