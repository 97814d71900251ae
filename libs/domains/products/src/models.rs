use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

use crate::coerce;
use crate::error::ProductError;

/// Product variant, embedded in its product.
///
/// Every field is optional; absent fields are omitted from both the stored document and
/// the JSON output. Keys other than these four are dropped on input. Scalars are cast to the
/// field type on input, so `"stockCount": "3"` stores `3`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Variant {
    #[serde(
        default,
        deserialize_with = "coerce::option_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,
    /// Stock keeping unit
    #[serde(
        rename = "SKU",
        default,
        deserialize_with = "coerce::option_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub sku: Option<String>,
    #[serde(
        default,
        deserialize_with = "coerce::option_f64",
        skip_serializing_if = "Option::is_none"
    )]
    pub additional_cost: Option<f64>,
    #[serde(
        default,
        deserialize_with = "coerce::option_i64",
        skip_serializing_if = "Option::is_none"
    )]
    pub stock_count: Option<i64>,
}

/// Product entity as stored in the `products` collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub variants: Vec<Variant>,
}

/// Product as returned by the HTTP API.
///
/// Identical to the stored document except that `_id` is the 24-character hex string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductResponse {
    #[serde(rename = "_id")]
    #[schema(example = "65f1c0ffee0000000000abcd")]
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub variants: Vec<Variant>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.to_hex(),
            name: product.name,
            description: product.description,
            price: product.price,
            variants: product.variants,
        }
    }
}

/// Request body for creating a product.
///
/// Fields are optional at the decoding stage so that a missing field surfaces as
/// `MissingFields` rather than a JSON decoding error. Scalars are cast like [`Variant`]'s.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct CreateProduct {
    #[serde(default, deserialize_with = "coerce::option_string")]
    #[validate(required, length(min = 1))]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "coerce::option_string")]
    #[validate(required, length(min = 1))]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "coerce::option_f64")]
    #[validate(required, custom(function = "validate_non_zero"))]
    pub price: Option<f64>,
    #[validate(required, length(min = 1))]
    pub variants: Option<Vec<Variant>>,
}

fn validate_non_zero(price: f64) -> Result<(), ValidationError> {
    if price == 0.0 {
        return Err(ValidationError::new("non_zero"));
    }
    Ok(())
}

/// A create request that passed the presence check.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub variants: Vec<Variant>,
}

impl TryFrom<CreateProduct> for NewProduct {
    type Error = ProductError;

    fn try_from(input: CreateProduct) -> Result<Self, Self::Error> {
        if let Err(errors) = input.validate() {
            tracing::debug!(
                fields = ?errors.field_errors().keys().collect::<Vec<_>>(),
                "Create request failed presence check"
            );
            return Err(ProductError::MissingFields);
        }

        let CreateProduct {
            name: Some(name),
            description: Some(description),
            price: Some(price),
            variants: Some(variants),
        } = input
        else {
            return Err(ProductError::MissingFields);
        };

        Ok(Self {
            name,
            description,
            price,
            variants,
        })
    }
}

impl Product {
    /// Build a product with a freshly generated id
    pub fn new(input: NewProduct) -> Self {
        Self {
            id: ObjectId::new(),
            name: input.name,
            description: input.description,
            price: input.price,
            variants: input.variants,
        }
    }
}

/// Request body for updating a product.
///
/// Only present fields are written. `variants`, when present, replaces the whole list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UpdateProduct {
    #[serde(
        default,
        deserialize_with = "coerce::option_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,
    #[serde(
        default,
        deserialize_with = "coerce::option_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,
    #[serde(
        default,
        deserialize_with = "coerce::option_f64",
        skip_serializing_if = "Option::is_none"
    )]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variants: Option<Vec<Variant>>,
}

impl UpdateProduct {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.variants.is_none()
    }
}

/// Search query parameters
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct SearchQuery {
    /// Text matched case-insensitively against name, description and variant names
    pub q: Option<String>,
}
