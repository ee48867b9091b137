//! JSON shapes of the content API and their mapping to engine types.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::{ApiError, Category, FailureKind, Image, Product, ProductId, ProductPayload};

#[derive(Debug, Deserialize)]
struct DataEnvelope<T> {
    data: T,
}

#[derive(Debug, Deserialize)]
struct WireCategory {
    id: u64,
    #[serde(default)]
    title: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WireImage {
    id: u64,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WireProduct {
    id: u64,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default, deserialize_with = "price_text")]
    price: Option<String>,
    #[serde(default)]
    categories: Option<Vec<WireCategory>>,
    #[serde(default)]
    images: Option<Vec<WireImage>>,
}

#[derive(Debug, Deserialize)]
struct CreatedRecord {
    #[serde(default)]
    id: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
struct ErrorEnvelope {
    #[serde(default)]
    error: Option<ErrorBody>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Serialize)]
struct WriteEnvelope<'a> {
    data: WriteProduct<'a>,
}

#[derive(Debug, Serialize)]
struct WriteProduct<'a> {
    title: &'a str,
    description: &'a str,
    categories: [u64; 1],
    price: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    images: Option<&'a [u64]>,
}

/// Prices arrive as text or as a JSON number depending on the content type.
fn price_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::String(text)) => Some(text),
        Some(Value::Number(number)) => Some(number.to_string()),
        Some(other) => Some(other.to_string()),
    })
}

fn decode<'a, T: Deserialize<'a>>(body: &'a [u8]) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|err| ApiError::new(FailureKind::Decode, err.to_string()))
}

impl From<WireCategory> for Category {
    fn from(wire: WireCategory) -> Self {
        Self {
            id: wire.id,
            title: wire.title.unwrap_or_default(),
        }
    }
}

impl From<WireImage> for Image {
    fn from(wire: WireImage) -> Self {
        Self {
            id: wire.id,
            url: wire.url.unwrap_or_default(),
            name: wire.name.unwrap_or_default(),
        }
    }
}

impl From<WireProduct> for Product {
    fn from(wire: WireProduct) -> Self {
        Self {
            id: wire.id,
            title: wire.title.unwrap_or_default(),
            description: wire.description.unwrap_or_default(),
            price: wire.price.unwrap_or_default(),
            categories: wire
                .categories
                .unwrap_or_default()
                .into_iter()
                .map(Category::from)
                .collect(),
            images: wire
                .images
                .unwrap_or_default()
                .into_iter()
                .map(Image::from)
                .collect(),
        }
    }
}

pub(crate) fn parse_categories(body: &[u8]) -> Result<Vec<Category>, ApiError> {
    let envelope: DataEnvelope<Vec<WireCategory>> = decode(body)?;
    Ok(envelope.data.into_iter().map(Category::from).collect())
}

pub(crate) fn parse_product_lookup(
    body: &[u8],
    product_id: ProductId,
) -> Result<Product, ApiError> {
    let envelope: DataEnvelope<Vec<WireProduct>> = decode(body)?;
    // Only the requested record; a backend that ignores the filter returns others.
    envelope
        .data
        .into_iter()
        .find(|product| product.id == product_id)
        .map(Product::from)
        .ok_or_else(|| ApiError::new(FailureKind::NotFound, format!("no product {product_id}")))
}

pub(crate) fn parse_created_id(body: &[u8]) -> Result<ProductId, ApiError> {
    let envelope: DataEnvelope<Option<CreatedRecord>> = decode(body)?;
    envelope
        .data
        .and_then(|record| record.id)
        .ok_or_else(|| ApiError::new(FailureKind::MissingField("data.id"), "create response"))
}

/// Upload answers with an array of stored files; other 2xx bodies carry no file info.
pub(crate) fn parse_uploaded(body: &[u8]) -> Vec<Image> {
    serde_json::from_slice::<Vec<WireImage>>(body)
        .map(|files| files.into_iter().map(Image::from).collect())
        .unwrap_or_default()
}

pub(crate) fn backend_message(body: &[u8]) -> Option<String> {
    let envelope: ErrorEnvelope = serde_json::from_slice(body).ok()?;
    envelope
        .error
        .and_then(|error| error.message)
        .or(envelope.message)
        .filter(|message| !message.trim().is_empty())
}

pub(crate) fn product_body(payload: &ProductPayload) -> Result<Vec<u8>, ApiError> {
    let envelope = WriteEnvelope {
        data: WriteProduct {
            title: &payload.title,
            description: &payload.description,
            categories: [payload.category],
            price: &payload.price,
            images: payload.images.as_deref(),
        },
    };
    serde_json::to_vec(&envelope)
        .map_err(|err| ApiError::new(FailureKind::InvalidRequest, err.to_string()))
}
