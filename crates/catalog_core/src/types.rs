use std::path::PathBuf;

pub type ProductId = u64;
pub type CategoryId = u64;
pub type ImageId = u64;

/// Upload `ref` that binds media to a product record.
pub const PRODUCT_REF: &str = "api::product.product";
/// Media field on the product record that uploads attach to.
pub const PRODUCT_IMAGES_FIELD: &str = "images";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryOption {
    pub id: CategoryId,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductImage {
    pub id: ImageId,
    /// Backend-relative (`/uploads/x.png`) or absolute URL.
    pub url: String,
    pub name: String,
}

/// A local file chosen for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub path: PathBuf,
    pub byte_len: u64,
}

/// Scalar fields sent on create and update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDraft {
    pub title: String,
    pub description: String,
    pub category: CategoryId,
    pub price: String,
    /// Full remaining image set; only present after an image was removed.
    pub images: Option<Vec<ImageId>>,
}

/// Product as returned by the edit-view lookup.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoadedProduct {
    pub id: ProductId,
    pub title: String,
    pub description: String,
    pub price: String,
    pub category: Option<CategoryId>,
    pub images: Vec<ProductImage>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadTarget {
    pub ref_uid: String,
    pub ref_id: ProductId,
    pub field: String,
}

impl UploadTarget {
    pub fn product_images(product_id: ProductId) -> Self {
        Self {
            ref_uid: PRODUCT_REF.to_string(),
            ref_id: product_id,
            field: PRODUCT_IMAGES_FIELD.to_string(),
        }
    }
}

/// Why a request did not produce the expected result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestFailure {
    /// The request never got a usable HTTP answer.
    Transport(String),
    /// The backend answered, but with an error status or an unusable body.
    Rejected {
        backend_message: Option<String>,
        detail: String,
    },
}

impl RequestFailure {
    pub fn rejected(backend_message: Option<String>, detail: impl Into<String>) -> Self {
        Self::Rejected {
            backend_message,
            detail: detail.into(),
        }
    }

    /// User-facing text: the backend's own message when it sent one.
    pub fn display_text(&self, fallback: &str) -> String {
        match self {
            Self::Transport(_) => crate::text::GENERIC_FAILURE.to_string(),
            Self::Rejected {
                backend_message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            Self::Rejected { .. } => fallback.to_string(),
        }
    }
}
