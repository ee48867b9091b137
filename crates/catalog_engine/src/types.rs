use std::path::PathBuf;

use crate::ApiError;

pub type ProductId = u64;
pub type CategoryId = u64;
pub type ImageId = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryId,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub id: ImageId,
    pub url: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub description: String,
    pub price: String,
    pub categories: Vec<Category>,
    pub images: Vec<Image>,
}

/// Body of a product create/update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductPayload {
    pub title: String,
    pub description: String,
    pub category: CategoryId,
    pub price: String,
    /// Replaces the media relation when present.
    pub images: Option<Vec<ImageId>>,
}

/// Record an upload is attached to (`ref`, `refId`, `field`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadTarget {
    pub ref_uid: String,
    pub ref_id: ProductId,
    pub field: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineCommand {
    FetchCategories,
    FetchProduct {
        product_id: ProductId,
    },
    CreateProduct {
        payload: ProductPayload,
    },
    UpdateProduct {
        product_id: ProductId,
        payload: ProductPayload,
    },
    UploadImages {
        files: Vec<PathBuf>,
        target: UploadTarget,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    CategoriesFetched(Result<Vec<Category>, ApiError>),
    ProductFetched {
        product_id: ProductId,
        result: Result<Product, ApiError>,
    },
    ProductCreated(Result<ProductId, ApiError>),
    ProductUpdated {
        product_id: ProductId,
        result: Result<(), ApiError>,
    },
    ImagesUploaded {
        target: UploadTarget,
        result: Result<Vec<Image>, ApiError>,
    },
}
