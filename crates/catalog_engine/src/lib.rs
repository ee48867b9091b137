//! Catalog engine: content-API client and request execution.
mod backend;
mod endpoints;
mod engine;
mod error;
mod settings;
mod types;
mod upload;
mod wire;

pub use backend::{Backend, ReqwestBackend};
pub use endpoints::Endpoints;
pub use engine::EngineHandle;
pub use error::{ApiError, FailureKind};
pub use settings::ApiSettings;
pub use types::{
    Category, CategoryId, EngineCommand, EngineEvent, Image, ImageId, Product, ProductId,
    ProductPayload, UploadTarget,
};
pub use upload::{content_type_for, UploadFile};
