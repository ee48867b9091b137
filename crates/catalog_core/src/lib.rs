//! Catalog core: pure product-form state machine and view-model helpers.
mod effect;
mod msg;
mod state;
pub mod text;
mod types;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use state::{AppState, FormMode, SubmitStep};
pub use types::{
    CategoryId, CategoryOption, ImageId, LoadedProduct, ProductDraft, ProductId, ProductImage,
    RequestFailure, SelectedFile, UploadTarget, PRODUCT_IMAGES_FIELD, PRODUCT_REF,
};
pub use update::update;
pub use view_model::{AppViewModel, CategoryOptionView, SelectedFileView};
