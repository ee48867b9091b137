use crate::{
    CategoryId, CategoryOption, ImageId, LoadedProduct, ProductId, ProductImage, RequestFailure,
    SelectedFile,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// The form was opened; triggers the initial loads.
    Mounted,
    /// Category collection arrived (or failed).
    CategoriesLoaded(Result<Vec<CategoryOption>, RequestFailure>),
    /// Edit view: product lookup arrived (or failed).
    ProductLoaded(Result<LoadedProduct, RequestFailure>),
    TitleChanged(String),
    DescriptionChanged(String),
    PriceChanged(String),
    /// `None` is the placeholder option.
    CategorySelected(Option<CategoryId>),
    /// Replaces the current file selection.
    FilesSelected(Vec<SelectedFile>),
    /// User removed an already-attached image in the edit view.
    ExistingImageRemoved(ImageId),
    SubmitClicked,
    /// Product write finished in the create flow.
    ProductCreated(Result<ProductId, RequestFailure>),
    /// Product write finished in the edit flow.
    ProductUpdated(Result<(), RequestFailure>),
    /// Multipart upload finished.
    ImagesUploaded(Result<Vec<ProductImage>, RequestFailure>),
    /// Fallback for placeholder wiring.
    NoOp,
}
