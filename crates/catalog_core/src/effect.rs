use crate::{ProductDraft, ProductId, SelectedFile, UploadTarget};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchCategories,
    FetchProduct {
        product_id: ProductId,
    },
    CreateProduct {
        draft: ProductDraft,
    },
    UpdateProduct {
        product_id: ProductId,
        draft: ProductDraft,
    },
    UploadImages {
        target: UploadTarget,
        files: Vec<SelectedFile>,
    },
    /// Blocking warning; no request accompanies it.
    ShowAlert {
        text: String,
    },
    NavigateToEdit {
        product_id: ProductId,
    },
}
