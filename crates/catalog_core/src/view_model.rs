use crate::{CategoryId, FormMode, ProductId, ProductImage, SubmitStep};

/// One entry of the category selector; the placeholder has no value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryOptionView {
    pub value: Option<CategoryId>,
    pub label: String,
    pub selected: bool,
}

/// Preview entry for a file picked but not yet uploaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFileView {
    pub name: String,
    pub byte_len: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub mode: FormMode,
    pub title: String,
    pub description: String,
    pub price: String,
    pub selected_category: Option<CategoryId>,
    pub category_options: Vec<CategoryOptionView>,
    pub existing_images: Vec<ProductImage>,
    pub selected_files: Vec<SelectedFileView>,
    pub loading: bool,
    pub step: Option<SubmitStep>,
    pub submit_label: String,
    pub submit_enabled: bool,
    pub error: Option<String>,
    pub message: Option<String>,
    pub navigate_to: Option<ProductId>,
}
