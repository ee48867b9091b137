use crate::view_model::{AppViewModel, CategoryOptionView, SelectedFileView};
use crate::{
    text, CategoryId, CategoryOption, ImageId, LoadedProduct, ProductDraft, ProductId,
    ProductImage, SelectedFile,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Create,
    Edit {
        product_id: ProductId,
    },
}

/// The request currently in flight for a submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitStep {
    CreatingProduct,
    UpdatingProduct,
    UploadingImages { product_id: ProductId },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct FormFields {
    pub(crate) title: String,
    pub(crate) description: String,
    pub(crate) price: String,
    pub(crate) category: Option<CategoryId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct PendingLoads {
    pub(crate) categories: bool,
    pub(crate) product: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    mode: FormMode,
    fields: FormFields,
    categories: Vec<CategoryOption>,
    existing_images: Vec<ProductImage>,
    removed_images: Vec<ImageId>,
    selected_files: Vec<SelectedFile>,
    pending: PendingLoads,
    step: Option<SubmitStep>,
    error: Option<String>,
    message: Option<String>,
    navigate_to: Option<ProductId>,
}

impl AppState {
    /// Create-form state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Edit-form state for an existing product.
    pub fn edit(product_id: ProductId) -> Self {
        Self {
            mode: FormMode::Edit { product_id },
            ..Self::default()
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn step(&self) -> Option<SubmitStep> {
        self.step
    }

    pub fn is_busy(&self) -> bool {
        self.step.is_some() || self.pending.categories || self.pending.product
    }

    pub fn view(&self) -> AppViewModel {
        let mut category_options = Vec::with_capacity(self.categories.len() + 1);
        category_options.push(CategoryOptionView {
            value: None,
            label: text::CATEGORY_PLACEHOLDER.to_string(),
            selected: self.fields.category.is_none(),
        });
        category_options.extend(self.categories.iter().map(|cat| CategoryOptionView {
            value: Some(cat.id),
            label: cat.title.clone(),
            selected: self.fields.category == Some(cat.id),
        }));

        let submitting = self.step.is_some();
        let submit_label = match (self.mode, submitting) {
            (FormMode::Create, false) => text::SUBMIT_CREATE,
            (FormMode::Create, true) => text::SUBMIT_CREATE_BUSY,
            (FormMode::Edit { .. }, false) => text::SUBMIT_EDIT,
            (FormMode::Edit { .. }, true) => text::SUBMIT_EDIT_BUSY,
        };

        AppViewModel {
            mode: self.mode,
            title: self.fields.title.clone(),
            description: self.fields.description.clone(),
            price: self.fields.price.clone(),
            selected_category: self.fields.category,
            category_options,
            existing_images: self.existing_images.clone(),
            selected_files: self
                .selected_files
                .iter()
                .map(|file| SelectedFileView {
                    name: file.name.clone(),
                    byte_len: file.byte_len,
                })
                .collect(),
            loading: self.pending.categories || self.pending.product,
            step: self.step,
            submit_label: submit_label.to_string(),
            submit_enabled: !submitting,
            error: self.error.clone(),
            message: self.message.clone(),
            navigate_to: self.navigate_to,
        }
    }

    pub(crate) fn begin_loads(&mut self) {
        self.pending.categories = true;
        self.pending.product = matches!(self.mode, FormMode::Edit { .. });
    }

    pub(crate) fn pending(&self) -> PendingLoads {
        self.pending
    }

    pub(crate) fn apply_categories(&mut self, categories: Vec<CategoryOption>) {
        self.pending.categories = false;
        self.categories = categories;
    }

    pub(crate) fn fail_categories(&mut self) {
        self.pending.categories = false;
        self.categories.clear();
        self.error = Some(text::CATEGORIES_LOAD_FAILED.to_string());
    }

    pub(crate) fn apply_product(&mut self, product: LoadedProduct) {
        self.pending.product = false;
        self.fields = FormFields {
            title: product.title,
            description: product.description,
            price: product.price,
            category: product.category,
        };
        self.existing_images = product.images;
        self.removed_images.clear();
    }

    pub(crate) fn fail_product(&mut self) {
        self.pending.product = false;
        self.error = Some(text::PRODUCT_LOAD_FAILED.to_string());
    }

    pub(crate) fn fields_mut(&mut self) -> &mut FormFields {
        &mut self.fields
    }

    pub(crate) fn select_files(&mut self, files: Vec<SelectedFile>) {
        self.selected_files = files;
    }

    pub(crate) fn selected_files(&self) -> &[SelectedFile] {
        &self.selected_files
    }

    pub(crate) fn remove_existing_image(&mut self, image_id: ImageId) -> bool {
        let before = self.existing_images.len();
        self.existing_images.retain(|image| image.id != image_id);
        if self.existing_images.len() == before {
            return false;
        }
        self.removed_images.push(image_id);
        true
    }

    /// Checks the submit preconditions that need no request.
    pub(crate) fn validate_submit(&self) -> Result<CategoryId, &'static str> {
        if self.mode == FormMode::Create && self.selected_files.is_empty() {
            return Err(text::NO_FILES_ALERT);
        }
        let category = self.fields.category.ok_or(text::NO_CATEGORY_ALERT)?;
        if !self.categories.iter().any(|cat| cat.id == category) {
            return Err(text::UNKNOWN_CATEGORY_ALERT);
        }
        Ok(category)
    }

    pub(crate) fn draft(&self, category: CategoryId) -> ProductDraft {
        let images = if self.removed_images.is_empty() {
            None
        } else {
            Some(self.existing_images.iter().map(|image| image.id).collect())
        };
        ProductDraft {
            title: self.fields.title.clone(),
            description: self.fields.description.clone(),
            category,
            price: self.fields.price.clone(),
            images,
        }
    }

    pub(crate) fn begin_step(&mut self, step: SubmitStep) {
        if self.step.is_none() {
            self.message = None;
            self.navigate_to = None;
        }
        self.step = Some(step);
    }

    pub(crate) fn fail_step(&mut self, text: String) {
        self.step = None;
        self.error = Some(text);
        self.message = None;
    }

    pub(crate) fn finish_update(&mut self) {
        self.removed_images.clear();
    }

    pub(crate) fn succeed(&mut self, uploaded: Vec<ProductImage>) {
        self.step = None;
        self.error = None;
        match self.mode {
            FormMode::Create => {
                self.message = Some(text::CREATE_SUCCEEDED.to_string());
            }
            FormMode::Edit { .. } => {
                self.existing_images.extend(uploaded);
                self.selected_files.clear();
                self.message = Some(text::UPDATE_SUCCEEDED.to_string());
            }
        }
    }

    pub(crate) fn set_navigation(&mut self, product_id: ProductId) {
        self.navigate_to = Some(product_id);
    }
}
