//! User-facing strings.

pub const CATEGORY_PLACEHOLDER: &str = "--Please choose a category--";

pub const NO_FILES_ALERT: &str = "Please select at least one file.";
pub const NO_CATEGORY_ALERT: &str = "Please choose a category.";
pub const UNKNOWN_CATEGORY_ALERT: &str = "The selected category is not available.";

pub const CATEGORIES_LOAD_FAILED: &str = "Could not load categories";
pub const PRODUCT_LOAD_FAILED: &str = "Could not load product details";

pub const CREATE_FAILED: &str = "Failed to create product";
pub const UPDATE_FAILED: &str = "Failed to update product";
pub const UPLOAD_FAILED: &str = "Failed to upload images";
pub const GENERIC_FAILURE: &str = "There was an error processing your request.";

pub const CREATE_SUCCEEDED: &str = "Product and images uploaded successfully!";
pub const UPDATE_SUCCEEDED: &str = "Product updated successfully!";

pub const SUBMIT_CREATE: &str = "Add Product";
pub const SUBMIT_CREATE_BUSY: &str = "Uploading...";
pub const SUBMIT_EDIT: &str = "Save Changes";
pub const SUBMIT_EDIT_BUSY: &str = "Saving...";
