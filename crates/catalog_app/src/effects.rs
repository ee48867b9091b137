use std::time::Duration;

use catalog_core::{
    CategoryOption, Effect, LoadedProduct, Msg, ProductDraft, ProductId, ProductImage,
    RequestFailure, UploadTarget,
};
use catalog_engine::{
    ApiError, Category, EngineCommand, EngineEvent, EngineHandle, Image, Product, ProductPayload,
};
use catalog_logging::{catalog_info, catalog_warn};

/// Effects the terminal front end handles itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEffect {
    Alert(String),
    Navigate(ProductId),
}

/// Turns reducer effects into engine commands and engine events back into messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle) -> Self {
        Self { engine }
    }

    pub fn enqueue(&self, effects: Vec<Effect>) -> Vec<UiEffect> {
        let mut ui = Vec::new();
        for effect in effects {
            match effect {
                Effect::FetchCategories => self.engine.submit(EngineCommand::FetchCategories),
                Effect::FetchProduct { product_id } => {
                    self.engine.submit(EngineCommand::FetchProduct { product_id })
                }
                Effect::CreateProduct { draft } => {
                    catalog_info!("Creating product title_len={}", draft.title.len());
                    self.engine.submit(EngineCommand::CreateProduct {
                        payload: map_draft(draft),
                    });
                }
                Effect::UpdateProduct { product_id, draft } => {
                    catalog_info!("Updating product {}", product_id);
                    self.engine.submit(EngineCommand::UpdateProduct {
                        product_id,
                        payload: map_draft(draft),
                    });
                }
                Effect::UploadImages { target, files } => {
                    catalog_info!("Uploading {} file(s) to product {}", files.len(), target.ref_id);
                    self.engine.submit(EngineCommand::UploadImages {
                        files: files.into_iter().map(|file| file.path).collect(),
                        target: map_target(target),
                    });
                }
                Effect::ShowAlert { text } => ui.push(UiEffect::Alert(text)),
                Effect::NavigateToEdit { product_id } => ui.push(UiEffect::Navigate(product_id)),
            }
        }
        ui
    }

    /// Waits for the next engine result and maps it to a reducer message.
    pub fn next_msg(&self, timeout: Duration) -> Option<Msg> {
        self.engine.recv_timeout(timeout).map(map_event)
    }
}

fn map_draft(draft: ProductDraft) -> ProductPayload {
    ProductPayload {
        title: draft.title,
        description: draft.description,
        category: draft.category,
        price: draft.price,
        images: draft.images,
    }
}

fn map_target(target: UploadTarget) -> catalog_engine::UploadTarget {
    catalog_engine::UploadTarget {
        ref_uid: target.ref_uid,
        ref_id: target.ref_id,
        field: target.field,
    }
}

pub fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::CategoriesFetched(result) => Msg::CategoriesLoaded(
            result
                .map(|categories| categories.into_iter().map(map_category).collect())
                .map_err(|err| map_failure("fetch categories", err)),
        ),
        EngineEvent::ProductFetched { product_id, result } => Msg::ProductLoaded(
            result
                .map(map_product)
                .map_err(|err| map_failure(&format!("fetch product {product_id}"), err)),
        ),
        EngineEvent::ProductCreated(result) => {
            Msg::ProductCreated(result.map_err(|err| map_failure("create product", err)))
        }
        EngineEvent::ProductUpdated { product_id, result } => Msg::ProductUpdated(
            result.map_err(|err| map_failure(&format!("update product {product_id}"), err)),
        ),
        EngineEvent::ImagesUploaded { target, result } => {
            if let Err(err) = &result {
                catalog_warn!(
                    "Product {} was saved but its images were not attached: {}",
                    target.ref_id,
                    err
                );
            }
            Msg::ImagesUploaded(
                result
                    .map(|images| images.into_iter().map(map_image).collect())
                    .map_err(|err| map_failure("upload images", err)),
            )
        }
    }
}

fn map_category(category: Category) -> CategoryOption {
    CategoryOption {
        id: category.id,
        title: category.title,
    }
}

fn map_image(image: Image) -> ProductImage {
    ProductImage {
        id: image.id,
        url: image.url,
        name: image.name,
    }
}

fn map_product(product: Product) -> LoadedProduct {
    LoadedProduct {
        id: product.id,
        title: product.title,
        description: product.description,
        price: product.price,
        category: product.categories.first().map(|category| category.id),
        images: product.images.into_iter().map(map_image).collect(),
    }
}

fn map_failure(action: &str, err: ApiError) -> RequestFailure {
    catalog_warn!("{} failed: {}", action, err);
    if err.is_transport() {
        RequestFailure::Transport(err.to_string())
    } else {
        let detail = err.to_string();
        RequestFailure::rejected(err.backend_message, detail)
    }
}
