use crate::{
    text, AppState, Effect, FormMode, Msg, ProductId, ProductImage, SubmitStep, UploadTarget,
};

/// Pure update function: applies a message to state and returns any effects.
///
/// Completions are only accepted while the matching load or submit step is
/// outstanding; late or unexpected ones leave the state untouched. Form edits
/// are dropped while a submit is in flight.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    if state.step().is_some() && is_form_edit(&msg) {
        return (state, Vec::new());
    }
    let effects = match msg {
        Msg::Mounted => {
            state.begin_loads();
            match state.mode() {
                FormMode::Create => vec![Effect::FetchCategories],
                FormMode::Edit { product_id } => {
                    vec![Effect::FetchProduct { product_id }, Effect::FetchCategories]
                }
            }
        }
        Msg::CategoriesLoaded(result) => {
            if state.pending().categories {
                match result {
                    Ok(categories) => state.apply_categories(categories),
                    Err(_) => state.fail_categories(),
                }
            }
            Vec::new()
        }
        Msg::ProductLoaded(result) => {
            if state.pending().product {
                match result {
                    Ok(product) if state.mode() == (FormMode::Edit { product_id: product.id }) => {
                        state.apply_product(product)
                    }
                    _ => state.fail_product(),
                }
            }
            Vec::new()
        }
        Msg::TitleChanged(title) => {
            state.fields_mut().title = title;
            Vec::new()
        }
        Msg::DescriptionChanged(description) => {
            state.fields_mut().description = description;
            Vec::new()
        }
        Msg::PriceChanged(price) => {
            state.fields_mut().price = price;
            Vec::new()
        }
        Msg::CategorySelected(category) => {
            state.fields_mut().category = category;
            Vec::new()
        }
        Msg::FilesSelected(files) => {
            state.select_files(files);
            Vec::new()
        }
        Msg::ExistingImageRemoved(image_id) => {
            if matches!(state.mode(), FormMode::Edit { .. }) {
                state.remove_existing_image(image_id);
            }
            Vec::new()
        }
        Msg::SubmitClicked => submit(&mut state),
        Msg::ProductCreated(result) => {
            if state.step() != Some(SubmitStep::CreatingProduct) {
                return (state, Vec::new());
            }
            match result {
                Ok(product_id) => upload_or_finish(&mut state, product_id),
                Err(failure) => {
                    state.fail_step(failure.display_text(text::CREATE_FAILED));
                    Vec::new()
                }
            }
        }
        Msg::ProductUpdated(result) => {
            let FormMode::Edit { product_id } = state.mode() else {
                return (state, Vec::new());
            };
            if state.step() != Some(SubmitStep::UpdatingProduct) {
                return (state, Vec::new());
            }
            match result {
                Ok(()) => {
                    state.finish_update();
                    upload_or_finish(&mut state, product_id)
                }
                Err(failure) => {
                    state.fail_step(failure.display_text(text::UPDATE_FAILED));
                    Vec::new()
                }
            }
        }
        Msg::ImagesUploaded(result) => {
            let Some(SubmitStep::UploadingImages { product_id }) = state.step() else {
                return (state, Vec::new());
            };
            match result {
                Ok(uploaded) => finish(&mut state, product_id, uploaded),
                Err(failure) => {
                    state.fail_step(failure.display_text(text::UPLOAD_FAILED));
                    Vec::new()
                }
            }
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn is_form_edit(msg: &Msg) -> bool {
    matches!(
        msg,
        Msg::TitleChanged(_)
            | Msg::DescriptionChanged(_)
            | Msg::PriceChanged(_)
            | Msg::CategorySelected(_)
            | Msg::FilesSelected(_)
            | Msg::ExistingImageRemoved(_)
    )
}

fn submit(state: &mut AppState) -> Vec<Effect> {
    if state.step().is_some() {
        return Vec::new();
    }
    let category = match state.validate_submit() {
        Ok(category) => category,
        Err(alert) => {
            return vec![Effect::ShowAlert {
                text: alert.to_string(),
            }];
        }
    };
    let draft = state.draft(category);
    match state.mode() {
        FormMode::Create => {
            state.begin_step(SubmitStep::CreatingProduct);
            vec![Effect::CreateProduct { draft }]
        }
        FormMode::Edit { product_id } => {
            state.begin_step(SubmitStep::UpdatingProduct);
            vec![Effect::UpdateProduct { product_id, draft }]
        }
    }
}

/// The product write is done; attach the selected files if there are any.
fn upload_or_finish(state: &mut AppState, product_id: ProductId) -> Vec<Effect> {
    if state.selected_files().is_empty() {
        return finish(state, product_id, Vec::new());
    }
    let files = state.selected_files().to_vec();
    state.begin_step(SubmitStep::UploadingImages { product_id });
    vec![Effect::UploadImages {
        target: UploadTarget::product_images(product_id),
        files,
    }]
}

fn finish(state: &mut AppState, product_id: ProductId, uploaded: Vec<ProductImage>) -> Vec<Effect> {
    let mode = state.mode();
    state.succeed(uploaded);
    match mode {
        FormMode::Create => {
            state.set_navigation(product_id);
            vec![Effect::NavigateToEdit { product_id }]
        }
        FormMode::Edit { .. } => Vec::new(),
    }
}
