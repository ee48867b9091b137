use std::path::PathBuf;

use catalog_core::{
    text, update, AppState, CategoryOption, Effect, LoadedProduct, Msg, ProductDraft,
    ProductImage, RequestFailure, SelectedFile, SubmitStep, UploadTarget,
};
use pretty_assertions::assert_eq;

fn image(id: u64) -> ProductImage {
    ProductImage {
        id,
        url: format!("/uploads/{id}.png"),
        name: format!("{id}.png"),
    }
}

fn loaded_edit_form() -> AppState {
    let (state, _) = update(AppState::edit(42), Msg::Mounted);
    let (state, _) = update(
        state,
        Msg::CategoriesLoaded(Ok(vec![
            CategoryOption {
                id: 1,
                title: "Lighting".into(),
            },
            CategoryOption {
                id: 2,
                title: "Seating".into(),
            },
        ])),
    );
    let (state, _) = update(
        state,
        Msg::ProductLoaded(Ok(LoadedProduct {
            id: 42,
            title: "Lamp".into(),
            description: "Bright".into(),
            price: "19.99".into(),
            category: Some(1),
            images: vec![image(10), image(11), image(12)],
        })),
    );
    state
}

fn expected_draft(images: Option<Vec<u64>>) -> ProductDraft {
    ProductDraft {
        title: "Lamp".into(),
        description: "Bright".into(),
        category: 1,
        price: "19.99".into(),
        images,
    }
}

#[test]
fn update_without_new_files_issues_only_the_update() {
    let state = loaded_edit_form();

    let (state, effects) = update(state, Msg::SubmitClicked);
    assert_eq!(
        effects,
        vec![Effect::UpdateProduct {
            product_id: 42,
            draft: expected_draft(None),
        }]
    );
    assert_eq!(state.view().submit_label, text::SUBMIT_EDIT_BUSY);

    let (state, effects) = update(state, Msg::ProductUpdated(Ok(())));
    assert!(effects.is_empty());
    let view = state.view();
    assert_eq!(view.step, None);
    assert_eq!(view.message.as_deref(), Some(text::UPDATE_SUCCEEDED));
    assert_eq!(view.navigate_to, None);
}

#[test]
fn update_with_new_files_uploads_against_existing_id() {
    let state = loaded_edit_form();
    let files = vec![SelectedFile {
        name: "new.png".into(),
        path: PathBuf::from("/tmp/new.png"),
        byte_len: 64,
    }];
    let (state, _) = update(state, Msg::FilesSelected(files.clone()));

    let (state, _) = update(state, Msg::SubmitClicked);
    let (state, effects) = update(state, Msg::ProductUpdated(Ok(())));
    assert_eq!(
        effects,
        vec![Effect::UploadImages {
            target: UploadTarget::product_images(42),
            files,
        }]
    );

    let (state, effects) = update(state, Msg::ImagesUploaded(Ok(vec![image(13)])));
    assert!(effects.is_empty());
    let view = state.view();
    let ids: Vec<_> = view.existing_images.iter().map(|image| image.id).collect();
    assert_eq!(ids, vec![10, 11, 12, 13]);
    assert!(view.selected_files.is_empty());
    assert_eq!(view.message.as_deref(), Some(text::UPDATE_SUCCEEDED));
}

#[test]
fn forbidden_update_shows_backend_message() {
    let state = loaded_edit_form();
    let (state, _) = update(state, Msg::SubmitClicked);

    let (state, effects) = update(
        state,
        Msg::ProductUpdated(Err(RequestFailure::rejected(
            Some("Forbidden".into()),
            "http status 403",
        ))),
    );

    assert!(effects.is_empty());
    let view = state.view();
    assert_eq!(view.error.as_deref(), Some("Forbidden"));
    assert_eq!(view.message, None);
    assert!(view.submit_enabled);
}

#[test]
fn rejected_update_without_message_uses_fallback() {
    let state = loaded_edit_form();
    let (state, _) = update(state, Msg::SubmitClicked);

    let (state, _) = update(
        state,
        Msg::ProductUpdated(Err(RequestFailure::rejected(None, "http status 500"))),
    );

    assert_eq!(state.view().error.as_deref(), Some(text::UPDATE_FAILED));
}

#[test]
fn removed_image_is_detached_on_next_update() {
    let state = loaded_edit_form();
    let (state, _) = update(state, Msg::ExistingImageRemoved(11));

    let ids: Vec<_> = state
        .view()
        .existing_images
        .iter()
        .map(|image| image.id)
        .collect();
    assert_eq!(ids, vec![10, 12]);

    let (state, effects) = update(state, Msg::SubmitClicked);
    assert_eq!(
        effects,
        vec![Effect::UpdateProduct {
            product_id: 42,
            draft: expected_draft(Some(vec![10, 12])),
        }]
    );

    // Once persisted, the next save goes back to the scalar-only body.
    let (state, _) = update(state, Msg::ProductUpdated(Ok(())));
    let (_, effects) = update(state, Msg::SubmitClicked);
    assert_eq!(
        effects,
        vec![Effect::UpdateProduct {
            product_id: 42,
            draft: expected_draft(None),
        }]
    );
}

#[test]
fn removing_unknown_image_changes_nothing() {
    let state = loaded_edit_form();
    let before = state.view();

    let (state, _) = update(state, Msg::ExistingImageRemoved(99));

    assert_eq!(state.view(), before);
    let (_, effects) = update(state, Msg::SubmitClicked);
    assert_eq!(
        effects,
        vec![Effect::UpdateProduct {
            product_id: 42,
            draft: expected_draft(None),
        }]
    );
}

#[test]
fn edit_submit_does_not_require_files() {
    let state = loaded_edit_form();
    let (state, effects) = update(state, Msg::SubmitClicked);

    assert!(!effects
        .iter()
        .any(|effect| matches!(effect, Effect::ShowAlert { .. })));
    assert_eq!(state.step(), Some(SubmitStep::UpdatingProduct));
}

#[test]
fn transport_failure_during_upload_uses_generic_text() {
    let state = loaded_edit_form();
    let (state, _) = update(
        state,
        Msg::FilesSelected(vec![SelectedFile {
            name: "x.png".into(),
            path: PathBuf::from("/tmp/x.png"),
            byte_len: 1,
        }]),
    );
    let (state, _) = update(state, Msg::SubmitClicked);
    let (state, _) = update(state, Msg::ProductUpdated(Ok(())));

    let (state, _) = update(
        state,
        Msg::ImagesUploaded(Err(RequestFailure::Transport("timed out".into()))),
    );

    assert_eq!(state.view().error.as_deref(), Some(text::GENERIC_FAILURE));
}

#[test]
fn removal_while_update_in_flight_is_ignored() {
    let (state, _) = update(loaded_edit_form(), Msg::SubmitClicked);
    let (state, effects) = update(state, Msg::ExistingImageRemoved(10));
    assert!(effects.is_empty());

    let (state, _) = update(state, Msg::ProductUpdated(Ok(())));
    let ids: Vec<u64> = state.view().existing_images.iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![10, 11, 12]);

    // Removing it now is carried by the next save.
    let (state, _) = update(state, Msg::ExistingImageRemoved(10));
    let (_, effects) = update(state, Msg::SubmitClicked);
    assert_eq!(
        effects,
        vec![Effect::UpdateProduct {
            product_id: 42,
            draft: expected_draft(Some(vec![11, 12])),
        }]
    );
}
