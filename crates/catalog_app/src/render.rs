//! Plain-text rendering of the form view model.

use catalog_core::{AppViewModel, FormMode};
use catalog_engine::ApiSettings;

pub fn render_form(view: &AppViewModel, settings: &ApiSettings) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push(match view.mode {
        FormMode::Create => "== New product ==".to_string(),
        FormMode::Edit { product_id } => format!("== Product {product_id} =="),
    });
    lines.push(format!("Title:       {}", view.title));
    lines.push(format!("Description: {}", view.description));
    lines.push(format!("Price:       {}", view.price));
    lines.push("Category:".to_string());
    lines.extend(render_categories(view));

    if let FormMode::Edit { .. } = view.mode {
        lines.push("Images:".to_string());
        if view.existing_images.is_empty() {
            lines.push("  No images available".to_string());
        }
        for image in &view.existing_images {
            lines.push(format!(
                "  [{}] {} {}",
                image.id,
                image.name,
                settings.asset_url(&image.url)
            ));
        }
    }

    if !view.selected_files.is_empty() {
        lines.push("Selected files:".to_string());
        for file in &view.selected_files {
            lines.push(format!("  {} ({} bytes)", file.name, file.byte_len));
        }
    }

    let marker = if view.submit_enabled { "" } else { " (disabled)" };
    lines.push(format!("[{}]{}", view.submit_label, marker));
    if let Some(error) = &view.error {
        lines.push(format!("error: {error}"));
    }
    if let Some(message) = &view.message {
        lines.push(message.clone());
    }
    lines
}

pub fn render_categories(view: &AppViewModel) -> Vec<String> {
    view.category_options
        .iter()
        .map(|option| {
            let mark = if option.selected { "(x)" } else { "( )" };
            match option.value {
                Some(id) => format!("  {mark} {} [{id}]", option.label),
                None => format!("  {mark} {}", option.label),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::{text, CategoryOptionView, ProductImage, SelectedFileView};
    use pretty_assertions::assert_eq;

    fn settings() -> ApiSettings {
        ApiSettings::new("http://cms.local:1337").unwrap()
    }

    #[test]
    fn placeholder_is_listed_without_id() {
        let view = AppViewModel {
            category_options: vec![
                CategoryOptionView {
                    value: None,
                    label: text::CATEGORY_PLACEHOLDER.into(),
                    selected: false,
                },
                CategoryOptionView {
                    value: Some(3),
                    label: "Lighting".into(),
                    selected: true,
                },
            ],
            ..AppViewModel::default()
        };
        assert_eq!(
            render_categories(&view),
            vec![
                "  ( ) --Please choose a category--".to_string(),
                "  (x) Lighting [3]".to_string(),
            ]
        );
    }

    #[test]
    fn edit_view_lists_images_with_absolute_urls() {
        let view = AppViewModel {
            mode: FormMode::Edit { product_id: 42 },
            existing_images: vec![ProductImage {
                id: 7,
                url: "/uploads/lamp.png".into(),
                name: "lamp.png".into(),
            }],
            submit_label: text::SUBMIT_EDIT.into(),
            submit_enabled: true,
            ..AppViewModel::default()
        };
        let lines = render_form(&view, &settings());
        assert_eq!(lines[0], "== Product 42 ==");
        assert!(lines.contains(&"  [7] lamp.png http://cms.local:1337/uploads/lamp.png".to_string()));
        assert!(lines.contains(&"[Save Changes]".to_string()));
    }

    #[test]
    fn edit_view_without_images_says_so() {
        let view = AppViewModel {
            mode: FormMode::Edit { product_id: 1 },
            ..AppViewModel::default()
        };
        let lines = render_form(&view, &settings());
        assert!(lines.contains(&"  No images available".to_string()));
    }

    #[test]
    fn create_view_shows_files_error_and_busy_button() {
        let view = AppViewModel {
            selected_files: vec![SelectedFileView {
                name: "a.png".into(),
                byte_len: 12,
            }],
            submit_label: text::SUBMIT_CREATE_BUSY.into(),
            submit_enabled: false,
            error: Some("Failed to create product".into()),
            ..AppViewModel::default()
        };
        let lines = render_form(&view, &settings());
        assert!(!lines.iter().any(|line| line == "Images:"));
        assert!(lines.contains(&"  a.png (12 bytes)".to_string()));
        assert!(lines.contains(&"[Uploading...] (disabled)".to_string()));
        assert!(lines.contains(&"error: Failed to create product".to_string()));
    }
}
