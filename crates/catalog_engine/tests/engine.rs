use std::sync::{Arc, Mutex};
use std::time::Duration;

use catalog_engine::{
    ApiError, Backend, Category, EngineCommand, EngineEvent, EngineHandle, FailureKind, Image,
    Product, ProductId, ProductPayload, UploadFile, UploadTarget,
};
use tempfile::TempDir;

/// In-memory backend recording the uploads it receives.
#[derive(Default)]
struct StubBackend {
    uploads: Mutex<Vec<(Vec<String>, UploadTarget)>>,
}

#[async_trait::async_trait]
impl Backend for StubBackend {
    async fn fetch_categories(&self) -> Result<Vec<Category>, ApiError> {
        Ok(vec![Category {
            id: 1,
            title: "Lighting".into(),
        }])
    }

    async fn fetch_product(&self, product_id: ProductId) -> Result<Product, ApiError> {
        Ok(Product {
            id: product_id,
            title: "Lamp".into(),
            ..Product::default()
        })
    }

    async fn create_product(&self, _payload: &ProductPayload) -> Result<ProductId, ApiError> {
        Ok(42)
    }

    async fn update_product(
        &self,
        _product_id: ProductId,
        _payload: &ProductPayload,
    ) -> Result<(), ApiError> {
        Ok(())
    }

    async fn upload_images(
        &self,
        files: &[UploadFile],
        target: &UploadTarget,
    ) -> Result<Vec<Image>, ApiError> {
        let names = files.iter().map(|file| file.file_name.clone()).collect();
        self.uploads.lock().unwrap().push((names, target.clone()));
        Ok(Vec::new())
    }
}

fn next_event(engine: &EngineHandle) -> EngineEvent {
    engine
        .recv_timeout(Duration::from_secs(5))
        .expect("engine event")
}

#[test]
fn independent_reads_both_complete() {
    let engine = EngineHandle::with_backend(Arc::new(StubBackend::default())).unwrap();

    engine.submit(EngineCommand::FetchProduct { product_id: 42 });
    engine.submit(EngineCommand::FetchCategories);

    let mut saw_product = false;
    let mut saw_categories = false;
    for _ in 0..2 {
        match next_event(&engine) {
            EngineEvent::ProductFetched { product_id, result } => {
                assert_eq!(product_id, 42);
                assert_eq!(result.unwrap().title, "Lamp");
                saw_product = true;
            }
            EngineEvent::CategoriesFetched(result) => {
                assert_eq!(result.unwrap().len(), 1);
                saw_categories = true;
            }
            other => panic!("unexpected event {other:?}"),
        }
    }
    assert!(saw_product && saw_categories);
}

#[test]
fn upload_command_reads_files_before_sending() {
    let temp = TempDir::new().unwrap();
    let first = temp.path().join("a.png");
    let second = temp.path().join("b.png");
    std::fs::write(&first, b"a").unwrap();
    std::fs::write(&second, b"b").unwrap();

    let backend = Arc::new(StubBackend::default());
    let engine = EngineHandle::with_backend(backend.clone()).unwrap();
    let target = UploadTarget {
        ref_uid: "api::product.product".into(),
        ref_id: 42,
        field: "images".into(),
    };

    engine.submit(EngineCommand::UploadImages {
        files: vec![first, second],
        target: target.clone(),
    });

    match next_event(&engine) {
        EngineEvent::ImagesUploaded {
            target: echoed,
            result,
        } => {
            assert_eq!(echoed, target);
            assert!(result.is_ok());
        }
        other => panic!("unexpected event {other:?}"),
    }
    let uploads = backend.uploads.lock().unwrap();
    assert_eq!(
        *uploads,
        vec![(vec!["a.png".to_string(), "b.png".to_string()], target)]
    );
}

#[test]
fn unreadable_file_fails_without_calling_backend() {
    let temp = TempDir::new().unwrap();
    let backend = Arc::new(StubBackend::default());
    let engine = EngineHandle::with_backend(backend.clone()).unwrap();

    engine.submit(EngineCommand::UploadImages {
        files: vec![temp.path().join("missing.png")],
        target: UploadTarget {
            ref_uid: "api::product.product".into(),
            ref_id: 1,
            field: "images".into(),
        },
    });

    match next_event(&engine) {
        EngineEvent::ImagesUploaded { result, .. } => {
            assert_eq!(result.unwrap_err().kind, FailureKind::Io);
        }
        other => panic!("unexpected event {other:?}"),
    }
    assert!(backend.uploads.lock().unwrap().is_empty());
}
