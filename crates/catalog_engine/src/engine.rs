use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use catalog_logging::{catalog_debug, catalog_info};

use crate::backend::{Backend, ReqwestBackend};
use crate::{ApiError, ApiSettings, EngineCommand, EngineEvent, FailureKind, UploadFile};

/// Runs backend requests on a background tokio runtime.
///
/// Every command becomes its own task, so independent reads overlap. Results
/// come back as [`EngineEvent`]s in completion order.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: ApiSettings) -> Result<Self, ApiError> {
        catalog_info!("Engine targeting {}", settings.base_url);
        let backend = ReqwestBackend::new(settings)?;
        Self::with_backend(Arc::new(backend))
    }

    pub fn with_backend(backend: Arc<dyn Backend>) -> Result<Self, ApiError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
            .map_err(|err| ApiError::new(FailureKind::Io, format!("tokio runtime: {err}")))?;
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let backend = backend.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    let event = handle_command(backend.as_ref(), command).await;
                    let _ = event_tx.send(event);
                });
            }
            // Let in-flight requests finish before the runtime drops.
            runtime.shutdown_timeout(Duration::from_secs(5));
        });

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn submit(&self, command: EngineCommand) {
        catalog_debug!("Engine command: {}", command_label(&command));
        let _ = self.cmd_tx.send(command);
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

fn command_label(command: &EngineCommand) -> &'static str {
    match command {
        EngineCommand::FetchCategories => "fetch categories",
        EngineCommand::FetchProduct { .. } => "fetch product",
        EngineCommand::CreateProduct { .. } => "create product",
        EngineCommand::UpdateProduct { .. } => "update product",
        EngineCommand::UploadImages { .. } => "upload images",
    }
}

async fn handle_command(backend: &dyn Backend, command: EngineCommand) -> EngineEvent {
    match command {
        EngineCommand::FetchCategories => {
            EngineEvent::CategoriesFetched(backend.fetch_categories().await)
        }
        EngineCommand::FetchProduct { product_id } => EngineEvent::ProductFetched {
            product_id,
            result: backend.fetch_product(product_id).await,
        },
        EngineCommand::CreateProduct { payload } => {
            EngineEvent::ProductCreated(backend.create_product(&payload).await)
        }
        EngineCommand::UpdateProduct {
            product_id,
            payload,
        } => EngineEvent::ProductUpdated {
            product_id,
            result: backend.update_product(product_id, &payload).await,
        },
        EngineCommand::UploadImages { files, target } => {
            let result = async {
                let mut uploads = Vec::with_capacity(files.len());
                for path in &files {
                    uploads.push(UploadFile::load(path).await?);
                }
                backend.upload_images(&uploads, &target).await
            }
            .await;
            EngineEvent::ImagesUploaded { target, result }
        }
    }
}
