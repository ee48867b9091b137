use catalog_logging::{catalog_debug, catalog_warn};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Method, RequestBuilder};

use crate::endpoints::Endpoints;
use crate::error::map_reqwest_error;
use crate::upload::build_form;
use crate::{
    wire, ApiError, ApiSettings, Category, FailureKind, Image, Product, ProductId, ProductPayload,
    UploadFile, UploadTarget,
};

/// Operations the admin forms need from the content API.
#[async_trait::async_trait]
pub trait Backend: Send + Sync {
    async fn fetch_categories(&self) -> Result<Vec<Category>, ApiError>;

    async fn fetch_product(&self, product_id: ProductId) -> Result<Product, ApiError>;

    /// Returns the id the backend assigned to the new record.
    async fn create_product(&self, payload: &ProductPayload) -> Result<ProductId, ApiError>;

    async fn update_product(
        &self,
        product_id: ProductId,
        payload: &ProductPayload,
    ) -> Result<(), ApiError>;

    /// Uploads `files` and attaches them to `target`.
    async fn upload_images(
        &self,
        files: &[UploadFile],
        target: &UploadTarget,
    ) -> Result<Vec<Image>, ApiError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestBackend {
    client: reqwest::Client,
    endpoints: Endpoints,
    api_token: Option<String>,
}

impl ReqwestBackend {
    pub fn new(settings: ApiSettings) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| ApiError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self {
            client,
            endpoints: Endpoints::new(settings.base_url),
            api_token: settings.api_token,
        })
    }

    fn request(&self, method: Method, url: url::Url) -> RequestBuilder {
        let builder = self.client.request(method, url).header(ACCEPT, "application/json");
        match &self.api_token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Sends the request and returns the body of a 2xx answer.
    async fn execute(&self, label: &str, request: RequestBuilder) -> Result<bytes::Bytes, ApiError> {
        let response = request.send().await.map_err(|err| {
            let err = map_reqwest_error(err);
            catalog_warn!("{label} failed before a response: {err}");
            err
        })?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_reqwest_error)?;
        catalog_debug!("{label} -> {status} ({} bytes)", body.len());

        if !status.is_success() {
            let backend_message = wire::backend_message(&body);
            catalog_warn!(
                "{label} rejected with {status}: {}",
                backend_message.as_deref().unwrap_or("<no message>")
            );
            return Err(ApiError::http_status(status.as_u16(), backend_message));
        }
        Ok(body)
    }
}

#[async_trait::async_trait]
impl Backend for ReqwestBackend {
    async fn fetch_categories(&self) -> Result<Vec<Category>, ApiError> {
        let request = self.request(Method::GET, self.endpoints.categories());
        let body = self.execute("GET /api/categories", request).await?;
        wire::parse_categories(&body)
    }

    async fn fetch_product(&self, product_id: ProductId) -> Result<Product, ApiError> {
        let request = self.request(Method::GET, self.endpoints.product_lookup(product_id));
        let body = self.execute("GET /api/products?filters", request).await?;
        wire::parse_product_lookup(&body, product_id)
    }

    async fn create_product(&self, payload: &ProductPayload) -> Result<ProductId, ApiError> {
        let request = self
            .request(Method::POST, self.endpoints.products())
            .header(CONTENT_TYPE, "application/json")
            .body(wire::product_body(payload)?);
        let body = self.execute("POST /api/products", request).await?;
        wire::parse_created_id(&body)
    }

    async fn update_product(
        &self,
        product_id: ProductId,
        payload: &ProductPayload,
    ) -> Result<(), ApiError> {
        let request = self
            .request(Method::PUT, self.endpoints.product(product_id))
            .header(CONTENT_TYPE, "application/json")
            .body(wire::product_body(payload)?);
        self.execute("PUT /api/products/{id}", request).await?;
        Ok(())
    }

    async fn upload_images(
        &self,
        files: &[UploadFile],
        target: &UploadTarget,
    ) -> Result<Vec<Image>, ApiError> {
        let form = build_form(files, target)?;
        let request = self.request(Method::POST, self.endpoints.upload()).multipart(form);
        let body = self.execute("POST /api/upload", request).await?;
        Ok(wire::parse_uploaded(&body))
    }
}
