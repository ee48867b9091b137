use url::Url;

use crate::ProductId;

/// REST routes of the content API, rooted at the configured base URL.
#[derive(Debug, Clone)]
pub struct Endpoints {
    base: Url,
}

impl Endpoints {
    pub fn new(base: Url) -> Self {
        Self { base }
    }

    pub fn categories(&self) -> Url {
        self.route(&["api", "categories"])
    }

    /// Filtered lookup of one product with its images and categories populated.
    pub fn product_lookup(&self, product_id: ProductId) -> Url {
        let mut url = self.route(&["api", "products"]);
        url.query_pairs_mut()
            .append_pair("filters[id][$eq]", &product_id.to_string())
            .append_pair("populate[images][fields][0]", "name")
            .append_pair("populate[images][fields][1]", "url")
            .append_pair("populate[categories][fields][0]", "title");
        url
    }

    pub fn products(&self) -> Url {
        self.route(&["api", "products"])
    }

    pub fn product(&self, product_id: ProductId) -> Url {
        self.route(&["api", "products", &product_id.to_string()])
    }

    pub fn upload(&self) -> Url {
        self.route(&["api", "upload"])
    }

    fn route(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        url.set_query(None);
        url.set_fragment(None);
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}
