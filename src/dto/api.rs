//! Response envelope used by every `/api/v1` endpoint.

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Meta {
    pub page: usize,
    pub per_page: usize,
    pub total: usize,
    pub total_pages: usize,
}

impl Meta {
    pub fn new(page: usize, per_page: usize, total: usize) -> Self {
        Self {
            page,
            per_page,
            total,
            total_pages: total.div_ceil(per_page.max(1)),
        }
    }
}

/// `{ data, meta? }` envelope; `meta` is present on paginated lists only.
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
}

impl<T: Serialize> Envelope<T> {
    pub fn new(data: T) -> Self {
        Self { data, meta: None }
    }

    pub fn paginated(data: T, meta: Meta) -> Self {
        Self {
            data,
            meta: Some(meta),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meta_rounds_total_pages_up() {
        let meta = Meta::new(1, 20, 41);
        assert_eq!(meta.total_pages, 3);
    }

    #[test]
    fn plain_envelope_omits_meta() {
        let body = serde_json::to_value(Envelope::new(vec![1, 2, 3])).unwrap();
        assert_eq!(body["data"], serde_json::json!([1, 2, 3]));
        assert!(body.get("meta").is_none());
    }
}
