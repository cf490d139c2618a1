use serde::{Deserialize, Serialize};

use crate::domain::{Artwork, ArtworkPage, Pagination, ARTWORK_FIELDS};

/// Query string of `GET /artworks`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtworksQuery {
    pub page: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
}

impl ArtworksQuery {
    pub fn new(page: u32, limit: Option<u32>) -> Self {
        Self {
            page,
            limit,
            fields: Some(ARTWORK_FIELDS.join(",")),
        }
    }
}

/// Envelope of `GET /artworks`. The API also sends `info` and `config`
/// blocks which are not consumed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtworksResponse {
    #[serde(default)]
    pub pagination: Pagination,
    pub data: Vec<Artwork>,
}

impl From<ArtworksResponse> for ArtworkPage {
    fn from(value: ArtworksResponse) -> Self {
        Self {
            pagination: value.pagination,
            data: value.data,
        }
    }
}

#[cfg(test)]
#[path = "tests/protocol_tests.rs"]
mod tests;
