use serde::{Deserialize, Serialize};

/// Outcome classification carried in the `type` field of every envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvelopeType {
    Success,
    Warning,
    Error,
}

/// Uniform response body returned by every endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvelopeDto<T> {
    #[serde(rename = "type")]
    pub kind: EnvelopeType,
    pub title: String,
    pub message: String,
    pub data: T,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageMetaDto {
    pub total: u64,
    pub per_page: u64,
    pub current_page: u64,
    pub last_page: u64,
    pub first_page: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedDto<T> {
    pub meta: PageMetaDto,
    pub data: Vec<T>,
}

/// Query string accepted by every listing endpoint.
///
/// `page` is 1-based. `employee_id` narrows the listing on resources that
/// belong to an employee and is ignored elsewhere.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IndexQueryDto {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    pub employee_id: Option<i32>,
}
