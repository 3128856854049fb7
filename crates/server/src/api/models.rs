//! Request and response data transfer objects for the REST API.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use string_analyzer_rs::models::StringRecord;
use string_store_rs::filter::{FilterSet, ValidatedFilterSet};

/// Body of `POST /strings`.
#[derive(Debug, Deserialize)]
pub struct CreateStringRequest {
    pub value: String,
}

/// Query string of `GET /strings/filter-by-natural-language`.
#[derive(Debug, Deserialize)]
pub struct NaturalLanguageParams {
    #[serde(default)]
    pub query: Option<String>,
}

/// Response of `GET /strings`.
#[derive(Debug, Serialize, Deserialize)]
pub struct StringListResponse {
    pub data: Vec<StringRecord>,
    pub count: usize,
    /// `null` when the request carried no filter parameters.
    pub filters_applied: Option<FilterSet>,
}

/// Response of `GET /strings/filter-by-natural-language`.
#[derive(Debug, Serialize)]
pub struct NaturalLanguageResponse {
    pub data: Vec<StringRecord>,
    pub count: usize,
    pub interpreted_query: ValidatedFilterSet,
}

impl NaturalLanguageResponse {
    pub fn new(interpreted_query: ValidatedFilterSet, data: Vec<StringRecord>) -> Self {
        Self {
            count: data.len(),
            data,
            interpreted_query,
        }
    }
}

impl StringListResponse {
    pub fn new(filters: &FilterSet, data: Vec<StringRecord>) -> Self {
        Self {
            count: data.len(),
            data,
            filters_applied: (!filters.is_empty()).then(|| filters.clone()),
        }
    }
}

/// Response of `GET /health`.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}

/// Response of `GET /`.
#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub message: &'static str,
    pub version: &'static str,
    pub endpoints: BTreeMap<&'static str, &'static str>,
}

impl ServiceInfo {
    pub fn current() -> Self {
        let endpoints = [
            ("POST /strings", "Analyze and store a new string"),
            ("GET /strings/{string_value}", "Get a specific string's analysis"),
            ("GET /strings", "Get all strings with optional filtering"),
            (
                "GET /strings/filter-by-natural-language",
                "Filter using natural language",
            ),
            ("DELETE /strings/{string_value}", "Delete a string"),
        ];
        Self {
            message: "String Analyzer Service API",
            version: env!("CARGO_PKG_VERSION"),
            endpoints: endpoints.into_iter().collect(),
        }
    }
}
