use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    scan::{
        entities::{NewScan, NewScanResult, Scan, ScanDetails, ScanResult, ScanResultDetails},
        value_objects::{AnalysisRequest, InlineImage, ListScansFilter},
    },
};

/// Repository trait for scans and their per-ingredient results
#[cfg_attr(test, mockall::automock)]
pub trait ScanRepository: Send + Sync {
    fn create_scan(
        &self,
        scan: NewScan,
    ) -> impl Future<Output = Result<Scan, CoreError>> + Send;

    fn create_scan_result(
        &self,
        result: NewScanResult,
    ) -> impl Future<Output = Result<ScanResult, CoreError>> + Send;

    fn get_scan_by_id(
        &self,
        scan_id: i64,
    ) -> impl Future<Output = Result<Option<Scan>, CoreError>> + Send;

    /// Newest first.
    fn get_scans_by_user(
        &self,
        user_id: i64,
        filter: ListScansFilter,
    ) -> impl Future<Output = Result<Vec<Scan>, CoreError>> + Send;

    /// Results joined with their catalog ingredient, in insertion order.
    fn get_results_by_scan_id(
        &self,
        scan_id: i64,
    ) -> impl Future<Output = Result<Vec<ScanResultDetails>, CoreError>> + Send;
}

/// Gateway to the external model. Implementations make exactly one outbound
/// call per invocation and never retry.
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    /// Returns the generated text extracted from the provider envelope.
    fn invoke(
        &self,
        prompt: String,
        image: Option<InlineImage>,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for the scan pipeline and its read path
#[cfg_attr(test, mockall::automock)]
pub trait ScanService: Send + Sync {
    fn process_scan(
        &self,
        request: AnalysisRequest,
    ) -> impl Future<Output = Result<Scan, CoreError>> + Send;

    fn get_scan(
        &self,
        scan_id: i64,
    ) -> impl Future<Output = Result<ScanDetails, CoreError>> + Send;

    fn list_user_scans(
        &self,
        user_id: i64,
        filter: ListScansFilter,
    ) -> impl Future<Output = Result<Vec<ScanDetails>, CoreError>> + Send;
}
