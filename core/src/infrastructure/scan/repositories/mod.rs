pub mod scan_repository;

pub use scan_repository::PostgresScanRepository;
