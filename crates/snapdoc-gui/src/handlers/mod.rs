pub mod caption;
pub mod export;
pub mod ingest;
