pub mod csv;
pub mod ndjson;
pub mod parquet;
