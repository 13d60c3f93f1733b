pub mod lookup_record_repository;

pub use lookup_record_repository::SqliteLookupRecordRepository;
