pub mod file_store;
pub mod legacy;
pub mod memory_store;
pub mod repository;
pub mod sample;

pub use file_store::FileJournalStore;
pub use memory_store::MemoryJournalStore;
pub use repository::JournalRepository;
pub use sample::{sample_entries, seed_sample_data, SAMPLE_NOTES};
