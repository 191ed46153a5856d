//! Preference Adapters
//!
//! Implementations of the PreferenceStore port.
//!
//! - **FilePreferenceStore** - Flags persisted to a JSON file
//! - **InMemoryPreferenceStore** - Flags kept in memory (testing/development)

mod file;
mod in_memory;

pub use file::FilePreferenceStore;
pub use in_memory::InMemoryPreferenceStore;
