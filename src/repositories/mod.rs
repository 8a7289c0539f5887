mod json_file_store;
mod traits;

pub use json_file_store::{JsonFileStore, STORE_VERSION};
pub use traits::CustomerStore;
