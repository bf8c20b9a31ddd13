mod mock_directory_store;

pub use mock_directory_store::MockDirectoryStore;
