pub mod versioned_file_locator;

pub use versioned_file_locator::VersionedFileLocator;
