pub mod bundle_filesystem;
pub mod system_clock;

pub use bundle_filesystem::FilesystemBundleStore;
pub use system_clock::SystemClock;
