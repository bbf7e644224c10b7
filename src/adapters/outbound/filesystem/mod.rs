/// Filesystem adapters for repository collection, session storage and output
mod directory_collector;
mod file_writer;
mod session_store;

pub use directory_collector::DirectoryCollector;
pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use session_store::{
    FileSessionStore, InMemoryResultStore, ANALYSIS_RESULT_KEY, SESSION_FORMAT_VERSION,
};
