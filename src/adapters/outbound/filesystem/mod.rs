/// Filesystem adapters for file I/O operations
mod file_writer;
mod session_file;

pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use session_file::{FileSessionStore, SESSION_KEY};
