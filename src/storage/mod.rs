pub mod fs;
pub mod traits;

pub use fs::FsOutputStore;
pub use traits::OutputStore;
