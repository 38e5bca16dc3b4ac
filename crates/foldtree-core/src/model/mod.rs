pub mod folder;
pub mod forest;

pub use folder::FolderNode;
pub use forest::Forest;
