pub mod folder_ops;

pub use folder_ops::{delete_folder, insert_folder, move_folder, rename_folder, replace_structure};
