//! Sandboxed filesystem tools

mod allowed_directories;
mod create_directory;
mod directory_tree;
mod edit_file;
mod get_file_info;
mod list_directory;
mod move_file;
mod read_file;
mod read_multiple_files;
mod search_files;
mod write_file;

pub use allowed_directories::{
    AddAllowedDirectoryTool, ListAllowedDirectoriesTool, RemoveAllowedDirectoryTool,
};
pub use create_directory::CreateDirectoryTool;
pub use directory_tree::DirectoryTreeTool;
pub use edit_file::EditFileTool;
pub use get_file_info::GetFileInfoTool;
pub use list_directory::{ListDirectoryTool, ListDirectoryWithSizesTool};
pub use move_file::MoveFileTool;
pub use read_file::ReadFileTool;
pub use read_multiple_files::ReadMultipleFilesTool;
pub use search_files::SearchFilesTool;
pub use write_file::WriteFileTool;
