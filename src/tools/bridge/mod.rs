//! Filesystem-memory bridge tools

mod find_similar_files;
mod memory_stats;
mod recall_file_history;

pub use find_similar_files::FindSimilarFilesTool;
pub use memory_stats::GetFilesystemMemoryStatsTool;
pub use recall_file_history::RecallFileHistoryTool;
