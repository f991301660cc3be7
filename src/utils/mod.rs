//! 通用工具：日志宏与日志预览格式化
pub(crate) mod log;
pub mod preview;

pub use self::preview::{preview_compact, preview_keywords};
