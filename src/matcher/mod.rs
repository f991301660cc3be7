//! 匹配模块：高亮判定核心逻辑
#[allow(clippy::module_inception)]
pub mod matcher;

pub use self::matcher::Matcher;
