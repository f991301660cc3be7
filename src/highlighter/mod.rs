//! 高亮器模块：当前规则集的共享持有与宿主调用入口
pub mod shared;
#[allow(clippy::module_inception)]
pub mod highlighter;

// 导出核心接口
pub use self::shared::SharedRules;
pub use self::highlighter::Highlighter;
