//! 编辑模块：配置界面的可变草稿模型，与不可变规则模型分离
pub mod draft;

pub use self::draft::{ConfigDraft, RuleDraft};
