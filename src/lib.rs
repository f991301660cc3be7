//! item-highlight - 基于关键字规则的物品文本高亮判定库
//!
//! 宿主负责从物品数据中提取文本、持久化配置和渲染高亮；
//! 本库只负责规则清洗、规则匹配以及配置编辑草稿。
//!
#![doc = include_str!("../README.md")]

// 导出全局错误类型
pub use self::error::{HighlightError, HlResult};

// 导出配置模块
pub use self::config::{GlobalConfig, ConfigManager, CustomConfigBuilder};

// 导出规则模块核心接口
pub use self::rule::{
    MatchMode, Rule, RuleSet, RuleStore, RawKeyword, RuleSnapshot, StoredRule, SNAPSHOT_VERSION
};

// 导出匹配模块核心接口
pub use self::matcher::Matcher;

// 导出提取模块核心接口
pub use self::extractor::{CandidateText, parse_text_component};

// 导出编辑模块核心接口
pub use self::editor::{ConfigDraft, RuleDraft};

// 导出高亮器
pub use self::highlighter::{Highlighter, SharedRules};

// 声明所有子模块
pub mod config;
pub mod error;
pub mod rule;
pub mod matcher;
pub mod extractor;
pub mod editor;
pub mod highlighter;
pub mod utils;
