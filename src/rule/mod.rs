//! 规则模块：负责规则的数据模型、清洗构造、快照编解码
pub mod model;
pub mod store;
pub mod snapshot;

// 导出核心接口
pub use self::model::{MatchMode, Rule, RuleSet};
pub use self::store::{RawKeyword, RuleStore};
pub use self::snapshot::{RuleSnapshot, StoredRule, SNAPSHOT_VERSION};
