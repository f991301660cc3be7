//! 规则快照编解码
//! 仅负责 RuleSet 与内存中 JSON / MessagePack 数据之间的转换，读写文件由宿主负责。
//! 解码时每条规则都重新经过 `RuleStore::make_rule_with_mode` 清洗。

use rmp_serde::{Serializer, from_slice};
use serde::{Deserialize, Serialize};

use super::model::{MatchMode, Rule, RuleSet};
use super::store::RuleStore;
use crate::error::{HighlightError, HlResult};
use crate::utils::log::hl_debug;

/// 当前快照格式版本
pub const SNAPSHOT_VERSION: u32 = 1;

fn default_version() -> u32 {
    SNAPSHOT_VERSION
}

fn default_visible() -> bool {
    true
}

/// 存储形态的单条规则（未清洗，允许 null 关键字）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredRule {
    #[serde(default)]
    pub keywords: Vec<Option<String>>,
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(default)]
    pub mode: MatchMode,
}

impl From<&Rule> for StoredRule {
    fn from(rule: &Rule) -> Self {
        Self {
            keywords: rule.keywords().iter().cloned().map(Some).collect(),
            visible: rule.is_visible(),
            mode: rule.mode(),
        }
    }
}

/// 规则库快照
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSnapshot {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default, alias = "targets")]
    pub rules: Vec<StoredRule>,
}

impl RuleSnapshot {
    pub fn from_rule_set(rules: &RuleSet) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            rules: rules.iter().map(StoredRule::from).collect(),
        }
    }

    /// 重建规则集：逐条清洗，丢弃清洗后为空的规则
    pub fn into_rule_set(self) -> RuleSet {
        RuleStore::make_rule_set(
            self.rules
                .into_iter()
                .map(|stored| RuleStore::make_rule_with_mode(stored.keywords, stored.visible, stored.mode)),
        )
    }

    pub fn to_json(&self) -> HlResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> HlResult<Self> {
        let snapshot: Self = serde_json::from_str(json)?;
        snapshot.check_version()
    }

    pub fn to_msgpack(&self) -> HlResult<Vec<u8>> {
        let mut data = Vec::new();
        self.serialize(&mut Serializer::new(&mut data).with_struct_map())
            .map_err(|e| HighlightError::MsgPackError(format!("序列化失败：{}", e)))?;

        hl_debug!("规则快照序列化成功，规则数：{}，数据大小：{} 字节", self.rules.len(), data.len());
        Ok(data)
    }

    pub fn from_msgpack(data: &[u8]) -> HlResult<Self> {
        let snapshot: Self = from_slice(data)
            .map_err(|e| HighlightError::MsgPackError(format!("反序列化失败：{}", e)))?;
        snapshot.check_version()
    }

    fn check_version(self) -> HlResult<Self> {
        if self.version > SNAPSHOT_VERSION {
            return Err(HighlightError::UnsupportedSnapshotVersion(self.version));
        }
        Ok(self)
    }
}
