//! 高亮器：整合规则持有、匹配与配置编辑，供宿主渲染循环调用
use std::sync::Arc;

use super::shared::SharedRules;
use crate::config::GlobalConfig;
use crate::editor::ConfigDraft;
use crate::error::HlResult;
use crate::extractor::CandidateText;
use crate::matcher::Matcher;
use crate::rule::{RuleSet, RuleSnapshot};
use crate::utils::log::hl_debug;

/// 物品高亮器
#[derive(Debug, Default)]
pub struct Highlighter {
    rules: SharedRules,
    config: GlobalConfig,
}

impl Highlighter {
    /// 创建高亮器（初始无规则）
    pub fn new(config: GlobalConfig) -> Self {
        Self {
            rules: SharedRules::empty(),
            config,
        }
    }

    pub fn with_rules(config: GlobalConfig, rules: RuleSet) -> Self {
        Self {
            rules: SharedRules::new(rules),
            config,
        }
    }

    pub fn config(&self) -> &GlobalConfig {
        &self.config
    }

    /// 当前规则集快照
    pub fn rules(&self) -> Arc<RuleSet> {
        self.rules.current()
    }

    /// 配置替换次数
    pub fn generation(&self) -> u64 {
        self.rules.generation()
    }

    /// 核心判定接口：按配置决定是否只考虑可见规则
    pub fn should_highlight(&self, candidate: &CandidateText) -> bool {
        self.should_highlight_fragments(candidate.fragments())
    }

    /// 判定接口（直接传入文本片段）
    pub fn should_highlight_fragments<S: AsRef<str>>(&self, fragments: &[S]) -> bool {
        let rules = self.rules.current();
        if self.config.visible_only {
            Matcher::should_highlight_visible(fragments, &*rules)
        } else {
            Matcher::should_highlight(fragments, &*rules)
        }
    }

    /// 整体替换规则集
    pub fn reload(&self, rules: RuleSet) {
        self.rules.replace(rules);
    }

    /// 从快照数据重新加载；解码失败时保留原规则集并返回错误
    pub fn reload_from_json(&self, json: &str) -> HlResult<()> {
        let rules = RuleSnapshot::from_json(json)?.into_rule_set();
        hl_debug!("从JSON快照加载规则{}条", rules.len());
        self.reload(rules);
        Ok(())
    }

    pub fn reload_from_msgpack(&self, data: &[u8]) -> HlResult<()> {
        let rules = RuleSnapshot::from_msgpack(data)?.into_rule_set();
        hl_debug!("从MessagePack快照加载规则{}条", rules.len());
        self.reload(rules);
        Ok(())
    }

    /// 导出当前规则集快照，供存储层持久化
    pub fn snapshot(&self) -> RuleSnapshot {
        RuleSnapshot::from_rule_set(&self.rules.current())
    }

    /// 以当前规则集打开编辑草稿
    pub fn edit(&self) -> ConfigDraft {
        ConfigDraft::from_rule_set(&self.rules.current(), &self.config)
    }

    /// 保存编辑草稿并立即生效，返回本次换入的规则集
    pub fn save(&self, draft: &ConfigDraft) -> Arc<RuleSet> {
        let saved = Arc::new(draft.save());
        self.rules.swap(Arc::clone(&saved));
        saved
    }
}
