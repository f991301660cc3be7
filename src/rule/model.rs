//! 规则数据模型定义
//! 仅存储规则数据，无任何业务逻辑；构造统一走 `RuleStore`，保证关键字已清洗

use std::fmt;
use std::ops::Index;
use std::sync::Arc;
use serde::{Deserialize, Serialize};

/// 单条规则内多个关键字的组合方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// 全部关键字都出现才命中（默认）
    #[default]
    All,
    /// 任意一个关键字出现即命中
    Any,
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchMode::All => f.write_str("all"),
            MatchMode::Any => f.write_str("any"),
        }
    }
}

/// 单条高亮规则：一组关键字 + 可见开关 + 匹配模式
///
/// 构造后不可变。关键字为空的规则结构上合法，但永远不会命中。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rule {
    keywords: Vec<String>,
    visible: bool,
    mode: MatchMode,
}

impl Rule {
    /// 调用方须保证 keywords 已经过清洗
    pub(crate) fn from_sanitized(keywords: Vec<String>, visible: bool, mode: MatchMode) -> Self {
        Self { keywords, visible, mode }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// 无关键字的规则永不命中
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}

// ======== 为 Rule 实现 Display trait（用于日志输出） ========
impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joiner = match self.mode {
            MatchMode::All => " & ",
            MatchMode::Any => " | ",
        };
        write!(f, "{}", self.keywords.join(joiner))?;
        if !self.visible {
            f.write_str(" (hidden)")?;
        }
        Ok(())
    }
}

/// 有序规则集合，规则之间为"或"关系
///
/// 底层为 `Arc<[Rule]>`，克隆只增加引用计数；集合本身不可变，
/// 宿主重新加载配置时整体替换为新的 RuleSet。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    rules: Arc<[Rule]>,
}

impl RuleSet {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self {
            rules: Arc::from(rules),
        }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Rule> {
        self.rules.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    pub fn as_slice(&self) -> &[Rule] {
        &self.rules
    }

    /// 仅可见规则（保留原始顺序）
    pub fn visible_rules(&self) -> impl Iterator<Item = &Rule> + '_ {
        self.rules.iter().filter(|rule| rule.is_visible())
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl FromIterator<Rule> for RuleSet {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Index<usize> for RuleSet {
    type Output = Rule;

    fn index(&self, index: usize) -> &Rule {
        &self.rules[index]
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_rule_types_are_thread_safe() {
        // 多个渲染线程可并发只读同一 RuleSet
        assert_send_sync::<Rule>();
        assert_send_sync::<RuleSet>();
    }

    #[test]
    fn test_rule_set_clone_shares_storage() {
        let set = RuleSet::new(vec![Rule::from_sanitized(vec!["金".to_string()], true, MatchMode::All)]);
        let cloned = set.clone();
        assert!(Arc::ptr_eq(&set.rules, &cloned.rules));
        assert_eq!(set, cloned);
    }

    #[test]
    fn test_visible_rules_keeps_order() {
        let set: RuleSet = vec![
            Rule::from_sanitized(vec!["红".to_string()], true, MatchMode::All),
            Rule::from_sanitized(vec!["绿".to_string()], false, MatchMode::All),
            Rule::from_sanitized(vec!["蓝".to_string()], true, MatchMode::Any),
        ]
        .into_iter()
        .collect();

        let visible: Vec<&str> = set.visible_rules().map(|r| r.keywords()[0].as_str()).collect();
        assert_eq!(visible, vec!["红", "蓝"]);
        assert_eq!(set.len(), 3);
        assert_eq!(set[1].keywords(), ["绿".to_string()]);
    }

    #[test]
    fn test_rule_display() {
        let rule = Rule::from_sanitized(vec!["苹果".to_string(), "金".to_string()], false, MatchMode::All);
        assert_eq!(rule.to_string(), "苹果 & 金 (hidden)");
        let rule = Rule::from_sanitized(vec!["红".to_string(), "蓝".to_string()], true, MatchMode::Any);
        assert_eq!(rule.to_string(), "红 | 蓝");
    }
}
