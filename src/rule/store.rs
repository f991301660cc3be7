//! 规则构造与清洗
//! 把来自配置界面/存储层的原始关键字输入清洗成干净的 Rule

use super::model::{MatchMode, Rule, RuleSet};
use crate::utils::log::hl_debug;
use crate::utils::preview_keywords;

/// 可作为原始关键字输入的类型，`None` 表示缺失项
pub trait RawKeyword {
    fn as_raw(&self) -> Option<&str>;
}

impl RawKeyword for str {
    fn as_raw(&self) -> Option<&str> {
        Some(self)
    }
}

impl RawKeyword for String {
    fn as_raw(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl<T: RawKeyword> RawKeyword for Option<T> {
    fn as_raw(&self) -> Option<&str> {
        self.as_ref().and_then(RawKeyword::as_raw)
    }
}

impl<T: RawKeyword + ?Sized> RawKeyword for &T {
    fn as_raw(&self) -> Option<&str> {
        (**self).as_raw()
    }
}

/// 规则仓库：纯函数集合，无内部状态
pub struct RuleStore;

impl RuleStore {
    /// 清洗关键字：跳过缺失项、去除首尾空白、丢弃空串，保留原有顺序
    ///
    /// 返回新分配的列表，与调用方的输入没有任何共享。
    pub fn sanitize<I>(raw_keywords: I) -> Vec<String>
    where
        I: IntoIterator,
        I::Item: RawKeyword,
    {
        raw_keywords
            .into_iter()
            .filter_map(|keyword| {
                let trimmed = keyword.as_raw()?.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            })
            .collect()
    }

    /// 构造规则（默认"全部匹配"模式），非法输入退化为空关键字规则，永不失败
    pub fn make_rule<I>(raw_keywords: I, visible: bool) -> Rule
    where
        I: IntoIterator,
        I::Item: RawKeyword,
    {
        Self::make_rule_with_mode(raw_keywords, visible, MatchMode::All)
    }

    /// 构造指定匹配模式的规则
    pub fn make_rule_with_mode<I>(raw_keywords: I, visible: bool, mode: MatchMode) -> Rule
    where
        I: IntoIterator,
        I::Item: RawKeyword,
    {
        Rule::from_sanitized(Self::sanitize(raw_keywords), visible, mode)
    }

    /// 复制规则，副本拥有独立的关键字存储
    pub fn copy_rule(rule: &Rule) -> Rule {
        Rule::from_sanitized(rule.keywords().to_vec(), rule.is_visible(), rule.mode())
    }

    /// 组装规则集，丢弃无关键字的规则
    pub fn make_rule_set<I>(rules: I) -> RuleSet
    where
        I: IntoIterator<Item = Rule>,
    {
        let mut dropped = 0usize;
        let kept: Vec<Rule> = rules
            .into_iter()
            .filter(|rule| {
                if rule.is_empty() {
                    dropped += 1;
                    false
                } else {
                    true
                }
            })
            .collect();

        if dropped > 0 {
            hl_debug!("丢弃{}条无关键字规则，保留{}条", dropped, kept.len());
        }
        for rule in &kept {
            hl_debug!("载入规则：{} 模式={} 可见={}", preview_keywords(rule.keywords()), rule.mode(), rule.is_visible());
        }

        RuleSet::new(kept)
    }
}
