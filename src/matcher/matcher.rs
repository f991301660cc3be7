//! 高亮匹配核心
//!
//! 匹配规则：
//! 1）规则之间为"或"：任意一条规则命中即高亮，命中后不再检查后续规则；
//! 2）`MatchMode::All` 规则内关键字为"与"：每个关键字都要出现在某一段文本中（可以是不同段）；
//! 3）`MatchMode::Any` 规则内关键字为"或"：任意关键字出现即命中；
//! 4）关键字按子串匹配，区分大小写，匹配时不做任何归一化。

use crate::rule::{MatchMode, Rule, RuleSet};
use crate::utils::log::hl_trace;
use crate::utils::preview::{DEFAULT_PREVIEW_CHARS, preview_compact, preview_keywords};

/// 高亮匹配器（无状态）
pub struct Matcher;

impl Matcher {
    /// 判断候选文本是否需要高亮
    ///
    /// 文本为空、规则集缺失或为空时直接返回 false。
    pub fn should_highlight<'a, S: AsRef<str>>(
        fragments: &[S],
        rules: impl Into<Option<&'a RuleSet>>,
    ) -> bool {
        Self::first_match(fragments, rules).is_some()
    }

    /// 同 `should_highlight`，但只考虑可见规则
    pub fn should_highlight_visible<'a, S: AsRef<str>>(
        fragments: &[S],
        rules: impl Into<Option<&'a RuleSet>>,
    ) -> bool {
        let Some(rules) = rules.into() else {
            return false;
        };
        let visible = rules.iter().enumerate().filter(|(_, rule)| rule.is_visible());
        Self::find(fragments, visible).is_some()
    }

    /// 返回第一条命中规则在规则集中的下标
    pub fn first_match<'a, S: AsRef<str>>(
        fragments: &[S],
        rules: impl Into<Option<&'a RuleSet>>,
    ) -> Option<usize> {
        let rules = rules.into()?;
        Self::find(fragments, rules.iter().enumerate())
    }

    /// 判断单条规则是否命中
    pub fn rule_matches<S: AsRef<str>>(rule: &Rule, fragments: &[S]) -> bool {
        let keywords = rule.keywords();
        if keywords.is_empty() {
            return false;
        }

        match rule.mode() {
            MatchMode::All => keywords.iter().all(|keyword| Self::contains_keyword(fragments, keyword)),
            MatchMode::Any => keywords.iter().any(|keyword| Self::contains_keyword(fragments, keyword)),
        }
    }

    /// 按顺序查找第一条命中规则，返回其下标
    fn find<'r, S, I>(fragments: &[S], rules: I) -> Option<usize>
    where
        S: AsRef<str>,
        I: Iterator<Item = (usize, &'r Rule)>,
    {
        if fragments.is_empty() {
            return None;
        }

        let mut rules = rules;
        let (index, matched) = rules.find(|(_, rule)| Self::rule_matches(rule, fragments))?;
        hl_trace!(
            "高亮命中：规则#{}={}，首段文本={}",
            index,
            preview_keywords(matched.keywords()),
            preview_compact(fragments[0].as_ref(), DEFAULT_PREVIEW_CHARS)
        );
        Some(index)
    }

    /// 关键字是否出现在任意一段文本中；空白关键字永不命中，
    /// 非空白关键字也不会出现在空白片段中
    fn contains_keyword<S: AsRef<str>>(fragments: &[S], keyword: &str) -> bool {
        if keyword.trim().is_empty() {
            return false;
        }
        fragments.iter().any(|text| {
            let text: &str = text.as_ref();
            text.contains(keyword)
        })
    }
}
