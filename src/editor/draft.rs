//! 配置编辑草稿
//! 编辑界面只操作可变草稿，点击"完成"时才通过 `save` 物化为不可变的 RuleSet。
//! 每条草稿至少保留一个主关键字输入框，主输入框不可删除。

use crate::config::GlobalConfig;
use crate::rule::{MatchMode, Rule, RuleSet, RuleStore};
use crate::utils::log::{hl_debug, hl_warn};

/// 单条规则的编辑草稿，关键字未清洗
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleDraft {
    keyword_fields: Vec<String>,
    visible: bool,
    mode: MatchMode,
}

impl RuleDraft {
    /// 空白草稿：一个空的主输入框，默认可见
    pub fn blank(mode: MatchMode) -> Self {
        Self {
            keyword_fields: vec![String::new()],
            visible: true,
            mode,
        }
    }

    pub fn from_rule(rule: &Rule) -> Self {
        let mut keyword_fields = rule.keywords().to_vec();
        if keyword_fields.is_empty() {
            keyword_fields.push(String::new());
        }
        Self {
            keyword_fields,
            visible: rule.is_visible(),
            mode: rule.mode(),
        }
    }

    pub fn keyword_fields(&self) -> &[String] {
        &self.keyword_fields
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// 所有输入框都为空白
    pub fn is_blank(&self) -> bool {
        self.keyword_fields.iter().all(|field| field.trim().is_empty())
    }

    fn to_rule(&self) -> Rule {
        RuleStore::make_rule_with_mode(&self.keyword_fields, self.visible, self.mode)
    }
}

/// 整个配置界面的编辑草稿
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigDraft {
    entries: Vec<RuleDraft>,
    max_keyword_chars: usize,
    default_mode: MatchMode,
}

impl ConfigDraft {
    /// 由当前规则集生成草稿；规则集为空时给出一条空白草稿
    pub fn from_rule_set(rules: &RuleSet, config: &GlobalConfig) -> Self {
        let mut draft = Self {
            entries: rules.iter().map(RuleDraft::from_rule).collect(),
            max_keyword_chars: config.max_keyword_chars,
            default_mode: config.default_mode,
        };
        if draft.entries.is_empty() {
            draft.add_entry();
        }
        draft
    }

    pub fn entries(&self) -> &[RuleDraft] {
        &self.entries
    }

    pub fn entry(&self, entry: usize) -> Option<&RuleDraft> {
        self.entries.get(entry)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 新增空白规则，返回其下标
    pub fn add_entry(&mut self) -> usize {
        self.entries.push(RuleDraft::blank(self.default_mode));
        self.entries.len() - 1
    }

    pub fn remove_entry(&mut self, entry: usize) -> Option<RuleDraft> {
        if entry >= self.entries.len() {
            hl_warn!("删除规则失败：下标{}越界（共{}条）", entry, self.entries.len());
            return None;
        }
        Some(self.entries.remove(entry))
    }

    /// 为规则追加一个空白关键字输入框，返回新输入框下标
    pub fn add_keyword(&mut self, entry: usize) -> Option<usize> {
        let draft = self.entries.get_mut(entry)?;
        draft.keyword_fields.push(String::new());
        Some(draft.keyword_fields.len() - 1)
    }

    /// 删除附加关键字输入框；主输入框（下标 0）不可删除
    pub fn remove_keyword(&mut self, entry: usize, field: usize) -> bool {
        let Some(draft) = self.entries.get_mut(entry) else {
            return false;
        };
        if field == 0 || field >= draft.keyword_fields.len() {
            return false;
        }
        draft.keyword_fields.remove(field);
        true
    }

    /// 修改关键字输入框内容，超长部分按字符截断
    pub fn set_keyword(&mut self, entry: usize, field: usize, text: &str) -> bool {
        let max_chars = self.max_keyword_chars;
        let Some(slot) = self
            .entries
            .get_mut(entry)
            .and_then(|draft| draft.keyword_fields.get_mut(field))
        else {
            return false;
        };

        *slot = truncate_chars(text, max_chars);
        true
    }

    /// 切换可见开关，返回切换后的值
    pub fn toggle_visible(&mut self, entry: usize) -> Option<bool> {
        let draft = self.entries.get_mut(entry)?;
        draft.visible = !draft.visible;
        Some(draft.visible)
    }

    pub fn set_mode(&mut self, entry: usize, mode: MatchMode) -> bool {
        match self.entries.get_mut(entry) {
            Some(draft) => {
                draft.mode = mode;
                true
            }
            None => false,
        }
    }

    /// 物化为规则集：逐条清洗，丢弃关键字全空的规则
    pub fn save(&self) -> RuleSet {
        let rules = RuleStore::make_rule_set(self.entries.iter().map(RuleDraft::to_rule));
        hl_debug!("配置草稿保存完成：草稿{}条，生效规则{}条", self.entries.len(), rules.len());
        rules
    }
}

/// 按字符数截断，0 表示不限制
fn truncate_chars(text: &str, max_chars: usize) -> String {
    if max_chars == 0 {
        return text.to_string();
    }
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => text[..byte_idx].to_string(),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigManager;

    fn draft_of(rules: Vec<Rule>) -> ConfigDraft {
        ConfigDraft::from_rule_set(&RuleSet::new(rules), &ConfigManager::get_default())
    }

    #[test]
    fn test_empty_rule_set_gives_one_blank_entry() {
        let draft = draft_of(vec![]);
        assert_eq!(draft.len(), 1);
        assert_eq!(draft.entries()[0].keyword_fields(), [String::new()]);
        assert!(draft.entries()[0].is_visible());
        assert!(draft.save().is_empty());
    }

    #[test]
    fn test_existing_rules_round_trip_through_draft() {
        let rules = vec![
            RuleStore::make_rule(["苹果", "金"], true),
            RuleStore::make_rule_with_mode(["红", "蓝"], false, MatchMode::Any),
        ];
        let saved = draft_of(rules.clone()).save();
        assert_eq!(saved, RuleSet::new(rules));
    }

    #[test]
    fn test_edit_then_save() {
        // 测试场景：新增规则 → 填写两个关键字（含空白）→ 隐藏 → 保存
        let mut draft = draft_of(vec![RuleStore::make_rule(["红"], true)]);
        let entry = draft.add_entry();
        assert!(draft.set_keyword(entry, 0, "  传说 "));
        let field = draft.add_keyword(entry).unwrap();
        assert!(draft.set_keyword(entry, field, "精炼"));
        assert_eq!(draft.toggle_visible(entry), Some(false));

        let rules = draft.save();
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[1].keywords(), ["传说".to_string(), "精炼".to_string()]);
        assert!(!rules[1].is_visible());
    }

    #[test]
    fn test_primary_keyword_field_cannot_be_removed() {
        let mut draft = draft_of(vec![RuleStore::make_rule(["苹果", "金"], true)]);
        assert!(!draft.remove_keyword(0, 0));
        assert!(draft.remove_keyword(0, 1));
        assert!(!draft.remove_keyword(0, 1));
        assert_eq!(draft.entries()[0].keyword_fields(), ["苹果".to_string()]);
    }

    #[test]
    fn test_blank_entries_are_dropped_on_save() {
        let mut draft = draft_of(vec![RuleStore::make_rule(["红"], true)]);
        let entry = draft.add_entry();
        draft.add_keyword(entry);
        assert!(draft.entries()[entry].is_blank());
        assert_eq!(draft.save().len(), 1);
    }

    #[test]
    fn test_keyword_is_truncated_by_chars() {
        let config = ConfigManager::custom().max_keyword_chars(3).build();
        let mut draft = ConfigDraft::from_rule_set(&RuleSet::default(), &config);
        assert!(draft.set_keyword(0, 0, "传说之剑"));
        assert_eq!(draft.entries()[0].keyword_fields()[0], "传说之");
    }

    #[test]
    fn test_remove_middle_entry() {
        // 测试场景：三条规则删除中间一条，返回被删草稿，其余顺序不变，保存结果不含该规则
        let mut draft = draft_of(vec![
            RuleStore::make_rule(["红"], true),
            RuleStore::make_rule_with_mode(["苹果", "金"], false, MatchMode::Any),
            RuleStore::make_rule(["蓝"], true),
        ]);

        let removed = draft.remove_entry(1).unwrap();
        assert_eq!(removed.keyword_fields(), ["苹果".to_string(), "金".to_string()]);
        assert!(!removed.is_visible());
        assert_eq!(removed.mode(), MatchMode::Any);

        assert_eq!(draft.len(), 2);
        assert_eq!(draft.entries()[0].keyword_fields(), ["红".to_string()]);
        assert_eq!(draft.entries()[1].keyword_fields(), ["蓝".to_string()]);

        let saved = draft.save();
        assert_eq!(
            saved,
            RuleSet::new(vec![RuleStore::make_rule(["红"], true), RuleStore::make_rule(["蓝"], true)])
        );
    }

    #[test]
    fn test_out_of_range_edits_are_ignored() {
        let mut draft = draft_of(vec![]);
        assert!(draft.remove_entry(5).is_none());
        assert!(draft.add_keyword(5).is_none());
        assert!(!draft.set_keyword(0, 9, "金"));
        assert!(draft.toggle_visible(5).is_none());
        assert!(!draft.set_mode(5, MatchMode::Any));
        assert_eq!(draft.len(), 1);
    }

    #[test]
    fn test_new_entries_use_configured_mode() {
        let config = ConfigManager::custom().default_mode(MatchMode::Any).build();
        let mut draft = ConfigDraft::from_rule_set(&RuleSet::default(), &config);
        assert_eq!(draft.entries()[0].mode(), MatchMode::Any);
        assert!(draft.set_mode(0, MatchMode::All));
        assert_eq!(draft.entry(0).map(RuleDraft::mode), Some(MatchMode::All));
    }
}
