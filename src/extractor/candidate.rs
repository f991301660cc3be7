//! 候选文本收集
//! 按"显示名称 → 自定义名称 → 描述行"的顺序收集一件物品的可匹配文本，
//! 空白片段和解析失败的片段直接省略，不向调用方抛错。

use std::fmt;

use super::text_component::parse_text_component;
use crate::utils::log::hl_debug;
use crate::utils::preview::{DEFAULT_PREVIEW_CHARS, preview_compact};

/// 一次匹配查询使用的有序文本片段
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateText {
    fragments: Vec<String>,
}

impl CandidateText {
    pub fn new() -> Self {
        Self::default()
    }

    /// 由名称和逐行解析结果构造，`Err` 行被省略
    pub fn from_parts<N, I, E>(name: N, lines: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = Result<String, E>>,
        E: fmt::Display,
    {
        let mut candidate = Self::new();
        candidate.push(name);
        for line in lines {
            candidate.push_parsed(line);
        }
        candidate
    }

    /// 由物品显示数据构造：显示名称、可选的自定义名称 JSON、描述行 JSON 列表
    pub fn from_display<'a, L>(name: &str, custom_name_json: Option<&str>, lore_json: L) -> Self
    where
        L: IntoIterator<Item = &'a str>,
    {
        let mut candidate = Self::new();
        candidate.push(name);
        if let Some(json) = custom_name_json {
            candidate.push_parsed(parse_text_component(json));
        }
        for json in lore_json {
            candidate.push_parsed(parse_text_component(json));
        }
        candidate
    }

    /// 追加一段文本，空白文本被忽略；返回是否实际追加
    pub fn push(&mut self, text: impl Into<String>) -> bool {
        let text = text.into();
        if text.trim().is_empty() {
            return false;
        }
        self.fragments.push(text);
        true
    }

    /// 追加一段解析结果，解析失败时省略该片段
    pub fn push_parsed<E: fmt::Display>(&mut self, parsed: Result<String, E>) -> bool {
        match parsed {
            Ok(text) => self.push(text),
            Err(e) => {
                let reason = e.to_string();
                hl_debug!("文本片段解析失败，已省略：{}", preview_compact(&reason, DEFAULT_PREVIEW_CHARS * 2));
                false
            }
        }
    }

    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn into_fragments(self) -> Vec<String> {
        self.fragments
    }
}

impl AsRef<[String]> for CandidateText {
    fn as_ref(&self) -> &[String] {
        &self.fragments
    }
}

impl<S: Into<String>> FromIterator<S> for CandidateText {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut candidate = Self::new();
        for text in iter {
            candidate.push(text);
        }
        candidate
    }
}
