//! 日志预览格式化
//! 物品描述文本可能很长，日志中只输出折叠空白后的截断预览

use std::fmt::{self, Write};

/// 日志中单条文本的默认预览长度（字符数）
pub const DEFAULT_PREVIEW_CHARS: usize = 32;

/// 日志预览：去掉首尾空白，词间空白折叠为单个空格，超过 `max_chars` 个字符时以 `…` 截断
///
/// 返回值只在格式化时遍历原文本。
pub fn preview_compact(text: &str, max_chars: usize) -> impl fmt::Display + '_ {
    Preview { text, max_chars }
}

struct Preview<'a> {
    text: &'a str,
    max_chars: usize,
}

impl fmt::Display for Preview<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut budget = self.max_chars;
        for (i, word) in self.text.split_whitespace().enumerate() {
            if i > 0 {
                if budget == 0 {
                    return f.write_str("…");
                }
                f.write_char(' ')?;
                budget -= 1;
            }
            match word.char_indices().nth(budget) {
                Some((cut, _)) => {
                    f.write_str(&word[..cut])?;
                    return f.write_str("…");
                }
                None => {
                    f.write_str(word)?;
                    budget -= word.chars().count();
                }
            }
        }
        Ok(())
    }
}

/// 关键字列表日志格式化
/// 格式：[kw1, kw2, ...] (total: N)，空列表输出 [empty]
pub fn preview_keywords(keywords: &[String]) -> String {
    if keywords.is_empty() {
        return "[empty]".to_string();
    }

    let mut out = String::from("[");
    for (i, keyword) in keywords.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        let _ = write!(out, "{}", preview_compact(keyword, DEFAULT_PREVIEW_CHARS));
    }
    let _ = write!(out, "] (total: {})", keywords.len());
    out
}
