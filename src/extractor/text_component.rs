//! JSON 文本组件解析
//! 物品自定义名称与描述行以 JSON 文本组件形式存储，这里把它展平成纯文本

use serde_json::Value;

use crate::error::{HighlightError, HlResult};

/// 把一个 JSON 文本组件展平为纯文本
///
/// 支持的形态：
/// - 字符串：`"传说之剑"`
/// - 对象：`{"text": "...", "extra": [...]}`，无 `text` 时回退到 `translate` 键
/// - 数组：各元素依次拼接
/// - 数字/布尔：按字面值输出
pub fn parse_text_component(json: &str) -> HlResult<String> {
    let value: Value = serde_json::from_str(json)?;
    let mut out = String::new();
    flatten(&value, &mut out)?;
    Ok(out)
}

fn flatten(value: &Value, out: &mut String) -> HlResult<()> {
    match value {
        Value::String(s) => out.push_str(s),
        Value::Number(n) => out.push_str(&n.to_string()),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Array(items) => {
            for item in items {
                flatten(item, out)?;
            }
        }
        Value::Object(map) => {
            match (map.get("text"), map.get("translate")) {
                (Some(Value::String(text)), _) => out.push_str(text),
                (Some(other), _) => {
                    return Err(HighlightError::TextParseError(format!("text 字段类型无效：{}", other)));
                }
                (None, Some(Value::String(key))) => out.push_str(key),
                _ => {}
            }

            match map.get("extra") {
                Some(Value::Array(extra)) => {
                    for item in extra {
                        flatten(item, out)?;
                    }
                }
                Some(other) => {
                    return Err(HighlightError::TextParseError(format!("extra 字段必须为数组：{}", other)));
                }
                None => {}
            }
        }
        Value::Null => {
            return Err(HighlightError::TextParseError("文本组件为 null".to_string()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_string_component() {
        assert_eq!(parse_text_component(r#""传说之剑""#).unwrap(), "传说之剑");
    }

    #[test]
    fn test_nested_extra_components() {
        // 测试场景：带样式的描述行，文本分散在 extra 中
        let json = r#"{"text":"","extra":[{"text":"已精炼 ","color":"gold"},{"text":"+5","bold":true}]}"#;
        assert_eq!(parse_text_component(json).unwrap(), "已精炼 +5");
    }

    #[test]
    fn test_array_and_primitive_components() {
        assert_eq!(parse_text_component(r#"["锋利 ", 5, {"text":"级"}]"#).unwrap(), "锋利 5级");
    }

    #[test]
    fn test_translate_fallback() {
        let json = r#"{"translate":"item.minecraft.golden_apple"}"#;
        assert_eq!(parse_text_component(json).unwrap(), "item.minecraft.golden_apple");
    }

    #[test]
    fn test_invalid_components_are_errors() {
        assert!(matches!(parse_text_component("{not json"), Err(HighlightError::JsonError(_))));
        assert!(matches!(parse_text_component("null"), Err(HighlightError::TextParseError(_))));
        assert!(matches!(
            parse_text_component(r#"{"text":"a","extra":"b"}"#),
            Err(HighlightError::TextParseError(_))
        ));
    }
}
