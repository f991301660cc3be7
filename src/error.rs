//! 全局错误类型定义
//! 规则匹配核心从不返回错误，仅快照编解码与文本组件解析等外围操作使用

use thiserror::Error;
use serde_json::Error as SerdeJsonError;

#[derive(Error, Debug)]
pub enum HighlightError {
    // 快照相关错误
    #[error("JSON解析失败：{0}")]
    JsonError(#[from] SerdeJsonError),
    #[error("MessagePack序列化/反序列化失败：{0}")]
    MsgPackError(String),
    #[error("不支持的规则快照版本：{0}")]
    UnsupportedSnapshotVersion(u32),

    // 文本提取相关错误
    #[error("文本组件解析失败：{0}")]
    TextParseError(String),
}

// 全局Result类型
pub type HlResult<T> = Result<T, HighlightError>;
