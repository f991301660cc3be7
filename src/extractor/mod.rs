//! 文本提取模块：把物品显示数据整理成匹配用的有序文本片段
pub mod candidate;
pub mod text_component;

pub use self::candidate::CandidateText;
pub use self::text_component::parse_text_component;
