//! 全局配置管理,存储所有可配置项

use serde::{Deserialize, Serialize};

use crate::rule::MatchMode;

/// 编辑器单个关键字输入框的默认最大字符数
pub const DEFAULT_MAX_KEYWORD_CHARS: usize = 64;

/// 全局配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalConfig {
    // 草稿中单个关键字的最大字符数（按字符计，非字节）
    pub max_keyword_chars: usize,
    // 新建规则的默认匹配模式
    pub default_mode: MatchMode,
    // 是否只让可见规则参与高亮判定
    pub visible_only: bool,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            max_keyword_chars: DEFAULT_MAX_KEYWORD_CHARS,
            default_mode: MatchMode::All,
            visible_only: false,
        }
    }
}

/// 配置管理器
pub struct ConfigManager;

impl ConfigManager {
    /// 获取默认配置
    pub fn get_default() -> GlobalConfig {
        GlobalConfig::default()
    }

    /// 自定义配置
    pub fn custom() -> CustomConfigBuilder {
        CustomConfigBuilder::new()
    }
}

/// 配置构建器（便于自定义配置）
#[derive(Debug, Clone, Default)]
pub struct CustomConfigBuilder {
    config: GlobalConfig,
}

impl CustomConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: GlobalConfig::default(),
        }
    }

    /// 0 表示不限制长度
    pub fn max_keyword_chars(mut self, max: usize) -> Self {
        self.config.max_keyword_chars = max;
        self
    }

    pub fn default_mode(mut self, mode: MatchMode) -> Self {
        self.config.default_mode = mode;
        self
    }

    pub fn visible_only(mut self, visible_only: bool) -> Self {
        self.config.visible_only = visible_only;
        self
    }

    pub fn build(self) -> GlobalConfig {
        self.config
    }
}
