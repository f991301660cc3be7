//! 日志宏封装
//! tracing 是可选依赖，调用点不能直接 `use tracing::debug`，否则关闭 `logging` 特性后无法编译。
//! 开启特性时原样转发到 tracing，关闭时只做参数类型检查，不产生任何输出。

#[cfg(feature = "logging")]
macro_rules! hl_trace {
    ($($arg:tt)*) => { ::tracing::trace!($($arg)*) };
}

#[cfg(feature = "logging")]
macro_rules! hl_debug {
    ($($arg:tt)*) => { ::tracing::debug!($($arg)*) };
}

#[cfg(feature = "logging")]
macro_rules! hl_warn {
    ($($arg:tt)*) => { ::tracing::warn!($($arg)*) };
}

#[cfg(not(feature = "logging"))]
macro_rules! hl_trace {
    ($($arg:tt)*) => {{ if false { let _ = format_args!($($arg)*); } }};
}

#[cfg(not(feature = "logging"))]
macro_rules! hl_debug {
    ($($arg:tt)*) => {{ if false { let _ = format_args!($($arg)*); } }};
}

#[cfg(not(feature = "logging"))]
macro_rules! hl_warn {
    ($($arg:tt)*) => {{ if false { let _ = format_args!($($arg)*); } }};
}

pub(crate) use {hl_debug, hl_trace, hl_warn};
