//! # 统一错误处理模块
//!
//! 定义 htmlclean 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 错误分类
//! - 配置错误：致命，任何配对开始前退出
//! - 路径解析错误 / I/O 错误：只影响当前配对，记录后继续
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use std::path::PathBuf;
use thiserror::Error;

/// htmlclean 统一错误类型
#[derive(Error, Debug)]
pub enum CleanError {
    // ─────────────────────────────────────────────────────────────
    // 配置错误
    // ─────────────────────────────────────────────────────────────
    #[error("SyntaxError: Invalid regular expression: {0}")]
    InvalidPatternSyntax(String),

    #[error("SyntaxError: Invalid regular expression: /{pattern}/: {reason}")]
    InvalidRegex { pattern: String, reason: String },

    #[error("SyntaxError: Invalid flags supplied to regular expression: {flags}")]
    InvalidRegexFlags { flags: String },

    #[error("This is not directory: {path}")]
    RootNotDirectory { path: String },

    #[error("Unknown encoding: {0}")]
    UnknownEncoding(String),

    // ─────────────────────────────────────────────────────────────
    // 路径解析错误
    // ─────────────────────────────────────────────────────────────
    #[error("Non file or directory: {}", path.display())]
    NotFileOrDirectory { path: PathBuf },

    #[error("Invalid glob pattern '{pattern}': {reason}")]
    InvalidGlob { pattern: String, reason: String },

    #[error("Non directory already exists: {}", path.display())]
    NotADirectory { path: PathBuf },

    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read {path}: {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to open {}: {source}", path.display())]
    OpenError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create directory {}: {source}", path.display())]
    CreateDirError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to resolve {}: {source}", path.display())]
    ResolveError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CleanError {
    /// 是否为配置错误（需要立即以非零状态退出）
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            CleanError::InvalidPatternSyntax(_)
                | CleanError::InvalidRegex { .. }
                | CleanError::InvalidRegexFlags { .. }
                | CleanError::RootNotDirectory { .. }
                | CleanError::UnknownEncoding(_)
        )
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, CleanError>;
