//! # 缓存模块
//!
//! 一次运行内共享的两个缓存：
//! - `ContentCache`：每个输入只读取、清理一次
//! - `FileHandleCache`：每个输出只打开一次，后续写入都追加到同一句柄
//!
//! 两者由 `PairingEngine` 持有，生命周期覆盖整个运行。
//!
//! ## 依赖关系
//! - 被 `batch/` 使用
//! - 子模块: content, handles

pub mod content;
pub mod handles;

pub use content::ContentCache;
pub use handles::FileHandleCache;

use std::path::{Path, PathBuf};

/// 输入缓存键
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum InputKey {
    /// "-"
    Stdin,
    /// 规范化（解析符号链接）后的绝对路径
    Path(PathBuf),
}

impl InputKey {
    pub fn label(&self) -> String {
        match self {
            InputKey::Stdin => "STDIN".to_string(),
            InputKey::Path(path) => path.display().to_string(),
        }
    }
}

/// 输出缓存键
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OutputKey {
    /// "-"
    Stdout,
    /// 绝对路径；大小写不敏感的平台上为小写形式
    File(PathBuf),
}

impl OutputKey {
    /// 由绝对路径生成缓存键
    pub fn for_path(path: &Path) -> Self {
        if cfg!(windows) {
            OutputKey::File(PathBuf::from(path.to_string_lossy().to_lowercase()))
        } else {
            OutputKey::File(path.to_path_buf())
        }
    }
}
