//! # 文件系统工具
//!
//! `mkdir -p` 语义的目录创建，以及路径规范化辅助函数。
//!
//! ## 依赖关系
//! - 被 `batch/mapper.rs`、`batch/resolver.rs` 使用
//! - 无外部模块依赖

use crate::error::{CleanError, Result};
use std::env;
use std::ffi::OsStr;
use std::fs;
use std::path::{Component, Path, PathBuf};

/// 逐级创建缺失的目录
///
/// 从根到叶依次处理每个前缀，`..` 与相对段先解析为绝对路径。
/// 已存在但不是目录的路径段视为致命错误。
pub fn mkdir_parents(dir: &Path) -> Result<()> {
    let mut prefix = PathBuf::new();
    for component in dir.components() {
        prefix.push(component.as_os_str());
        if matches!(component, Component::Prefix(_)) {
            continue;
        }
        let resolved = absolutize(&prefix)?;
        match fs::metadata(&resolved) {
            Ok(meta) if meta.is_dir() => {}
            Ok(_) => return Err(CleanError::NotADirectory { path: resolved }),
            Err(_) => fs::create_dir(&resolved).map_err(|e| CleanError::CreateDirError {
                path: resolved.clone(),
                source: e,
            })?,
        }
    }
    Ok(())
}

/// 基于当前目录得到绝对路径，并在词法上消去 `.` 与 `..`（不解析符号链接）
pub fn absolutize(path: &Path) -> Result<PathBuf> {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        let cwd = env::current_dir().map_err(|e| CleanError::ResolveError {
            path: path.to_path_buf(),
            source: e,
        })?;
        cwd.join(path)
    };

    let mut normal = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normal.pop();
            }
            other => normal.push(other.as_os_str()),
        }
    }
    Ok(normal)
}

/// 解析符号链接后的绝对路径
pub fn canonical(path: &Path) -> Result<PathBuf> {
    fs::canonicalize(path).map_err(|e| CleanError::ResolveError {
        path: path.to_path_buf(),
        source: e,
    })
}

/// `<dir>/<stem>.min<ext>`
pub fn min_path(path: &Path) -> PathBuf {
    let mut name = path.file_stem().map(OsStr::to_os_string).unwrap_or_default();
    name.push(".min");
    if let Some(ext) = path.extension() {
        name.push(".");
        name.push(ext);
    }
    path.with_file_name(name)
}
