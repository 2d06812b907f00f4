//! # 输出路径映射
//!
//! 为已解析的输入计算输出目标，并通过 `FileHandleCache` 打开。
//!
//! ## 规则
//! - 未指定输出：`<dir>/<stem>.min<ext>`；STDIN 对应 STDOUT
//! - 目标是已存在目录时，把输入移到该目录下重试一次：
//!   输入位于根目录内则保留相对结构（并创建中间目录），否则只取文件名
//! - 其他打开失败按 I/O 错误返回
//!
//! ## 依赖关系
//! - 被 `batch/engine.rs` 使用
//! - 使用 `cache/handles.rs`、`utils/fs.rs`

use crate::cache::{FileHandleCache, InputKey, OutputKey};
use crate::error::{CleanError, Result};
use crate::utils::fs::{absolutize, min_path, mkdir_parents};

use log::debug;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// 输出路径映射器
pub struct OutputMapper;

impl OutputMapper {
    /// 计算并打开输出，返回其缓存键
    pub fn map(
        input: &InputKey,
        output: Option<&str>,
        root: Option<&Path>,
        handles: &mut FileHandleCache,
    ) -> Result<OutputKey> {
        let mut target = match (output.filter(|o| !o.is_empty()), input) {
            (Some("-"), _) | (None, InputKey::Stdin) => return Ok(OutputKey::Stdout),
            (Some(explicit), _) => PathBuf::from(explicit),
            (None, InputKey::Path(path)) => min_path(path),
        };

        let mut relocatable = true;
        loop {
            let normal = absolutize(&target)?;
            let key = OutputKey::for_path(&normal);
            let err = match handles.acquire(key.clone(), &normal) {
                Ok(_) => return Ok(key),
                Err(e) => e,
            };

            if !(relocatable && normal.is_dir()) {
                return Err(CleanError::OpenError {
                    path: normal,
                    source: err,
                });
            }
            match input {
                InputKey::Stdin => return Ok(OutputKey::Stdout),
                InputKey::Path(path) => {
                    target = Self::path_in_dir(path, &normal, root)?;
                    debug!("{} is a directory, writing {}", normal.display(), target.display());
                    relocatable = false;
                }
            }
        }
    }

    /// 把输入文件放到输出目录 `dir` 下
    pub fn path_in_dir(input: &Path, dir: &Path, root: Option<&Path>) -> Result<PathBuf> {
        match root.and_then(|r| strip_root(input, r)) {
            Some(relative) if !relative.as_os_str().is_empty() => {
                let dest = dir.join(relative);
                if let Some(parent) = dest.parent() {
                    mkdir_parents(parent)?;
                }
                Ok(dest)
            }
            _ => Ok(dir.join(input.file_name().unwrap_or_else(|| input.as_os_str()))),
        }
    }
}

/// 输入位于 `root` 内时返回相对部分（Windows 上忽略大小写）
fn strip_root(path: &Path, root: &Path) -> Option<PathBuf> {
    let mut components = path.components();
    for root_component in root.components() {
        let next = components.next()?;
        if !same_component(next.as_os_str(), root_component.as_os_str()) {
            return None;
        }
    }
    Some(components.as_path().to_path_buf())
}

fn same_component(a: &OsStr, b: &OsStr) -> bool {
    if cfg!(windows) {
        a.to_string_lossy().to_lowercase() == b.to_string_lossy().to_lowercase()
    } else {
        a == b
    }
}
