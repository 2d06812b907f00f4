//! # 输出句柄缓存
//!
//! 按输出键缓存已打开的写句柄，预置 STDOUT。
//! 文件只在首次打开时截断，之后的写入都接在当前位置之后，
//! 因此多个配对写到同一输出时内容按处理顺序拼接。
//!
//! ## 依赖关系
//! - 被 `batch/mapper.rs`（打开）和 `batch/engine.rs`（写入、关闭）使用

use super::OutputKey;
use crate::error::{CleanError, Result};

use log::debug;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;

enum Sink {
    Stdout(Box<dyn Write>),
    File(File),
}

/// 一个已打开的输出
pub struct OutputHandle {
    sink: Sink,
    /// 日志用的可读名称
    pub label: String,
}

impl OutputHandle {
    fn write_all(&mut self, bytes: &[u8]) -> io::Result<()> {
        match &mut self.sink {
            Sink::Stdout(out) => out.write_all(bytes),
            Sink::File(file) => file.write_all(bytes),
        }
    }

    /// 尽力同步；终端等不支持 fsync 的目标直接忽略错误
    fn sync(&mut self) {
        match &mut self.sink {
            Sink::Stdout(out) => {
                out.flush().ok();
            }
            Sink::File(file) => {
                file.sync_all().ok();
            }
        }
    }
}

/// 输出句柄缓存
pub struct FileHandleCache {
    handles: HashMap<OutputKey, OutputHandle>,
}

impl Default for FileHandleCache {
    fn default() -> Self {
        Self::new()
    }
}

impl FileHandleCache {
    pub fn new() -> Self {
        Self::with_stdout(Box::new(io::stdout()))
    }

    /// 用指定的写入器作为 STDOUT
    pub fn with_stdout(stdout: Box<dyn Write>) -> Self {
        let mut handles = HashMap::new();
        handles.insert(
            OutputKey::Stdout,
            OutputHandle {
                sink: Sink::Stdout(stdout),
                label: "STDOUT".to_string(),
            },
        );
        Self { handles }
    }

    /// 返回已缓存的句柄；不存在时以截断方式打开 `path` 并缓存
    ///
    /// 打开失败时返回原始 I/O 错误，由调用方判断是否需要改写目标路径。
    pub fn acquire(&mut self, key: OutputKey, path: &Path) -> io::Result<&mut OutputHandle> {
        match self.handles.entry(key) {
            Entry::Occupied(entry) => {
                debug!("reusing open output {}", path.display());
                Ok(entry.into_mut())
            }
            Entry::Vacant(entry) => {
                let file = File::create(path)?;
                let label = fs::canonicalize(path)
                    .unwrap_or_else(|_| path.to_path_buf())
                    .display()
                    .to_string();
                Ok(entry.insert(OutputHandle {
                    sink: Sink::File(file),
                    label,
                }))
            }
        }
    }

    pub fn label(&self, key: &OutputKey) -> Option<&str> {
        self.handles.get(key).map(|h| h.label.as_str())
    }

    /// 追加写入并尽力同步
    pub fn write(&mut self, key: &OutputKey, bytes: &[u8]) -> Result<()> {
        let handle = self
            .handles
            .get_mut(key)
            .ok_or_else(|| CleanError::WriteError {
                path: format!("{:?}", key),
                source: io::Error::new(io::ErrorKind::NotFound, "output is not open"),
            })?;
        handle
            .write_all(bytes)
            .map_err(|e| CleanError::WriteError {
                path: handle.label.clone(),
                source: e,
            })?;
        handle.sync();
        Ok(())
    }

    /// 关闭除 STDOUT 外的所有句柄，只生效一次
    pub fn close_all(&mut self) {
        let keys: Vec<OutputKey> = self
            .handles
            .keys()
            .filter(|k| **k != OutputKey::Stdout)
            .cloned()
            .collect();
        for key in keys {
            // File 在 drop 时关闭，关闭错误被忽略
            if let Some(handle) = self.handles.remove(&key) {
                debug!("closing {}", handle.label);
            }
        }
        if let Some(stdout) = self.handles.get_mut(&OutputKey::Stdout) {
            stdout.sync();
        }
    }
}

impl Drop for FileHandleCache {
    fn drop(&mut self) {
        self.close_all();
    }
}
