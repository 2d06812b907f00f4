//! # 输入内容缓存
//!
//! 按规范化输入路径（或 STDIN）缓存清理后的内容。
//! 同一输入无论被多少个配对引用，都只读取、清理一次。
//!
//! ## 依赖关系
//! - 被 `batch/engine.rs` 使用
//! - 使用 `cleaner/`、`config/encoding.rs`、`utils/stdin.rs`

use super::InputKey;
use crate::cleaner::{CleanOptions, Cleaner};
use crate::config::Encoding;
use crate::error::{CleanError, Result};
use crate::utils::stdin;

use log::debug;
use std::collections::HashMap;
use std::fs;
use std::io::Read;

/// 一条缓存记录，创建后不再改变
#[derive(Debug)]
pub struct ContentEntry {
    /// 清理并按输出编码编码后的字节
    pub content: Vec<u8>,
    /// 日志用的可读名称
    pub label: String,
}

/// 输入内容缓存
pub struct ContentCache {
    entries: HashMap<InputKey, ContentEntry>,
    cleaner: Box<dyn Cleaner>,
    options: CleanOptions,
    encoding: Encoding,
    /// `None` 时读取进程 STDIN
    stdin: Option<Box<dyn Read>>,
}

impl ContentCache {
    pub fn new(cleaner: Box<dyn Cleaner>, options: CleanOptions, encoding: Encoding) -> Self {
        Self {
            entries: HashMap::new(),
            cleaner,
            options,
            encoding,
            stdin: None,
        }
    }

    /// 用指定的读取器代替进程 STDIN
    #[cfg(test)]
    pub fn with_stdin(mut self, reader: Box<dyn Read>) -> Self {
        self.stdin = Some(reader);
        self
    }

    /// 获取输入的清理结果，首次请求时读取并清理
    pub fn get(&mut self, key: &InputKey) -> Result<&ContentEntry> {
        if !self.entries.contains_key(key) {
            let raw = self.read_raw(key)?;
            let text = self.encoding.decode(&raw);
            let cleaned = self.cleaner.clean(&text, &self.options);
            debug!("cleaned {} ({} -> {} bytes)", key.label(), text.len(), cleaned.len());

            let entry = ContentEntry {
                content: self.encoding.encode(&cleaned),
                label: key.label(),
            };
            self.entries.insert(key.clone(), entry);
        }
        Ok(&self.entries[key])
    }

    fn read_raw(&mut self, key: &InputKey) -> Result<Vec<u8>> {
        match key {
            InputKey::Stdin => {
                let read = match self.stdin.as_mut() {
                    Some(reader) => stdin::read_to_end(reader, stdin::DEFAULT_BUF_SIZE),
                    None => stdin::read_process_stdin(),
                };
                read.map_err(|e| CleanError::ReadError {
                    path: "STDIN".to_string(),
                    source: e,
                })
            }
            InputKey::Path(path) => fs::read(path).map_err(|e| CleanError::ReadError {
                path: path.display().to_string(),
                source: e,
            }),
        }
    }
}
