//! # 运行配置
//!
//! 把解析后的命令行参数校验并整理为 `RunConfig`。
//! 所有配置错误都在配对开始前暴露。
//!
//! ## 依赖关系
//! - 被 `commands/mod.rs` 使用
//! - 使用 `cli/` 的参数定义
//! - 子模块: pattern, encoding

pub mod encoding;
pub mod pattern;

pub use encoding::Encoding;

use crate::cleaner::CleanOptions;
use crate::cli::Cli;
use crate::error::{CleanError, Result};
use std::fs;
use std::path::PathBuf;

/// 校验后的运行配置
#[derive(Debug)]
pub struct RunConfig {
    /// 输入列表（已合并位置参数）
    pub inputs: Vec<String>,
    /// 输出列表，按下标与输入配对
    pub outputs: Vec<String>,
    /// 规范化后的根目录
    pub root: Option<PathBuf>,
    /// 传给 cleaner 的 protect/unprotect 规则
    pub clean_options: CleanOptions,
    pub encoding: Encoding,
}

impl RunConfig {
    /// 从 CLI 参数构建并校验配置
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let protect = pattern::parse_patterns(&cli.protect)?;
        let unprotect = pattern::parse_patterns(&cli.unprotect)?;
        let encoding: Encoding = cli.encoding.parse()?;

        let root = match &cli.root {
            Some(dir) if dir.is_dir() => {
                Some(fs::canonicalize(dir).map_err(|_| CleanError::RootNotDirectory {
                    path: dir.display().to_string(),
                })?)
            }
            Some(dir) => {
                return Err(CleanError::RootNotDirectory {
                    path: dir.display().to_string(),
                })
            }
            None => None,
        };

        Ok(RunConfig {
            inputs: cli.input_list(),
            outputs: cli.output.clone(),
            root,
            clean_options: CleanOptions { protect, unprotect },
            encoding,
        })
    }

    /// 按顺序返回 (输入, 输出) 参数对；缺失的输出为 `None`
    pub fn arguments(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.inputs
            .iter()
            .enumerate()
            .map(|(i, input)| (input.as_str(), self.outputs.get(i).map(String::as_str)))
    }
}
