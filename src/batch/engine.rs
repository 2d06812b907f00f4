//! # 配对引擎
//!
//! 按命令行顺序处理每个 (输入, 输出, 根目录) 参数：
//! 解析输入 -> 读取并清理内容 -> 计算并打开输出 -> 写入。
//!
//! ## 功能
//! - 显式任务栈，深度优先，保持 glob 匹配顺序
//! - 单个配对的错误在此捕获并报告，不影响其他配对
//! - 运行结束时统一关闭输出句柄
//!
//! ## 依赖关系
//! - 被 `commands/mod.rs` 调用
//! - 使用 `batch/resolver.rs`、`batch/mapper.rs`、`cache/`
//! - 使用 `utils/output.rs` 报告错误

use super::{OutputMapper, PathResolver, Resolution, Task};
use crate::cache::{ContentCache, FileHandleCache, InputKey};
use crate::cleaner::HtmlCleaner;
use crate::config::RunConfig;
use crate::error::Result;
use crate::utils::output;

use log::info;
use std::path::Path;

/// 运行统计
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// 成功写出的配对数
    pub written: usize,
    /// 失败的配对数
    pub failed: usize,
}

/// 配对引擎，持有一次运行的全部共享状态
pub struct PairingEngine {
    resolver: PathResolver,
    contents: ContentCache,
    handles: FileHandleCache,
    summary: RunSummary,
}

impl PairingEngine {
    /// 使用默认 HTML 清理器和进程标准输入输出
    pub fn new(config: &RunConfig) -> Self {
        let contents = ContentCache::new(
            Box::new(HtmlCleaner::new()),
            config.clean_options.clone(),
            config.encoding,
        );
        Self::with_caches(contents, FileHandleCache::new())
    }

    pub fn with_caches(contents: ContentCache, handles: FileHandleCache) -> Self {
        Self {
            resolver: PathResolver::new(),
            contents,
            handles,
            summary: RunSummary::default(),
        }
    }

    /// 处理一个顶层参数
    pub fn process(&mut self, input: &str, output: Option<&str>, root: Option<&Path>) {
        info!(
            "{}",
            output::format_io("[ARGUMENT]", input, output.unwrap_or(""))
        );

        let mut pending = vec![Task::top_level(input, output, root)];
        while let Some(task) = pending.pop() {
            if let Err(e) = self.run_task(&task, &mut pending) {
                self.summary.failed += 1;
                output::print_error(&e.to_string());
            }
        }
    }

    fn run_task(&mut self, task: &Task, pending: &mut Vec<Task>) -> Result<()> {
        match self.resolver.resolve(task)? {
            Resolution::Nothing => Ok(()),
            // 逆序入栈，出栈时恢复原顺序
            Resolution::Expand(children) => {
                pending.extend(children.into_iter().rev());
                Ok(())
            }
            Resolution::Stdin => self.pair(&InputKey::Stdin, task),
            Resolution::File(path) => self.pair(&InputKey::Path(path), task),
        }
    }

    /// 读取 -> 打开输出 -> 写入
    fn pair(&mut self, input: &InputKey, task: &Task) -> Result<()> {
        let entry = self.contents.get(input)?;
        let out_key = OutputMapper::map(
            input,
            task.output.as_deref(),
            task.root.path(),
            &mut self.handles,
        )?;
        self.handles.write(&out_key, &entry.content)?;

        self.summary.written += 1;
        info!(
            "{}",
            output::format_io(
                &format!("[{}] Done", self.summary.written),
                &entry.label,
                self.handles.label(&out_key).unwrap_or_default()
            )
        );
        Ok(())
    }

    /// 关闭所有输出句柄并返回统计
    pub fn finish(mut self) -> RunSummary {
        self.handles.close_all();
        self.summary
    }
}
