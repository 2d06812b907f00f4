//! # 批量配对模块
//!
//! 把输入/输出参数展开为具体的 (输入文件, 输出文件) 配对并执行。
//!
//! ## 功能
//! - 识别 STDIN、单文件、glob 模式和目录输入
//! - 目录递归展开为其下所有 `*.html`（相当于 `<dir>/**/*.html`）
//! - 推导或校验输出路径，输出为目录时按根目录保留相对结构
//! - 以显式任务栈代替递归，深层目录不会耗尽调用栈
//!
//! ## 依赖关系
//! - 被 `commands/mod.rs` 使用
//! - 使用 `cache/` 读取内容、管理输出句柄
//! - 子模块: resolver, mapper, engine

pub mod engine;
pub mod mapper;
pub mod resolver;

pub use engine::{PairingEngine, RunSummary};
pub use mapper::OutputMapper;
pub use resolver::{PathResolver, Resolution};

use std::path::{Path, PathBuf};

/// 根目录锚点
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Root {
    /// 未指定，也尚未推断
    Unset,
    /// 由顶层目录参数推断而来
    Inherited(PathBuf),
    /// `--root` 显式指定
    Explicit(PathBuf),
}

impl Root {
    pub fn path(&self) -> Option<&Path> {
        match self {
            Root::Unset => None,
            Root::Inherited(p) | Root::Explicit(p) => Some(p),
        }
    }
}

/// 任务的输入
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskInput {
    /// 命令行参数原文：`-`、路径或 glob 模式
    Arg(String),
    /// glob 匹配到的已存在路径，不再作为模式解析
    Path(PathBuf),
    /// 需要展开其下所有 `*.html` 的目录
    Tree(PathBuf),
}

/// 一个待解析的任务
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub input: TaskInput,
    /// 显式输出；`None` 表示由输入推导
    pub output: Option<String>,
    pub root: Root,
    /// 展开产生的子任务为 true，不会再推断根目录
    pub recursive: bool,
}

impl Task {
    /// 命令行上的一个顶层参数
    pub fn top_level(input: &str, output: Option<&str>, root: Option<&Path>) -> Self {
        Task {
            input: TaskInput::Arg(input.to_string()),
            output: output.filter(|o| !o.is_empty()).map(str::to_string),
            root: match root {
                Some(dir) => Root::Explicit(dir.to_path_buf()),
                None => Root::Unset,
            },
            recursive: false,
        }
    }

    /// 展开产生的子任务，继承输出与根目录
    pub fn child(&self, input: TaskInput, root: Root) -> Self {
        Task {
            input,
            output: self.output.clone(),
            root,
            recursive: true,
        }
    }
}
