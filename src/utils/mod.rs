//! # 工具函数模块
//!
//! 提供美化输出、日志初始化、目录创建、STDIN 读取等工具。
//!
//! ## 依赖关系
//! - 被 `main.rs`、`commands/`、`batch/`、`cache/` 模块使用
//! - 子模块: fs, logging, output, stdin

pub mod fs;
pub mod logging;
pub mod output;
pub mod stdin;
