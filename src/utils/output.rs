//! # 美化输出工具
//!
//! 提供统一的终端输出样式。诊断信息统一写到 STDERR，
//! STDOUT 留给清理结果。
//!
//! ## 依赖关系
//! - 被 `main.rs`、`commands/`、`batch/` 使用
//! - 使用 `colored` crate

use colored::Colorize;

/// 打印错误消息
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "[ERR]".red().bold(), msg);
}

/// 格式化一条 INPUT/OUTPUT 记录
pub fn format_io(title: &str, input: &str, output: &str) -> String {
    format!(
        "{}\n  {} {}\n  {} {}",
        title.bold(),
        "INPUT :".dimmed(),
        input,
        "OUTPUT:".dimmed(),
        output.cyan()
    )
}
