//! # htmlclean - HTML 批量清理工具
//!
//! 把文件、glob 模式、目录树和 STDIN 的任意组合清理后，
//! 写到对应的文件、目录或 STDOUT。
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── config/     (参数校验、protect 规则、编码)
//!   ├── commands/   (命令执行逻辑)
//!   │     └── batch/     (输入解析、输出映射、配对引擎)
//!   │           ├── cache/   (内容缓存、输出句柄缓存)
//!   │           └── cleaner/ (HTML 清理器)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cache;
mod cleaner;
mod cli;
mod commands;
mod config;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();
    utils::logging::init_logger(cli.verbose);

    if let Err(e) = commands::run(&cli) {
        utils::output::print_error(&e.to_string());
        std::process::exit(if e.is_configuration() { 1 } else { 2 });
    }
}
