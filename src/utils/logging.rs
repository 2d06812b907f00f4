//! # 日志初始化
//!
//! 使用 `env_logger` 把 `log` 宏的输出写到 STDERR。
//! `--verbose` 时为 info 级别，否则为 warn；`RUST_LOG` 可覆盖。

use env_logger::{Builder, Target};
use log::LevelFilter;
use std::io::Write;

pub fn init_logger(verbose: bool) {
    let level = if verbose {
        LevelFilter::Info
    } else {
        LevelFilter::Warn
    };

    Builder::new()
        .filter_level(level)
        .parse_default_env()
        .target(Target::Stderr)
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .try_init()
        .ok();
}
