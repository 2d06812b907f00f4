//! # 命令执行模块
//!
//! 校验配置后按命令行顺序驱动配对引擎。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`、`config/`、`batch/`

use crate::batch::{PairingEngine, RunSummary};
use crate::cli::Cli;
use crate::config::RunConfig;
use crate::error::Result;

use log::info;

/// 执行命令
///
/// 只有配置错误会以 `Err` 返回；单个配对的失败计入 `RunSummary`。
pub fn run(cli: &Cli) -> Result<RunSummary> {
    let config = RunConfig::from_cli(cli)?;

    let mut engine = PairingEngine::new(&config);
    for (input, output) in config.arguments() {
        engine.process(input, output, config.root.as_deref());
    }
    let summary = engine.finish();

    info!(
        "{} file(s) written, {} failed",
        summary.written, summary.failed
    );
    Ok(summary)
}
