//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数。单一命令，无子命令。
//!
//! ## 参数配对
//! `--input` 与 `--output` 按出现顺序一一配对；位置参数追加在
//! `--input` 列表之后。两者都为空时读取 STDIN。
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 参数传递给 `config/` 做校验

use clap::Parser;
use std::path::PathBuf;

/// htmlclean - 批量清理 HTML 文件
#[derive(Parser, Debug)]
#[command(name = "htmlclean")]
#[command(version)]
#[command(
    about = "Simple and lightweight cleaner that removes whitespace and comments from HTML",
    long_about = None
)]
#[command(override_usage = "htmlclean [OPTIONS] [INPUT]...")]
pub struct Cli {
    /// Input files, directories, glob patterns or "-" as STDIN
    #[arg(value_name = "INPUT")]
    pub inputs: Vec<String>,

    /// Input file, directory or "-" as STDIN
    #[arg(short, long = "input", value_name = "INPUT")]
    pub input: Vec<String>,

    /// Output file, directory or "-" as STDOUT
    #[arg(short, long = "output", value_name = "OUTPUT")]
    pub output: Vec<String>,

    /// Root of directory tree
    #[arg(short, long, value_name = "DIRECTORY")]
    pub root: Option<PathBuf>,

    /// "/pattern/flags" for protect
    #[arg(short, long = "protect", value_name = "REGEXP", allow_hyphen_values = true)]
    pub protect: Vec<String>,

    /// "/pattern/flags" for unprotect
    #[arg(short = 'P', long = "unprotect", value_name = "REGEXP", allow_hyphen_values = true)]
    pub unprotect: Vec<String>,

    /// Encoding method
    #[arg(short, long, default_value = "utf8", value_name = "ENCODING")]
    pub encoding: String,

    /// Output I/O information to STDERR
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl Cli {
    /// 合并 `--input` 与位置参数，空时默认为 STDIN
    pub fn input_list(&self) -> Vec<String> {
        let mut inputs: Vec<String> = self
            .input
            .iter()
            .chain(self.inputs.iter())
            .cloned()
            .collect();
        if inputs.is_empty() {
            inputs.push("-".to_string());
        }
        inputs
    }
}
