//! # Cleaner 模块
//!
//! 文本清理的外部协作者。对配对引擎而言它是纯函数：
//! 原始文本 + 规则 -> 清理后文本。
//!
//! ## 依赖关系
//! - 被 `cache/content.rs` 调用
//! - 子模块: html

pub mod html;

pub use html::HtmlCleaner;

use regex::Regex;

/// protect/unprotect 规则
#[derive(Debug, Clone, Default)]
pub struct CleanOptions {
    /// 匹配到的文本保持原样
    pub protect: Vec<Regex>,
    /// 在受保护文本中重新划出需要清理的部分
    pub unprotect: Vec<Regex>,
}

/// 文本清理器
pub trait Cleaner {
    fn clean(&self, raw: &str, options: &CleanOptions) -> String;
}
