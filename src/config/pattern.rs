//! # protect/unprotect 规则解析
//!
//! 把 `"/pattern/flags"` 形式的字符串编译为 `regex::Regex`。
//!
//! ## 依赖关系
//! - 被 `config/mod.rs` 使用
//! - 使用 `regex` crate

use crate::error::{CleanError, Result};
use regex::{Regex, RegexBuilder};
use std::sync::LazyLock;

/// `/body/flags`，两侧允许空白
static DELIMITED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*/(.+)/\s*(\w*)\s*$").unwrap());

/// 解析单条 `/pattern/flags` 规则
///
/// 支持的 flags：`i` 忽略大小写，`m` 多行，`s` 点号匹配换行；
/// `g`、`u`、`y` 接受但不影响匹配。
pub fn parse_pattern(rule: &str) -> Result<Regex> {
    let caps = DELIMITED
        .captures(rule)
        .ok_or_else(|| CleanError::InvalidPatternSyntax(rule.to_string()))?;
    // `\/` 在定界符写法里很常见，regex crate 不需要这个转义
    let body = caps[1].replace("\\/", "/");
    let flags = &caps[2];

    let mut builder = RegexBuilder::new(&body);
    for flag in flags.chars() {
        match flag {
            'i' => {
                builder.case_insensitive(true);
            }
            'm' => {
                builder.multi_line(true);
            }
            's' => {
                builder.dot_matches_new_line(true);
            }
            'g' | 'u' | 'y' => {}
            _ => {
                return Err(CleanError::InvalidRegexFlags {
                    flags: flags.to_string(),
                })
            }
        }
    }

    builder.build().map_err(|e| CleanError::InvalidRegex {
        pattern: body.clone(),
        reason: e.to_string(),
    })
}

/// 解析一组规则，遇到第一个错误即返回
pub fn parse_patterns(rules: &[String]) -> Result<Vec<Regex>> {
    rules.iter().map(|r| parse_pattern(r)).collect()
}
