//! # HTML 清理器
//!
//! 删除 HTML 中的注释和多余空白。
//!
//! ## 功能
//! - 内置保护 `<pre>`、`<textarea>`、`<script>`、`<style>`、条件注释、
//!   SSI 指令和服务端代码块
//! - 用户 protect 规则追加保护区，unprotect 规则从保护区中挖出待清理部分
//! - 非保护区：删除注释、合并空白、去掉块级标签两侧空白
//!
//! ## 依赖关系
//! - 实现 `cleaner::Cleaner`
//! - 使用 `regex` crate

use super::{CleanOptions, Cleaner};
use regex::Regex;

/// 块级标签，两侧空白可安全删除
const BLOCK_TAGS: &str = "address|article|aside|blockquote|body|br|dd|div|dl|dt|fieldset|\
figcaption|figure|footer|form|h[1-6]|head|header|hr|html|li|link|main|meta|nav|ol|option|\
p|section|select|table|tbody|td|tfoot|th|thead|title|tr|ul|!doctype";

/// 字节区间 [start, end)
type Span = (usize, usize);

/// 默认 HTML 清理器
pub struct HtmlCleaner {
    builtin_protect: Vec<Regex>,
    comment: Regex,
    whitespace: Regex,
    block_tag: Regex,
}

impl Default for HtmlCleaner {
    fn default() -> Self {
        Self::new()
    }
}

impl HtmlCleaner {
    pub fn new() -> Self {
        let builtin_protect = [
            r"(?is)<pre\b[^>]*>.*?</pre\s*>",
            r"(?is)<textarea\b[^>]*>.*?</textarea\s*>",
            r"(?is)<script\b[^>]*>.*?</script\s*>",
            r"(?is)<style\b[^>]*>.*?</style\s*>",
            r"(?is)<!--\[if\b.*?<!\[endif\]-->",
            r"(?s)<!--#.*?-->",
            r"(?s)<\?.*?\?>",
            r"(?s)<%.*?%>",
        ]
        .iter()
        .map(|p| Regex::new(p).unwrap())
        .collect();

        HtmlCleaner {
            builtin_protect,
            comment: Regex::new(r"(?s)<!--.*?-->").unwrap(),
            whitespace: Regex::new(r"\s+").unwrap(),
            block_tag: Regex::new(&format!(r"(?i)\s*(</?(?:{})\b[^>]*>)\s*", BLOCK_TAGS))
                .unwrap(),
        }
    }

    /// 计算最终的保护区（已排序、合并，并扣除 unprotect 区间）
    fn protected_spans(&self, text: &str, options: &CleanOptions) -> Vec<Span> {
        let protect = merge(
            self.builtin_protect
                .iter()
                .chain(options.protect.iter())
                .flat_map(|re| re.find_iter(text).map(|m| (m.start(), m.end())))
                .collect(),
        );
        let holes = merge(
            options
                .unprotect
                .iter()
                .flat_map(|re| re.find_iter(text).map(|m| (m.start(), m.end())))
                .collect(),
        );
        subtract(&protect, &holes)
    }

    fn clean_fragment(&self, fragment: &str) -> String {
        let text = self.comment.replace_all(fragment, "");
        let text = self.whitespace.replace_all(&text, " ");
        self.block_tag.replace_all(&text, "${1}").into_owned()
    }
}

impl Cleaner for HtmlCleaner {
    fn clean(&self, raw: &str, options: &CleanOptions) -> String {
        let protected = self.protected_spans(raw, options);

        let mut out = String::with_capacity(raw.len());
        let mut cursor = 0;
        for &(start, end) in &protected {
            if cursor < start {
                out.push_str(&self.clean_fragment(&raw[cursor..start]));
            }
            out.push_str(&raw[start..end]);
            cursor = end;
        }
        let tail = if cursor < raw.len() {
            self.clean_fragment(&raw[cursor..])
        } else {
            String::new()
        };
        out.push_str(tail.trim_end());

        // 文档开头若未受保护则去掉前导空白
        match protected.first() {
            Some(&(0, _)) => out,
            _ => out.trim_start().to_string(),
        }
    }
}

/// 排序并合并重叠区间
fn merge(mut spans: Vec<Span>) -> Vec<Span> {
    spans.retain(|(s, e)| s < e);
    spans.sort_unstable();
    let mut merged: Vec<Span> = Vec::with_capacity(spans.len());
    for (start, end) in spans {
        match merged.last_mut() {
            Some(last) if start <= last.1 => last.1 = last.1.max(end),
            _ => merged.push((start, end)),
        }
    }
    merged
}

/// 从 `spans` 中扣除 `holes`，两者均已合并
fn subtract(spans: &[Span], holes: &[Span]) -> Vec<Span> {
    let mut result = Vec::new();
    for &(start, end) in spans {
        let mut cursor = start;
        for &(hs, he) in holes.iter().filter(|(hs, he)| *he > start && *hs < end) {
            if hs > cursor {
                result.push((cursor, hs));
            }
            cursor = cursor.max(he);
        }
        if cursor < end {
            result.push((cursor, end));
        }
    }
    result
}
