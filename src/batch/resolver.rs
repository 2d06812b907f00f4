//! # 输入解析器
//!
//! 判断输入参数的类别并展开为具体路径。
//!
//! ## 规则
//! - 空或 `-`：STDIN
//! - glob 无匹配：什么也不做
//! - 多个匹配：每个匹配作为独立子任务，携带匹配到的路径本身
//! - 唯一匹配为目录：展开其下所有 `*.html`；顶层调用且未指定根目录时，
//!   该目录的规范路径成为默认根目录
//! - 唯一匹配为文件：规范化后的绝对路径
//! - 唯一匹配既非文件也非目录：错误
//!
//! 通配部分不匹配 `.` 开头的文件和目录，除非模式的通配部分自己以 `.` 开头。
//! 文件名按 `OsStr` 处理，非 UTF-8 名称不会中断运行。
//!
//! ## 依赖关系
//! - 被 `batch/engine.rs` 使用
//! - 使用 `glob` 匹配命令行模式，`walkdir` 遍历目录

use super::{Root, Task, TaskInput};
use crate::error::{CleanError, Result};
use crate::utils::fs::canonical;

use std::ffi::OsStr;
use std::fs;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

/// 目录展开时匹配的后缀，等价于 `<dir>/**/*.html`
pub const HTML_SUFFIX: &[u8] = b".html";

/// 一个任务的解析结果
#[derive(Debug, PartialEq, Eq)]
pub enum Resolution {
    Stdin,
    File(PathBuf),
    /// 按顺序处理的子任务
    Expand(Vec<Task>),
    /// 无匹配
    Nothing,
}

/// 输入解析器
#[derive(Debug, Default)]
pub struct PathResolver;

impl PathResolver {
    pub fn new() -> Self {
        Self
    }

    /// 解析一个任务
    pub fn resolve(&self, task: &Task) -> Result<Resolution> {
        match &task.input {
            TaskInput::Arg(arg) if arg.is_empty() || arg == "-" => Ok(Resolution::Stdin),
            TaskInput::Arg(pattern) => {
                let matches = glob_visible(pattern)?;
                self.resolve_matches(task, matches)
            }
            TaskInput::Path(path) => self.resolve_single(task, path.clone()),
            TaskInput::Tree(dir) => self.resolve_matches(task, walk_html(dir)),
        }
    }

    fn resolve_matches(&self, task: &Task, mut matches: Vec<PathBuf>) -> Result<Resolution> {
        match matches.len() {
            0 => Ok(Resolution::Nothing),
            1 => self.resolve_single(task, matches.remove(0)),
            _ => Ok(Resolution::Expand(
                matches
                    .into_iter()
                    .map(|path| task.child(TaskInput::Path(path), task.root.clone()))
                    .collect(),
            )),
        }
    }

    fn resolve_single(&self, task: &Task, path: PathBuf) -> Result<Resolution> {
        let meta = fs::metadata(&path).map_err(|e| CleanError::ResolveError {
            path: path.clone(),
            source: e,
        })?;

        if meta.is_dir() {
            let root = match &task.root {
                Root::Unset if !task.recursive => Root::Inherited(canonical(&path)?),
                other => other.clone(),
            };
            Ok(Resolution::Expand(vec![task.child(TaskInput::Tree(path), root)]))
        } else if meta.is_file() {
            Ok(Resolution::File(canonical(&path)?))
        } else {
            Err(CleanError::NotFileOrDirectory { path })
        }
    }
}

/// 按 glob 顺序返回所有可读取、非隐藏的匹配
fn glob_visible(pattern: &str) -> Result<Vec<PathBuf>> {
    let paths = glob::glob(pattern).map_err(|e| CleanError::InvalidGlob {
        pattern: pattern.to_string(),
        reason: e.to_string(),
    })?;

    let components: Vec<Component> = Path::new(pattern).components().collect();
    let literal = components
        .iter()
        .take_while(|c| !c.as_os_str().to_string_lossy().contains(&['*', '?', '['][..]))
        .count();
    let wants_hidden = components[literal..]
        .iter()
        .any(|c| matches!(c, Component::Normal(name) if is_hidden(name)));

    Ok(paths
        .filter_map(|p| p.ok())
        .filter(|path| {
            wants_hidden
                || !path
                    .components()
                    .skip(literal)
                    .any(|c| matches!(c, Component::Normal(name) if is_hidden(name)))
        })
        .collect())
}

/// 目录下所有 `*.html`（文件或目录），按文件名排序、深度优先
fn walk_html(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .min_depth(1)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_hidden(e.file_name()))
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().as_encoded_bytes().ends_with(HTML_SUFFIX))
        .map(|e| e.into_path())
        .collect()
}

fn is_hidden(name: &OsStr) -> bool {
    name.as_encoded_bytes().first() == Some(&b'.')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(input: &str) -> Task {
        Task::top_level(input, None, None)
    }

    #[test]
    fn test_stdin_sentinel() {
        let resolver = PathResolver::new();
        assert_eq!(resolver.resolve(&task("-")).unwrap(), Resolution::Stdin);
        assert_eq!(resolver.resolve(&task("")).unwrap(), Resolution::Stdin);
    }

    #[test]
    fn test_no_match_is_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let pattern = format!("{}/*.nothing", tmp.path().display());
        let resolver = PathResolver::new();
        assert_eq!(resolver.resolve(&task(&pattern)).unwrap(), Resolution::Nothing);
    }

    #[test]
    fn test_single_file_is_canonical() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir(tmp.path().join("a")).unwrap();
        fs::write(tmp.path().join("a").join("b.html"), "x").unwrap();
        let dotted = tmp.path().join("a").join("..").join("a").join("b.html");

        let resolved = PathResolver::new()
            .resolve(&task(dotted.to_str().unwrap()))
            .unwrap();
        assert_eq!(
            resolved,
            Resolution::File(fs::canonicalize(tmp.path().join("a/b.html")).unwrap())
        );
    }

    #[test]
    fn test_directory_infers_root_only_at_top_level() {
        let tmp = tempfile::tempdir().unwrap();
        let site = tmp.path().join("site");
        fs::create_dir(&site).unwrap();
        let canonical_site = fs::canonicalize(&site).unwrap();
        let resolver = PathResolver::new();

        let Resolution::Expand(children) = resolver.resolve(&task(site.to_str().unwrap())).unwrap()
        else {
            panic!("directory should expand");
        };
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].input, TaskInput::Tree(site.clone()));
        assert!(children[0].recursive);
        assert_eq!(children[0].root, Root::Inherited(canonical_site));

        // 子任务遇到目录不再推断根目录
        let nested = task(site.to_str().unwrap()).child(TaskInput::Path(site.clone()), Root::Unset);
        let Resolution::Expand(children) = resolver.resolve(&nested).unwrap() else {
            panic!("directory should expand");
        };
        assert_eq!(children[0].root, Root::Unset);
    }

    #[test]
    fn test_explicit_root_is_kept() {
        let tmp = tempfile::tempdir().unwrap();
        let site = tmp.path().join("site");
        fs::create_dir(&site).unwrap();
        let top = Task::top_level(site.to_str().unwrap(), Some("out"), Some(Path::new("/r")));

        let Resolution::Expand(children) = PathResolver::new().resolve(&top).unwrap() else {
            panic!("directory should expand");
        };
        assert_eq!(children[0].root, Root::Explicit(PathBuf::from("/r")));
        assert_eq!(children[0].output.as_deref(), Some("out"));
    }

    #[test]
    fn test_multiple_matches_become_children() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("a.html"), "a").unwrap();
        fs::write(tmp.path().join("b.html"), "b").unwrap();
        fs::write(tmp.path().join("c.txt"), "c").unwrap();

        let pattern = format!("{}/*.html", tmp.path().display());
        let Resolution::Expand(children) = PathResolver::new().resolve(&task(&pattern)).unwrap()
        else {
            panic!("glob should expand");
        };
        assert_eq!(children.len(), 2);
        assert!(children.iter().all(|c| c.recursive && c.root == Root::Unset));
        assert_eq!(children[0].input, TaskInput::Path(tmp.path().join("a.html")));
        assert_eq!(children[1].input, TaskInput::Path(tmp.path().join("b.html")));
    }

    #[test]
    fn test_matched_path_is_not_reglobbed() {
        let tmp = tempfile::tempdir().unwrap();
        let odd = tmp.path().join("[a].html");
        fs::write(&odd, "x").unwrap();
        fs::write(tmp.path().join("a.html"), "y").unwrap();

        let top = task(tmp.path().to_str().unwrap());
        let child = top.child(TaskInput::Path(odd.clone()), Root::Unset);
        assert_eq!(
            PathResolver::new().resolve(&child).unwrap(),
            Resolution::File(fs::canonicalize(&odd).unwrap())
        );
    }

    #[test]
    fn test_wildcards_skip_hidden_entries() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("a.html"), "a").unwrap();
        fs::write(tmp.path().join(".b.html"), "b").unwrap();
        let resolver = PathResolver::new();

        let pattern = format!("{}/*.html", tmp.path().display());
        assert_eq!(
            resolver.resolve(&task(&pattern)).unwrap(),
            Resolution::File(fs::canonicalize(tmp.path().join("a.html")).unwrap())
        );

        let pattern = format!("{}/.*.html", tmp.path().display());
        assert_eq!(
            resolver.resolve(&task(&pattern)).unwrap(),
            Resolution::File(fs::canonicalize(tmp.path().join(".b.html")).unwrap())
        );
    }

    #[test]
    fn test_tree_lists_html_depth_first() {
        let tmp = tempfile::tempdir().unwrap();
        let site = tmp.path().join("site");
        fs::create_dir_all(site.join("b")).unwrap();
        fs::create_dir_all(site.join(".git")).unwrap();
        fs::write(site.join("a.html"), "a").unwrap();
        fs::write(site.join("b").join("c.html"), "c").unwrap();
        fs::write(site.join("d.txt"), "d").unwrap();
        fs::write(site.join(".git").join("e.html"), "e").unwrap();

        let top = task(site.to_str().unwrap());
        let tree = top.child(TaskInput::Tree(site.clone()), Root::Unset);
        let Resolution::Expand(children) = PathResolver::new().resolve(&tree).unwrap() else {
            panic!("tree should expand");
        };
        let inputs: Vec<_> = children.into_iter().map(|c| c.input).collect();
        assert_eq!(
            inputs,
            vec![
                TaskInput::Path(site.join("a.html")),
                TaskInput::Path(site.join("b").join("c.html")),
            ]
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_tree_keeps_non_utf8_names() {
        use std::os::unix::ffi::OsStrExt;

        let tmp = tempfile::tempdir().unwrap();
        let raw = tmp.path().join(OsStr::from_bytes(b"b\xff.html"));
        fs::write(tmp.path().join("a.html"), "a").unwrap();
        fs::write(&raw, "b").unwrap();

        let top = task(tmp.path().to_str().unwrap());
        let tree = top.child(TaskInput::Tree(tmp.path().to_path_buf()), Root::Unset);
        let Resolution::Expand(children) = PathResolver::new().resolve(&tree).unwrap() else {
            panic!("tree should expand");
        };
        assert_eq!(children.len(), 2);
        assert_eq!(children[1].input, TaskInput::Path(raw));
    }

    #[cfg(unix)]
    #[test]
    fn test_special_file_is_error() {
        let err = PathResolver::new().resolve(&task("/dev/null")).unwrap_err();
        assert!(matches!(err, CleanError::NotFileOrDirectory { .. }));
    }
}
