//! # STDIN 读取
//!
//! 一直读到流结束。STDIN 连接终端时（非 Windows）改从 `/dev/tty` 读取，
//! 避免干扰终端回显。
//!
//! ## 依赖关系
//! - 被 `cache/content.rs` 使用
//! - 无外部模块依赖

use std::io::{self, IsTerminal, Read};

/// 无法得知流大小时的缓冲区大小
pub const DEFAULT_BUF_SIZE: usize = 1024;

/// 读取当前进程的 STDIN 到结束
pub fn read_process_stdin() -> io::Result<Vec<u8>> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        if let Some(tty) = open_tty()? {
            return read_to_end(tty, DEFAULT_BUF_SIZE);
        }
    }

    let buf_size = stdin_size_hint().unwrap_or(DEFAULT_BUF_SIZE);
    read_to_end(stdin.lock(), buf_size)
}

/// 按固定缓冲区大小循环读取，直到读到 0 字节
pub fn read_to_end<R: Read>(mut reader: R, buf_size: usize) -> io::Result<Vec<u8>> {
    let mut buffer = vec![0u8; buf_size.max(1)];
    let mut content = Vec::new();
    loop {
        match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => content.extend_from_slice(&buffer[..n]),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => break,
            Err(e) => return Err(e),
        }
    }
    Ok(content)
}

#[cfg(not(windows))]
fn open_tty() -> io::Result<Option<std::fs::File>> {
    std::fs::File::open("/dev/tty").map(Some)
}

#[cfg(windows)]
fn open_tty() -> io::Result<Option<std::fs::File>> {
    Ok(None)
}

/// STDIN 重定向自普通文件时返回其大小
#[cfg(unix)]
fn stdin_size_hint() -> Option<usize> {
    use std::os::fd::AsFd;

    let fd = io::stdin().as_fd().try_clone_to_owned().ok()?;
    let file = std::fs::File::from(fd);
    let len = file.metadata().ok()?.len() as usize;
    (len > 0).then_some(len)
}

#[cfg(not(unix))]
fn stdin_size_hint() -> Option<usize> {
    None
}
