//! Prefix truncation and increment
//! 前缀截断与递增
//!
//! Every function returns a fresh buffer; `None` means no shorter bound
//! exists and the caller must keep the original value.
//! 所有函数返回新缓冲区；`None` 表示不存在更短的边界，调用方须保留原值。

use crate::validity::{self, Validity};

/// Raw prefix of `len` bytes
/// 取前 `len` 字节
#[inline]
pub fn truncate(buf: &[u8], len: usize) -> Vec<u8> {
  buf[..len.min(buf.len())].to_vec()
}

/// Longest valid UTF-8 prefix of at most `len` bytes
/// 不超过 `len` 字节的最长合法 UTF-8 前缀
///
/// Shrinks one byte at a time until the prefix decodes. `None` if it
/// becomes empty first.
/// 每次缩短一个字节直到可解码。若先缩短为空则返回 `None`。
pub fn truncate_text(buf: &[u8], len: usize) -> Option<Vec<u8>> {
  let mut end = len.min(buf.len());
  while !validity::check(&buf[..end]).is_valid() {
    end -= 1;
    if end == 0 {
      return None;
    }
  }
  Some(buf[..end].to_vec())
}

/// Carry increment from the last byte
/// 从最后一个字节开始进位递增
///
/// `None` when every byte is 0xFF.
/// 所有字节均为 0xFF 时返回 `None`。
pub fn inc(mut buf: Vec<u8>) -> Option<Vec<u8>> {
  for b in buf.iter_mut().rev() {
    *b = b.wrapping_add(1);
    // 0xFF -> 0x00 carries into the previous byte
    // 0xFF -> 0x00 向前一字节进位
    if *b != 0 {
      return Some(buf);
    }
  }
  None
}

/// Increment keeping the buffer valid UTF-8
/// 递增并保持缓冲区为合法 UTF-8
#[inline]
pub fn inc_text(buf: Vec<u8>) -> Option<Vec<u8>> {
  inc_text_by(buf, validity::check)
}

/// Increment keeping `check` valid
/// 递增并保持 `check` 结果合法
///
/// Bytes are tried right to left. Each position is bumped through larger
/// values (never past 0xFF) and the whole buffer is rechecked:
/// 从右到左尝试每个字节。每个位置逐个尝试更大的值（不超过 0xFF），并重新校验整个缓冲区：
///
/// | Outcome      | Action                                        |
/// |--------------|-----------------------------------------------|
/// | `Valid`      | accept / 接受                                  |
/// | `Unmappable` | bump the same byte again / 继续递增当前字节      |
/// | `Malformed`  | restore it, move left / 恢复原值，移到前一字节   |
pub fn inc_text_by(mut buf: Vec<u8>, mut check: impl FnMut(&[u8]) -> Validity) -> Option<Vec<u8>> {
  for i in (0..buf.len()).rev() {
    let prev = buf[i];
    // 0xFF has nothing larger
    // 0xFF 没有更大的值
    let Some(next) = prev.checked_add(1) else {
      continue;
    };
    for b in next..=u8::MAX {
      buf[i] = b;
      match check(&buf) {
        Validity::Valid => return Some(buf),
        Validity::Unmappable => continue,
        Validity::Malformed => break,
      }
    }
    buf[i] = prev;
  }
  None
}
