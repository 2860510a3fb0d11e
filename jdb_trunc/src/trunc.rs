//! Truncator variants
//! 截断器变体

use log::trace;

use crate::{
  Binary,
  inc::{inc, inc_text, truncate, truncate_text},
  validity,
};

/// Min/max truncation strategy
/// 最小最大值截断策略
///
/// Holds no state, share freely across threads.
/// 无状态，可在线程间自由共享。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Trunc {
  /// Return values unchanged / 原样返回
  #[default]
  NoOp,
  /// UTF-8 aware, raw bytes when not text / 感知 UTF-8，非文本按原始字节处理
  Utf8,
}

impl Trunc {
  /// Lower bound of at most `len` bytes, `<= v`
  /// 不超过 `len` 字节的下界，`<= v`
  pub fn min(self, v: &Binary, len: usize) -> Binary {
    if self == Self::NoOp || v.len() <= len {
      return v.clone();
    }
    let buf = v.as_slice();
    let out = if validity::check(buf).is_valid() {
      truncate_text(buf, len)
    } else {
      Some(truncate(buf, len))
    };
    keep(v, out, "min")
  }

  /// Upper bound of at most `len` bytes, `>= v`
  /// 不超过 `len` 字节的上界，`>= v`
  pub fn max(self, v: &Binary, len: usize) -> Binary {
    if self == Self::NoOp || v.len() <= len {
      return v.clone();
    }
    let buf = v.as_slice();
    let out = if validity::check(buf).is_valid() {
      truncate_text(buf, len).and_then(inc_text)
    } else {
      inc(truncate(buf, len))
    };
    keep(v, out, "max")
  }
}

/// Original value when no shorter bound was found
/// 找不到更短边界时返回原值
#[inline]
fn keep(v: &Binary, out: Option<Vec<u8>>, side: &str) -> Binary {
  match out {
    Some(out) => Binary::from_vec(out),
    None => {
      trace!("{side} not truncated, keep {} bytes", v.len());
      v.clone()
    }
  }
}
