//! UTF-8 text validator
//! UTF-8 文本校验
//!
//! Decoding is strict: ill-formed input is reported, never replaced.
//! The decoder state lives on the stack of each call, so checks are
//! re-entrant and can run from any thread.
//! 严格解码：非法输入被报告而不是替换。
//! 解码状态位于每次调用的栈上，可重入，可在任意线程调用。

/// Decode outcome
/// 解码结果
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validity {
  /// Decoded cleanly / 完整解码
  Valid = 0,
  /// Byte pattern is not well-formed / 字节模式不合法
  Malformed = 1,
  /// Well-formed but maps to no character / 格式合法但无对应字符
  ///
  /// UTF-8 has no such sequence, `check` never returns it.
  /// UTF-8 不存在此类序列，`check` 不会返回它。
  Unmappable = 2,
}

impl Validity {
  #[inline(always)]
  pub const fn is_valid(self) -> bool {
    matches!(self, Self::Valid)
  }
}

/// Check whether bytes decode as UTF-8
/// 检查字节是否可解码为 UTF-8
///
/// Incomplete trailing sequences, surrogates, overlong forms and code points
/// above U+10FFFF are all `Malformed`. Empty input is `Valid`.
/// 末尾不完整序列、代理项、超长编码及超过 U+10FFFF 的码点均为 `Malformed`。
/// 空输入为 `Valid`。
#[inline]
pub fn check(buf: &[u8]) -> Validity {
  match std::str::from_utf8(buf) {
    Ok(_) => Validity::Valid,
    Err(_) => Validity::Malformed,
  }
}
