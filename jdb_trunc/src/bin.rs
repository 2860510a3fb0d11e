//! Immutable binary value
//! 不可变二进制值

use std::{
  cmp::Ordering,
  fmt,
  hash::{Hash, Hasher},
};

use hipstr::HipByt;

/// Binary value ordered by unsigned bytes
/// 按无符号字节排序的二进制值
///
/// Cloning shares the buffer; content is never mutated.
/// 克隆共享缓冲区；内容从不修改。
#[derive(Clone)]
pub struct Binary(HipByt<'static>);

impl Binary {
  /// Take ownership of bytes
  /// 获取字节所有权
  #[inline]
  pub fn from_vec(v: Vec<u8>) -> Self {
    Self(HipByt::from(v))
  }

  /// Borrow static bytes without copy
  /// 零拷贝借用静态字节
  #[inline]
  pub fn from_static(v: &'static [u8]) -> Self {
    Self(HipByt::borrowed(v))
  }

  #[inline(always)]
  pub fn as_slice(&self) -> &[u8] {
    self.0.as_slice()
  }

  #[inline(always)]
  pub fn len(&self) -> usize {
    self.0.len()
  }

  #[inline(always)]
  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  #[inline]
  pub fn to_vec(&self) -> Vec<u8> {
    self.as_slice().to_vec()
  }
}

impl Default for Binary {
  #[inline]
  fn default() -> Self {
    Self(HipByt::new())
  }
}

impl AsRef<[u8]> for Binary {
  #[inline(always)]
  fn as_ref(&self) -> &[u8] {
    self.as_slice()
  }
}

impl From<Vec<u8>> for Binary {
  #[inline]
  fn from(v: Vec<u8>) -> Self {
    Self::from_vec(v)
  }
}

impl From<&[u8]> for Binary {
  #[inline]
  fn from(v: &[u8]) -> Self {
    Self(HipByt::from(v))
  }
}

impl From<&str> for Binary {
  #[inline]
  fn from(v: &str) -> Self {
    v.as_bytes().into()
  }
}

impl From<String> for Binary {
  #[inline]
  fn from(v: String) -> Self {
    Self::from_vec(v.into_bytes())
  }
}

impl PartialEq for Binary {
  #[inline]
  fn eq(&self, other: &Self) -> bool {
    self.as_slice() == other.as_slice()
  }
}

impl Eq for Binary {}

impl PartialOrd for Binary {
  #[inline]
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

impl Ord for Binary {
  /// `[u8]` compares lexicographically as unsigned
  /// `[u8]` 按无符号字典序比较
  #[inline]
  fn cmp(&self, other: &Self) -> Ordering {
    self.as_slice().cmp(other.as_slice())
  }
}

impl Hash for Binary {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.as_slice().hash(state);
  }
}

impl fmt::Debug for Binary {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match std::str::from_utf8(self.as_slice()) {
      Ok(s) => write!(f, "Binary({s:?})"),
      Err(_) => {
        f.write_str("Binary(0x")?;
        for b in self.as_slice() {
          write!(f, "{b:02x}")?;
        }
        f.write_str(")")
      }
    }
  }
}
