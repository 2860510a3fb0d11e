//! Page min/max bounds
//! 页最小最大边界

use crate::{Binary, ColumnType, Conf, Result, Trunc};

/// Min and max of one page
/// 单页的最小值与最大值
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MinMax {
  pub min: Binary,
  pub max: Binary,
}

impl MinMax {
  #[inline]
  pub fn new(min: impl Into<Binary>, max: impl Into<Binary>) -> Self {
    Self {
      min: min.into(),
      max: max.into(),
    }
  }

  /// Shorten both sides to at most `len` bytes
  /// 两端均缩短至不超过 `len` 字节
  #[inline]
  pub fn truncate(&self, trunc: Trunc, len: usize) -> Self {
    Self {
      min: trunc.min(&self.min, len),
      max: trunc.max(&self.max, len),
    }
  }
}

/// Truncator bound to a column and its lengths
/// 绑定列类型与长度配置的截断器
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Truncator {
  pub trunc: Trunc,
  pub conf: Conf,
}

impl Truncator {
  /// Fails when the column type has no truncator
  /// 列类型无截断器时返回错误
  pub fn new(ty: Option<&ColumnType>, conf: Conf) -> Result<Self> {
    Ok(Self {
      trunc: Trunc::of(ty)?,
      conf,
    })
  }

  /// Bounds written to the column index
  /// 写入列索引的边界
  #[inline]
  pub fn column_index(&self, v: &MinMax) -> MinMax {
    v.truncate(self.trunc, self.conf.column_index_truncate_len)
  }

  /// Bounds written to page/chunk statistics
  /// 写入页/块统计信息的边界
  #[inline]
  pub fn statistics(&self, v: &MinMax) -> MinMax {
    v.truncate(self.trunc, self.conf.statistics_truncate_len)
  }
}
