//! Truncation configuration 截断配置

use serde::{Deserialize, Serialize};

/// Default column index truncate length 默认列索引截断长度
pub const COLUMN_INDEX_TRUNCATE_LEN: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Conf {
  /// Max bytes of min/max in column index 列索引中最小最大值的最大字节数
  pub column_index_truncate_len: usize,
  /// Max bytes of min/max in statistics (MAX = off) 统计信息中最小最大值的最大字节数（MAX=关闭）
  pub statistics_truncate_len: usize,
}

impl Default for Conf {
  fn default() -> Self {
    Self {
      column_index_truncate_len: COLUMN_INDEX_TRUNCATE_LEN,
      statistics_truncate_len: usize::MAX,
    }
  }
}

impl Conf {
  #[inline]
  pub const fn with_column_index_truncate_len(mut self, len: usize) -> Self {
    self.column_index_truncate_len = len;
    self
  }

  #[inline]
  pub const fn with_statistics_truncate_len(mut self, len: usize) -> Self {
    self.statistics_truncate_len = len;
    self
  }
}
