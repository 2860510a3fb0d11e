//! Error definitions
//! 错误定义

use thiserror::Error;

use crate::ColumnType;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
  #[error("no truncator is available for the type: {0} / 该类型无可用截断器")]
  NoTruncator(ColumnType),
}
