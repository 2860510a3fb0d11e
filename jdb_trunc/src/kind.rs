//! Column types and truncator policy
//! 列类型与截断器策略

use std::fmt;

use crate::{Error, Result, Trunc};

/// Physical storage type
/// 物理存储类型
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Physical {
  Boolean = 0,
  Int32 = 1,
  Int64 = 2,
  /// 96-bit legacy timestamp / 96 位旧式时间戳
  Int96 = 3,
  Float = 4,
  Double = 5,
  /// Variable-length bytes / 变长字节
  Binary = 6,
  FixedLenByteArray = 7,
}

/// Original type annotation
/// 原始类型注解
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Logical {
  Utf8,
  Map,
  MapKeyValue,
  List,
  Enum,
  Decimal,
  Date,
  TimeMillis,
  TimeMicros,
  TimestampMillis,
  TimestampMicros,
  Uint8,
  Uint16,
  Uint32,
  Uint64,
  Int8,
  Int16,
  Int32,
  Int64,
  Json,
  Bson,
  Interval,
}

impl Logical {
  /// Annotations whose bytes are text
  /// 字节内容为文本的注解
  #[inline]
  pub const fn is_text(self) -> bool {
    matches!(self, Self::Utf8 | Self::Enum | Self::Json | Self::Bson)
  }
}

/// Column type
/// 列类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColumnType {
  pub physical: Physical,
  pub logical: Option<Logical>,
}

impl ColumnType {
  #[inline]
  pub const fn new(physical: Physical) -> Self {
    Self {
      physical,
      logical: None,
    }
  }

  #[inline]
  pub const fn with_logical(mut self, logical: Logical) -> Self {
    self.logical = Some(logical);
    self
  }
}

impl fmt::Display for ColumnType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self.logical {
      Some(logical) => write!(f, "{:?} ({logical:?})", self.physical),
      None => write!(f, "{:?}", self.physical),
    }
  }
}

impl Trunc {
  /// Pick the truncator for a column type
  /// 为列类型选择截断器
  ///
  /// | Type                         | Annotation                 | Trunc   |
  /// |------------------------------|----------------------------|---------|
  /// | unknown                      | -                          | NoOp    |
  /// | Int96                        | any                        | NoOp    |
  /// | Binary / FixedLenByteArray   | none, Utf8/Enum/Json/Bson  | Utf8    |
  /// | Binary / FixedLenByteArray   | other                      | NoOp    |
  /// | other                        | any                        | error   |
  pub fn of(ty: Option<&ColumnType>) -> Result<Self> {
    let Some(ty) = ty else {
      return Ok(Self::NoOp);
    };
    match ty.physical {
      Physical::Int96 => Ok(Self::NoOp),
      Physical::Binary | Physical::FixedLenByteArray => Ok(match ty.logical {
        None => Self::Utf8,
        Some(logical) if logical.is_text() => Self::Utf8,
        Some(_) => Self::NoOp,
      }),
      _ => Err(Error::NoTruncator(*ty)),
    }
  }
}
