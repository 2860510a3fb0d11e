#![cfg_attr(docsrs, feature(doc_cfg))]

//! # jdb_trunc - Page index min/max truncation
//! 页索引最小最大值截断
//!
//! Shortens min/max statistics of binary columns while keeping them valid
//! pruning bounds under unsigned bytewise order:
//! 缩短二进制列的最小最大统计值，并保证在无符号字节序下仍是有效的剪枝边界:
//!
//! | Side | Guarantee                 |
//! |------|---------------------------|
//! | min  | `min(v, len) <= v`        |
//! | max  | `max(v, len) >= v`        |
//!
//! UTF-8 values keep character boundaries; when no shorter bound exists the
//! original value is returned.
//! UTF-8 值保持字符边界；无法缩短时返回原值。

mod bin;
mod bound;
mod conf;
mod error;
pub mod inc;
mod kind;
mod trunc;
pub mod validity;

pub use bin::Binary;
pub use bound::{MinMax, Truncator};
pub use conf::{COLUMN_INDEX_TRUNCATE_LEN, Conf};
pub use error::{Error, Result};
pub use kind::{ColumnType, Logical, Physical};
pub use trunc::Trunc;
pub use validity::Validity;
