//! Truncator policy and page bound tests
//! 截断器策略与页边界测试

use aok::{OK, Void};
use jdb_trunc::{
  COLUMN_INDEX_TRUNCATE_LEN, Binary, ColumnType, Conf, Error, Logical, MinMax, Physical, Trunc,
  Truncator,
};

#[static_init::constructor(0)]
extern "C" fn _log_init() {
  log_init::init();
}

#[test]
fn test_of() -> Void {
  assert_eq!(Trunc::of(None)?, Trunc::NoOp);
  assert_eq!(Trunc::of(Some(&ColumnType::new(Physical::Int96)))?, Trunc::NoOp);
  assert_eq!(
    Trunc::of(Some(&ColumnType::new(Physical::Int96).with_logical(Logical::Utf8)))?,
    Trunc::NoOp
  );
  assert_eq!(Trunc::of(Some(&ColumnType::new(Physical::Binary)))?, Trunc::Utf8);
  assert_eq!(
    Trunc::of(Some(&ColumnType::new(Physical::FixedLenByteArray)))?,
    Trunc::Utf8
  );
  for logical in [Logical::Utf8, Logical::Enum, Logical::Json, Logical::Bson] {
    let ty = ColumnType::new(Physical::Binary).with_logical(logical);
    assert_eq!(Trunc::of(Some(&ty))?, Trunc::Utf8);
    let ty = ColumnType::new(Physical::FixedLenByteArray).with_logical(logical);
    assert_eq!(Trunc::of(Some(&ty))?, Trunc::Utf8);
  }
  for logical in [Logical::Decimal, Logical::Interval, Logical::List] {
    let ty = ColumnType::new(Physical::FixedLenByteArray).with_logical(logical);
    assert_eq!(Trunc::of(Some(&ty))?, Trunc::NoOp);
  }
  OK
}

#[test]
fn test_of_unsupported() -> Void {
  for physical in [
    Physical::Boolean,
    Physical::Int32,
    Physical::Int64,
    Physical::Float,
    Physical::Double,
  ] {
    let ty = ColumnType::new(physical);
    let err = Trunc::of(Some(&ty)).unwrap_err();
    assert!(matches!(err, Error::NoTruncator(t) if t == ty));
  }
  let err = Trunc::of(Some(&ColumnType::new(Physical::Int32).with_logical(Logical::Date)))
    .unwrap_err();
  assert!(err.to_string().contains("Int32 (Date)"));
  OK
}

#[test]
fn test_truncator() -> Void {
  let t = Truncator::new(Some(&ColumnType::new(Physical::Binary)), Conf::default())?;
  let a = "a".repeat(100);
  let v = MinMax::new(a.as_str(), a.as_str());

  let idx = t.column_index(&v);
  assert_eq!(idx.min, Binary::from("a".repeat(COLUMN_INDEX_TRUNCATE_LEN)));
  let mut max = "a".repeat(COLUMN_INDEX_TRUNCATE_LEN - 1);
  max.push('b');
  assert_eq!(idx.max, Binary::from(max));

  assert_eq!(t.statistics(&v), v);
  OK
}

#[test]
fn test_truncator_conf() -> Void {
  let conf = Conf::default()
    .with_column_index_truncate_len(4)
    .with_statistics_truncate_len(2);
  let t = Truncator::new(Some(&ColumnType::new(Physical::Binary)), conf)?;
  let v = MinMax::new("apple pie", "banana split");
  assert_eq!(t.column_index(&v), MinMax::new("appl", "banb"));
  assert_eq!(t.statistics(&v), MinMax::new("ap", "bb"));

  let t = Truncator::new(Some(&ColumnType::new(Physical::Int96)), conf)?;
  assert_eq!(t.column_index(&v), v);

  assert!(Truncator::new(Some(&ColumnType::new(Physical::Double)), conf).is_err());
  OK
}

#[test]
fn test_conf_serde() -> Void {
  let conf: Conf = serde_json::from_str("{}")?;
  assert_eq!(conf, Conf::default());
  assert_eq!(conf.statistics_truncate_len, usize::MAX);

  let conf: Conf = serde_json::from_str(r#"{"column_index_truncate_len":16}"#)?;
  assert_eq!(conf.column_index_truncate_len, 16);
  assert_eq!(conf.statistics_truncate_len, usize::MAX);
  OK
}
