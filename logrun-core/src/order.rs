use crate::record::LogRecord;
use std::cmp::Ordering;

/// Sort records by their derived instant, oldest first.
///
/// The sort is stable: records sharing an instant keep their input order.
/// Records whose timestamp could not be derived have no instant and are
/// placed after all others, again in input order.
pub fn order_chronologically(mut records: Vec<LogRecord>) -> Vec<LogRecord> {
    records.sort_by(compare_chronologically);
    records
}

pub fn compare_chronologically(a: &LogRecord, b: &LogRecord) -> Ordering {
    match (a.timestamp(), b.timestamp()) {
        (Ok(a), Ok(b)) => a.cmp(b),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => Ordering::Equal,
    }
}

/// True when every adjacent pair is already in chronological order.
pub fn is_chronological(records: &[LogRecord]) -> bool {
    records
        .windows(2)
        .all(|pair| compare_chronologically(&pair[0], &pair[1]) != Ordering::Greater)
}
