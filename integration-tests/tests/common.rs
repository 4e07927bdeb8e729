use logrun_core::group::Group;
use logrun_core::record::LogRecord;

#[allow(dead_code)]
pub fn group_shape(groups: &[Group<'_>]) -> Vec<(String, usize)> {
    groups
        .iter()
        .map(|g| (g.value.to_string(), g.len()))
        .collect()
}

#[allow(dead_code)]
pub fn times(records: &[LogRecord]) -> Vec<&str> {
    records.iter().map(LogRecord::time_text).collect()
}
