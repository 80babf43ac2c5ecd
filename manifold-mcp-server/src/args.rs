//! Normalisation of loosely typed tool arguments into API values.

/// Drops empty strings so they are never forwarded.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}

/// Whole-number form of a positive count; zero and negatives mean "unset".
pub(crate) fn positive(value: Option<f64>) -> Option<u64> {
    value.filter(|value| *value > 0.0).map(|value| value as u64)
}

/// Integer fields such as millisecond timestamps arrive as JSON numbers.
pub(crate) fn whole(value: Option<f64>) -> Option<i64> {
    value.map(|value| value as i64)
}

/// Splits a comma separated list, trimming each entry.
pub(crate) fn split_list(value: &str) -> Vec<String> {
    value.split(',').map(|part| part.trim().to_string()).collect()
}

pub(crate) fn positive_amount(value: Option<f64>) -> Option<f64> {
    value.filter(|value| *value > 0.0)
}
