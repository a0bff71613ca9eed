use thiserror::Error;

/// Record-level mapping failures. One bad record never fails a batch; the
/// caller decides whether to skip or surface it.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("record {id}: negative amount {amount}")]
    NegativeAmount { id: String, amount: f64 },

    #[error("record {id}: unparsable {field} `{value}`")]
    InvalidDate {
        id: String,
        field: &'static str,
        value: String,
    },
}
