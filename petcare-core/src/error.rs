use thiserror::Error;

#[derive(Error, Debug)]
pub enum HistoryError {
    #[error("No products used in the last {window_days} days")]
    NoRecentProducts { window_days: i64 },
}
