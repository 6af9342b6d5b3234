use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("No active white star has a participant with rank index {0}")]
    UnknownRankIndex(i32),
    #[error("Match clock offset of {offset_seconds}s is outside the white star duration")]
    TimeOffsetOutOfRange { offset_seconds: i64 },
}
