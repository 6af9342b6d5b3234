/// Chat location of the art poll whose results are being watched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitoredPoll {
    pub channel_id: String,
    pub message_id: String,
}
