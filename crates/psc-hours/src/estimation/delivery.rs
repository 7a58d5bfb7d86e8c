/// Outbound delivery seam for rendered estimate documents.
///
/// Implementations own the transport (mail, PDF hand-off, a test buffer);
/// the estimator only hands them opaque bytes and a destination address.
pub trait ReportSink: Send + Sync {
    fn deliver(&self, destination: &str, document: &[u8]) -> Result<(), DeliveryError>;
}

/// Delivery dispatch error. Distinct from any computation error: when a
/// sink fails, the hours were still computed correctly.
#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    #[error("delivery transport unavailable: {0}")]
    Transport(String),
    #[error("destination '{0}' was rejected")]
    Rejected(String),
}
