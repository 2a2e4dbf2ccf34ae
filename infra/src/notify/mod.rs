//! Out-of-band OTP delivery.

mod log_transport;

pub use log_transport::LogOtpTransport;
