pub mod reset;

pub use reset::{ConfirmResetRequest, SendOtpRequest, SendOtpResponse};
