pub mod application;
pub mod otp;

pub use application::ApplicationDirectory;
pub use otp::OtpStore;

#[cfg(test)]
pub use application::MockApplicationDirectory;
#[cfg(test)]
pub use otp::MockOtpStore;
