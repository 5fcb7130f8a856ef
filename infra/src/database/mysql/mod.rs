//! MySQL repository implementations

pub mod application_directory_impl;
pub mod otp_store_impl;

pub use application_directory_impl::MySqlApplicationDirectory;
pub use otp_store_impl::MySqlOtpStore;
