//! Tests for the OTP engine
