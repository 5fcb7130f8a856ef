//! Tests for the resume flow and notifier
