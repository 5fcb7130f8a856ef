//! Integration tests for the OTP issue and verify lifecycle

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicI64, Ordering};
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use chrono::{DateTime, Duration, Utc};

    use ob_core::domain::entities::application::ApplicationRef;
    use ob_core::domain::entities::otp::{DispatchMode, OtpRecord};
    use ob_core::errors::{DispatchError, DomainError, OtpError};
    use ob_core::repositories::{ApplicationDirectory, OtpStore};
    use ob_core::services::channels::{MailChannel, SmsChannel};
    use ob_core::services::otp::{
        OtpCleanupConfig, OtpCleanupService, OtpConfig, OtpService, VerificationOutcome,
        VerifyRequest,
    };

    // In-memory store reproducing the production ordering and compare-and-set
    // semantics
    struct InMemoryOtpStore {
        records: Mutex<Vec<OtpRecord>>,
        next_id: AtomicI64,
    }

    impl InMemoryOtpStore {
        fn new() -> Self {
            Self {
                records: Mutex::new(Vec::new()),
                next_id: AtomicI64::new(1),
            }
        }

        fn len(&self) -> usize {
            self.records.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl OtpStore for InMemoryOtpStore {
        async fn save(&self, mut record: OtpRecord) -> Result<OtpRecord, DomainError> {
            let mut records = self.records.lock().unwrap();
            record.id = Some(self.next_id.fetch_add(1, Ordering::SeqCst));
            records.push(record.clone());
            Ok(record)
        }

        async fn find_latest_by_recipient(
            &self,
            recipient: &str,
        ) -> Result<Option<OtpRecord>, DomainError> {
            let records = self.records.lock().unwrap();
            Ok(records
                .iter()
                .filter(|r| r.recipient == recipient)
                .max_by_key(|r| (r.created_at, r.id))
                .cloned())
        }

        async fn mark_used(&self, id: i64) -> Result<bool, DomainError> {
            let mut records = self.records.lock().unwrap();
            match records.iter_mut().find(|r| r.id == Some(id) && !r.used) {
                Some(record) => {
                    record.used = true;
                    Ok(true)
                }
                None => Ok(false),
            }
        }

        async fn delete_older_than(&self, cutoff: DateTime<Utc>) -> Result<u64, DomainError> {
            let mut records = self.records.lock().unwrap();
            let before = records.len();
            records.retain(|r| r.created_at >= cutoff);
            Ok((before - records.len()) as u64)
        }
    }

    struct EmptyDirectory;

    #[async_trait]
    impl ApplicationDirectory for EmptyDirectory {
        async fn find_by_id(&self, _id: i64) -> Result<Option<ApplicationRef>, DomainError> {
            Ok(None)
        }

        async fn find_by_app_id(
            &self,
            _app_id: &str,
        ) -> Result<Option<ApplicationRef>, DomainError> {
            Ok(None)
        }
    }

    struct RecordingSms {
        sent: Mutex<Vec<(String, String)>>,
    }

    impl RecordingSms {
        fn new() -> Self {
            Self {
                sent: Mutex::new(Vec::new()),
            }
        }

        fn sent_count(&self) -> usize {
            self.sent.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl SmsChannel for RecordingSms {
        async fn send(&self, number: &str, message: &str) -> Result<String, DispatchError> {
            let mut sent = self.sent.lock().unwrap();
            sent.push((number.to_string(), message.to_string()));
            Ok(format!("msg_id_{}", sent.len()))
        }
    }

    struct RecordingMail {
        sent: Mutex<Vec<(String, String, String)>>,
    }

    impl RecordingMail {
        fn new() -> Self {
            Self {
                sent: Mutex::new(Vec::new()),
            }
        }

        fn sent_count(&self) -> usize {
            self.sent.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl MailChannel for RecordingMail {
        async fn send(
            &self,
            address: &str,
            subject: &str,
            html_body: &str,
        ) -> Result<String, DispatchError> {
            let mut sent = self.sent.lock().unwrap();
            sent.push((
                address.to_string(),
                subject.to_string(),
                html_body.to_string(),
            ));
            Ok(format!("msg_id_{}", sent.len()))
        }
    }

    type Engine = OtpService<InMemoryOtpStore, EmptyDirectory, RecordingSms, RecordingMail>;

    fn build_engine() -> (Arc<InMemoryOtpStore>, Arc<RecordingSms>, Arc<RecordingMail>, Engine) {
        let store = Arc::new(InMemoryOtpStore::new());
        let sms = Arc::new(RecordingSms::new());
        let mail = Arc::new(RecordingMail::new());
        let engine = OtpService::new(
            store.clone(),
            Arc::new(EmptyDirectory),
            sms.clone(),
            mail.clone(),
            OtpConfig::default(),
        );
        (store, sms, mail, engine)
    }

    #[tokio::test]
    async fn test_complete_otp_lifecycle() {
        let (store, sms, _mail, engine) = build_engine();
        let recipient = "9876543210";

        // Step 1: generate and dispatch a code over SMS
        let receipt = engine.generate(recipient, "sms").await.unwrap();
        assert_eq!(receipt.record.code.len(), 6);
        assert!(receipt.record.code.chars().all(|c| c.is_ascii_digit()));
        assert_eq!(receipt.mode, DispatchMode::Sms);
        assert_eq!(sms.sent_count(), 1);
        assert_eq!(store.len(), 1);

        let code = receipt.record.code.clone();

        // Step 2: a wrong code is reported without consuming the record
        let wrong = if code == "000000" { "000001" } else { "000000" };
        let outcome = engine
            .verify(VerifyRequest::for_recipient(
                recipient.to_string(),
                wrong.to_string(),
            ))
            .await
            .unwrap();
        assert_eq!(outcome, VerificationOutcome::InvalidCode);

        // Step 3: the correct code verifies within the expiry window
        let outcome = engine
            .verify(VerifyRequest::for_recipient(
                recipient.to_string(),
                code.clone(),
            ))
            .await
            .unwrap();
        assert_eq!(outcome, VerificationOutcome::Verified);

        // Step 4: the consumed code cannot be replayed
        let outcome = engine
            .verify(VerifyRequest::for_recipient(recipient.to_string(), code))
            .await
            .unwrap();
        assert_eq!(outcome, VerificationOutcome::AlreadyUsed);
    }

    #[tokio::test]
    async fn test_invalid_mode_leaves_no_trace() {
        let (store, sms, mail, engine) = build_engine();

        let result = engine.generate("9876543210", "fax").await;
        match result.unwrap_err() {
            DomainError::Otp(OtpError::InvalidMode { mode }) => assert_eq!(mode, "fax"),
            other => panic!("Expected InvalidMode error, got {:?}", other),
        }

        assert_eq!(store.len(), 0);
        assert_eq!(sms.sent_count(), 0);
        assert_eq!(mail.sent_count(), 0);
    }

    #[tokio::test]
    async fn test_email_channel_round_trip() {
        let (store, sms, mail, engine) = build_engine();

        let receipt = engine
            .generate("john.doe@example.com", "email")
            .await
            .unwrap();
        assert_eq!(mail.sent_count(), 1);
        assert_eq!(sms.sent_count(), 0);
        assert_eq!(store.len(), 1);

        let outcome = engine
            .verify(VerifyRequest::for_recipient(
                "john.doe@example.com".to_string(),
                receipt.record.code,
            ))
            .await
            .unwrap();
        assert_eq!(outcome, VerificationOutcome::Verified);
    }

    #[tokio::test]
    async fn test_expiry_and_retention_are_distinct_horizons() {
        let (store, _sms, _mail, engine) = build_engine();

        // A six-hour-old record is far past the five-minute expiry window
        // yet still inside the 24-hour retention window.
        let mut aged = OtpRecord::new(
            "9876543210".to_string(),
            "123456".to_string(),
            DispatchMode::Sms,
        );
        aged.created_at = Utc::now() - Duration::hours(6);
        store.save(aged).await.unwrap();

        let outcome = engine
            .verify(VerifyRequest::for_recipient(
                "9876543210".to_string(),
                "123456".to_string(),
            ))
            .await
            .unwrap();
        assert_eq!(outcome, VerificationOutcome::Expired);

        // The sweeper keeps it: expiry never deletes, retention does
        let sweeper = OtpCleanupService::new(store.clone(), OtpCleanupConfig::default());
        assert_eq!(sweeper.run_cleanup().await.unwrap(), 0);
        assert_eq!(store.len(), 1);

        // Once past retention the same record is purged
        let mut ancient = OtpRecord::new(
            "9876543210".to_string(),
            "654321".to_string(),
            DispatchMode::Sms,
        );
        ancient.created_at = Utc::now() - Duration::hours(25);
        store.save(ancient).await.unwrap();

        assert_eq!(sweeper.run_cleanup().await.unwrap(), 1);
        assert_eq!(store.len(), 1);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_concurrent_verification_has_one_winner() {
        let (_store, _sms, _mail, engine) = build_engine();
        let engine = Arc::new(engine);

        let receipt = engine.generate("9876543210", "sms").await.unwrap();
        let code = receipt.record.code;

        let mut handles = Vec::new();
        for _ in 0..8 {
            let engine = engine.clone();
            let code = code.clone();
            handles.push(tokio::spawn(async move {
                engine
                    .verify(VerifyRequest::for_recipient("9876543210".to_string(), code))
                    .await
                    .unwrap()
            }));
        }

        let mut verified = 0;
        let mut already_used = 0;
        for handle in handles {
            match handle.await.unwrap() {
                VerificationOutcome::Verified => verified += 1,
                VerificationOutcome::AlreadyUsed => already_used += 1,
                other => panic!("Unexpected outcome under contention: {:?}", other),
            }
        }

        assert_eq!(verified, 1);
        assert_eq!(already_used, 7);
    }
}
