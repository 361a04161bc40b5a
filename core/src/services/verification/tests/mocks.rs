//! Mock implementations for testing the verification gate

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use crate::domain::entities::verification_record::VerificationRecord;
use crate::services::verification::traits::{NotificationSenderTrait, VerificationStoreTrait};
use crate::services::verification::types::DeliveryConfig;

/// How the mock sender should respond
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendBehavior {
    Accept,
    Reject,
    Fault,
}

// Mock notification sender for testing
pub struct MockNotificationSender {
    pub sent_messages: Arc<Mutex<Vec<(String, String, DeliveryConfig)>>>,
    pub behavior: Mutex<SendBehavior>,
}

impl MockNotificationSender {
    pub fn new(behavior: SendBehavior) -> Self {
        Self {
            sent_messages: Arc::new(Mutex::new(Vec::new())),
            behavior: Mutex::new(behavior),
        }
    }

    pub fn set_behavior(&self, behavior: SendBehavior) {
        *self.behavior.lock().unwrap() = behavior;
    }

    pub fn send_count(&self) -> usize {
        self.sent_messages.lock().unwrap().len()
    }

    pub fn last_message(&self) -> Option<String> {
        self.sent_messages
            .lock()
            .unwrap()
            .last()
            .map(|(_, message, _)| message.clone())
    }

    /// Extract the six-digit code from the most recent message
    pub fn last_code(&self) -> Option<String> {
        let message = self.last_message()?;
        let start = message.find("is: ")? + 4;
        Some(message[start..start + 6].to_string())
    }
}

#[async_trait]
impl NotificationSenderTrait for MockNotificationSender {
    async fn send(
        &self,
        destination: &str,
        message: &str,
        config: &DeliveryConfig,
    ) -> Result<bool, String> {
        self.sent_messages.lock().unwrap().push((
            destination.to_string(),
            message.to_string(),
            config.clone(),
        ));
        match *self.behavior.lock().unwrap() {
            SendBehavior::Accept => Ok(true),
            SendBehavior::Reject => Ok(false),
            SendBehavior::Fault => Err("connection reset by peer".to_string()),
        }
    }
}

// Mock single-slot store for testing
pub struct MockVerificationStore {
    pub slot: Mutex<Option<VerificationRecord>>,
    pub fail_reads: AtomicBool,
    pub fail_writes: AtomicBool,
    pub fail_deletes: AtomicBool,
}

impl MockVerificationStore {
    pub fn new() -> Self {
        Self {
            slot: Mutex::new(None),
            fail_reads: AtomicBool::new(false),
            fail_writes: AtomicBool::new(false),
            fail_deletes: AtomicBool::new(false),
        }
    }

    pub fn current(&self) -> Option<VerificationRecord> {
        self.slot.lock().unwrap().clone()
    }

    pub fn put(&self, record: VerificationRecord) {
        *self.slot.lock().unwrap() = Some(record);
    }
}

#[async_trait]
impl VerificationStoreTrait for MockVerificationStore {
    async fn get(&self) -> Result<Option<VerificationRecord>, String> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err("Store read error".to_string());
        }
        Ok(self.current())
    }

    async fn set(&self, record: &VerificationRecord) -> Result<(), String> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err("Store write error".to_string());
        }
        self.put(record.clone());
        Ok(())
    }

    async fn delete(&self) -> Result<(), String> {
        if self.fail_deletes.load(Ordering::SeqCst) {
            return Err("Store delete error".to_string());
        }
        *self.slot.lock().unwrap() = None;
        Ok(())
    }
}
