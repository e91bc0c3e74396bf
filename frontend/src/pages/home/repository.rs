use super::utils::{ContactError, ContactMessage};
use std::rc::Rc;

/// Where accepted contact messages go. No server contract exists yet, so the
/// shipped implementation only writes to the log.
pub trait ContactDelivery {
    fn deliver(&self, message: &ContactMessage) -> Result<(), ContactError>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct LogDelivery;

impl ContactDelivery for LogDelivery {
    fn deliver(&self, message: &ContactMessage) -> Result<(), ContactError> {
        log::info!(
            "contact message from {} <{}> ({} chars)",
            message.name,
            message.email,
            message.message.chars().count()
        );
        Ok(())
    }
}

#[derive(Clone)]
pub struct ContactRepository {
    delivery: Rc<dyn ContactDelivery>,
}

impl Default for ContactRepository {
    fn default() -> Self {
        Self::new_with_delivery(Rc::new(LogDelivery))
    }
}

impl ContactRepository {
    pub fn new_with_delivery(delivery: Rc<dyn ContactDelivery>) -> Self {
        Self { delivery }
    }

    pub fn send(&self, message: &ContactMessage) -> Result<(), ContactError> {
        self.delivery.deliver(message).map_err(|err| {
            log::error!("contact delivery failed: {}", err);
            err
        })
    }
}
