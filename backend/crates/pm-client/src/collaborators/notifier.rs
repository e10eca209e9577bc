use pm_core::Message;

/// Shows toast messages to the user.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &Message);
}
