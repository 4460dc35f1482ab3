use std::cell::RefCell;

/// Where assertion helpers report a failure
///
/// The channel is told that a check failed and why; nothing is returned.
pub trait FailureChannel {
    fn fail(&self, message: &str);
}

impl<C: FailureChannel + ?Sized> FailureChannel for &C {
    #[track_caller]
    fn fail(&self, message: &str) {
        (**self).fail(message);
    }
}

/// Fails the running test by panicking with the message
#[derive(Debug, Default, Clone, Copy)]
pub struct PanicChannel;

impl FailureChannel for PanicChannel {
    #[track_caller]
    fn fail(&self, message: &str) {
        panic!("{message}");
    }
}

/// Records failures instead of stopping, in the order they were reported
#[derive(Debug, Default)]
pub struct CollectingChannel {
    failures: RefCell<Vec<String>>,
}

impl CollectingChannel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failures(&self) -> Vec<String> {
        self.failures.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.failures.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.failures.borrow().is_empty()
    }

    /// Drain the recorded failures
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.failures.borrow_mut())
    }
}

impl FailureChannel for CollectingChannel {
    fn fail(&self, message: &str) {
        self.failures.borrow_mut().push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic(expected = "boom")]
    fn test_panic_channel_panics_with_message() {
        PanicChannel.fail("boom");
    }

    #[test]
    fn test_collecting_channel_keeps_order() {
        let channel = CollectingChannel::new();
        channel.fail("first");
        channel.fail("second");
        assert_eq!(channel.len(), 2);
        assert_eq!(channel.failures(), vec!["first", "second"]);
    }

    #[test]
    fn test_collecting_channel_take_drains() {
        let channel = CollectingChannel::new();
        channel.fail("only");
        assert_eq!(channel.take(), vec!["only"]);
        assert!(channel.is_empty());
    }

    #[test]
    fn test_channel_by_reference() {
        let channel = CollectingChannel::new();
        let by_ref = &channel;
        by_ref.fail("via reference");
        assert_eq!(channel.failures(), vec!["via reference"]);
    }
}
