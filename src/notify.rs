/// User-facing notification channel.
///
/// The transport layer never talks to the user directly; callers decide
/// how a failure is presented by picking the `Notifier` implementation.
pub trait Notifier: Send + Sync {
    fn alert(&self, message: &str);
}

/// Writes notifications to stderr.
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn alert(&self, message: &str) {
        eprintln!("{}", message);
    }
}
