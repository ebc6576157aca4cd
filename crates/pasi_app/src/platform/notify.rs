/// Side channel for messages the user must see (the page would use an alert).
pub trait UserNotifier: Send {
    fn notify(&self, message: &str);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalNotifier;

impl UserNotifier for TerminalNotifier {
    fn notify(&self, message: &str) {
        println!("!! {message}");
    }
}
