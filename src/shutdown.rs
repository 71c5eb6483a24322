use tokio::sync::broadcast;

pub type ShutdownSender = broadcast::Sender<()>;

/// Single signal fan-out.
const SHUTDOWN_CHANNEL_CAPACITY: usize = 1;

/// Creates the sender; listeners attach with `subscribe`.
#[must_use]
pub fn shutdown_channel() -> ShutdownSender {
    let (sender, _) = broadcast::channel::<()>(SHUTDOWN_CHANNEL_CAPACITY);
    sender
}
