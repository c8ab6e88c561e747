// Business logic services
// Event dispatch, message rendering, chat delivery

pub mod dispatcher;
pub mod messages;
pub mod notifier;
pub mod relay;
pub mod telegram;

pub use dispatcher::{Dispatch, EventDispatcher, NotificationKind};
pub use notifier::Notifier;
pub use relay::RelayService;
pub use telegram::TelegramNotifier;
