pub mod config;
pub mod cores;
pub mod empty_dirs;
pub mod entry;
pub mod frame;
pub mod input;
pub mod quick_jump;
pub mod scanner;
pub mod services;
pub mod session;
pub mod view;
pub mod viewport;

pub use config::Config;
pub use entry::{Entry, EntryKind, LaunchTarget};
pub use frame::{Frame, Legend, Row, Screen};
pub use input::Buttons;
pub use services::{Renderer, Services};
pub use session::BrowserSession;
pub use view::ViewId;
