//! Shared UI Components

mod layout;
mod pager;
mod sidebar;
mod top_bar;

pub use layout::AdminLayout;
pub use pager::Pager;
pub use sidebar::Sidebar;
pub use top_bar::TopBar;
