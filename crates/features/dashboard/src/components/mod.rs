mod dashboard;
mod menu;
mod not_found;
mod page_view;
mod shell;

pub use self::dashboard::Dashboard;
pub use self::menu::Menu;
pub use self::not_found::NotFound;
pub use self::page_view::PageView;
pub use self::shell::{App, Shell, ShellProps};
