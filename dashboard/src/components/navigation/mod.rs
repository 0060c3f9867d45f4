pub mod side_nav;
pub mod top_navbar;

pub use side_nav::SideNav;
pub use top_navbar::{Breadcrumbs, TopNavbar};
