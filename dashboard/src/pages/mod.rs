pub mod dashboard;
pub mod login;
pub mod not_found;
pub mod profile;

pub use dashboard::Dashboard;
pub use login::Login;
pub use not_found::NotFound;
pub use profile::Profile;
