//! Page Components

mod home;
mod login;
mod register;
mod status;

pub use home::HomePage;
pub use login::LoginPage;
pub use register::RegisterPage;
pub use status::StatusPage;
