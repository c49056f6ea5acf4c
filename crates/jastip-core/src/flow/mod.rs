//! Page Controllers
//!
//! What each page does in response to user events, independent of how the
//! page is rendered. Controllers borrow their collaborators for the length
//! of one event, so the same code runs against the browser and the test
//! doubles.

mod greeting;
mod home;
mod login;
mod register;

pub use greeting::{BACKEND_UNREACHABLE, check_backend};
pub use home::HomeController;
pub use login::LoginController;
pub use register::RegisterController;
