pub mod app;
pub mod blog_card;
pub mod blog_list;
pub mod login_modal;
pub mod navbar;
pub mod settings_modal;
pub mod signup_modal;

pub use app::render_app;
pub use blog_card::render_blog_card;
pub use blog_list::{reload_blogs, render_blog_page};
pub use login_modal::render_login_modal;
pub use navbar::render_navbar;
pub use settings_modal::render_settings_modal;
pub use signup_modal::render_signup_modal;
