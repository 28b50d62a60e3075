pub mod blog_viewmodel;
pub mod session_viewmodel;

pub use blog_viewmodel::BlogViewModel;
pub use session_viewmodel::SessionViewModel;
