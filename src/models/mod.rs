pub mod auth;
pub mod blog;
pub mod session;

pub use auth::{LoginRequest, SignupRequest, SimpleResponse, UpdateProfileRequest};
pub use blog::{BlogListSnapshot, BlogPost, BlogTextRequest, GetBlogsResponse};
pub use session::{CheckLoginResponse, Session};
