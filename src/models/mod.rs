pub mod coffee;
pub mod responses;
pub mod user;

pub use coffee::*;
pub use responses::*;
pub use user::*;
