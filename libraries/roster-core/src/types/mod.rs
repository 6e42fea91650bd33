mod user;

pub use user::{NewUser, User, UserId};
