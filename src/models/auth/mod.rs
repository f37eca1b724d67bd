pub mod entities;
pub mod requests;
pub mod responses;

pub use entities::{Admin, Principal, PrincipalRole};
pub use requests::LoginRequest;
