//! Request/response helpers shared by controllers.

pub mod crypto;
pub mod multipart;
pub mod parse;
pub mod response;
