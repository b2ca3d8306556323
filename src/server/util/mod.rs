//! Small helpers shared by services and controllers.

pub mod code;
pub mod money;
pub mod multipart;
pub mod parse;
