pub mod check;
mod command_result;
pub mod emit;
pub mod helper;
pub mod init;
pub mod list;

pub use command_result::*;
