pub mod buy;
pub mod delete;
pub mod describe;
pub mod gallery;
pub mod hide_builtins;
pub mod lang;
pub mod login;
pub mod logout;
pub mod map;
pub mod status;
pub mod upload;

mod utils;
