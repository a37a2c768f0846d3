pub mod api;
pub mod dates;
pub mod domain;
pub mod system;
pub mod validate;
