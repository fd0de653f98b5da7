pub mod error;
pub mod pages;
pub mod validate;

pub use self::error::*;
pub use self::pages::*;
pub use self::validate::*;
