pub mod city;
pub mod config;
pub mod roster;
pub mod sections;
pub mod slug;

pub use self::city::*;
pub use self::config::*;
pub use self::roster::*;
pub use self::sections::*;
pub use self::slug::*;
