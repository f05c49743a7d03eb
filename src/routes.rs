pub mod greeting;
pub mod health;
pub mod version;
