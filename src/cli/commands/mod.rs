pub mod add;
pub mod edit;
pub mod list;
pub mod rename;
pub mod reset;
pub mod show;
pub mod timezone;
