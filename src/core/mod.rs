pub mod add;
pub mod edit;
pub mod filter;
pub mod rename;
pub mod report;
pub mod reset;
pub mod show;
pub mod timefmt;
pub mod timezone;
