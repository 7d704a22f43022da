pub mod message;
pub mod news;
pub mod product;
pub mod project;
pub mod user;
pub mod waitlist;
