//! Route handlers grouped by resource.

pub mod auth;
pub mod calendar;
pub mod drive;
pub mod health;
pub mod home;
pub mod mail;
pub mod users;
