pub mod home;
pub mod search;
pub mod section;
