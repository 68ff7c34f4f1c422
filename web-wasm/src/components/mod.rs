//! UIコンポーネント

pub mod about;
pub mod certifications;
pub mod contact;
pub mod experience;
pub mod footer;
pub mod hero;
pub mod navbar;
pub mod projects;
pub mod research;
pub mod scroll_top;
pub mod skills;
