pub mod blog;
pub mod catalog;
pub mod config;
pub mod contact;
pub mod cursor;
pub mod date;
pub mod globe;
pub mod header;
pub mod home;
pub mod hooks;
pub mod navigation;
pub mod projects;
pub mod routes;
pub mod scene;
pub mod starfield;
pub mod state;
pub mod theme;
pub mod widgets;
