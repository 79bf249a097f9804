pub mod catalog;
pub mod favorite;
pub mod list;
pub mod practice;
pub mod remove;
pub mod review;
pub mod save;
pub mod stats;
pub mod today;
