//! Pure helper functions shared by the engines

pub mod time;
