//! Request and response bodies

pub mod employee;
