//! Functional domains of the server.

pub mod tools;
