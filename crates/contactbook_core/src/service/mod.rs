//! Core use-case services.
//!
//! # Responsibility
//! - Coordinate the arena, list, index and graph as one contact book.
//! - Keep UI/FFI layers decoupled from data structure details.

pub mod command;
pub mod contact_book;
