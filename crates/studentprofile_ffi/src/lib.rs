//! FFI bindings crate for the student profile editor.

pub mod api;
