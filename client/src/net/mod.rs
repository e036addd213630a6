//! Networking for the floor viewers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only request the viewer makes is a GET for the static floor document;
//! `floor_doc` wraps it and maps failures onto the engine's `LoadError`.

pub mod floor_doc;
