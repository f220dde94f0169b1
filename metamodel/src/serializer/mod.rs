//! Serializers for the Aspect Meta Model vocabulary.
//!
//! Only Turtle ([`turtle`]) is supported; it is the serialization Aspect
//! Models themselves are written in.

pub mod turtle;
