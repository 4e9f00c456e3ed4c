//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome (header, cards, loading placeholders)
//! while pages own route-scoped orchestration.

pub mod course_card;
pub mod header;
pub mod skeleton;
