//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and property cards. Data flows one way:
//! the list reads listing state from context and hands each card its record.

pub mod nav_bar;
pub mod property_card;
pub mod property_list;
