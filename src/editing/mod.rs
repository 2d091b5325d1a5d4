//! Editing operations on glyph outlines

pub mod selection;
