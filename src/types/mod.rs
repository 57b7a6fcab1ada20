//! Handle, owner, flag, enum and status types.

pub mod abs;
pub mod context_properties;
pub mod enums;
pub mod flags;
pub mod retained;
pub mod status;
