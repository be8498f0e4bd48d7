//! Cursor adapters

mod checked;
mod fuse;
mod std_bridge;

pub use checked::Checked;
pub use fuse::Fuse;
pub use std_bridge::{from_std, FromStd, Std};
