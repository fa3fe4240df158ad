pub mod announce;
pub mod breakpoint;
pub mod dom;
pub mod dropdown;
pub mod sections;
pub mod swipe;

pub use announce::{AnnounceError, AnnounceLoader, AnnounceSlot, MountGuard};
pub use breakpoint::{use_breakpoint, Breakpoint};
pub use dropdown::{Anchor, DropdownState};
pub use sections::HeaderSections;
