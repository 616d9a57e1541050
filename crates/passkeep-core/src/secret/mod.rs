//! Secret storage primitives.
//!
//! - **buffer**: owned characters, shredded on drop
//! - **view**: borrowed, non-copying windows for comparison code
//! - **shred**: zero-then-random overwrite of byte and char buffers

pub mod buffer;
pub mod shred;
pub mod view;

pub use buffer::SecretBuffer;
pub use shred::{shred, Shred};
pub use view::SecretView;
