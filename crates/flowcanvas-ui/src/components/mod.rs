//! Editor building blocks. Each takes the page's session signal.

pub mod canvas;
pub mod inspector;
pub mod node_card;
pub mod palette;

pub use canvas::Canvas;
pub use inspector::InspectorModal;
pub use node_card::NodeCard;
pub use palette::Palette;
