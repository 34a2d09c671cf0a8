//! Page components, one per route.

pub mod editor;
pub mod not_found;
pub mod workflow_list;

pub use editor::Editor;
pub use not_found::NotFound;
pub use workflow_list::WorkflowList;
