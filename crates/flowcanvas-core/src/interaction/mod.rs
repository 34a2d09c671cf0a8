//! Pointer hit-testing against component anchors


pub use hit_test::{HitTestResult, anchor_at, circle_hit_test};
