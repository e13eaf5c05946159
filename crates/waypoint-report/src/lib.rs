//! waypoint-report — Rendering of assessment reports.

pub mod html;
pub mod markdown;
