//! Project domain module.
//!
//! Projects describe embroidery pieces independently of the weekly session
//! log: practice work tracked by stitch count, or commissions for a client.

mod cost_info;
mod item;

pub use cost_info::CostInfo;
pub use item::{Project, ProjectKind};
