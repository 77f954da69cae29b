//! JSON tool interface over the simulated planner

pub mod simulation;
pub mod tool;

pub use simulation::{parse_request, SimulationTool};
pub use tool::{Tool, ToolRegistry};
