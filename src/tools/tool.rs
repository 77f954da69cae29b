use serde_json::Value;
use std::{collections::BTreeMap, sync::Arc};

use super::SimulationTool;
use crate::{
    error::{PlannerError, Result},
    simulation::{SimulationKind, Simulator},
};

/// A planner operation callable with JSON parameters
pub trait Tool: Send + Sync + std::fmt::Debug {
    /// The name of the tool (used to dispatch calls)
    fn name(&self) -> &'static str;

    /// A description of what the tool does
    fn description(&self) -> &'static str;

    /// JSON Schema for the tool's parameters
    fn parameters_schema(&self) -> Value;

    /// Execute the tool with given parameters
    fn execute(
        &self,
        parameters: Value,
    ) -> std::pin::Pin<Box<dyn std::future::Future<Output = Result<Value>> + Send + '_>>;
}

/// Registry for available tools
#[derive(Debug, Default)]
pub struct ToolRegistry {
    tools: BTreeMap<String, Box<dyn Tool>>,
}

impl ToolRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with one tool per simulation kind, all backed by `simulator`
    pub fn planner(simulator: Arc<Simulator>) -> Self {
        let mut registry = Self::new();
        for kind in SimulationKind::ALL {
            registry.register(SimulationTool::new(kind, Arc::clone(&simulator)));
        }
        registry
    }

    /// Register a tool
    pub fn register<T: Tool + 'static>(&mut self, tool: T) {
        self.tools.insert(tool.name().to_string(), Box::new(tool));
    }

    /// Get a tool by name
    pub fn get(&self, name: &str) -> Option<&dyn Tool> {
        self.tools.get(name).map(|tool| tool.as_ref())
    }

    /// Check if a tool exists
    pub fn has_tool(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Get all registered tools, ordered by name
    pub fn list(&self) -> Vec<&dyn Tool> {
        self.tools.values().map(|tool| tool.as_ref()).collect()
    }

    /// Execute a tool by name. Unknown names are invalid simulation kinds.
    pub async fn execute(&self, name: &str, parameters: Value) -> Result<Value> {
        let tool = self
            .get(name)
            .ok_or_else(|| PlannerError::InvalidSimulationKind(name.to_string()))?;

        tool.execute(parameters).await
    }

    /// Describe every tool as `{ name, description, parameters }`
    pub fn manifest(&self) -> Vec<Value> {
        self.tools
            .values()
            .map(|tool| {
                serde_json::json!({
                    "name": tool.name(),
                    "description": tool.description(),
                    "parameters": tool.parameters_schema()
                })
            })
            .collect()
    }
}
