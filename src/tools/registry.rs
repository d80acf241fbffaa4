//! Tool registry with mode-based gating.
//!
//! The [`ToolRegistry`] holds registered tools, provides lookup by name,
//! enforces mode permissions, and exports JSON schemas for LLM API calls.
//! [`dispatch()`](ToolRegistry::dispatch) is the model-facing entry point:
//! whatever goes wrong, the model receives a [`ToolResult`], never an error
//! object.

use std::collections::HashMap;
use std::sync::Arc;

use super::types::{Tool, ToolMode, ToolResult};

/// Registry of available tools with mode-based access control.
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
    mode: ToolMode,
}

impl ToolRegistry {
    /// Create a new empty registry with the given mode.
    pub fn new(mode: ToolMode) -> Self {
        Self {
            tools: HashMap::new(),
            mode,
        }
    }

    /// Register a tool. Replaces any existing tool with the same name.
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        self.tools.insert(tool.name().to_string(), tool);
    }

    /// Get a tool by name, respecting mode gating.
    ///
    /// Returns `None` if the tool doesn't exist or isn't allowed in the
    /// current mode.
    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools
            .get(name)
            .filter(|t| t.allowed_in_mode(self.mode))
            .cloned()
    }

    /// List names of all tools available in the current mode.
    pub fn list_available(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .tools
            .values()
            .filter(|t| t.allowed_in_mode(self.mode))
            .map(|t| t.name())
            .collect();
        names.sort_unstable();
        names
    }

    /// Export JSON schemas for all available tools (for LLM API calls).
    ///
    /// Each entry contains `name`, `description`, and `parameters`.
    pub fn schemas_for_api(&self) -> Vec<serde_json::Value> {
        let mut schemas: Vec<(String, serde_json::Value)> = self
            .tools
            .values()
            .filter(|t| t.allowed_in_mode(self.mode))
            .map(|t| {
                let entry = serde_json::json!({
                    "name": t.name(),
                    "description": t.description(),
                    "parameters": t.schema(),
                });
                (t.name().to_string(), entry)
            })
            .collect();
        schemas.sort_by(|a, b| a.0.cmp(&b.0));
        schemas.into_iter().map(|(_, v)| v).collect()
    }

    /// Execute a named tool, converting every failure into a [`ToolResult`].
    ///
    /// Unknown names, mode-blocked tools, and argument validation errors all
    /// come back as failed results with a short message; nothing unwinds
    /// toward the model.
    pub fn dispatch(&self, name: &str, args: serde_json::Value) -> ToolResult {
        let Some(tool) = self.get(name) else {
            return ToolResult::failure(format!("unknown tool: {name}"));
        };
        match tool.execute(args) {
            Ok(result) => result,
            Err(e) => ToolResult::failure(e.to_string()),
        }
    }

    /// Change the active tool mode.
    pub fn set_mode(&mut self, mode: ToolMode) {
        self.mode = mode;
    }

    /// Returns the current tool mode.
    pub fn mode(&self) -> ToolMode {
        self.mode
    }
}
