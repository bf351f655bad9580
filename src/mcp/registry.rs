//! Tool Registry: the ordered, process-wide catalog of tool definitions.
//!
//! Each definition is keyed by a [`ToolName`] variant, and the dispatcher
//! matches exhaustively on that enum, so adding a tool means touching both.
//! [`verify`] runs at startup and rejects any drift between the two.

use std::collections::HashSet;
use std::str::FromStr;
use std::sync::{Arc, LazyLock};

use schemars::JsonSchema;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::mcp::types::{
    DaemonStartArgs, DaemonStopArgs, JointTarget, ListMovesArgs, NoArgs, PlayDanceArgs,
    PlayEmotionArgs, PlayMoveArgs,
};
use crate::ReachyError;

pub type JsonObject = Map<String, Value>;

/// Closed set of tool identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolName {
    HealthCheck,
    DaemonWakeup,
    ShutdownReachy,
    DaemonStatus,
    DaemonStart,
    DaemonStop,
    GetRobotState,
    MoveSetTarget,
    PlayEmotion,
    PlayDance,
    PlayMove,
    ListEmotions,
    ListDances,
    ListMoves,
    GetCameraStream,
}

impl ToolName {
    pub const ALL: [ToolName; 15] = [
        ToolName::HealthCheck,
        ToolName::DaemonWakeup,
        ToolName::ShutdownReachy,
        ToolName::DaemonStatus,
        ToolName::DaemonStart,
        ToolName::DaemonStop,
        ToolName::GetRobotState,
        ToolName::MoveSetTarget,
        ToolName::PlayEmotion,
        ToolName::PlayDance,
        ToolName::PlayMove,
        ToolName::ListEmotions,
        ToolName::ListDances,
        ToolName::ListMoves,
        ToolName::GetCameraStream,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ToolName::HealthCheck => "health_check",
            ToolName::DaemonWakeup => "daemon_wakeup",
            ToolName::ShutdownReachy => "shutdown_reachy",
            ToolName::DaemonStatus => "daemon_status",
            ToolName::DaemonStart => "daemon_start",
            ToolName::DaemonStop => "daemon_stop",
            ToolName::GetRobotState => "get_robot_state",
            ToolName::MoveSetTarget => "move_set_target",
            ToolName::PlayEmotion => "play_emotion",
            ToolName::PlayDance => "play_dance",
            ToolName::PlayMove => "play_move",
            ToolName::ListEmotions => "list_emotions",
            ToolName::ListDances => "list_dances",
            ToolName::ListMoves => "list_moves",
            ToolName::GetCameraStream => "get_camera_stream",
        }
    }
}

impl std::fmt::Display for ToolName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToolName {
    type Err = ReachyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ToolName::ALL
            .into_iter()
            .find(|tool| tool.as_str() == s)
            .ok_or_else(|| ReachyError::UnknownTool(s.to_string()))
    }
}

/// Immutable description of one tool as advertised to the host.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDefinition {
    #[serde(skip)]
    pub tool: ToolName,
    pub name: &'static str,
    pub description: &'static str,
    pub input_schema: Arc<JsonObject>,
}

impl ToolDefinition {
    fn new<T: JsonSchema>(tool: ToolName, description: &'static str) -> Self {
        Self {
            tool,
            name: tool.as_str(),
            description,
            input_schema: input_schema::<T>(),
        }
    }

    /// Properties declared by the input schema.
    pub fn properties(&self) -> Option<&JsonObject> {
        self.input_schema.get("properties").and_then(Value::as_object)
    }

    /// Names listed under `required`.
    pub fn required(&self) -> Vec<&str> {
        self.input_schema
            .get("required")
            .and_then(Value::as_array)
            .map(|names| names.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }
}

/// Generate an object schema for `T`, trimmed for tool listings.
pub fn input_schema<T: JsonSchema>() -> Arc<JsonObject> {
    let schema = schemars::schema_for!(T);
    let mut object = schema.as_object().cloned().unwrap_or_default();
    object.remove("$schema");
    object.remove("title");
    object.remove("description");
    object
        .entry("type")
        .or_insert_with(|| Value::String("object".into()));
    object
        .entry("properties")
        .or_insert_with(|| Value::Object(Map::new()));
    Arc::new(object)
}

static REGISTRY: LazyLock<Vec<ToolDefinition>> = LazyLock::new(build_registry);

fn build_registry() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition::new::<NoArgs>(
            ToolName::HealthCheck,
            "Check if the Reachy Mini dashboard is responding. Use this to verify the robot is reachable.",
        ),
        ToolDefinition::new::<NoArgs>(
            ToolName::DaemonWakeup,
            "Trigger the daemon wake-up sequence (full robot wake). Checks status, calls the wake endpoint, enables motors and reports a per-step summary.",
        ),
        ToolDefinition::new::<NoArgs>(
            ToolName::ShutdownReachy,
            "Shutdown Reachy Mini: stop running moves, request sleep and stop the daemon; returns status after each step.",
        ),
        ToolDefinition::new::<NoArgs>(
            ToolName::DaemonStatus,
            "Get the current daemon health status. Returns daemon state and backend status.",
        ),
        ToolDefinition::new::<DaemonStartArgs>(
            ToolName::DaemonStart,
            "Start the Reachy Mini daemon. Optionally wake up the robot motors.",
        ),
        ToolDefinition::new::<DaemonStopArgs>(
            ToolName::DaemonStop,
            "Stop the Reachy Mini daemon. Optionally play the sleep animation first.",
        ),
        ToolDefinition::new::<NoArgs>(
            ToolName::GetRobotState,
            "Get a snapshot of the full robot state including joint positions, velocities, and sensor data.",
        ),
        ToolDefinition::new::<JointTarget>(
            ToolName::MoveSetTarget,
            "Set the target position for the robot's head/body. Use this for direct joint control. Only the joints you pass are moved.",
        ),
        ToolDefinition::new::<PlayEmotionArgs>(
            ToolName::PlayEmotion,
            "Play a recorded emotion animation on the robot. Over 70 emotions available.",
        ),
        ToolDefinition::new::<PlayDanceArgs>(
            ToolName::PlayDance,
            "Play a recorded dance animation on the robot. 19 dances available.",
        ),
        ToolDefinition::new::<PlayMoveArgs>(
            ToolName::PlayMove,
            "Play any recorded movement from a dataset.",
        ),
        ToolDefinition::new::<NoArgs>(
            ToolName::ListEmotions,
            "List all available emotions in the emotions library.",
        ),
        ToolDefinition::new::<NoArgs>(
            ToolName::ListDances,
            "List all available dances in the dances library.",
        ),
        ToolDefinition::new::<ListMovesArgs>(
            ToolName::ListMoves,
            "List all available moves in a recorded move dataset.",
        ),
        ToolDefinition::new::<NoArgs>(
            ToolName::GetCameraStream,
            "Get information about the camera stream endpoint. Returns the MJPEG stream URL.",
        ),
    ]
}

/// All tool definitions in registration order.
pub fn list() -> &'static [ToolDefinition] {
    &REGISTRY
}

/// Find a definition by its wire name.
pub fn lookup(name: &str) -> Option<&'static ToolDefinition> {
    REGISTRY.iter().find(|def| def.name == name)
}

/// Startup self-check over the registry and the handler set.
pub fn verify() -> Result<(), ReachyError> {
    verify_definitions(list())
}

/// Check a set of definitions for symmetry with [`ToolName::ALL`] and schema sanity.
pub fn verify_definitions(definitions: &[ToolDefinition]) -> Result<(), ReachyError> {
    let mut problems = Vec::new();
    let mut seen = HashSet::new();

    for def in definitions {
        if !seen.insert(def.name) {
            problems.push(format!("duplicate definition '{}'", def.name));
        }
        if def.name != def.tool.as_str() {
            problems.push(format!(
                "definition '{}' is bound to handler '{}'",
                def.name, def.tool
            ));
        }
        let properties = def.properties();
        for key in def.required() {
            if !properties.is_some_and(|p| p.contains_key(key)) {
                problems.push(format!("'{}' requires undeclared property '{}'", def.name, key));
            }
        }
        for (key, prop) in properties.into_iter().flatten() {
            if let Some(values) = prop.get("enum") {
                if !values.as_array().is_some_and(|v| !v.is_empty()) {
                    problems.push(format!("'{}' property '{}' has empty enum", def.name, key));
                }
            }
        }
    }

    for tool in ToolName::ALL {
        if !seen.contains(tool.as_str()) {
            problems.push(format!("handler '{}' has no definition", tool));
        }
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(ReachyError::Registry(problems.join("; ")))
    }
}
