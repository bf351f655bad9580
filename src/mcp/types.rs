use schemars::{json_schema, JsonSchema, Schema, SchemaGenerator};
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use crate::catalog::{DANCES, DANCES_DATASET, EMOTIONS, EMOTIONS_DATASET};
use crate::validation::validate_joint;
use crate::ReachyError;

// =============================================================================
// Tool arguments
// =============================================================================

/// Arguments for tools that take none.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct NoArgs {}

fn default_true() -> bool {
    true
}

/// Arguments for `daemon_start`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DaemonStartArgs {
    /// Whether to wake up the robot motors (default: true)
    #[serde(default = "default_true")]
    pub wake_up: bool,
}

/// Arguments for `daemon_stop`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct DaemonStopArgs {
    /// Whether to play the sleep animation before stopping (default: false)
    #[serde(default)]
    pub goto_sleep: bool,
}

/// Joint target for `move_set_target`.
///
/// Absent fields are left out of the outgoing body so unspecified joints
/// do not move. Values keep the caller's number representation (`10` stays
/// `10`, not `10.0`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct JointTarget {
    /// Head pitch angle in degrees (-45 to 45)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(range(min = -45.0, max = 45.0))]
    pub head_pitch: Option<Number>,
    /// Head roll angle in degrees (-30 to 30)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(range(min = -30.0, max = 30.0))]
    pub head_roll: Option<Number>,
    /// Head yaw angle in degrees (-60 to 60)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(range(min = -60.0, max = 60.0))]
    pub head_yaw: Option<Number>,
    /// Left antenna angle in degrees (-45 to 45)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(range(min = -45.0, max = 45.0))]
    pub antenna_left: Option<Number>,
    /// Right antenna angle in degrees (-45 to 45)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(range(min = -45.0, max = 45.0))]
    pub antenna_right: Option<Number>,
    /// Body yaw rotation in degrees (-90 to 90)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(range(min = -90.0, max = 90.0))]
    pub body_yaw: Option<Number>,
    /// Movement duration in seconds (0.1 to 10)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(range(min = 0.1, max = 10.0))]
    pub duration: Option<Number>,
}

impl JointTarget {
    /// Field name and value pairs, in declaration order.
    pub fn fields(&self) -> [(&'static str, Option<&Number>); 7] {
        [
            ("head_pitch", self.head_pitch.as_ref()),
            ("head_roll", self.head_roll.as_ref()),
            ("head_yaw", self.head_yaw.as_ref()),
            ("antenna_left", self.antenna_left.as_ref()),
            ("antenna_right", self.antenna_right.as_ref()),
            ("body_yaw", self.body_yaw.as_ref()),
            ("duration", self.duration.as_ref()),
        ]
    }

    /// Validate every present field against the joint range table.
    pub fn validate(&self) -> Result<(), ReachyError> {
        for (name, value) in self.fields() {
            let Some(value) = value else { continue };
            let value = value.as_f64().ok_or_else(|| {
                ReachyError::Validation(format!("{} must be a finite number, got {}", name, value))
            })?;
            validate_joint(name, value)?;
        }
        Ok(())
    }
}

fn emotion_schema(_: &mut SchemaGenerator) -> Schema {
    json_schema!({
        "type": "string",
        "description": "Name of the emotion to play",
        "enum": EMOTIONS,
    })
}

fn dance_schema(_: &mut SchemaGenerator) -> Schema {
    json_schema!({
        "type": "string",
        "description": "Name of the dance to play",
        "enum": DANCES,
    })
}

fn dataset_schema(_: &mut SchemaGenerator) -> Schema {
    json_schema!({
        "type": "string",
        "description": format!("Dataset name (allowed: '{}', '{}')", EMOTIONS_DATASET, DANCES_DATASET),
        "enum": [EMOTIONS_DATASET, DANCES_DATASET],
    })
}

/// Arguments for `play_emotion`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PlayEmotionArgs {
    #[schemars(schema_with = "emotion_schema")]
    pub emotion: String,
}

/// Arguments for `play_dance`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PlayDanceArgs {
    #[schemars(schema_with = "dance_schema")]
    pub dance: String,
}

/// Arguments for `play_move`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PlayMoveArgs {
    #[schemars(schema_with = "dataset_schema")]
    pub dataset: String,
    /// Name of the move to play
    #[serde(rename = "move")]
    pub move_name: String,
}

/// Arguments for `list_moves`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ListMovesArgs {
    #[schemars(schema_with = "dataset_schema")]
    pub dataset: String,
}

// =============================================================================
// Tool results
// =============================================================================

/// One content block of a tool result.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ToolContent {
    Text { text: String },
    Json { json: Value },
}

impl ToolContent {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ToolContent::Text { text } => Some(text),
            ToolContent::Json { .. } => None,
        }
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            ToolContent::Json { json } => Some(json),
            ToolContent::Text { .. } => None,
        }
    }

    /// Text rendering: text as-is, JSON pretty-printed.
    pub fn render(&self) -> String {
        match self {
            ToolContent::Text { text } => text.clone(),
            ToolContent::Json { json } => {
                serde_json::to_string_pretty(json).unwrap_or_else(|_| json.to_string())
            }
        }
    }
}

/// Result envelope returned for every tool call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolResult {
    pub content: Vec<ToolContent>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub is_error: bool,
}

impl ToolResult {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![ToolContent::Text { text: text.into() }],
            is_error: false,
        }
    }

    /// Pretty-printed JSON of `value` as text content.
    pub fn pretty<T: Serialize>(value: &T) -> Result<Self, ReachyError> {
        Ok(Self::text(serde_json::to_string_pretty(value)?))
    }

    pub fn json<T: Serialize>(value: &T) -> Result<Self, ReachyError> {
        Ok(Self {
            content: vec![ToolContent::Json {
                json: serde_json::to_value(value)?,
            }],
            is_error: false,
        })
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            content: vec![ToolContent::Text {
                text: message.into(),
            }],
            is_error: true,
        }
    }

    /// First text block, if any.
    pub fn first_text(&self) -> Option<&str> {
        self.content.iter().find_map(ToolContent::as_text)
    }

    /// First JSON block, if any.
    pub fn first_json(&self) -> Option<&Value> {
        self.content.iter().find_map(ToolContent::as_json)
    }
}
