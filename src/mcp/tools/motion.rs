//! Joint control and recorded-move playback.

use tracing::{debug, instrument};

use crate::mcp::dispatch::Dispatcher;
use crate::mcp::types::{
    JointTarget, ListMovesArgs, PlayDanceArgs, PlayEmotionArgs, PlayMoveArgs, ToolResult,
};
use crate::transport::ApiRequest;
use crate::validation::{check_dataset, Dataset, DatasetRef};
use crate::ReachyError;

impl Dispatcher {
    /// Validate every present joint, then send only those joints.
    #[instrument(name = "tool.move_set_target", skip_all)]
    pub(crate) async fn handle_move_set_target(
        &self,
        target: JointTarget,
    ) -> Result<ToolResult, ReachyError> {
        target.validate()?;
        let body = serde_json::to_value(&target)?;
        debug!(%body, "joint target");
        self.forward(ApiRequest::post("/api/move/set_target").with_body(body))
            .await
    }

    #[instrument(name = "tool.play_emotion", skip_all, fields(emotion = %args.emotion))]
    pub(crate) async fn handle_play_emotion(
        &self,
        args: PlayEmotionArgs,
    ) -> Result<ToolResult, ReachyError> {
        let target = DatasetRef::new(Dataset::Emotions, args.emotion);
        self.forward(ApiRequest::post(target.play_path())).await
    }

    #[instrument(name = "tool.play_dance", skip_all, fields(dance = %args.dance))]
    pub(crate) async fn handle_play_dance(
        &self,
        args: PlayDanceArgs,
    ) -> Result<ToolResult, ReachyError> {
        let target = DatasetRef::new(Dataset::Dances, args.dance);
        self.forward(ApiRequest::post(target.play_path())).await
    }

    #[instrument(name = "tool.play_move", skip_all, fields(dataset = %args.dataset, move_name = %args.move_name))]
    pub(crate) async fn handle_play_move(
        &self,
        args: PlayMoveArgs,
    ) -> Result<ToolResult, ReachyError> {
        let target = DatasetRef::parse(&args.dataset, args.move_name)?;
        self.forward(ApiRequest::post(target.play_path())).await
    }

    #[instrument(name = "tool.list_emotions", skip_all)]
    pub(crate) async fn handle_list_emotions(&self) -> Result<ToolResult, ReachyError> {
        self.forward(ApiRequest::get(Dataset::Emotions.list_path()))
            .await
    }

    #[instrument(name = "tool.list_dances", skip_all)]
    pub(crate) async fn handle_list_dances(&self) -> Result<ToolResult, ReachyError> {
        self.forward(ApiRequest::get(Dataset::Dances.list_path()))
            .await
    }

    #[instrument(name = "tool.list_moves", skip_all, fields(dataset = %args.dataset))]
    pub(crate) async fn handle_list_moves(
        &self,
        args: ListMovesArgs,
    ) -> Result<ToolResult, ReachyError> {
        let dataset = check_dataset(&args.dataset)?;
        self.forward(ApiRequest::get(dataset.list_path())).await
    }
}
