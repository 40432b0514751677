//! Protocol module - JSON message types for the machine-readable driver mode
//!
//! Every message is one JSON object per line and carries `type` and `seq`.
//! The same messages are appended to the journal file.

use serde::{Deserialize, Serialize};

use crate::core::Snapshot;
use crate::engine::{ActionFailure, ActionResult};
use crate::types::Piece;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResultType {
    #[serde(rename = "result")]
    Result,
}

impl Default for ResultType {
    fn default() -> Self {
        Self::Result
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObservationType {
    #[serde(rename = "observation")]
    Observation,
}

impl Default for ObservationType {
    fn default() -> Self {
        Self::Observation
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceJson {
    pub shape: String,
    pub id: u64,
}

impl From<&Piece> for PieceJson {
    fn from(piece: &Piece) -> Self {
        Self {
            shape: piece.shape.as_str().to_string(),
            id: piece.id,
        }
    }
}

/// Outcome of one driver request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultMessage {
    #[serde(rename = "type")]
    #[serde(default)]
    pub msg_type: ResultType,
    pub seq: u64,
    pub code: i64,
    /// Protocol name of the action, `null` for unknown codes.
    pub action: Option<String>,
    pub success: bool,
    pub message: String,
    /// Stable failure identifier, `null` on success.
    pub failure: Option<String>,
    pub generated: Vec<PieceJson>,
    pub warning: Option<String>,
}

/// Container contents after a request settled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservationMessage {
    #[serde(rename = "type")]
    #[serde(default)]
    pub msg_type: ObservationType,
    pub seq: u64,
    /// Front to back.
    pub queue: Vec<PieceJson>,
    /// Top to base.
    pub stack: Vec<PieceJson>,
    pub queue_len: usize,
    pub stack_len: usize,
}

pub fn failure_kind(failure: &ActionFailure) -> &'static str {
    match failure {
        ActionFailure::NothingToPlay => "nothing_to_play",
        ActionFailure::StackFull => "stack_full",
        ActionFailure::NothingToReserve => "nothing_to_reserve",
        ActionFailure::NothingReserved => "nothing_reserved",
        ActionFailure::NoQueueFront => "queue_empty",
        ActionFailure::NoStackTop => "stack_empty",
        ActionFailure::TripleSwapTooSmall { .. } => "triple_swap_too_small",
        ActionFailure::InvalidCode(_) => "invalid_code",
        ActionFailure::UnrecognizedInput(_) => "unrecognized_input",
    }
}

pub fn build_result(seq: u64, result: &ActionResult) -> ResultMessage {
    ResultMessage {
        msg_type: ResultType::Result,
        seq,
        code: result.code,
        action: result.action.map(|a| a.as_str().to_string()),
        success: result.success(),
        message: result.message(),
        failure: result.outcome.as_ref().err().map(|f| failure_kind(f).to_string()),
        generated: result.generated.iter().map(PieceJson::from).collect(),
        warning: result.warning.map(|w| w.to_string()),
    }
}

pub fn build_observation(seq: u64, snap: &Snapshot) -> ObservationMessage {
    ObservationMessage {
        msg_type: ObservationType::Observation,
        seq,
        queue: snap.queue.iter().map(PieceJson::from).collect(),
        stack: snap.stack.iter().map(PieceJson::from).collect(),
        queue_len: snap.queue.len(),
        stack_len: snap.stack.len(),
    }
}

/// Serialize one message as a single line (trailing newline included).
pub fn to_json_line<T: Serialize>(msg: &T) -> serde_json::Result<String> {
    let mut line = serde_json::to_string(msg)?;
    line.push('\n');
    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{ActionEvent, ActionWarning};
    use crate::types::{MenuAction, Shape};

    #[test]
    fn test_result_json_shape() {
        let mut r = ActionResult::succeeded(
            MenuAction::PlayFront,
            ActionEvent::Played(Piece::new(Shape::I, 0)),
        );
        r.generated.push(Piece::new(Shape::T, 5));

        let v = serde_json::to_value(build_result(3, &r)).unwrap();
        assert_eq!(v["type"], "result");
        assert_eq!(v["seq"], 3);
        assert_eq!(v["code"], 1);
        assert_eq!(v["action"], "play");
        assert_eq!(v["success"], true);
        assert_eq!(v["message"], "Played: [I 0]");
        assert!(v["failure"].is_null());
        assert_eq!(v["generated"][0]["shape"], "T");
        assert_eq!(v["generated"][0]["id"], 5);
        assert!(v["warning"].is_null());
    }

    #[test]
    fn test_failure_and_warning_fields() {
        let r = ActionResult::invalid(9);
        let v = serde_json::to_value(build_result(1, &r)).unwrap();
        assert!(v["action"].is_null());
        assert_eq!(v["failure"], "invalid_code");

        let v = serde_json::to_value(build_result(1, &ActionResult::unrecognized("zz"))).unwrap();
        assert_eq!(v["code"], -1);
        assert_eq!(v["failure"], "unrecognized_input");
        assert_eq!(v["message"], "Invalid option: zz.");

        let mut r = ActionResult::succeeded(
            MenuAction::Reserve,
            ActionEvent::Reserved(Piece::new(Shape::O, 1)),
        );
        r.warning = Some(ActionWarning::RefillRejected(Piece::new(Shape::L, 6)));
        let msg = build_result(2, &r);
        assert!(msg.warning.unwrap().contains("[L 6]"));
    }

    #[test]
    fn test_observation_round_trips() {
        let mut snap = Snapshot::default();
        snap.queue.push(Piece::new(Shape::I, 0));
        snap.stack.push(Piece::new(Shape::L, 7));

        let line = to_json_line(&build_observation(4, &snap)).unwrap();
        assert!(line.ends_with('\n'));
        let back: ObservationMessage = serde_json::from_str(line.trim_end()).unwrap();
        assert_eq!(back.msg_type, ObservationType::Observation);
        assert_eq!(back.queue_len, 1);
        assert_eq!(back.stack[0], PieceJson { shape: "L".to_string(), id: 7 });
    }
}
