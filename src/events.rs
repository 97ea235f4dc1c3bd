//! Événements d'entrée de la session et leur forme JSON sur le fil.
//!
//! Grammaire des messages entrants :
//! - `{"Select": {"row": R, "col": C, "role": "Start"}}` (ou `"End"`)
//! - `{"Command": "Generate"}` (ou `"Solve"`, `"Reset"`)
//!
//! Et du résultat de résolution sortant :
//! - `{"PathResult": {"Found": [[r, c], ...]}}`
//! - `{"PathResult": "NotFound"}`

use serde_json::{json, Value};

use crate::grid::Cell;
use crate::solver::SolveOutcome;

/// Rôle d'une sélection de cellule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectRole {
    Start,
    End,
}

/// Commandes acceptées par la session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Generate,
    Solve,
    Reset,
}

/// Un événement livré par la source d'entrée. La session est le seul
/// consommateur ; elle en valide la légalité et ignore le reste.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Select { cell: Cell, role: SelectRole },
    Command(CommandKind),
}

/// Décode un message JSON en événement. Retourne `None` pour tout
/// message inconnu ou mal formé : l'appelant l'ignore en silence.
pub fn parse_event(msg: &Value) -> Option<InputEvent> {
    if let Some(select) = msg.get("Select") {
        let row = select.get("row")?.as_u64()? as usize;
        let col = select.get("col")?.as_u64()? as usize;
        let role = match select.get("role")?.as_str()? {
            "Start" => SelectRole::Start,
            "End" => SelectRole::End,
            _ => return None,
        };
        return Some(InputEvent::Select {
            cell: (row, col),
            role,
        });
    }

    if let Some(command) = msg.get("Command") {
        let kind = match command.as_str()? {
            "Generate" => CommandKind::Generate,
            "Solve" => CommandKind::Solve,
            "Reset" => CommandKind::Reset,
            _ => return None,
        };
        return Some(InputEvent::Command(kind));
    }

    None
}

/// Encode le résultat d'une résolution pour notification finale.
pub fn outcome_to_json(outcome: &SolveOutcome) -> Value {
    match outcome {
        SolveOutcome::Found(path) => {
            let cells: Vec<Value> = path.iter().map(|&(r, c)| json!([r, c])).collect();
            json!({ "PathResult": { "Found": cells } })
        }
        SolveOutcome::NotFound => json!({ "PathResult": "NotFound" }),
    }
}
