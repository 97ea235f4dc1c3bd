use log::debug;

use crate::events::{CommandKind, InputEvent, SelectRole};
use crate::generator::carve_maze;
use crate::grid::{Cell, MazeGrid, VisitMask};
use crate::observer::RenderObserver;
use crate::random::{thread_source, RandomSource};
use crate::solver::{solve, SolveOutcome};

/// États de la session, dans l'ordre du parcours nominal. `Reset`
/// ramène à `EmptySelection` depuis n'importe quel état.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    EmptySelection,
    Ready,
    Generated,
    Solved,
}

/// La session interactive : possède la grille, le masque de visite de
/// la génération, les sélections et le résultat de résolution. Elle
/// consomme les événements d'entrée, applique la machine à états et
/// ignore en silence tout événement illégal dans l'état courant.
///
/// Génération et résolution tournent chacune au plus une fois par
/// session ; les dimensions de la grille sont fixées à la création.
pub struct MazeSession {
    grid: MazeGrid,
    visited: VisitMask,
    start: Option<Cell>,
    end: Option<Cell>,
    generated: bool,
    solved: bool,
    outcome: Option<SolveOutcome>,
    random: Box<dyn RandomSource>,
}

impl MazeSession {
    /// Crée une session neuve, grille entièrement murée, hasard du thread.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self::with_random(rows, cols, Box::new(thread_source()))
    }

    /// Variante avec source de hasard injectée, pour les tests.
    pub fn with_random(rows: usize, cols: usize, random: Box<dyn RandomSource>) -> Self {
        Self {
            grid: MazeGrid::new(rows, cols),
            visited: VisitMask::new(rows, cols),
            start: None,
            end: None,
            generated: false,
            solved: false,
            outcome: None,
            random,
        }
    }

    pub fn grid(&self) -> &MazeGrid {
        &self.grid
    }

    pub fn start(&self) -> Option<Cell> {
        self.start
    }

    pub fn end(&self) -> Option<Cell> {
        self.end
    }

    /// Résultat de la dernière résolution, s'il y en a eu une.
    pub fn outcome(&self) -> Option<&SolveOutcome> {
        self.outcome.as_ref()
    }

    /// État courant, dérivé des drapeaux et des sélections.
    pub fn state(&self) -> SessionState {
        if self.solved {
            SessionState::Solved
        } else if self.generated {
            SessionState::Generated
        } else if self.start.is_some() && self.end.is_some() {
            SessionState::Ready
        } else {
            SessionState::EmptySelection
        }
    }

    /// Consomme un événement d'entrée. Les événements illégaux dans
    /// l'état courant sont ignorés sans erreur et sans mutation.
    pub fn handle_event(&mut self, event: InputEvent, observer: &mut dyn RenderObserver) {
        match event {
            InputEvent::Select { cell, role } => self.handle_select(cell, role),
            InputEvent::Command(CommandKind::Generate) => self.handle_generate(observer),
            InputEvent::Command(CommandKind::Solve) => self.handle_solve(observer),
            InputEvent::Command(CommandKind::Reset) => self.reset(),
        }
    }

    /// Première sélection par rôle gagnante ; le reste est ignoré
    /// jusqu'au prochain reset, tout comme une cellule hors grille.
    fn handle_select(&mut self, cell: Cell, role: SelectRole) {
        if !self.grid.in_bounds(cell) {
            debug!("sélection hors grille ignorée: {:?}", cell);
            return;
        }
        match role {
            SelectRole::Start if self.start.is_none() => self.start = Some(cell),
            SelectRole::End if self.end.is_none() => self.end = Some(cell),
            _ => debug!("sélection déjà fixée, {:?} ignoré", role),
        }
    }

    /// Ne creuse que depuis `Ready` : les deux extrémités choisies et
    /// aucune génération déjà faite cette session.
    fn handle_generate(&mut self, observer: &mut dyn RenderObserver) {
        if self.state() != SessionState::Ready {
            debug!("Generate ignoré dans l'état {:?}", self.state());
            return;
        }
        let Some(seed) = self.start else { return };
        carve_maze(
            &mut self.grid,
            &mut self.visited,
            seed,
            self.random.as_mut(),
            observer,
        );
        self.generated = true;
    }

    /// Ne résout qu'une fois, et seulement après génération.
    fn handle_solve(&mut self, observer: &mut dyn RenderObserver) {
        if self.state() != SessionState::Generated {
            debug!("Solve ignoré dans l'état {:?}", self.state());
            return;
        }
        let (Some(start), Some(end)) = (self.start, self.end) else {
            return;
        };
        let outcome = solve(&self.grid, start, end, observer);
        observer.solved(&outcome);
        self.outcome = Some(outcome);
        self.solved = true;
    }

    /// Retour à l'état de départ : grille toute murée, masques et
    /// sélections effacés, chemin oublié. Légal depuis tout état.
    fn reset(&mut self) {
        self.grid.clear();
        self.visited.clear();
        self.start = None;
        self.end = None;
        self.generated = false;
        self.solved = false;
        self.outcome = None;
    }
}
