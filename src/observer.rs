use crate::ascii::render_grid;
use crate::grid::{Cell, MazeGrid};
use crate::solver::SolveOutcome;

/// Collaborateur d'affichage. Le coeur l'appelle après chaque pas
/// d'algorithme avec l'état courant de la grille ; l'implémentation ne
/// doit jamais modifier la grille. Un pas est un point d'observation,
/// pas un point de suspension : l'algorithme n'attend rien en retour.
pub trait RenderObserver {
    /// Un pas de génération ou de résolution vient d'être effectué.
    /// `cursor` est la cellule en sommet de pile, `path` le chemin
    /// accumulé par le solveur (absent pendant la génération).
    fn step(&mut self, grid: &MazeGrid, cursor: Cell, path: Option<&[Cell]>);

    /// La résolution est terminée : chemin complet ou absence de chemin.
    fn solved(&mut self, outcome: &SolveOutcome);
}

/// Observateur muet, pour les tests et l'usage sans affichage.
pub struct SilentObserver;

impl RenderObserver for SilentObserver {
    fn step(&mut self, _grid: &MazeGrid, _cursor: Cell, _path: Option<&[Cell]>) {}

    fn solved(&mut self, _outcome: &SolveOutcome) {}
}

/// Observateur console : imprime un instantané ASCII de la grille
/// tous les `every` pas, puis le résultat final de la résolution.
pub struct ConsoleObserver {
    every: usize,
    steps: usize,
}

impl ConsoleObserver {
    pub fn new(every: usize) -> Self {
        Self {
            every: every.max(1),
            steps: 0,
        }
    }
}

impl RenderObserver for ConsoleObserver {
    fn step(&mut self, grid: &MazeGrid, cursor: Cell, path: Option<&[Cell]>) {
        self.steps += 1;
        if self.steps % self.every != 0 {
            return;
        }
        println!("--- pas {} ---", self.steps);
        println!("{}", render_grid(grid, Some(cursor), path));
    }

    fn solved(&mut self, outcome: &SolveOutcome) {
        match outcome {
            SolveOutcome::Found(path) => {
                println!("Chemin trouvé ({} cellules): {:?}", path.len(), path)
            }
            SolveOutcome::NotFound => println!("No path found"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Observateur compteur, pour vérifier que chaque pas est bien exposé.
    pub struct CountingObserver {
        pub steps: usize,
        pub solved: usize,
    }

    impl CountingObserver {
        pub fn new() -> Self {
            Self { steps: 0, solved: 0 }
        }
    }

    impl RenderObserver for CountingObserver {
        fn step(&mut self, _grid: &MazeGrid, _cursor: Cell, _path: Option<&[Cell]>) {
            self.steps += 1;
        }

        fn solved(&mut self, _outcome: &SolveOutcome) {
            self.solved += 1;
        }
    }

    #[test]
    fn test_observateur_muet_ne_panique_pas() {
        let grid = MazeGrid::new(3, 3);
        let mut obs = SilentObserver;
        obs.step(&grid, (0, 0), None);
        obs.solved(&SolveOutcome::NotFound);
    }

    #[test]
    fn test_generation_expose_chaque_pas() {
        use crate::generator::carve_maze;
        use crate::grid::VisitMask;
        use crate::random::thread_source;

        let mut grid = MazeGrid::new(5, 5);
        let mut visited = VisitMask::new(5, 5);
        let mut obs = CountingObserver::new();
        carve_maze(&mut grid, &mut visited, (0, 0), &mut thread_source(), &mut obs);
        // 9 cellules de passage sur une 5x5 : 8 avancées + 9 retours
        // arrière, un pas observé pour chacun.
        assert_eq!(obs.steps, 17);
    }
}
