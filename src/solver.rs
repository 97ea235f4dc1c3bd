use log::debug;

use crate::grid::{Cell, MazeGrid, VisitMask};
use crate::observer::RenderObserver;

/// Résultat d'une résolution : un chemin ordonné de `start` à `end`,
/// ou l'absence explicite de chemin. `NotFound` est distinct d'un
/// chemin vide : la pile s'est épuisée sans atteindre l'arrivée.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveOutcome {
    Found(Vec<Cell>),
    NotFound,
}

/// Cherche un chemin entre `start` et `end` par descente en profondeur
/// avec retour arrière explicite. Le premier voisin ouvert et non visité
/// dans l'ordre d'énumération est suivi ; sur une impasse, la pile ET
/// l'accumulateur de chemin sont dépilés ensemble (la cellule sort du
/// chemin rapporté mais reste visitée). Le premier contact avec `end`
/// termine la recherche : aucun chemin plus court n'est tenté.
///
/// La grille n'est jamais modifiée ; le masque de visite est local à
/// l'appel. Sur un labyrinthe parfait, le chemin trouvé est l'unique
/// chemin simple entre les deux cellules.
pub fn solve(
    grid: &MazeGrid,
    start: Cell,
    end: Cell,
    observer: &mut dyn RenderObserver,
) -> SolveOutcome {
    assert!(grid.in_bounds(start), "départ hors grille: {:?}", start);
    assert!(grid.in_bounds(end), "arrivée hors grille: {:?}", end);

    // Un départ ou une arrivée jamais creusés ne mènent nulle part.
    if !grid.is_open(start) || !grid.is_open(end) {
        debug!("solve: extrémité murée, start={:?} end={:?}", start, end);
        return SolveOutcome::NotFound;
    }

    let mut visited = VisitMask::new(grid.rows(), grid.cols());
    let mut stack = vec![start];
    let mut path = vec![start];
    visited.mark(start);

    while let Some(&current) = stack.last() {
        if current == end {
            debug!("solve: arrivée atteinte, chemin de {} cellules", path.len());
            observer.step(grid, current, Some(&path));
            return SolveOutcome::Found(path);
        }

        let next = grid
            .neighbors(current, 1)
            .find(|&n| grid.is_open(n) && !visited.contains(n));

        match next {
            Some(n) => {
                visited.mark(n);
                stack.push(n);
                path.push(n);
            }
            None => {
                // Impasse : retour arrière.
                stack.pop();
                path.pop();
            }
        }

        let cursor = stack.last().copied().unwrap_or(current);
        observer.step(grid, cursor, Some(&path));
    }

    SolveOutcome::NotFound
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::carve_maze;
    use crate::grid::VisitMask;
    use crate::observer::SilentObserver;
    use crate::random::{RandomSource, RngSource};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Stub qui choisit toujours le premier candidat.
    struct FirstPick;

    impl RandomSource for FirstPick {
        fn pick(&mut self, _n: usize) -> usize {
            0
        }
    }

    fn carved_grid(rows: usize, cols: usize, seed: Cell) -> MazeGrid {
        let mut grid = MazeGrid::new(rows, cols);
        let mut visited = VisitMask::new(rows, cols);
        let mut random = RngSource::new(StdRng::seed_from_u64(99));
        carve_maze(&mut grid, &mut visited, seed, &mut random, &mut SilentObserver);
        grid
    }

    fn assert_simple_path(grid: &MazeGrid, path: &[Cell], start: Cell, end: Cell) {
        assert_eq!(path.first(), Some(&start));
        assert_eq!(path.last(), Some(&end));
        for pair in path.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            let dr = (a.0 as i32 - b.0 as i32).abs();
            let dc = (a.1 as i32 - b.1 as i32).abs();
            assert_eq!(dr + dc, 1, "cellules non adjacentes: {:?} {:?}", a, b);
        }
        for &cell in path {
            assert!(grid.is_open(cell), "cellule murée dans le chemin: {:?}", cell);
        }
        let mut sorted = path.to_vec();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), path.len(), "cellule répétée dans le chemin");
    }

    #[test]
    fn test_chemin_valide_sur_labyrinthe_creuse() {
        let grid = carved_grid(9, 9, (0, 0));
        match solve(&grid, (0, 0), (8, 8), &mut SilentObserver) {
            SolveOutcome::Found(path) => assert_simple_path(&grid, &path, (0, 0), (8, 8)),
            SolveOutcome::NotFound => panic!("chemin attendu sur un labyrinthe parfait"),
        }
    }

    #[test]
    fn test_chemin_entre_toutes_les_paires_ouvertes() {
        let grid = carved_grid(7, 7, (0, 0));
        let open: Vec<Cell> = (0..7)
            .flat_map(|r| (0..7).map(move |c| (r, c)))
            .filter(|&cell| grid.is_open(cell))
            .collect();
        for &start in &open {
            for &end in &open {
                match solve(&grid, start, end, &mut SilentObserver) {
                    SolveOutcome::Found(path) => assert_simple_path(&grid, &path, start, end),
                    SolveOutcome::NotFound => {
                        panic!("pas de chemin entre {:?} et {:?}", start, end)
                    }
                }
            }
        }
    }

    #[test]
    fn test_depart_egal_arrivee() {
        let grid = carved_grid(5, 5, (0, 0));
        assert_eq!(
            solve(&grid, (0, 0), (0, 0), &mut SilentObserver),
            SolveOutcome::Found(vec![(0, 0)])
        );
    }

    #[test]
    fn test_extremite_muree_donne_not_found() {
        let grid = carved_grid(7, 7, (0, 0));
        // (1, 1) est un croisement de murs du réseau double : jamais creusé.
        assert!(!grid.is_open((1, 1)));
        assert_eq!(
            solve(&grid, (0, 0), (1, 1), &mut SilentObserver),
            SolveOutcome::NotFound
        );
        assert_eq!(
            solve(&grid, (1, 1), (0, 0), &mut SilentObserver),
            SolveOutcome::NotFound
        );
    }

    #[test]
    fn test_grille_vierge_donne_not_found() {
        let grid = MazeGrid::new(5, 5);
        assert_eq!(
            solve(&grid, (0, 0), (4, 4), &mut SilentObserver),
            SolveOutcome::NotFound
        );
    }

    #[test]
    fn test_chemin_unique_sur_arbre() {
        // Sur un labyrinthe parfait le chemin est unique : deux
        // résolutions successives retournent exactement le même.
        let grid = carved_grid(9, 9, (0, 0));
        let a = solve(&grid, (0, 4), (8, 2), &mut SilentObserver);
        let b = solve(&grid, (0, 4), (8, 2), &mut SilentObserver);
        assert_eq!(a, b);
        assert!(matches!(a, SolveOutcome::Found(_)));
    }

    #[test]
    fn test_scenario_premier_candidat() {
        // Avec une source qui prend toujours le premier candidat, le
        // creusage longe la première ligne puis la dernière colonne :
        // le solveur doit suivre ce couloir sans aucun retour arrière.
        let mut grid = MazeGrid::new(7, 7);
        let mut visited = VisitMask::new(7, 7);
        carve_maze(&mut grid, &mut visited, (0, 0), &mut FirstPick, &mut SilentObserver);

        let expected: Vec<Cell> = (0..7)
            .map(|c| (0, c))
            .chain((1..7).map(|r| (r, 6)))
            .collect();
        assert_eq!(
            solve(&grid, (0, 0), (6, 6), &mut SilentObserver),
            SolveOutcome::Found(expected)
        );
    }
}
