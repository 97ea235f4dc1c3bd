use log::debug;

use crate::grid::{midpoint, Cell, MazeGrid, VisitMask};
use crate::observer::RenderObserver;
use crate::random::RandomSource;

/// Creuse un labyrinthe parfait par retour arrière récursif, version
/// itérative avec pile explicite. Depuis la cellule `seed`, on avance
/// vers un voisin non visité à distance 2 choisi uniformément au hasard,
/// en perçant la cellule-mur médiane ; sur une impasse, on dépile.
///
/// À la fin, toute cellule atteignable depuis `seed` sur le réseau des
/// passages est ouverte exactement une fois : l'ensemble des cellules
/// ouvertes forme un arbre couvrant (chemin simple unique entre deux
/// cellules ouvertes, aucun cycle).
///
/// `visited` est le masque de génération possédé par la session ; il est
/// marqué en place et reste le témoin de ce qui a été creusé.
/// L'observateur est prévenu après chaque avancée et chaque dépilage.
pub fn carve_maze(
    grid: &mut MazeGrid,
    visited: &mut VisitMask,
    seed: Cell,
    random: &mut dyn RandomSource,
    observer: &mut dyn RenderObserver,
) {
    assert!(grid.in_bounds(seed), "graine hors grille: {:?}", seed);

    let mut stack = vec![seed];
    visited.mark(seed);
    grid.set_open(seed);

    while let Some(&current) = stack.last() {
        // Voisins à distance 2, dans les limites et pas encore visités.
        // Le critère est bien "visité", pas "ouvert" : une cellule déjà
        // creusée n'est jamais revisitée même si elle est adjacente.
        let candidates: Vec<Cell> = grid
            .neighbors(current, 2)
            .filter(|&n| !visited.contains(n))
            .collect();

        if candidates.is_empty() {
            stack.pop();
        } else {
            let next = candidates[random.pick(candidates.len())];
            visited.mark(next);
            grid.set_open(next);
            // On perce le mur entre les deux cellules.
            grid.set_open(midpoint(current, next));
            stack.push(next);
        }

        let cursor = stack.last().copied().unwrap_or(current);
        observer.step(grid, cursor, None);
    }

    debug!(
        "génération terminée: {} cellules visitées, {} ouvertes",
        visited.count(),
        grid.open_count()
    );
}
