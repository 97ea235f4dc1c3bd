//! Visualisation ASCII de la grille.
//!
//! Une cellule murée s'affiche `#`, un passage `.`, le chemin en cours
//! `*` et le curseur (sommet de pile) `@`. Le rendu sert à
//! l'observateur console et aux tests de disposition.

use crate::grid::{Cell, MazeGrid};

/// Génère une représentation ASCII de la grille, une ligne de texte par
/// ligne de cellules, terminée par un saut de ligne.
pub fn render_grid(grid: &MazeGrid, cursor: Option<Cell>, path: Option<&[Cell]>) -> String {
    let mut out = String::with_capacity((grid.cols() + 1) * grid.rows());
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let cell = (row, col);
            let mut ch = if grid.is_open(cell) { '.' } else { '#' };
            if let Some(p) = path {
                if p.contains(&cell) {
                    ch = '*';
                }
            }
            if cursor == Some(cell) {
                ch = '@';
            }
            out.push(ch);
        }
        out.push('\n');
    }
    out
}
