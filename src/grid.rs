/// Une position dans la grille : (ligne, colonne).
pub type Cell = (usize, usize);

/// Ordre d'énumération des voisins : +col, +ligne, -col, -ligne.
/// L'ordre compte : il fixe le départage du solveur et rend la
/// génération reproductible avec une source aléatoire déterministe.
pub const DIRECTIONS: [(i32, i32); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// État d'une cellule de la grille.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    Wall,
    Open,
}

/// Grille du labyrinthe : une matrice lignes x colonnes de cellules,
/// toutes `Wall` au départ. Les passages vivent sur le réseau pair/pair,
/// les cellules intermédiaires servent de murs (modèle "mur entre deux
/// cases") : le générateur avance de 2 et ouvre le point médian.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeGrid {
    rows: usize,
    cols: usize,
    cells: Vec<CellState>,
}

impl MazeGrid {
    /// Crée une grille entièrement murée.
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(rows > 0 && cols > 0, "dimensions de grille invalides");
        Self {
            rows,
            cols,
            cells: vec![CellState::Wall; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Vérifie qu'une cellule est dans les limites de la grille.
    pub fn in_bounds(&self, (row, col): Cell) -> bool {
        row < self.rows && col < self.cols
    }

    fn index(&self, cell: Cell) -> usize {
        // Un accès hors limites est un bug du coeur, pas une erreur
        // d'entrée : on s'arrête net.
        assert!(self.in_bounds(cell), "cellule hors grille: {:?}", cell);
        cell.0 * self.cols + cell.1
    }

    pub fn is_open(&self, cell: Cell) -> bool {
        self.cells[self.index(cell)] == CellState::Open
    }

    pub fn set_open(&mut self, cell: Cell) {
        let i = self.index(cell);
        self.cells[i] = CellState::Open;
    }

    /// Nombre de cellules ouvertes.
    pub fn open_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|&&c| c == CellState::Open)
            .count()
    }

    /// Remet toutes les cellules à `Wall`.
    pub fn clear(&mut self) {
        self.cells.fill(CellState::Wall);
    }

    /// Énumère les voisins d'une cellule à distance `step` sur un seul
    /// axe, dans l'ordre fixe de `DIRECTIONS`, filtrés aux limites de la
    /// grille. Le solveur utilise `step = 1`, le générateur `step = 2`.
    pub fn neighbors(&self, (row, col): Cell, step: usize) -> impl Iterator<Item = Cell> + '_ {
        let (rows, cols) = (self.rows as i32, self.cols as i32);
        let step = step as i32;
        DIRECTIONS.iter().filter_map(move |&(dr, dc)| {
            let nr = row as i32 + dr * step;
            let nc = col as i32 + dc * step;
            if nr >= 0 && nr < rows && nc >= 0 && nc < cols {
                Some((nr as usize, nc as usize))
            } else {
                None
            }
        })
    }
}

/// Point médian entre deux cellules distantes de 2 sur un axe :
/// la cellule-mur que le générateur perce entre deux passages.
pub fn midpoint(a: Cell, b: Cell) -> Cell {
    ((a.0 + b.0) / 2, (a.1 + b.1) / 2)
}

/// Matrice booléenne parallèle à la grille, marquant les cellules déjà
/// visitées. La génération et la résolution en possèdent chacune une :
/// celle de la génération vit avec la session, celle du solveur est
/// recréée à chaque appel.
#[derive(Debug, Clone)]
pub struct VisitMask {
    rows: usize,
    cols: usize,
    seen: Vec<bool>,
}

impl VisitMask {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            seen: vec![false; rows * cols],
        }
    }

    fn index(&self, (row, col): Cell) -> usize {
        assert!(row < self.rows && col < self.cols, "cellule hors masque: {:?}", (row, col));
        row * self.cols + col
    }

    pub fn mark(&mut self, cell: Cell) {
        let i = self.index(cell);
        self.seen[i] = true;
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.seen[self.index(cell)]
    }

    /// Nombre de cellules marquées.
    pub fn count(&self) -> usize {
        self.seen.iter().filter(|&&s| s).count()
    }

    pub fn clear(&mut self) {
        self.seen.fill(false);
    }
}
