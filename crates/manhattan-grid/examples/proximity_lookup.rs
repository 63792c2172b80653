use manhattan_grid::{GridPoint, LastColumn, ProximityTable};

fn main() {
    // Scores for a piece heading to the bottom-right corner of the board.
    let goal = GridPoint::new(15, 15);
    let table = ProximityTable::new(goal);

    println!("Goal: {}", goal);
    for cell in [GridPoint::new(0, 0), GridPoint::new(8, 8), GridPoint::new(15, 14)] {
        match table.get(cell) {
            Ok(score) => println!("  {} -> {:.3}", cell, score),
            Err(e) => println!("  {} -> {}", cell, e),
        }
    }

    // Out of the grid on purpose.
    if let Err(e) = table.get(GridPoint::new(16, 3)) {
        println!("  lookup failed: {}", e);
    }

    println!("\nAs a lookup-table literal (exact last column):");
    print!("{}", table.display(LastColumn::Exact));
}
