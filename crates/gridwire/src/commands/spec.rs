use colored::Colorize;

pub fn run(short: bool) {
    if short {
        print_short();
    } else {
        print_full();
    }
}

fn print_short() {
    println!("{}", "Gridwire level quick reference".bold());
    println!();
    println!("  width / height      board size in cells (min 2x2)");
    println!("  goal                {{ col, row }} of the goal cell");
    println!("  buildings           list of {{ col, row, kind }}");
    println!("  kind                solar | windmill | water");
    println!();
    println!("  Cells are 0-indexed from the top-left corner.");
}

fn print_full() {
    println!("{}", "Gridwire level file format".bold());
    println!();
    println!("Levels are YAML files describing one board. Example:");
    println!();
    println!("{}", "  name: Two Mills".dimmed());
    println!("{}", "  width: 10".dimmed());
    println!("{}", "  height: 8".dimmed());
    println!("{}", "  goal: { col: 5, row: 3 }".dimmed());
    println!("{}", "  buildings:".dimmed());
    println!("{}", "    - { col: 1, row: 1, kind: solar }".dimmed());
    println!("{}", "    - { col: 8, row: 6, kind: windmill }".dimmed());
    println!("{}", "    - { col: 2, row: 6, kind: water }".dimmed());
    println!();
    println!("{}", "Fields".bold());
    println!();
    println!("  name        Display name shown in the window title. Optional.");
    println!("  width       Board width in cells. Minimum 2.");
    println!("  height      Board height in cells. Minimum 2.");
    println!("  goal        The cell every wire must reach. Exactly one per level.");
    println!("  buildings   The producer buildings the player wires up. At least one.");
    println!("              kind is one of: solar, windmill, water.");
    println!();
    println!("Cells are 0-indexed; (0,0) is the top-left corner. The goal and the");
    println!("buildings must all sit on distinct cells inside the board.");
    println!();
    println!("{}", "Play".bold());
    println!();
    println!("  Press and hold on a building, then drag cell by cell to the goal.");
    println!("  Dragging back along the wire removes it; diagonal shortcuts are");
    println!("  bridged through an adjacent empty cell when possible. Releasing");
    println!("  before the goal abandons the wire.");
}
