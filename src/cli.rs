#![cfg(feature = "std")]

//! Terminal helpers: coordinate parsing and board rendering.
//!
//! Columns are letters `A`-`J` (the `y` axis), rows are numbers `1`-`10`
//! (the `x` axis).

use std::string::String;

use crate::{
    board::Board,
    common::{AttackResult, Coordinate},
    config::{ship_name, BOARD_SIZE},
    ship::Orientation,
};

/// Format a coordinate as `A5`.
pub fn coord_to_string(coord: Coordinate) -> String {
    let col = (b'A' + coord.y as u8) as char;
    format!("{}{}", col, coord.x + 1)
}

/// Parse `A5`-style input into a coordinate.
pub fn parse_coord(input: &str) -> Result<Coordinate, String> {
    let input = input.trim();
    if input.len() < 2 {
        return Err("Too short - need column letter and row number (e.g., A5)".to_string());
    }
    let mut chars = input.chars();
    let col_ch = chars.next().ok_or("No column letter")?.to_ascii_uppercase();
    if !col_ch.is_ascii_alphabetic() {
        return Err(format!("Invalid column '{}' - must be a letter A-J", col_ch));
    }
    let col = (col_ch as u8 - b'A') as usize;
    if col >= BOARD_SIZE {
        return Err(format!("Column '{}' out of bounds - must be A-J", col_ch));
    }
    let row_str: String = chars.collect();
    let row: usize = row_str
        .parse()
        .map_err(|_| format!("Invalid row '{}' - must be a number 1-10", row_str))?;
    if row == 0 || row > BOARD_SIZE {
        return Err(format!("Row {} out of bounds - must be 1-10", row));
    }
    Ok(Coordinate::new(row - 1, col))
}

/// Parse `A5 H` / `B3 V` placement input. Orientation defaults to horizontal.
pub fn parse_placement(input: &str) -> Result<(Coordinate, Orientation), String> {
    let mut parts = input.split_whitespace();
    let coord = parse_coord(parts.next().ok_or("Please enter coordinates (e.g., A5 H)")?)?;
    let orientation = match parts.next().map(|s| s.to_ascii_uppercase()) {
        None => Orientation::Horizontal,
        Some(o) if o == "H" => Orientation::Horizontal,
        Some(o) if o == "V" => Orientation::Vertical,
        Some(o) => return Err(format!("Invalid orientation '{}' - use H or V", o)),
    };
    Ok((coord, orientation))
}

/// Render a board. With `reveal` set, unhit ships are shown as `S`.
pub fn render_board(board: &Board, reveal: bool) -> String {
    let mut out = String::from("    ");
    for c in 0..BOARD_SIZE {
        out.push(' ');
        out.push((b'A' + c as u8) as char);
    }
    out.push('\n');
    for x in 0..BOARD_SIZE {
        out.push_str(&format!(" {:2} ", x + 1));
        for y in 0..BOARD_SIZE {
            let coord = Coordinate::new(x, y);
            let ch = if board.hit_attacks().contains(&coord) {
                'X'
            } else if board.missed_attacks().contains(&coord) {
                'o'
            } else if reveal && board.grid()[x][y].is_some() {
                'S'
            } else {
                '.'
            };
            out.push(' ');
            out.push(ch);
        }
        out.push('\n');
    }
    out
}

/// One line per ship with its length and whether it is sunk.
pub fn render_fleet_status(board: &Board) -> String {
    let mut out = String::new();
    for ship in board.ships() {
        let status = if ship.is_sunk() { "SUNK" } else { "Active" };
        out.push_str(&format!(
            "  {} ({}): {}\n",
            ship_name(ship.length()),
            ship.length(),
            status
        ));
    }
    out
}

/// Display the opponent board (top) and the player's own board (bottom).
pub fn print_player_view(own: &Board, opponent: &Board) {
    println!("Opponent board:");
    print!("{}", render_board(opponent, false));
    println!("    Legend: X=Hit  o=Miss  .=Unknown");
    println!("\nYour board:");
    print!("{}", render_board(own, true));
    println!("    Legend: S=Ship  X=Hit  o=Miss  .=Water");
    print!("{}", render_fleet_status(own));
}

/// Short description of an attack for the turn log.
pub fn describe_attack(who: &str, result: &AttackResult) -> String {
    let at = coord_to_string(result.coordinate());
    match result {
        AttackResult::Accepted { is_hit: true, .. } => format!("{} fires at {}: HIT", who, at),
        AttackResult::Accepted { is_hit: false, .. } => format!("{} fires at {}: miss", who, at),
        AttackResult::Rejected { message, .. } => format!("{} at {}: {}", who, at, message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_corners() {
        assert_eq!(parse_coord("A1"), Ok(Coordinate::new(0, 0)));
        assert_eq!(parse_coord("j10"), Ok(Coordinate::new(9, 9)));
        assert_eq!(parse_coord("C4"), Ok(Coordinate::new(3, 2)));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(parse_coord("").is_err());
        assert!(parse_coord("K1").is_err());
        assert!(parse_coord("A0").is_err());
        assert!(parse_coord("A11").is_err());
        assert!(parse_coord("5A").is_err());
    }

    #[test]
    fn coord_string_matches_parser() {
        let c = Coordinate::new(6, 3);
        assert_eq!(coord_to_string(c), "D7");
        assert_eq!(parse_coord(&coord_to_string(c)), Ok(c));
    }

    #[test]
    fn placement_orientation() {
        assert_eq!(
            parse_placement("B3 v"),
            Ok((Coordinate::new(2, 1), Orientation::Vertical))
        );
        assert_eq!(
            parse_placement("B3"),
            Ok((Coordinate::new(2, 1), Orientation::Horizontal))
        );
        assert!(parse_placement("B3 X").is_err());
    }
}
