use battleship_rules::{footprint, Coordinate, GameError, Orientation, Ship};

#[test]
fn test_new_ship_is_undamaged() -> Result<(), GameError> {
    let ship = Ship::new(4)?;
    assert_eq!(ship.length(), 4);
    assert_eq!(ship.hits(), 0);
    assert!(!ship.is_sunk());
    Ok(())
}

#[test]
fn test_zero_length_rejected() {
    assert_eq!(Ship::new(0).unwrap_err(), GameError::InvalidShipLength(0));
}

#[test]
fn test_hits_cap_at_length() -> Result<(), GameError> {
    let mut ship = Ship::new(3)?;
    ship.hit();
    ship.hit();
    assert!(!ship.is_sunk());
    assert_eq!(ship.hits(), 2);

    ship.hit();
    assert!(ship.is_sunk());
    assert_eq!(ship.hits(), 3);

    // fourth hit is ignored
    ship.hit();
    assert_eq!(ship.hits(), 3);
    assert!(ship.is_sunk());
    Ok(())
}

#[test]
fn test_footprint_directions() {
    let cells: Vec<_> = footprint(3, 2, 4, Orientation::Horizontal).collect();
    assert_eq!(
        cells,
        vec![
            Coordinate::new(2, 4),
            Coordinate::new(2, 5),
            Coordinate::new(2, 6)
        ]
    );
    let cells: Vec<_> = footprint(2, 8, 0, Orientation::Vertical).collect();
    assert_eq!(cells, vec![Coordinate::new(8, 0), Coordinate::new(9, 0)]);
}
