//! Plain-text level map parser.
//!
//! Each line of the file is a comma-separated list of single glyphs. The file
//! is written column-major: line `x` holds the tiles of map column `x`, glyph
//! `y` within it the tile at `(x, y)`. `parse_map` transposes this into
//! row-major [`Map`] storage.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use crate::state::Map;
use crate::types::TileKind;

#[derive(Debug)]
pub enum MapFileError {
    /// Underlying I/O failure.
    Io(io::Error),
    /// The file contains no glyphs at all.
    Empty,
    /// A column holds a different number of glyphs than the first one.
    RaggedColumn { column: usize, expected: usize, found: usize },
}

impl fmt::Display for MapFileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "map I/O error: {e}"),
            Self::Empty => write!(f, "map file is empty"),
            Self::RaggedColumn { column, expected, found } => {
                write!(
                    f,
                    "map column {column} has {found} tiles, expected {expected}"
                )
            }
        }
    }
}

impl std::error::Error for MapFileError {}

impl From<io::Error> for MapFileError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

pub fn load_map(path: &Path) -> Result<Map, MapFileError> {
    parse_map(&fs::read_to_string(path)?)
}

pub fn parse_map(text: &str) -> Result<Map, MapFileError> {
    let columns: Vec<Vec<TileKind>> = text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            line.split(',')
                .map(|glyph| tile_from_glyph(glyph.trim()))
                .collect()
        })
        .collect();

    if columns.is_empty() {
        return Err(MapFileError::Empty);
    }

    let width = columns.len();
    let height = columns[0].len();
    if height == 0 {
        return Err(MapFileError::Empty);
    }
    for (x, column) in columns.iter().enumerate() {
        if column.len() != height {
            return Err(MapFileError::RaggedColumn {
                column: x,
                expected: height,
                found: column.len(),
            });
        }
    }

    let mut tiles = vec![TileKind::Floor; width * height];
    for (x, column) in columns.iter().enumerate() {
        for (y, &tile) in column.iter().enumerate() {
            tiles[y * width + x] = tile;
        }
    }
    Ok(Map { width, height, tiles })
}

fn tile_from_glyph(glyph: &str) -> TileKind {
    match glyph {
        "#" => TileKind::OuterWall,
        "8" => TileKind::InnerWall,
        "-" => TileKind::Bedrock,
        "+" => TileKind::Grass,
        _ => TileKind::Floor,
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::types::Pos;

    #[test]
    fn parses_and_transposes() {
        // Two columns of three tiles: column 0 is all wall, column 1 mixed.
        let map = parse_map("#,#,#\n+,.,8\n").unwrap();
        assert_eq!(map.width, 2);
        assert_eq!(map.height, 3);
        assert_eq!(map.tile_at(Pos { y: 0, x: 0 }), TileKind::OuterWall);
        assert_eq!(map.tile_at(Pos { y: 0, x: 1 }), TileKind::Grass);
        assert_eq!(map.tile_at(Pos { y: 1, x: 1 }), TileKind::Floor);
        assert_eq!(map.tile_at(Pos { y: 2, x: 1 }), TileKind::InnerWall);
    }

    #[test]
    fn unknown_glyphs_are_floor() {
        let map = parse_map("?,x,.\n").unwrap();
        assert!(map.tiles.iter().all(|&t| t == TileKind::Floor));
    }

    #[test]
    fn empty_file_is_an_error() {
        assert!(matches!(parse_map(""), Err(MapFileError::Empty)));
        assert!(matches!(parse_map("\n  \n"), Err(MapFileError::Empty)));
    }

    #[test]
    fn ragged_column_is_an_error() {
        let err = parse_map("#,#\n#\n").unwrap_err();
        assert!(matches!(
            err,
            MapFileError::RaggedColumn { column: 1, expected: 2, found: 1 }
        ));
    }

    #[test]
    fn loads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "#,#\n.,.\n#,#\n").unwrap();
        let map = load_map(file.path()).unwrap();
        assert_eq!(map.width, 3);
        assert_eq!(map.height, 2);
        assert!(!map.blocks(Pos { y: 0, x: 1 }));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_map(&dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, MapFileError::Io(_)));
    }
}
