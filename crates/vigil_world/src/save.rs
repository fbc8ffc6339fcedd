//! Obstacle persistence
//!
//! Obstacle files are plain text with one obstacle per line, as three
//! whitespace-separated numbers `x y radius`. Records are separated by
//! newlines and the last one has no trailing newline. A trailing newline
//! and blank lines are accepted when loading.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use thiserror::Error;
use vigil_math::Vec2;
use vigil_physics::{Circle, Circles};

/// Obstacle file errors
#[derive(Debug, Error)]
pub enum SaveError {
    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Field that is not a valid number, or a record with too many fields
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Record with fewer than three fields
    #[error("line {line}: expected `x y radius`")]
    Truncated { line: usize },
}

/// Write obstacles in the text format
pub fn save_obstacles<W: Write>(mut writer: W, obstacles: &[Circle]) -> Result<(), SaveError> {
    for (i, obstacle) in obstacles.iter().enumerate() {
        if i > 0 {
            writer.write_all(b"\n")?;
        }
        write!(
            writer,
            "{} {} {}",
            obstacle.position.x, obstacle.position.y, obstacle.radius
        )?;
    }
    writer.flush()?;
    Ok(())
}

/// Read obstacles in the text format
///
/// Fails on the first malformed record; no partial list is returned.
pub fn load_obstacles<R: BufRead>(reader: R) -> Result<Circles, SaveError> {
    let mut obstacles = Circles::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let number = index + 1;
        if line.trim().is_empty() {
            continue;
        }

        let mut fields = line.split_whitespace();
        let mut next = || -> Result<f32, SaveError> {
            let field = fields.next().ok_or(SaveError::Truncated { line: number })?;
            field.parse::<f32>().map_err(|e| SaveError::Parse {
                line: number,
                message: format!("`{}`: {}", field, e),
            })
        };
        let x = next()?;
        let y = next()?;
        let radius = next()?;

        if let Some(extra) = fields.next() {
            return Err(SaveError::Parse {
                line: number,
                message: format!("unexpected field `{}`", extra),
            });
        }
        if !x.is_finite() || !y.is_finite() || !radius.is_finite() || radius < 0.0 {
            return Err(SaveError::Parse {
                line: number,
                message: format!("invalid obstacle ({}, {}) radius {}", x, y, radius),
            });
        }

        obstacles.push(Circle::new(Vec2::new(x, y), radius));
    }

    Ok(obstacles)
}

/// Save obstacles to a file, replacing it
pub fn save_obstacles_to_path(path: impl AsRef<Path>, obstacles: &[Circle]) -> Result<(), SaveError> {
    let path = path.as_ref();
    let file = File::create(path)?;
    save_obstacles(BufWriter::new(file), obstacles)?;
    log::info!("Saved {} obstacle(s) to {}", obstacles.len(), path.display());
    Ok(())
}

/// Load obstacles from a file
pub fn load_obstacles_from_path(path: impl AsRef<Path>) -> Result<Circles, SaveError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let obstacles = load_obstacles(BufReader::new(file))?;
    log::info!("Loaded {} obstacle(s) from {}", obstacles.len(), path.display());
    Ok(obstacles)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_text(obstacles: &[Circle]) -> String {
        let mut buffer = Vec::new();
        save_obstacles(&mut buffer, obstacles).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_format_has_no_trailing_newline() {
        let obstacles = vec![
            Circle::new(Vec2::new(1.5, 2.0), 10.0),
            Circle::new(Vec2::new(-3.0, 4.25), 0.5),
        ];
        assert_eq!(to_text(&obstacles), "1.5 2 10\n-3 4.25 0.5");
        assert_eq!(to_text(&obstacles[..1]), "1.5 2 10");
        assert_eq!(to_text(&[]), "");
    }

    #[test]
    fn test_round_trip_single() {
        let obstacles = vec![Circle::new(Vec2::new(640.125, 360.0), 42.0)];
        let text = to_text(&obstacles);
        assert_eq!(load_obstacles(text.as_bytes()).unwrap(), obstacles);
    }

    #[test]
    fn test_trailing_newline_and_blank_lines_tolerated() {
        let loaded = load_obstacles("1 2 3\n\n4 5 6\n".as_bytes()).unwrap();
        assert_eq!(
            loaded,
            vec![
                Circle::new(Vec2::new(1.0, 2.0), 3.0),
                Circle::new(Vec2::new(4.0, 5.0), 6.0),
            ]
        );
        assert!(load_obstacles("".as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn test_truncated_record() {
        match load_obstacles("1 2 3\n4 5".as_bytes()) {
            Err(SaveError::Truncated { line }) => assert_eq!(line, 2),
            other => panic!("expected truncation, got {:?}", other),
        }
    }

    #[test]
    fn test_non_numeric_field() {
        match load_obstacles("1 two 3".as_bytes()) {
            Err(SaveError::Parse { line, message }) => {
                assert_eq!(line, 1);
                assert!(message.contains("two"));
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_extra_field_and_bad_radius() {
        assert!(matches!(
            load_obstacles("1 2 3 4".as_bytes()),
            Err(SaveError::Parse { line: 1, .. })
        ));
        assert!(matches!(
            load_obstacles("1 2 -3".as_bytes()),
            Err(SaveError::Parse { line: 1, .. })
        ));
        assert!(matches!(
            load_obstacles("1 2 NaN".as_bytes()),
            Err(SaveError::Parse { line: 1, .. })
        ));
    }
}
