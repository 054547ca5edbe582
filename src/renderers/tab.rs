//! Plain-text tablature
//!
//! Six lines, high e on top. Every note gets its own column so the order of
//! a fingering sequence reads left to right.

use crate::models::guitar::GuitarString;
use crate::models::FingeringNote;

pub fn render_tab(notes: &[FingeringNote]) -> String {
    GuitarString::high_to_low()
        .map(|string| {
            let mut line = format!("{}|-", string.label());
            for note in notes {
                let fret = note.fret.to_string();
                if note.string == string {
                    line.push_str(&fret);
                } else {
                    line.push_str(&"-".repeat(fret.len()));
                }
                line.push('-');
            }
            line.push('|');
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FingeringSequence, FretPosition, Key};

    fn note(string: i32, fret: i32) -> FingeringNote {
        let position = FretPosition::new(GuitarString::new(string).unwrap(), fret).unwrap();
        FingeringNote::new(position, Key::A)
    }

    #[test]
    fn test_single_note() {
        let tab = render_tab(&[note(6, 5)]);
        assert_eq!(tab, "e|---|\nB|---|\nG|---|\nD|---|\nA|---|\nE|-5-|");
    }

    #[test]
    fn test_columns_align() {
        let tab = render_tab(&[note(6, 5), note(6, 8), note(5, 12)]);
        let lines: Vec<&str> = tab.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[4], "A|-----12-|");
        assert_eq!(lines[5], "E|-5-8----|");
        assert!(lines.iter().all(|l| l.len() == lines[0].len()));
    }

    #[test]
    fn test_renders_a_sequence() {
        let seq = FingeringSequence::from_ascending(
            "run",
            vec![note(6, 5).position(), note(5, 7).position()],
            Key::A,
        );
        let tab = render_tab(&seq.notes);
        assert!(tab.ends_with("E|-5---5-|"));
    }
}
