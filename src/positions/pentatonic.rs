//! Minor pentatonic box patterns
//!
//! Five fixed two-notes-per-string shapes. Offsets are relative to the key's
//! root fret on the low E string, listed from string 6 to string 1.

use crate::models::guitar::{FretPosition, GuitarString, MAX_FRET};
use crate::models::{FingeringSequence, Key};

type BoxTemplate = [[u8; 2]; 6];

const BOX_TEMPLATES: [BoxTemplate; 5] = [
    [[0, 3], [0, 2], [0, 2], [0, 2], [0, 3], [0, 3]],
    [[3, 5], [2, 5], [2, 5], [2, 4], [3, 5], [3, 5]],
    [[5, 7], [5, 7], [5, 7], [4, 7], [5, 8], [5, 7]],
    [[7, 10], [7, 10], [7, 9], [7, 9], [8, 10], [7, 10]],
    [[10, 12], [10, 12], [9, 12], [9, 12], [10, 12], [10, 12]],
];

/// Base fret for a template: root, root + 12, root - 12, first that fits
fn choose_base_fret(root_fret: i32, template: &BoxTemplate) -> i32 {
    let lowest = template.iter().map(|pair| pair[0]).min().unwrap_or(0) as i32;
    let highest = template.iter().map(|pair| pair[1]).max().unwrap_or(0) as i32;
    let fits = |base: i32| base + lowest >= 0 && base + highest <= MAX_FRET as i32;

    [root_fret, root_fret + 12, root_fret - 12]
        .into_iter()
        .find(|&base| fits(base))
        .unwrap_or_else(|| root_fret.clamp(0, MAX_FRET as i32))
}

fn instantiate(template: &BoxTemplate, base: i32) -> Vec<FretPosition> {
    let mut ascending = Vec::with_capacity(12);
    for (string, frets) in GuitarString::low_to_high().zip(template.iter()) {
        for &offset in frets {
            let fret = (base + offset as i32).clamp(0, MAX_FRET as i32) as u8;
            ascending.push(FretPosition { string, fret });
        }
    }
    ascending
}

/// The five boxes for `key`, in neck order
pub fn minor_pentatonic_boxes(key: Key) -> Vec<FingeringSequence> {
    let root_fret = key.root_fret() as i32;

    let mut boxes: Vec<(usize, FingeringSequence)> = BOX_TEMPLATES
        .iter()
        .enumerate()
        .map(|(id, template)| {
            let base = choose_base_fret(root_fret, template);
            let label = format!("Box {}", id + 1);
            (id, FingeringSequence::from_ascending(label, instantiate(template, base), key))
        })
        .collect();

    boxes.sort_by_key(|(id, seq)| (seq.min_fret, seq.max_fret, *id));

    log::debug!("{} minor pentatonic: {} boxes", key, boxes.len());
    boxes.into_iter().map(|(_, seq)| seq).collect()
}
