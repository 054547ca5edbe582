//! Pitch-list to Standard MIDI File conversion
//!
//! Writes a format-0 file with one guitar track: tempo, program change, then
//! one note per beat.

use midly::{Format, Header, MetaMessage, MidiMessage, Smf, Timing, TrackEvent, TrackEventKind};

use super::defaults::{tempo_or_default, DEFAULT_CHANNEL, DEFAULT_PROGRAM, DEFAULT_TPQ, DEFAULT_VELOCITY, NOTE_GATE};
use crate::errors::ExportError;
use crate::models::Pitch;

/// A note placed on the tick grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MidiNote {
    pub key: u8,
    pub start_tick: u32,
    pub dur_tick: u32,
    pub vel: u8,
}

/// One note per quarter, each held for `NOTE_GATE` of the beat
pub fn pitches_to_notes(pitches: &[Pitch], tpq: u16) -> Result<Vec<MidiNote>, ExportError> {
    let beat = tpq as u32;
    let dur_tick = ((beat as f64) * NOTE_GATE).round() as u32;

    pitches
        .iter()
        .enumerate()
        .map(|(i, pitch)| {
            let key = u8::try_from(pitch.midi())
                .ok()
                .filter(|&key| key <= 127)
                .ok_or(ExportError::PitchOutOfRange(pitch.midi()))?;
            Ok(MidiNote {
                key,
                start_tick: i as u32 * beat,
                dur_tick,
                vel: DEFAULT_VELOCITY,
            })
        })
        .collect()
}

/// Largest value a MIDI tempo meta event can hold (24 bits)
const MAX_TEMPO_MICROS: u32 = 0xFF_FFFF;

/// Microseconds per quarter note, clamped to what a tempo event can store
pub fn microseconds_per_quarter(tempo_bpm: Option<f64>) -> u32 {
    let micros = (60_000_000.0 / tempo_or_default(tempo_bpm)).round();
    micros.clamp(1.0, MAX_TEMPO_MICROS as f64) as u32
}

/// Write `pitches` as a Standard MIDI File
pub fn write_smf(pitches: &[Pitch], tempo_bpm: Option<f64>) -> Result<Vec<u8>, ExportError> {
    let notes = pitches_to_notes(pitches, DEFAULT_TPQ)?;
    let microseconds_per_quarter = microseconds_per_quarter(tempo_bpm);

    // (absolute tick, event) pairs, converted to deltas once sorted
    let mut timed: Vec<(u32, TrackEventKind)> = vec![
        (0, TrackEventKind::Meta(MetaMessage::Tempo(microseconds_per_quarter.into()))),
        (
            0,
            TrackEventKind::Midi {
                channel: DEFAULT_CHANNEL.into(),
                message: MidiMessage::ProgramChange {
                    program: DEFAULT_PROGRAM.into(),
                },
            },
        ),
    ];

    for note in &notes {
        timed.push((
            note.start_tick,
            TrackEventKind::Midi {
                channel: DEFAULT_CHANNEL.into(),
                message: MidiMessage::NoteOn {
                    key: note.key.into(),
                    vel: note.vel.into(),
                },
            },
        ));
        timed.push((
            note.start_tick + note.dur_tick,
            TrackEventKind::Midi {
                channel: DEFAULT_CHANNEL.into(),
                message: MidiMessage::NoteOff {
                    key: note.key.into(),
                    vel: 0.into(),
                },
            },
        ));
    }

    // Stable sort keeps note-off before a note-on at the same tick
    timed.sort_by_key(|(tick, _)| *tick);

    let mut track = Vec::with_capacity(timed.len() + 1);
    let mut last_tick = 0u32;
    for (tick, kind) in timed {
        track.push(TrackEvent {
            delta: (tick - last_tick).into(),
            kind,
        });
        last_tick = tick;
    }
    track.push(TrackEvent {
        delta: 0.into(),
        kind: TrackEventKind::Meta(MetaMessage::EndOfTrack),
    });

    let smf = Smf {
        header: Header {
            format: Format::SingleTrack,
            timing: Timing::Metrical(DEFAULT_TPQ.into()),
        },
        tracks: vec![track],
    };

    let mut out = Vec::new();
    smf.write(&mut out)
        .map_err(|e| ExportError::Midi(e.to_string()))?;

    log::debug!("midi: {} notes, {} bytes", notes.len(), out.len());
    Ok(out)
}
