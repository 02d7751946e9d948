//! Sound cue collaborator backed by rodio (the `sound` feature).

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::Result;
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};
use tracing::warn;

use crate::host::SoundCue;

/// Plays a short cue file when a text input is selected.
///
/// Decode or playback problems are logged and skipped; a missing audio
/// device only fails construction.
pub struct SystemSound {
    _stream: OutputStream,
    stream_handle: OutputStreamHandle,
    cue: PathBuf,
    volume: f32,
}

impl SystemSound {
    pub fn new(cue: PathBuf) -> Result<Self> {
        let (stream, stream_handle) = OutputStream::try_default()?;
        Ok(Self {
            _stream: stream,
            stream_handle,
            cue,
            volume: 1.0,
        })
    }

    pub fn with_volume(mut self, volume: f32) -> Self {
        self.volume = volume.clamp(0.0, 1.0);
        self
    }
}

impl SoundCue for SystemSound {
    fn play_select(&mut self) {
        let file = match File::open(&self.cue) {
            Ok(f) => f,
            Err(err) => {
                warn!("failed to open cue file {:?}: {}", self.cue, err);
                return;
            }
        };
        let source = match Decoder::new(BufReader::new(file)) {
            Ok(s) => s,
            Err(err) => {
                warn!("failed to decode cue file {:?}: {}", self.cue, err);
                return;
            }
        };
        let sink = match Sink::try_new(&self.stream_handle) {
            Ok(s) => s,
            Err(err) => {
                warn!("failed to open audio sink: {}", err);
                return;
            }
        };
        sink.set_volume(self.volume);
        sink.append(source);
        sink.detach(); // fire and forget
    }
}
