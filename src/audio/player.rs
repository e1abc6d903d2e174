//! Media resource backed by a rodio sink
//!
//! The output stream is opened lazily on the first load, so a machine without
//! an audio device still starts and shows the catalog.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink};

use super::media::{MediaEvent, MediaResource};

/// Audio player driving a single rodio sink
pub struct RodioMedia {
    stream: Option<OutputStream>,
    sink: Option<Sink>,
    current_path: Option<PathBuf>,
    volume: f32,
    muted: bool,
    paused: bool,
    ended_reported: bool,
}

impl Default for RodioMedia {
    fn default() -> Self {
        Self::new()
    }
}

impl RodioMedia {
    pub fn new() -> Self {
        Self {
            stream: None,
            sink: None,
            current_path: None,
            volume: 1.0,
            muted: false,
            paused: true,
            ended_reported: false,
        }
    }

    fn effective_volume(&self) -> f32 {
        if self.muted { 0.0 } else { self.volume }
    }

    fn apply_volume(&self) {
        if let Some(sink) = &self.sink {
            sink.set_volume(self.effective_volume());
        }
    }

    fn ensure_stream(&mut self) -> Result<&OutputStream> {
        if self.stream.is_none() {
            let stream = OutputStreamBuilder::open_default_stream()
                .context("Failed to create audio output")?;
            self.stream = Some(stream);
        }
        self.stream
            .as_ref()
            .context("Audio output is not available")
    }

    /// Decode `path` into a fresh paused sink
    fn open_sink(&mut self, path: &Path) -> Result<Sink> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open file {}", path.display()))?;
        let source = Decoder::new(BufReader::new(file))
            .with_context(|| format!("Failed to decode audio {}", path.display()))?;

        let stream = self.ensure_stream()?;
        let sink = Sink::connect_new(stream.mixer());
        sink.append(source);
        sink.pause();
        Ok(sink)
    }

    /// Rebuild the sink from the current file, used after the source ran out
    fn reload(&mut self) -> Result<()> {
        let path = self
            .current_path
            .clone()
            .context("No audio loaded")?;
        let sink = self.open_sink(&path)?;
        if let Some(old) = self.sink.replace(sink) {
            old.stop();
        }
        self.apply_volume();
        self.ended_reported = false;
        Ok(())
    }
}

impl MediaResource for RodioMedia {
    fn load(&mut self, path: &Path) -> Result<()> {
        if let Some(old) = self.sink.take() {
            old.stop();
        }
        self.current_path = Some(path.to_path_buf());
        self.paused = true;
        self.ended_reported = false;

        let sink = self.open_sink(path)?;
        self.sink = Some(sink);
        self.apply_volume();
        tracing::debug!("Loaded audio {:?}", path);
        Ok(())
    }

    fn play(&mut self) {
        // Playing a finished track starts it over
        if self.sink.as_ref().is_some_and(Sink::empty) {
            if let Err(e) = self.reload() {
                tracing::error!("Failed to restart track: {:#}", e);
                return;
            }
        }

        if let Some(sink) = &self.sink {
            sink.play();
            self.paused = false;
        }
    }

    fn pause(&mut self) {
        if let Some(sink) = &self.sink {
            sink.pause();
        }
        self.paused = true;
    }

    fn is_paused(&self) -> bool {
        self.paused
    }

    fn position(&self) -> f64 {
        self.sink
            .as_ref()
            .map(|sink| sink.get_pos().as_secs_f64())
            .unwrap_or(0.0)
    }

    fn set_position(&mut self, seconds: f64) {
        let position = Duration::try_from_secs_f64(seconds.max(0.0)).unwrap_or_default();

        if self.sink.as_ref().is_some_and(Sink::empty) {
            if let Err(e) = self.reload() {
                tracing::error!("Failed to reload track for seek: {:#}", e);
                return;
            }
        }

        let Some(sink) = &self.sink else {
            tracing::debug!("Seek ignored, no audio loaded");
            return;
        };

        match sink.try_seek(position) {
            Ok(()) => tracing::debug!("Seek to {:?} successful", position),
            Err(e) => tracing::warn!("Seek to {:?} failed: {:?}", position, e),
        }
    }

    fn volume(&self) -> f32 {
        self.volume
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
        self.apply_volume();
    }

    fn is_muted(&self) -> bool {
        self.muted
    }

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
        self.apply_volume();
    }

    fn poll_events(&mut self) -> Vec<MediaEvent> {
        let Some(sink) = &self.sink else {
            return Vec::new();
        };
        if self.paused {
            return Vec::new();
        }

        let mut events = vec![MediaEvent::PositionChanged(sink.get_pos().as_secs_f64())];
        if sink.empty() && !self.ended_reported {
            self.ended_reported = true;
            self.paused = true;
            events.push(MediaEvent::Ended);
        }
        events
    }
}
