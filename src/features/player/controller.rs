//! Player controller
//!
//! Owns the playback session and is the only code that mutates the media
//! resource. Position ticks feed the progress display and the lyric
//! highlight; pointer input feeds the two seek protocols; track-end events
//! feed the playback state machine.

use crate::audio::{MediaEvent, MediaResource};
use crate::features::catalog::Catalog;
use crate::features::playback::{
    LoopMode, PlaybackStateMachine, SkipDirection, Transition,
};
use crate::features::seek::{DragUpdate, PointerEvent, SeekControl, SeekProtocol};

use super::presenter::Presenter;
use super::session::PlaybackSession;

/// Composition root of the playback core
pub struct PlayerController<M, P> {
    catalog: Catalog,
    media: M,
    presenter: P,
    session: PlaybackSession,
    machine: PlaybackStateMachine,
    progress: SeekProtocol,
    volume: SeekProtocol,
}

impl<M: MediaResource, P: Presenter> PlayerController<M, P> {
    /// Build the controller and load the first track, paused
    pub fn new(
        catalog: Catalog,
        mut media: M,
        mut presenter: P,
        machine: PlaybackStateMachine,
        volume: f32,
    ) -> Self {
        let volume = volume.clamp(0.0, 1.0);
        media.set_volume(volume);

        presenter.render_track_list(catalog.tracks());
        presenter.set_loop_mode(machine.mode());
        presenter.set_volume(volume);
        presenter.set_muted_indicator(volume == 0.0);
        presenter.set_play_button(false);

        let mut controller = Self {
            catalog,
            media,
            presenter,
            session: PlaybackSession::default(),
            machine,
            progress: SeekProtocol::default(),
            volume: SeekProtocol::default(),
        };
        controller.load_track(0);
        controller
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    #[cfg(test)]
    pub fn media(&self) -> &M {
        &self.media
    }

    #[cfg(test)]
    pub fn session(&self) -> &PlaybackSession {
        &self.session
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[cfg(test)]
    pub fn loop_mode(&self) -> LoopMode {
        self.machine.mode()
    }

    pub fn current_index(&self) -> usize {
        self.session.track_index()
    }

    pub fn is_playing(&self) -> bool {
        !self.media.is_paused()
    }

    #[cfg(test)]
    pub fn is_dragging(&self, control: SeekControl) -> bool {
        self.protocol(control).is_dragging()
    }

    #[cfg(test)]
    fn protocol(&self, control: SeekControl) -> &SeekProtocol {
        match control {
            SeekControl::Progress => &self.progress,
            SeekControl::Volume => &self.volume,
        }
    }

    // ============ Media events ============

    /// Drain the media resource and dispatch its events
    pub fn pump(&mut self) {
        for event in self.media.poll_events() {
            match event {
                MediaEvent::PositionChanged(position) => self.on_tick(position),
                MediaEvent::Ended => self.on_track_end(),
            }
        }
    }

    /// Apply a playback position to the time label, progress bar and lyrics
    pub fn on_tick(&mut self, position: f64) {
        if self.progress.is_dragging() {
            return;
        }

        let duration = self.session.duration();
        self.presenter.set_time_label(position, duration);
        self.presenter
            .set_progress(self.session.fraction_at(position));

        if let Some(index) = self.session.update_highlight(position) {
            self.presenter.highlight_lyric(index);
        }
    }

    /// Follow the loop mode once the current track has played out
    pub fn on_track_end(&mut self) {
        let current = self.current_index();
        self.media.pause();
        self.presenter.set_play_button(false);
        self.presenter.set_row_playing(current, false);

        match self.machine.on_track_end(current, self.catalog.len()) {
            Transition::Load(next) => {
                tracing::info!(
                    "Track ended ({}), {} -> {}",
                    self.machine.mode().display_name(),
                    current,
                    next
                );
                self.load_track(next);
                self.start_playback();
            }
            Transition::Stop => {
                tracing::info!(
                    "Track ended ({}), stopping at {}",
                    self.machine.mode().display_name(),
                    current
                );
            }
        }
    }

    // ============ User actions ============

    /// Flip between playing and paused
    pub fn toggle_play(&mut self) {
        let current = self.current_index();
        if self.media.is_paused() {
            self.start_playback();
        } else {
            self.media.pause();
            self.presenter.set_play_button(false);
            self.presenter.set_row_playing(current, false);
        }
    }

    /// Track list click: another row loads and plays, the current row toggles
    pub fn select_track(&mut self, index: usize) {
        if index >= self.catalog.len() {
            tracing::warn!("Invalid track index: {}", index);
            return;
        }

        if index == self.current_index() {
            self.toggle_play();
            return;
        }

        self.presenter.set_row_playing(self.current_index(), false);
        self.load_track(index);
        self.start_playback();
    }

    /// Previous/next button
    pub fn skip(&mut self, direction: SkipDirection) {
        let current = self.current_index();
        let Some(next) = self.machine.skip(current, self.catalog.len(), direction) else {
            return;
        };

        tracing::debug!("Skip {:?}: {} -> {}", direction, current, next);
        self.presenter.set_row_playing(current, false);
        self.load_track(next);
        self.start_playback();
    }

    /// Advance the loop mode ring
    pub fn cycle_loop_mode(&mut self) -> LoopMode {
        let mode = self.machine.cycle_mode();
        self.presenter.set_loop_mode(mode);
        tracing::info!("Loop mode changed to: {}", mode.display_name());
        mode
    }

    /// Flip the muted flag without touching the stored volume
    pub fn toggle_mute(&mut self) {
        let muted = !self.media.is_muted();
        self.media.set_muted(muted);
        self.presenter.set_muted_indicator(muted);
        tracing::debug!("Muted: {}", muted);
    }

    // ============ Drag protocol ============

    /// Feed pointer input to the seek protocol of `control`
    pub fn pointer(&mut self, control: SeekControl, event: PointerEvent) {
        let update = match control {
            SeekControl::Progress => self.progress.handle(event),
            SeekControl::Volume => self.volume.handle(event),
        };

        match update {
            DragUpdate::Preview(fraction) => self.preview(control, fraction),
            DragUpdate::Commit(fraction) => self.commit(control, fraction),
            DragUpdate::Ignored => {}
        }
    }

    /// Abort any active drag and restore the authoritative display
    pub fn cancel_drag(&mut self) -> bool {
        let progress = self.progress.cancel();
        let volume = self.volume.cancel();

        if progress {
            let position = self.media.position();
            self.presenter.set_time_label(position, self.session.duration());
            self.presenter
                .set_progress(self.session.fraction_at(position));
        }
        if volume {
            self.presenter.set_volume(self.media.volume());
        }
        if progress || volume {
            tracing::debug!("Drag cancelled");
        }
        progress || volume
    }

    fn preview(&mut self, control: SeekControl, fraction: f32) {
        match control {
            SeekControl::Progress => {
                let duration = self.session.duration();
                self.presenter.set_progress(fraction);
                self.presenter
                    .set_time_label(f64::from(fraction) * duration, duration);
            }
            SeekControl::Volume => self.presenter.set_volume(fraction),
        }
    }

    fn commit(&mut self, control: SeekControl, fraction: f32) {
        match control {
            SeekControl::Progress => {
                let duration = self.session.duration();
                let position = f64::from(fraction) * duration;
                tracing::info!("Seek to {:.2}s ({:.3})", position, fraction);

                self.media.set_position(position);
                self.presenter.set_progress(fraction);
                self.presenter.set_time_label(position, duration);
                self.start_playback();
            }
            SeekControl::Volume => {
                tracing::info!("Volume set to {:.2}", fraction);
                self.media.set_volume(fraction);
                if fraction > 0.0 && self.media.is_muted() {
                    self.media.set_muted(false);
                }
                self.presenter.set_volume(fraction);
                self.presenter.set_muted_indicator(fraction == 0.0);
            }
        }
    }

    // ============ Track loading ============

    /// Replace the session with the track at `index`, leaving it paused
    fn load_track(&mut self, index: usize) {
        let Some(track) = self.catalog.get(index) else {
            tracing::warn!("Invalid track index: {}", index);
            return;
        };

        // A drag over the old track must not seek the new one
        self.progress.cancel();
        self.media.pause();
        self.session = PlaybackSession::new(index, track);
        tracing::info!(
            "Loading track {}: {} - {} ({} lyric lines)",
            index,
            track.name,
            track.singer,
            self.session.lyrics().len()
        );

        self.presenter.render_lyrics(self.session.lyrics());
        self.presenter.show_track_info(track);
        self.presenter.set_progress(0.0);
        self.presenter.set_time_label(0.0, self.session.duration());

        if let Err(e) = self.media.load(&track.media_path()) {
            tracing::error!("Failed to load {}: {:#}", track.name, e);
        }
    }

    /// Play and show the state the media actually reached
    fn start_playback(&mut self) {
        self.media.play();
        let playing = !self.media.is_paused();
        if !playing {
            tracing::warn!("Playback did not start for track {}", self.current_index());
        }
        self.presenter.set_play_button(playing);
        self.presenter.set_row_playing(self.current_index(), playing);
    }
}
