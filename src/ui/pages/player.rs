//! Player page
//!
//! Layout:
//! - Left panel: track list, the playing row highlighted
//! - Center panel: lyric window that keeps the active line in view
//! - Right panel: song info
//! - Bottom: player bar with controls, time label, progress and volume
//!
//! The page is the controller's presenter: it only stores what it was told
//! to show and renders that.

use iced::widget::scrollable::AbsoluteOffset;
use iced::widget::{Space, button, column, container, row, scrollable, svg, text};
use iced::{Alignment, Element, Fill, Length, Padding};

use crate::app::Message;
use crate::features::catalog::Track;
use crate::features::lyrics::LyricLine;
use crate::features::{LoopMode, Presenter};
use crate::ui::widgets::{loop_mode_button, playback_controls, progress_slider};
use crate::ui::{icons, theme};
use crate::utils::time_display;

/// Scrollable ID of the lyric window
pub const LYRICS_SCROLLABLE_ID: &str = "lyrics_scroll";
/// Height of one lyric row
pub const LYRIC_LINE_HEIGHT: f32 = 36.0;
/// Visible height of the lyric window
pub const LYRIC_VIEWPORT_HEIGHT: f32 = 420.0;

const TRACK_LIST_WIDTH: f32 = 280.0;
const INFO_PANEL_WIDTH: f32 = 240.0;
const PLAYER_BAR_HEIGHT: f32 = 80.0;

/// Scroll offset that keeps lyric `index` near the upper part of the window
///
/// The active line is pinned at row `floor(viewport / 2.5 / line_height)`;
/// the offset never scrolls past either end of the content.
pub fn lyric_scroll_offset(
    index: usize,
    line_height: f32,
    viewport_height: f32,
    line_count: usize,
) -> f32 {
    if line_height <= 0.0 || line_count == 0 {
        return 0.0;
    }

    let fixed_row = (viewport_height / 2.5 / line_height).floor();
    let target = (index as f32 - fixed_row) * line_height;
    let max_scroll = (line_count as f32 * line_height - viewport_height).max(0.0);
    target.clamp(0.0, max_scroll)
}

/// Display state of the player page
#[derive(Debug, Clone, Default)]
pub struct PlayerPage {
    tracks: Vec<Track>,
    playing_rows: Vec<bool>,
    lyrics: Vec<LyricLine>,
    highlighted: Option<usize>,
    is_playing: bool,
    current_time: f64,
    total_time: f64,
    progress: f32,
    volume: f32,
    muted: bool,
    track: Option<Track>,
    loop_mode: LoopMode,
    pending_scroll: Option<f32>,
}

impl PlayerPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scroll target requested by the last highlight change, if not yet applied
    pub fn take_pending_scroll(&mut self) -> Option<f32> {
        self.pending_scroll.take()
    }

    #[cfg(test)]
    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    pub fn is_row_playing(&self, index: usize) -> bool {
        self.playing_rows.get(index).copied().unwrap_or(false)
    }

    pub fn time_label(&self) -> String {
        time_display(self.current_time, self.total_time)
    }

    #[cfg(test)]
    pub fn lyrics(&self) -> &[LyricLine] {
        &self.lyrics
    }

    // ============ View ============

    pub fn view(&self) -> Element<'_, Message> {
        let body = row![
            container(self.track_list())
                .width(TRACK_LIST_WIDTH)
                .height(Fill)
                .padding(12)
                .style(theme::sidebar),
            container(self.lyric_window())
                .width(Fill)
                .height(Fill)
                .center_y(Fill)
                .padding(Padding::new(24.0)),
            container(self.song_info())
                .width(INFO_PANEL_WIDTH)
                .height(Fill)
                .padding(20)
                .style(theme::sidebar),
        ]
        .height(Fill);

        column![
            container(body).height(Fill).style(theme::main_content),
            self.player_bar(),
        ]
        .into()
    }

    fn track_list(&self) -> Element<'_, Message> {
        let rows = self.tracks.iter().enumerate().map(|(index, track)| {
            let playing = self.is_row_playing(index);
            let content = container(
                row![
                    text(format!("{:02}", index + 1))
                        .size(12)
                        .width(28)
                        .style(|t| text::Style {
                            color: Some(theme::dimmed_text(t)),
                        }),
                    column![
                        text(track.name.as_str()).size(14),
                        text(track.singer.as_str()).size(12).style(|t| text::Style {
                            color: Some(theme::text_secondary(t)),
                        }),
                    ]
                    .width(Fill),
                    text(track.duration_label.as_str())
                        .size(12)
                        .style(|t| text::Style {
                            color: Some(theme::dimmed_text(t)),
                        }),
                ]
                .spacing(8)
                .align_y(Alignment::Center),
            )
            .padding(Padding::from([6, 8]))
            .style(move |t| theme::track_row(t, playing));

            Element::from(
                button(content)
                    .padding(0)
                    .width(Fill)
                    .style(theme::row_button)
                    .on_press(Message::SelectTrack(index)),
            )
        });

        scrollable(column(rows).spacing(2))
            .height(Fill)
            .style(theme::dark_scrollable)
            .into()
    }

    fn lyric_window(&self) -> Element<'_, Message> {
        if self.lyrics.is_empty() {
            return container(text("暂无歌词").size(16).style(|t| text::Style {
                color: Some(theme::text_muted(t)),
            }))
            .width(Fill)
            .height(LYRIC_VIEWPORT_HEIGHT)
            .center_x(Fill)
            .center_y(LYRIC_VIEWPORT_HEIGHT)
            .into();
        }

        let lines = self.lyrics.iter().enumerate().map(|(index, line)| {
            let active = self.highlighted == Some(index);
            let size: f32 = if active { 20.0 } else { 16.0 };
            let line_row = container(
                text(line.text.as_str())
                    .size(size)
                    .style(move |t| text::Style {
                        color: Some(theme::lyric_text(t, active)),
                    }),
            )
            .width(Fill)
            .height(LYRIC_LINE_HEIGHT)
            .center_x(Fill)
            .center_y(LYRIC_LINE_HEIGHT);
            Element::from(line_row)
        });

        scrollable(column(lines))
            .id(iced::widget::Id::new(LYRICS_SCROLLABLE_ID))
            .height(LYRIC_VIEWPORT_HEIGHT)
            .style(theme::dark_scrollable)
            .into()
    }

    fn song_info(&self) -> Element<'_, Message> {
        let cover = container(
            svg(svg::Handle::from_memory(icons::MUSIC_NOTE.as_bytes()))
                .width(64)
                .height(64)
                .style(|t, _status| svg::Style {
                    color: Some(theme::icon_muted(t)),
                }),
        )
        .width(200)
        .height(200)
        .center_x(200)
        .center_y(200)
        .style(theme::cover_placeholder);

        let Some(track) = &self.track else {
            return column![cover].into();
        };

        column![
            cover,
            Space::new().height(16),
            text(track.name.as_str()).size(18),
            info_field("歌手", &track.singer),
            info_field("专辑", &track.album),
            info_field("时长", &track.duration_label),
        ]
        .spacing(6)
        .into()
    }

    fn player_bar(&self) -> Element<'_, Message> {
        let title = match &self.track {
            Some(track) => format!("{} - {}", track.name, track.singer),
            None => String::new(),
        };

        let left = container(text(title).size(14))
            .width(Length::FillPortion(1))
            .padding(Padding::new(0.0).left(16.0));

        let center = column![
            playback_controls::view(self.is_playing),
            row![
                progress_slider::view(self.progress),
                text(self.time_label()).size(12).style(|t| text::Style {
                    color: Some(theme::dimmed_text(t)),
                }),
            ]
            .spacing(12)
            .align_y(Alignment::Center),
        ]
        .spacing(4)
        .align_x(Alignment::Center);

        let right = row![
            loop_mode_button::view(self.loop_mode),
            playback_controls::mute_button(self.muted),
            progress_slider::volume_slider(self.volume),
        ]
        .spacing(8)
        .align_y(Alignment::Center);

        container(
            row![
                left,
                container(center).width(Length::FillPortion(2)).center_x(Fill),
                container(right)
                    .width(Length::FillPortion(1))
                    .align_right(Fill)
                    .padding(Padding::new(0.0).right(16.0)),
            ]
            .align_y(Alignment::Center),
        )
        .height(PLAYER_BAR_HEIGHT)
        .center_y(PLAYER_BAR_HEIGHT)
        .style(theme::player_bar)
        .into()
    }
}

fn info_field<'a>(label: &'a str, value: &'a str) -> Element<'a, Message> {
    row![
        text(label).size(12).style(|t| text::Style {
            color: Some(theme::text_muted(t)),
        }),
        text(value).size(13),
    ]
    .spacing(6)
    .into()
}

impl Presenter for PlayerPage {
    fn render_track_list(&mut self, tracks: &[Track]) {
        self.tracks = tracks.to_vec();
        self.playing_rows = vec![false; tracks.len()];
    }

    fn render_lyrics(&mut self, lyrics: &[LyricLine]) {
        self.lyrics = lyrics.to_vec();
        self.highlighted = None;
        self.pending_scroll = Some(0.0);
    }

    fn highlight_lyric(&mut self, index: usize) {
        self.highlighted = Some(index);
        self.pending_scroll = Some(lyric_scroll_offset(
            index,
            LYRIC_LINE_HEIGHT,
            LYRIC_VIEWPORT_HEIGHT,
            self.lyrics.len(),
        ));
    }

    fn set_row_playing(&mut self, index: usize, playing: bool) {
        if let Some(row) = self.playing_rows.get_mut(index) {
            *row = playing;
        }
    }

    fn set_play_button(&mut self, playing: bool) {
        self.is_playing = playing;
    }

    fn set_time_label(&mut self, current: f64, total: f64) {
        self.current_time = current;
        self.total_time = total;
    }

    fn set_progress(&mut self, fraction: f32) {
        self.progress = fraction;
    }

    fn set_volume(&mut self, fraction: f32) {
        self.volume = fraction;
    }

    fn set_muted_indicator(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn show_track_info(&mut self, track: &Track) {
        self.track = Some(track.clone());
    }

    fn set_loop_mode(&mut self, mode: LoopMode) {
        self.loop_mode = mode;
    }
}

/// Scroll the lyric window to an absolute offset
pub fn scroll_lyrics(offset: f32) -> iced::Task<Message> {
    iced::widget::operation::scroll_to(
        iced::widget::Id::new(LYRICS_SCROLLABLE_ID),
        AbsoluteOffset {
            x: Some(0.0),
            y: Some(offset),
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(time: f64, text: &str) -> LyricLine {
        LyricLine {
            time,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_scroll_offset_stays_at_top_for_early_lines() {
        // 420 / 2.5 / 36 = 4.67 -> pinned row 4
        for index in 0..=4 {
            assert_eq!(lyric_scroll_offset(index, 36.0, 420.0, 50), 0.0);
        }
        assert_eq!(lyric_scroll_offset(5, 36.0, 420.0, 50), 36.0);
        assert_eq!(lyric_scroll_offset(10, 36.0, 420.0, 50), 216.0);
    }

    #[test]
    fn test_scroll_offset_clamps_at_bottom() {
        // 50 lines * 36 = 1800, max scroll 1380
        assert_eq!(lyric_scroll_offset(49, 36.0, 420.0, 50), 1380.0);
    }

    #[test]
    fn test_scroll_offset_short_content_never_scrolls() {
        assert_eq!(lyric_scroll_offset(8, 36.0, 420.0, 9), 0.0);
        assert_eq!(lyric_scroll_offset(0, 36.0, 420.0, 0), 0.0);
        assert_eq!(lyric_scroll_offset(3, 0.0, 420.0, 10), 0.0);
    }

    #[test]
    fn test_presenter_tracks_rows_and_highlight() {
        let mut page = PlayerPage::new();
        page.render_track_list(&[Track::default(), Track::default()]);
        page.set_row_playing(1, true);
        page.set_row_playing(7, true);
        assert!(!page.is_row_playing(0));
        assert!(page.is_row_playing(1));
        assert!(!page.is_row_playing(7));

        let lyrics: Vec<LyricLine> = (0..20).map(|i| line(i as f64, "la")).collect();
        page.render_lyrics(&lyrics);
        assert_eq!(page.take_pending_scroll(), Some(0.0));
        assert_eq!(page.take_pending_scroll(), None);

        page.highlight_lyric(6);
        assert_eq!(page.highlighted(), Some(6));
        assert_eq!(page.take_pending_scroll(), Some(72.0));
    }

    #[test]
    fn test_new_lyrics_clear_highlight() {
        let mut page = PlayerPage::new();
        page.render_lyrics(&[line(0.0, "a")]);
        page.highlight_lyric(0);
        page.render_lyrics(&[line(0.0, "b")]);
        assert_eq!(page.highlighted(), None);
        assert_eq!(page.lyrics()[0].text, "b");
    }

    #[test]
    fn test_time_label_formats_both_sides() {
        let mut page = PlayerPage::new();
        page.set_time_label(65.0, 3725.0);
        assert_eq!(page.time_label(), "01:05 / 01:02:05");
    }
}
