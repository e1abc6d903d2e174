//! Drag bar widget
//!
//! A horizontal bar that reports raw pointer input instead of a value. The
//! press is only accepted over the bar, but once a drag is underway every
//! move and the release are forwarded wherever the cursor is, so the seek
//! protocol can finish the drag even when the pointer leaves the bar.
//!
//! The displayed fill comes from the caller; the widget never decides the value.

use iced::advanced::layout;
use iced::advanced::renderer;
use iced::advanced::widget::tree::{self, Tree};
use iced::advanced::{Clipboard, Layout, Shell, Widget};
use iced::border::Border;
use iced::mouse;
use iced::touch;
use iced::window;
use iced::{Background, Color, Element, Event, Length, Pixels, Rectangle, Size, Theme};

use crate::features::seek::{PointerEvent, TrackBounds};

/// Pointer-driven bar
pub struct DragBar<'a, Message> {
    value: f32,
    on_pointer: Box<dyn Fn(PointerEvent) -> Message + 'a>,
    width: Length,
    height: f32,
    style: Box<dyn Fn(&Theme, Status) -> Style + 'a>,
    status: Option<Status>,
}

impl<'a, Message> DragBar<'a, Message>
where
    Message: Clone,
{
    pub const DEFAULT_HEIGHT: f32 = 16.0;

    /// `value` is the fill fraction to draw
    pub fn new<F>(value: f32, on_pointer: F) -> Self
    where
        F: 'a + Fn(PointerEvent) -> Message,
    {
        Self {
            value: if value.is_finite() {
                value.clamp(0.0, 1.0)
            } else {
                0.0
            },
            on_pointer: Box::new(on_pointer),
            width: Length::Fill,
            height: Self::DEFAULT_HEIGHT,
            style: Box::new(default_style),
            status: None,
        }
    }

    pub fn width(mut self, width: impl Into<Length>) -> Self {
        self.width = width.into();
        self
    }

    pub fn height(mut self, height: impl Into<Pixels>) -> Self {
        self.height = height.into().0;
        self
    }

    pub fn style(mut self, style: impl Fn(&Theme, Status) -> Style + 'a) -> Self {
        self.style = Box::new(style);
        self
    }
}

impl<Message, Renderer> Widget<Message, Theme, Renderer> for DragBar<'_, Message>
where
    Message: Clone,
    Renderer: iced::advanced::Renderer,
{
    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<State>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(State::default())
    }

    fn size(&self) -> Size<Length> {
        Size {
            width: self.width,
            height: Length::Shrink,
        }
    }

    fn layout(
        &mut self,
        _tree: &mut Tree,
        _renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        layout::atomic(limits, self.width, self.height)
    }

    fn update(
        &mut self,
        tree: &mut Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _renderer: &Renderer,
        _clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        _viewport: &Rectangle,
    ) {
        let state = tree.state.downcast_mut::<State>();
        let bounds = layout.bounds();

        match &event {
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left))
            | Event::Touch(touch::Event::FingerPressed { .. }) => {
                if let Some(position) = cursor.position_over(bounds) {
                    shell.publish((self.on_pointer)(PointerEvent::Down {
                        bounds: TrackBounds::new(bounds.x, bounds.width),
                        x: position.x,
                    }));
                    state.is_dragging = true;
                    shell.capture_event();
                }
            }
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
            | Event::Touch(touch::Event::FingerLifted { .. }) => {
                if state.is_dragging {
                    let x = cursor.land().position().map(|p| p.x);
                    shell.publish((self.on_pointer)(PointerEvent::Up { x }));
                    state.is_dragging = false;
                }
            }
            Event::Touch(touch::Event::FingerLost { .. })
            | Event::Window(window::Event::Unfocused) => {
                // Release happened where we cannot see it
                if state.is_dragging {
                    shell.publish((self.on_pointer)(PointerEvent::Up { x: None }));
                    state.is_dragging = false;
                }
            }
            Event::Mouse(mouse::Event::CursorMoved { position })
            | Event::Touch(touch::Event::FingerMoved { position, .. }) => {
                if state.is_dragging {
                    shell.publish((self.on_pointer)(PointerEvent::Move { x: position.x }));
                    shell.capture_event();
                }
            }
            _ => {}
        }

        let current_status = if state.is_dragging {
            Status::Dragged
        } else if cursor.is_over(bounds) {
            Status::Hovered
        } else {
            Status::Active
        };

        if let Event::Window(window::Event::RedrawRequested(_now)) = event {
            self.status = Some(current_status);
        } else if self.status.is_some_and(|status| status != current_status) {
            shell.request_redraw();
        }
    }

    fn draw(
        &self,
        _tree: &Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        _style: &renderer::Style,
        layout: Layout<'_>,
        _cursor: mouse::Cursor,
        _viewport: &Rectangle,
    ) {
        let bounds = layout.bounds();
        let style = (self.style)(theme, self.status.unwrap_or(Status::Active));

        let rail_y = bounds.y + bounds.height / 2.0;
        let filled = bounds.width * self.value;

        // Filled portion
        renderer.fill_quad(
            renderer::Quad {
                bounds: Rectangle {
                    x: bounds.x,
                    y: rail_y - style.rail.width / 2.0,
                    width: filled,
                    height: style.rail.width,
                },
                border: style.rail.border,
                ..renderer::Quad::default()
            },
            style.rail.backgrounds.0,
        );

        // Remaining portion
        renderer.fill_quad(
            renderer::Quad {
                bounds: Rectangle {
                    x: bounds.x + filled,
                    y: rail_y - style.rail.width / 2.0,
                    width: bounds.width - filled,
                    height: style.rail.width,
                },
                border: style.rail.border,
                ..renderer::Quad::default()
            },
            style.rail.backgrounds.1,
        );

        if style.handle_radius > 0.0 {
            let diameter = style.handle_radius * 2.0;
            renderer.fill_quad(
                renderer::Quad {
                    bounds: Rectangle {
                        x: bounds.x + filled - style.handle_radius,
                        y: rail_y - style.handle_radius,
                        width: diameter,
                        height: diameter,
                    },
                    border: Border {
                        radius: style.handle_radius.into(),
                        ..Border::default()
                    },
                    ..renderer::Quad::default()
                },
                style.handle_background,
            );
        }
    }

    fn mouse_interaction(
        &self,
        tree: &Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _viewport: &Rectangle,
        _renderer: &Renderer,
    ) -> mouse::Interaction {
        let state = tree.state.downcast_ref::<State>();

        if state.is_dragging {
            if cfg!(target_os = "windows") {
                mouse::Interaction::Pointer
            } else {
                mouse::Interaction::Grabbing
            }
        } else if cursor.is_over(layout.bounds()) {
            mouse::Interaction::Pointer
        } else {
            mouse::Interaction::default()
        }
    }
}

impl<'a, Message, Renderer> From<DragBar<'a, Message>> for Element<'a, Message, Theme, Renderer>
where
    Message: Clone + 'a,
    Renderer: iced::advanced::Renderer + 'a,
{
    fn from(bar: DragBar<'a, Message>) -> Element<'a, Message, Theme, Renderer> {
        Element::new(bar)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct State {
    is_dragging: bool,
}

/// Status of the bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Active,
    Hovered,
    Dragged,
}

/// Style for the drag bar
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    pub rail: Rail,
    /// 0 hides the handle
    pub handle_radius: f32,
    pub handle_background: Background,
}

/// Rail appearance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rail {
    /// (filled, remaining) backgrounds
    pub backgrounds: (Background, Background),
    pub width: f32,
    pub border: Border,
}

fn default_style(_theme: &Theme, status: Status) -> Style {
    let accent = Background::Color(Color::from_rgb(0.8, 0.2, 0.5));
    Style {
        rail: Rail {
            backgrounds: (accent, Background::Color(Color::from_rgba(1.0, 1.0, 1.0, 0.1))),
            width: 4.0,
            border: Border {
                radius: 2.0.into(),
                width: 0.0,
                color: Color::TRANSPARENT,
            },
        },
        handle_radius: match status {
            Status::Active => 0.0,
            Status::Hovered | Status::Dragged => 6.0,
        },
        handle_background: accent,
    }
}
