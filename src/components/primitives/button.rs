//! Button Component

use gpui::{
    div, prelude::*, px, App, ClickEvent, ElementId, InteractiveElement, IntoElement,
    ParentElement, RenderOnce, Rgba, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::theme::colors::HelloColors;
use crate::theme::typography::Typography;

/// Button variant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Filled action button (teal)
    #[default]
    Primary,
    /// Ghost button (transparent)
    Ghost,
}

impl ButtonVariant {
    /// Background, text and hover background colors
    fn colors(self) -> (Rgba, Rgba, Rgba) {
        match self {
            ButtonVariant::Primary => (
                HelloColors::button_primary_bg(),
                HelloColors::button_primary_text(),
                HelloColors::button_primary_hover(),
            ),
            ButtonVariant::Ghost => (
                gpui::rgba(0x00000000),
                HelloColors::button_ghost_text(),
                HelloColors::button_ghost_hover(),
            ),
        }
    }
}

/// Button size
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl ButtonSize {
    /// Horizontal padding, vertical padding and font size in pixels
    fn metrics(self) -> (f32, f32, f32) {
        match self {
            ButtonSize::Small => (8.0, 4.0, Typography::TEXT_XS),
            ButtonSize::Medium => (16.0, 8.0, Typography::TEXT_SM),
            ButtonSize::Large => (24.0, 12.0, Typography::TEXT_BASE),
        }
    }
}

type ClickHandler = Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>;

/// A styled button that forwards clicks to the handler its parent supplies
#[derive(IntoElement)]
pub struct Button {
    id: ElementId,
    label: SharedString,
    variant: ButtonVariant,
    size: ButtonSize,
    on_click: Option<ClickHandler>,
}

impl Button {
    /// Create a new button
    pub fn new(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            variant: ButtonVariant::Primary,
            size: ButtonSize::Medium,
            on_click: None,
        }
    }

    /// Set the button variant
    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the button size
    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    /// Set the click handler
    pub fn on_click(mut self, handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }

    /// Create a primary button
    pub fn primary(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Primary)
    }

    /// Create a ghost button
    pub fn ghost(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Ghost)
    }
}

impl RenderOnce for Button {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let (bg_color, text_color, hover_bg) = self.variant.colors();
        let (padding_x, padding_y, font_size) = self.size.metrics();

        let mut element = div()
            .id(self.id)
            .px(px(padding_x))
            .py(px(padding_y))
            .bg(bg_color)
            .text_color(text_color)
            .text_size(px(font_size))
            .rounded_md()
            .cursor_pointer()
            .hover(|s| s.bg(hover_bg))
            .child(self.label);

        if let Some(handler) = self.on_click {
            element = element.on_click(handler);
        }

        element
    }
}
