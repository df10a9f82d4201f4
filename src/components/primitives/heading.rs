//! Heading Component

use gpui::{div, px, App, FontWeight, IntoElement, ParentElement, RenderOnce, SharedString, Styled, Window};

use crate::theme::colors::HelloColors;
use crate::theme::typography::Typography;

/// A second-level heading
#[derive(IntoElement)]
pub struct Heading {
    text: SharedString,
}

impl Heading {
    pub fn new(text: impl Into<SharedString>) -> Self {
        Self { text: text.into() }
    }
}

impl RenderOnce for Heading {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        div()
            .text_size(px(Typography::TEXT_2XL))
            .font_weight(FontWeight::SEMIBOLD)
            .text_color(HelloColors::text_primary())
            .child(self.text)
    }
}
