//! Greeter View
//!
//! Renders the heading and the button that changes it.

use gpui::{
    div, prelude::*, ClickEvent, Context, FocusHandle, InteractiveElement, IntoElement,
    ParentElement, Render, Styled, Subscription, Window,
};
use tracing::info;

use crate::app::application::ResetMessage;
use crate::components::primitives::button::{Button, ButtonSize};
use crate::components::primitives::heading::Heading;
use crate::constants::CHANGE_MESSAGE_LABEL;
use crate::states::{HelloGlobalStore, MessageState, persist_app_state};
use crate::theme::colors::HelloColors;

/// Parent view owning the message and handing the button its click callback
pub struct GreeterView {
    state: MessageState,
    focus_handle: FocusHandle,
    _subscriptions: Vec<Subscription>,
}

impl GreeterView {
    pub fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let focus_handle = cx.focus_handle();
        window.focus(&focus_handle);

        // Keep the latest bounds in memory; they are written out when the window closes
        let subscriptions = vec![cx.observe_window_bounds(window, |_this, window, cx| {
            let bounds = window.window_bounds().get_bounds();
            if let Some(store) = cx.try_global::<HelloGlobalStore>().cloned() {
                store.update(cx, |state, _| state.set_bounds(bounds));
            }
        })];

        window.on_window_should_close(cx, |_window, cx| {
            persist_app_state(cx, "window_closed");
            true
        });

        Self {
            state: MessageState::new(),
            focus_handle,
            _subscriptions: subscriptions,
        }
    }

    fn change_message(&mut self, cx: &mut Context<Self>) {
        if self.state.change_message() {
            info!(message = %self.state.message(), "Message changed");
            cx.notify();
        }
    }

    fn reset_message(&mut self, _: &ResetMessage, _window: &mut Window, cx: &mut Context<Self>) {
        if self.state.reset() {
            info!(message = %self.state.message(), "Message reset");
            cx.notify();
        }
    }
}

impl Render for GreeterView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .key_context("Greeter")
            .track_focus(&self.focus_handle)
            .on_action(cx.listener(Self::reset_message))
            .size_full()
            .flex()
            .flex_col()
            .items_center()
            .justify_center()
            .gap_4()
            .bg(HelloColors::background())
            .child(Heading::new(self.state.message()))
            .child(
                Button::primary("change-message-btn", CHANGE_MESSAGE_LABEL)
                    .size(ButtonSize::Large)
                    .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                        this.change_message(cx);
                    })),
            )
    }
}
