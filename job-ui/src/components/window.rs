use gpui::{
    App, AppContext, Context, Entity, IntoElement, ParentElement, Render, Styled, Subscription,
    Window, div,
};
use gpui_component::StyledExt;
use tracing::info;

#[cfg(not(target_os = "linux"))]
use crate::Quit;
#[cfg(not(target_os = "linux"))]
use crate::quit;

use super::JobApplicationForm;

/// Root view of the main window. Closing it quits the app except on Linux.
pub struct AppWindow {
    form: Entity<JobApplicationForm>,
    _window_close_subscription: Subscription,
}

impl AppWindow {
    pub fn new(
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let form = cx.new(|form_cx| JobApplicationForm::new(window, form_cx));
        let subscription = cx.on_window_closed(|_cx: &mut App| {
            info!("Main window closed");
            #[cfg(not(target_os = "linux"))]
            quit(&Quit, _cx);
        });

        Self {
            form,
            _window_close_subscription: subscription,
        }
    }
}

impl Render for AppWindow {
    fn render(
        &mut self,
        _: &mut Window,
        _cx: &mut Context<Self>,
    ) -> impl IntoElement {
        div().v_flex().size_full().child(self.form.clone())
    }
}
