//! A stateless overlay dialog.
//!
//! The host owns the visibility flag and passes it in on every render; the
//! modal only reports close requests back through its `on_close` handler.

use std::rc::Rc;

use gpui::{
    AnyElement, App, InteractiveElement, IntoElement, MouseButton, ParentElement, RenderOnce,
    SharedString, Styled, Window, div, px,
};
use gpui_component::{
    Theme, h_flex,
    button::{Button, ButtonVariants},
    v_flex,
};

type CloseHandler = Rc<dyn Fn(&mut Window, &mut App)>;

#[derive(IntoElement)]
pub struct Modal {
    id: SharedString,
    visible: bool,
    title: Option<SharedString>,
    on_close: Option<CloseHandler>,
    children: Vec<AnyElement>,
}

impl Modal {
    pub fn new(id: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            visible: false,
            title: None,
            on_close: None,
            children: Vec::new(),
        }
    }

    pub fn visible(
        mut self,
        visible: bool,
    ) -> Self {
        self.visible = visible;
        self
    }

    pub fn title(
        mut self,
        title: impl Into<SharedString>,
    ) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Called when the close button or the backdrop is clicked.
    ///
    /// The host is expected to clear its own visibility flag here.
    pub fn on_close(
        mut self,
        handler: impl Fn(&mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_close = Some(Rc::new(handler));
        self
    }

    fn request_close(
        handler: &Option<CloseHandler>,
        window: &mut Window,
        cx: &mut App,
    ) {
        if let Some(handler) = handler {
            handler(window, cx);
        }
    }
}

impl ParentElement for Modal {
    fn extend(
        &mut self,
        elements: impl IntoIterator<Item = AnyElement>,
    ) {
        self.children.extend(elements);
    }
}

impl RenderOnce for Modal {
    fn render(
        self,
        _window: &mut Window,
        cx: &mut App,
    ) -> impl IntoElement {
        if !self.visible {
            return div().into_any_element();
        }

        let colors = &Theme::global(cx).colors;
        let backdrop_close = self.on_close.clone();
        let button_close = self.on_close;

        let panel = v_flex()
            .min_w(px(420.))
            .max_w(px(640.))
            .p_5()
            .gap_3()
            .rounded_lg()
            .border_1()
            .border_color(colors.border)
            .bg(colors.background)
            .text_color(colors.foreground)
            .shadow_lg()
            // Clicks inside the panel must not reach the backdrop.
            .on_mouse_down(MouseButton::Left, |_, _, cx| cx.stop_propagation())
            .children(
                self.title
                    .map(|title| div().text_xl().font_weight(gpui::FontWeight::BOLD).child(title)),
            )
            .children(self.children)
            .child(
                h_flex().justify_end().child(
                    Button::new(SharedString::from(format!("{}-close", self.id)))
                        .primary()
                        .label("Close")
                        .on_click(move |_, window, cx| {
                            Modal::request_close(&button_close, window, cx)
                        }),
                ),
            );

        div()
            .absolute()
            .inset_0()
            .occlude()
            .flex()
            .items_center()
            .justify_center()
            .bg(colors.overlay)
            .on_mouse_down(MouseButton::Left, move |_, window, cx| {
                Modal::request_close(&backdrop_close, window, cx)
            })
            .child(panel)
            .into_any_element()
    }
}
