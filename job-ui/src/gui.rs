use gpui::{App, KeyBinding, Menu, MenuItem};

use crate::{
    CloseSummary, Quit,
    components::job_form::KEY_CONTEXT,
    quit,
};

pub fn setup_app(app_cx: &mut App) {
    // This must be called before using any GPUI Component features.
    gpui_component::init(app_cx);

    app_cx.activate(true);

    // Bind platform-appropriate quit shortcut
    #[cfg(target_os = "macos")]
    app_cx.bind_keys([KeyBinding::new("cmd-q", Quit, None)]);

    #[cfg(not(target_os = "macos"))]
    app_cx.bind_keys([
        KeyBinding::new("ctrl-q", Quit, None),
        KeyBinding::new("alt-F4", Quit, None),
    ]);

    app_cx.bind_keys([KeyBinding::new(
        "escape",
        CloseSummary,
        Some(KEY_CONTEXT),
    )]);

    app_cx.on_action(quit);

    app_cx.set_menus(vec![Menu {
        name: "Job Application".into(),
        items: vec![MenuItem::action("Quit", Quit)],
    }]);
}
