use fltk::{
    button::Button,
    group::Flex,
    prelude::*,
    text::{TextBuffer, TextDisplay, WrapMode},
    window::Window,
};

/// Read-only, scrollable text window, used for long operation histories.
pub fn show_text_dialog(title: &str, body: &str) {
    let mut dialog = Window::default()
        .with_size(360, 420)
        .with_label(title)
        .center_screen();
    dialog.make_modal(true);

    let mut flex = Flex::new(10, 10, 340, 400, None);
    flex.set_type(fltk::group::FlexType::Column);
    flex.set_spacing(10);

    let mut buffer = TextBuffer::default();
    buffer.set_text(body);
    let mut view = TextDisplay::default();
    view.set_buffer(buffer);
    view.wrap_mode(WrapMode::AtBounds, 0);
    view.set_text_size(14);
    // Newest entries are at the bottom.
    let lines = view.count_lines(0, body.len() as i32, true);
    view.scroll(lines, 0);

    let mut close_btn = Button::default().with_label("Close");
    flex.fixed(&close_btn, 30);

    flex.end();
    dialog.end();
    dialog.make_resizable(true);

    let mut dialog_close = dialog.clone();
    close_btn.set_callback(move |_| {
        dialog_close.hide();
    });

    dialog.show();
    super::run_dialog(&dialog);
}
