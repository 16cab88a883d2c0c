use fltk::{
    app::Sender,
    enums::Shortcut,
    menu::{MenuBar, MenuFlag},
    prelude::*,
};

use crate::app::domain::{InputEvent, Message};

pub const DARK_MODE_ITEM: &str = "View/Toggle Dark Mode";

pub fn build_menu(menu: &mut MenuBar, sender: &Sender<Message>, initial_dark_mode: bool) {
    let s = sender;
    let input = |event: InputEvent| Message::Input(event);

    // File
    menu.add("File/Settings...", Shortcut::Ctrl | ',', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::OpenSettings) });
    menu.add("File/Quit", Shortcut::Ctrl | 'q', MenuFlag::Normal, { let s = *s; move |_| s.send(input(InputEvent::Exit)) });

    // Edit
    menu.add("Edit/Copy Result", Shortcut::Ctrl | 'c', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::CopyDisplay) });
    menu.add("Edit/Clear", Shortcut::Ctrl | 'l', MenuFlag::Normal, { let s = *s; move |_| s.send(input(InputEvent::Clear)) });

    // Memory
    menu.add("Memory/Store (M+)", Shortcut::Ctrl | 'm', MenuFlag::Normal, { let s = *s; move |_| s.send(input(InputEvent::MemoryStore)) });
    menu.add("Memory/Recall (MR)", Shortcut::Ctrl | 'r', MenuFlag::Normal, { let s = *s; move |_| s.send(input(InputEvent::MemoryRecall)) });
    menu.add("Memory/Clear (MC)", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(input(InputEvent::MemoryClear)) });

    // View
    menu.add("View/History...", Shortcut::Ctrl | 'h', MenuFlag::Normal, { let s = *s; move |_| s.send(input(InputEvent::ShowHistory)) });
    let dm_flag = if initial_dark_mode { MenuFlag::Toggle | MenuFlag::Value } else { MenuFlag::Toggle };
    menu.add(DARK_MODE_ITEM, Shortcut::Ctrl | 'd', dm_flag, { let s = *s; move |_| s.send(input(InputEvent::ToggleTheme)) });

    // Help
    menu.add("Help/About FerrisCalc", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ShowAbout) });
}
