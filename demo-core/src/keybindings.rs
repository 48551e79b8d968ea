use egui::{Context, Key};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ToggleDebug,
    ToggleKeybindings,
    CloseKeybindings,
}

/// Collects the commands triggered by this frame's input.
pub fn dispatch(ctx: &Context) -> Vec<Command> {
    let mut cmds = Vec::new();
    let mut help = false;

    ctx.input(|i| {
        for ev in &i.events {
            match ev {
                egui::Event::Key {
                    key,
                    pressed: true,
                    modifiers,
                    ..
                } => match key {
                    Key::D if !modifiers.any() => cmds.push(Command::ToggleDebug),
                    Key::H if !modifiers.any() => help = true,
                    Key::Slash if modifiers.shift => help = true,
                    Key::Escape => cmds.push(Command::CloseKeybindings),
                    _ => {}
                },
                // Some layouts only report '?' as text.
                egui::Event::Text(t) if t == "?" => help = true,
                _ => {}
            }
        }
    });

    if help {
        cmds.push(Command::ToggleKeybindings);
    }
    cmds
}

/// Rows of the help window.
pub const HELP: &[(&str, &str)] = &[
    ("d", "toggle debug overlay"),
    ("h / ?", "open keybindings (this) window"),
    ("Esc", "close this window"),
    ("Click", "press a button (logged at info)"),
];
