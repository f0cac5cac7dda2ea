// src/cli/menu.rs
use std::fmt;

use inquire::{InquireError, Select, Text};

use crate::cli::clipboard::ClipboardSink;
use crate::cli::handlers::styled_strength;
use crate::core::GeneratorSession;
use crate::models::{
    CharacterClass, PasswordGenerationOptions, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Regenerate,
    SetLength(usize),
    Toggle(CharacterClass, bool),
    Copy,
    Exit,
}

impl fmt::Display for MenuAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuAction::Regenerate => write!(f, "🔄  Regenerate"),
            MenuAction::SetLength(length) => write!(f, "📏  Length: {}", length),
            MenuAction::Toggle(class, enabled) => {
                let mark = if *enabled { "☑" } else { "☐" };
                write!(f, "{}  Include {}", mark, class.label())
            }
            MenuAction::Copy => write!(f, "📋  Copy to clipboard"),
            MenuAction::Exit => write!(f, "❌  Exit"),
        }
    }
}

pub fn menu_actions(options: &PasswordGenerationOptions) -> Vec<MenuAction> {
    let mut actions = vec![MenuAction::Regenerate, MenuAction::SetLength(options.length)];
    actions.extend(
        CharacterClass::ALL
            .iter()
            .map(|class| MenuAction::Toggle(*class, options.is_enabled(*class))),
    );
    actions.push(MenuAction::Copy);
    actions.push(MenuAction::Exit);
    actions
}

fn print_current(session: &GeneratorSession) {
    match (session.password(), session.strength()) {
        (Some(password), Some(strength)) => {
            println!("\n🔐 {}", password);
            println!("Strength: {}", styled_strength(strength));
        }
        _ => println!("\n❗ No password: select at least one character class."),
    }
}

// Esc and Ctrl+C both end the session
fn is_exit(err: &InquireError) -> bool {
    matches!(
        err,
        InquireError::OperationCanceled | InquireError::OperationInterrupted
    )
}

fn prompt_length(current: usize) -> Result<Option<usize>, InquireError> {
    let default = current.to_string();
    let answer = Text::new(&format!(
        "Password length ({}-{}):",
        MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH
    ))
    .with_default(&default)
    .prompt_skippable()?;

    let Some(answer) = answer else {
        return Ok(None);
    };

    match answer.trim().parse::<usize>() {
        Ok(length) if (MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&length) => Ok(Some(length)),
        _ => {
            println!(
                "❌ Length must be a number between {} and {}.",
                MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH
            );
            Ok(None)
        }
    }
}

/// Run the interactive generator until the user exits.
pub fn run_interactive<C: ClipboardSink + ?Sized>(
    options: PasswordGenerationOptions,
    clipboard: &mut C,
) -> anyhow::Result<()> {
    println!("╔══════════════════════════════════════╗");
    println!("║         🦀 PASSWORD GENERATOR        ║");
    println!("╚══════════════════════════════════════╝");

    let mut session = GeneratorSession::new(options);

    loop {
        print_current(&session);

        let actions = menu_actions(session.options());
        let selection = match Select::new("Choose an option:", actions)
            .with_help_message("Use arrow keys to navigate, Enter to select. Esc to exit.")
            .with_page_size(10)
            .prompt_skippable()
        {
            Ok(Some(action)) => action,
            Ok(None) => break,
            Err(e) if is_exit(&e) => break,
            Err(e) => return Err(e.into()),
        };

        let changed = match selection {
            MenuAction::Regenerate => session.regenerate().map(|_| ()),
            MenuAction::SetLength(current) => match prompt_length(current) {
                Ok(Some(length)) => session.set_length(length).map(|_| ()),
                Ok(None) => Ok(()),
                Err(e) if is_exit(&e) => break,
                Err(e) => return Err(e.into()),
            },
            MenuAction::Toggle(class, _) => session.toggle(class).map(|_| ()),
            MenuAction::Copy => {
                match session.copy_to(clipboard) {
                    Ok(()) => println!("✅ Copied to clipboard"),
                    Err(e) => println!("⚠️ {}", e),
                }
                Ok(())
            }
            MenuAction::Exit => break,
        };

        if let Err(e) = changed {
            log::debug!("Options rejected: {}", e);
        }
    }

    println!("👋 Goodbye!");
    Ok(())
}
