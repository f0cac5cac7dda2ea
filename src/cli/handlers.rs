// src/cli/handlers.rs
use std::io::Write;

use anyhow::bail;
use console::style;
use serde::Serialize;
use serde_json::json;

use crate::cli::clipboard::{ClipboardSink, SystemClipboard};
use crate::cli::commands::{resolve_options, ClassFlags, CliCommand, GenerateArgs};
use crate::cli::{menu, Args};
use crate::core::Config;
use crate::generators::strength::password_length;
use crate::generators::{classify, ConfigurationError, PasswordGenerator};
use crate::models::{GeneratedPassword, PasswordGenerationOptions, StrengthLabel};

/// Execute the parsed command, writing results to `out`.
pub fn run<W: Write>(args: &Args, config: &Config, out: &mut W) -> anyhow::Result<()> {
    let command = args
        .command
        .clone()
        .unwrap_or_else(|| CliCommand::Generate(GenerateArgs::default()));

    match command {
        CliCommand::Generate(gen_args) => {
            let options = resolve_options(config.default_options(), gen_args.length, &gen_args.classes);
            log::info!(
                "Generating {} password(s) of length {} (upper: {}, lower: {}, numbers: {}, symbols: {})",
                gen_args.count,
                options.length,
                options.include_uppercase,
                options.include_lowercase,
                options.include_numbers,
                options.include_symbols
            );

            let mut clipboard = SystemClipboard::new();
            let sink = if gen_args.copy {
                Some(&mut clipboard as &mut dyn ClipboardSink)
            } else {
                None
            };
            let report = generate_passwords(&options, usize::from(gen_args.count), sink)?;

            let lines = if args.json {
                render_json(&report)
            } else {
                render_text(&report)
            };
            for line in lines {
                writeln!(out, "{}", line)?;
            }
        }

        CliCommand::Classify { password, classes } => {
            let (length, strength) = classify_password(&password, config.default_options(), &classes);
            log::info!("Classified {} character password as {}", length, strength);

            if args.json {
                writeln!(out, "{}", json!({ "success": true, "length": length, "strength": strength }))?;
            } else {
                writeln!(out, "Strength: {}", styled_strength(strength))?;
            }
        }

        CliCommand::Interactive { length, classes } => {
            if args.json {
                bail!("interactive mode cannot be combined with --json");
            }
            let options = resolve_options(config.default_options(), length, &classes);
            menu::run_interactive(options, &mut SystemClipboard::new())?;
        }
    }

    Ok(())
}

/// Rate `password` using the configured classes adjusted by `classes`. The
/// length option is taken from the password itself.
pub fn classify_password(
    password: &str,
    defaults: PasswordGenerationOptions,
    classes: &ClassFlags,
) -> (usize, StrengthLabel) {
    let mut options = resolve_options(defaults, None, classes);
    options.length = password_length(password);
    (options.length, classify(password, &options))
}

#[derive(Debug, Serialize)]
pub struct GenerationReport {
    pub passwords: Vec<GeneratedPassword>,
    pub copied: bool,
    pub clipboard_error: Option<String>,
}

/// Generate `count` passwords and optionally copy the last one.
///
/// A clipboard failure is recorded in the report rather than returned.
pub fn generate_passwords(
    options: &PasswordGenerationOptions,
    count: usize,
    clipboard: Option<&mut dyn ClipboardSink>,
) -> Result<GenerationReport, ConfigurationError> {
    options.validate()?;

    let generator = PasswordGenerator::new();
    let passwords = (0..count)
        .map(|_| generator.generate_password(options))
        .collect::<Result<Vec<_>, _>>()?;

    let mut report = GenerationReport {
        passwords,
        copied: false,
        clipboard_error: None,
    };

    if let (Some(clipboard), Some(last)) = (clipboard, report.passwords.last()) {
        match clipboard.set_text(&last.password) {
            Ok(()) => report.copied = true,
            Err(e) => {
                log::warn!("Could not copy password: {}", e);
                report.clipboard_error = Some(e.to_string());
            }
        }
    }

    Ok(report)
}

// One object per password; clipboard status rides on the last one
pub fn render_json(report: &GenerationReport) -> Vec<String> {
    let last = report.passwords.len().saturating_sub(1);
    report
        .passwords
        .iter()
        .enumerate()
        .map(|(i, generated)| {
            let mut value = json!({
                "success": true,
                "password": generated.password,
                "strength": generated.strength,
            });
            if i == last && (report.copied || report.clipboard_error.is_some()) {
                value["copied"] = json!(report.copied);
                if let Some(err) = &report.clipboard_error {
                    value["clipboard_error"] = json!(err);
                }
            }
            value.to_string()
        })
        .collect()
}

pub fn render_text(report: &GenerationReport) -> Vec<String> {
    let mut lines: Vec<String> = report
        .passwords
        .iter()
        .map(|generated| format!("{}  {}", generated.password, styled_strength(generated.strength)))
        .collect();

    if report.copied {
        lines.push("✅ Copied to clipboard".to_string());
    }
    if let Some(err) = &report.clipboard_error {
        lines.push(format!("⚠️ {}", err));
    }
    lines
}

pub fn styled_strength(strength: StrengthLabel) -> String {
    match strength {
        StrengthLabel::Strong => style(strength).green().bold().to_string(),
        StrengthLabel::Weak => style(strength).red().bold().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::clipboard::testing::{DeniedClipboard, MemoryClipboard};
    use clap::Parser;
    use serde_json::Value;

    fn run_json(argv: &[&str], config: &Config) -> anyhow::Result<Vec<Value>> {
        let args = Args::try_parse_from(argv.iter().copied()).unwrap();
        let mut out = Vec::new();
        run(&args, config, &mut out)?;

        let text = String::from_utf8(out).unwrap();
        Ok(text.lines().map(|line| serde_json::from_str(line).unwrap()).collect())
    }

    #[test]
    fn test_run_classify_reports_length_and_strength() {
        let config = Config::default();

        let lines = run_json(&["passgen", "--json", "classify", "aB3!dE5@"], &config).unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0]["success"], true);
        assert_eq!(lines[0]["length"], 8);
        assert_eq!(lines[0]["strength"], "Strong");

        // length comes from the password, not the configured default
        let lines = run_json(&["passgen", "classify", "aB3!dE5", "--json"], &config).unwrap();
        assert_eq!(lines[0]["length"], 7);
        assert_eq!(lines[0]["strength"], "Weak");

        let lines = run_json(&["passgen", "--json", "classify", "aB3!😀😀"], &config).unwrap();
        assert_eq!(lines[0]["length"], 8);
        assert_eq!(lines[0]["strength"], "Strong");
    }

    #[test]
    fn test_run_classify_uses_class_flags_over_config() {
        let (config, _) = Config::from_lookup(|key| match key {
            "DEFAULT_INCLUDE_SYMBOLS" => Some("false".to_string()),
            _ => None,
        });

        // symbols are off in the config, digits are still required
        let lines = run_json(&["passgen", "--json", "classify", "abcdEFGH"], &config).unwrap();
        assert_eq!(lines[0]["strength"], "Weak");

        let lines =
            run_json(&["passgen", "--json", "classify", "abcdEFGH", "--no-numbers"], &config).unwrap();
        assert_eq!(lines[0]["strength"], "Strong");

        let lines =
            run_json(&["passgen", "--json", "classify", "abcdEFG1", "--symbols"], &config).unwrap();
        assert_eq!(lines[0]["strength"], "Weak");
    }

    #[test]
    fn test_run_generate_json() {
        let lines = run_json(
            &["passgen", "--json", "generate", "-n", "3", "-l", "10", "--no-symbols"],
            &Config::default(),
        )
        .unwrap();

        assert_eq!(lines.len(), 3);
        for line in &lines {
            let password = line["password"].as_str().unwrap();
            assert_eq!(password.len(), 10);
            assert!(password.chars().all(|c| c.is_ascii_alphanumeric()));
            assert!(line.get("copied").is_none());
        }
    }

    #[test]
    fn test_run_generate_without_classes_fails() {
        let err = run_json(
            &["passgen", "--json", "generate", "--no-uppercase", "--no-lowercase", "--no-numbers", "--no-symbols"],
            &Config::default(),
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "no character class selected");
    }

    #[test]
    fn test_run_interactive_rejects_json() {
        let args = Args::try_parse_from(["passgen", "interactive", "--json"]).unwrap();
        let mut out = Vec::new();

        let err = run(&args, &Config::default(), &mut out).unwrap_err();
        assert!(err.to_string().contains("--json"));
        assert!(out.is_empty());
    }

    #[test]
    fn test_classify_password_overrides_length() {
        let defaults = PasswordGenerationOptions { length: 30, ..Default::default() };
        let (length, strength) = classify_password("aB3!dE5@fG7#", defaults, &ClassFlags::default());

        assert_eq!(length, 12);
        assert_eq!(strength, StrengthLabel::Strong);
    }

    #[test]
    fn test_generate_count_and_length() {
        let options = PasswordGenerationOptions { length: 16, ..Default::default() };
        let report = generate_passwords(&options, 5, None).unwrap();

        assert_eq!(report.passwords.len(), 5);
        assert!(report.passwords.iter().all(|g| g.password.len() == 16));
        assert!(!report.copied);
        assert!(report.clipboard_error.is_none());
    }

    #[test]
    fn test_generate_rejects_bad_options() {
        let options = PasswordGenerationOptions {
            include_uppercase: false,
            include_lowercase: false,
            include_numbers: false,
            include_symbols: false,
            ..Default::default()
        };
        assert_eq!(
            generate_passwords(&options, 1, None).unwrap_err(),
            ConfigurationError::NoCharacterClassSelected
        );
    }

    #[test]
    fn test_copy_takes_last_password() {
        let mut clipboard = MemoryClipboard::default();
        let report =
            generate_passwords(&PasswordGenerationOptions::default(), 3, Some(&mut clipboard)).unwrap();

        assert!(report.copied);
        assert_eq!(clipboard.writes, 1);
        assert_eq!(clipboard.contents.as_deref(), Some(report.passwords[2].password.as_str()));
    }

    #[test]
    fn test_clipboard_failure_is_not_fatal() {
        let mut clipboard = DeniedClipboard;
        let report =
            generate_passwords(&PasswordGenerationOptions::default(), 1, Some(&mut clipboard)).unwrap();

        assert_eq!(report.passwords.len(), 1);
        assert!(!report.copied);
        assert!(report.clipboard_error.unwrap().contains("permission denied"));
    }

    #[test]
    fn test_json_lines() {
        let report = GenerationReport {
            passwords: vec![
                GeneratedPassword { password: "abcdefgh".to_string(), strength: StrengthLabel::Weak },
                GeneratedPassword { password: "aB3!dE5@fG7#".to_string(), strength: StrengthLabel::Strong },
            ],
            copied: true,
            clipboard_error: None,
        };
        let lines = render_json(&report);
        assert_eq!(lines.len(), 2);

        let first: Value = serde_json::from_str(&lines[0]).unwrap();
        assert_eq!(first["success"], true);
        assert_eq!(first["password"], "abcdefgh");
        assert_eq!(first["strength"], "Weak");
        assert!(first.get("copied").is_none());

        let second: Value = serde_json::from_str(&lines[1]).unwrap();
        assert_eq!(second["strength"], "Strong");
        assert_eq!(second["copied"], true);
    }

    #[test]
    fn test_text_lines_mention_clipboard_error() {
        let report = GenerationReport {
            passwords: vec![GeneratedPassword {
                password: "aB3!dE5@fG7#".to_string(),
                strength: StrengthLabel::Strong,
            }],
            copied: false,
            clipboard_error: Some("Failed to access clipboard: no display".to_string()),
        };
        let lines = render_text(&report);

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("aB3!dE5@fG7#"));
        assert!(lines[0].contains("Strong"));
        assert!(lines[1].contains("no display"));
    }
}
