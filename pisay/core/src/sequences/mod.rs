//! Subcommand Scripts
//!
//! Each subcommand compiles to a [`Sequence`]. The scripts mirror what a user
//! sees, step for step:
//!
//! | Subcommand      | Script                                                       |
//! |-----------------|--------------------------------------------------------------|
//! | `confirm`       | confirm dialog, judged bubble                                |
//! | `select`        | five fighters, judged bubble                                 |
//! | `input`         | recitation input, tiered bubble                              |
//! | `editor-dialog` | poem editor, critique bubble                                 |
//! | `notify`        | info, 600 ms, warning, 600 ms, error, summary bubble         |
//! | `status`        | five statuses 1.5 s apart, 2 s, cleared                      |
//! | `editor`        | editor prefill, bubble                                       |
//! | `widget`        | above and below widgets, bubble, 10 s, cleared, notification |
//! | `widget-clear`  | both widgets cleared, bubble                                 |
//! | `title`         | title claimed, bubble                                        |
//! | `title-reset`   | configured default title, bubble                             |
//! | `help`          | bubble                                                       |
//! | `roast`         | random roast bubble                                          |

mod judge;
pub(crate) mod lines;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::command::Subcommand;
use crate::config::PisayConfig;
use crate::messages::NotifyLevel;
use crate::sequence::{Sequence, SequenceStep};
use crate::ui::WidgetPlacement;

pub use judge::RecitationTier;

const NOTIFY_GAP_MS: u64 = 600;
const STATUS_STEP_MS: u64 = 1500;
const STATUS_LINGER_MS: u64 = 2000;
const WIDGET_LIFETIME_MS: u64 = 10_000;

/// What to say instead when the host has no UI
///
/// `None` for subcommands that never touch the UI.
#[must_use]
pub fn no_ui_line(sub: Subcommand) -> Option<&'static str> {
    let line = match sub {
        Subcommand::Confirm => lines::NO_UI_CONFIRM,
        Subcommand::Select => lines::NO_UI_SELECT,
        Subcommand::Input => lines::NO_UI_INPUT,
        Subcommand::EditorDialog => lines::NO_UI_EDITOR_DIALOG,
        Subcommand::Notify => lines::NO_UI_NOTIFY,
        Subcommand::Status => lines::NO_UI_STATUS,
        Subcommand::Editor => lines::NO_UI_EDITOR,
        Subcommand::Widget => lines::NO_UI_WIDGET,
        Subcommand::WidgetClear => lines::NO_UI_WIDGET_CLEAR,
        Subcommand::Title => lines::NO_UI_TITLE,
        Subcommand::TitleReset => lines::NO_UI_TITLE_RESET,
        Subcommand::Help | Subcommand::Roast => return None,
    };
    Some(line)
}

/// Build the script for a subcommand
#[must_use]
pub fn script(sub: Subcommand, config: &PisayConfig) -> Sequence {
    script_with_rng(sub, config, &mut rand::thread_rng())
}

/// Build the script for a subcommand, drawing roasts from `rng`
pub fn script_with_rng<R: Rng + ?Sized>(
    sub: Subcommand,
    config: &PisayConfig,
    rng: &mut R,
) -> Sequence {
    let steps = match sub {
        Subcommand::Confirm => vec![SequenceStep::ShowConfirm {
            title: lines::CONFIRM_TITLE.into(),
            question: lines::CONFIRM_QUESTION.into(),
            rules: judge::confirm_rules(),
        }],
        Subcommand::Select => vec![SequenceStep::ShowSelect {
            title: lines::SELECT_TITLE.into(),
            options: lines::SELECT_OPTIONS.iter().map(|s| (*s).to_string()).collect(),
            rules: judge::fighter_rules(),
        }],
        Subcommand::Input => vec![SequenceStep::ShowInput {
            title: lines::INPUT_TITLE.into(),
            placeholder: lines::INPUT_PLACEHOLDER.into(),
            rules: judge::recitation_rules(),
        }],
        Subcommand::EditorDialog => vec![SequenceStep::ShowEditor {
            title: lines::POEM_TITLE.into(),
            template: lines::POEM_TEMPLATE.into(),
            rules: judge::poem_rules(),
        }],
        Subcommand::Notify => vec![
            SequenceStep::notify(lines::NOTIFY_INFO, NotifyLevel::Info),
            SequenceStep::wait_ms(NOTIFY_GAP_MS),
            SequenceStep::notify(lines::NOTIFY_WARNING, NotifyLevel::Warning),
            SequenceStep::wait_ms(NOTIFY_GAP_MS),
            SequenceStep::notify(lines::NOTIFY_ERROR, NotifyLevel::Error),
            SequenceStep::say(lines::NOTIFY_SUMMARY),
        ],
        Subcommand::Status => status_steps(),
        Subcommand::Editor => vec![
            SequenceStep::SetEditorText {
                text: lines::EDITOR_DECLARATION.into(),
            },
            SequenceStep::say(lines::EDITOR_ANNOUNCE),
        ],
        Subcommand::Widget => vec![
            SequenceStep::widget(
                lines::WIDGET_ABOVE_KEY,
                Some(&lines::WIDGET_ABOVE[..]),
                WidgetPlacement::AboveEditor,
            ),
            SequenceStep::widget(
                lines::WIDGET_BELOW_KEY,
                Some(&lines::WIDGET_BELOW[..]),
                WidgetPlacement::BelowEditor,
            ),
            SequenceStep::say(lines::WIDGET_ANNOUNCE),
            SequenceStep::wait_ms(WIDGET_LIFETIME_MS),
            SequenceStep::widget(lines::WIDGET_ABOVE_KEY, None, WidgetPlacement::AboveEditor),
            SequenceStep::widget(lines::WIDGET_BELOW_KEY, None, WidgetPlacement::BelowEditor),
            SequenceStep::notify(lines::WIDGET_EXPIRED, NotifyLevel::Info),
        ],
        Subcommand::WidgetClear => vec![
            SequenceStep::widget(lines::WIDGET_ABOVE_KEY, None, WidgetPlacement::AboveEditor),
            SequenceStep::widget(lines::WIDGET_BELOW_KEY, None, WidgetPlacement::BelowEditor),
            SequenceStep::say(lines::WIDGET_CLEARED),
        ],
        Subcommand::Title => vec![
            SequenceStep::SetTitle {
                text: lines::TITLE_CLAIMED.into(),
            },
            SequenceStep::say(lines::TITLE_ANNOUNCE),
        ],
        Subcommand::TitleReset => vec![
            SequenceStep::SetTitle {
                text: config.default_title.clone(),
            },
            SequenceStep::say(lines::TITLE_RESTORED),
        ],
        Subcommand::Help => vec![SequenceStep::say(lines::HELP)],
        Subcommand::Roast => {
            let roast = lines::ROASTS.choose(rng).copied().unwrap_or(lines::ROASTS[0]);
            vec![SequenceStep::say(lines::roast(roast))]
        }
    };

    Sequence::new(sub.name(), steps)
}

fn status_steps() -> Vec<SequenceStep> {
    let mut steps = vec![
        SequenceStep::status(lines::STATUS_KEY, Some(lines::STATUS_WATCHING)),
        SequenceStep::say(lines::STATUS_ANNOUNCE),
    ];
    for text in lines::STATUS_PROGRESSION {
        steps.push(SequenceStep::wait_ms(STATUS_STEP_MS));
        steps.push(SequenceStep::status(lines::STATUS_KEY, Some(text)));
    }
    steps.push(SequenceStep::wait_ms(STATUS_LINGER_MS));
    steps.push(SequenceStep::status(lines::STATUS_KEY, None));
    steps
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::time::Duration;

    #[test]
    fn test_every_ui_subcommand_has_fallback() {
        for sub in Subcommand::ALL {
            assert_eq!(no_ui_line(sub).is_some(), sub.requires_ui(), "{sub}");
        }
    }

    #[test]
    fn test_ui_free_scripts() {
        let config = PisayConfig::default();
        assert!(!script(Subcommand::Help, &config).needs_ui());
        assert!(!script(Subcommand::Roast, &config).needs_ui());
        assert!(script(Subcommand::Widget, &config).needs_ui());
    }

    #[test]
    fn test_scripted_durations() {
        let config = PisayConfig::default();
        assert_eq!(
            script(Subcommand::Notify, &config).scripted_duration(),
            Duration::from_millis(1200)
        );
        assert_eq!(
            script(Subcommand::Status, &config).scripted_duration(),
            Duration::from_millis(8000)
        );
        assert_eq!(
            script(Subcommand::Widget, &config).scripted_duration(),
            Duration::from_secs(10)
        );
    }

    #[test]
    fn test_status_script_ends_cleared() {
        let steps = status_steps();
        assert!(matches!(
            steps.last(),
            Some(SequenceStep::SetStatus { text: None, .. })
        ));
        let sets = steps
            .iter()
            .filter(|s| matches!(s, SequenceStep::SetStatus { text: Some(_), .. }))
            .count();
        assert_eq!(sets, 5);
    }

    #[test]
    fn test_title_reset_uses_configured_title() {
        let mut config = PisayConfig::default();
        config.default_title = "my shell".to_string();
        let sequence = script(Subcommand::TitleReset, &config);
        assert!(matches!(
            &sequence.steps[0],
            SequenceStep::SetTitle { text } if text == "my shell"
        ));
    }

    #[test]
    fn test_roast_is_wrapped_in_pie() {
        let mut rng = StdRng::seed_from_u64(7);
        let sequence = script_with_rng(Subcommand::Roast, &PisayConfig::default(), &mut rng);
        let SequenceStep::Say { text } = &sequence.steps[0] else {
            panic!("roast should say something");
        };
        assert!(text.starts_with("🥧 ") && text.ends_with(" 🥧"));
        let inner = &text["🥧 ".len()..text.len() - " 🥧".len()];
        assert!(lines::ROASTS.contains(&inner));
    }
}
