//! End-to-end flows through the app controller on a virtual clock.

mod common;

use common::*;
use std::time::{Duration, Instant};
use typeslides::app::{App, Control};
use typeslides::config::Config;
use typeslides::quiz::OptionMark;
use typeslides::reveal::{FixedJitter, JitterSource, RandomJitter, RevealStage};

// Challenge panels of the cold-war deck.
const INPUT: usize = 3;
const EDITOR: usize = 4;

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

// -- Draft -------------------------------------------------------------------

#[test]
fn draft_fills_editor_after_delay() {
    let (mut app, mut now) = make_app("cold-war");
    jump_to(&mut app, INPUT);
    assert_eq!(app.focused_control(), Some(Control::PointInput));
    type_text(&mut app, "Build more missiles");
    assert!(app.prompt_enabled());

    app.press(Control::GeneratePrompt);
    assert_eq!(app.prompt_label(), "Generating...");
    assert_eq!(app.reveal().stage, RevealStage::Drafting);

    advance(&mut app, &mut now, ms(784));
    assert!(app.prompt_editor().is_empty());

    advance(&mut app, &mut now, ms(16));
    assert_eq!(
        app.prompt_editor().value(),
        "Draft a short Cold War strategy memo for President Kennedy, early 1960s, \
         addressing how the United States should compete with the Soviet Union. \
         The core of the strategy must be: \"Build more missiles\"."
    );
    assert_eq!(app.prompt_label(), "OK ↵");
    assert_eq!(app.reveal().stage, RevealStage::DraftReady);

    run_until(&mut app, &mut now, ms(1000), |app| !app.viewport().is_animating());
    assert_eq!(app.focus_section(), EDITOR);
}

#[test]
fn enter_needs_more_than_five_chars() {
    let (mut app, _) = make_app("cold-war");
    jump_to(&mut app, INPUT);
    type_text(&mut app, "short");
    app.activate();
    assert_eq!(app.reveal().stage, RevealStage::Idle);
    assert_eq!(app.pending_tasks(), 0);

    type_text(&mut app, "!");
    app.activate();
    assert_eq!(app.reveal().stage, RevealStage::Drafting);
    assert_eq!(app.pending_tasks(), 1);
}

#[test]
fn shift_enter_adds_newline_instead_of_submitting() {
    let (mut app, _) = make_app("cold-war");
    jump_to(&mut app, INPUT);
    type_text(&mut app, "first line");
    app.insert_newline();
    type_text(&mut app, "second");
    assert_eq!(app.point_input().value(), "first line\nsecond");
    assert_eq!(app.reveal().stage, RevealStage::Idle);
}

// -- Speech, evaluation and score -------------------------------------------

fn start_speech(id: &str) -> (App, Instant) {
    start_speech_with(id, FixedJitter(Duration::ZERO))
}

fn start_speech_with(id: &str, jitter: impl JitterSource + 'static) -> (App, Instant) {
    let (mut app, mut now) = make_app_with(id, jitter);
    let layout = app.challenge_layout().expect("interactive deck");
    jump_to(&mut app, layout.input);
    type_text(&mut app, "Build more missiles");
    app.press(Control::GeneratePrompt);
    run_until(&mut app, &mut now, ms(2000), |app| {
        app.reveal().has_draft && !app.viewport().is_animating()
    });
    app.press(Control::GenerateSpeech);
    (app, now)
}

#[test]
fn speech_streams_one_char_per_tick() {
    let (mut app, mut now) = start_speech("cold-war");
    assert_eq!(app.speech_label(), "Processing...");
    assert!(!app.speech_enabled());
    assert_eq!(app.reveal().stage, RevealStage::PreparingSpeech);

    advance(&mut app, &mut now, ms(496));
    assert!(app.reveal().speech.revealed().is_empty());

    // Start delay elapses inside this frame; the first character lands on it.
    advance(&mut app, &mut now, ms(4));
    assert_eq!(app.reveal().speech.revealed().chars().count(), 1);

    advance(&mut app, &mut now, ms(40));
    assert_eq!(app.reveal().speech.revealed().chars().count(), 3);
}

#[test]
fn full_sequence_ends_with_exact_score() {
    let (mut app, mut now) = start_speech("cold-war");
    let challenge = app.deck().challenge.clone().expect("challenge");

    run_until(&mut app, &mut now, ms(120_000), |app| {
        app.reveal().stage == RevealStage::Done
    });

    let reveal = app.reveal();
    assert_eq!(reveal.speech.revealed(), challenge.response);
    assert!(reveal.evaluation_visible);
    assert_eq!(reveal.evaluation.revealed(), challenge.evaluation);
    assert_eq!(reveal.score_label(), "8");
    assert!((reveal.ring_fill() - 80.0).abs() < 1e-9);
    assert_eq!(app.pending_tasks(), 0);
    assert_eq!(app.speech_label(), "Processing...");
}

/// Ticks one millisecond at a time until the sequence is done and returns
/// the instants at which each speech and evaluation character appeared.
fn record_char_times(app: &mut App, now: &mut Instant) -> (Vec<Instant>, Vec<Instant>) {
    let mut speech = Vec::new();
    let mut evaluation = Vec::new();
    let deadline = *now + ms(300_000);
    while app.reveal().stage != RevealStage::Done {
        assert!(*now < deadline, "sequence did not finish");
        *now += ms(1);
        app.on_tick(*now);

        let typed = app.reveal().speech.revealed().chars().count();
        assert!(typed <= speech.len() + 1, "two speech characters in one millisecond");
        if typed > speech.len() {
            speech.push(*now);
        }
        let typed = app.reveal().evaluation.revealed().chars().count();
        assert!(typed <= evaluation.len() + 1, "two evaluation characters in one millisecond");
        if typed > evaluation.len() {
            evaluation.push(*now);
        }
    }
    (speech, evaluation)
}

fn gaps(times: &[Instant]) -> Vec<Duration> {
    times.windows(2).map(|pair| pair[1] - pair[0]).collect()
}

#[test]
fn jitter_near_bound_keeps_text_and_pacing() {
    let timing = Config::default().timing;
    let (mut app, mut now) = start_speech_with("cold-war", FixedJitter(ms(19)));
    let challenge = app.deck().challenge.clone().expect("challenge");

    let (speech, evaluation) = record_char_times(&mut app, &mut now);

    assert_eq!(app.reveal().speech.revealed(), challenge.response);
    assert_eq!(app.reveal().evaluation.revealed(), challenge.evaluation);
    assert_eq!(speech.len(), challenge.response.chars().count());
    assert_eq!(evaluation.len(), challenge.evaluation.chars().count());

    let speech_range = timing.speech_char()..timing.speech_char() + timing.jitter();
    for gap in gaps(&speech) {
        assert_eq!(gap, timing.speech_char() + ms(19));
        assert!(speech_range.contains(&gap), "speech gap {gap:?}");
    }
    let eval_range = timing.eval_char()..timing.eval_char() + timing.jitter();
    for gap in gaps(&evaluation) {
        assert_eq!(gap, timing.eval_char() + ms(19));
        assert!(eval_range.contains(&gap), "evaluation gap {gap:?}");
    }
    assert_eq!(app.reveal().score_label(), "8");
}

#[test]
fn random_jitter_keeps_text_and_pacing() {
    let timing = Config::default().timing;
    let (mut app, mut now) = start_speech_with("statement", RandomJitter);
    let challenge = app.deck().challenge.clone().expect("challenge");

    let (speech, evaluation) = record_char_times(&mut app, &mut now);

    assert_eq!(app.reveal().speech.revealed(), challenge.response);
    assert_eq!(app.reveal().evaluation.revealed(), challenge.evaluation);
    assert_eq!(speech.len(), challenge.response.chars().count());
    assert_eq!(evaluation.len(), challenge.evaluation.chars().count());

    // Characters are observed on the millisecond grid, so a gap may round up
    // to the jitter bound itself.
    for gap in gaps(&speech) {
        assert!(gap >= timing.speech_char(), "speech gap {gap:?}");
        assert!(gap <= timing.speech_char() + timing.jitter(), "speech gap {gap:?}");
    }
    for gap in gaps(&evaluation) {
        assert!(gap >= timing.eval_char(), "evaluation gap {gap:?}");
        assert!(gap <= timing.eval_char() + timing.jitter(), "evaluation gap {gap:?}");
    }
    assert_eq!(app.pending_tasks(), 0);
}

#[test]
fn result_section_is_scrolled_into_view() {
    let (mut app, mut now) = start_speech("statement");
    let result = app.challenge_layout().expect("interactive deck").result;
    run_until(&mut app, &mut now, ms(1000), |app| !app.viewport().is_animating());
    assert_eq!(app.focus_section(), result);
    assert_eq!(app.controls_of(result), vec![Control::TryAgain, Control::Done]);
}

#[test]
fn evaluation_waits_for_pause_after_speech() {
    let (mut app, mut now) = start_speech("negotiation");
    run_until(&mut app, &mut now, ms(120_000), |app| {
        app.reveal().stage == RevealStage::PausingBeforeEval
    });
    assert!(!app.reveal().evaluation_visible);
    advance(&mut app, &mut now, ms(400));
    assert!(!app.reveal().evaluation_visible);
    run_until(&mut app, &mut now, ms(200), |app| app.reveal().evaluation_visible);
}

#[test]
fn second_generate_press_is_ignored() {
    let (mut app, _) = start_speech("cold-war");
    let pending = app.pending_tasks();
    app.press(Control::GenerateSpeech);
    assert_eq!(app.pending_tasks(), pending);
    assert_eq!(app.reveal().stage, RevealStage::PreparingSpeech);
}

// -- Try again ---------------------------------------------------------------

#[test]
fn try_again_after_completion_resets_output() {
    let (mut app, mut now) = start_speech("cold-war");
    run_until(&mut app, &mut now, ms(120_000), |app| {
        app.reveal().stage == RevealStage::Done
    });
    run_until(&mut app, &mut now, ms(1000), |app| !app.viewport().is_animating());

    app.press(Control::TryAgain);
    let reveal = app.reveal();
    assert_eq!(reveal.stage, RevealStage::DraftReady);
    assert!(reveal.speech.revealed().is_empty());
    assert!(reveal.evaluation.revealed().is_empty());
    assert!(!reveal.evaluation_visible);
    assert_eq!(reveal.score_label(), "");
    assert_eq!(app.speech_label(), "Generate Strategy");
    assert!(app.speech_enabled());

    run_until(&mut app, &mut now, ms(1000), |app| !app.viewport().is_animating());
    assert_eq!(app.focus_section(), EDITOR);
    assert!(!app.prompt_editor().is_empty());
}

#[test]
fn try_again_mid_stream_leaves_no_stale_ticks() {
    let (mut app, mut now) = start_speech("cold-war");
    advance(&mut app, &mut now, ms(700));
    assert_eq!(app.reveal().stage, RevealStage::StreamingSpeech);
    assert!(!app.reveal().speech.revealed().is_empty());
    let generation = app.scheduler_generation();

    app.press(Control::TryAgain);
    assert_eq!(app.pending_tasks(), 0);
    assert_eq!(app.scheduler_generation(), generation + 1);

    advance(&mut app, &mut now, ms(5000));
    assert_eq!(app.reveal().stage, RevealStage::DraftReady);
    assert!(app.reveal().speech.revealed().is_empty());
    assert_eq!(app.pending_tasks(), 0);
}

#[test]
fn run_can_be_repeated_after_reset() {
    let (mut app, mut now) = start_speech("statement");
    advance(&mut app, &mut now, ms(600));
    app.press(Control::TryAgain);

    app.press(Control::GenerateSpeech);
    let challenge = app.deck().challenge.clone().expect("challenge");
    run_until(&mut app, &mut now, ms(120_000), |app| {
        app.reveal().stage == RevealStage::Done
    });
    assert_eq!(app.reveal().speech.revealed(), challenge.response);
    assert_eq!(app.reveal().score_label(), "7");
}

// -- Quiz ----------------------------------------------------------------------

#[test]
fn wrong_answer_highlights_correct_option() {
    let (mut app, _) = make_app("cold-war");
    jump_to(&mut app, 1);

    app.press(Control::Option(0));
    let (group, answer) = app.quiz(1).expect("quiz section");
    assert_eq!(
        answer.marks(group),
        vec![OptionMark::Wrong, OptionMark::Correct, OptionMark::Unmarked]
    );

    app.press(Control::Option(1));
    let (group, answer) = app.quiz(1).expect("quiz section");
    assert_eq!(
        answer.marks(group),
        vec![OptionMark::Unmarked, OptionMark::Correct, OptionMark::Unmarked]
    );
}

#[test]
fn marks_never_stack_across_reselection() {
    let (mut app, _) = make_app("statement");
    let quiz = app
        .deck()
        .sections
        .iter()
        .position(|s| matches!(s.kind, typeslides::deck::SectionKind::Quiz { .. }))
        .expect("quiz section");
    jump_to(&mut app, quiz);
    let options = app.quiz(quiz).expect("quiz").0.len();

    for round in 0..3 {
        for option in 0..options {
            app.press(Control::Option((option + round) % options));
            let (group, answer) = app.quiz(quiz).expect("quiz");
            let marks = answer.marks(group);
            let wrong = marks.iter().filter(|m| **m == OptionMark::Wrong).count();
            let correct = marks.iter().filter(|m| **m == OptionMark::Correct).count();
            assert!(wrong <= 1);
            assert_eq!(correct, 1);
        }
    }
}

#[test]
fn answered_quiz_promotes_skip_to_continue() {
    let (mut app, _) = make_app("cold-war");
    jump_to(&mut app, 1);
    assert_eq!(app.skip_label(1), "Skip");
    app.press(Control::Option(2));
    assert_eq!(app.skip_label(1), "Continue");
}

#[test]
fn skip_without_promotion_stays_skip() {
    let (mut app, _) = make_app("statement");
    let quiz = 2;
    jump_to(&mut app, quiz);
    app.press(Control::Option(0));
    assert_eq!(app.skip_label(quiz), "Skip");
}

#[test]
fn skip_moves_on_without_answering() {
    let (mut app, mut now) = make_app("cold-war");
    jump_to(&mut app, 1);
    app.press(Control::Skip);
    run_until(&mut app, &mut now, ms(1000), |app| !app.viewport().is_animating());
    assert_eq!(app.focus_section(), 2);
    assert!(!app.quiz(1).expect("quiz").1.is_answered());
}

// -- Navigation and progress ---------------------------------------------------

#[test]
fn progress_follows_entered_sections() {
    let (mut app, _) = make_app("cold-war");
    let percent = app.progress().expect("progress bar").percent();
    assert!((percent - 100.0 / 6.0).abs() < 1e-9);

    jump_to(&mut app, 5);
    assert_eq!(app.progress().expect("progress bar").percent(), 100.0);
    assert!(app.is_section_active(5));
    assert!(!app.is_section_active(0));
}

#[test]
fn back_at_first_section_is_noop() {
    let (mut app, mut now) = make_app("cold-war");
    jump_to(&mut app, 1);
    app.press(Control::Back);
    run_until(&mut app, &mut now, ms(1000), |app| !app.viewport().is_animating());
    assert_eq!(app.focus_section(), 0);

    app.press(Control::Back);
    assert!(!app.viewport().is_animating());
    assert_eq!(app.viewport().offset(), 0);
}

#[test]
fn smooth_scroll_lands_exactly_on_section() {
    let (mut app, mut now) = make_app("statement");
    app.press(Control::Next);
    assert!(app.viewport().is_animating());
    run_until(&mut app, &mut now, ms(1000), |app| !app.viewport().is_animating());
    assert_eq!(app.viewport().offset(), app.viewport().section_top(1));
}

// -- Fade deck -------------------------------------------------------------------

#[test]
fn fade_deck_switches_theme_and_reveals_once() {
    use typeslides::deck::Theme;
    use typeslides::effects::FadeLevel;

    let (mut app, mut now) = make_app("fade-tour");
    assert!(app.progress().is_none());
    assert_eq!(app.theme(), Theme::Light);
    assert_eq!(app.fade_level(1, 0), FadeLevel::Hidden);
    assert!(app.controls_of(0).is_empty());

    jump_to(&mut app, 1);
    assert_eq!(app.theme(), Theme::Dark);
    assert_eq!(app.fade_level(1, 0), FadeLevel::Rising);
    advance(&mut app, &mut now, ms(700));
    assert_eq!(app.fade_level(1, 0), FadeLevel::Visible);

    jump_to(&mut app, 3);
    jump_to(&mut app, 0);
    assert_eq!(app.theme(), Theme::Light);
    assert_eq!(app.fade_level(1, 0), FadeLevel::Visible);
}

// -- Pointer -------------------------------------------------------------------

#[test]
fn click_on_option_answers_quiz() {
    let (mut app, _) = make_app("cold-war");
    jump_to(&mut app, 1);

    app.click(1, Control::Option(2));
    assert_eq!(app.focused_control(), Some(Control::Option(2)));
    let (group, answer) = app.quiz(1).expect("quiz section");
    assert_eq!(
        answer.marks(group),
        vec![OptionMark::Unmarked, OptionMark::Correct, OptionMark::Wrong]
    );
}

#[test]
fn click_on_button_of_partly_visible_section_acts_from_that_section() {
    let (mut app, mut now) = make_app("cold-war");
    app.scroll_rows(4);
    assert_eq!(app.focus_section(), 0);

    // Skip of the quiz in section 1 leads to section 2.
    app.click(1, Control::Skip);
    run_until(&mut app, &mut now, ms(1000), |app| !app.viewport().is_animating());
    assert_eq!(app.focus_section(), 2);
}

#[test]
fn click_on_field_of_other_section_scrolls_it_in_and_focuses_it() {
    let (mut app, mut now) = make_app("cold-war");
    jump_to(&mut app, INPUT - 1);

    app.click(INPUT, Control::PointInput);
    assert_eq!(app.reveal().stage, RevealStage::Idle);
    run_until(&mut app, &mut now, ms(1000), |app| !app.viewport().is_animating());
    assert_eq!(app.focus_section(), INPUT);
    assert_eq!(app.focused_control(), Some(Control::PointInput));
    assert!(app.type_char('x'));
}

#[test]
fn click_on_unknown_control_is_ignored() {
    let (mut app, _) = make_app("cold-war");
    app.click(0, Control::TryAgain);
    assert_eq!(app.focused_control(), Some(Control::Next));
    assert!(!app.viewport().is_animating());
}
