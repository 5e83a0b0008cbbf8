//! Presentation controller: owns every piece of state and drives the
//! scheduled reveal from the UI tick.

mod controls;
mod field;

pub use controls::{controls_for, Control};
pub use field::TextField;

use std::time::Instant;

use tracing::{debug, info, warn};

use crate::config::{Config, TimingConfig};
use crate::deck::{ChallengeLayout, Deck, DeckError, SectionKind, Theme};
use crate::effects::{FadeLevel, FadeTracker, ThemeTracker};
use crate::quiz::{QuizAnswer, QuizGroup, QuizIntent, QuizReducer};
use crate::reveal::draft::{can_draft, render_draft};
use crate::reveal::{
    CharPacing, JitterSource, RandomJitter, RevealIntent, RevealReducer, RevealScript, RevealStage,
    RevealState, Scheduler,
};
use crate::scroll::{sibling, Direction, ProgressBar, ProgressTracker, Viewport};
use crate::ui::mvi::Reducer;

/// Section height used until the first resize reports the real body size.
pub const DEFAULT_SECTION_HEIGHT: u16 = 20;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Timed steps of the reveal sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
enum RevealTask {
    CompleteDraft { point: String },
    StartSpeech,
    TypeSpeech,
    RevealEvaluation,
    TypeEvaluation,
    ScoreFrame,
}

#[derive(Debug, Clone)]
struct QuizSlot {
    group: QuizGroup,
    answer: QuizAnswer,
}

pub struct App {
    deck: Deck,
    timing: TimingConfig,
    now: Instant,
    should_quit: bool,
    viewport: Viewport,
    /// Interactive decks only.
    progress: Option<ProgressTracker>,
    /// Fade decks only.
    theme_tracker: Option<ThemeTracker>,
    fade: FadeTracker,
    /// Indexed by section; `None` for non-quiz sections.
    quizzes: Vec<Option<QuizSlot>>,
    layout: Option<ChallengeLayout>,
    point_input: TextField,
    prompt_editor: TextField,
    /// Reveal sequence state (MVI pattern).
    reveal: RevealState,
    draft_pending: bool,
    scheduler: Scheduler<RevealTask>,
    jitter: Box<dyn JitterSource>,
    focus_section: usize,
    focus: usize,
}

impl App {
    pub fn new(deck: Deck, config: &Config, now: Instant) -> Result<Self, DeckError> {
        deck.validate()?;
        let layout = deck.challenge_layout()?;

        let mut quizzes = Vec::with_capacity(deck.sections.len());
        for section in &deck.sections {
            let slot = match &section.kind {
                SectionKind::Quiz { options, .. } => {
                    let group = QuizGroup::new(options.clone()).map_err(|source| {
                        DeckError::QuizCorrectCount {
                            section: section.id.clone(),
                            source,
                        }
                    })?;
                    Some(QuizSlot {
                        group,
                        answer: QuizAnswer::default(),
                    })
                }
                _ => None,
            };
            quizzes.push(slot);
        }

        let count = deck.sections.len();
        let interactive = deck.is_interactive();
        let progress = interactive.then(|| ProgressTracker::new(count, config.ui.show_progress));
        let theme_tracker = (!interactive)
            .then(|| ThemeTracker::new(deck.sections.iter().map(|s| s.theme).collect()));
        let fade = FadeTracker::new(deck.sections.iter().map(|s| s.fade.len()).collect());

        info!(deck = %deck.id, sections = count, "deck loaded");

        let mut app = Self {
            timing: config.timing.clone(),
            now,
            should_quit: false,
            viewport: Viewport::new(count, DEFAULT_SECTION_HEIGHT),
            progress,
            theme_tracker,
            fade,
            quizzes,
            layout,
            point_input: TextField::default(),
            prompt_editor: TextField::default(),
            reveal: RevealState::default(),
            draft_pending: false,
            scheduler: Scheduler::new(),
            jitter: Box::new(RandomJitter),
            focus_section: 0,
            focus: 0,
            deck,
        };
        app.refresh_visibility();
        Ok(app)
    }

    /// Replaces the random per-character jitter.
    pub fn with_jitter(mut self, jitter: impl JitterSource + 'static) -> Self {
        self.jitter = Box::new(jitter);
        self
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// Advances the clock: runs due tasks, then the scroll animation.
    pub fn on_tick(&mut self, now: Instant) {
        self.now = now;
        while let Some((due, task)) = self.scheduler.pop_due(now) {
            self.run_task(task, due);
        }
        self.viewport.advance(now);
        self.refresh_visibility();
    }

    /// New body height; every section takes the full body.
    pub fn on_resize(&mut self, body_height: u16) {
        self.viewport.resize(body_height);
        self.refresh_visibility();
    }

    // Accessors

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn now(&self) -> Instant {
        self.now
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn reveal(&self) -> &RevealState {
        &self.reveal
    }

    pub fn point_input(&self) -> &TextField {
        &self.point_input
    }

    pub fn prompt_editor(&self) -> &TextField {
        &self.prompt_editor
    }

    pub fn challenge_layout(&self) -> Option<ChallengeLayout> {
        self.layout
    }

    pub fn theme(&self) -> Theme {
        self.theme_tracker
            .as_ref()
            .map(ThemeTracker::current)
            .unwrap_or(self.deck.theme)
    }

    pub fn progress(&self) -> Option<&ProgressBar> {
        self.progress.as_ref().and_then(ProgressTracker::bar)
    }

    pub fn is_section_active(&self, index: usize) -> bool {
        self.progress
            .as_ref()
            .is_some_and(|progress| progress.is_active(index))
    }

    pub fn quiz(&self, section: usize) -> Option<(&QuizGroup, &QuizAnswer)> {
        self.quizzes
            .get(section)
            .and_then(Option::as_ref)
            .map(|slot| (&slot.group, &slot.answer))
    }

    pub fn fade_level(&self, section: usize, slot: usize) -> FadeLevel {
        self.fade.level(section, slot, self.now, self.timing.fade())
    }

    /// Number of scheduled reveal steps.
    pub fn pending_tasks(&self) -> usize {
        self.scheduler.len()
    }

    pub fn scheduler_generation(&self) -> u64 {
        self.scheduler.generation()
    }

    /// Something moves on its own; the UI keeps redrawing every tick.
    pub fn is_animating(&self) -> bool {
        !self.scheduler.is_empty() || self.viewport.is_animating()
    }

    // Controls

    pub fn focus_section(&self) -> usize {
        self.focus_section
    }

    pub fn controls_of(&self, section: usize) -> Vec<Control> {
        self.deck
            .sections
            .get(section)
            .map(|spec| controls_for(spec, section, self.deck.variant))
            .unwrap_or_default()
    }

    pub fn focused_control(&self) -> Option<Control> {
        self.controls_of(self.focus_section).get(self.focus).copied()
    }

    pub fn focus_next(&mut self) {
        let count = self.controls_of(self.focus_section).len();
        if count > 0 {
            self.focus = (self.focus + 1) % count;
        }
    }

    pub fn focus_prev(&mut self) {
        let count = self.controls_of(self.focus_section).len();
        if count > 0 {
            self.focus = (self.focus + count - 1) % count;
        }
    }

    /// Enter on the focused control.
    pub fn activate(&mut self) {
        match self.focused_control() {
            Some(Control::PointInput) => {
                if self.prompt_enabled() {
                    self.generate_prompt();
                }
            }
            Some(Control::PromptEditor) => self.insert_newline(),
            Some(control) => self.press(control),
            None => {}
        }
    }

    /// Activates `control` as a control of the focused section.
    pub fn press(&mut self, control: Control) {
        self.press_in(self.focus_section, control);
    }

    /// Pointer click on `control` of `section`. Buttons and options act at
    /// once; a text field takes focus, scrolling its section in first when
    /// another section holds focus (fields come first in their section).
    pub fn click(&mut self, section: usize, control: Control) {
        let Some(position) = self.controls_of(section).iter().position(|c| *c == control) else {
            warn!(section, ?control, "click outside any control");
            return;
        };
        if section == self.focus_section {
            self.focus = position;
        } else if control.is_text_field() {
            self.scroll_to(section);
            return;
        }
        self.press_in(section, control);
    }

    fn press_in(&mut self, section: usize, control: Control) {
        match control {
            Control::Option(option) => self.select_option(section, option),
            Control::Next | Control::Skip => self.navigate(section, Direction::Next),
            Control::Back => self.navigate(section, Direction::Previous),
            Control::PointInput | Control::PromptEditor => {}
            Control::GeneratePrompt => self.generate_prompt(),
            Control::GenerateSpeech => self.generate_speech(),
            Control::TryAgain => self.try_again(),
            Control::Done => info!(deck = %self.deck.id, "presentation done"),
        }
    }

    /// Types into the focused text field. Returns false when no field has focus.
    pub fn type_char(&mut self, ch: char) -> bool {
        match self.focused_control() {
            Some(Control::PointInput) => self.point_input.insert(ch),
            Some(Control::PromptEditor) => self.prompt_editor.insert(ch),
            _ => return false,
        }
        true
    }

    pub fn backspace(&mut self) {
        match self.focused_control() {
            Some(Control::PointInput) => self.point_input.backspace(),
            Some(Control::PromptEditor) => self.prompt_editor.backspace(),
            _ => {}
        }
    }

    pub fn insert_newline(&mut self) {
        self.type_char('\n');
    }

    /// Free scroll. Cancels a running smooth scroll.
    pub fn scroll_rows(&mut self, rows: i32) {
        self.viewport.scroll_by(rows);
        self.refresh_visibility();
    }

    pub fn scroll_page(&mut self, direction: Direction) {
        let page = i32::from(self.viewport.section_height());
        match direction {
            Direction::Next => self.scroll_rows(page),
            Direction::Previous => self.scroll_rows(-page),
        }
    }

    // Labels and gating

    pub fn prompt_enabled(&self) -> bool {
        self.layout.is_some() && !self.draft_pending && can_draft(self.point_input.value())
    }

    pub fn prompt_label(&self) -> &'static str {
        if self.draft_pending {
            "Generating..."
        } else if self.reveal.has_draft {
            "OK ↵"
        } else {
            "Generate"
        }
    }

    pub fn speech_enabled(&self) -> bool {
        self.layout.is_some() && !self.reveal.stage.is_responding()
    }

    pub fn speech_label(&self) -> &str {
        if self.reveal.stage.is_responding() {
            return "Processing...";
        }
        self.deck
            .challenge
            .as_ref()
            .map(|challenge| challenge.speech_label.as_str())
            .unwrap_or("Generate")
    }

    /// "Skip" has turned into the primary "Continue".
    pub fn skip_promoted(&self, section: usize) -> bool {
        self.deck.promote_skip
            && self
                .quiz(section)
                .is_some_and(|(_, answer)| answer.is_answered())
    }

    pub fn skip_label(&self, section: usize) -> &'static str {
        if self.skip_promoted(section) {
            "Continue"
        } else {
            "Skip"
        }
    }

    // Internals

    fn refresh_visibility(&mut self) {
        if let Some(progress) = self.progress.as_mut() {
            progress.update(&self.viewport);
        }
        if let Some(theme) = self.theme_tracker.as_mut() {
            theme.update(&self.viewport);
        }
        self.fade.update(&self.viewport, self.now);

        let focused = self.viewport.focused_section();
        if focused != self.focus_section {
            self.focus_section = focused;
            self.focus = 0;
        }
    }

    fn navigate(&mut self, from: usize, direction: Direction) {
        match sibling(from, self.deck.sections.len(), direction) {
            Some(target) => self.scroll_to(target),
            None => debug!(from, ?direction, "no sibling section"),
        }
    }

    fn scroll_to(&mut self, index: usize) {
        debug!(section = index, "scrolling into view");
        self.viewport
            .scroll_into_view(index, self.now, self.timing.scroll());
        self.refresh_visibility();
    }

    fn select_option(&mut self, section: usize, option: usize) {
        let Some(slot) = self.quizzes.get_mut(section).and_then(Option::as_mut) else {
            warn!(section, "option selected outside a quiz");
            return;
        };
        if option >= slot.group.len() {
            warn!(section, option, "quiz option out of range");
            return;
        }
        let outcome = slot.group.outcome_of(option);
        slot.answer = QuizReducer::reduce(
            std::mem::take(&mut slot.answer),
            QuizIntent::Select { option, outcome },
        );
        info!(section, option, ?outcome, "quiz answered");
    }

    fn generate_prompt(&mut self) {
        if !self.prompt_enabled() {
            warn!("prompt generation is disabled");
            return;
        }
        self.draft_pending = true;
        self.dispatch_reveal(RevealIntent::BeginDraft);
        let point = self.point_input.value().to_string();
        self.scheduler.schedule_at(
            self.now + self.timing.draft_delay(),
            RevealTask::CompleteDraft { point },
        );
    }

    fn generate_speech(&mut self) {
        if !self.speech_enabled() {
            warn!(stage = ?self.reveal.stage, "speech generation is disabled");
            return;
        }
        let (Some(challenge), Some(layout)) = (self.deck.challenge.as_ref(), self.layout) else {
            return;
        };
        let script = RevealScript {
            response: challenge.response.clone(),
            evaluation: challenge.evaluation.clone(),
            score: challenge.score,
            score_duration: self.timing.score_duration(),
        };
        self.dispatch_reveal(RevealIntent::BeginSpeech { script });
        self.navigate(layout.editor, Direction::Next);
        self.scheduler.schedule_at(
            self.now + self.timing.speech_start_delay(),
            RevealTask::StartSpeech,
        );
    }

    fn try_again(&mut self) {
        let cancelled = self.scheduler.cancel_all();
        self.draft_pending = false;
        self.dispatch_reveal(RevealIntent::Reset);
        info!(cancelled, "reveal reset");
        if let Some(layout) = self.layout {
            self.scroll_to(layout.editor);
        }
    }

    /// Runs one scheduled step. Follow-ups are timed from `due`, not from the
    /// tick that found it, so coarse ticks keep the pacing.
    fn run_task(&mut self, task: RevealTask, due: Instant) {
        match task {
            RevealTask::CompleteDraft { point } => {
                self.draft_pending = false;
                if let Some(challenge) = &self.deck.challenge {
                    let draft = render_draft(&challenge.draft_template, &point);
                    self.prompt_editor.set(draft);
                }
                self.dispatch_reveal(RevealIntent::DraftReady);
                if let Some(layout) = self.layout {
                    self.navigate(layout.input, Direction::Next);
                }
            }
            RevealTask::StartSpeech => {
                self.dispatch_reveal(RevealIntent::StartSpeech);
                self.after_speech_step(due);
            }
            RevealTask::TypeSpeech => {
                self.dispatch_reveal(RevealIntent::TypeSpeech);
                self.after_speech_step(due);
            }
            RevealTask::RevealEvaluation => {
                self.dispatch_reveal(RevealIntent::RevealEvaluation { at: due });
                self.after_evaluation_step(due, true);
            }
            RevealTask::TypeEvaluation => {
                self.dispatch_reveal(RevealIntent::TypeEvaluation { at: due });
                self.after_evaluation_step(due, false);
            }
            RevealTask::ScoreFrame => {
                self.dispatch_reveal(RevealIntent::ScoreFrame { at: due });
                if self.reveal.stage == RevealStage::AnimatingScore {
                    self.scheduler
                        .schedule_at(due + self.timing.frame_interval(), RevealTask::ScoreFrame);
                }
            }
        }
    }

    fn after_speech_step(&mut self, due: Instant) {
        match self.reveal.stage {
            RevealStage::StreamingSpeech => {
                // The first character lands on the start deadline itself.
                let delay = if self.reveal.speech.is_started() {
                    CharPacing::new(self.timing.speech_char(), self.timing.jitter())
                        .next_delay(self.jitter.as_mut())
                } else {
                    Default::default()
                };
                self.scheduler.schedule_at(due + delay, RevealTask::TypeSpeech);
            }
            RevealStage::PausingBeforeEval => {
                self.scheduler
                    .schedule_at(due + self.timing.eval_pause(), RevealTask::RevealEvaluation);
            }
            _ => {}
        }
    }

    fn after_evaluation_step(&mut self, due: Instant, just_revealed: bool) {
        match self.reveal.stage {
            RevealStage::StreamingEval => {
                let delay = if just_revealed {
                    Default::default()
                } else {
                    CharPacing::new(self.timing.eval_char(), self.timing.jitter())
                        .next_delay(self.jitter.as_mut())
                };
                self.scheduler.schedule_at(due + delay, RevealTask::TypeEvaluation);
            }
            RevealStage::AnimatingScore => {
                self.scheduler
                    .schedule_at(due + self.timing.frame_interval(), RevealTask::ScoreFrame);
            }
            _ => {}
        }
    }

    fn dispatch_reveal(&mut self, intent: RevealIntent) {
        let before = self.reveal.stage;
        dispatch_mvi!(self, reveal, RevealReducer, intent);
        if self.reveal.stage != before {
            info!(from = ?before, to = ?self.reveal.stage, "reveal stage changed");
        }
    }
}
