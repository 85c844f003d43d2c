//! The puzzle standing between the card and the secret letter.
//!
//! ## Stages
//!
//! - Riddle: complete a lyric (hint after repeated misses)
//! - Heart sequence: click four hearts in the shown order
//! - Personal question: one chance only
//!
//! Game rules live in [`PuzzleGate`]; this module adds the pauses that let
//! feedback stay on screen.

use std::time::Duration;

use dioxus::prelude::*;
use serenade_core::puzzle::{
    HEART_COUNT, SEQUENCE_FEEDBACK_DELAY, STAGE_ADVANCE_DELAY, UNLOCK_CELEBRATION_DELAY,
};
use serenade_core::{ChoiceOutcome, HeartOutcome, PuzzleGate, PuzzleStage, RiddleOutcome};

/// Feedback line under the current stage.
#[derive(Clone, PartialEq)]
enum Feedback {
    Good(&'static str),
    Bad(String),
}

/// Signal that, once set, calls `on_solved` after `delay`.
///
/// The timer belongs to the calling component, so it keeps running when the
/// stage that set the signal unmounts.
fn use_celebration(delay: Duration, on_solved: EventHandler<()>) -> Signal<bool> {
    let solved = use_signal(|| false);
    use_effect(move || {
        if solved() {
            spawn(async move {
                tokio::time::sleep(delay).await;
                on_solved.call(());
            });
        }
    });
    solved
}

/// Puzzle card. Calls `on_solved` once, after the celebration.
#[component]
pub fn SecretPuzzle(on_solved: EventHandler<()>) -> Element {
    let mut solved = use_celebration(UNLOCK_CELEBRATION_DELAY, on_solved);
    let mut gate = use_signal(|| PuzzleGate::new(move || solved.set(true)));
    let feedback = use_signal(|| None::<Feedback>);
    // Hearts shown as clicked while a wrong attempt is on screen
    let mut shown_attempt = use_signal(|| None::<Vec<u8>>);
    let mut advancing = use_signal(|| false);

    let (stage, blocked, attempts) = {
        let gate = gate.read();
        (gate.stage(), gate.is_blocked(), gate.state().attempts)
    };

    let on_heart = move |heart: u8| {
        if advancing() || shown_attempt().is_some() {
            return;
        }
        let outcome = gate.write().click_heart(heart);
        match outcome {
            HeartOutcome::Mismatch { attempted } => {
                set_feedback(
                    feedback,
                    Feedback::Bad("Wrong order \u{1F494} Try again!".to_string()),
                );
                shown_attempt.set(Some(attempted));
                spawn(async move {
                    tokio::time::sleep(SEQUENCE_FEEDBACK_DELAY).await;
                    shown_attempt.set(None);
                });
            }
            HeartOutcome::Complete => {
                set_feedback(feedback, Feedback::Good("Second stage done! One last question..."));
                advancing.set(true);
                spawn(async move {
                    tokio::time::sleep(STAGE_ADVANCE_DELAY).await;
                    advancing.set(false);
                });
            }
            HeartOutcome::Progress { .. } | HeartOutcome::Ignored => {}
        }
    };

    let body = if blocked {
        rsx! {
            div { class: "puzzle-blocked",
                p { class: "puzzle-big", "\u{1F512}" }
                p { "That wasn't the answer. The secret letter stays locked for now..." }
            }
        }
    } else {
        match stage {
            PuzzleStage::Riddle => rsx! { RiddleStage { gate, feedback, attempts } },
            PuzzleStage::Sequence => rsx! {
                SequenceStage { gate, shown_attempt, on_heart }
            },
            PuzzleStage::Question if advancing() => rsx! {
                SequenceStage { gate, shown_attempt, on_heart }
            },
            PuzzleStage::Question => rsx! { QuestionStage { gate, feedback } },
            PuzzleStage::Unlocked => rsx! {
                div { class: "puzzle-unlocked",
                    p { class: "puzzle-big", "\u{1F496}" }
                    h3 { "Puzzle solved!" }
                    p { "You unlocked the secret letter..." }
                }
            },
        }
    };

    rsx! {
        div { class: "love-card puzzle",
            h2 { class: "puzzle-title", "\u{1F512} The Secret Letter" }
            p { class: "puzzle-subtitle", "Prove it's really you to open it" }
            StageProgress { stage }
            {body}
            if let Some(line) = feedback() {
                {
                    match line {
                        Feedback::Good(text) => rsx! { p { class: "puzzle-feedback good", "{text}" } },
                        Feedback::Bad(text) => rsx! { p { class: "puzzle-feedback bad", "{text}" } },
                    }
                }
            }
        }
    }
}

fn set_feedback(mut feedback: Signal<Option<Feedback>>, line: Feedback) {
    feedback.set(Some(line));
}

/// One dot per stage, the unlocked stage included
const PROGRESS_STEPS: u8 = PuzzleStage::Unlocked.number();

fn step_class(step: u8, current: u8) -> &'static str {
    match step.cmp(&current) {
        std::cmp::Ordering::Less => "puzzle-step done",
        std::cmp::Ordering::Equal => "puzzle-step current",
        std::cmp::Ordering::Greater => "puzzle-step",
    }
}

#[component]
fn StageProgress(stage: PuzzleStage) -> Element {
    let current = stage.number();
    rsx! {
        div { class: "puzzle-progress",
            for step in 1..=PROGRESS_STEPS {
                span { key: "{step}", class: step_class(step, current), "{step}" }
            }
        }
    }
}

#[component]
fn RiddleStage(
    gate: Signal<PuzzleGate>,
    feedback: Signal<Option<Feedback>>,
    attempts: u32,
) -> Element {
    let mut gate = gate;
    let mut answer = use_signal(String::new);
    let (question, hint) = {
        let gate = gate.read();
        (gate.riddle().question, gate.hint())
    };
    let mut show_hint = use_signal(|| false);

    let mut submit = move || {
        let input = answer();
        if input.trim().is_empty() {
            return;
        }
        let outcome = gate.write().submit_answer(&input);
        match outcome {
            RiddleOutcome::Correct => set_feedback(
                feedback,
                Feedback::Good("First stage done! \u{1F389} Now click the hearts in order..."),
            ),
            RiddleOutcome::Incorrect { hint_available, .. } => {
                let line = if hint_available {
                    "Wrong answer \u{1F494} Want a hint? Use the hint button!"
                } else {
                    "Wrong answer \u{1F494} Try again!"
                };
                set_feedback(feedback, Feedback::Bad(line.to_string()));
                answer.set(String::new());
            }
            RiddleOutcome::Ignored => {}
        }
    };

    rsx! {
        div { class: "puzzle-stage",
            h3 { class: "stage-title", "First clue: a lyric" }
            p { class: "stage-question", "{question}" }
            div { class: "manifest-input",
                input {
                    class: "input-field",
                    placeholder: "Your answer...",
                    value: "{answer}",
                    oninput: move |e| answer.set(e.value()),
                    onkeydown: move |evt: KeyboardEvent| {
                        if evt.key() == Key::Enter {
                            submit();
                        }
                    },
                }
                button { class: "btn-primary", onclick: move |_| submit(), "Check" }
            }
            if attempts > 0 {
                p { class: "hint-text", "Attempts: {attempts}" }
            }
            if let Some(hint) = hint {
                button {
                    class: "btn-ghost",
                    onclick: move |_| show_hint.set(true),
                    "\u{1F4A1} Hint"
                }
                if show_hint() {
                    p { class: "puzzle-hint", "{hint}" }
                }
            }
        }
    }
}

#[component]
fn SequenceStage(
    gate: Signal<PuzzleGate>,
    shown_attempt: Signal<Option<Vec<u8>>>,
    on_heart: EventHandler<u8>,
) -> Element {
    let mut gate = gate;
    let (sequence, clicked) = {
        let gate = gate.read();
        let clicked = match shown_attempt() {
            Some(attempt) => attempt,
            None if gate.stage() == PuzzleStage::Sequence => gate.state().clicked_sequence.clone(),
            None => gate.sequence().hearts().to_vec(),
        };
        (gate.sequence().to_string(), clicked)
    };
    let wrong = shown_attempt().is_some();

    rsx! {
        div { class: "puzzle-stage",
            h3 { class: "stage-title", "Second clue: the hearts" }
            p { class: "stage-question", "Click the hearts in this order: {sequence}" }
            div { class: if wrong { "heart-row wrong" } else { "heart-row" },
                for heart in 1..=HEART_COUNT as u8 {
                    {
                        let order = clicked.iter().position(|h| *h == heart).map(|i| i + 1);
                        rsx! {
                            button {
                                key: "{heart}",
                                class: if order.is_some() { "heart-btn clicked" } else { "heart-btn" },
                                onclick: move |_| on_heart.call(heart),
                                span { class: "heart-number", "{heart}" }
                                if let Some(order) = order {
                                    span { class: "heart-order", "{order}" }
                                }
                            }
                        }
                    }
                }
            }
            button {
                class: "btn-ghost",
                onclick: move |_| gate.write().reset_hearts(),
                "Start the sequence over"
            }
        }
    }
}

#[component]
fn QuestionStage(gate: Signal<PuzzleGate>, feedback: Signal<Option<Feedback>>) -> Element {
    let mut gate = gate;
    let (question, selected) = {
        let gate = gate.read();
        (*gate.question(), gate.state().selected_choice)
    };
    let prompt = question.question;

    let confirm = move |_| {
        let outcome = gate.write().confirm_choice();
        match outcome {
            ChoiceOutcome::Unlocked => {
                set_feedback(feedback, Feedback::Good("Correct! \u{1F495} It's really you..."))
            }
            ChoiceOutcome::Blocked => set_feedback(
                feedback,
                Feedback::Bad("Wrong answer \u{1F494} The letter is locked.".to_string()),
            ),
            ChoiceOutcome::NoSelection | ChoiceOutcome::Ignored => {}
        }
    };

    rsx! {
        div { class: "puzzle-stage",
            h3 { class: "stage-title", "Personal question: just to be sure..." }
            p { class: "stage-question", "{prompt}" }
            div { class: "choice-list",
                for (index, option) in question.options.iter().enumerate() {
                    button {
                        key: "{index}",
                        class: if selected == Some(index) { "choice-btn selected" } else { "choice-btn" },
                        onclick: move |_| {
                            gate.write().select_choice(index);
                        },
                        "{option}"
                    }
                }
            }
            p { class: "hint-text", "Careful: you only get one chance." }
            button {
                class: "btn-primary",
                disabled: selected.is_none(),
                onclick: confirm,
                "Confirm answer"
            }
        }
    }
}
