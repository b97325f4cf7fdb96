//! Pure state machine for the intake conversation. No I/O, no timers.
//!
//! The session walks the script forward only: an accepted answer moves to
//! the next step, a rejected one stays put, and the only way back is
//! [`Session::reset`]. While a transition is pending (accepted answer, next
//! prompt not yet fetched) the session refuses further input.

use crate::{
    script::{AnswerField, Answers, InputKind, Script},
    validate,
};

/// Where the session currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for an answer to step `0..len`.
    AwaitingInput(usize),
    /// All answers collected.
    Completed,
}

/// Outcome of feeding one user input to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// Input refused; show the re-prompt and stay on the same step.
    Rejected { reprompt: &'static str },
    /// Answer stored; fetch the next prompt with [`Session::next_prompt`].
    Accepted,
    /// Final answer stored; the record is complete.
    Completed,
    /// Not accepting input: a transition is pending or the session already
    /// completed. No state change.
    Busy,
}

/// One run of the wizard, from first prompt to completion or reset.
#[derive(Debug, Clone)]
pub struct Session {
    script: Script,
    phase: Phase,
    answers: Answers,
    advancing: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            script: Script::standard(),
            phase: Phase::AwaitingInput(0),
            answers: Answers::default(),
            advancing: false,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Current step index, `None` once completed.
    pub fn step_index(&self) -> Option<usize> {
        match self.phase {
            Phase::AwaitingInput(i) => Some(i),
            Phase::Completed => None,
        }
    }

    /// Transition in progress: an answer was accepted but the next prompt
    /// has not been fetched yet. Hosts must not submit while this is set.
    pub fn is_advancing(&self) -> bool {
        self.advancing
    }

    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Completed
    }

    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    /// The field the current step writes to, `None` once completed.
    pub fn field(&self) -> Option<AnswerField> {
        let step = self.script.step(self.step_index()?)?;
        Some(step.field)
    }

    /// The prompt for the current step, resolved against the answers so far.
    pub fn prompt(&self) -> String {
        match self.phase {
            Phase::AwaitingInput(i) => match self.script.step(i) {
                Some(step) => step.prompt.resolve(&self.answers),
                None => String::new(),
            },
            Phase::Completed => crate::script::CLOSING_MESSAGE.to_string(),
        }
    }

    /// Option labels for the current step, when it is a single-choice step.
    pub fn options(&self) -> Option<&'static [&'static str]> {
        let step = self.script.step(self.step_index()?)?;
        (step.kind == InputKind::SingleChoice).then_some(step.options)
    }

    /// Feed one raw user input to the current step.
    pub fn submit(&mut self, raw: &str) -> Submission {
        if self.advancing {
            return Submission::Busy;
        }
        let Phase::AwaitingInput(index) = self.phase else {
            return Submission::Busy;
        };
        let Some(step) = self.script.step(index) else {
            return Submission::Busy;
        };

        if !validate::accepts(step, raw) {
            return Submission::Rejected {
                reprompt: validate::REVALIDATION_PROMPT,
            };
        }

        self.answers.set(step.field, raw.trim());
        if index + 1 < self.script.len() {
            self.phase = Phase::AwaitingInput(index + 1);
            self.advancing = true;
            Submission::Accepted
        } else {
            self.phase = Phase::Completed;
            Submission::Completed
        }
    }

    /// Select one of the fixed options on the single-choice step.
    ///
    /// Unlike the view layer, the core re-checks membership: an out-of-set
    /// label is rejected, not stored.
    pub fn select(&mut self, label: &str) -> Submission {
        let on_choice_step = self
            .step_index()
            .and_then(|i| self.script.step(i))
            .is_some_and(|step| step.kind == InputKind::SingleChoice);
        if !on_choice_step && !self.advancing && !self.is_complete() {
            return Submission::Rejected {
                reprompt: validate::REVALIDATION_PROMPT,
            };
        }
        self.submit(label)
    }

    /// Fetch the prompt for the step reached by the last accepted answer,
    /// clearing the transition-in-progress flag.
    pub fn next_prompt(&mut self) -> String {
        self.advancing = false;
        self.prompt()
    }

    /// Pre-seed the request-type answer before the conversation reaches that
    /// step. Returns `false` (and stores nothing) for out-of-set labels.
    pub fn preset_request_type(&mut self, label: &str) -> bool {
        let Some(step) = self.script.choice_step() else {
            return false;
        };
        if !step.options.contains(&label) {
            return false;
        }
        self.answers.set(step.field, label);
        true
    }

    /// Return to the first step with an empty answer record. Valid from any
    /// state, idempotent.
    pub fn reset(&mut self) {
        self.answers.clear();
        self.phase = Phase::AwaitingInput(0);
        self.advancing = false;
    }
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;

    /// Drive one accepted answer, fetching the follow-up prompt.
    fn advance(session: &mut Session, input: &str) -> String {
        assert_eq!(session.submit(input), Submission::Accepted);
        session.next_prompt()
    }

    #[test]
    fn full_intake_flow() {
        let mut s = Session::new();
        assert_eq!(s.phase(), Phase::AwaitingInput(0));
        assert!(s.prompt().contains("nome completo"));

        let email_prompt = advance(&mut s, "Maria Silva");
        assert_eq!(s.phase(), Phase::AwaitingInput(1));
        assert!(email_prompt.contains("Maria Silva"));

        advance(&mut s, "maria@example.com");
        assert_eq!(s.phase(), Phase::AwaitingInput(2));

        advance(&mut s, "(83) 99319-3241");
        assert_eq!(s.phase(), Phase::AwaitingInput(3));
        assert_eq!(s.field(), Some(AnswerField::RequestType));
        assert_eq!(s.options().unwrap().len(), 4);

        assert_eq!(s.select("Orçamento"), Submission::Accepted);
        s.next_prompt();
        assert_eq!(s.phase(), Phase::AwaitingInput(4));

        assert_eq!(
            s.submit("Preciso de um orçamento para revisão de TCC."),
            Submission::Completed
        );
        assert!(s.is_complete());
        assert_eq!(s.field(), None);

        let answers = s.answers();
        assert_eq!(answers.name, "Maria Silva");
        assert_eq!(answers.email, "maria@example.com");
        assert_eq!(answers.phone, "(83) 99319-3241");
        assert_eq!(answers.request_type, "Orçamento");
        assert_eq!(answers.message, "Preciso de um orçamento para revisão de TCC.");
    }

    #[test]
    fn empty_input_never_advances() {
        let mut s = Session::new();
        for input in ["", "   ", "\t\n"] {
            assert!(matches!(s.submit(input), Submission::Rejected { .. }));
            assert_eq!(s.phase(), Phase::AwaitingInput(0));
        }
    }

    #[test]
    fn rejected_input_keeps_step_and_answers() {
        let mut s = Session::new();
        advance(&mut s, "Maria Silva");
        assert!(matches!(s.submit("not-an-email"), Submission::Rejected { .. }));
        assert_eq!(s.phase(), Phase::AwaitingInput(1));
        assert!(s.answers().email.is_empty());
    }

    #[test]
    fn busy_while_transition_pending() {
        let mut s = Session::new();
        assert_eq!(s.submit("Maria Silva"), Submission::Accepted);
        assert!(s.is_advancing());
        assert_eq!(s.submit("maria@example.com"), Submission::Busy);
        assert_eq!(s.phase(), Phase::AwaitingInput(1));
        assert!(s.answers().email.is_empty());

        s.next_prompt();
        assert!(!s.is_advancing());
        assert_eq!(s.submit("maria@example.com"), Submission::Accepted);
    }

    #[test]
    fn step_index_is_monotonic_until_completion() {
        let mut s = Session::new();
        let inputs = [
            "Maria Silva",
            "maria@example.com",
            "(83) 99319-3241",
            "Orçamento",
            "Preciso de um orçamento.",
        ];
        let mut last = 0;
        for input in inputs {
            let before = s.step_index().unwrap();
            assert!(before >= last);
            last = before;
            match s.submit(input) {
                Submission::Accepted => {
                    s.next_prompt();
                    assert!(s.step_index().unwrap() > before);
                },
                Submission::Completed => assert!(s.is_complete()),
                other => panic!("unexpected outcome {other:?}"),
            }
        }
    }

    #[test]
    fn select_rejects_out_of_set_labels() {
        let mut s = Session::new();
        advance(&mut s, "Maria Silva");
        advance(&mut s, "maria@example.com");
        advance(&mut s, "(83) 99319-3241");
        assert!(matches!(s.select("Reclamação"), Submission::Rejected { .. }));
        assert_eq!(s.phase(), Phase::AwaitingInput(3));
        assert!(s.answers().request_type.is_empty());
    }

    #[test]
    fn select_off_the_choice_step_is_rejected() {
        let mut s = Session::new();
        assert!(matches!(s.select("Orçamento"), Submission::Rejected { .. }));
        assert_eq!(s.phase(), Phase::AwaitingInput(0));
        assert!(s.answers().name.is_empty());
    }

    #[test]
    fn reset_returns_to_start_and_is_idempotent() {
        let mut s = Session::new();
        advance(&mut s, "Maria Silva");
        advance(&mut s, "maria@example.com");
        s.reset();
        assert_eq!(s.phase(), Phase::AwaitingInput(0));
        assert!(s.answers().name.is_empty());
        assert!(!s.is_advancing());

        let again = s.clone();
        s.reset();
        assert_eq!(s.phase(), again.phase());
        assert!(s.answers().name.is_empty());
    }

    #[test]
    fn reset_works_from_completed() {
        let mut s = Session::new();
        advance(&mut s, "Maria Silva");
        advance(&mut s, "maria@example.com");
        advance(&mut s, "(83) 99319-3241");
        assert_eq!(s.select("Dúvida"), Submission::Accepted);
        s.next_prompt();
        assert_eq!(s.submit("Tenho uma dúvida."), Submission::Completed);
        assert_eq!(s.submit("anything"), Submission::Busy);

        s.reset();
        assert_eq!(s.phase(), Phase::AwaitingInput(0));
    }

    #[test]
    fn preset_request_type_checks_membership() {
        let mut s = Session::new();
        assert!(s.preset_request_type("Orçamento"));
        assert_eq!(s.answers().request_type, "Orçamento");
        assert!(!s.preset_request_type("Reclamação"));
        assert_eq!(s.answers().request_type, "Orçamento");
    }

    #[test]
    fn input_is_trimmed_before_storage() {
        let mut s = Session::new();
        advance(&mut s, "  Maria Silva  ");
        assert_eq!(s.answers().name, "Maria Silva");
    }
}
