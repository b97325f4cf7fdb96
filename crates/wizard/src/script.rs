//! The fixed five-step intake script.
//!
//! Steps are static for the lifetime of a session; only the e-mail prompt
//! is derived from an earlier answer.

use {atende_handoff::ContactRequest, serde::Serialize};

/// The five collected fields, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerField {
    Name,
    Email,
    Phone,
    RequestType,
    Message,
}

impl AnswerField {
    pub const ALL: [Self; 5] = [
        Self::Name,
        Self::Email,
        Self::Phone,
        Self::RequestType,
        Self::Message,
    ];

    /// Stable key used in JSON payloads.
    pub fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::RequestType => "request_type",
            Self::Message => "message",
        }
    }
}

/// Accumulated answers, one slot per field. Every slot starts empty and is
/// written at most once per session by the forward-only wizard.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Answers {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub request_type: String,
    pub message: String,
}

impl Answers {
    pub fn get(&self, field: AnswerField) -> &str {
        match field {
            AnswerField::Name => &self.name,
            AnswerField::Email => &self.email,
            AnswerField::Phone => &self.phone,
            AnswerField::RequestType => &self.request_type,
            AnswerField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: AnswerField, value: impl Into<String>) {
        let value = value.into();
        match field {
            AnswerField::Name => self.name = value,
            AnswerField::Email => self.email = value,
            AnswerField::Phone => self.phone = value,
            AnswerField::RequestType => self.request_type = value,
            AnswerField::Message => self.message = value,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Snapshot for the handoff layer.
    pub fn to_request(&self) -> ContactRequest {
        ContactRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            request_type: self.request_type.clone(),
            message: self.message.clone(),
        }
    }
}

/// What kind of input a step expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
    FreeText,
    Email,
    Phone,
    SingleChoice,
}

/// Prompt text, either fixed or derived from earlier answers.
#[derive(Debug, Clone, Copy)]
pub enum Prompt {
    Static(&'static str),
    Interpolated(fn(&Answers) -> String),
}

impl Prompt {
    /// Resolve against the current answer record at emission time.
    pub fn resolve(&self, answers: &Answers) -> String {
        match self {
            Self::Static(text) => (*text).to_string(),
            Self::Interpolated(build) => build(answers),
        }
    }
}

/// One unit of the conversation script.
#[derive(Debug, Clone, Copy)]
pub struct Step {
    pub prompt: Prompt,
    pub field: AnswerField,
    pub kind: InputKind,
    /// Fixed option labels; empty unless `kind` is `SingleChoice`.
    pub options: &'static [&'static str],
}

/// Labels offered by the request-type step.
pub const REQUEST_TYPE_OPTIONS: &[&str] = &["Dúvida", "Orçamento", "Suporte", "Outro"];

/// Closing line shown once the record is complete, before the redirect.
pub const CLOSING_MESSAGE: &str = "Perfeito! Recebi todas as informações. Vou redirecionar você \
                                   para o WhatsApp com sua mensagem já preenchida. 📱";

fn email_prompt(answers: &Answers) -> String {
    format!(
        "Prazer em conhecê-lo(a), {}! Agora, qual é o seu e-mail?",
        answers.name
    )
}

/// The ordered list of steps the wizard walks through.
#[derive(Debug, Clone)]
pub struct Script {
    steps: Vec<Step>,
}

impl Script {
    /// The standard contact-intake script.
    pub fn standard() -> Self {
        Self {
            steps: vec![
                Step {
                    prompt: Prompt::Static(
                        "Olá! 👋 Bem-vindo(a) ao atendimento da Escrita Mestra! Para começar, \
                         qual é o seu nome completo?",
                    ),
                    field: AnswerField::Name,
                    kind: InputKind::FreeText,
                    options: &[],
                },
                Step {
                    prompt: Prompt::Interpolated(email_prompt),
                    field: AnswerField::Email,
                    kind: InputKind::Email,
                    options: &[],
                },
                Step {
                    prompt: Prompt::Static("Perfeito! Qual é o seu telefone/WhatsApp?"),
                    field: AnswerField::Phone,
                    kind: InputKind::Phone,
                    options: &[],
                },
                Step {
                    prompt: Prompt::Static(
                        "Ótimo! Agora me diga, qual é o tipo da sua solicitação?",
                    ),
                    field: AnswerField::RequestType,
                    kind: InputKind::SingleChoice,
                    options: REQUEST_TYPE_OPTIONS,
                },
                Step {
                    prompt: Prompt::Static(
                        "Por último, descreva detalhadamente sua solicitação ou dúvida:",
                    ),
                    field: AnswerField::Message,
                    kind: InputKind::FreeText,
                    options: &[],
                },
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn step(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    /// The single-choice step, if the script has one.
    pub fn choice_step(&self) -> Option<&Step> {
        self.steps
            .iter()
            .find(|s| s.kind == InputKind::SingleChoice)
    }
}
