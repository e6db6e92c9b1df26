//! Survey definitions - surveys, questions, choices, and recorded answers.

use serde::{Deserialize, Serialize};

/// A named survey: title, intro instructions, and an ordered list of
/// questions answered strictly in order.
///
/// Immutable after construction; the catalog hands out shared references.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Survey {
    /// Identity used in routes and storage keys ("satisfaction")
    pub name: String,

    /// Human-readable title
    pub title: String,

    /// Intro text shown on the survey's start page
    pub instructions: String,

    /// Ordered questions
    pub questions: Vec<Question>,
}

impl Survey {
    /// Create a new survey.
    pub fn new(
        name: impl Into<String>,
        title: impl Into<String>,
        instructions: impl Into<String>,
        questions: Vec<Question>,
    ) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            instructions: instructions.into(),
            questions,
        }
    }

    /// Number of questions in this survey.
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    /// The question at `index`, if in range.
    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }
}

/// One question with its fixed set of choices.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Question {
    /// Prompt text shown to the visitor
    pub prompt: String,

    /// Selectable choices, in display order
    pub choices: Vec<Choice>,
}

impl Question {
    /// A question with the given choices.
    pub fn new(prompt: impl Into<String>, choices: Vec<Choice>) -> Self {
        Self {
            prompt: prompt.into(),
            choices,
        }
    }

    /// A plain yes/no question, the catalog's most common shape.
    pub fn yes_no(prompt: impl Into<String>) -> Self {
        Self::new(prompt, vec![Choice::plain("Yes"), Choice::plain("No")])
    }

    /// Find the choice matching a submitted value.
    pub fn choice(&self, value: &str) -> Option<&Choice> {
        self.choices.iter().find(|c| c.value == value)
    }
}

/// A selectable choice.
///
/// At most one choice per question should invite a free-text elaboration
/// (the "specify" field on the question form).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Choice {
    /// Value shown to the visitor and recorded in the answer
    pub value: String,

    /// Whether picking this choice invites a free-text elaboration
    #[serde(default)]
    pub allows_specify: bool,
}

impl Choice {
    /// A choice without elaboration.
    pub fn plain(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            allows_specify: false,
        }
    }

    /// A choice that invites a free-text elaboration.
    pub fn with_specify(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            allows_specify: true,
        }
    }
}

/// One recorded answer: the chosen value plus the optional elaboration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Answer {
    /// The submitted choice value
    pub choice: String,

    /// Free-text elaboration, present only when the matching choice
    /// invites one and the visitor supplied it
    pub specify: Option<String>,
}

impl Answer {
    /// Build an answer for `question` from submitted form values.
    ///
    /// The elaboration is attached only when the submitted choice declares
    /// `allows_specify` and the visitor supplied a non-empty value. A value
    /// that matches no declared choice is recorded as-is, without
    /// elaboration.
    pub fn build(question: &Question, choice: String, specify: Option<String>) -> Self {
        let invites_specify = question
            .choice(&choice)
            .is_some_and(|c| c.allows_specify);

        let specify = match specify {
            Some(text) if invites_specify && !text.trim().is_empty() => Some(text),
            _ => None,
        };

        Self { choice, specify }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn other_question() -> Question {
        Question::new(
            "How did you hear about us?",
            vec![
                Choice::plain("Word of mouth"),
                Choice::with_specify("Other"),
            ],
        )
    }

    #[test]
    fn yes_no_shape() {
        let q = Question::yes_no("Have you shopped here before?");
        assert_eq!(q.choices.len(), 2);
        assert_eq!(q.choices[0].value, "Yes");
        assert_eq!(q.choices[1].value, "No");
        assert!(!q.choices[0].allows_specify);
    }

    #[test]
    fn choice_lookup() {
        let q = other_question();
        assert!(q.choice("Other").is_some());
        assert!(q.choice("other").is_none(), "lookup is case-sensitive");
        assert!(q.choice("Carrier pigeon").is_none());
    }

    #[test]
    fn answer_keeps_specify_when_invited() {
        let q = other_question();
        let a = Answer::build(&q, "Other".into(), Some("saw a flyer".into()));
        assert_eq!(a.specify.as_deref(), Some("saw a flyer"));
    }

    #[test]
    fn answer_drops_specify_for_plain_choice() {
        let q = other_question();
        let a = Answer::build(&q, "Word of mouth".into(), Some("ignored".into()));
        assert_eq!(a.specify, None);
    }

    #[test]
    fn answer_drops_blank_specify() {
        let q = other_question();
        let a = Answer::build(&q, "Other".into(), Some("   ".into()));
        assert_eq!(a.specify, None);
    }

    #[test]
    fn answer_accepts_undeclared_choice() {
        let q = other_question();
        let a = Answer::build(&q, "Carrier pigeon".into(), Some("really".into()));
        assert_eq!(a.choice, "Carrier pigeon");
        assert_eq!(a.specify, None, "unknown choice never carries specify");
    }

    #[test]
    fn serialize_deserialize() {
        let survey = Survey::new(
            "test",
            "Test Survey",
            "Please answer honestly.",
            vec![Question::yes_no("Is this a test?"), other_question()],
        );

        let json = serde_json::to_string(&survey).unwrap();
        let parsed: Survey = serde_json::from_str(&json).unwrap();
        assert_eq!(survey, parsed);
    }
}
