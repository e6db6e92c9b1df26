//! Read-only survey catalog.
//!
//! Loaded once at process start and never mutated afterwards, so request
//! handlers can read it concurrently without synchronization.

use crate::error::{Error, Result};
use crate::survey::{Choice, Question, Survey};

/// The set of surveys this node serves.
#[derive(Debug, Clone)]
pub struct Catalog {
    surveys: Vec<Survey>,
}

impl Catalog {
    /// Build a catalog from survey definitions. Order is preserved for the
    /// selection page.
    pub fn new(surveys: Vec<Survey>) -> Self {
        Self { surveys }
    }

    /// The built-in catalog.
    pub fn builtin() -> Self {
        Self::new(vec![satisfaction_survey(), dining_survey()])
    }

    /// Look up a survey by name.
    pub fn get(&self, name: &str) -> Result<&Survey> {
        self.surveys
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| Error::UnknownSurvey(name.to_string()))
    }

    /// All surveys, in catalog order.
    pub fn surveys(&self) -> &[Survey] {
        &self.surveys
    }
}

fn satisfaction_survey() -> Survey {
    Survey::new(
        "satisfaction",
        "Customer Satisfaction Survey",
        "Please fill out a survey about your experience with us.",
        vec![
            Question::yes_no("Have you shopped here before?"),
            Question::yes_no("Did someone else shop with you today?"),
            Question::new(
                "On average, how much do you spend a month on frisbees?",
                vec![
                    Choice::plain("Less than $10,000"),
                    Choice::plain("$10,000 or more"),
                ],
            ),
            Question::yes_no("Are you likely to shop here again?"),
        ],
    )
}

fn dining_survey() -> Survey {
    Survey::new(
        "dining",
        "Dining Experience Survey",
        "Tell us about your visit so we can improve the next one.",
        vec![
            Question::new(
                "How was your meal?",
                vec![
                    Choice::plain("Great"),
                    Choice::plain("Fine"),
                    Choice::plain("Poor"),
                ],
            ),
            Question::new(
                "How did you hear about us?",
                vec![
                    Choice::plain("Word of mouth"),
                    Choice::plain("Social media"),
                    Choice::with_specify("Other"),
                ],
            ),
            Question::yes_no("Would you recommend us to a friend?"),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_surveys() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.surveys().len(), 2);
        assert!(catalog.get("satisfaction").is_ok());
        assert!(catalog.get("dining").is_ok());
    }

    #[test]
    fn unknown_name() {
        let catalog = Catalog::builtin();
        assert_eq!(
            catalog.get("breakfast"),
            Err(Error::UnknownSurvey("breakfast".to_string()))
        );
    }

    #[test]
    fn satisfaction_shape() {
        let catalog = Catalog::builtin();
        let survey = catalog.get("satisfaction").unwrap();
        assert_eq!(survey.question_count(), 4);
        for question in &survey.questions {
            assert!(
                question.choices.len() >= 2,
                "question {:?} needs at least two choices",
                question.prompt
            );
        }
    }

    #[test]
    fn dining_has_one_specify_choice() {
        let catalog = Catalog::builtin();
        let survey = catalog.get("dining").unwrap();
        let specify_choices: usize = survey
            .questions
            .iter()
            .flat_map(|q| &q.choices)
            .filter(|c| c.allows_specify)
            .count();
        assert_eq!(specify_choices, 1);
    }

    #[test]
    fn catalog_order_is_stable() {
        let catalog = Catalog::builtin();
        let names: Vec<_> = catalog.surveys().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["satisfaction", "dining"]);
    }
}
