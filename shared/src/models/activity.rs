//! Activity Model (节气活动)

use serde::{Deserialize, Serialize};

use super::product::Product;

/// Page theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Ink,
    Festive,
    Minimalist,
}

/// Vote option
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteOption {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub votes: u64,
    /// Display gradient class
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Quiz question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    pub title: String,
    pub options: Vec<String>,
    pub correct_index: usize,
}

/// A question keeps at least this many options
pub const MIN_QUESTION_OPTIONS: usize = 2;

impl Question {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            options: vec!["选项A".into(), "选项B".into(), "选项C".into()],
            correct_index: 0,
        }
    }

    pub fn add_option(&mut self, text: impl Into<String>) {
        self.options.push(text.into());
    }

    /// Remove an option, keeping `correct_index` pointing at the same answer.
    ///
    /// Removing the correct answer resets it to the first option. Returns
    /// false (and changes nothing) for an out-of-range index or when the
    /// question would drop below [`MIN_QUESTION_OPTIONS`].
    pub fn remove_option(&mut self, index: usize) -> bool {
        if index >= self.options.len() || self.options.len() <= MIN_QUESTION_OPTIONS {
            return false;
        }
        self.options.remove(index);
        if self.correct_index == index {
            self.correct_index = 0;
        } else if self.correct_index > index {
            self.correct_index -= 1;
        }
        true
    }

    pub fn set_correct(&mut self, index: usize) -> bool {
        if index < self.options.len() {
            self.correct_index = index;
            true
        } else {
            false
        }
    }

    pub fn correct_option(&self) -> Option<&str> {
        self.options.get(self.correct_index).map(String::as_str)
    }
}

/// Engagement mechanic of an activity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Interaction {
    Vote {
        #[serde(rename = "voteOptions", default)]
        vote_options: Vec<VoteOption>,
    },
    Quiz {
        #[serde(default)]
        questions: Vec<Question>,
    },
}

impl Interaction {
    pub fn vote_option_mut(&mut self, option_id: &str) -> Option<&mut VoteOption> {
        match self {
            Interaction::Vote { vote_options } => {
                vote_options.iter_mut().find(|o| o.id == option_id)
            }
            Interaction::Quiz { .. } => None,
        }
    }
}

/// Activity entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Solar term tag, e.g. `chunfen`, `xiazhi`
    pub term_type: String,
    pub start_time: String,
    pub end_time: String,
    pub theme: Theme,
    pub interaction: Interaction,
    #[serde(default)]
    pub recommended_foods: Vec<Product>,
    #[serde(default)]
    pub recommended_products: Vec<Product>,
    #[serde(default)]
    pub recommended_spots: Vec<Product>,
    pub is_active: bool,
}

impl Activity {
    /// Blank activity as opened by the admin editor for "new"
    pub fn draft(now_millis: i64, today: &str) -> Self {
        Self {
            id: format!("activity_{}", now_millis),
            name: "新活动".into(),
            subtitle: None,
            term_type: "chunfen".into(),
            start_time: today.into(),
            end_time: today.into(),
            theme: Theme::Ink,
            interaction: Interaction::Vote {
                vote_options: Vec::new(),
            },
            recommended_foods: Vec::new(),
            recommended_products: Vec::new(),
            recommended_spots: Vec::new(),
            is_active: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question() -> Question {
        Question {
            id: "q1".into(),
            title: "春分竖蛋的最佳时间？".into(),
            options: vec!["清晨".into(), "正午".into(), "傍晚".into(), "深夜".into()],
            correct_index: 2,
        }
    }

    #[test]
    fn test_remove_option_before_correct_shifts_index() {
        let mut q = question();
        assert!(q.remove_option(0));
        assert_eq!(q.correct_index, 1);
        assert_eq!(q.correct_option(), Some("傍晚"));
    }

    #[test]
    fn test_remove_correct_option_resets_to_first() {
        let mut q = question();
        assert!(q.remove_option(2));
        assert_eq!(q.correct_index, 0);
    }

    #[test]
    fn test_remove_option_after_correct_keeps_index() {
        let mut q = question();
        assert!(q.remove_option(3));
        assert_eq!(q.correct_index, 2);
    }

    #[test]
    fn test_remove_option_keeps_minimum() {
        let mut q = question();
        q.options.truncate(2);
        q.correct_index = 1;
        assert!(!q.remove_option(0));
        assert_eq!(q.options.len(), 2);
        assert!(!q.remove_option(9));
    }

    #[test]
    fn test_set_correct_is_bounded() {
        let mut q = question();
        assert!(!q.set_correct(4));
        assert!(q.set_correct(3));
        q.add_option("黄昏");
        assert!(q.set_correct(4));
    }

    #[test]
    fn test_interaction_tagging() {
        let vote: Interaction = serde_json::from_str(
            r#"{"type":"vote","voteOptions":[{"id":"1","name":"水煮蛋","imageUrl":"a.png","votes":2341}]}"#,
        )
        .unwrap();
        match &vote {
            Interaction::Vote { vote_options } => assert_eq!(vote_options[0].votes, 2341),
            Interaction::Quiz { .. } => panic!("expected vote"),
        }

        let quiz = Interaction::Quiz {
            questions: vec![question()],
        };
        let json = serde_json::to_value(&quiz).unwrap();
        assert_eq!(json["type"], "quiz");
        assert_eq!(json["questions"][0]["correctIndex"], 2);
    }

    #[test]
    fn test_draft_defaults() {
        let a = Activity::draft(1710900000000, "2024-03-20");
        assert_eq!(a.id, "activity_1710900000000");
        assert_eq!(a.start_time, "2024-03-20");
        assert_eq!(a.end_time, "2024-03-20");
        assert_eq!(a.theme, Theme::Ink);
        assert!(matches!(a.interaction, Interaction::Vote { ref vote_options } if vote_options.is_empty()));
    }
}
