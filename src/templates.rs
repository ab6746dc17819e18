//! Placeholder file templates applied uniformly across topics.

/// A fixed (file name, content) pairing. `render` is a pure function of the
/// topic name; templates carry no other state.
#[derive(Clone, Copy, Debug)]
pub struct FileTemplate {
    pub file_name: &'static str,
    render: fn(&str) -> String,
}

impl FileTemplate {
    pub fn render(&self, topic: &str) -> String {
        (self.render)(topic)
    }
}

/// `interview_questions.md` for the flat plan: header line only.
pub const INTERVIEW_QUESTIONS: FileTemplate = FileTemplate {
    file_name: "interview_questions.md",
    render: |topic| format!("# {topic} Interview Questions\n\n"),
};

/// `concept.md` for the nested plan.
pub const CONCEPT: FileTemplate = FileTemplate {
    file_name: "concept.md",
    render: |topic| {
        format!(
            "# {topic} Concepts\n\n> Write down the key concepts, architecture, and use cases here.\n"
        )
    },
};

/// `interview_question.md` for the nested plan (singular name, with prompt).
pub const INTERVIEW_QUESTION: FileTemplate = FileTemplate {
    file_name: "interview_question.md",
    render: |topic| {
        format!(
            "# {topic} Interview Questions\n\n> Add commonly asked interview questions and answers here.\n"
        )
    },
};
