//! Learning concepts offered by the tutor panel.

/// System prompt sent with every concept explanation.
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a friendly and helpful React.js expert. \
You explain complex topics simply, using analogies.";

/// A concept the learner can ask the tutor about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Concept {
    /// Stable identifier.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// User prompt sent to the explanation endpoint.
    pub prompt: &'static str,
}

/// The concept catalog, in panel order.
pub static CONCEPTS: &[Concept] = &[
    Concept {
        id: "components",
        name: "Components",
        prompt: "Explain React Components like I am a 10 year old building with LEGOs.",
    },
    Concept {
        id: "jsx",
        name: "JSX",
        prompt: "What is JSX in React? Explain it with a simple \"before and after\" code example.",
    },
    Concept {
        id: "props",
        name: "Props",
        prompt: "What are \"props\" in React? Explain using an analogy of customizing a car.",
    },
    Concept {
        id: "state",
        name: "State (useState)",
        prompt: "What is \"state\" in React? Explain it like a light switch.",
    },
    Concept {
        id: "redux",
        name: "Redux Store",
        prompt: "Explain what a Redux \"store\" is and why you would use it instead of just \
\"useState\". Use an analogy of a central bank vs. keeping cash in your pocket.",
    },
    Concept {
        id: "reducers",
        name: "Redux Reducers",
        prompt: "What is a \"reducer\" in Redux? Explain it like a rulebook for a game.",
    },
    Concept {
        id: "actions",
        name: "Redux Actions",
        prompt: "What is a Redux \"action\"? Explain it like sending a postcard with instructions.",
    },
    Concept {
        id: "hooks",
        name: "Hooks (useEffect)",
        prompt: "What does the \"useEffect\" hook do in React? Explain it like a robot that does \
a job only when something specific changes.",
    },
];

/// Look up a concept by id (case-insensitive).
#[must_use]
pub fn find_concept(id: &str) -> Option<&'static Concept> {
    CONCEPTS.iter().find(|c| c.id.eq_ignore_ascii_case(id.trim()))
}
