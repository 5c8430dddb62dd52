use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum RuleCondition {
    /// Lower-cased input contains this fragment
    Contains(String),
    /// Lower-cased input contains at least one of these fragments
    ContainsAny(Vec<String>),
}

impl RuleCondition {
    pub fn any(fragments: &[&str]) -> Self {
        RuleCondition::ContainsAny(fragments.iter().map(|f| f.to_string()).collect())
    }

    fn holds(&self, lowered: &str) -> bool {
        match self {
            RuleCondition::Contains(fragment) => lowered.contains(fragment.as_str()),
            RuleCondition::ContainsAny(fragments) => {
                fragments.iter().any(|f| lowered.contains(f.as_str()))
            }
        }
    }
}

/// A canned reply and the conditions that must all hold to send it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRule {
    pub name: String,
    pub conditions: Vec<RuleCondition>,
    pub reply: String,
}

impl ChatRule {
    pub fn new(name: &str, conditions: Vec<RuleCondition>, reply: &str) -> Self {
        Self {
            name: name.to_string(),
            conditions,
            reply: reply.to_string(),
        }
    }

    pub fn matches(&self, lowered: &str) -> bool {
        self.conditions.iter().all(|c| c.holds(lowered))
    }
}

/// Reply used when no rule matches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Fallback {
    Fixed(String),
    /// `before` + the original question + `after`
    EchoQuestion { before: String, after: String },
}

impl Fallback {
    fn render(&self, question: &str) -> String {
        match self {
            Fallback::Fixed(text) => text.clone(),
            Fallback::EchoQuestion { before, after } => format!("{}{}{}", before, question, after),
        }
    }
}

/// Keyword assistant. Rules are tried top-down and the first match wins,
/// so order is part of the behaviour.
#[derive(Debug, Clone)]
pub struct ScriptedResponder {
    greeting: String,
    rules: Vec<ChatRule>,
    fallback: Fallback,
    suggestions: Vec<String>,
}

impl ScriptedResponder {
    pub fn new(greeting: &str, rules: Vec<ChatRule>, fallback: Fallback, suggestions: &[&str]) -> Self {
        Self {
            greeting: greeting.to_string(),
            rules,
            fallback,
            suggestions: suggestions.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn greeting(&self) -> &str {
        &self.greeting
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    pub fn rules(&self) -> &[ChatRule] {
        &self.rules
    }

    pub fn matching_rule(&self, question: &str) -> Option<&ChatRule> {
        let lowered = question.to_lowercase();
        self.rules.iter().find(|rule| rule.matches(&lowered))
    }

    pub fn respond(&self, question: &str) -> String {
        match self.matching_rule(question) {
            Some(rule) => rule.reply.clone(),
            None => self.fallback.render(question),
        }
    }

    /// Floating "Movie Assistant" on the home page.
    pub fn widget() -> Self {
        let rules = vec![
            ChatRule::new(
                "telugu",
                vec![RuleCondition::Contains("telugu".into())],
                "Here are some popular Telugu movies currently showing: Pushpa 2, RRR, Baahubali 3, and KGF Chapter 3. Would you like showtimes for any of these?",
            ),
            ChatRule::new(
                "comedy",
                vec![RuleCondition::Contains("comedy".into())],
                "For comedy movies, I recommend Geetha Govindam 2 and Ala Vaikunthapurramuloo 2. Both have great ratings and multiple showtimes available.",
            ),
            ChatRule::new(
                "evening_shows",
                vec![RuleCondition::any(&["evening", "show"])],
                "Evening shows are available from 5:00 PM to 9:30 PM across all theaters. Popular slots are 7:15 PM and 9:30 PM.",
            ),
            ChatRule::new(
                "top_rated",
                vec![RuleCondition::any(&["rating", "best"])],
                "Top rated movies this week: RRR (8.9), Baahubali 3 (8.8), Pushpa 2 (8.7), and Rangasthalam 2 (8.6).",
            ),
            ChatRule::new(
                "action_imax",
                vec![RuleCondition::any(&["action", "imax"])],
                "Action movies in IMAX: RRR, Baahubali 3, KGF Chapter 3, and Pushpa 2 are available at Prasads IMAX with premium sound and visuals.",
            ),
        ];

        Self::new(
            "Hi! I'm your movie assistant. How can I help you today?",
            rules,
            Fallback::Fixed(WIDGET_FALLBACK.to_string()),
            &[
                "What are today's top Telugu movies?",
                "Show me comedy films",
                "Which movies have evening shows?",
                "Best rated movies this week",
                "Action movies in IMAX",
            ],
        )
    }

    /// Full-page help desk assistant.
    pub fn help_desk() -> Self {
        let rules = vec![
            ChatRule::new(
                "movies",
                vec![RuleCondition::any(&["movie", "film"])],
                "I can help you find movies! We have great movies playing in Hyderabad including Spider-Man: No Way Home, Dune: Part Two, and Oppenheimer. Would you like me to show you showtimes or help you book tickets?",
            ),
            ChatRule::new(
                "bookings",
                vec![RuleCondition::any(&["booking", "ticket"])],
                "For booking-related queries, you can:\n\n• View your bookings in the 'My Bookings' section\n• Cancel bookings up to 2 hours before showtime\n• Download your tickets from the booking confirmation\n\nWhat specific help do you need with your booking?",
            ),
            ChatRule::new(
                "events",
                vec![RuleCondition::any(&["event", "concert", "sports"])],
                "We have exciting events coming up! Including IPL matches, A.R. Rahman concert, comedy shows, and food festivals. Check out our Sports & Events page for the complete list and booking options.",
            ),
            ChatRule::new(
                "refunds",
                vec![RuleCondition::any(&["refund", "cancel"])],
                "Our refund policy:\n\n• Full refund if cancelled 24+ hours before showtime\n• 50% refund if cancelled 2-24 hours before\n• No refund within 2 hours of showtime\n\nRefunds are processed within 5-7 business days.",
            ),
            ChatRule::new(
                "showtimes",
                vec![RuleCondition::any(&["time", "show"])],
                "Movie showtimes are typically:\n\n• 10:00 AM (Morning)\n• 01:00 PM (Afternoon)\n• 04:00 PM (Evening)\n• 07:00 PM (Night)\n• 10:00 PM (Late night)\n\nFor specific movie timings, please check the individual movie page.",
            ),
        ];

        Self::new(
            "Hello! I'm your CineTime assistant. How can I help you today?",
            rules,
            Fallback::EchoQuestion {
                before: "I understand you're asking about: \"".to_string(),
                after: HELP_DESK_FALLBACK_TAIL.to_string(),
            },
            &[
                "Show me movies playing today",
                "Help me find my booking",
                "What events are happening this weekend?",
                "How do I cancel my booking?",
                "Show me movie showtimes",
                "What's the refund policy?",
            ],
        )
    }
}

const WIDGET_FALLBACK: &str = "I understand you're looking for information about movies. You can ask me about movie recommendations, showtimes, theaters, or ratings. Try one of the quick suggestions below!";

const HELP_DESK_FALLBACK_TAIL: &str = "\"\n\nI can help you with:\n• Finding movies and events\n• Booking tickets\n• Managing your bookings\n• Showtimes and venue information\n• Refund and cancellation policies\n\nCould you please be more specific about what you'd like to know?";
