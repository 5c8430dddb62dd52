pub mod rules;
pub mod widget;

pub use rules::{ChatRule, Fallback, RuleCondition, ScriptedResponder};
pub use widget::{ChatMessage, ChatWidget, Sender, WidgetError, WidgetState};
