use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::{AgentDescriptor, ToolDescriptor};
use crate::messages::HistoryTurn;

/// Placeholder shown while a chat call is in flight.
pub const THINKING_PLACEHOLDER: &str = "🤔 Thinking...";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnRole {
    User,
    Assistant,
    Error,
}

impl TurnRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            TurnRole::User => "user",
            TurnRole::Assistant => "assistant",
            TurnRole::Error => "error",
        }
    }
}

/// One transcript entry. Pending turns are placeholders awaiting resolution
/// and are excluded from the history replayed to the gateway.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    pub id: Uuid,
    pub role: TurnRole,
    pub content: String,
    pub pending: bool,
    pub timestamp: DateTime<Utc>,
}

impl ChatTurn {
    fn new(role: TurnRole, content: String, pending: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            content,
            pending,
            timestamp: Utc::now(),
        }
    }
}

/// Per-session dashboard state: cached catalogs, the selected agent and the
/// append-only transcript. One instance per running client; sessions share
/// nothing.
#[derive(Debug, Default)]
pub struct DashboardSession {
    agents: Vec<AgentDescriptor>,
    tools: Vec<ToolDescriptor>,
    selected_agent_id: Option<String>,
    transcript: Vec<ChatTurn>,
}

impl DashboardSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_catalog(&mut self, agents: Vec<AgentDescriptor>, tools: Vec<ToolDescriptor>) {
        self.agents = agents;
        self.tools = tools;
    }

    pub fn agents(&self) -> &[AgentDescriptor] {
        &self.agents
    }

    pub fn tools(&self) -> &[ToolDescriptor] {
        &self.tools
    }

    pub fn transcript(&self) -> &[ChatTurn] {
        &self.transcript
    }

    pub fn selected_agent_id(&self) -> Option<&str> {
        self.selected_agent_id.as_deref()
    }

    pub fn selected_agent(&self) -> Option<&AgentDescriptor> {
        let id = self.selected_agent_id.as_deref()?;
        self.agents.iter().find(|a| a.id == id)
    }

    /// Switch to another agent. Clears the transcript before anything else
    /// can be appended and returns the new agent's name for the toast.
    /// Unknown ids leave the session untouched.
    pub fn select_agent(&mut self, agent_id: &str) -> Option<String> {
        let name = self.agents.iter().find(|a| a.id == agent_id)?.name.clone();
        self.transcript.clear();
        self.selected_agent_id = Some(agent_id.to_string());
        Some(name)
    }

    /// Phase one of a submission: append the user turn and the pending
    /// placeholder, before any network activity starts. Returns the
    /// placeholder's id for later resolution.
    pub fn begin_exchange(&mut self, prompt: &str) -> Uuid {
        self.transcript
            .push(ChatTurn::new(TurnRole::User, prompt.to_string(), false));
        let placeholder = ChatTurn::new(TurnRole::Assistant, THINKING_PLACEHOLDER.to_string(), true);
        let id = placeholder.id;
        self.transcript.push(placeholder);
        id
    }

    /// Phase two, success: resolve the placeholder to the agent's reply.
    /// Keyed by turn id rather than position. Returns false if the turn is
    /// gone (e.g. the agent was switched while the call was in flight).
    pub fn resolve_reply(&mut self, turn_id: Uuid, response: String) -> bool {
        self.resolve(turn_id, TurnRole::Assistant, response)
    }

    /// Phase two, failure: resolve the placeholder to an error turn.
    pub fn resolve_error(&mut self, turn_id: Uuid, message: String) -> bool {
        self.resolve(turn_id, TurnRole::Error, message)
    }

    fn resolve(&mut self, turn_id: Uuid, role: TurnRole, content: String) -> bool {
        match self.transcript.iter_mut().find(|t| t.id == turn_id) {
            Some(turn) => {
                turn.role = role;
                turn.content = content;
                turn.pending = false;
                turn.timestamp = Utc::now();
                true
            }
            None => false,
        }
    }

    /// The flat history payload for a chat call: every resolved turn, in
    /// order, minus pending placeholders.
    pub fn history_payload(&self) -> Vec<HistoryTurn> {
        self.transcript
            .iter()
            .filter(|t| !t.pending)
            .map(|t| HistoryTurn {
                role: t.role.as_str().to_string(),
                text: t.content.clone(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::config::PlatformConfig;

    fn session() -> DashboardSession {
        let catalog = Catalog::builtin(&PlatformConfig::default());
        let mut session = DashboardSession::new();
        session.set_catalog(catalog.agents().to_vec(), catalog.tools().to_vec());
        session
    }

    #[test]
    fn submission_appends_user_then_placeholder() {
        let mut session = session();
        session.select_agent("free-agent-code");

        let id = session.begin_exchange("write me a loop");
        let transcript = session.transcript();
        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript[0].role, TurnRole::User);
        assert_eq!(transcript[0].content, "write me a loop");
        assert_eq!(transcript[1].id, id);
        assert!(transcript[1].pending);
        assert_eq!(transcript[1].content, THINKING_PLACEHOLDER);
    }

    #[test]
    fn success_leaves_one_user_one_assistant_turn() {
        let mut session = session();
        session.select_agent("free-agent-code");

        let id = session.begin_exchange("hello");
        assert!(session.resolve_reply(id, "hi there".to_string()));

        let transcript = session.transcript();
        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript[1].role, TurnRole::Assistant);
        assert_eq!(transcript[1].content, "hi there");
        assert!(!transcript[1].pending);
    }

    #[test]
    fn failure_leaves_one_user_one_error_turn() {
        let mut session = session();
        session.select_agent("free-agent-code");

        let id = session.begin_exchange("hello");
        assert!(session.resolve_error(id, "Backend Request Error".to_string()));

        let transcript = session.transcript();
        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript[0].role, TurnRole::User);
        assert_eq!(transcript[1].role, TurnRole::Error);
    }

    #[test]
    fn switching_agents_resets_transcript() {
        let mut session = session();
        session.select_agent("free-agent-code");
        let id = session.begin_exchange("hello");
        session.resolve_reply(id, "hi".to_string());

        let toast = session.select_agent("free-agent-financial");
        assert_eq!(toast.as_deref(), Some("Financial Analysis Assistant"));
        assert!(session.transcript().is_empty());
        assert_eq!(session.selected_agent_id(), Some("free-agent-financial"));
    }

    #[test]
    fn unknown_agent_leaves_session_untouched() {
        let mut session = session();
        session.select_agent("free-agent-code");
        session.begin_exchange("hello");

        assert!(session.select_agent("no-such-agent").is_none());
        assert_eq!(session.selected_agent_id(), Some("free-agent-code"));
        assert_eq!(session.transcript().len(), 2);
    }

    #[test]
    fn history_payload_excludes_pending_placeholder() {
        let mut session = session();
        session.select_agent("free-agent-code");

        let first = session.begin_exchange("one");
        session.resolve_reply(first, "answer one".to_string());
        session.begin_exchange("two");

        let history = session.history_payload();
        assert_eq!(history.len(), 3);
        assert_eq!(history[0].role, "user");
        assert_eq!(history[0].text, "one");
        assert_eq!(history[1].role, "assistant");
        assert_eq!(history[2].text, "two");
    }

    #[test]
    fn resolution_is_id_keyed_not_positional() {
        let mut session = session();
        session.select_agent("free-agent-code");

        let id = session.begin_exchange("hello");
        // Agent switch while the call is in flight drops the placeholder.
        session.select_agent("free-agent-financial");
        assert!(!session.resolve_reply(id, "too late".to_string()));
        assert!(session.transcript().is_empty());
    }
}
