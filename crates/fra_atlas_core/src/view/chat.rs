//! DSS assistant chat transcript with delayed canned replies.
//!
//! # Responsibility
//! - Keep the append-only transcript and the input draft.
//! - Schedule one assistant reply per user message and deliver it on `poll`.
//!
//! # Invariants
//! - Message ids are dense and equal the 1-based transcript position.
//! - Replies are delivered in scheduling order, never before their due time.
//! - Pending replies die with the session: `cancel_pending`, `unmount` and
//!   drop all discard them, and an unmounted session accepts no new input.

use crate::config::ChatConfig;
use crate::view::listeners::{ListenerId, ViewListeners};
use log::{debug, info};
use serde::Serialize;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

pub const GREETING: &str =
    "Hello! I'm your DSS Assistant. How can I help you navigate the FRA Digital Atlas today?";
pub const CANNED_REPLY: &str =
    "I understand your query. Let me help you find the relevant information in the system.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChatAuthor {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub id: u32,
    pub author: ChatAuthor,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatEvent {
    MessageAppended(ChatMessage),
    OpenChanged(bool),
    DraftChanged,
    RepliesCancelled(usize),
}

#[derive(Debug, Clone, Copy)]
struct PendingReply {
    due: Instant,
}

pub struct ChatSession {
    messages: Vec<ChatMessage>,
    pending: VecDeque<PendingReply>,
    reply_delay: Duration,
    draft: String,
    open: bool,
    mounted: bool,
    revision: u64,
    listeners: ViewListeners<ChatEvent>,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new(&ChatConfig::default())
    }
}

impl ChatSession {
    /// Starts a closed session holding only the assistant greeting.
    pub fn new(config: &ChatConfig) -> Self {
        Self {
            messages: vec![ChatMessage {
                id: 1,
                author: ChatAuthor::Assistant,
                content: GREETING.to_string(),
            }],
            pending: VecDeque::new(),
            reply_delay: Duration::from_millis(config.reply_delay_ms),
            draft: String::new(),
            open: false,
            mounted: true,
            revision: 0,
            listeners: ViewListeners::new(),
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn pending_replies(&self) -> usize {
        self.pending.len()
    }

    /// Due time of the earliest pending reply, for host timer scheduling.
    pub fn next_due(&self) -> Option<Instant> {
        self.pending.front().map(|reply| reply.due)
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&ChatEvent) + 'static) -> ListenerId {
        self.listeners.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn toggle_open(&mut self) -> bool {
        if !self.mounted {
            return self.open;
        }
        self.open = !self.open;
        let open = self.open;
        self.commit(ChatEvent::OpenChanged(open));
        open
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        let text = text.into();
        if !self.mounted || self.draft == text {
            return;
        }
        self.draft = text;
        self.commit(ChatEvent::DraftChanged);
    }

    /// Appends a user message and schedules the assistant reply.
    ///
    /// Returns the new message id, or `None` for blank input or after unmount.
    pub fn send(&mut self, text: &str, now: Instant) -> Option<u32> {
        if !self.mounted || text.trim().is_empty() {
            return None;
        }
        let id = self.append(ChatAuthor::User, text.to_string());
        let due = now + self.reply_delay;
        let position = self.pending.partition_point(|reply| reply.due <= due);
        self.pending.insert(position, PendingReply { due });
        debug!(
            "event=chat_reply_scheduled module=chat pending={} delay_ms={}",
            self.pending.len(),
            self.reply_delay.as_millis()
        );
        Some(id)
    }

    /// Sends the current draft and clears it on success.
    pub fn send_draft(&mut self, now: Instant) -> Option<u32> {
        let draft = std::mem::take(&mut self.draft);
        match self.send(&draft, now) {
            Some(id) => Some(id),
            None => {
                self.draft = draft;
                None
            }
        }
    }

    /// Delivers every reply due at or before `now`; returns how many arrived.
    pub fn poll(&mut self, now: Instant) -> usize {
        if !self.mounted {
            return 0;
        }
        let mut delivered = 0;
        while self.pending.front().is_some_and(|reply| reply.due <= now) {
            self.pending.pop_front();
            self.append(ChatAuthor::Assistant, CANNED_REPLY.to_string());
            delivered += 1;
        }
        delivered
    }

    /// Discards undelivered replies; returns how many were dropped.
    pub fn cancel_pending(&mut self) -> usize {
        let dropped = self.pending.len();
        if dropped == 0 {
            return 0;
        }
        self.pending.clear();
        info!("event=chat_reply_cancelled module=chat dropped={dropped}");
        self.commit(ChatEvent::RepliesCancelled(dropped));
        dropped
    }

    /// Ends the session lifetime: cancels replies and releases listeners.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.cancel_pending();
        self.mounted = false;
        self.listeners.clear();
    }

    fn append(&mut self, author: ChatAuthor, content: String) -> u32 {
        let id = u32::try_from(self.messages.len() + 1).unwrap_or(u32::MAX);
        let message = ChatMessage {
            id,
            author,
            content,
        };
        self.messages.push(message.clone());
        self.commit(ChatEvent::MessageAppended(message));
        id
    }

    fn commit(&mut self, event: ChatEvent) {
        self.revision += 1;
        self.listeners.notify(&event);
    }
}
