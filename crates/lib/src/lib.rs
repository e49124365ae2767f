//! # School Assistant Core
//!
//! This crate implements the conversational knowledge pipeline behind the school
//! portal's assistant: deterministic schedule answers, ranked knowledge-base
//! lookup, LLM-grounded responses, and a rule-based fallback chain used whenever
//! the external model is unavailable or returns nothing usable.

pub mod chat;
pub mod classify;
pub mod context;
pub mod errors;
pub mod fallback;
pub mod ingest;
pub mod prompts;
pub mod providers;
pub mod schedule;
pub mod types;
pub mod weekday;

pub use errors::ProviderError;
pub use types::{Asker, ConversationTurn, KnowledgeEntry, QaPair, Role};
