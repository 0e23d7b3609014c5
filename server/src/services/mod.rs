//! Business-logic services sitting between routes and collaborator clients.

pub mod chat;
