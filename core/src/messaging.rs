/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::types::MMessage;

/// One conversation as seen by a user: the other participant, the most recent
/// message exchanged with them and how many of their messages are still
/// unread.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationSummary {
    pub counterpart: Uuid,
    pub last_message: MMessage,
    pub unread_count: i64,
}

/// Groups a user's messages into per-counterpart conversations, newest
/// conversation first.
///
/// The counterpart list keeps first-seen order, so two conversations whose
/// latest messages share a timestamp stay in the order their counterparts
/// first appeared in `messages`. When a single conversation has several
/// messages with the same timestamp, the earliest one in `messages` wins as
/// the last message.
pub fn aggregate_conversations(user_id: Uuid, messages: &[MMessage]) -> Vec<ConversationSummary> {
    let mut counterparts: Vec<Uuid> = Vec::new();

    for message in messages {
        let counterpart = if message.sender == user_id {
            message.receiver
        } else if message.receiver == user_id {
            message.sender
        } else {
            continue;
        };

        if !counterparts.contains(&counterpart) {
            counterparts.push(counterpart);
        }
    }

    let mut conversations = counterparts
        .into_iter()
        .filter_map(|counterpart| {
            let related = messages
                .iter()
                .filter(|m| {
                    (m.sender == counterpart && m.receiver == user_id)
                        || (m.receiver == counterpart && m.sender == user_id)
                })
                .collect::<Vec<&MMessage>>();

            let last_message = related.iter().copied().reduce(|latest, m| {
                if m.created_at > latest.created_at {
                    m
                } else {
                    latest
                }
            })?;

            let unread_count = related
                .iter()
                .filter(|m| m.receiver == user_id && !m.read)
                .count() as i64;

            Some(ConversationSummary {
                counterpart,
                last_message: last_message.clone(),
                unread_count,
            })
        })
        .collect::<Vec<ConversationSummary>>();

    conversations.sort_by(|a, b| b.last_message.created_at.cmp(&a.last_message.created_at));
    conversations
}
