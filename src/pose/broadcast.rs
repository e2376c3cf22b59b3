// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Pose broadcast bus
//!
//! The movement panel publishes poses; controllers subscribe. This is
//! the typed replacement for the original's ambient page event: the
//! payload is a concrete struct and the subscriber contract is spelled
//! out on [`PoseBus::subscribe`].

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use tokio::sync::broadcast;
use uuid::Uuid;

use crate::pose::Pose;

/// Published pose payload.
#[derive(Debug, Clone, PartialEq)]
pub struct PoseEvent {
    /// Unique event id.
    pub id: Uuid,
    /// Publishing component, e.g. `"movement-panel"`.
    pub source: String,
    /// The (possibly partial) pose being sent.
    pub pose: Pose,
    /// Free-form metadata: preset name, quick action, ...
    pub meta: BTreeMap<String, String>,
    /// Publish time.
    pub timestamp: DateTime<Utc>,
}

/// Broadcast channel for [`PoseEvent`]s.
#[derive(Debug, Clone)]
pub struct PoseBus {
    tx: broadcast::Sender<PoseEvent>,
}

impl PoseBus {
    /// `capacity` is the per-subscriber buffer; slow subscribers that
    /// fall further behind lose oldest events (broadcast semantics).
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Publish a pose. Returns the event actually sent (with id and
    /// timestamp filled in). Publishing with no subscribers is fine —
    /// the bus is an extension point, not a required pipeline.
    pub fn publish(
        &self,
        source: impl Into<String>,
        pose: Pose,
        meta: BTreeMap<String, String>,
    ) -> PoseEvent {
        let event = PoseEvent {
            id: Uuid::new_v4(),
            source: source.into(),
            pose,
            meta,
            timestamp: Utc::now(),
        };
        let _ = self.tx.send(event.clone());
        event
    }

    /// Subscribe to future pose events.
    ///
    /// Contract: subscribers receive every event published after the
    /// subscription, in publish order, unless they lag more than the
    /// bus capacity (in which case the receiver reports the gap). The
    /// pose in an event may be partial; consumers merge it over their
    /// current state.
    pub fn subscribe(&self) -> broadcast::Receiver<PoseEvent> {
        self.tx.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for PoseBus {
    fn default() -> Self {
        Self::new(16)
    }
}

/// Convenience: metadata map from one key/value pair.
pub fn meta(key: &str, value: &str) -> BTreeMap<String, String> {
    let mut map = BTreeMap::new();
    map.insert(key.to_string(), value.to_string());
    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pose::{Joint, PosePreset};

    #[tokio::test]
    async fn test_publish_reaches_subscriber() {
        let bus = PoseBus::default();
        let mut rx = bus.subscribe();

        let sent = bus.publish(
            "movement-panel",
            PosePreset::Wave.pose(),
            meta("preset", "wave"),
        );
        let got = rx.recv().await.unwrap();
        assert_eq!(got, sent);
        assert_eq!(got.source, "movement-panel");
        assert_eq!(got.meta.get("preset").map(String::as_str), Some("wave"));
        assert_eq!(got.pose.get(Joint::LeftHand), Some(30.0));
    }

    #[tokio::test]
    async fn test_publish_without_subscribers_is_fine() {
        let bus = PoseBus::default();
        let event = bus.publish("movement-panel", Pose::initial(), BTreeMap::new());
        assert_eq!(event.source, "movement-panel");
        assert_eq!(bus.subscriber_count(), 0);
    }

    #[tokio::test]
    async fn test_events_arrive_in_publish_order() {
        let bus = PoseBus::default();
        let mut rx = bus.subscribe();
        let a = bus.publish("panel", Pose::new(), meta("action", "center_head"));
        let b = bus.publish("panel", Pose::new(), meta("action", "look_right"));
        assert_eq!(rx.recv().await.unwrap().id, a.id);
        assert_eq!(rx.recv().await.unwrap().id, b.id);
    }
}
