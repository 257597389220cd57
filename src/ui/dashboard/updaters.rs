//! Dashboard state update logic
//!
//! Contains all methods for updating dashboard state from events

use super::state::DashboardState;

use crate::events::{Event as WorkerEvent, EventType, PollOutcome, PollTrigger, Worker};

impl DashboardState {
    /// Update the dashboard state with new tick and queued events.
    pub fn update(&mut self) {
        self.tick += 1;

        // Process all queued events one by one
        while let Some(event) = self.pending_events.pop_front() {
            // Add to activity logs for display
            self.add_to_activity_log(event.clone());

            // Process the event for state updates
            self.process_event(&event);
        }
    }

    /// Process a single event and update relevant state
    fn process_event(&mut self, event: &WorkerEvent) {
        if let Some(outcome) = &event.outcome {
            // A completed fetch, stale or not, means nothing is in flight
            // and the scheduled countdown restarts from its completion.
            self.set_sync_in_flight(false);
            if outcome.trigger == PollTrigger::Scheduled {
                self.mark_scheduled_poll();
            }
            self.apply_outcome(outcome.clone(), &event.timestamp);
        } else if event.worker == Worker::Poller && event.event_type == EventType::Refresh {
            self.set_sync_in_flight(true);
        }
    }

    /// Apply one completed poll.
    ///
    /// Outcomes may arrive out of order when polls overlap; anything not
    /// newer than the freshest applied seq is dropped. A success replaces
    /// the records wholesale, a failure only clears the connection flag and
    /// leaves the last good records on screen.
    fn apply_outcome(&mut self, outcome: PollOutcome, timestamp: &str) {
        if let Some(last) = self.last_applied_seq() {
            if outcome.seq <= last {
                return;
            }
        }
        self.set_last_applied_seq(outcome.seq);

        match outcome.deposits {
            Some(deposits) => {
                self.is_connected = true;
                self.set_last_synced_at(timestamp.to_string());
                // An empty fetch keeps the previous head block
                if let Some(first) = deposits.first() {
                    self.last_block = Some(first.block_number);
                }
                self.deposits = deposits;
                self.clamp_selection();
            }
            None => {
                self.is_connected = false;
            }
        }
        self.refresh_ticker();
    }

    /// Keep the highlight on a real row after the list changes size.
    fn clamp_selection(&mut self) {
        if self.deposits.is_empty() {
            self.selected_row = 0;
        } else if self.selected_row >= self.deposits.len() {
            self.selected_row = self.deposits.len() - 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::deposit::Deposit;
    use crate::environment::Environment;
    use crate::events::{Event, PollOutcome, PollTrigger};
    use crate::ui::app::UIConfig;
    use crate::ui::dashboard::DashboardState;
    use std::time::{Duration, Instant};

    fn test_state() -> DashboardState {
        DashboardState::new(
            Environment::default(),
            Instant::now(),
            UIConfig::new(false, Duration::from_secs(20)),
        )
    }

    fn deposit(block_number: u64) -> Deposit {
        Deposit {
            block_number,
            block_timestamp: "2024-01-01T00:00:00Z".to_string(),
            fee: "0.01".to_string(),
            hash: format!("0x{:x}", block_number),
            pubkey: None,
        }
    }

    fn success(seq: u64, blocks: &[u64]) -> Event {
        let deposits = blocks.iter().map(|b| deposit(*b)).collect();
        Event::poll_success(
            "synced".to_string(),
            PollOutcome::success(seq, PollTrigger::Scheduled, deposits),
        )
    }

    fn failure(seq: u64) -> Event {
        Event::poll_failure(
            "fetch failed".to_string(),
            crate::error_classifier::LogLevel::Warn,
            PollOutcome::failure(seq, PollTrigger::Scheduled),
        )
    }

    #[test]
    // A successful poll replaces the records, connects, and tracks the head block.
    fn success_replaces_records_and_connects() {
        let mut state = test_state();
        assert!(!state.is_connected);
        assert_eq!(state.last_block, None);

        state.add_event(success(0, &[120, 119, 118]));
        state.update();

        assert!(state.is_connected);
        assert_eq!(state.deposits.len(), 3);
        assert_eq!(state.last_block, Some(120));
        assert!(state.last_synced_at().is_some());
    }

    #[test]
    // An empty successful poll connects but keeps the previous head block.
    fn empty_success_keeps_last_block() {
        let mut state = test_state();
        state.add_event(success(0, &[120]));
        state.add_event(success(1, &[]));
        state.update();

        assert!(state.is_connected);
        assert!(state.deposits.is_empty());
        assert_eq!(state.last_block, Some(120));
    }

    #[test]
    // A failed poll disconnects but leaves the last good records on screen.
    fn failure_keeps_records_and_disconnects() {
        let mut state = test_state();
        state.add_event(success(0, &[120, 119]));
        state.update();
        state.add_event(failure(1));
        state.update();

        assert!(!state.is_connected);
        assert_eq!(state.deposits.len(), 2);
        assert_eq!(state.last_block, Some(120));
    }

    #[test]
    // A slow poll completing after a newer one must not clobber its result.
    fn stale_outcome_is_dropped() {
        let mut state = test_state();
        state.add_event(success(1, &[200]));
        state.update();

        // seq 0 straggles in after seq 1 was applied
        state.add_event(success(0, &[100]));
        state.update();

        assert_eq!(state.last_block, Some(200));
        assert_eq!(state.deposits[0].block_number, 200);
        assert_eq!(state.last_applied_seq(), Some(1));
    }

    #[test]
    // A stale success must not overwrite a newer failure's disconnected state.
    fn stale_success_does_not_restore_connection() {
        let mut state = test_state();
        state.add_event(failure(1));
        state.update();
        state.add_event(success(0, &[100]));
        state.update();

        assert!(!state.is_connected);
        assert!(state.deposits.is_empty());
    }

    #[test]
    // Switching views is purely cosmetic.
    fn toggle_view_leaves_data_untouched() {
        let mut state = test_state();
        state.add_event(success(0, &[120, 119]));
        state.update();

        let before_deposits = state.deposits.clone();
        let before_connected = state.is_connected;
        let before_block = state.last_block;

        state.toggle_view();

        assert_eq!(state.deposits, before_deposits);
        assert_eq!(state.is_connected, before_connected);
        assert_eq!(state.last_block, before_block);
    }

    #[test]
    // The detail view holds a captured record even after a refresh drops it.
    fn details_survive_refresh() {
        let mut state = test_state();
        state.add_event(success(0, &[120, 119]));
        state.update();

        state.select_next();
        state.open_details();
        assert_eq!(state.details().map(|d| d.block_number), Some(119));

        state.add_event(success(1, &[121]));
        state.update();

        assert_eq!(state.details().map(|d| d.block_number), Some(119));

        state.close_details();
        assert!(state.details().is_none());
    }

    #[test]
    // The highlight stays on a real row when the list shrinks.
    fn selection_clamped_when_list_shrinks() {
        let mut state = test_state();
        state.add_event(success(0, &[5, 4, 3, 2, 1]));
        state.update();
        for _ in 0..4 {
            state.select_next();
        }
        assert_eq!(state.selected_row, 4);

        state.add_event(success(1, &[6, 5]));
        state.update();
        assert_eq!(state.selected_row, 1);
    }

    #[test]
    // The in-flight flag follows fetch start and completion events.
    fn refresh_marks_sync_in_flight_until_outcome() {
        let mut state = test_state();
        assert!(!state.sync_in_flight());

        state.add_event(Event::poller(
            "Fetching deposits (scheduled)".to_string(),
            crate::events::EventType::Refresh,
        ));
        state.update();
        assert!(state.sync_in_flight());

        state.add_event(success(0, &[100]));
        state.update();
        assert!(!state.sync_in_flight());
    }

    #[test]
    // Manual syncs never move the scheduled countdown anchor.
    fn manual_outcomes_do_not_anchor_countdown() {
        let mut state = test_state();
        assert_eq!(state.next_sync_fraction(), None);

        let manual = Event::poll_success(
            "synced".to_string(),
            PollOutcome::success(0, PollTrigger::Manual, vec![deposit(50)]),
        );
        state.add_event(manual);
        state.update();
        assert_eq!(state.next_sync_fraction(), None);

        state.add_event(success(1, &[51]));
        state.update();
        let fraction = state.next_sync_fraction().unwrap();
        assert!(fraction > 0.9 && fraction <= 1.0);
    }

    #[test]
    // Events without an outcome only land in the activity log.
    fn lifecycle_events_do_not_touch_data() {
        let mut state = test_state();
        state.add_event(Event::poller(
            "Polling http://localhost:3000 every 20s".to_string(),
            crate::events::EventType::Refresh,
        ));
        state.update();

        assert!(!state.is_connected);
        assert!(state.deposits.is_empty());
        assert_eq!(state.activity_logs.len(), 1);
        assert_eq!(state.last_applied_seq(), None);
    }
}
