use crate::modules::time_entries::core::events::TimeEntryEvent;
use crate::modules::time_entries::core::state::{TimeEntry, TimeEntryState};
use crate::modules::time_entries::core::status::TimeEntryStatus;

pub fn evolve(state: TimeEntryState, event: TimeEntryEvent) -> TimeEntryState {
    match (state, event) {
        (TimeEntryState::None, TimeEntryEvent::TimeEntryClockedInV1(e)) => {
            TimeEntryState::Recorded(TimeEntry {
                time_entry_id: e.time_entry_id,
                employee_id: e.employee_id,
                start_time: e.start_time,
                end_time: None,
                job_location: e.job_location,
                scheduled_job_location_id: e.scheduled_job_location_id,
                description: e.description,
                status: TimeEntryStatus::Draft,
                total_hours: None,
                manager_notes: None,
                rejection_reason: None,
                created_at: e.occurred_at,
                created_by: e.actor.clone(),
                updated_at: e.occurred_at,
                updated_by: e.actor,
            })
        }
        (TimeEntryState::Recorded(mut entry), TimeEntryEvent::TimeEntryClockedOutV1(e)) => {
            entry.end_time = Some(e.end_time);
            entry.total_hours = Some(e.total_hours);
            touch(&mut entry, e.occurred_at, e.actor);
            TimeEntryState::Recorded(entry)
        }
        (TimeEntryState::Recorded(mut entry), TimeEntryEvent::TimeEntryEditedV1(e)) => {
            entry.start_time = e.start_time;
            entry.end_time = Some(e.end_time);
            entry.job_location = e.job_location;
            entry.description = e.description;
            entry.total_hours = Some(e.total_hours);
            if e.manager_notes.is_some() {
                entry.manager_notes = e.manager_notes;
            }
            touch(&mut entry, e.occurred_at, e.actor);
            TimeEntryState::Recorded(entry)
        }
        (TimeEntryState::Recorded(mut entry), TimeEntryEvent::TimeEntrySubmittedV1(e)) => {
            entry.status = TimeEntryStatus::Pending;
            touch(&mut entry, e.occurred_at, e.actor);
            TimeEntryState::Recorded(entry)
        }
        (TimeEntryState::Recorded(mut entry), TimeEntryEvent::TimeEntryApprovedV1(e)) => {
            entry.status = TimeEntryStatus::Approved;
            if e.note.is_some() {
                entry.manager_notes = e.note;
            }
            touch(&mut entry, e.occurred_at, e.actor);
            TimeEntryState::Recorded(entry)
        }
        (TimeEntryState::Recorded(mut entry), TimeEntryEvent::TimeEntryRejectedV1(e)) => {
            entry.status = TimeEntryStatus::Rejected;
            entry.rejection_reason = Some(e.reason);
            touch(&mut entry, e.occurred_at, e.actor);
            TimeEntryState::Recorded(entry)
        }
        (TimeEntryState::Recorded(_), TimeEntryEvent::TimeEntryDeletedV1(e)) => {
            TimeEntryState::Deleted {
                time_entry_id: e.time_entry_id,
                deleted_at: e.occurred_at,
            }
        }
        (state, _) => state,
    }
}

fn touch(entry: &mut TimeEntry, at: i64, by: String) {
    entry.updated_at = at;
    entry.updated_by = by;
}

#[cfg(test)]
mod time_entry_evolve_tests {
    use super::*;
    use crate::modules::time_entries::core::events::v1::{
        time_entry_approved::TimeEntryApprovedV1, time_entry_clocked_in::TimeEntryClockedInV1,
        time_entry_clocked_out::TimeEntryClockedOutV1, time_entry_deleted::TimeEntryDeletedV1,
        time_entry_rejected::TimeEntryRejectedV1, time_entry_submitted::TimeEntrySubmittedV1,
    };
    use crate::tests::fixtures::events::time_entry_clocked_in_v1::make_time_entry_clocked_in_v1_event;
    use rstest::{fixture, rstest};

    #[fixture]
    fn clocked_in() -> TimeEntryClockedInV1 {
        make_time_entry_clocked_in_v1_event()
    }

    fn fold(events: Vec<TimeEntryEvent>) -> TimeEntryState {
        events.into_iter().fold(TimeEntryState::None, evolve)
    }

    fn clocked_out(event: &TimeEntryClockedInV1) -> TimeEntryEvent {
        TimeEntryEvent::TimeEntryClockedOutV1(TimeEntryClockedOutV1 {
            time_entry_id: event.time_entry_id.clone(),
            end_time: event.start_time + 8 * 3_600_000,
            total_hours: 8.0,
            occurred_at: event.start_time + 8 * 3_600_000,
            actor: event.actor.clone(),
        })
    }

    #[rstest]
    fn it_should_evolve_to_a_draft_entry_on_clock_in(clocked_in: TimeEntryClockedInV1) {
        let state = fold(vec![TimeEntryEvent::TimeEntryClockedInV1(clocked_in.clone())]);
        let entry = state.entry().expect("expected a recorded entry");
        assert_eq!(entry.time_entry_id, clocked_in.time_entry_id);
        assert_eq!(entry.employee_id, clocked_in.employee_id);
        assert_eq!(entry.status, TimeEntryStatus::Draft);
        assert_eq!(entry.end_time, None);
        assert_eq!(entry.created_at, clocked_in.occurred_at);
    }

    #[rstest]
    fn it_should_record_the_end_time_on_clock_out(clocked_in: TimeEntryClockedInV1) {
        let state = fold(vec![
            TimeEntryEvent::TimeEntryClockedInV1(clocked_in.clone()),
            clocked_out(&clocked_in),
        ]);
        let entry = state.entry().unwrap();
        assert_eq!(entry.end_time, Some(clocked_in.start_time + 8 * 3_600_000));
        assert_eq!(entry.total_hours, Some(8.0));
    }

    #[rstest]
    fn it_should_walk_the_approval_lifecycle(clocked_in: TimeEntryClockedInV1) {
        let id = clocked_in.time_entry_id.clone();
        let state = fold(vec![
            TimeEntryEvent::TimeEntryClockedInV1(clocked_in.clone()),
            clocked_out(&clocked_in),
            TimeEntryEvent::TimeEntrySubmittedV1(TimeEntrySubmittedV1 {
                time_entry_id: id.clone(),
                occurred_at: 1,
                actor: "emp".into(),
            }),
            TimeEntryEvent::TimeEntryApprovedV1(TimeEntryApprovedV1 {
                time_entry_id: id,
                note: Some("Looks good".into()),
                occurred_at: 2,
                actor: "mgr".into(),
            }),
        ]);
        let entry = state.entry().unwrap();
        assert_eq!(entry.status, TimeEntryStatus::Approved);
        assert_eq!(entry.manager_notes.as_deref(), Some("Looks good"));
        assert_eq!(entry.updated_by, "mgr");
        assert_eq!(entry.start_time, clocked_in.start_time);
        assert_eq!(entry.job_location, clocked_in.job_location);
    }

    #[rstest]
    fn it_should_keep_the_rejection_reason(clocked_in: TimeEntryClockedInV1) {
        let id = clocked_in.time_entry_id.clone();
        let state = fold(vec![
            TimeEntryEvent::TimeEntryClockedInV1(clocked_in),
            TimeEntryEvent::TimeEntrySubmittedV1(TimeEntrySubmittedV1 {
                time_entry_id: id.clone(),
                occurred_at: 1,
                actor: "emp".into(),
            }),
            TimeEntryEvent::TimeEntryRejectedV1(TimeEntryRejectedV1 {
                time_entry_id: id,
                reason: "Wrong site".into(),
                occurred_at: 2,
                actor: "mgr".into(),
            }),
        ]);
        let entry = state.entry().unwrap();
        assert_eq!(entry.status, TimeEntryStatus::Rejected);
        assert_eq!(entry.rejection_reason.as_deref(), Some("Wrong site"));
    }

    #[rstest]
    fn it_should_mark_the_stream_deleted(clocked_in: TimeEntryClockedInV1) {
        let id = clocked_in.time_entry_id.clone();
        let state = fold(vec![
            TimeEntryEvent::TimeEntryClockedInV1(clocked_in),
            TimeEntryEvent::TimeEntryDeletedV1(TimeEntryDeletedV1 {
                time_entry_id: id.clone(),
                occurred_at: 5,
                actor: "emp".into(),
            }),
        ]);
        assert_eq!(
            state,
            TimeEntryState::Deleted {
                time_entry_id: id,
                deleted_at: 5
            }
        );
    }

    #[rstest]
    fn it_should_not_change_on_duplicate_clock_in(clocked_in: TimeEntryClockedInV1) {
        let registered = fold(vec![TimeEntryEvent::TimeEntryClockedInV1(clocked_in.clone())]);
        let mut other = clocked_in;
        other.job_location = "Elsewhere".into();
        let next = evolve(registered.clone(), TimeEntryEvent::TimeEntryClockedInV1(other));
        assert_eq!(next, registered, "state should be unchanged by fallback arm");
    }
}
