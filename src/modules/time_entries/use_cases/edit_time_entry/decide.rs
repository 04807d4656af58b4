use crate::modules::time_entries::core::decision::{DecideError, Decision};
use crate::modules::time_entries::core::events::TimeEntryEvent;
use crate::modules::time_entries::core::events::v1::time_entry_edited::{
    Editor, TimeEntryEditedV1,
};
use crate::modules::time_entries::core::state::TimeEntryState;
use crate::modules::time_entries::core::status::TimeEntryStatus;
use crate::modules::time_entries::use_cases::edit_time_entry::command::EditTimeEntry;
use crate::shared::core::primitives::{hours_between, non_blank};

fn can_edit(editor: Editor, status: TimeEntryStatus) -> bool {
    match editor {
        Editor::Employee => status == TimeEntryStatus::Draft,
        Editor::Manager => matches!(status, TimeEntryStatus::Draft | TimeEntryStatus::Pending),
    }
}

pub fn decide_edit(state: &TimeEntryState, command: EditTimeEntry) -> Decision {
    let Some(entry) = state.entry() else {
        return Decision::reject(DecideError::NotFound);
    };
    if !can_edit(command.editor, entry.status) {
        return Decision::reject(DecideError::NotEditable {
            status: entry.status,
            editor: command.editor,
        });
    }
    let Some(start_time) = command.start_time else {
        return Decision::reject(DecideError::MissingRequiredField("start_time"));
    };
    let Some(end_time) = command.end_time else {
        return Decision::reject(DecideError::MissingRequiredField("end_time"));
    };
    let Some(job_location) = non_blank(command.job_location) else {
        return Decision::reject(DecideError::MissingRequiredField("job_location"));
    };
    let Some(total_hours) = hours_between(start_time, end_time) else {
        return Decision::reject(DecideError::InvalidInterval);
    };

    let manager_notes = match command.editor {
        Editor::Manager => non_blank(command.manager_notes),
        Editor::Employee => None,
    };

    Decision::accept(TimeEntryEvent::TimeEntryEditedV1(TimeEntryEditedV1 {
        time_entry_id: command.time_entry_id,
        editor: command.editor,
        start_time,
        end_time,
        job_location,
        description: command
            .description
            .map(|d| d.trim().to_string())
            .unwrap_or_else(|| entry.description.clone()),
        total_hours,
        manager_notes,
        occurred_at: command.occurred_at,
        actor: command.actor,
    }))
}

#[cfg(test)]
mod time_entry_edit_decide_tests {
    use super::*;
    use crate::modules::time_entries::core::state::TimeEntry;
    use crate::tests::fixtures::state::make_draft_time_entry;
    use rstest::{fixture, rstest};

    const HOUR: i64 = 3_600_000;

    #[fixture]
    fn before_each() -> (TimeEntry, EditTimeEntry) {
        let entry = make_draft_time_entry();
        let command = EditTimeEntry {
            time_entry_id: entry.time_entry_id.clone(),
            editor: Editor::Employee,
            start_time: Some(entry.start_time + HOUR),
            end_time: Some(entry.start_time + 5 * HOUR),
            job_location: Some("Warehouse North".into()),
            description: None,
            manager_notes: Some("ignored for employees".into()),
            occurred_at: entry.start_time + 6 * HOUR,
            actor: entry.employee_id.clone(),
        };
        (entry, command)
    }

    fn edited(decision: Decision) -> TimeEntryEditedV1 {
        match decision {
            Decision::Accepted { events, .. } => match events.as_slice() {
                [TimeEntryEvent::TimeEntryEditedV1(e)] => e.clone(),
                other => panic!("unexpected events {other:?}"),
            },
            Decision::Rejected { reason } => panic!("unexpected rejection: {reason}"),
        }
    }

    fn reason(decision: Decision) -> DecideError {
        match decision {
            Decision::Rejected { reason } => reason,
            Decision::Accepted { .. } => panic!("expected a rejection"),
        }
    }

    #[rstest]
    fn it_should_recompute_hours_and_keep_the_description(before_each: (TimeEntry, EditTimeEntry)) {
        let (entry, command) = before_each;
        let event = edited(decide_edit(&TimeEntryState::Recorded(entry.clone()), command));
        assert_eq!(event.total_hours, 4.0);
        assert_eq!(event.job_location, "Warehouse North");
        assert_eq!(event.description, entry.description);
        assert_eq!(event.manager_notes, None);
    }

    #[rstest]
    #[case(Editor::Employee, TimeEntryStatus::Draft, true)]
    #[case(Editor::Employee, TimeEntryStatus::Pending, false)]
    #[case(Editor::Manager, TimeEntryStatus::Pending, true)]
    #[case(Editor::Manager, TimeEntryStatus::Approved, false)]
    #[case(Editor::Manager, TimeEntryStatus::Rejected, false)]
    fn it_should_guard_who_edits_what(
        before_each: (TimeEntry, EditTimeEntry),
        #[case] editor: Editor,
        #[case] status: TimeEntryStatus,
        #[case] allowed: bool,
    ) {
        let (mut entry, mut command) = before_each;
        entry.status = status;
        command.editor = editor;
        let decision = decide_edit(&TimeEntryState::Recorded(entry), command);
        match decision {
            Decision::Accepted { .. } => assert!(allowed),
            Decision::Rejected { reason } => {
                assert!(!allowed);
                assert_eq!(reason, DecideError::NotEditable { status, editor });
            }
        }
    }

    #[rstest]
    fn it_should_keep_manager_notes_from_managers(before_each: (TimeEntry, EditTimeEntry)) {
        let (entry, mut command) = before_each;
        command.editor = Editor::Manager;
        command.manager_notes = Some(" Fixed the start ".into());
        let event = edited(decide_edit(&TimeEntryState::Recorded(entry), command));
        assert_eq!(event.manager_notes.as_deref(), Some("Fixed the start"));
    }

    #[rstest]
    fn it_should_require_start_end_and_location(before_each: (TimeEntry, EditTimeEntry)) {
        let (entry, command) = before_each;
        let state = TimeEntryState::Recorded(entry);

        let mut missing_start = command.clone();
        missing_start.start_time = None;
        assert_eq!(
            reason(decide_edit(&state, missing_start)),
            DecideError::MissingRequiredField("start_time")
        );

        let mut missing_end = command.clone();
        missing_end.end_time = None;
        assert_eq!(
            reason(decide_edit(&state, missing_end)),
            DecideError::MissingRequiredField("end_time")
        );

        let mut blank_location = command;
        blank_location.job_location = Some(" ".into());
        assert_eq!(
            reason(decide_edit(&state, blank_location)),
            DecideError::MissingRequiredField("job_location")
        );
    }

    #[rstest]
    fn it_should_reject_an_inverted_interval(before_each: (TimeEntry, EditTimeEntry)) {
        let (entry, mut command) = before_each;
        std::mem::swap(&mut command.start_time, &mut command.end_time);
        assert_eq!(
            reason(decide_edit(&TimeEntryState::Recorded(entry), command)),
            DecideError::InvalidInterval
        );
    }

    #[rstest]
    fn it_should_reject_an_interval_too_wide_to_measure(before_each: (TimeEntry, EditTimeEntry)) {
        let (entry, mut command) = before_each;
        command.start_time = Some(i64::MIN);
        command.end_time = Some(i64::MAX);
        assert_eq!(
            reason(decide_edit(&TimeEntryState::Recorded(entry), command)),
            DecideError::InvalidInterval
        );
    }

    #[rstest]
    fn it_should_reject_an_unknown_entry(before_each: (TimeEntry, EditTimeEntry)) {
        let (_, command) = before_each;
        assert_eq!(
            reason(decide_edit(&TimeEntryState::None, command)),
            DecideError::NotFound
        );
    }
}
