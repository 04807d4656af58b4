pub mod domain_event;
pub mod time_entry_clocked_in_v1;
