pub mod shared {
    pub mod core {
        pub mod clock_time;
        pub mod errors;
        pub mod primitives;
    }
    pub mod infrastructure {
        pub mod actor;
        pub mod event_store;
        pub mod graphql_error;
        pub mod http_error;
        pub mod intent_outbox;
        pub mod store;
    }
}

pub mod modules {
    pub mod time_entries {
        pub mod core {
            pub mod decision;
            pub mod events;
            pub mod evolve;
            pub mod intents;
            pub mod projections;
            pub mod state;
            pub mod status;
        }
        pub mod use_cases {
            pub mod command_handler;
            pub mod clock_in {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod clock_out {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod edit_time_entry {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_time_entry {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod submit_time_entry {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod approve_time_entry {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod reject_time_entry {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod bulk_approve_time_entries {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod list_time_entries {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
                pub mod projection;
                pub mod queries_port;
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod graphql;
                pub mod http;
            }
            pub mod outbound {
                pub mod intent_outbox;
                pub mod projections;
                pub mod projections_in_memory;
            }
        }
    }

    pub mod scheduling {
        pub mod core {
            pub mod day_of_week;
            pub mod expander;
            pub mod schedule_status;
            pub mod scheduled_job_location;
            pub mod shift;
            pub mod template;
        }
        pub mod use_cases {
            pub mod errors;
            pub mod manage_templates {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod apply_template {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod list_scheduled_shifts {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod scheduled_job_locations {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod stores;
                pub mod stores_in_memory;
            }
        }
    }

    pub mod directory {
        pub mod core {
            pub mod employee_type;
            pub mod job_location;
        }
        pub mod use_cases {
            pub mod errors;
            pub mod list_employee_types {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod manage_job_locations {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod stores;
                pub mod stores_in_memory;
            }
        }
    }
}

pub mod shell;
