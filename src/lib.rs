pub mod shared {
    pub mod infrastructure {
        pub mod http;
    }
}

pub mod modules {
    pub mod time_entries {
        pub mod core {
            pub mod ports;
            pub mod time_entry;
            pub mod validation;
        }
        pub mod use_cases {
            pub mod errors;
            pub mod create_time_entry {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod update_time_entry {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod partial_update_time_entry {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_time_entries {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod get_time_entry {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_time_entry {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod problem;
            }
            pub mod outbound {
                pub mod repository_in_memory;
                pub mod repository_postgres;
            }
        }
    }
}

pub mod shell;
