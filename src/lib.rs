pub mod shared {
    pub mod core {
        pub mod primitives;
    }
    pub mod infrastructure {
        pub mod remote_store;
        pub mod session;
    }
}

pub mod modules {
    pub mod weekly_metrics {
        pub mod core {
            pub mod aggregation;
            pub mod dashboard;
            pub mod format;
            pub mod record;
            pub mod sample_data;
            pub mod views;
        }
        pub mod use_cases {
            pub mod record_week {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod view_dashboard {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod document_mapper;
            }
        }
    }
}

pub mod shell;
