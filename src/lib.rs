pub mod shared {
    pub mod core {
        pub mod errors;
        pub mod ports;
        pub mod validation;
    }
    pub mod inbound {
        pub mod http;
    }
}

pub mod modules {
    pub mod customers {
        pub mod core {
            pub mod customer;
            pub mod ports;
            pub mod views;
        }
        pub mod use_cases {
            pub mod register_customer {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod find_customer_by_id {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod update_customer {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_customer {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod in_memory;
            }
        }
    }
    pub mod credits {
        pub mod core {
            pub mod credit;
            pub mod ports;
            pub mod views;
        }
        pub mod use_cases {
            pub mod request_credit {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_credits_by_customer {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod find_credit_by_code {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod in_memory;
            }
        }
    }
}

pub mod shell;
