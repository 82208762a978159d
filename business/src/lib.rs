pub mod application {
    pub mod cart {
        pub mod add_item;
        pub mod decrement;
        pub mod get;
        pub mod increment;
        pub mod remove_item;
        pub mod write_lock;
    }
    pub mod checkout {
        pub mod checkout;
    }
    pub mod restaurant {
        pub mod get_detail;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod value_objects;
    }
    pub mod cart {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod store;
        pub mod summary;
        pub mod use_cases {
            pub mod add_item;
            pub mod decrement;
            pub mod get;
            pub mod increment;
            pub mod remove_item;
        }
    }
    pub mod checkout {
        pub mod errors;
        pub mod in_flight;
        pub mod model;
        pub mod services;
        pub mod use_cases {
            pub mod checkout;
        }
    }
    pub mod restaurant {
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod use_cases {
            pub mod get_detail;
        }
    }
}
