pub mod application {
    pub mod order {
        pub mod get_recent_confirmed;
        pub mod place;
    }
    pub mod product {
        pub mod get_all;
        pub mod get_by_id;
        pub mod search;
    }
    pub mod shared {
        pub mod timeout;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod order {
        pub mod errors;
        pub mod model;
        pub mod placement;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod get_recent_confirmed;
            pub mod place;
        }
    }
    pub mod product {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod get_all;
            pub mod get_by_id;
            pub mod search;
        }
    }
}
