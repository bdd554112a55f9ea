pub mod application {
    pub mod wishlist {
        pub mod add_items;
        pub mod decrease_items;
        pub mod increase_items;
        pub mod remove_items;
    }
}

pub mod domain {
    pub mod logger;
    pub mod product {
        pub mod errors;
        pub mod services;
    }
    pub mod wishlist {
        pub mod aggregation;
        pub mod errors;
        pub mod model;
        pub mod plugins;
        pub mod use_cases {
            pub mod add_items;
            pub mod decrease_items;
            pub mod increase_items;
            pub mod remove_items;
        }
    }
}
