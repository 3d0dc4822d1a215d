pub mod application {
    pub mod popup_cart {
        pub mod get_carousel_options;
        pub mod get_section_data;
        pub mod get_settings;
        pub mod update_settings;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod value_objects;
    }
    pub mod catalog {
        pub mod decorator;
        pub mod model;
        pub mod money;
        pub mod query;
        pub mod repository;
        pub mod value_objects;
    }
    pub mod sales {
        pub mod model;
        pub mod repository;
    }
    pub mod cart {
        pub mod model;
        pub mod repository;
    }
    pub mod popup_cart {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod selection;
        pub mod settings;
        pub mod strategy;
        pub mod use_cases {
            pub mod get_carousel_options;
            pub mod get_section_data;
            pub mod get_settings;
            pub mod update_settings;
        }
    }
}
