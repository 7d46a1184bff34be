pub mod application {
    pub mod product {
        pub mod lookup;
    }
    pub mod scan {
        pub mod detect;
        pub mod scan_image;
    }
}

pub mod domain {
    pub mod logger;
    pub mod product {
        pub mod catalog;
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod use_cases {
            pub mod lookup;
        }
    }
    pub mod scan {
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod use_cases {
            pub mod detect;
            pub mod scan_image;
        }
    }
}
