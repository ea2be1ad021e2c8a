pub mod application {
    pub mod identity {
        pub mod initialize;
        pub mod issue_custom_token;
        pub mod verify_token;
    }
}

pub mod domain {
    pub mod logger;
    pub mod identity {
        pub mod errors;
        pub mod model;
        pub mod private_key;
        pub mod services;
        pub mod use_cases {
            pub mod initialize;
            pub mod issue_custom_token;
            pub mod verify_token;
        }
    }
}
